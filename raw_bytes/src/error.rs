use thiserror::Error;

/// Container errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Byte range reaches past the end of the data region
    #[error("range {start}..{end} out of bounds for data region of {len} bytes")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// Raw buffer is shorter than the header it is supposed to carry
    #[error("buffer of {found} bytes cannot hold a {header_len}-byte header")]
    TooSmall { found: usize, header_len: usize },

    #[error("data region cannot shrink from {current} to {requested} bytes")]
    Shrink { current: usize, requested: usize },
}
