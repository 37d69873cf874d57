use num_bigint::BigUint;
use raw_bytes::ContainerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackedStoreError {
    /// A construction parameter is outside what the store can represent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("value is bigger than {max}")]
    ValueOutOfRange { value: BigUint, max: BigUint },

    #[error(
        "index {index} is out of bounds: bytes {start}..{end} exceed the {len}-byte data region"
    )]
    IndexOutOfBounds {
        index: usize,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("index {index} overflows the addressable bit range at {width} bits per element")]
    IndexOverflow { index: usize, width: usize },

    #[error("header mismatch: expected {expected:02x?}, found {found:02x?}")]
    HeaderMismatch { expected: Vec<u8>, found: Vec<u8> },

    #[error("storage too small: need at least {needed} bytes, found {found}")]
    StorageTooSmall { needed: usize, found: usize },

    #[error("storage error: {0}")]
    Container(#[from] ContainerError),
}

pub type Result<T> = core::result::Result<T, PackedStoreError>;
