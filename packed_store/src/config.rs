//! Construction parameters for a [`PackedArrayStore`](crate::PackedArrayStore).
//!
//! ```rust
//! use packed_store::StoreConfig;
//!
//! let config = StoreConfig::default()
//!     .with_version(3)
//!     .with_header_byte_size(2)
//!     .with_data_bit_width(12);
//!
//! assert_eq!(config.header_byte_size, 2);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{PackedStoreError, Result};
use num_bigint::{BigInt, BigUint};

/// Widest element the one-byte width field of the header can describe.
pub const MAX_DATA_BIT_WIDTH: usize = u8::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Format version written into the header. Must not be negative.
    pub version: BigInt,
    /// Length of the header region in bytes. Must be at least 1.
    pub header_byte_size: usize,
    /// Bits per element, `0..=255`.
    pub data_bit_width: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: BigInt::from(1u8),
            header_byte_size: 1,
            data_bit_width: 8,
        }
    }
}

impl StoreConfig {
    pub fn new(version: impl Into<BigInt>, header_byte_size: usize, data_bit_width: usize) -> Self {
        Self {
            version: version.into(),
            header_byte_size,
            data_bit_width,
        }
    }

    pub fn with_version(mut self, version: impl Into<BigInt>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_header_byte_size(mut self, header_byte_size: usize) -> Self {
        self.header_byte_size = header_byte_size;
        self
    }

    pub fn with_data_bit_width(mut self, data_bit_width: usize) -> Self {
        self.data_bit_width = data_bit_width;
        self
    }

    /// Checks every parameter and returns the version as an unsigned value.
    ///
    /// # Errors
    ///
    /// [`PackedStoreError::InvalidArgument`] if the version is negative, the
    /// header size is zero, or the bit width does not fit the header's width
    /// byte.
    pub fn validate(&self) -> Result<BigUint> {
        let version = self
            .version
            .to_biguint()
            .ok_or(PackedStoreError::InvalidArgument("version cannot be negative"))?;
        if self.header_byte_size == 0 {
            return Err(PackedStoreError::InvalidArgument(
                "header byte size must be positive",
            ));
        }
        if self.data_bit_width > MAX_DATA_BIT_WIDTH {
            return Err(PackedStoreError::InvalidArgument(
                "data bit width must fit in 8 bits",
            ));
        }
        Ok(version)
    }
}
