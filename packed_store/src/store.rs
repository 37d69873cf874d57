//! Growable bit-packed array behind a self-describing header.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use num_bigint::BigUint;
//! use packed_store::{PackedArrayStore, StoreConfig};
//!
//! let config = StoreConfig::new(1_563_669_060u32, 5, 10);
//! let mut store = PackedArrayStore::with_values(config, [520u32, 1023]).unwrap();
//!
//! store.write(3, 888u32).unwrap();
//! assert_eq!(store.read(3).unwrap(), BigUint::from(888u32));
//! assert_eq!(store.read(0).unwrap(), BigUint::from(520u32));
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use num_bigint::BigUint;
//! use packed_store::{PackedArrayStore, StoreConfig};
//!
//! let config = StoreConfig::default().with_data_bit_width(12);
//! let store = PackedArrayStore::with_values(config.clone(), [0xABCu32, 0x123]).unwrap();
//!
//! // The buffer is the wire format
//! let bytes = store.as_bytes().to_vec();
//!
//! let restored = PackedArrayStore::from_bytes(config, bytes).unwrap();
//! assert_eq!(restored.read(1).unwrap(), BigUint::from(0x123u32));
//! ```

use core::fmt;

use num_bigint::BigUint;
use raw_bytes::Container;
use tracing::{debug, trace};

use crate::config::StoreConfig;
use crate::error::{PackedStoreError, Result};
use crate::frame::{self, FrameSpan};
use crate::{header, render};

/// Elements every store has room for right after construction.
const MIN_CAPACITY: usize = 2;

#[derive(Debug, Clone)]
pub struct PackedArrayStore {
    version: BigUint,
    data_bit_width: usize,
    max_value: BigUint,
    storage: Container,
}

/// Bytes needed to hold `elements` values of `width` bits.
#[inline]
fn data_len_for(elements: usize, width: usize) -> usize {
    elements.max(MIN_CAPACITY).saturating_mul(width).div_ceil(8)
}

impl PackedArrayStore {
    /// Creates an empty store with room for two elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_store::{PackedArrayStore, StoreConfig};
    ///
    /// let store = PackedArrayStore::new(StoreConfig::default()).unwrap();
    /// assert_eq!(store.render(), "00101000 : 00000000 00000000 ");
    /// ```
    pub fn new(config: StoreConfig) -> Result<Self> {
        Self::with_values(config, core::iter::empty::<BigUint>())
    }

    /// Creates a store and writes `values` at indices `0..n`.
    ///
    /// The data region is sized for `max(n, 2)` elements. Fails with
    /// [`PackedStoreError::ValueOutOfRange`] if any value does not fit the
    /// configured width.
    pub fn with_values<I, V>(config: StoreConfig, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<BigUint>,
    {
        let version = config.validate()?;
        let values: Vec<BigUint> = values.into_iter().map(Into::into).collect();
        let width = config.data_bit_width;

        let mut storage =
            Container::with_regions(config.header_byte_size, data_len_for(values.len(), width));
        storage
            .header_mut()
            .copy_from_slice(&header::encode(&version, config.header_byte_size, width));

        let mut store = Self {
            version,
            data_bit_width: width,
            max_value: frame::mask(width),
            storage,
        };
        for (index, value) in values.into_iter().enumerate() {
            store.write(index, value)?;
        }

        trace!(
            header_byte_size = config.header_byte_size,
            data_bit_width = width,
            data_len = store.storage.data_len(),
            "created packed array store"
        );
        Ok(store)
    }

    /// Restores a store from bytes previously taken from [`as_bytes`](Self::as_bytes)
    /// or [`into_bytes`](Self::into_bytes).
    ///
    /// The header is not decoded: `config` must describe the buffer, and its
    /// encoded header must match the leading bytes exactly.
    pub fn from_bytes(config: StoreConfig, bytes: Vec<u8>) -> Result<Self> {
        let version = config.validate()?;
        let width = config.data_bit_width;
        let needed = config.header_byte_size + data_len_for(0, width);
        if bytes.len() < needed {
            return Err(PackedStoreError::StorageTooSmall {
                needed,
                found: bytes.len(),
            });
        }

        let storage = Container::from_vec(bytes, config.header_byte_size)?;
        let expected = header::encode(&version, config.header_byte_size, width);
        if storage.header() != expected.as_slice() {
            return Err(PackedStoreError::HeaderMismatch {
                expected,
                found: storage.header().to_vec(),
            });
        }

        Ok(Self {
            version,
            data_bit_width: width,
            max_value: frame::mask(width),
            storage,
        })
    }

    pub fn version(&self) -> &BigUint {
        &self.version
    }

    pub fn header_byte_size(&self) -> usize {
        self.storage.header_len()
    }

    pub fn data_bit_width(&self) -> usize {
        self.data_bit_width
    }

    /// Largest value an element can hold, `2^data_bit_width - 1`.
    pub fn max_value(&self) -> &BigUint {
        &self.max_value
    }

    /// Number of whole elements the allocated data region holds.
    ///
    /// Zero-width stores allocate no data bytes and report zero.
    pub fn capacity(&self) -> usize {
        if self.data_bit_width == 0 {
            return 0;
        }
        self.storage.data_len() * 8 / self.data_bit_width
    }

    /// Reads element `index`.
    ///
    /// # Errors
    ///
    /// [`PackedStoreError::IndexOutOfBounds`] if the element's bytes lie past
    /// the allocated data region. Reads never grow the buffer.
    pub fn read(&self, index: usize) -> Result<BigUint> {
        let span = self.locate(index)?;
        let len = self.storage.data_len();
        let frame = self
            .storage
            .data_range(span.bytes())
            .map_err(|_| PackedStoreError::IndexOutOfBounds {
                index,
                start: span.start_byte,
                end: span.end_byte,
                len,
            })?;
        Ok(frame::extract(frame, span.shift, self.data_bit_width))
    }

    /// Writes `value` at element `index`, growing the data region if the
    /// element lies past its end.
    ///
    /// # Errors
    ///
    /// [`PackedStoreError::ValueOutOfRange`] if `value > max_value()`. The
    /// buffer is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_store::{PackedArrayStore, PackedStoreError, StoreConfig};
    ///
    /// let mut store = PackedArrayStore::new(StoreConfig::default().with_data_bit_width(4)).unwrap();
    /// store.write(0, 15u8).unwrap();
    ///
    /// let err = store.write(1, 16u8).unwrap_err();
    /// assert!(matches!(err, PackedStoreError::ValueOutOfRange { .. }));
    /// assert_eq!(err.to_string(), "value is bigger than 15");
    /// ```
    pub fn write<V: Into<BigUint>>(&mut self, index: usize, value: V) -> Result<()> {
        let value = value.into();
        if value > self.max_value {
            return Err(PackedStoreError::ValueOutOfRange {
                value,
                max: self.max_value.clone(),
            });
        }

        let span = self.locate(index)?;
        self.ensure_data_len(span.end_byte)?;

        let width = self.data_bit_width;
        let frame = self.storage.data_range_mut(span.bytes())?;
        frame::insert(frame, span.shift, width, &value);
        Ok(())
    }

    /// Header bytes, unchanged since construction.
    pub fn header_bytes(&self) -> &[u8] {
        self.storage.header()
    }

    pub fn data_bytes(&self) -> &[u8] {
        self.storage.data()
    }

    /// The whole buffer: header followed by packed data.
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_slice()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.storage.into_vec()
    }

    /// Renders the buffer as binary text.
    ///
    /// Header bytes are printed as 8-bit groups, then `": "`, then the data
    /// region in groups of `data_bit_width` bits. Complete groups are followed
    /// by a space; padding bits past the last whole element are printed
    /// without one.
    pub fn render(&self) -> String {
        render::render(
            self.storage.header(),
            self.storage.data(),
            self.data_bit_width,
        )
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            index: 0,
        }
    }

    fn locate(&self, index: usize) -> Result<FrameSpan> {
        FrameSpan::locate(index, self.data_bit_width).ok_or(PackedStoreError::IndexOverflow {
            index,
            width: self.data_bit_width,
        })
    }

    /// Doubles the data region until it is at least `required` bytes long.
    fn ensure_data_len(&mut self, required: usize) -> Result<()> {
        let current = self.storage.data_len();
        if required <= current {
            return Ok(());
        }

        let mut grown = current.max(1);
        while grown < required {
            grown = grown.saturating_mul(2);
        }
        debug!(from = current, to = grown, "growing packed data region");
        self.storage.grow_data(grown)?;
        Ok(())
    }
}

impl fmt::Display for PackedArrayStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over every element slot the data region currently holds.
pub struct Iter<'a> {
    store: &'a PackedArrayStore,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.store.capacity() {
            return None;
        }
        let value = self.store.read(self.index).ok();
        self.index += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.capacity().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PackedArrayStore {
    type Item = BigUint;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
