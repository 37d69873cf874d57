use crate::ContainerError;
use core::ops::Range;

/// A single owned byte allocation viewed as two adjacent regions.
///
/// The header region has a fixed length chosen at construction. The data
/// region follows it and can only grow. Both regions are handed out as
/// borrowed slices, so a view can never outlive a reallocation.
///
/// # Examples
///
/// ```
/// use raw_bytes::Container;
///
/// let bytes = vec![0x01, 0x02, 0x03, 0x04];
/// let storage = Container::from_vec(bytes, 1).unwrap();
///
/// assert_eq!(storage.header(), &[0x01]);
/// assert_eq!(storage.data(), &[0x02, 0x03, 0x04]);
/// assert_eq!(storage.data_range(1..3).unwrap(), &[0x03, 0x04]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    bytes: Vec<u8>,
    header_len: usize,
}

impl Container {
    /// Creates a zero-filled container with the given region lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::Container;
    ///
    /// let storage = Container::with_regions(1, 4);
    /// assert_eq!(storage.len(), 5);
    /// assert!(storage.as_slice().iter().all(|&b| b == 0));
    /// ```
    pub fn with_regions(header_len: usize, data_len: usize) -> Self {
        Container {
            bytes: vec![0u8; header_len + data_len],
            header_len,
        }
    }

    /// Wraps an existing buffer, treating its first `header_len` bytes as the
    /// header region.
    pub fn from_vec(bytes: Vec<u8>, header_len: usize) -> Result<Self, ContainerError> {
        if bytes.len() < header_len {
            return Err(ContainerError::TooSmall {
                found: bytes.len(),
                header_len,
            });
        }
        Ok(Container { bytes, header_len })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    #[inline]
    pub fn data_len(&self) -> usize {
        self.bytes.len() - self.header_len
    }

    pub fn header(&self) -> &[u8] {
        &self.bytes[..self.header_len]
    }

    pub fn header_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.header_len]
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes[self.header_len..]
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[self.header_len..]
    }

    /// Borrows `range` of the data region (offsets relative to its start).
    pub fn data_range(&self, range: Range<usize>) -> Result<&[u8], ContainerError> {
        self.check_range(&range)?;
        Ok(&self.data()[range])
    }

    /// Mutably borrows `range` of the data region.
    pub fn data_range_mut(&mut self, range: Range<usize>) -> Result<&mut [u8], ContainerError> {
        self.check_range(&range)?;
        Ok(&mut self.data_mut()[range])
    }

    /// Reallocates so the data region is `new_data_len` bytes long.
    ///
    /// Existing bytes (header and data) are copied verbatim into the new
    /// allocation and the added tail is zero-filled. Growing to the current
    /// length is a no-op; shrinking is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::{Container, ContainerError};
    ///
    /// let mut storage = Container::with_regions(1, 2);
    /// storage.data_mut().copy_from_slice(&[7, 9]);
    /// storage.grow_data(4).unwrap();
    /// assert_eq!(storage.data(), &[7, 9, 0, 0]);
    ///
    /// assert!(matches!(storage.grow_data(1), Err(ContainerError::Shrink { .. })));
    /// ```
    pub fn grow_data(&mut self, new_data_len: usize) -> Result<(), ContainerError> {
        let current = self.data_len();
        if new_data_len < current {
            return Err(ContainerError::Shrink {
                current,
                requested: new_data_len,
            });
        }
        if new_data_len == current {
            return Ok(());
        }

        let total = self.header_len + new_data_len;
        let mut grown = Vec::with_capacity(total);
        grown.extend_from_slice(&self.bytes);
        grown.resize(total, 0);
        self.bytes = grown;
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), ContainerError> {
        let len = self.data_len();
        if range.start > range.end || range.end > len {
            return Err(ContainerError::OutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(())
    }
}
