//! Owned byte storage split into a fixed-size header region and a growable
//! data region.
//!
//! ```rust
//! use raw_bytes::Container;
//!
//! let mut storage = Container::with_regions(2, 3);
//! storage.header_mut().copy_from_slice(&[0xAB, 0xCD]);
//! storage.data_mut()[0] = 0xFF;
//!
//! storage.grow_data(6).unwrap();
//! assert_eq!(storage.header(), &[0xAB, 0xCD]);
//! assert_eq!(storage.data(), &[0xFF, 0, 0, 0, 0, 0]);
//! ```

pub mod container;
pub mod error;

pub use container::Container;
pub use error::ContainerError;
