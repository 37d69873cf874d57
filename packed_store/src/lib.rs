//! # packed_store
//!
//! Packs fixed-width unsigned integers into a contiguous byte buffer behind a
//! small header carrying a format version and the element bit width.
//!
//! ```rust
//! use num_bigint::BigUint;
//! use packed_store::{PackedArrayStore, StoreConfig};
//!
//! // version 1, 1-byte header, 16-bit elements
//! let mut store = PackedArrayStore::new(StoreConfig::new(1, 1, 16)).unwrap();
//! assert_eq!(store.render(), "00110000 : 0000000000000000 0000000000000000 ");
//!
//! store.write(0, 0xBEEFu32).unwrap();
//! assert_eq!(store.read(0).unwrap(), BigUint::from(0xBEEFu32));
//! ```
//!
//! ## Wide elements
//!
//! Element widths and versions are not limited to machine words:
//!
//! ```rust
//! use num_bigint::BigUint;
//! use packed_store::{PackedArrayStore, StoreConfig};
//!
//! let mut store = PackedArrayStore::new(StoreConfig::new(1, 8, 100)).unwrap();
//! let big = (BigUint::from(1u8) << 99usize) + BigUint::from(12345u32);
//! store.write(5, big.clone()).unwrap();
//! assert_eq!(store.read(5).unwrap(), big);
//! ```
//!
//! The buffer itself is the wire format: header bytes followed by packed
//! frames, with no element count. See [`header`] for the header layouts.

pub mod config;
pub mod error;
pub mod header;

mod frame;
mod render;
pub mod store;

pub use config::StoreConfig;
pub use error::PackedStoreError;
pub use store::PackedArrayStore;
