//! # bit_store
//!
//! A `no_std` compatible dynamic-length bit sequence, packed into `u64` words.
//!
//! ```rust
//! use bit_store::BitStore;
//!
//! // 8 bits initialized from a word value
//! let bits = BitStore::with_word(8, 0b1010_1010);
//! assert_eq!(bits.to_text(), "10101010");
//! assert_eq!(bits.count(), 4);
//! ```
//!
//! ## Growable storage
//!
//! ```rust
//! use bit_store::BitStore;
//!
//! let mut bits = BitStore::new();
//! bits.push(true);
//! bits.push(false);
//! bits.push(true);
//!
//! assert_eq!(bits.len(), 3);
//! assert_eq!(bits.to_text(), "101");
//!
//! bits.resize(8, false);
//! assert_eq!(bits.to_text(), "00000101");
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitStoreError;

mod bit_ops;

pub mod store;
pub use store::BitStore;
