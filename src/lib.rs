//! A library containing an implementation of a compressed radix tree.
//!
//! The tree stores byte-string keys in sorted order while sharing common
//! prefixes: every chain of nodes with a single child and no key of its own
//! collapses into one multi-byte edge. [`RadixTree`] is the raw structure
//! operating on `&[u8]` keys; [`RadixTreeMap`] wraps it into a typed map
//! keyed by [`String`], [`Vec<u8>`], or any other [`Bytes`] implementation.
//!
//! ```
//! use raxmap::RadixTreeMap;
//!
//! let mut headers = RadixTreeMap::<String, u32>::new();
//! headers.insert("content-length", 42);
//! headers.insert("content-type", 7);
//! headers.insert("connection", 1);
//!
//! assert_eq!(headers.get("content-type"), Some(&7));
//! let keys: Vec<String> = headers.keys().collect();
//! assert_eq!(keys, ["connection", "content-length", "content-type"]);
//! ```

#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::all,
    missing_debug_implementations
)]
#![deny(clippy::all, missing_docs, rust_2018_idioms, rust_2021_compatibility)]

mod bytes;
mod iter;
pub mod map;
mod node;
mod ops;
mod tree;

#[cfg(test)]
mod proptests;

pub use bytes::{BorrowedBytes, Bytes};
pub use iter::{IntoIter, Iter, IterRev};
pub use map::RadixTreeMap;
pub use tree::RadixTree;
