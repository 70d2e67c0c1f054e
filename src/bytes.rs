//! Traits connecting typed keys to the byte strings stored in the tree.

/// An owned key type whose bytes can be stored in a radix tree.
///
/// The bytes of a key fully determine its identity and its position in the
/// iteration order. The associated [`Bytes::Borrowed`] type is the unsized
/// view used for lookups, so a map keyed by [`String`] accepts `&str` and a
/// map keyed by [`Vec<u8>`] accepts `&[u8]`.
pub trait Bytes: Sized + AsRef<Self::Borrowed> {
    /// The borrowed form of the key used for lookups.
    type Borrowed: ?Sized + BorrowedBytes + ToOwned<Owned = Self>;
}

/// A borrowed key that views its content as bytes and can be rebuilt from
/// bytes previously obtained through [`BorrowedBytes::as_bytes`].
pub trait BorrowedBytes {
    /// Views the key as raw bytes.
    fn as_bytes(&self) -> &[u8];

    /// Reinterprets bytes produced by [`BorrowedBytes::as_bytes`] as a key.
    fn from_bytes(bytes: &[u8]) -> &Self;
}

impl Bytes for Vec<u8> {
    type Borrowed = [u8];
}

impl BorrowedBytes for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn from_bytes(bytes: &[u8]) -> &Self {
        bytes
    }
}

impl Bytes for String {
    type Borrowed = str;
}

impl BorrowedBytes for str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }

    fn from_bytes(bytes: &[u8]) -> &Self {
        match std::str::from_utf8(bytes) {
            Ok(key) => key,
            Err(_) => unreachable!("[bug] keys of a string-keyed map are valid utf-8"),
        }
    }
}
