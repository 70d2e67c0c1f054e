//! An ordered map keyed by any byte-string-like type.

use std::fmt;
use std::marker::PhantomData;

use crate::bytes::{BorrowedBytes, Bytes};
use crate::tree::RadixTree;

/// An ordered map from byte-string-like keys to values, backed by a
/// compressed radix tree.
///
/// Keys are any type implementing [`Bytes`], such as [`String`] or
/// [`Vec<u8>`], and are compared by their bytes. Lookups accept anything that
/// borrows as the key type, so a map keyed by [`String`] is queried with
/// `&str`.
///
/// # Examples
///
/// ```
/// use raxmap::RadixTreeMap;
///
/// let mut map = RadixTreeMap::<String, u32>::new();
/// map.insert("romane", 1);
/// map.insert("romanus", 2);
/// map.insert("romulus", 3);
///
/// assert_eq!(map.get("romanus"), Some(&2));
/// assert_eq!(map.get("roman"), None);
///
/// let keys: Vec<String> = map.keys().collect();
/// assert_eq!(keys, ["romane", "romanus", "romulus"]);
/// ```
pub struct RadixTreeMap<K, V> {
    tree: RadixTree<V>,
    _key: PhantomData<fn() -> K>,
}

impl<K: Bytes, V> RadixTreeMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { tree: RadixTree::new(), _key: PhantomData }
    }

    /// Creates a map holding every key from `keys`, all mapped to clones of
    /// `value`.
    ///
    /// # Panics
    ///
    /// Panics if any key is empty.
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        let mut map = Self::new();
        for key in keys {
            map.insert(key, value.clone());
        }
        map
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every entry from the map.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: impl AsRef<K::Borrowed>) -> Option<&V> {
        self.tree.get(key.as_ref().as_bytes())
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: impl AsRef<K::Borrowed>) -> Option<&mut V> {
        self.tree.get_mut(key.as_ref().as_bytes())
    }

    /// Returns whether the map holds an entry under `key`.
    pub fn contains_key(&self, key: impl AsRef<K::Borrowed>) -> bool {
        self.tree.contains_key(key.as_ref().as_bytes())
    }

    /// Inserts a key-value pair, returning the value previously stored under
    /// the key, if any.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn insert(&mut self, key: impl AsRef<K::Borrowed>, value: V) -> Option<V> {
        self.tree.insert(key.as_ref().as_bytes(), value)
    }

    /// Returns a mutable reference to the value stored under `key`, inserting
    /// `value` first if the key is absent.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn get_or_insert(&mut self, key: impl AsRef<K::Borrowed>, value: V) -> &mut V {
        let key = key.as_ref().as_bytes();
        if !self.tree.contains_key(key) {
            self.tree.insert(key, value);
        }
        let Some(value) = self.tree.get_mut(key) else {
            unreachable!("[bug] the key was just inserted");
        };
        value
    }

    /// Removes the entry stored under `key`, returning its value.
    pub fn remove(&mut self, key: impl AsRef<K::Borrowed>) -> Option<V> {
        self.tree.remove(key.as_ref().as_bytes())
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let (bytes, _) = self.tree.iter().next()?;
        let value = self.tree.remove(&bytes)?;
        Some((K::Borrowed::from_bytes(&bytes).to_owned(), value))
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let (bytes, _) = self.tree.iter_rev().next()?;
        let value = self.tree.remove(&bytes)?;
        Some((K::Borrowed::from_bytes(&bytes).to_owned(), value))
    }

    /// Returns an iterator over the entries of the map in ascending key
    /// order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.tree.iter(), _key: PhantomData }
    }

    /// Returns an iterator over the entries of the map in descending key
    /// order.
    #[must_use]
    pub fn iter_rev(&self) -> IterRev<'_, K, V> {
        IterRev { inner: self.tree.iter_rev(), _key: PhantomData }
    }

    /// Returns an iterator over the keys of the map in ascending order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.tree.iter(), _key: PhantomData }
    }

    /// Returns an iterator over the keys of the map in descending order.
    #[must_use]
    pub fn keys_rev(&self) -> KeysRev<'_, K, V> {
        KeysRev { inner: self.tree.iter_rev(), _key: PhantomData }
    }

    /// Returns an iterator over the values of the map in ascending order of
    /// their keys.
    #[must_use]
    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.tree.iter() }
    }
}

impl<K: Bytes, V> Default for RadixTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V: Clone> Clone for RadixTreeMap<K, V> {
    fn clone(&self) -> Self {
        Self { tree: self.tree.clone(), _key: PhantomData }
    }
}

impl<K: Bytes + fmt::Debug, V: fmt::Debug> fmt::Debug for RadixTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Bytes, V: PartialEq> PartialEq for RadixTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.tree.iter().zip(other.tree.iter()).all(|(lhs, rhs)| lhs == rhs)
    }
}

impl<K: Bytes, V: Eq> Eq for RadixTreeMap<K, V> {}

impl<K: Bytes, V> Extend<(K, V)> for RadixTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Bytes, V> FromIterator<(K, V)> for RadixTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Bytes, V> IntoIterator for RadixTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter { inner: self.tree.into_iter(), _key: PhantomData }
    }
}

impl<'a, K: Bytes, V> IntoIterator for &'a RadixTreeMap<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

fn rebuild_key<K: Bytes>(bytes: &[u8]) -> K {
    K::Borrowed::from_bytes(bytes).to_owned()
}

/// An iterator over a map's entries in ascending key order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: crate::iter::Iter<'a, V>,
    _key: PhantomData<fn() -> K>,
}

impl<'a, K: Bytes, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (bytes, value) = self.inner.next()?;
        Some((rebuild_key(&bytes), value))
    }
}

/// An iterator over a map's entries in descending key order.
#[derive(Debug)]
pub struct IterRev<'a, K, V> {
    inner: crate::iter::IterRev<'a, V>,
    _key: PhantomData<fn() -> K>,
}

impl<'a, K: Bytes, V> Iterator for IterRev<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (bytes, value) = self.inner.next()?;
        Some((rebuild_key(&bytes), value))
    }
}

/// An iterator over a map's keys in ascending order.
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    inner: crate::iter::Iter<'a, V>,
    _key: PhantomData<fn() -> K>,
}

impl<K: Bytes, V> Iterator for Keys<'_, K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let (bytes, _) = self.inner.next()?;
        Some(rebuild_key(&bytes))
    }
}

/// An iterator over a map's keys in descending order.
#[derive(Debug)]
pub struct KeysRev<'a, K, V> {
    inner: crate::iter::IterRev<'a, V>,
    _key: PhantomData<fn() -> K>,
}

impl<K: Bytes, V> Iterator for KeysRev<'_, K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let (bytes, _) = self.inner.next()?;
        Some(rebuild_key(&bytes))
    }
}

/// An iterator over a map's values in ascending order of their keys.
#[derive(Debug)]
pub struct Values<'a, V> {
    inner: crate::iter::Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.inner.next()?;
        Some(value)
    }
}

/// An owning iterator over a map's entries in ascending key order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: crate::iter::IntoIter<V>,
    _key: PhantomData<fn() -> K>,
}

impl<K: Bytes, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let (bytes, value) = self.inner.next()?;
        Some((rebuild_key(&bytes), value))
    }
}
