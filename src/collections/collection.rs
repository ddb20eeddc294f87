// -----------------------------------------------------------------------------
// src/collections/collection.rs
// -----------------------------------------------------------------------------

use super::arrayable::{Arrayable, List, Single};
use super::error::{CollectionError, Result};
use super::key::Key;
use super::truthy::Truthy;
use indexmap::IndexMap;
use std::iter::FromIterator;

/// An insertion-ordered key/value container.
///
/// Keys are unique. A new key is appended to the iteration order; overwriting
/// an existing key keeps its position. Derivations such as [`keys`](Self::keys),
/// [`filter`](Self::filter), [`map`](Self::map) and [`merge`](Self::merge)
/// return new, independent collections and leave the source untouched.
///
/// ### Construction
/// - [`Collection::make`] accepts anything [`Arrayable`]: another collection,
///   a mapping, pairs, `()`/`None` (empty), a [`Single`] scalar or a [`List`].
/// - [`Collection::wrap`] stores one scalar at key `0`.
/// - [`Collection::list`] keys a sequence `0..n`.
///
/// ### Falsy values
/// [`first`](Self::first) and [`last`](Self::last) treat a falsy value (`0`,
/// `""`, `false`, ...) as absent and fall back to the default. Use
/// [`first_strict`](Self::first_strict) / [`last_strict`](Self::last_strict) to
/// read such values.
///
/// ### Examples
/// ```rust
/// use ordered_collection::Collection;
///
/// let mut c = Collection::make([("a", 0), ("b", 1)]);
/// c.set("c", 2);
/// assert_eq!(c.first_or(-1), -1);
/// assert_eq!(c.first_strict(), Some(&0));
/// assert_eq!(c.last(), Some(&2));
/// ```
#[derive(Debug, Clone)]
pub struct Collection<V> {
    items: IndexMap<Key, V>,
    // Key used by the next `push`; only ever grows until `clear`.
    next_index: i64,
}

// Core API
impl<V> Collection<V> {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self::from_entries(IndexMap::new())
    }

    /// Creates an empty collection with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_entries(IndexMap::with_capacity(capacity))
    }

    /// Creates a collection from any [`Arrayable`] input.
    #[inline]
    pub fn make<A: Arrayable<V>>(items: A) -> Self {
        Self::from_entries(items.into_entries())
    }

    fn from_entries(items: IndexMap<Key, V>) -> Self {
        let next_index = items
            .keys()
            .filter_map(Key::as_index)
            .filter(|index| *index >= 0)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        Collection { items, next_index }
    }

    #[inline]
    fn track(&mut self, key: &Key) {
        if let Key::Index(index) = key {
            if *index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
    }

    /// Creates a collection holding `value` at key `0`.
    #[inline]
    pub fn wrap(value: V) -> Self {
        Self::make(Single(value))
    }

    /// Creates a collection keyed `0..n` from a sequence of values.
    #[inline]
    pub fn list<I: IntoIterator<Item = V>>(values: I) -> Self {
        Self::make(List(values))
    }

    /// Pairs `keys` with `values` position for position.
    ///
    /// Fails with [`CollectionError::LengthMismatch`] when the sequences have
    /// different lengths; nothing is truncated.
    pub fn combine<K, IK, IV>(keys: IK, values: IV) -> Result<Self>
    where
        K: Into<Key>,
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
    {
        let keys: Vec<Key> = keys.into_iter().map(Into::into).collect();
        let values: Vec<V> = values.into_iter().collect();
        if keys.len() != values.len() {
            log::debug!(
                "combine rejected: {} keys, {} values",
                keys.len(),
                values.len()
            );
            return Err(CollectionError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(keys.into_iter().zip(values).collect())
    }

    /// Inserts or overwrites the value at `key`.
    #[inline]
    pub fn set(&mut self, key: impl Into<Key>, value: V) {
        let key = key.into();
        self.track(&key);
        self.items.insert(key, value);
    }

    /// Appends `value` at the next free integer index and returns the key used.
    ///
    /// The next free index is one past the largest non-negative integer key
    /// ever stored (or `0`). Removing entries does not lower it; only
    /// [`clear`](Self::clear) resets it. At `i64::MAX` the entry at that key is
    /// overwritten.
    pub fn push(&mut self, value: V) -> Key {
        let key = Key::Index(self.next_index);
        self.track(&key);
        self.items.insert(key.clone(), value);
        key
    }

    /// Returns the value at `key`, if present.
    #[inline]
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.items.get(&key.into())
    }

    /// Returns a mutable reference to the value at `key`, if present.
    #[inline]
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut V> {
        self.items.get_mut(&key.into())
    }

    /// Returns a copy of the value at `key`, or `default` when it is missing.
    #[inline]
    pub fn get_or(&self, key: impl Into<Key>, default: V) -> V
    where
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Checks if `key` exists, whatever its value.
    #[inline]
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Returns an independent copy of all entries in order.
    #[inline]
    pub fn all(&self) -> IndexMap<Key, V>
    where
        V: Clone,
    {
        self.items.clone()
    }

    /// Borrows the underlying ordered map.
    #[inline]
    pub fn as_map(&self) -> &IndexMap<Key, V> {
        &self.items
    }

    /// Consumes the collection, returning the underlying ordered map.
    #[inline]
    pub fn into_inner(self) -> IndexMap<Key, V> {
        self.items
    }

    /// Returns the first value, treating a falsy value as absent.
    #[inline]
    pub fn first(&self) -> Option<&V>
    where
        V: Truthy,
    {
        self.first_strict().filter(|v| v.is_truthy())
    }

    /// Returns a copy of the first value, or `default` when the collection is
    /// empty or the first value is falsy.
    #[inline]
    pub fn first_or(&self, default: V) -> V
    where
        V: Truthy + Clone,
    {
        self.first().cloned().unwrap_or(default)
    }

    /// Returns the first value, falsy or not.
    #[inline]
    pub fn first_strict(&self) -> Option<&V> {
        self.items.first().map(|(_, v)| v)
    }

    /// Returns the last value, treating a falsy value as absent.
    #[inline]
    pub fn last(&self) -> Option<&V>
    where
        V: Truthy,
    {
        self.last_strict().filter(|v| v.is_truthy())
    }

    /// Returns a copy of the last value, or `default` when the collection is
    /// empty or the last value is falsy.
    #[inline]
    pub fn last_or(&self, default: V) -> V
    where
        V: Truthy + Clone,
    {
        self.last().cloned().unwrap_or(default)
    }

    /// Returns the last value, falsy or not.
    #[inline]
    pub fn last_strict(&self) -> Option<&V> {
        self.items.last().map(|(_, v)| v)
    }

    /// Returns a new list collection holding the keys in order.
    pub fn keys(&self) -> Collection<Key> {
        Collection::list(self.items.keys().cloned())
    }

    /// Returns a new list collection holding the values in order.
    pub fn values(&self) -> Collection<V>
    where
        V: Clone,
    {
        Collection::list(self.items.values().cloned())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the collection has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes the entry at `key`, keeping the order of the others.
    /// Missing keys are a no-op.
    #[inline]
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<V> {
        self.items.shift_remove(&key.into())
    }

    /// Sets every entry of `items` in order: existing keys are overwritten in
    /// place, new keys appended.
    pub fn replace<A: Arrayable<V>>(&mut self, items: A) {
        let entries = items.into_entries();
        log::trace!("replacing {} entries into {}", entries.len(), self.items.len());
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Removes all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_index = 0;
    }

    /// Calls `callback(value, key)` for each entry in order.
    pub fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&V, &Key),
    {
        for (key, value) in &self.items {
            callback(value, key);
        }
        self
    }

    /// Returns a new collection with the entries whose value satisfies
    /// `predicate`, keeping keys and relative order.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
        V: Clone,
    {
        self.items
            .iter()
            .filter(|(_, v)| predicate(v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns a new collection with the entries whose value is truthy.
    #[inline]
    pub fn filter_truthy(&self) -> Self
    where
        V: Truthy + Clone,
    {
        self.filter(|v| v.is_truthy())
    }

    /// Returns a new collection with every value replaced by
    /// `callback(value, key)`. Keys, order and count are unchanged.
    pub fn map<U, F>(&self, mut callback: F) -> Collection<U>
    where
        F: FnMut(&V, &Key) -> U,
    {
        let keys = self.items.keys();
        let values = self.items.iter().map(|(k, v)| callback(v, k));
        keys.cloned().zip(values).collect()
    }

    /// Returns a new collection with the entries of `self` followed by those
    /// of `other`; on a shared key `other`'s value wins.
    pub fn merge<A: Arrayable<V>>(&self, other: A) -> Self
    where
        V: Clone,
    {
        let mut merged = self.clone();
        merged.replace(other);
        merged
    }

    /// Checks if the keys are exactly `0..n` in order.
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .zip(0i64..)
            .all(|(key, expected)| key.as_index() == Some(expected))
    }

    /// Returns an iterator over `(key, value)` pairs in order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.items.iter()
    }

    /// Returns an iterator over `(key, value)` pairs with mutable values.
    #[inline]
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, V> {
        self.items.iter_mut()
    }
}

impl<V> Default for Collection<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for Collection<V> {
    /// Collections are equal when they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Collection<V> {}

// Iterators
impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Collection<V> {
    type Item = (&'a Key, &'a mut V);
    type IntoIter = indexmap::map::IterMut<'a, Key, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Conversion Traits
impl<K: Into<Key>, V> FromIterator<(K, V)> for Collection<V> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for Collection<V> {
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<Key>, V> From<IndexMap<K, V>> for Collection<V> {
    #[inline]
    fn from(map: IndexMap<K, V>) -> Self {
        Self::make(map)
    }
}

impl<K: Into<Key>, V> From<Vec<(K, V)>> for Collection<V> {
    #[inline]
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::make(pairs)
    }
}

impl<V> From<Collection<V>> for IndexMap<Key, V> {
    #[inline]
    fn from(collection: Collection<V>) -> Self {
        collection.items
    }
}
