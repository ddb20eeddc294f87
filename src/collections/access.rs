//! Index-style access.
//!
//! [`ArrayAccess`] names the four offset operations; [`Collection`] implements
//! them as aliases over `has`/`get`/`set`/`remove`. The `[]` operators are
//! provided through [`Index`] and [`IndexMut`].

use super::collection::Collection;
use super::key::Key;
use std::ops::{Index, IndexMut};

/// Offset-based access to a keyed container.
pub trait ArrayAccess<V> {
    /// Checks if an entry exists at `key`.
    fn exists(&self, key: impl Into<Key>) -> bool;

    /// Returns the value at `key`, if present.
    fn read(&self, key: impl Into<Key>) -> Option<&V>;

    /// Inserts or overwrites the value at `key`.
    fn write(&mut self, key: impl Into<Key>, value: V);

    /// Removes the entry at `key`, returning its value.
    fn delete(&mut self, key: impl Into<Key>) -> Option<V>;
}

impl<V> ArrayAccess<V> for Collection<V> {
    #[inline]
    fn exists(&self, key: impl Into<Key>) -> bool {
        self.has(key)
    }

    #[inline]
    fn read(&self, key: impl Into<Key>) -> Option<&V> {
        self.get(key)
    }

    #[inline]
    fn write(&mut self, key: impl Into<Key>, value: V) {
        self.set(key, value)
    }

    #[inline]
    fn delete(&mut self, key: impl Into<Key>) -> Option<V> {
        self.remove(key)
    }
}

/// Panics if `key` is missing, like `HashMap`. Use [`Collection::get`] to
/// read without panicking.
impl<V, K: Into<Key>> Index<K> for Collection<V> {
    type Output = V;

    fn index(&self, key: K) -> &V {
        let key = key.into();
        match self.get(&key) {
            Some(value) => value,
            None => panic!("no entry found for key {key}"),
        }
    }
}

/// Overwrites an existing entry in place. Panics if `key` is missing; use
/// [`Collection::set`] or [`ArrayAccess::write`] to insert.
impl<V, K: Into<Key>> IndexMut<K> for Collection<V> {
    fn index_mut(&mut self, key: K) -> &mut V {
        let key = key.into();
        match self.get_mut(&key) {
            Some(value) => value,
            None => panic!("no entry found for key {key}"),
        }
    }
}
