//! Construction from hashbrown maps.
//!
//! Enables the closure-based JSON object syntax for [`Collection`] when the
//! `hashbrown-json` feature is enabled. A `HashMap` carries no order, so the
//! resulting iteration order is the map's own.

use super::arrayable::Arrayable;
use super::collection::Collection;
use super::key::Key;
use indexmap::IndexMap;
use std::hash::BuildHasher;

impl<K, V, S> Arrayable<V> for ::hashbrown::HashMap<K, V, S>
where
    K: Into<Key>,
    S: BuildHasher,
{
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        self.into_iter().map(|(k, v)| (k.into(), v)).collect()
    }
}

impl<V> Collection<V> {
    /// Creates a collection from a hashbrown HashMap.
    ///
    /// # Example
    /// ```rust
    /// use ordered_collection::Collection;
    /// use hashbrown::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert("key1", "value1");
    /// let collection = Collection::from_hashmap(map);
    /// assert_eq!(collection.get("key1"), Some(&"value1"));
    /// ```
    #[inline]
    pub fn from_hashmap<K, S>(map: ::hashbrown::HashMap<K, V, S>) -> Self
    where
        K: Into<Key>,
        S: BuildHasher,
    {
        Self::make(map)
    }

    /// Creates a collection from a closure that returns a hashbrown HashMap.
    ///
    /// Designed to pair with the `collection_fn!` macro or any builder that
    /// hands out deferred maps.
    ///
    /// # Example
    /// ```rust
    /// use ordered_collection::Collection;
    ///
    /// let collection = Collection::from_json(|| {
    ///     let mut map = hashbrown::HashMap::new();
    ///     map.insert("beta", "true");
    ///     map
    /// });
    /// assert!(collection.has("beta"));
    /// ```
    #[inline]
    pub fn from_json<K, S, F>(f: F) -> Self
    where
        F: FnOnce() -> ::hashbrown::HashMap<K, V, S>,
        K: Into<Key>,
        S: BuildHasher,
    {
        Self::from_hashmap(f())
    }
}
