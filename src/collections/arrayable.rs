// -----------------------------------------------------------------------------
// src/collections/arrayable.rs
// -----------------------------------------------------------------------------

use super::collection::Collection;
use super::key::Key;
use indexmap::IndexMap;

/// Inputs that can be normalized into the ordered entries of a [`Collection`].
///
/// This is the single conversion path shared by [`Collection::make`],
/// [`Collection::replace`] and [`Collection::merge`]:
/// - mappings and collections are copied entry by entry, preserving order;
/// - `()` and `None` stand for null and produce no entries;
/// - [`Single`] wraps one scalar at key `0`;
/// - [`List`] keys a plain sequence `0..n`.
///
/// Duplicate keys in the input keep their first position and take the last
/// value.
pub trait Arrayable<V> {
    /// Converts `self` into ordered entries.
    fn into_entries(self) -> IndexMap<Key, V>;
}

/// A scalar normalized to a single entry at key `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Single<V>(pub V);

/// A plain sequence normalized to entries keyed `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct List<I>(pub I);

impl<V> Arrayable<V> for Collection<V> {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        self.into_inner()
    }
}

impl<V: Clone> Arrayable<V> for &Collection<V> {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        self.all()
    }
}

impl<K: Into<Key>, V, S> Arrayable<V> for IndexMap<K, V, S> {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        self.into_iter().map(|(k, v)| (k.into(), v)).collect()
    }
}

impl<K: Into<Key>, V> Arrayable<V> for Vec<(K, V)> {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        self.into_iter().map(|(k, v)| (k.into(), v)).collect()
    }
}

impl<K: Into<Key>, V, const N: usize> Arrayable<V> for [(K, V); N] {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        self.into_iter().map(|(k, v)| (k.into(), v)).collect()
    }
}

impl<V, A: Arrayable<V>> Arrayable<V> for Option<A> {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        match self {
            Some(items) => items.into_entries(),
            None => IndexMap::new(),
        }
    }
}

impl<V> Arrayable<V> for () {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        IndexMap::new()
    }
}

impl<V> Arrayable<V> for Single<V> {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        let mut entries = IndexMap::with_capacity(1);
        entries.insert(Key::Index(0), self.0);
        entries
    }
}

impl<V, I: IntoIterator<Item = V>> Arrayable<V> for List<I> {
    #[inline]
    fn into_entries(self) -> IndexMap<Key, V> {
        self.0
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v))
            .collect()
    }
}

/// JSON documents: objects keep document order, arrays become lists, `null`
/// is empty and any other scalar is a single entry.
impl Arrayable<serde_json::Value> for serde_json::Value {
    fn into_entries(self) -> IndexMap<Key, serde_json::Value> {
        use serde_json::Value;
        match self {
            Value::Null => IndexMap::new(),
            Value::Object(map) => map.into_iter().map(|(k, v)| (Key::from(k), v)).collect(),
            Value::Array(values) => List(values).into_entries(),
            scalar => Single(scalar).into_entries(),
        }
    }
}
