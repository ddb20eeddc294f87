//! JSON encoding and decoding for [`Collection`].
//!
//! A list-like collection (keys exactly `0..n` in order) encodes as a JSON
//! array; anything else encodes as an object with string keys. Decoding accepts
//! an object, an array, `null`, or a single scalar stored at key `0`.

use super::collection::Collection;
use super::error::{CollectionError, Result};
use super::finite::FiniteFloats;
use super::key::Key;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Default maximum nesting depth of encoded documents.
pub const DEFAULT_DEPTH: usize = 512;

/// Options controlling [`Collection::to_json`].
///
/// ```rust
/// use ordered_collection::{Collection, JsonOptions};
///
/// let c = Collection::list([1, 2]);
/// let options = JsonOptions::default().force_object(true);
/// assert_eq!(c.to_json(&options)?, r#"{"0":1,"1":2}"#);
/// # Ok::<(), ordered_collection::CollectionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Indent the output
    pub pretty: bool,
    /// Encode every array as an object keyed by index, at any depth
    pub force_object: bool,
    /// Maximum nesting depth; a scalar has depth 0, each array or object adds 1
    pub depth: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            pretty: false,
            force_object: false,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl JsonOptions {
    /// Sets indented output.
    #[inline]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets whether arrays are encoded as objects.
    #[inline]
    pub fn force_object(mut self, force_object: bool) -> Self {
        self.force_object = force_object;
        self
    }

    /// Sets the maximum nesting depth.
    #[inline]
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

impl<V: Serialize> Collection<V> {
    /// Encodes the collection as JSON text.
    ///
    /// Fails with [`CollectionError::Serialization`] when a value has no JSON
    /// representation (including NaN and infinite floats) and with
    /// [`CollectionError::DepthExceeded`] when the document nests deeper than
    /// `options.depth`.
    pub fn to_json(&self, options: &JsonOptions) -> Result<String> {
        FiniteFloats::check(self)?;
        let mut value = serde_json::to_value(self)?;
        if options.force_object {
            value = arrays_to_objects(value);
        }

        let depth = depth_of(&value);
        if depth > options.depth {
            log::debug!("JSON depth {} exceeds limit {}", depth, options.depth);
            return Err(CollectionError::DepthExceeded {
                depth,
                limit: options.depth,
            });
        }

        let json = if options.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }

    /// Encodes the collection as compact JSON with the default options.
    #[inline]
    pub fn to_json_default(&self) -> Result<String> {
        self.to_json(&JsonOptions::default())
    }
}

fn depth_of(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth_of).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(depth_of).max().unwrap_or(0),
        _ => 0,
    }
}

fn arrays_to_objects(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), arrays_to_objects(v)))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, arrays_to_objects(v)))
                .collect(),
        ),
        scalar => scalar,
    }
}

/// Renders [`Collection::to_json`] with default options.
///
/// A collection that cannot be encoded renders as an empty string and the
/// failure is logged at `warn`; call [`Collection::to_json`] to get the error.
impl<V: Serialize> fmt::Display for Collection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json_default() {
            Ok(json) => f.write_str(&json),
            Err(err) => {
                log::warn!("Failed to render collection as JSON: {}", err);
                Ok(())
            }
        }
    }
}

// Serde Support
impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, ser: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = ser.serialize_seq(Some(self.len()))?;
            for (_, value) in self {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = ser.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(de: D) -> std::result::Result<Self, D::Error> {
        struct CollectionVisitor<V>(PhantomData<V>);
        impl<'de, V: Deserialize<'de>> Visitor<'de> for CollectionVisitor<V> {
            type Value = Collection<V>;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null, an object, a sequence, or a single value")
            }

            #[inline]
            fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(Collection::new())
            }

            #[inline]
            fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(Collection::new())
            }

            #[inline]
            fn visit_some<D2: Deserializer<'de>>(
                self,
                de: D2,
            ) -> std::result::Result<Self::Value, D2::Error> {
                Collection::deserialize(de)
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut collection = Collection::with_capacity(seq.size_hint().unwrap_or(0));
                let mut index = 0usize;
                while let Some(value) = seq.next_element()? {
                    collection.set(index, value);
                    index += 1;
                }
                Ok(collection)
            }

            fn visit_map<M: MapAccess<'de>>(
                self,
                mut map: M,
            ) -> std::result::Result<Self::Value, M::Error> {
                let mut collection = Collection::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<Key, V>()? {
                    collection.set(key, value);
                }
                Ok(collection)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Self::Value, E> {
                V::deserialize(de::value::BoolDeserializer::<E>::new(v)).map(Collection::wrap)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
                V::deserialize(de::value::I64Deserializer::<E>::new(v)).map(Collection::wrap)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
                V::deserialize(de::value::U64Deserializer::<E>::new(v)).map(Collection::wrap)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
                V::deserialize(de::value::F64Deserializer::<E>::new(v)).map(Collection::wrap)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                V::deserialize(de::value::StrDeserializer::<E>::new(v)).map(Collection::wrap)
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
                V::deserialize(de::value::StringDeserializer::<E>::new(v)).map(Collection::wrap)
            }
        }

        de.deserialize_any(CollectionVisitor(PhantomData))
    }
}
