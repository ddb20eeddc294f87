//! Collection keys.
//!
//! A key is either an integer index or a string. Strings holding a canonical
//! integer (`"0"`, `"42"`, `"-7"`) are stored as indexes so that `"1"` and `1`
//! address the same entry.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a [`Collection`](super::collection::Collection) entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer index, the implicit key of list entries
    Index(i64),
    /// Any non-integer string
    Str(String),
}

impl Key {
    /// Returns the integer index, if this is an index key.
    #[inline]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// Returns the string, if this is a string key.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// Checks if this is an index key.
    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

/// Parses `s` as an index only when it is the canonical decimal rendering of
/// an `i64`. Leading zeros, a plus sign, `-0`, whitespace and overflow keep the
/// string as-is.
fn canonical_index(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if digits == "0" && s.len() != digits.len() {
        return None;
    }
    s.parse().ok()
}

impl From<&str> for Key {
    #[inline]
    fn from(s: &str) -> Self {
        match canonical_index(s) {
            Some(i) => Key::Index(i),
            None => Key::Str(s.to_owned()),
        }
    }
}

impl From<String> for Key {
    #[inline]
    fn from(s: String) -> Self {
        match canonical_index(&s) {
            Some(i) => Key::Index(i),
            None => Key::Str(s),
        }
    }
}

impl From<&String> for Key {
    #[inline]
    fn from(s: &String) -> Self {
        Key::from(s.as_str())
    }
}

impl From<&Key> for Key {
    #[inline]
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<i64> for Key {
    #[inline]
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(i: i32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<u32> for Key {
    #[inline]
    fn from(i: u32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<u64> for Key {
    #[inline]
    fn from(i: u64) -> Self {
        i64::try_from(i)
            .map(Key::Index)
            .unwrap_or_else(|_| Key::Str(i.to_string()))
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(i: usize) -> Self {
        i64::try_from(i)
            .map(Key::Index)
            .unwrap_or_else(|_| Key::Str(i.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

// Serde Support
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Index(i) => ser.serialize_i64(*i),
            Key::Str(s) => ser.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct KeyVisitor;
        impl Visitor<'_> for KeyVisitor {
            type Value = Key;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a string")
            }

            #[inline]
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Key::Index(v))
            }

            #[inline]
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Key::from(v))
            }

            #[inline]
            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Key::from(v))
            }

            #[inline]
            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Key::from(v))
            }
        }

        de.deserialize_any(KeyVisitor)
    }
}
