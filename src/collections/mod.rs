//! Collection utilities and data structures

/// Index-style access over a collection.
pub mod access;
/// Normalization of construction inputs into ordered entries.
pub mod arrayable;
/// The insertion-ordered key/value container.
pub mod collection;
pub mod error;
mod finite;
/// JSON encoding, decoding and encoder options.
pub mod json;
pub mod key;
pub mod truthy;

#[cfg(feature = "hashbrown-json")]
/// Construction from hashbrown maps and closure-based JSON object syntax
pub mod json_ext;
