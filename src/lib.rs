//! # Ordered Collection
//!
//! An insertion-ordered key/value container with convenience operations.
//!
//! The crate is organized into feature-gated modules:
//!
//! ## Features
//!
//! - `collections` - The [`Collection`] type with get/set, first/last,
//!   filter/map/merge, index access and JSON export
//! - `macros` - `collection!` and `collection_fn!` construction macros
//! - `hashbrown-json` - Build collections from `hashbrown::HashMap` values and
//!   closures returning them
//!
//! ## Example
//!
//! ```rust
//! use ordered_collection::{Collection, JsonOptions};
//!
//! let mut users = Collection::make([("alice", 3), ("bob", 0)]);
//! users.set("carol", 7);
//!
//! assert_eq!(users.get("alice"), Some(&3));
//! assert_eq!(users.count(), 3);
//!
//! // Entries holding a falsy value are dropped by the default filter
//! let active = users.filter_truthy();
//! assert_eq!(active.to_json(&JsonOptions::default())?, r#"{"alice":3,"carol":7}"#);
//! # Ok::<(), ordered_collection::CollectionError>(())
//! ```
//!
//! ### Index access
//!
//! `c[key]` reads and overwrites existing entries only; a missing key panics,
//! like `HashMap`. Insert through [`ArrayAccess::write`] (or `set`).
//!
//! ```rust
//! use ordered_collection::{ArrayAccess, Collection};
//!
//! let mut c = Collection::new();
//! c.write("new", 1);
//! c["new"] += 1;
//! assert_eq!(c["new"], 2);
//! assert!(c.delete("new").is_some());
//! assert!(!c.exists("new"));
//! ```
//!
//! ### List-like collections
//!
//! ```rust
//! use ordered_collection::Collection;
//!
//! let list = Collection::list(["foo", "bar"]);
//! assert_eq!(list.to_string(), r#"["foo","bar"]"#);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "macros")]
pub mod macros;

// Re-export commonly used types from collections
#[cfg(feature = "collections")]
pub use collections::{
    access::ArrayAccess,
    arrayable::{Arrayable, List, Single},
    collection::Collection,
    error::{CollectionError, Result},
    json::JsonOptions,
    key::Key,
    truthy::Truthy,
};
