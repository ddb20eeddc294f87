//! Macros for initializing [`Collection`](crate::Collection) values.
//!
//! Two shapes are accepted:
//! - `key => value` pairs build a keyed collection in the written order;
//! - a bare value list builds a list keyed `0..n`.
//!
//! The `_fn` variant returns `impl FnOnce() -> Collection<_>` for builder
//! methods that take deferred initializers.

/// Macro for creating a [`Collection`](crate::Collection).
///
/// Keys may mix strings and integers; each entry goes through
/// [`Collection::set`](crate::Collection::set), so a repeated key keeps its
/// first position and its last value.
///
/// # Example
///
/// ```rust
/// use ordered_collection::macros::collections::collection;
///
/// let config = collection! {
///     "host" => "localhost",
///     "port" => "8080",
///     0 => "first",
/// };
/// assert_eq!(config.count(), 3);
///
/// let list = collection!["foo", "bar"];
/// assert!(list.is_list());
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __oc_collection {
    () => {
        $crate::Collection::new()
    };
    {$($k: expr => $v: expr),+ $(,)?} => {{
        let mut collection = $crate::Collection::new();
        $(
            collection.set($k, $v);
        )+
        collection
    }};
    [$($v: expr),+ $(,)?] => {
        $crate::Collection::list([$($v,)+])
    };
}

/// Macro for creating a [`Collection`](crate::Collection) within a closure.
///
/// Returns `impl FnOnce() -> Collection<V>` for methods accepting closures.
///
/// # Example
///
/// ```rust
/// use ordered_collection::macros::collections::collection_fn;
/// use ordered_collection::Collection;
///
/// fn configure<V>(f: impl FnOnce() -> Collection<V>) -> Collection<V> {
///     f()
/// }
///
/// let settings = configure(collection_fn! {
///     "beta" => true,
///     "stable" => false,
/// });
/// assert_eq!(settings.first(), Some(&true));
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __oc_collection_fn {
    ($($tokens: tt)*) => {
        || $crate::__oc_collection!($($tokens)*)
    };
}

#[doc(inline)]
pub use crate::__oc_collection as collection;

#[doc(inline)]
pub use crate::__oc_collection_fn as collection_fn;
