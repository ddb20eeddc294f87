//! Tests for macros features

#[cfg(feature = "macros")]
mod macros_tests {
    use ordered_collection::macros::collections::*;
    use ordered_collection::{Collection, Key};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_macros_collection_pairs() {
        let c = collection! {
            "key1" => "value1",
            "key2" => "value2",
        };
        assert_eq!(c.count(), 2);
        assert_eq!(c.get("key1"), Some(&"value1"));
        assert_eq!(c.to_string(), r#"{"key1":"value1","key2":"value2"}"#);
    }

    #[test]
    fn test_macros_collection_mixed_keys() {
        let c = collection! {
            "name" => 1,
            7 => 2,
            "7" => 3,
        };
        assert_eq!(c.count(), 2);
        assert_eq!(c.get(7), Some(&3));
        assert_eq!(c.keys().all().into_values().collect::<Vec<_>>(), vec![Key::from("name"), Key::Index(7)]);
    }

    #[test]
    fn test_macros_collection_list() {
        let c = collection![1, 2, 3];
        assert!(c.is_list());
        assert_eq!(c.to_string(), "[1,2,3]");

        let single = collection![42];
        assert_eq!(single.get(0), Some(&42));

        let empty: Collection<i32> = collection![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_macros_collection_fn() {
        fn build<V>(f: impl FnOnce() -> Collection<V>) -> Collection<V> {
            f()
        }

        let c = build(collection_fn! {
            "beta" => "true",
            "version" => "2.1.0",
        });
        assert_eq!(c.get("version"), Some(&"2.1.0"));

        let list = build(collection_fn!["a", "b"]);
        assert_eq!(list.last(), Some(&"b"));
    }
}
