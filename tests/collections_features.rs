//! Tests for collections feature and related functionality

#[cfg(feature = "collections")]
mod collections_tests {
    use indexmap::IndexMap;
    use ordered_collection::{ArrayAccess, Collection, Key, List, Single};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn keys_of<V>(collection: &Collection<V>) -> Vec<String> {
        collection.iter().map(|(k, _)| k.to_string()).collect()
    }

    #[test]
    fn test_collections_constructor_normalization() {
        let c = Collection::wrap("foo");
        assert_eq!(c.all(), IndexMap::from([(Key::Index(0), "foo")]));

        let c = Collection::wrap(1);
        assert_eq!(c.get(0), Some(&1));

        let c = Collection::wrap(false);
        assert_eq!(c.count(), 1);
        assert_eq!(c.get(0), Some(&false));

        let c = Collection::<Value>::make(Value::Null);
        assert!(c.all().is_empty());

        let c = Collection::<i32>::make(());
        assert!(c.is_empty());

        let c = Collection::<i32>::new();
        assert!(c.all().is_empty());

        let c = Collection::make(Single(json!("foo")));
        assert_eq!(c.to_string(), r#"["foo"]"#);
    }

    #[test]
    fn test_collections_construct_from_collection_copies() {
        let mut source = Collection::make([("foo", "bar")]);
        let copy = Collection::make(&source);
        source.set("foo", "changed");

        assert_eq!(copy.get("foo"), Some(&"bar"));
        assert_eq!(source.get("foo"), Some(&"changed"));
    }

    #[test]
    fn test_collections_set_and_get() {
        let mut c = Collection::new();
        c.set("foo", "bar");

        assert_eq!(c.get("foo"), Some(&"bar"));
        assert_eq!(c.all(), IndexMap::from([(Key::from("foo"), "bar")]));
    }

    #[test]
    fn test_collections_get_default() {
        let c = Collection::make([("foo", "bar")]);

        assert_eq!(c.get("baz"), None);
        assert_eq!(c.get_or("baz", "qux"), "qux");
        assert_eq!(c.get_or("foo", "qux"), "bar");
    }

    #[test]
    fn test_collections_has() {
        let c = Collection::make([("foo", ""), ("zero", "0")]);

        assert!(c.has("foo"));
        assert!(c.has("zero"));
        assert!(!c.has("baz"));
    }

    #[test]
    fn test_collections_all_is_independent() {
        let c = Collection::make([("foo", "bar")]);
        let mut all = c.all();
        all.insert(Key::from("baz"), "qux");

        assert_eq!(c.count(), 1);
        assert!(!c.has("baz"));
    }

    #[test]
    fn test_collections_first_and_last() {
        let c = Collection::make([("foo", "bar"), ("baz", "qux")]);

        assert_eq!(c.first(), Some(&"bar"));
        assert_eq!(c.last(), Some(&"qux"));
    }

    #[test]
    fn test_collections_first_and_last_default() {
        let c = Collection::<&str>::new();

        assert_eq!(c.first_or("default"), "default");
        assert_eq!(c.last_or("default"), "default");
    }

    #[test]
    fn test_collections_falsy_first_value_returns_default() {
        let c = Collection::make([("a", json!(0)), ("b", json!(1))]);

        assert_eq!(c.first_or(json!("default")), json!("default"));
        assert_eq!(c.first_strict(), Some(&json!(0)));
        assert_eq!(c.last_or(json!("default")), json!(1));

        let c = Collection::make([("a", "x"), ("b", "")]);
        assert_eq!(c.last(), None);
        assert_eq!(c.last_strict(), Some(&""));
    }

    #[test]
    fn test_collections_keys() {
        let c = Collection::make([("foo", "bar"), ("baz", "qux")]);
        let keys = c.keys();

        assert_eq!(
            keys.all().into_values().collect::<Vec<_>>(),
            vec![Key::from("foo"), Key::from("baz")]
        );
        assert!(keys.is_list());
        assert_eq!(keys.to_string(), r#"["foo","baz"]"#);
    }

    #[test]
    fn test_collections_count() {
        let c = Collection::list(["foo", "bar"]);
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn test_collections_remove() {
        let mut c = Collection::list(["foo", "bar"]);
        c.remove("foo");
        assert_eq!(c.get("foo"), None);
        assert_eq!(c.count(), 2);

        c.remove(0);
        assert_eq!(c.get_or(0, "gone"), "gone");
        assert_eq!(c.count(), 1);
    }

    #[test]
    fn test_collections_replace() {
        let mut c = Collection::make([("foo", "bar"), ("keep", "me")]);
        c.replace([("foo", "replaced"), ("new", "entry")]);

        assert_eq!(keys_of(&c), vec!["foo", "keep", "new"]);
        assert_eq!(c.get("foo"), Some(&"replaced"));
    }

    #[test]
    fn test_collections_clear_and_is_empty() {
        let mut c = Collection::list(["foo", "bar"]);
        assert!(!c.is_empty());

        c.clear();
        assert_eq!(c.count(), 0);
        assert!(c.is_empty());
        assert!(c.all().is_empty());
    }

    #[test]
    fn test_collections_each() {
        let c = Collection::make([("foo", "bar"), ("baz", "qux")]);

        let mut result = Vec::new();
        let returned = c.each(|value, key| result.push((key.to_string(), *value)));

        assert_eq!(
            result,
            vec![("foo".to_string(), "bar"), ("baz".to_string(), "qux")]
        );
        assert!(std::ptr::eq(returned, &c));
    }

    #[test]
    fn test_collections_filter() {
        let c = Collection::list([json!({"id": 1}), json!({"id": 2})]);

        let result = c.filter(|item| item["id"] == 1);

        assert_eq!(result.all(), IndexMap::from([(Key::Index(0), json!({"id": 1}))]));
    }

    #[test]
    fn test_collections_filter_keeps_keys() {
        let c = Collection::list([1, 2, 3, 4]);
        let even = c.filter(|v| v % 2 == 0);

        assert_eq!(keys_of(&even), vec!["1", "3"]);
        assert_eq!(even.to_string(), r#"{"1":2,"3":4}"#);
    }

    #[test]
    fn test_collections_filter_without_callback() {
        let c = Collection::make([
            ("a", json!(1)),
            ("b", json!(0)),
            ("c", json!("")),
            ("d", json!(null)),
            ("e", json!(false)),
            ("f", json!("x")),
        ]);

        assert_eq!(keys_of(&c.filter_truthy()), vec!["a", "f"]);
    }

    #[test]
    fn test_collections_map() {
        let c = Collection::make([("first", "taylor"), ("last", "otwell")]);

        let mapped = c.map(|value, key| format!("{key}-{}", value.to_uppercase()));

        assert_eq!(mapped.get("first").map(String::as_str), Some("first-TAYLOR"));
        assert_eq!(mapped.get("last").map(String::as_str), Some("last-OTWELL"));
        assert_eq!(keys_of(&mapped), vec!["first", "last"]);
        assert_eq!(c.get("first"), Some(&"taylor"));
    }

    #[test]
    fn test_collections_merge() {
        let c = Collection::make([("name", "hello")]);

        let merged = c.merge([("id", "1")]);
        assert_eq!(keys_of(&merged), vec!["name", "id"]);

        let merged = c.merge(Collection::make([("name", "world")]));
        assert_eq!(merged.get("name"), Some(&"world"));
        assert_eq!(c.get("name"), Some(&"hello"));
    }

    #[test]
    fn test_collections_merge_null_and_scalar() {
        let c = Collection::make([("name", "hello")]);

        assert_eq!(c.merge(()), c);
        assert_eq!(c.merge(None::<Collection<&str>>), c);

        let merged = c.merge(Single("tail"));
        assert_eq!(merged.get(0), Some(&"tail"));
        assert_eq!(merged.count(), 2);

        let merged = Collection::list(["a", "b"]).merge(List(["c"]));
        assert_eq!(merged.to_string(), r#"["c","b"]"#);
    }

    #[test]
    fn test_collections_to_json() {
        let c = Collection::make([("foo", "bar")]);
        assert_eq!(c.to_json_default().unwrap(), r#"{"foo":"bar"}"#);
    }

    #[test]
    fn test_collections_to_string() {
        let c = Collection::make([("foo", "bar")]);
        assert_eq!(c.to_string(), r#"{"foo":"bar"}"#);
        assert_eq!(format!("{c}"), r#"{"foo":"bar"}"#);
    }

    #[test]
    fn test_collections_offset_access() {
        let mut c = Collection::new();
        c.write("foo", "bar");
        assert!(c.exists("foo"));
        assert_eq!(c.read("foo"), Some(&"bar"));
        assert_eq!(c["foo"], "bar");

        c["foo"] = "baz";
        assert_eq!(c.read("foo"), Some(&"baz"));

        c.delete("foo");
        assert!(!c.exists("foo"));
        assert!(!c.has("foo"));
    }

    #[test]
    fn test_collections_iteration_reflects_current_state() {
        let mut c = Collection::make([("a", 1)]);
        assert_eq!(c.iter().count(), 1);

        c.set("b", 2);
        let pairs: Vec<(String, i32)> = c.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        assert_eq!(pairs, vec![("a".to_string(), 1), ("b".to_string(), 2)]);

        for (_, value) in &mut c {
            *value *= 10;
        }
        let values: Vec<i32> = c.into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![10, 20]);
    }
}

#[cfg(feature = "collections")]
mod collections_serde_tests {
    use ordered_collection::{Collection, CollectionError, JsonOptions};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn test_collections_serde_list_like_becomes_array() {
        let c = Collection::list([1, 2, 3]);
        assert_eq!(serde_json::to_string(&c).unwrap(), "[1,2,3]");

        let empty = Collection::<i32>::new();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn test_collections_serde_from_json_document() {
        let c: Collection<Value> =
            serde_json::from_str(r#"{"servers":["api.com","db.com"],"port":8080}"#).unwrap();
        assert_eq!(c.get("servers"), Some(&json!(["api.com", "db.com"])));

        let again = Collection::make(json!({"servers": ["api.com", "db.com"], "port": 8080}));
        assert_eq!(c, again);
        assert_eq!(c.to_string(), r#"{"servers":["api.com","db.com"],"port":8080}"#);
    }

    #[test]
    fn test_collections_serde_depth_guard() {
        let c = Collection::make(json!({"a": [[1]]}));
        let err = c.to_json(&JsonOptions::default().depth(1)).unwrap_err();
        assert!(err.is_serialization());
        assert!(matches!(err, CollectionError::DepthExceeded { depth: 3, .. }));
    }
}
