//! Lazily-created buckets in insertion-ordered maps
//!
//! Both reader indices are built only through these two functions, so every
//! bucket, inner map or value list, is created the same way.

use indexmap::IndexMap;
use std::hash::Hash;

/// Get the bucket stored at `key`, inserting an empty one first if absent
pub fn bucket<K, B>(map: &mut IndexMap<K, B>, key: K) -> &mut B
where
    K: Hash + Eq,
    B: Default,
{
    map.entry(key).or_default()
}

/// Append `value` to the list at `key`, creating the list if absent.
///
/// Values keep insertion order and are not deduplicated.
pub fn lazy_insert<K, V>(map: &mut IndexMap<K, Vec<V>>, key: K, value: V)
where
    K: Hash + Eq,
{
    bucket(map, key).push(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_creates_bucket() {
        let mut map: IndexMap<&str, Vec<i32>> = IndexMap::new();
        lazy_insert(&mut map, "numbers", 4);
        assert_eq!(map["numbers"], vec![4]);
    }

    #[test]
    fn test_insert_appends_to_existing() {
        let mut map: IndexMap<&str, Vec<i32>> = IndexMap::new();
        map.insert("numbers", vec![1, 2, 3]);
        lazy_insert(&mut map, "numbers", 4);
        assert_eq!(map["numbers"], vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_no_deduplication() {
        let mut map: IndexMap<String, Vec<&str>> = IndexMap::new();
        lazy_insert(&mut map, "k".to_string(), "v");
        lazy_insert(&mut map, "k".to_string(), "v");
        assert_eq!(map["k"], vec!["v", "v"]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_keys_keep_first_insertion_order() {
        let mut map: IndexMap<&str, Vec<i32>> = IndexMap::new();
        lazy_insert(&mut map, "b", 1);
        lazy_insert(&mut map, "a", 2);
        lazy_insert(&mut map, "b", 3);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_nested_buckets() {
        let mut edges: IndexMap<&str, IndexMap<&str, Vec<&str>>> = IndexMap::new();
        lazy_insert(bucket(&mut edges, "alice"), "knows", "bob");
        lazy_insert(bucket(&mut edges, "alice"), "knows", "carol");
        lazy_insert(bucket(&mut edges, "alice"), "likes", "dave");

        assert_eq!(edges.len(), 1);
        assert_eq!(edges["alice"]["knows"], vec!["bob", "carol"]);
        assert_eq!(edges["alice"]["likes"], vec!["dave"]);
    }

    #[test]
    fn test_bucket_does_not_touch_existing() {
        let mut map: IndexMap<&str, Vec<i32>> = IndexMap::new();
        map.insert("k", vec![7]);
        assert_eq!(bucket(&mut map, "k"), &mut vec![7]);
    }
}
