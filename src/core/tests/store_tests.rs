//! Store tests
//!
//! Checks that the store, key list and selection stay consistent across
//! every mutator.

use crate::config::StoreConfig;
use crate::core::keygen::{CollisionPolicy, ManualClock};
use crate::core::store::MultiSelectStore;

/// Helper: Store with a manual clock at `millis` and default config
fn store_at(millis: i64) -> MultiSelectStore<String, ManualClock> {
    MultiSelectStore::with_clock(ManualClock::new(millis), &StoreConfig::default())
}

/// Helper: Checks the cross-collection invariants
fn assert_consistent(store: &MultiSelectStore<String, ManualClock>) {
    assert_eq!(store.key_list().len(), store.store().len());
    for key in store.key_list().iter() {
        assert!(store.has_key(key), "key list entry '{}' missing from store", key);
    }
    for key in store.selected_keys().iter() {
        assert!(store.key_list().contains(key), "selected '{}' not in key list", key);
    }
}

#[test]
fn test_two_adds_give_distinct_keys() {
    let mut store = store_at(1_000);
    let a = store.add("a".to_string());
    store.key_generator().clock().advance(1);
    let b = store.add("b".to_string());

    assert_ne!(a, b);
    assert_eq!(store.get(&a).map(String::as_str), Some("a"));
    assert_eq!(store.get(&b).map(String::as_str), Some("b"));
    assert_eq!(store.key_list(), &[a.as_str(), b.as_str()]);
    assert_consistent(&store);
}

#[test]
fn test_delete_cascades_to_selection() {
    let mut store = store_at(1_000);
    let key = store.add("a".to_string());
    store.select_obj(&key);

    assert_eq!(store.del_obj_from_store(&key).as_deref(), Some("a"));
    assert!(!store.has_key(&key));
    assert!(store.key_list().is_empty());
    assert!(store.selected_keys().is_empty());

    // Second delete is a no-op
    assert_eq!(store.del_obj_from_store(&key), None);
    assert_consistent(&store);
}

#[test]
fn test_delete_unknown_key_changes_nothing() {
    let mut store = store_at(1_000);
    let key = store.add("a".to_string());
    store.select_obj(&key);

    store.del_obj_from_store("missing");

    assert_eq!(store.len(), 1);
    assert_eq!(store.selected_keys(), &[key.as_str()]);
}

#[test]
fn test_select_unknown_key_is_noop() {
    let mut store = store_at(1_000);
    store.add("a".to_string());

    store.select_obj("missing");

    assert!(store.selected_keys().is_empty());
}

#[test]
fn test_select_twice_keeps_one_entry() {
    let mut store = store_at(1_000);
    let key = store.add("a".to_string());

    store.select_obj(&key);
    store.select_obj(&key);

    assert_eq!(store.selected_keys(), &[key.as_str()]);
}

#[test]
fn test_selection_order_is_selection_order() {
    let mut store = store_at(1_000);
    let a = store.add("a".to_string());
    let b = store.add("b".to_string());
    let c = store.add("c".to_string());

    store.select_obj(&c);
    store.select_obj(&a);

    assert_eq!(store.selected_keys(), &[c.as_str(), a.as_str()]);
    assert!(!store.is_selected(&b));

    let items: Vec<&str> = store.selected_items().map(|(_, item)| item.as_str()).collect();
    assert_eq!(items, ["c", "a"]);
}

#[test]
fn test_unselect_does_not_need_stored_key() {
    let mut store = store_at(1_000);
    let key = store.add("a".to_string());
    store.select_obj(&key);

    store.unselect_obj("missing");
    assert_eq!(store.selected_count(), 1);

    store.unselect_obj(&key);
    store.unselect_obj(&key);
    assert!(store.selected_keys().is_empty());
    assert!(store.has_key(&key));
}

#[test]
fn test_select_all_replaces_selection() {
    let mut store = store_at(1_000);
    let a = store.add("a".to_string());
    let b = store.add("b".to_string());

    store.select_obj(&b);
    store.select_all();

    // Key list order, not union with the previous selection order
    assert_eq!(store.selected_keys(), &[a.as_str(), b.as_str()]);
    assert_consistent(&store);
}

#[test]
fn test_select_all_then_unselect_all() {
    let mut store = store_at(1_000);
    store.add("a".to_string());
    store.add("b".to_string());

    store.select_all();
    store.unselect_all();

    assert!(store.selected_keys().is_empty());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_select_all_on_empty_store() {
    let mut store = store_at(1_000);
    store.select_all();
    assert!(store.selected_keys().is_empty());
}

#[test]
fn test_del_all_objs_empties_everything() {
    let mut store = store_at(1_000);
    let key = store.add("a".to_string());
    store.add("b".to_string());
    store.select_all();

    store.del_all_objs();

    assert!(!store.has_key(&key));
    assert!(!store.has_key(""));
    assert!(store.store().is_empty());
    assert!(store.key_list().is_empty());
    assert!(store.selected_keys().is_empty());
}

#[test]
fn test_keys_stay_unique_after_del_all_objs() {
    let mut store = store_at(1_000);
    let before = store.add("a".to_string());
    store.del_all_objs();
    let after = store.add("b".to_string());

    assert_ne!(before, after);
}

#[test]
fn test_row_scenario() {
    let t = 1_700_000_000_123;
    let mut store = store_at(t);

    let key = store.add_obj_to_store("x".to_string(), "row");
    assert_eq!(key, format!("row_{}", t));
    assert!(store.has_key("row_1700000000123"));

    store.select_obj("row_1700000000123");
    assert_eq!(store.selected_keys(), &["row_1700000000123"]);

    store.del_obj_from_store("row_1700000000123");
    assert!(store.store().is_empty());
    assert!(store.key_list().is_empty());
    assert!(store.selected_keys().is_empty());
}

#[test]
fn test_same_tick_adds_stay_separate_by_default() {
    let mut store = store_at(1_000);

    let keys: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|item| store.add_obj_to_store(item.to_string(), "row"))
        .collect();

    assert_eq!(keys, ["row_1000", "row_1001", "row_1002"]);
    assert_eq!(store.len(), 3);
    assert_consistent(&store);
}

#[test]
fn test_same_tick_adds_merge_with_overwrite_policy() {
    let config = StoreConfig {
        on_collision: CollisionPolicy::Overwrite,
        ..StoreConfig::default()
    };
    let mut store: MultiSelectStore<String, ManualClock> =
        MultiSelectStore::with_clock(ManualClock::new(1_000), &config);

    let first = store.add_obj_to_store("a".to_string(), "row");
    let second = store.add_obj_to_store("b".to_string(), "row");

    assert_eq!(first, second);
    assert_eq!(store.len(), 1);
    assert_eq!(store.key_list().len(), 1);
    assert_eq!(store.get(&first).map(String::as_str), Some("b"));
    assert_consistent(&store);
}

#[test]
fn test_default_prefix_applies_to_empty_prefix() {
    let config = StoreConfig {
        default_prefix: "tag".to_string(),
        ..StoreConfig::default()
    };
    let mut store: MultiSelectStore<String, ManualClock> =
        MultiSelectStore::with_clock(ManualClock::new(5), &config);

    assert_eq!(store.add("a".to_string()), "tag_5");
    assert_eq!(store.add_obj_to_store("b".to_string(), "row"), "row_6");
}

#[test]
fn test_toggle_obj() {
    let mut store = store_at(1_000);
    let key = store.add("a".to_string());

    assert!(store.toggle_obj(&key));
    assert!(store.is_selected(&key));
    assert!(!store.toggle_obj(&key));
    assert!(!store.is_selected(&key));
}

#[test]
fn test_iter_follows_key_list_order() {
    let mut store = store_at(1_000);
    store.add("first".to_string());
    store.add("second".to_string());
    store.add("third".to_string());

    let items: Vec<&str> = store.iter().map(|(_, item)| item.as_str()).collect();
    assert_eq!(items, ["first", "second", "third"]);
}

#[test]
fn test_adds_at_max_timestamp_overwrite() {
    let mut store = store_at(i64::MAX);

    let first = store.add("a".to_string());
    let second = store.add("b".to_string());

    assert_eq!(first, "9223372036854775807");
    assert_eq!(second, first);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&first).map(String::as_str), Some("b"));
    assert_consistent(&store);
}

#[test]
fn test_digit_separator_falls_back_to_underscore() {
    let config = StoreConfig {
        separator: "0".to_string(),
        ..StoreConfig::default()
    };
    let clock = ManualClock::new(5);
    let mut store: MultiSelectStore<String, &ManualClock> =
        MultiSelectStore::with_clock(&clock, &config);

    let a = store.add_obj_to_store("a".to_string(), "1");
    clock.set(105);
    let b = store.add_obj_to_store("b".to_string(), "");

    assert_eq!(a, "1_5");
    assert_eq!(b, "105");
    assert_eq!(store.len(), 2);
    assert_eq!(store.key_generator().separator(), "_");
}
