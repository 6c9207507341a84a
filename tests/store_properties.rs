use inmem_bench::{
    indexed, BitmapStore, CardinalityStore, Delete, GeoStore, HashStore, Insert, KeyPrefix,
    ListStore, Retrieve, SetStore, SortedSetStore, StreamStore, StringStore,
};

mod test_utils;
use test_utils::*;

#[test]
fn test_string_store_round_trip_to_empty() {
    let mut store = StringStore::new();
    assert_eq!(store.insert_phase(N), N);
    assert_eq!(store.len(), N);
    assert_eq!(store.get("key7"), Some("value7"));

    assert_eq!(store.retrieve_phase(N), N);
    assert_eq!(store.len(), N);

    assert_eq!(store.delete_phase(N), N);
    assert!(store.is_empty());
}

#[test]
fn test_hash_store_uses_field_keys() {
    let mut store = HashStore::new();
    store.insert_phase(N);
    assert_eq!(store.len(), N);
    assert_eq!(store.get("field999"), Some("value999"));
    assert_eq!(store.get("key999"), None);

    assert_eq!(store.retrieve_phase(N), N);
    assert_eq!(store.delete_phase(N), N);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_list_positional_retrieval_and_pop_back() {
    let mut store = ListStore::new();
    store.insert_phase(N);
    assert_eq!(store.len(), N);
    for i in 0..N {
        assert_eq!(store.get(i), Some(indexed(KeyPrefix::Value, i).as_str()));
    }
    assert_eq!(store.retrieve_phase(N), N);

    // Deleting half pops from the tail, leaving the head intact.
    assert_eq!(store.delete_phase(N / 2), N / 2);
    assert_eq!(store.len(), N / 2);
    assert_eq!(store.get(N / 2 - 1), Some(indexed(KeyPrefix::Value, N / 2 - 1).as_str()));

    assert_eq!(store.delete_phase(N / 2), N / 2);
    assert!(store.is_empty());
}

#[test]
fn test_list_insert_appends_after_existing_items() {
    let mut store = ListStore::new();
    assert_eq!(store.insert_phase(3), 3);
    assert_eq!(store.insert_phase(N), N);
    assert_eq!(store.len(), N + 3);
    assert_eq!(store.get(2), Some("value2"));
    assert_eq!(store.get(3), Some("value0"));
    assert_eq!(store.get(N + 2), Some(indexed(KeyPrefix::Value, N - 1).as_str()));
}

#[test]
fn test_set_membership_then_removal() {
    let mut store = SetStore::new();
    assert_eq!(store.insert_phase(N), N);
    assert!(store.contains("value0"));
    assert!(!store.contains("value1000"));
    assert_eq!(store.retrieve_phase(N), N);
    assert_eq!(store.delete_phase(N), N);
    assert!(store.is_empty());
    assert_eq!(store.retrieve_phase(N), 0);
}

#[test]
fn test_sorted_set_minimum_and_drain() {
    let mut store = SortedSetStore::new(seeded_sampler());
    let added = store.insert_phase(N);
    assert_eq!(store.len(), added);
    assert!(added > N - 5, "too many duplicate draws: {}", added);

    let min = store.first().unwrap();
    assert!(store.iter().all(|v| min <= v));

    // Retrieval probes are random and must not touch the contents.
    let before: Vec<i32> = store.iter().collect();
    store.retrieve_phase(N);
    let after: Vec<i32> = store.iter().collect();
    assert_eq!(before, after);

    // Each delete removes the current minimum.
    let mut expected = before.into_iter();
    let second = {
        let _ = expected.next();
        expected.next()
    };
    assert_eq!(store.delete_phase(1), 1);
    assert_eq!(store.first(), second);

    store.delete_phase(N);
    assert!(store.is_empty());
}

#[test]
fn test_sorted_set_delete_on_empty_is_noop() {
    let mut store = SortedSetStore::new(seeded_sampler());
    assert_eq!(store.delete_phase(N), 0);
    assert!(store.is_empty());
}

#[test]
fn test_bitmap_set_then_clear() {
    let mut store = BitmapStore::new();
    assert_eq!(store.insert_phase(N), N);
    for i in 0..N {
        assert!(store.bits().get(i), "bit {} not set", i);
    }
    assert!(!store.bits().get(N));
    assert_eq!(store.bits().count_ones(), N);

    assert_eq!(store.retrieve_phase(N), N);
    assert_eq!(store.delete_phase(N), N);
    for i in 0..N {
        assert!(!store.bits().get(i), "bit {} not cleared", i);
    }

    // Clearing already-clear bits is fine.
    assert_eq!(store.delete_phase(N), 0);
    assert!(store.bits().is_empty());
}

#[test]
fn test_bitmap_phase_counts_come_from_the_write_itself() {
    let mut store = BitmapStore::new();
    assert_eq!(store.insert_phase(N / 2), N / 2);
    // Overlapping range: only the upper half flips.
    assert_eq!(store.insert_phase(N), N - N / 2);
    assert_eq!(store.bits().count_ones(), N);

    assert_eq!(store.delete_phase(N / 2), N / 2);
    assert_eq!(store.delete_phase(N), N - N / 2);
    assert!(store.bits().is_empty());
}

#[test]
fn test_cardinality_store_counts_exactly() {
    let mut store = CardinalityStore::new();
    assert_eq!(store.insert_phase(N), N);
    assert_eq!(store.count(), N);
    // Re-inserting the same values adds nothing.
    assert_eq!(store.insert_phase(N), 0);
    assert_eq!(store.count(), N);
}

#[test]
fn test_geospatial_coordinates_in_range_and_retrievable() {
    let mut store = GeoStore::new(seeded_sampler());
    assert_eq!(store.insert_phase(N), N);
    assert_eq!(store.len(), N);
    assert!(store.coordinates().all(|c| c.in_range()));
    for i in 0..N {
        let c = store.get(&indexed(KeyPrefix::Location, i)).unwrap();
        assert!((-90.0..90.0).contains(&c.latitude));
        assert!((-180.0..180.0).contains(&c.longitude));
    }
    assert_eq!(store.retrieve_phase(N), N);
    assert_eq!(store.len(), N);
}

#[test]
fn test_stream_drains_in_fifo_order() {
    let mut store = StreamStore::new();
    store.insert_phase(N);
    assert_eq!(store.len(), N);

    for i in 0..10 {
        assert_eq!(store.poll(), Some(indexed(KeyPrefix::Message, i)));
    }
    assert_eq!(store.retrieve_phase(N - 10), N - 10);
    assert!(store.is_empty());

    // Polling past empty yields nothing and does not fail.
    assert_eq!(store.retrieve_phase(5), 0);
    assert_eq!(store.poll(), None);
}
