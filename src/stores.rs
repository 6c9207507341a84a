//! One owned store per category. The phase traits live in `insert.rs`,
//! `retrieve.rs` and `delete.rs`; this file holds the state and the
//! read-only accessors used to verify it.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::{BitSet, Coordinate, Sampler};

/// String key -> string value map.
#[derive(Debug, Default)]
pub struct StringStore {
    pub(crate) map: HashMap<String, String>,
}

impl StringStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }
}

/// Append-only positional list.
#[derive(Debug, Default)]
pub struct ListStore {
    pub(crate) items: Vec<String>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }
}

/// Unordered set of strings.
#[derive(Debug, Default)]
pub struct SetStore {
    pub(crate) set: HashSet<String>,
}

impl SetStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.set.len()
    }
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
    pub fn contains(&self, value: &str) -> bool {
        self.set.contains(value)
    }
}

/// Ordered set of random integers with pop-minimum.
pub struct SortedSetStore {
    pub(crate) set: BTreeSet<i32>,
    pub(crate) sampler: Sampler,
}

impl SortedSetStore {
    pub fn new(sampler: Sampler) -> Self {
        Self {
            set: BTreeSet::new(),
            sampler,
        }
    }
    pub fn len(&self) -> usize {
        self.set.len()
    }
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
    pub fn first(&self) -> Option<i32> {
        self.set.first().copied()
    }
    pub fn contains(&self, value: i32) -> bool {
        self.set.contains(&value)
    }
    /// Ascending iteration over the stored values.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.set.iter().copied()
    }
}

/// Field -> value map. Same shape as [`StringStore`], keyed by `field{i}`.
#[derive(Debug, Default)]
pub struct HashStore {
    pub(crate) map: HashMap<String, String>,
}

impl HashStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    pub fn get(&self, field: &str) -> Option<&str> {
        self.map.get(field).map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct BitmapStore {
    pub(crate) bits: BitSet,
}

impl BitmapStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn bits(&self) -> &BitSet {
        &self.bits
    }
}

/// Stand-in for an approximate distinct counter. Backed by an exact set,
/// so `count` is the true cardinality.
#[derive(Debug, Default)]
pub struct CardinalityStore {
    pub(crate) set: HashSet<String>,
}

impl CardinalityStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn count(&self) -> usize {
        self.set.len()
    }
}

/// Location key -> random coordinate.
pub struct GeoStore {
    pub(crate) map: HashMap<String, Coordinate>,
    pub(crate) sampler: Sampler,
}

impl GeoStore {
    pub fn new(sampler: Sampler) -> Self {
        Self {
            map: HashMap::new(),
            sampler,
        }
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    pub fn get(&self, location: &str) -> Option<Coordinate> {
        self.map.get(location).copied()
    }
    pub fn coordinates(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.map.values()
    }
}

/// FIFO message queue.
#[derive(Debug, Default)]
pub struct StreamStore {
    pub(crate) queue: VecDeque<String>,
}

impl StreamStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
    /// Removes and returns the oldest message, or `None` when drained.
    pub fn poll(&mut self) -> Option<String> {
        self.queue.pop_front()
    }
}
