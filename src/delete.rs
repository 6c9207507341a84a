use std::hint::black_box;

use crate::keys::{indexed, KeyPrefix};
use crate::stores::{BitmapStore, HashStore, ListStore, SetStore, SortedSetStore, StringStore};

/// Delete phase: `ops` removals. Returns how many removed an element.
pub trait Delete {
    fn delete_phase(&mut self, ops: usize) -> usize;
}

impl Delete for StringStore {
    fn delete_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| black_box(self.map.remove(&indexed(KeyPrefix::Key, i))).is_some())
            .count()
    }
}

impl Delete for ListStore {
    // Always removes the current last element.
    fn delete_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|_| black_box(self.items.pop()).is_some())
            .count()
    }
}

impl Delete for SetStore {
    fn delete_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| self.set.remove(&indexed(KeyPrefix::Value, i)))
            .count()
    }
}

impl Delete for SortedSetStore {
    // Pop-minimum, `ops` times.
    fn delete_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|_| black_box(self.set.pop_first()).is_some())
            .count()
    }
}

impl Delete for HashStore {
    fn delete_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| black_box(self.map.remove(&indexed(KeyPrefix::Field, i))).is_some())
            .count()
    }
}

impl Delete for BitmapStore {
    fn delete_phase(&mut self, ops: usize) -> usize {
        (0..ops).filter(|&i| self.bits.clear(i)).count()
    }
}
