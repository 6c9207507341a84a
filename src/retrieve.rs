use std::hint::black_box;

use crate::keys::{indexed, KeyPrefix};
use crate::stores::{
    BitmapStore, GeoStore, HashStore, ListStore, SetStore, SortedSetStore, StreamStore,
    StringStore,
};

/// Retrieve phase: `ops` lookups. Returns the number of hits.
///
/// Lookups never mutate the stored elements, except for [`StreamStore`]
/// where retrieval is a dequeue.
pub trait Retrieve {
    fn retrieve_phase(&mut self, ops: usize) -> usize;
}

impl Retrieve for StringStore {
    fn retrieve_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| black_box(self.map.get(&indexed(KeyPrefix::Key, i))).is_some())
            .count()
    }
}

impl Retrieve for ListStore {
    fn retrieve_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| black_box(self.items.get(i)).is_some())
            .count()
    }
}

impl Retrieve for SetStore {
    fn retrieve_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| black_box(self.set.contains(&indexed(KeyPrefix::Value, i))))
            .count()
    }
}

impl Retrieve for SortedSetStore {
    // Probes are fresh random draws, so hits are incidental.
    fn retrieve_phase(&mut self, ops: usize) -> usize {
        let mut hits = 0;
        for _ in 0..ops {
            let probe = self.sampler.next_i32();
            if black_box(self.set.contains(&probe)) {
                hits += 1;
            }
        }
        hits
    }
}

impl Retrieve for HashStore {
    fn retrieve_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| black_box(self.map.get(&indexed(KeyPrefix::Field, i))).is_some())
            .count()
    }
}

impl Retrieve for BitmapStore {
    fn retrieve_phase(&mut self, ops: usize) -> usize {
        (0..ops).filter(|&i| black_box(self.bits.get(i))).count()
    }
}

impl Retrieve for GeoStore {
    fn retrieve_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| black_box(self.map.get(&indexed(KeyPrefix::Location, i))).is_some())
            .count()
    }
}

impl Retrieve for StreamStore {
    // Drains from the front; polling an empty queue yields None.
    fn retrieve_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|_| black_box(self.queue.pop_front()).is_some())
            .count()
    }
}
