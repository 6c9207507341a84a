use crate::keys::{indexed, KeyPrefix};
use crate::stores::{
    BitmapStore, CardinalityStore, GeoStore, HashStore, ListStore, SetStore, SortedSetStore,
    StreamStore, StringStore,
};

/// Insert phase: `ops` insertions for indices `0..ops`.
/// Returns how many of them added a new element.
pub trait Insert {
    fn insert_phase(&mut self, ops: usize) -> usize;
}

impl Insert for StringStore {
    fn insert_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| {
                self.map
                    .insert(indexed(KeyPrefix::Key, i), indexed(KeyPrefix::Value, i))
                    .is_none()
            })
            .count()
    }
}

impl Insert for ListStore {
    fn insert_phase(&mut self, ops: usize) -> usize {
        for i in 0..ops {
            self.items.push(indexed(KeyPrefix::Value, i));
        }
        ops
    }
}

impl Insert for SetStore {
    fn insert_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| self.set.insert(indexed(KeyPrefix::Value, i)))
            .count()
    }
}

impl Insert for SortedSetStore {
    // Duplicate draws are possible; they count as no-ops.
    fn insert_phase(&mut self, ops: usize) -> usize {
        let mut added = 0;
        for _ in 0..ops {
            if self.set.insert(self.sampler.next_i32()) {
                added += 1;
            }
        }
        added
    }
}

impl Insert for HashStore {
    fn insert_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| {
                self.map
                    .insert(indexed(KeyPrefix::Field, i), indexed(KeyPrefix::Value, i))
                    .is_none()
            })
            .count()
    }
}

impl Insert for BitmapStore {
    fn insert_phase(&mut self, ops: usize) -> usize {
        (0..ops).filter(|&i| self.bits.set(i)).count()
    }
}

impl Insert for CardinalityStore {
    fn insert_phase(&mut self, ops: usize) -> usize {
        (0..ops)
            .filter(|&i| self.set.insert(indexed(KeyPrefix::Value, i)))
            .count()
    }
}

impl Insert for GeoStore {
    fn insert_phase(&mut self, ops: usize) -> usize {
        let mut added = 0;
        for i in 0..ops {
            let coordinate = self.sampler.coordinate();
            if self
                .map
                .insert(indexed(KeyPrefix::Location, i), coordinate)
                .is_none()
            {
                added += 1;
            }
        }
        added
    }
}

impl Insert for StreamStore {
    fn insert_phase(&mut self, ops: usize) -> usize {
        for i in 0..ops {
            self.queue.push_back(indexed(KeyPrefix::Message, i));
        }
        ops
    }
}
