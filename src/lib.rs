//! Wall-clock latency of basic insert/retrieve/delete operations across a
//! fixed set of in-memory container categories.
//!
//! Each category owns one store, runs its applicable phases through a
//! [`Harness`], and reports elapsed milliseconds per phase.

use core::fmt;

mod bitset;
mod delete;
mod insert;
mod keys;
mod retrieve;
mod routines;
mod sampler;
mod stores;
mod timing;

pub use bitset::BitSet;
pub use delete::Delete;
pub use insert::Insert;
pub use keys::{indexed, KeyPrefix};
pub use retrieve::Retrieve;
pub use routines::{
    bench_bitmap, bench_geospatial, bench_hash, bench_hyperloglog, bench_list, bench_set,
    bench_sorted_set, bench_stream, bench_string, run_all, run_category, CategoryReport,
};
pub use sampler::{Coordinate, Sampler};
pub use stores::{
    BitmapStore, CardinalityStore, GeoStore, HashStore, ListStore, SetStore, SortedSetStore,
    StreamStore, StringStore,
};
pub use timing::{time, Harness, Measurement};

/// Operations per phase when nothing else is configured.
pub const DEFAULT_OPERATIONS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
    #[error("Io: {0}")]
    Io(#[from] std::io::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;

/// One of the three operation kinds a routine may time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Insert,
    Retrieve,
    Delete,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Insert => "Insert",
            Phase::Retrieve => "Retrieve",
            Phase::Delete => "Delete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The nine benchmarked container categories, in run order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    String,
    List,
    Set,
    SortedSet,
    Hash,
    Bitmap,
    HyperLogLog,
    GeoSpatial,
    Stream,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::String,
        Category::List,
        Category::Set,
        Category::SortedSet,
        Category::Hash,
        Category::Bitmap,
        Category::HyperLogLog,
        Category::GeoSpatial,
        Category::Stream,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::String => "String",
            Category::List => "List",
            Category::Set => "Set",
            Category::SortedSet => "Sorted Set",
            Category::Hash => "Hash",
            Category::Bitmap => "Bitmap",
            Category::HyperLogLog => "HyperLogLog",
            Category::GeoSpatial => "GeoSpatial",
            Category::Stream => "Stream",
        }
    }

    /// True for categories that stand in for an approximate structure.
    pub fn is_approximate(self) -> bool {
        matches!(self, Category::HyperLogLog)
    }

    /// Applicable phases, always in Insert -> Retrieve -> Delete order.
    pub fn phases(self) -> &'static [Phase] {
        match self {
            Category::HyperLogLog => &[Phase::Insert],
            Category::GeoSpatial | Category::Stream => &[Phase::Insert, Phase::Retrieve],
            _ => &[Phase::Insert, Phase::Retrieve, Phase::Delete],
        }
    }

    /// Section header line, without the trailing newline.
    pub fn header(self) -> String {
        if self.is_approximate() {
            format!("=== {} Benchmark (Approximate) ===", self.title())
        } else {
            format!("=== {} Benchmark ===", self.title())
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Run parameters. Fixed for the lifetime of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    operations: usize,
    seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            operations: DEFAULT_OPERATIONS,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn new(operations: usize) -> BenchResult<Self> {
        if operations == 0 {
            return Err(BenchError::InvalidConfig(
                "operations per phase must be at least 1".into(),
            ));
        }
        Ok(Self {
            operations,
            seed: None,
        })
    }

    /// Makes the random phases reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn operations(&self) -> usize {
        self.operations
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
