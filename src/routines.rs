use std::io::Write;

use crate::stores::{
    BitmapStore, CardinalityStore, GeoStore, HashStore, ListStore, SetStore, SortedSetStore,
    StreamStore, StringStore,
};
use crate::{
    BenchConfig, BenchResult, Category, Delete, Harness, Insert, Measurement, Phase, Retrieve,
    Sampler,
};

/// Measurements of one routine, in the order they were printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: Category,
    pub measurements: Vec<Measurement>,
}

impl CategoryReport {
    fn new(category: Category) -> Self {
        Self {
            category,
            measurements: Vec::with_capacity(category.phases().len()),
        }
    }

    fn record(&mut self, m: Measurement, ops: usize) {
        tracing::debug!(
            category = %self.category,
            phase = %m.phase,
            ops,
            elapsed = ?m.elapsed,
            "phase measured"
        );
        self.measurements.push(m);
    }

    pub fn phases(&self) -> Vec<Phase> {
        self.measurements.iter().map(|m| m.phase).collect()
    }
}

/// Each seeded store gets its own stream so categories don't share draws.
fn sampler_for(config: &BenchConfig, category: Category) -> Sampler {
    Sampler::new(config.seed().map(|s| s.wrapping_add(category as u64)))
}

fn begin<W: Write>(harness: &mut Harness<W>, category: Category) -> BenchResult<CategoryReport> {
    tracing::info!(category = %category, "routine start");
    harness.header(category)?;
    Ok(CategoryReport::new(category))
}

fn insert<S: Insert, W: Write>(
    harness: &mut Harness<W>,
    report: &mut CategoryReport,
    store: &mut S,
    ops: usize,
) -> BenchResult<()> {
    let (_, m) = harness.measure(Phase::Insert, || store.insert_phase(ops))?;
    report.record(m, ops);
    Ok(())
}

fn retrieve<S: Retrieve, W: Write>(
    harness: &mut Harness<W>,
    report: &mut CategoryReport,
    store: &mut S,
    ops: usize,
) -> BenchResult<()> {
    let (_, m) = harness.measure(Phase::Retrieve, || store.retrieve_phase(ops))?;
    report.record(m, ops);
    Ok(())
}

fn delete<S: Delete, W: Write>(
    harness: &mut Harness<W>,
    report: &mut CategoryReport,
    store: &mut S,
    ops: usize,
) -> BenchResult<()> {
    let (_, m) = harness.measure(Phase::Delete, || store.delete_phase(ops))?;
    report.record(m, ops);
    Ok(())
}

/// Insert, retrieve and delete for stores that support all three.
fn full_cycle<S, W>(
    harness: &mut Harness<W>,
    category: Category,
    mut store: S,
    ops: usize,
) -> BenchResult<CategoryReport>
where
    S: Insert + Retrieve + Delete,
    W: Write,
{
    let mut report = begin(harness, category)?;
    insert(harness, &mut report, &mut store, ops)?;
    retrieve(harness, &mut report, &mut store, ops)?;
    delete(harness, &mut report, &mut store, ops)?;
    Ok(report)
}

pub fn bench_string<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    full_cycle(harness, Category::String, StringStore::new(), config.operations())
}

pub fn bench_list<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    full_cycle(harness, Category::List, ListStore::new(), config.operations())
}

pub fn bench_set<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    full_cycle(harness, Category::Set, SetStore::new(), config.operations())
}

pub fn bench_sorted_set<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    let store = SortedSetStore::new(sampler_for(config, Category::SortedSet));
    full_cycle(harness, Category::SortedSet, store, config.operations())
}

pub fn bench_hash<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    full_cycle(harness, Category::Hash, HashStore::new(), config.operations())
}

pub fn bench_bitmap<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    full_cycle(harness, Category::Bitmap, BitmapStore::new(), config.operations())
}

/// Insert only; the backing set is exact.
pub fn bench_hyperloglog<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    let mut report = begin(harness, Category::HyperLogLog)?;
    let mut store = CardinalityStore::new();
    insert(harness, &mut report, &mut store, config.operations())?;
    Ok(report)
}

pub fn bench_geospatial<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    let mut report = begin(harness, Category::GeoSpatial)?;
    let mut store = GeoStore::new(sampler_for(config, Category::GeoSpatial));
    insert(harness, &mut report, &mut store, config.operations())?;
    retrieve(harness, &mut report, &mut store, config.operations())?;
    Ok(report)
}

/// Retrieval drains the queue, so there is no separate delete phase.
pub fn bench_stream<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    let mut report = begin(harness, Category::Stream)?;
    let mut store = StreamStore::new();
    insert(harness, &mut report, &mut store, config.operations())?;
    retrieve(harness, &mut report, &mut store, config.operations())?;
    Ok(report)
}

pub fn run_category<W: Write>(
    category: Category,
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<CategoryReport> {
    let _span = tracing::info_span!("routine", category = %category).entered();
    match category {
        Category::String => bench_string(config, harness),
        Category::List => bench_list(config, harness),
        Category::Set => bench_set(config, harness),
        Category::SortedSet => bench_sorted_set(config, harness),
        Category::Hash => bench_hash(config, harness),
        Category::Bitmap => bench_bitmap(config, harness),
        Category::HyperLogLog => bench_hyperloglog(config, harness),
        Category::GeoSpatial => bench_geospatial(config, harness),
        Category::Stream => bench_stream(config, harness),
    }
}

/// Runs all nine routines in fixed order. Stops at the first error.
pub fn run_all<W: Write>(
    config: &BenchConfig,
    harness: &mut Harness<W>,
) -> BenchResult<Vec<CategoryReport>> {
    let mut reports = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        reports.push(run_category(category, config, harness)?);
    }
    harness.flush()?;
    tracing::info!(
        categories = reports.len(),
        operations = config.operations(),
        "run complete"
    );
    Ok(reports)
}
