#![allow(dead_code)]

use inmem_bench::{BenchConfig, Harness, Sampler};

pub const N: usize = 1000;
pub const SEED: u64 = 0x9E3779B97F4A7C15;

pub fn seeded_config(ops: usize) -> BenchConfig {
    BenchConfig::new(ops).unwrap().with_seed(SEED)
}

pub fn seeded_sampler() -> Sampler {
    Sampler::new(Some(SEED))
}

pub fn buffer_harness() -> Harness<Vec<u8>> {
    Harness::new(Vec::new())
}

pub fn output_lines(harness: Harness<Vec<u8>>) -> Vec<String> {
    String::from_utf8(harness.into_inner())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Parses `"<Phase> Time: <ms> ms"` into its phase label and milliseconds.
pub fn parse_phase_line(line: &str) -> Option<(&str, u128)> {
    let (label, rest) = line.split_once(" Time: ")?;
    let ms = rest.strip_suffix(" ms")?.parse().ok()?;
    Some((label, ms))
}
