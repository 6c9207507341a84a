use std::io;

use inmem_bench::{run_all, BenchConfig, Harness};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the report.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = BenchConfig::default();
    let stdout = io::stdout();
    let mut harness = Harness::new(stdout.lock());
    run_all(&config, &mut harness)?;
    Ok(())
}
