use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::{BenchResult, Category, Phase};

/// Measure wall-clock time for a synchronous operation.
pub fn time<F, R>(work: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = work();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// One timed phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub phase: Phase,
    pub elapsed: Duration,
}

impl Measurement {
    /// Whole milliseconds, truncated.
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Report line, without the trailing newline.
    pub fn line(&self) -> String {
        format!("{} Time: {} ms", self.phase, self.millis())
    }
}

/// Runs workload units one at a time and writes their report lines to `out`.
pub struct Harness<W: Write> {
    out: W,
}

impl<W: Write> Harness<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self, category: Category) -> BenchResult<()> {
        writeln!(self.out, "{}", category.header())?;
        Ok(())
    }

    /// Times `work` and reports it under `phase`.
    ///
    /// The end instant is taken before anything is written. A panic in
    /// `work` unwinds through here and nothing is reported for the phase.
    pub fn measure<F, R>(&mut self, phase: Phase, work: F) -> BenchResult<(R, Measurement)>
    where
        F: FnOnce() -> R,
    {
        let (result, elapsed) = time(work);
        let result = black_box(result);
        let measurement = Measurement { phase, elapsed };
        writeln!(self.out, "{}", measurement.line())?;
        Ok((result, measurement))
    }

    pub fn flush(&mut self) -> BenchResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
