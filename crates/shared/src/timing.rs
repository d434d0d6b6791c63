use std::time::Duration;

use crate::{
    domain::{Direction, EngineKind},
    error::ClockError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingSample {
    pub engine: EngineKind,
    pub outcome: Result<Duration, ClockError>,
}

impl TimingSample {
    pub fn measured(engine: EngineKind, elapsed: Duration) -> Self {
        Self {
            engine,
            outcome: Ok(elapsed),
        }
    }

    pub fn failed(engine: EngineKind, error: ClockError) -> Self {
        Self {
            engine,
            outcome: Err(error),
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn elapsed_ms(&self) -> Option<f64> {
        self.elapsed().map(|d| d.as_secs_f64() * 1000.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub direction: Direction,
    pub input_len: usize,
    /// One sample per engine, in declaration order.
    pub samples: Vec<TimingSample>,
    /// Fastest first; failed measurements trail.
    pub ranking: Vec<EngineKind>,
    /// Output of the first engine (in declaration order) that produced one.
    pub sorted: Option<Vec<i32>>,
}

impl ComparisonResult {
    pub fn sample(&self, engine: EngineKind) -> Option<&TimingSample> {
        self.samples.iter().find(|s| s.engine == engine)
    }

    /// First-ranked engine with a successful measurement.
    pub fn winner(&self) -> Option<EngineKind> {
        self.ranking
            .iter()
            .copied()
            .find(|kind| self.sample(*kind).is_some_and(|s| s.outcome.is_ok()))
    }
}
