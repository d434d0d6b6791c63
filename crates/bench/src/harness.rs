use std::hint::black_box;

use engines::engine_for;
use shared::{
    domain::{Direction, EngineKind},
    error::ClockError,
    timing::TimingSample,
};
use tracing::{debug, warn};

use crate::Clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedRun {
    pub sample: TimingSample,
    /// `None` only when the clock failed before the engine was started.
    pub sorted: Option<Vec<i32>>,
}

/// Times one untraced run of `kind` over a private copy of `input`.
///
/// A failed clock read only spoils this sample; the run is not retried.
pub fn time_engine(
    clock: &dyn Clock,
    kind: EngineKind,
    input: &[i32],
    direction: Direction,
) -> TimedRun {
    let engine = engine_for(kind);
    let working = input.to_vec();

    let start = match clock.now() {
        Ok(start) => start,
        Err(err) => {
            warn!(engine = ?kind, error = %err, "clock read failed before run");
            return TimedRun {
                sample: TimingSample::failed(kind, err),
                sorted: None,
            };
        }
    };

    let sorted = black_box(engine.sort(black_box(working), direction));

    let outcome = clock
        .now()
        .and_then(|end| end.checked_sub(start).ok_or(ClockError::WentBackwards));
    let sample = match outcome {
        Ok(elapsed) => {
            debug!(engine = ?kind, elapsed_us = elapsed.as_micros() as u64, "timed run");
            TimingSample::measured(kind, elapsed)
        }
        Err(err) => {
            warn!(engine = ?kind, error = %err, "clock read failed after run");
            TimingSample::failed(kind, err)
        }
    };

    TimedRun {
        sample,
        sorted: Some(sorted),
    }
}
