use shared::{
    domain::{Direction, EngineKind},
    trace::TraceEvent,
};
use tracing::debug;

mod bubble;
mod insertion;
mod recorder;
mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use recorder::{NoTrace, TraceRecorder, TraceSink};
pub use selection::SelectionSort;

/// A comparison sort over an owned working copy.
///
/// Engines take the sequence by value and hand it back sorted, so a caller's
/// own data is never touched. Intermediate states are only observable through
/// the sink, and only when the sink reports itself enabled.
pub trait SortEngine {
    fn kind(&self) -> EngineKind;

    fn sort_traced(
        &self,
        values: Vec<i32>,
        direction: Direction,
        sink: &mut dyn TraceSink,
    ) -> Vec<i32>;

    fn sort(&self, values: Vec<i32>, direction: Direction) -> Vec<i32> {
        self.sort_traced(values, direction, &mut NoTrace)
    }
}

pub fn engine_for(kind: EngineKind) -> &'static dyn SortEngine {
    match kind {
        EngineKind::Bubble => &BubbleSort,
        EngineKind::Selection => &SelectionSort,
        EngineKind::Insertion => &InsertionSort,
    }
}

/// Per-call options. Tracing is decided here rather than by any process-wide toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortRequest {
    pub engine: EngineKind,
    pub direction: Direction,
    pub trace: bool,
}

/// Sorts `values` as requested, handing every trace event to `on_event` as it happens.
pub fn run<F>(request: SortRequest, values: Vec<i32>, mut on_event: F) -> Vec<i32>
where
    F: FnMut(TraceEvent),
{
    debug!(
        engine = ?request.engine,
        direction = %request.direction,
        len = values.len(),
        trace = request.trace,
        "running sort engine"
    );
    let engine = engine_for(request.engine);
    if request.trace {
        engine.sort_traced(values, request.direction, &mut on_event)
    } else {
        engine.sort(values, request.direction)
    }
}

/// Runs a traced sort and keeps the whole log.
pub fn record(request: SortRequest, values: Vec<i32>) -> (Vec<i32>, TraceRecorder) {
    let mut recorder = TraceRecorder::new();
    let sorted = engine_for(request.engine).sort_traced(values, request.direction, &mut recorder);
    (sorted, recorder)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
