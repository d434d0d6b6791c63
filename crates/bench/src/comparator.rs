use shared::{
    domain::{Direction, EngineKind},
    timing::{ComparisonResult, TimingSample},
};
use tracing::{info, warn};

use crate::{time_engine, Clock};

/// Times every engine on its own copy of `input`, in declaration order.
///
/// The reported sorted array is the first one produced, which is bubble sort's
/// unless its measurement failed before the run started.
pub fn compare(clock: &dyn Clock, input: &[i32], direction: Direction) -> ComparisonResult {
    let mut samples = Vec::with_capacity(EngineKind::ALL.len());
    let mut sorted: Option<Vec<i32>> = None;

    for kind in EngineKind::ALL {
        let run = time_engine(clock, kind, input, direction);
        if let Some(output) = run.sorted {
            match &sorted {
                None => sorted = Some(output),
                Some(reference) if *reference != output => {
                    warn!(engine = ?kind, "engine output disagrees with reported sorted array");
                }
                Some(_) => {}
            }
        }
        samples.push(run.sample);
    }

    let ranking = rank(&samples);
    info!(
        len = input.len(),
        direction = %direction,
        ranking = ?ranking,
        "comparison finished"
    );

    ComparisonResult {
        direction,
        input_len: input.len(),
        samples,
        ranking,
        sorted,
    }
}

/// Fastest first. Equal durations keep declaration order; failed samples go last.
pub fn rank(samples: &[TimingSample]) -> Vec<EngineKind> {
    let mut ordered: Vec<&TimingSample> = samples.iter().collect();
    ordered.sort_by_key(|sample| (sample.elapsed().is_none(), sample.elapsed(), sample.engine));
    ordered.into_iter().map(|sample| sample.engine).collect()
}
