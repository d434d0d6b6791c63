use shared::{
    domain::{Direction, EngineKind},
    trace::{Relocation, TraceEvent},
};

use crate::{SortEngine, TraceSink};

/// Adjacent-swap sort. The scanned range shrinks by one per pass, and a pass
/// without swaps ends the sort early.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortEngine for BubbleSort {
    fn kind(&self) -> EngineKind {
        EngineKind::Bubble
    }

    fn sort_traced(
        &self,
        mut values: Vec<i32>,
        direction: Direction,
        sink: &mut dyn TraceSink,
    ) -> Vec<i32> {
        let n = values.len();

        for pass in 0..n.saturating_sub(1) {
            if sink.enabled() {
                sink.record(TraceEvent::PassStarted {
                    pass: pass + 1,
                    snapshot: values.clone(),
                });
            }

            let mut swapped = false;
            for j in 0..n - pass - 1 {
                if !direction.violates(values[j], values[j + 1]) {
                    continue;
                }
                values.swap(j, j + 1);
                swapped = true;

                if sink.enabled() {
                    sink.record(TraceEvent::Relocated {
                        relocation: Relocation::Swap {
                            moved_right: values[j + 1],
                            moved_left: values[j],
                        },
                        snapshot: values.clone(),
                    });
                }
            }

            if !swapped {
                break;
            }
        }

        values
    }
}
