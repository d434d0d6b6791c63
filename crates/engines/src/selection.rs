use shared::{
    domain::{Direction, EngineKind},
    trace::{Relocation, TraceEvent},
};

use crate::{SortEngine, TraceSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortEngine for SelectionSort {
    fn kind(&self) -> EngineKind {
        EngineKind::Selection
    }

    fn sort_traced(
        &self,
        mut values: Vec<i32>,
        direction: Direction,
        sink: &mut dyn TraceSink,
    ) -> Vec<i32> {
        let n = values.len();

        for i in 0..n.saturating_sub(1) {
            // Strict comparison keeps the leftmost of equal candidates.
            let mut selected = i;
            for j in i + 1..n {
                if direction.violates(values[selected], values[j]) {
                    selected = j;
                }
            }

            if selected == i {
                continue;
            }
            values.swap(i, selected);

            if sink.enabled() {
                sink.record(TraceEvent::Relocated {
                    relocation: Relocation::Select {
                        value: values[i],
                        position: i,
                    },
                    snapshot: values.clone(),
                });
            }
        }

        values
    }
}
