use shared::{
    domain::{Direction, EngineKind},
    trace::{Relocation, TraceEvent},
};

use crate::{SortEngine, TraceSink};

/// Grows a sorted prefix one key at a time. Emits one event per key, whether or
/// not the key had to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortEngine for InsertionSort {
    fn kind(&self) -> EngineKind {
        EngineKind::Insertion
    }

    fn sort_traced(
        &self,
        mut values: Vec<i32>,
        direction: Direction,
        sink: &mut dyn TraceSink,
    ) -> Vec<i32> {
        for i in 1..values.len() {
            let key = values[i];
            let mut slot = i;
            while slot > 0 && direction.violates(values[slot - 1], key) {
                values[slot] = values[slot - 1];
                slot -= 1;
            }
            values[slot] = key;

            if sink.enabled() {
                sink.record(TraceEvent::Relocated {
                    relocation: Relocation::Insert {
                        value: key,
                        from: i,
                        position: slot,
                    },
                    snapshot: values.clone(),
                });
            }
        }

        values
    }
}
