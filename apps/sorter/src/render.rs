use serde::Serialize;
use shared::{
    domain::{Direction, EngineKind},
    timing::ComparisonResult,
    trace::{Relocation, TraceEvent},
};

pub const RULE: &str = "----------------------------------------";

pub fn format_sequence(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(i32::to_string).collect();
    format!("[{}]", items.join(", "))
}

pub fn format_event(event: &TraceEvent) -> String {
    match event {
        TraceEvent::PassStarted { pass, snapshot } => {
            format!("Pass {pass}: {}", format_sequence(snapshot))
        }
        TraceEvent::Relocated {
            relocation,
            snapshot,
        } => {
            let snapshot = format_sequence(snapshot);
            match relocation {
                Relocation::Swap {
                    moved_right,
                    moved_left,
                } => format!("  Swapped {moved_right} and {moved_left} -> {snapshot}"),
                Relocation::Select { value, position } => {
                    format!("Selected {value} for position {position} -> {snapshot}")
                }
                Relocation::Insert {
                    value, position, ..
                } => format!("Inserted {value} at position {position} -> {snapshot}"),
            }
        }
    }
}

pub fn engine_banner(kind: EngineKind) -> String {
    format!("Starting {kind}...\n{}\n", kind.summary())
}

pub fn format_millis(ms: f64) -> String {
    format!("{ms:.3}")
}

/// Timing table in declaration order followed by the winner line.
pub fn comparison_table(result: &ComparisonResult) -> String {
    let mut lines = vec![
        format!("Results for sorting {} numbers:", result.input_len),
        RULE.to_string(),
    ];
    for sample in &result.samples {
        let label = format!("{}:", sample.engine);
        let value = match sample.elapsed_ms() {
            Some(ms) => format!("{ms:>10.3} ms"),
            None => format!("{:>10}", "clock unavailable"),
        };
        lines.push(format!("{label:<16}{value}"));
    }
    lines.push(RULE.to_string());
    match result.winner() {
        Some(kind) => lines.push(format!("Winner: {kind}!")),
        None => lines.push("Winner: none, no measurement succeeded".to_string()),
    }
    lines.join("\n")
}

pub const LEARN_TEXT: &str = "\
===========================================
      Sorting Algorithms Explained
===========================================

--- BUBBLE SORT ---
How it works:
  1. Compare each pair of adjacent elements
  2. Swap them if they're in the wrong order
  3. Repeat until no swaps are needed
Best for: Small arrays or nearly sorted data
Speed: O(n^2) which means slow for large data

--- SELECTION SORT ---
How it works:
  1. Find the smallest element in the array
  2. Swap it with the first unsorted position
  3. Repeat for the rest of the array
Best for: When memory writes are expensive
Speed: O(n^2) but fewer swaps than bubble sort

--- INSERTION SORT ---
How it works:
  1. Take the next unsorted element
  2. Find its correct position in the sorted part
  3. Shift elements and insert it
Best for: Small arrays or nearly sorted data
Speed: O(n^2) worst case, O(n) for sorted data

--- WHICH TO USE? ---
For real programs, use slice::sort or slice::sort_unstable,
which use optimized algorithms.
These simple sorts are for learning purposes.";

#[derive(Debug, Serialize)]
pub struct SortReport {
    pub engine: EngineKind,
    pub direction: Direction,
    pub input: Vec<i32>,
    pub sorted: Vec<i32>,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TraceEvent>,
}

#[derive(Debug, Serialize)]
pub struct SampleReport {
    pub engine: EngineKind,
    pub elapsed_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub direction: Direction,
    pub input_len: usize,
    pub samples: Vec<SampleReport>,
    pub ranking: Vec<EngineKind>,
    pub winner: Option<EngineKind>,
    pub sorted: Option<Vec<i32>>,
}

impl From<&ComparisonResult> for ComparisonReport {
    fn from(result: &ComparisonResult) -> Self {
        Self {
            direction: result.direction,
            input_len: result.input_len,
            samples: result
                .samples
                .iter()
                .map(|sample| SampleReport {
                    engine: sample.engine,
                    elapsed_ms: sample.elapsed_ms(),
                    error: sample.outcome.as_ref().err().map(ToString::to_string),
                })
                .collect(),
            ranking: result.ranking.clone(),
            winner: result.winner(),
            sorted: result.sorted.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
