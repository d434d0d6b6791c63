use std::{io::Write, time::Instant};

use anyhow::Result;
use bench::{compare, Clock};
use engines::SortRequest;
use sequence_source::{demo_sequence, DEMO_LIMIT};
use shared::{
    domain::{Direction, EngineKind},
    timing::ComparisonResult,
    trace::TraceEvent,
};

use crate::render::{
    comparison_table, engine_banner, format_event, format_millis, format_sequence,
    ComparisonReport, SortReport,
};

/// Sorts `values` and prints the result. When tracing, every event is written
/// as soon as the engine produces it.
pub fn sort_and_print(
    out: &mut dyn Write,
    request: SortRequest,
    values: Vec<i32>,
) -> Result<Vec<i32>> {
    if request.trace {
        writeln!(out, "{}", engine_banner(request.engine))?;
    }

    let mut write_error = None;
    let mut settled = false;
    let started = Instant::now();
    let sorted = engines::run(request, values, |event| {
        settled = event.is_pass_boundary();
        if write_error.is_none() {
            if let Err(error) = writeln!(out, "{}", format_event(&event)) {
                write_error = Some(error);
            }
        }
    });
    let elapsed = started.elapsed();
    if let Some(error) = write_error {
        return Err(error.into());
    }

    // A trace that ends on a pass boundary means bubble sort found nothing to swap.
    if request.trace && settled && request.engine == EngineKind::Bubble {
        writeln!(out, "No swaps needed. Array is sorted!")?;
    }

    writeln!(out, "\nSorted result: {}", format_sequence(&sorted))?;
    writeln!(
        out,
        "Time taken: {} ms",
        format_millis(elapsed.as_secs_f64() * 1000.0)
    )?;
    Ok(sorted)
}

pub fn sort_report(request: SortRequest, values: Vec<i32>) -> SortReport {
    let input = values.clone();
    let mut trace: Vec<TraceEvent> = Vec::new();
    let started = Instant::now();
    let sorted = engines::run(request, values, |event| trace.push(event));
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    SortReport {
        engine: request.engine,
        direction: request.direction,
        input,
        sorted,
        elapsed_ms,
        trace,
    }
}

/// The odd-numbers exercise: bubble sort, descending, always traced.
pub fn run_demo(out: &mut dyn Write) -> Result<Vec<i32>> {
    writeln!(out, "\n--- Original Odd Numbers Exercise ---")?;
    writeln!(out, "Finding odd numbers between 0 and {DEMO_LIMIT}...\n")?;

    let odds = demo_sequence();
    for value in &odds {
        writeln!(out, "Found odd number: {value}")?;
    }
    writeln!(out, "\nOdd numbers found: {}", format_sequence(&odds))?;
    writeln!(
        out,
        "\nNow sorting in descending order using Bubble Sort...\n"
    )?;

    let request = SortRequest {
        engine: EngineKind::Bubble,
        direction: Direction::Descending,
        trace: true,
    };
    let sorted = sort_and_print(out, request, odds)?;
    writeln!(out, "\nFinal result: {}", format_sequence(&sorted))?;
    Ok(sorted)
}

pub fn compare_and_print(
    out: &mut dyn Write,
    clock: &dyn Clock,
    input: &[i32],
    direction: Direction,
) -> Result<ComparisonResult> {
    writeln!(out, "\nOriginal array: {}", format_sequence(input))?;
    writeln!(
        out,
        "\nRunning comparison (step by step disabled for speed)...\n"
    )?;

    let result = compare(clock, input, direction);
    writeln!(out, "{}", comparison_table(&result))?;
    if let Some(sorted) = &result.sorted {
        writeln!(out, "\nSorted array: {}", format_sequence(sorted))?;
    }
    Ok(result)
}

pub fn compare_report(clock: &dyn Clock, input: &[i32], direction: Direction) -> ComparisonReport {
    ComparisonReport::from(&compare(clock, input, direction))
}

#[cfg(test)]
#[path = "tests/actions_tests.rs"]
mod tests;
