use std::time::Duration;

use super::*;
use shared::{error::ClockError, timing::TimingSample};

#[test]
fn sequences_render_like_lists() {
    assert_eq!(format_sequence(&[]), "[]");
    assert_eq!(format_sequence(&[7]), "[7]");
    assert_eq!(format_sequence(&[1, -2, 3]), "[1, -2, 3]");
}

#[test]
fn events_render_one_line_each() {
    assert_eq!(
        format_event(&TraceEvent::PassStarted {
            pass: 2,
            snapshot: vec![3, 1]
        }),
        "Pass 2: [3, 1]"
    );
    assert_eq!(
        format_event(&TraceEvent::Relocated {
            relocation: Relocation::Swap {
                moved_right: 5,
                moved_left: 3
            },
            snapshot: vec![3, 5]
        }),
        "  Swapped 5 and 3 -> [3, 5]"
    );
    assert_eq!(
        format_event(&TraceEvent::Relocated {
            relocation: Relocation::Select {
                value: 1,
                position: 0
            },
            snapshot: vec![1, 3, 2]
        }),
        "Selected 1 for position 0 -> [1, 3, 2]"
    );
    assert_eq!(
        format_event(&TraceEvent::Relocated {
            relocation: Relocation::Insert {
                value: 2,
                from: 1,
                position: 0
            },
            snapshot: vec![2, 4]
        }),
        "Inserted 2 at position 0 -> [2, 4]"
    );
}

#[test]
fn banner_names_engine_and_explains_it() {
    assert_eq!(
        engine_banner(EngineKind::Selection),
        "Starting Selection Sort...\nSelection sort finds the min/max and puts it in place\n"
    );
}

fn result_with(samples: Vec<TimingSample>, ranking: Vec<EngineKind>) -> ComparisonResult {
    ComparisonResult {
        direction: Direction::Ascending,
        input_len: 3,
        samples,
        ranking,
        sorted: Some(vec![1, 2, 3]),
    }
}

#[test]
fn table_lists_engines_in_declaration_order() {
    let result = result_with(
        vec![
            TimingSample::measured(EngineKind::Bubble, Duration::from_micros(1500)),
            TimingSample::measured(EngineKind::Selection, Duration::from_micros(250)),
            TimingSample::measured(EngineKind::Insertion, Duration::from_micros(500)),
        ],
        vec![
            EngineKind::Selection,
            EngineKind::Insertion,
            EngineKind::Bubble,
        ],
    );
    let table = comparison_table(&result);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "Results for sorting 3 numbers:");
    assert_eq!(lines[2], "Bubble Sort:         1.500 ms");
    assert_eq!(lines[3], "Selection Sort:      0.250 ms");
    assert_eq!(lines[4], "Insertion Sort:      0.500 ms");
    assert_eq!(lines[6], "Winner: Selection Sort!");
}

#[test]
fn failed_sample_is_shown_and_skipped_for_winner() {
    let result = result_with(
        vec![
            TimingSample::failed(EngineKind::Bubble, ClockError::WentBackwards),
            TimingSample::measured(EngineKind::Selection, Duration::from_micros(20)),
            TimingSample::measured(EngineKind::Insertion, Duration::from_micros(10)),
        ],
        vec![
            EngineKind::Insertion,
            EngineKind::Selection,
            EngineKind::Bubble,
        ],
    );
    let table = comparison_table(&result);
    assert!(table.contains("Bubble Sort:    clock unavailable"));
    assert!(table.ends_with("Winner: Insertion Sort!"));

    let report = serde_json::to_value(ComparisonReport::from(&result)).expect("json");
    assert_eq!(report["winner"], "insertion");
    assert!(report["samples"][0]["elapsed_ms"].is_null());
    assert_eq!(
        report["samples"][0]["error"],
        "clock went backwards between readings"
    );
}
