use super::*;
use shared::trace::Relocation;

fn request(engine: EngineKind, direction: Direction) -> SortRequest {
    SortRequest {
        engine,
        direction,
        trace: true,
    }
}

#[test]
fn bubble_sorts_scenario_in_three_passes() {
    let (sorted, trace) = record(
        request(EngineKind::Bubble, Direction::Ascending),
        vec![5, 3, 8, 1],
    );
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(trace.pass_count(), 3);
    assert_eq!(trace.last_snapshot(), Some(&[1, 3, 5, 8][..]));
}

#[test]
fn bubble_stops_after_first_pass_without_swaps() {
    let (sorted, trace) = record(
        request(EngineKind::Bubble, Direction::Ascending),
        vec![2, 1, 3, 4],
    );
    assert_eq!(sorted, vec![1, 2, 3, 4]);
    // Up to three passes are possible; the second finds nothing to swap.
    assert_eq!(trace.pass_count(), 2);
    assert_eq!(trace.relocation_count(), 1);
    assert!(trace.events()[2].is_pass_boundary());
}

#[test]
fn bubble_trace_reports_swapped_values_and_snapshots() {
    let (_, trace) = record(
        request(EngineKind::Bubble, Direction::Ascending),
        vec![5, 3, 8, 1],
    );
    let events = trace.into_events();
    assert_eq!(
        events[0],
        TraceEvent::PassStarted {
            pass: 1,
            snapshot: vec![5, 3, 8, 1]
        }
    );
    assert_eq!(
        events[1],
        TraceEvent::Relocated {
            relocation: Relocation::Swap {
                moved_right: 5,
                moved_left: 3
            },
            snapshot: vec![3, 5, 8, 1]
        }
    );
    assert_eq!(
        events[2],
        TraceEvent::Relocated {
            relocation: Relocation::Swap {
                moved_right: 8,
                moved_left: 1
            },
            snapshot: vec![3, 5, 1, 8]
        }
    );
    assert_eq!(
        events[3],
        TraceEvent::PassStarted {
            pass: 2,
            snapshot: vec![3, 5, 1, 8]
        }
    );
}

#[test]
fn bubble_is_stable_under_strict_comparison() {
    let (_, trace) = record(
        request(EngineKind::Bubble, Direction::Descending),
        vec![4, 4, 4],
    );
    assert_eq!(trace.relocation_count(), 0);
    assert_eq!(trace.pass_count(), 1);
}

#[test]
fn odd_numbers_reverse_under_every_engine() {
    for kind in EngineKind::ALL {
        let sorted = engine_for(kind).sort(vec![1, 3, 5, 7, 9], Direction::Descending);
        assert_eq!(sorted, vec![9, 7, 5, 3, 1], "{kind}");
    }
}

#[test]
fn empty_and_single_inputs_produce_no_events() {
    for kind in EngineKind::ALL {
        for direction in [Direction::Ascending, Direction::Descending] {
            let (sorted, trace) = record(request(kind, direction), vec![]);
            assert!(sorted.is_empty());
            assert!(trace.is_empty(), "{kind} {direction}");

            let (sorted, trace) = record(request(kind, direction), vec![-7]);
            assert_eq!(sorted, vec![-7]);
            assert!(trace.is_empty(), "{kind} {direction}");
        }
    }
}

#[test]
fn selection_skips_ties_and_in_place_minimums() {
    let (sorted, trace) = record(
        request(EngineKind::Selection, Direction::Ascending),
        vec![4, 4, 4],
    );
    assert_eq!(sorted, vec![4, 4, 4]);
    assert!(trace.is_empty());
}

#[test]
fn selection_reports_value_and_destination() {
    let (sorted, trace) = record(
        request(EngineKind::Selection, Direction::Ascending),
        vec![3, 1, 2],
    );
    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(
        trace.events(),
        &[
            TraceEvent::Relocated {
                relocation: Relocation::Select {
                    value: 1,
                    position: 0
                },
                snapshot: vec![1, 3, 2]
            },
            TraceEvent::Relocated {
                relocation: Relocation::Select {
                    value: 2,
                    position: 1
                },
                snapshot: vec![1, 2, 3]
            },
        ]
    );
}

#[test]
fn selection_prefers_leftmost_extreme() {
    // Both 9s are maximal; picking the leftmost leaves the other one in place.
    let (sorted, trace) = record(
        request(EngineKind::Selection, Direction::Descending),
        vec![1, 9, 9],
    );
    assert_eq!(sorted, vec![9, 9, 1]);
    assert_eq!(
        trace.events()[0],
        TraceEvent::Relocated {
            relocation: Relocation::Select {
                value: 9,
                position: 0
            },
            snapshot: vec![9, 1, 9]
        }
    );
}

#[test]
fn insertion_emits_one_event_per_key() {
    let (sorted, trace) = record(
        request(EngineKind::Insertion, Direction::Ascending),
        vec![4, 2, 3, 1],
    );
    assert_eq!(sorted, vec![1, 2, 3, 4]);
    assert_eq!(trace.len(), 3);
    assert_eq!(
        trace.events()[2],
        TraceEvent::Relocated {
            relocation: Relocation::Insert {
                value: 1,
                from: 3,
                position: 0
            },
            snapshot: vec![1, 2, 3, 4]
        }
    );
}

#[test]
fn insertion_on_sorted_input_reports_no_moves() {
    let (sorted, trace) = record(
        request(EngineKind::Insertion, Direction::Ascending),
        vec![1, 2, 3],
    );
    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.relocation_count(), 0);
}

#[test]
fn run_streams_events_only_when_requested() {
    let mut seen = Vec::new();
    let sorted = run(
        request(EngineKind::Bubble, Direction::Ascending),
        vec![2, 1],
        |event| seen.push(event),
    );
    assert_eq!(sorted, vec![1, 2]);
    assert_eq!(seen.len(), 2);

    let mut calls = 0;
    let quiet = SortRequest {
        trace: false,
        ..request(EngineKind::Bubble, Direction::Ascending)
    };
    let sorted = run(quiet, vec![2, 1], |_| calls += 1);
    assert_eq!(sorted, vec![1, 2]);
    assert_eq!(calls, 0);
}

#[test]
fn engine_lookup_matches_kind() {
    for kind in EngineKind::ALL {
        assert_eq!(engine_for(kind).kind(), kind);
    }
}
