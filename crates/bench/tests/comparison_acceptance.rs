use bench::{compare, time_engine, MonotonicClock};
use shared::domain::{Direction, EngineKind};

#[test]
fn real_clock_comparison_reports_all_three_samples() {
    let clock = MonotonicClock::new();
    let input = [9, 2, 7, 4, 1, 8, 3, 6, 5];
    let result = compare(&clock, &input, Direction::Ascending);

    assert_eq!(result.samples.len(), 3);
    assert!(result.samples.iter().all(|s| s.outcome.is_ok()));
    assert_eq!(result.ranking.len(), 3);
    for kind in EngineKind::ALL {
        assert!(result.ranking.contains(&kind));
    }

    let durations: Vec<_> = result
        .ranking
        .iter()
        .map(|kind| result.sample(*kind).and_then(|s| s.elapsed()).expect("sample"))
        .collect();
    assert!(durations.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(result.sorted, Some(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]));
    assert!(result.winner().is_some());
}

#[test]
fn empty_input_is_timed_without_error() {
    let clock = MonotonicClock::new();
    for kind in EngineKind::ALL {
        let run = time_engine(&clock, kind, &[], Direction::Descending);
        assert!(run.sample.outcome.is_ok());
        assert_eq!(run.sorted, Some(vec![]));
    }
}
