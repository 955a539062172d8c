// Integration tests for the searching strategies

use std::sync::mpsc;

use algotty::engine::{Executor, Highlight, Outcome, Phase, StepFrame, Value, VisualizerError};

const SEARCH_IDS: &[&str] = &[
    "linearSearch",
    "binarySearch",
    "interpolationSearch",
    "jumpSearch",
    "exponentialSearch",
];

fn run_search(id: &str, data: Vec<Value>, target: Value) -> (Outcome, u64, Vec<StepFrame>) {
    let (tx, rx) = mpsc::channel();
    let mut executor = Executor::new(data, tx);
    executor.set_pacing(0);
    executor.set_target(target);
    // Discard the idle frame set_target emits; keep only run frames.
    let _ = rx.try_iter().count();
    let outcome = executor.run(id).expect("run failed");
    let frames: Vec<StepFrame> = rx.try_iter().collect();
    (outcome, executor.state().comparisons, frames)
}

#[test]
fn every_search_finds_each_present_target() {
    let data: Vec<Value> = (1..=25).map(|i| i * 3).collect();
    for &id in SEARCH_IDS {
        for (index, &target) in data.iter().enumerate() {
            let (outcome, _, _) = run_search(id, data.clone(), target);
            assert_eq!(
                outcome,
                Outcome::Found(index),
                "{} missed {} (index {})",
                id,
                target,
                index
            );
        }
    }
}

#[test]
fn every_search_reports_absent_targets_as_not_found() {
    let data: Vec<Value> = (1..=25).map(|i| i * 3).collect();
    for &id in SEARCH_IDS {
        for target in [0, 1, 4, 37, 74, 76, 200] {
            let (outcome, _, frames) = run_search(id, data.clone(), target);
            assert_eq!(outcome, Outcome::NotFound, "{} on target {}", id, target);
            let last = frames.last().expect("no frames");
            assert_eq!(last.phase, Phase::NotFound);
            assert_eq!(last.found, None);
        }
    }
}

#[test]
fn every_search_handles_an_empty_dataset() {
    for &id in SEARCH_IDS {
        let (outcome, comparisons, frames) = run_search(id, vec![], 5);
        assert_eq!(outcome, Outcome::NotFound, "{}", id);
        assert_eq!(comparisons, 0, "{}", id);
        // Nothing beyond the terminal not-found frame.
        assert_eq!(frames.len(), 1, "{}", id);
        assert_eq!(frames[0].phase, Phase::NotFound);
    }
}

// Closed-interval binary search with mid = floor((left + right) / 2):
// on [1,3,5,7,9,11] looking for 7 the probes land on 2, 4, then 3.
#[test]
fn binary_search_follows_the_documented_probe_trace() {
    let (outcome, comparisons, frames) = run_search("binarySearch", vec![1, 3, 5, 7, 9, 11], 7);
    assert_eq!(outcome, Outcome::Found(3));
    assert_eq!(comparisons, 3);

    let probes: Vec<usize> = frames
        .iter()
        .filter(|f| f.highlight == Highlight::Compare)
        .map(|f| f.highlights[0])
        .collect();
    assert_eq!(probes, vec![2, 4, 3]);
}

#[test]
fn binary_search_comparison_count_is_logarithmic() {
    for n in [1usize, 2, 5, 16, 63, 64, 100] {
        let data: Vec<Value> = (0..n as Value).map(|i| i * 2).collect();
        let bound = ((n + 1) as f64).log2().ceil() as u64;
        for target in [0, (n as Value - 1).max(0) * 2, n as Value, -1] {
            let (_, comparisons, _) = run_search("binarySearch", data.clone(), target);
            assert!(
                comparisons <= bound,
                "n={} target={}: {} probes > bound {}",
                n,
                target,
                comparisons,
                bound
            );
        }
    }
}

#[test]
fn linear_search_probes_left_to_right() {
    let (outcome, comparisons, frames) = run_search("linearSearch", vec![4, 8, 15, 16, 23], 16);
    assert_eq!(outcome, Outcome::Found(3));
    assert_eq!(comparisons, 4);
    let probes: Vec<usize> = frames
        .iter()
        .filter(|f| f.highlight == Highlight::Compare)
        .map(|f| f.highlights[0])
        .collect();
    assert_eq!(probes, vec![0, 1, 2, 3]);
}

// A constant dataset makes the interpolation denominator zero; the
// strategy must fall back to a single direct probe.
#[test]
fn interpolation_search_survives_a_zero_width_value_interval() {
    let (outcome, comparisons, _) = run_search("interpolationSearch", vec![5, 5, 5], 5);
    assert_eq!(outcome, Outcome::Found(0));
    assert_eq!(comparisons, 1);

    let (outcome, comparisons, _) = run_search("interpolationSearch", vec![5, 5, 5], 7);
    assert_eq!(outcome, Outcome::NotFound);
    assert_eq!(comparisons, 0);
}

#[test]
fn interpolation_search_rejects_targets_outside_the_value_range() {
    let (outcome, comparisons, _) = run_search("interpolationSearch", vec![10, 20, 30], 5);
    assert_eq!(outcome, Outcome::NotFound);
    assert_eq!(comparisons, 0);
}

// Classic jump search: fixed block size floor(sqrt(16)) = 4. Three block
// boundaries are scanned (uncounted), then the first probe in the final
// block hits.
#[test]
fn jump_search_uses_a_fixed_block_size() {
    let data: Vec<Value> = (1..=16).collect();
    let (outcome, comparisons, frames) = run_search("jumpSearch", data, 13);
    assert_eq!(outcome, Outcome::Found(12));
    assert_eq!(comparisons, 1);

    let scans: Vec<usize> = frames
        .iter()
        .filter(|f| f.highlight == Highlight::Eliminate)
        .map(|f| f.highlights[0])
        .collect();
    assert_eq!(scans, vec![3, 7, 11]);
}

// Doubling stops at i = 8 (= n); the bounded binary search over [4, 7]
// probes index 5 directly.
#[test]
fn exponential_search_doubles_then_binary_searches() {
    let data = vec![1, 3, 5, 7, 9, 11, 13, 15];
    let (outcome, comparisons, frames) = run_search("exponentialSearch", data, 11);
    assert_eq!(outcome, Outcome::Found(5));
    assert_eq!(comparisons, 2);

    let probes: Vec<usize> = frames
        .iter()
        .filter(|f| f.highlight == Highlight::Compare && f.highlights.len() == 1)
        .map(|f| f.highlights[0])
        .collect();
    // probe(0), the doubling scans at 1, 2, 4, then the binary probe at 5
    assert_eq!(probes, vec![0, 1, 2, 4, 5]);
}

#[test]
fn search_without_a_target_is_rejected() {
    let (tx, _rx) = mpsc::channel();
    let mut executor = Executor::new(vec![1, 2, 3], tx);
    executor.set_pacing(0);
    let err = executor.run("binarySearch").expect_err("should fail");
    assert_eq!(err, VisualizerError::NoTarget);
    // Failed preconditions leave the state idle.
    assert!(!executor.state().running);
    assert_eq!(executor.state().comparisons, 0);
}

#[test]
fn unknown_strategy_ids_are_rejected() {
    let (tx, _rx) = mpsc::channel();
    let mut executor = Executor::new(vec![1, 2, 3], tx);
    let err = executor.run("bogoSort").expect_err("should fail");
    assert_eq!(
        err,
        VisualizerError::UnknownStrategy {
            id: "bogoSort".to_string()
        }
    );
}
