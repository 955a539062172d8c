// Integration tests for the instrumented executor: frame ordering,
// state lifecycle, pacing controls and cooperative cancellation.

use std::sync::mpsc;
use std::thread;

use algotty::catalog::{Family, CATALOG};
use algotty::engine::{Executor, Highlight, Outcome, Phase, StepFrame, Strategy, Value};

fn multiset(values: &[Value]) -> Vec<Value> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}

#[test]
fn load_data_resets_state_and_emits_an_idle_frame() {
    let (tx, rx) = mpsc::channel();
    let mut executor = Executor::new(vec![3, 1, 2], tx);
    executor.set_pacing(0);
    executor.run("bubbleSort").expect("run failed");
    assert!(executor.state().comparisons > 0);
    let _ = rx.try_iter().count();

    executor.load_data(vec![9, 8, 7, 6]);
    let state = executor.state();
    assert_eq!(state.comparisons, 0);
    assert_eq!(state.swaps, 0);
    assert_eq!(state.found, None);
    assert!(!state.running);

    let frames: Vec<StepFrame> = rx.try_iter().collect();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].phase, Phase::Idle);
    assert_eq!(frames[0].data, vec![9, 8, 7, 6]);
    assert!(frames[0].highlights.is_empty());
}

#[test]
fn frames_arrive_in_program_order_one_per_primitive() {
    let (tx, rx) = mpsc::channel();
    let mut executor = Executor::new(vec![5, 3, 8, 1, 2], tx);
    executor.set_pacing(0);
    executor.run("bubbleSort").expect("run failed");

    let frames: Vec<StepFrame> = rx.try_iter().collect();
    let (mut comparisons, mut swaps) = (0u64, 0u64);
    for frame in &frames {
        match frame.phase {
            Phase::Running => {
                // Each running frame reports exactly one new operation.
                let delta = (frame.stats.comparisons - comparisons)
                    + (frame.stats.swaps - swaps);
                assert_eq!(delta, 1, "frame skipped or batched an operation");
                match frame.highlight {
                    Highlight::Compare => assert_eq!(frame.stats.comparisons, comparisons + 1),
                    Highlight::Swap => assert_eq!(frame.stats.swaps, swaps + 1),
                    other => panic!("unexpected highlight {:?} in a sort", other),
                }
                comparisons = frame.stats.comparisons;
                swaps = frame.stats.swaps;
            }
            Phase::Sorted => {
                assert_eq!(frame.stats.comparisons, comparisons);
                assert_eq!(frame.stats.swaps, swaps);
            }
            other => panic!("unexpected phase {:?}", other),
        }
    }
    assert_eq!(comparisons, 10);
    assert_eq!(swaps, 7);
}

#[test]
fn catalog_ids_match_the_strategy_registry() {
    for info in CATALOG {
        let strategy = Strategy::parse(info.id).expect("catalog id not registered");
        assert_eq!(strategy.id(), info.id);
        assert_eq!(strategy.is_search(), info.family == Family::Searching);
    }
}

#[test]
fn found_index_is_reported_in_state_and_outcome() {
    let (tx, _rx) = mpsc::channel();
    let mut executor = Executor::new(vec![2, 4, 6, 8], tx);
    executor.set_pacing(0);
    executor.set_target(6);
    assert_eq!(executor.target(), Some(6));
    let outcome = executor.run("linearSearch").expect("run failed");
    assert_eq!(outcome, Outcome::Found(2));
    let state = executor.state();
    assert_eq!(state.found, Some(2));
    assert!(!state.running);
}

#[test]
fn state_is_frozen_between_runs() {
    let (tx, _rx) = mpsc::channel();
    let mut executor = Executor::new(vec![3, 1, 2], tx);
    executor.set_pacing(0);
    executor.run("bubbleSort").expect("run failed");
    let first = executor.state();
    let second = executor.state();
    assert_eq!(first, second);

    // A new run starts over from zero.
    executor.load_data(vec![2, 1]);
    executor.run("bubbleSort").expect("run failed");
    assert_eq!(executor.state().comparisons, 1);
    assert_eq!(executor.state().swaps, 1);
}

#[test]
fn cancellation_stops_the_run_at_a_primitive_boundary() {
    let data: Vec<Value> = (1..=30).rev().collect();
    let input_multiset = multiset(&data);
    let naive_comparisons: u64 = 30 * 29 / 2;

    let (tx, rx) = mpsc::channel();
    let mut executor = Executor::new(data, tx);
    executor.set_pacing(2);
    let controls = executor.controls();
    let handle = thread::spawn(move || executor.run("bubbleSort"));

    // Let a few steps through, then request cancellation.
    for _ in 0..3 {
        rx.recv().expect("worker hung up early");
    }
    controls.cancel();

    let outcome = handle
        .join()
        .expect("worker panicked")
        .expect("run reported an error");
    assert_eq!(outcome, Outcome::Cancelled);

    let frames: Vec<StepFrame> = rx.try_iter().collect();
    let last = frames.last().expect("no terminal frame");
    assert_eq!(last.phase, Phase::Cancelled);
    // The run stopped well short of completion and never lost an element.
    assert!(last.stats.comparisons < naive_comparisons);
    assert_eq!(multiset(&last.data), input_multiset);
    // Nothing after the cancelled terminal frame.
    assert!(frames.iter().rev().skip(1).all(|f| f.phase == Phase::Running));
}

#[test]
fn a_new_run_clears_a_stale_cancel_request() {
    let (tx, _rx) = mpsc::channel();
    let mut executor = Executor::new(vec![3, 1, 2], tx);
    executor.set_pacing(0);
    executor.cancel();
    let outcome = executor.run("bubbleSort").expect("run failed");
    assert_eq!(outcome, Outcome::Sorted);
}

#[test]
fn pacing_can_be_changed_through_the_shared_controls() {
    let (tx, _rx) = mpsc::channel();
    let executor = Executor::new(vec![1, 2, 3], tx);
    let controls = executor.controls();
    controls.set_pacing(0);
    assert!(controls.pacing().is_zero());
    controls.set_pacing(250);
    assert_eq!(controls.pacing().as_millis(), 250);
}

#[test]
fn independent_executors_run_concurrently() {
    let sorter = {
        let (tx, _rx) = mpsc::channel();
        let mut executor = Executor::new(vec![9, 2, 7, 4, 1, 8], tx);
        executor.set_pacing(1);
        thread::spawn(move || {
            let outcome = executor.run("quickSort").expect("sort failed");
            (outcome, executor.data().to_vec())
        })
    };
    let searcher = {
        let (tx, _rx) = mpsc::channel();
        let mut executor = Executor::new(vec![1, 3, 5, 7, 9], tx);
        executor.set_pacing(1);
        executor.set_target(9);
        thread::spawn(move || executor.run("binarySearch").expect("search failed"))
    };

    let (sort_outcome, sorted) = sorter.join().expect("sorter panicked");
    assert_eq!(sort_outcome, Outcome::Sorted);
    assert_eq!(sorted, vec![1, 2, 4, 7, 8, 9]);
    assert_eq!(searcher.join().expect("searcher panicked"), Outcome::Found(4));
}
