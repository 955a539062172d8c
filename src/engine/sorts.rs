//! Sorting strategies expressed against the executor's primitives
//!
//! All sorts are ascending and treat equal elements as already ordered.
//! Bubble, insertion and merge are stable; selection, quick and heap are
//! not. Every observation goes through [`Executor::compare`] and every
//! mutation through [`Executor::swap`] / [`Executor::place`], so the
//! instrumentation is uniform across algorithms.
//!
//! Bubble sort is the naive variant without the early-exit flag: its
//! comparison count is always `n * (n - 1) / 2`.

use crate::engine::executor::{Executor, Interrupted};
use crate::engine::frame::{FrameSink, Value};
use crate::engine::strategy::SortAlgorithm;

pub(crate) fn run<S: FrameSink>(
    x: &mut Executor<S>,
    algo: SortAlgorithm,
) -> Result<(), Interrupted> {
    match algo {
        SortAlgorithm::Bubble => bubble(x),
        SortAlgorithm::Insertion => insertion(x),
        SortAlgorithm::Selection => selection(x),
        SortAlgorithm::Merge => merge_sort(x),
        SortAlgorithm::Quick => quick_sort(x),
        SortAlgorithm::Heap => heap_sort(x),
    }
}

fn bubble<S: FrameSink>(x: &mut Executor<S>) -> Result<(), Interrupted> {
    let n = x.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if x.compare(j, j + 1)? {
                x.swap(j, j + 1)?;
            }
        }
    }
    Ok(())
}

/// Adjacent-swap insertion sort: sinks each element leftward until its
/// predecessor is no larger. Equal neighbors stop the scan, keeping the
/// sort stable.
fn insertion<S: FrameSink>(x: &mut Executor<S>) -> Result<(), Interrupted> {
    for i in 1..x.len() {
        let mut j = i;
        while j > 0 && x.compare(j - 1, j)? {
            x.swap(j - 1, j)?;
            j -= 1;
        }
    }
    Ok(())
}

fn selection<S: FrameSink>(x: &mut Executor<S>) -> Result<(), Interrupted> {
    let n = x.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            // data[min] > data[j]: a new minimum
            if x.compare(min, j)? {
                min = j;
            }
        }
        if min != i {
            x.swap(i, min)?;
        }
    }
    Ok(())
}

fn merge_sort<S: FrameSink>(x: &mut Executor<S>) -> Result<(), Interrupted> {
    if x.len() > 1 {
        merge_range(x, 0, x.len() - 1)?;
    }
    Ok(())
}

fn merge_range<S: FrameSink>(
    x: &mut Executor<S>,
    low: usize,
    high: usize,
) -> Result<(), Interrupted> {
    if low < high {
        let mid = (low + high) / 2;
        merge_range(x, low, mid)?;
        merge_range(x, mid + 1, high)?;
        merge(x, low, mid, high)?;
    }
    Ok(())
}

/// Merge `[low, mid]` and `(mid, high]` through copied-out run buffers.
/// Comparisons happen against the buffers and are tallied without a frame;
/// every write back renders through `place`. `left[i] <= right[j]` keeps
/// ties on the left, which is what makes the sort stable.
fn merge<S: FrameSink>(
    x: &mut Executor<S>,
    low: usize,
    mid: usize,
    high: usize,
) -> Result<(), Interrupted> {
    let left: Vec<Value> = (low..=mid).map(|i| x.value(i)).collect();
    let right: Vec<Value> = (mid + 1..=high).map(|i| x.value(i)).collect();

    let mut i = 0;
    let mut j = 0;
    let mut k = low;
    while i < left.len() && j < right.len() {
        x.note_comparison();
        if left[i] <= right[j] {
            x.place(k, left[i])?;
            i += 1;
        } else {
            x.place(k, right[j])?;
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        x.place(k, left[i])?;
        i += 1;
        k += 1;
    }
    while j < right.len() {
        x.place(k, right[j])?;
        j += 1;
        k += 1;
    }
    Ok(())
}

fn quick_sort<S: FrameSink>(x: &mut Executor<S>) -> Result<(), Interrupted> {
    if x.len() > 1 {
        quick_range(x, 0, x.len() - 1)?;
    }
    Ok(())
}

fn quick_range<S: FrameSink>(
    x: &mut Executor<S>,
    low: usize,
    high: usize,
) -> Result<(), Interrupted> {
    if low < high {
        let p = partition(x, low, high)?;
        if p > low {
            quick_range(x, low, p - 1)?;
        }
        quick_range(x, p + 1, high)?;
    }
    Ok(())
}

/// Lomuto partition with the pivot at `high`. `compare(high, j)` reads as
/// `pivot > data[j]`, i.e. `data[j] < pivot` strictly, so equal elements
/// land right of the pivot.
fn partition<S: FrameSink>(
    x: &mut Executor<S>,
    low: usize,
    high: usize,
) -> Result<usize, Interrupted> {
    let mut i = low;
    for j in low..high {
        if x.compare(high, j)? {
            x.swap(i, j)?;
            i += 1;
        }
    }
    x.swap(i, high)?;
    Ok(i)
}

fn heap_sort<S: FrameSink>(x: &mut Executor<S>) -> Result<(), Interrupted> {
    let n = x.len();
    if n <= 1 {
        return Ok(());
    }
    for i in (0..n / 2).rev() {
        heapify(x, n, i)?;
    }
    for end in (1..n).rev() {
        x.swap(0, end)?;
        heapify(x, end, 0)?;
    }
    Ok(())
}

/// Sift the root of the subtree at `i` down through the max-heap of the
/// first `n` elements. Comparisons are only paid for children that exist.
fn heapify<S: FrameSink>(x: &mut Executor<S>, n: usize, i: usize) -> Result<(), Interrupted> {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && x.compare(left, largest)? {
        largest = left;
    }
    if right < n && x.compare(right, largest)? {
        largest = right;
    }
    if largest != i {
        x.swap(i, largest)?;
        heapify(x, n, largest)?;
    }
    Ok(())
}
