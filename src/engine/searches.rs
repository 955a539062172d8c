//! Searching strategies expressed against the executor's primitives
//!
//! Equality checks against the target go through [`Executor::probe`] and are
//! the only counted comparisons; direction decisions reuse the value the
//! probe already rendered. Eliminated positions flash through `mark` (same
//! suspension as the probe) while the longer jumps and doublings pace
//! through `scan`. All strategies return the found index, or `None` once
//! the dataset is exhausted; an empty dataset is `None` with zero
//! comparisons and no frames.
//!
//! Jump search uses the classic fixed block size `floor(sqrt(n))`.

use crate::engine::executor::{Executor, Interrupted};
use crate::engine::frame::{FrameSink, Highlight, Value};
use crate::engine::strategy::SearchAlgorithm;

pub(crate) fn run<S: FrameSink>(
    x: &mut Executor<S>,
    algo: SearchAlgorithm,
    target: Value,
) -> Result<Option<usize>, Interrupted> {
    match algo {
        SearchAlgorithm::Linear => linear(x),
        SearchAlgorithm::Binary => binary(x, target),
        SearchAlgorithm::Interpolation => interpolation(x, target),
        SearchAlgorithm::Jump => jump(x, target),
        SearchAlgorithm::Exponential => exponential(x, target),
    }
}

fn linear<S: FrameSink>(x: &mut Executor<S>) -> Result<Option<usize>, Interrupted> {
    for i in 0..x.len() {
        if x.probe(i)? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

fn binary<S: FrameSink>(x: &mut Executor<S>, target: Value) -> Result<Option<usize>, Interrupted> {
    if x.is_empty() {
        return Ok(None);
    }
    binary_range(x, target, 0, x.len() - 1)
}

/// Closed-interval binary search with `mid = (left + right) / 2` (floor).
/// Shared with exponential search's bounded phase.
fn binary_range<S: FrameSink>(
    x: &mut Executor<S>,
    target: Value,
    mut left: usize,
    mut right: usize,
) -> Result<Option<usize>, Interrupted> {
    while left <= right {
        let mid = (left + right) / 2;
        if x.probe(mid)? {
            return Ok(Some(mid));
        }
        x.mark(mid, Highlight::Eliminate);
        if x.value(mid) < target {
            left = mid + 1;
        } else {
            if mid == 0 {
                return Ok(None);
            }
            right = mid - 1;
        }
    }
    Ok(None)
}

fn interpolation<S: FrameSink>(
    x: &mut Executor<S>,
    target: Value,
) -> Result<Option<usize>, Interrupted> {
    if x.is_empty() {
        return Ok(None);
    }
    let mut low = 0usize;
    let mut high = x.len() - 1;

    while low <= high && target >= x.value(low) && target <= x.value(high) {
        // Zero-width value interval: interpolation would divide by zero,
        // so fall back to a direct equality check.
        if low == high || x.value(low) == x.value(high) {
            return if x.probe(low)? { Ok(Some(low)) } else { Ok(None) };
        }

        let span = x.value(high) - x.value(low);
        let offset = (target - x.value(low)) * (high as Value - low as Value) / span;
        let pos = low + offset as usize;

        if x.probe(pos)? {
            return Ok(Some(pos));
        }
        x.mark(pos, Highlight::Eliminate);
        if x.value(pos) < target {
            low = pos + 1;
        } else {
            if pos == 0 {
                return Ok(None);
            }
            high = pos - 1;
        }
    }
    Ok(None)
}

fn jump<S: FrameSink>(x: &mut Executor<S>, target: Value) -> Result<Option<usize>, Interrupted> {
    let n = x.len();
    if n == 0 {
        return Ok(None);
    }
    let step = ((n as f64).sqrt().floor() as usize).max(1);

    // Jump block by block until the block's last element reaches the target.
    let mut prev = 0;
    while prev < n && x.value((prev + step - 1).min(n - 1)) < target {
        x.scan((prev + step - 1).min(n - 1), Highlight::Eliminate)?;
        prev += step;
    }

    // Linear probes inside the block that stopped the jumps.
    let end = (prev + step - 1).min(n - 1);
    for i in prev..=end {
        if x.probe(i)? {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

fn exponential<S: FrameSink>(
    x: &mut Executor<S>,
    target: Value,
) -> Result<Option<usize>, Interrupted> {
    let n = x.len();
    if n == 0 {
        return Ok(None);
    }
    if x.probe(0)? {
        return Ok(Some(0));
    }

    // Double the range while it still lies at or below the target.
    let mut i = 1;
    while i < n && x.value(i) <= target {
        x.scan(i, Highlight::Compare)?;
        i *= 2;
    }

    binary_range(x, target, i / 2, i.min(n - 1))
}
