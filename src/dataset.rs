//! Random dataset generation
//!
//! The sorting visualizer takes uniform random values; the searching
//! visualizer needs a sorted, duplicate-free dataset so the sorted-input
//! algorithms are well-defined. Targets are drawn present roughly 70% of
//! the time so "not found" runs show up too.

use rand::Rng;
use rustc_hash::FxHashSet;

use crate::engine::Value;

/// Uniform random values in `1..=max_value`.
pub fn random_values(size: usize, max_value: Value) -> Vec<Value> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(1..=max_value)).collect()
}

/// Sorted, duplicate-free random values in `1..=max_value`.
///
/// `size` is capped at `max_value` so uniqueness stays satisfiable.
pub fn sorted_unique(size: usize, max_value: Value) -> Vec<Value> {
    let size = size.min(max_value.max(1) as usize);
    let mut rng = rand::thread_rng();
    let mut seen = FxHashSet::default();
    let mut values = Vec::with_capacity(size);
    while values.len() < size {
        let v = rng.gen_range(1..=max_value);
        if seen.insert(v) {
            values.push(v);
        }
    }
    values.sort_unstable();
    values
}

/// Pick a search target: ~70% a value present in `data`, ~30% an absent one.
pub fn random_target(data: &[Value], max_value: Value) -> Value {
    let mut rng = rand::thread_rng();
    if !data.is_empty() && rng.gen_bool(0.7) {
        return data[rng.gen_range(0..data.len())];
    }
    loop {
        let v = rng.gen_range(1..=max_value + 20);
        if !data.contains(&v) {
            return v;
        }
    }
}
