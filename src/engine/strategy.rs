//! Strategy registry: algorithm ids to executable strategies
//!
//! A [`Strategy`] is a pure behavioral descriptor — a tagged variant over
//! the fixed set of algorithm ids. The executor holds one only for the
//! duration of a run.

use crate::engine::errors::VisualizerError;

/// Sorting algorithms. All sort ascending; bubble, insertion and merge
/// are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

/// Searching algorithms. All except linear require a sorted dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Interpolation,
    Jump,
    Exponential,
}

/// A named algorithm's step pattern, selected by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
}

impl Strategy {
    /// Look up a strategy by its registry id (e.g. `"bubbleSort"`).
    pub fn parse(id: &str) -> Result<Self, VisualizerError> {
        match id {
            "bubbleSort" => Ok(Strategy::Sort(SortAlgorithm::Bubble)),
            "insertionSort" => Ok(Strategy::Sort(SortAlgorithm::Insertion)),
            "selectionSort" => Ok(Strategy::Sort(SortAlgorithm::Selection)),
            "mergeSort" => Ok(Strategy::Sort(SortAlgorithm::Merge)),
            "quickSort" => Ok(Strategy::Sort(SortAlgorithm::Quick)),
            "heapSort" => Ok(Strategy::Sort(SortAlgorithm::Heap)),
            "linearSearch" => Ok(Strategy::Search(SearchAlgorithm::Linear)),
            "binarySearch" => Ok(Strategy::Search(SearchAlgorithm::Binary)),
            "interpolationSearch" => Ok(Strategy::Search(SearchAlgorithm::Interpolation)),
            "jumpSearch" => Ok(Strategy::Search(SearchAlgorithm::Jump)),
            "exponentialSearch" => Ok(Strategy::Search(SearchAlgorithm::Exponential)),
            _ => Err(VisualizerError::UnknownStrategy { id: id.to_string() }),
        }
    }

    /// The registry id this strategy was parsed from.
    pub fn id(&self) -> &'static str {
        match self {
            Strategy::Sort(SortAlgorithm::Bubble) => "bubbleSort",
            Strategy::Sort(SortAlgorithm::Insertion) => "insertionSort",
            Strategy::Sort(SortAlgorithm::Selection) => "selectionSort",
            Strategy::Sort(SortAlgorithm::Merge) => "mergeSort",
            Strategy::Sort(SortAlgorithm::Quick) => "quickSort",
            Strategy::Sort(SortAlgorithm::Heap) => "heapSort",
            Strategy::Search(SearchAlgorithm::Linear) => "linearSearch",
            Strategy::Search(SearchAlgorithm::Binary) => "binarySearch",
            Strategy::Search(SearchAlgorithm::Interpolation) => "interpolationSearch",
            Strategy::Search(SearchAlgorithm::Jump) => "jumpSearch",
            Strategy::Search(SearchAlgorithm::Exponential) => "exponentialSearch",
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Strategy::Search(_))
    }
}
