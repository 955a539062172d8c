//! Static algorithm metadata for the TUI menu
//!
//! Display names and complexity labels keyed by the same ids the strategy
//! registry accepts. Deliberately minimal: the engine never reads this.

/// Which visualizer an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Sorting,
    Searching,
}

/// Menu entry for one algorithm.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub family: Family,
    /// Average-case time complexity, for display only
    pub time: &'static str,
}

pub const CATALOG: &[AlgorithmInfo] = &[
    AlgorithmInfo {
        id: "bubbleSort",
        name: "Bubble Sort",
        family: Family::Sorting,
        time: "O(n²)",
    },
    AlgorithmInfo {
        id: "insertionSort",
        name: "Insertion Sort",
        family: Family::Sorting,
        time: "O(n²)",
    },
    AlgorithmInfo {
        id: "selectionSort",
        name: "Selection Sort",
        family: Family::Sorting,
        time: "O(n²)",
    },
    AlgorithmInfo {
        id: "mergeSort",
        name: "Merge Sort",
        family: Family::Sorting,
        time: "O(n log n)",
    },
    AlgorithmInfo {
        id: "quickSort",
        name: "Quick Sort",
        family: Family::Sorting,
        time: "O(n log n)",
    },
    AlgorithmInfo {
        id: "heapSort",
        name: "Heap Sort",
        family: Family::Sorting,
        time: "O(n log n)",
    },
    AlgorithmInfo {
        id: "linearSearch",
        name: "Linear Search",
        family: Family::Searching,
        time: "O(n)",
    },
    AlgorithmInfo {
        id: "binarySearch",
        name: "Binary Search",
        family: Family::Searching,
        time: "O(log n)",
    },
    AlgorithmInfo {
        id: "interpolationSearch",
        name: "Interpolation Search",
        family: Family::Searching,
        time: "O(log log n)",
    },
    AlgorithmInfo {
        id: "jumpSearch",
        name: "Jump Search",
        family: Family::Searching,
        time: "O(√n)",
    },
    AlgorithmInfo {
        id: "exponentialSearch",
        name: "Exponential Search",
        family: Family::Searching,
        time: "O(log n)",
    },
];

/// Entries of one family, in catalog order.
pub fn family(family: Family) -> Vec<&'static AlgorithmInfo> {
    CATALOG.iter().filter(|a| a.family == family).collect()
}
