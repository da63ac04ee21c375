//! Instrumented sorting adapters.
//!
//! All five adapters share one shape: the input values are copied into a
//! working array of [`SortElement`]s, each tagged with its logical index
//! at creation. The working array is freely reordered while the
//! algorithm runs, but every recorded motion names the logical index, so
//! playback never needs to know where an element currently sits — the
//! timeline's position table tracks that.
//!
//! Emission rules, uniform across adapters:
//! - one frame per value-vs-value comparison (always counted, whether or
//!   not a swap follows),
//! - swap/move frames carry one motion per moved element, with
//!   equal-and-opposite magnitudes for a two-element swap,
//! - scope frames (recursive sub-range entry) carry no motions,
//! - single-element sub-ranges emit a trivially-sorted tag instead of a
//!   comparison.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use stepviz_core::{Direction, Motion};

/// A value plus the logical index assigned to it at problem creation.
///
/// The logical index never changes, no matter how often the element is
/// moved; it is the identity every motion refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortElement {
    pub value: i32,
    pub index: usize,
}

/// Copies the input into a working array of indexed elements.
pub(crate) fn working_copy(values: &[i32]) -> Vec<SortElement> {
    values
        .iter()
        .copied()
        .enumerate()
        .map(|(index, value)| SortElement { value, index })
        .collect()
}

/// Equal-and-opposite motions for exchanging the elements at slots
/// `left` and `right` of the working array (`left < right`). The
/// magnitude is exactly the slot distance.
pub(crate) fn exchange_motions(
    arr: &[SortElement],
    left: usize,
    right: usize,
) -> (Motion, Motion) {
    debug_assert!(left < right);
    let distance = (right - left) as u32;
    (
        Motion::new(arr[left].index, Direction::Right, distance),
        Motion::new(arr[right].index, Direction::Left, distance),
    )
}

#[cfg(test)]
mod tests;
