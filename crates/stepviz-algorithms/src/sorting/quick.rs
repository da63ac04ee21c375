//! Quicksort instrumentation (Lomuto-style, first element as pivot).
//!
//! Partitioning walks J over the range while I tracks the boundary of
//! the less-than region; the pivot is swapped into its final slot at the
//! end of each partition and settles there. Sub-range entry frames are
//! scope markers and carry no motions.

use stepviz_core::{Frame, Recorder, Recording};
use tracing::{debug, info};

use super::{exchange_motions, working_copy, SortElement};
use crate::algorithm::Algorithm;

/// Semantic tags emitted by [`QuickSort`].
pub mod tags {
    pub const SORT: &str = "quick.sort";
    pub const PARTITION: &str = "quick.partition";
    pub const PIVOT: &str = "quick.pivot";
    pub const LESS: &str = "quick.less";
    pub const GREATER_EQUAL: &str = "quick.greater-equal";
    pub const PIVOT_SWAP: &str = "quick.pivot-swap";
    pub const PARTITION_DONE: &str = "quick.partition-done";
    pub const LEFT: &str = "quick.sort-left";
    pub const RIGHT: &str = "quick.sort-right";
    pub const SINGLE: &str = "quick.single";
}

pub const PSEUDOCODE: &[&str] = &[
    "QuickSort(data, low, high):",
    "    if low < high:",
    "        p = partition(data, low, high)",
    "        quickSort(data, low, p-1)",
    "        quickSort(data, p+1, high)",
    "",
    "partition(data, low, high):",
    "    pivot = data[low]",
    "    i = low+1",
    "    for j in low+1 .. high:",
    "        if data[j] < pivot:",
    "            swap(data[i], data[j]); i += 1",
    "    swap(data[low], data[i-1])",
    "    return i-1",
];

pub fn pseudocode_lines(tag: &str) -> Option<&'static [usize]> {
    match tag {
        tags::SORT => Some(&[0]),
        tags::SINGLE => Some(&[1]),
        tags::LEFT => Some(&[3]),
        tags::RIGHT => Some(&[4]),
        tags::PARTITION => Some(&[6]),
        tags::PIVOT => Some(&[7, 8]),
        tags::LESS => Some(&[10, 11]),
        tags::GREATER_EQUAL => Some(&[10]),
        tags::PIVOT_SWAP => Some(&[12]),
        tags::PARTITION_DONE => Some(&[13]),
        _ => None,
    }
}

fn range_narrative(action: &str, low: usize, high: usize) -> String {
    format!("{action} [{low}..{high}]")
}

/// Instrumented quicksort.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Algorithm for QuickSort {
    type Input = [i32];

    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn run(&self, input: &[i32]) -> Recording {
        debug!(event = "record_start", algorithm = self.name(), elements = input.len());

        let mut arr = working_copy(input);
        let mut recorder = Recorder::new(arr.len());

        if !arr.is_empty() {
            let high = arr.len() - 1;
            recorder.push(Frame::new(
                tags::SORT,
                range_narrative("Quicksorting", 0, high),
            ));
            sort_range(&mut recorder, &mut arr, 0, high);
        }

        info!(
            event = "record_end",
            algorithm = self.name(),
            frames = recorder.recorded(),
            comparisons = recorder.comparisons(),
        );
        recorder.finish()
    }
}

fn sort_range(recorder: &mut Recorder, arr: &mut [SortElement], low: usize, high: usize) {
    if low == high {
        recorder.push(
            Frame::new(tags::SINGLE, "Single element is already sorted")
                .with_highlight(arr[low].index),
        );
        recorder.settle(arr[low].index);
        return;
    }

    let pivot_slot = partition(recorder, arr, low, high);

    if pivot_slot > low {
        recorder.push(Frame::new(
            tags::LEFT,
            range_narrative("Sorting left part", low, pivot_slot - 1),
        ));
        sort_range(recorder, arr, low, pivot_slot - 1);
    } else {
        recorder.push(Frame::new(tags::LEFT, "Left part is empty"));
    }

    if pivot_slot < high {
        recorder.push(Frame::new(
            tags::RIGHT,
            range_narrative("Sorting right part", pivot_slot + 1, high),
        ));
        sort_range(recorder, arr, pivot_slot + 1, high);
    } else {
        recorder.push(Frame::new(tags::RIGHT, "Right part is empty"));
    }
}

/// Partitions `arr[low..=high]` around `arr[low]`, returning the
/// pivot's final slot.
fn partition(
    recorder: &mut Recorder,
    arr: &mut [SortElement],
    low: usize,
    high: usize,
) -> usize {
    // The pivot stays at `low` for the whole scan; only slots past it
    // are exchanged.
    let pivot = arr[low];
    let mut i = low + 1;

    recorder.push(Frame::new(
        tags::PARTITION,
        range_narrative("Partitioning", low, high),
    ));
    recorder.push(
        Frame::new(tags::PIVOT, format!("Pivot is {}", pivot.value))
            .with_pointer(pivot.index, "P"),
    );

    for j in low + 1..=high {
        recorder.count_comparison();
        if arr[j].value < pivot.value {
            let mut frame = Frame::new(
                tags::LESS,
                format!("{} < {}, moving into the lesser region", arr[j].value, pivot.value),
            );
            if j > i {
                let (right, left) = exchange_motions(arr, i, j);
                frame = frame.with_motion(right).with_motion(left);
            }
            frame = frame
                .with_pointer(pivot.index, "P")
                .with_pointer(arr[i].index, "I")
                .with_pointer(arr[j].index, "J");
            recorder.push(frame);
            arr.swap(i, j);
            i += 1;
        } else {
            recorder.push(
                Frame::new(
                    tags::GREATER_EQUAL,
                    format!("{} >= {}, leaving in place", arr[j].value, pivot.value),
                )
                .with_pointer(pivot.index, "P")
                .with_pointer(arr[i].index, "I")
                .with_pointer(arr[j].index, "J"),
            );
        }
    }

    let dest = i - 1;
    let mut swap_frame = Frame::new(
        tags::PIVOT_SWAP,
        format!("Swapping pivot {} into slot {}", pivot.value, dest),
    )
    .with_pointer(pivot.index, "P")
    .with_pointer(arr[dest].index, "I-1");
    if dest > low {
        let (right, left) = exchange_motions(arr, low, dest);
        swap_frame = swap_frame.with_motion(right).with_motion(left);
    }
    recorder.push(swap_frame);
    arr.swap(low, dest);

    recorder.push(
        Frame::new(tags::PARTITION_DONE, "Pivot is in its final position")
            .with_highlight(arr[dest].index),
    );
    recorder.settle(arr[dest].index);

    dest
}
