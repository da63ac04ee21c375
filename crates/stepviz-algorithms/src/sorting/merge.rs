//! Merge sort instrumentation.
//!
//! Merging happens in place by rotation: when the right run's head wins
//! a comparison it slides left past the remaining left-run elements in a
//! single frame, each of them shifting right by one slot. When the left
//! head wins, nothing moves. This keeps every frame's slot accounting
//! exact, so backward playback needs no merge-specific logic.
//!
//! Only the outermost merge settles elements; an inner merge's output
//! can still be moved by the merges above it.

use stepviz_core::{Direction, Frame, Motion, Recorder, Recording};
use tracing::{debug, info};

use super::{working_copy, SortElement};
use crate::algorithm::Algorithm;

/// Semantic tags emitted by [`MergeSort`].
pub mod tags {
    pub const LEFT: &str = "merge.sort-left";
    pub const LEFT_DONE: &str = "merge.left-done";
    pub const RIGHT: &str = "merge.sort-right";
    pub const RIGHT_DONE: &str = "merge.right-done";
    pub const MERGE: &str = "merge.merge";
    pub const TAKE_LEFT: &str = "merge.take-left";
    pub const TAKE_RIGHT: &str = "merge.take-right";
    pub const LEFT_EXTRAS: &str = "merge.left-extras";
    pub const RIGHT_EXTRAS: &str = "merge.right-extras";
    pub const SINGLE: &str = "merge.single";
}

pub const PSEUDOCODE: &[&str] = &[
    "MergeSort(data, start, end):",
    "    if start == end:",
    "        return",
    "    mid = (start+end)/2",
    "    mergeSort(data, start, mid)",
    "    mergeSort(data, mid+1, end)",
    "    merge(data, start, mid, end)",
    "",
    "merge(data, start, mid, end):",
    "    while both runs have elements:",
    "        if left element <= right element:",
    "            keep the left element in place",
    "        else:",
    "            rotate the right element before the left run",
    "    remaining elements are already in place",
];

pub fn pseudocode_lines(tag: &str) -> Option<&'static [usize]> {
    match tag {
        tags::SINGLE => Some(&[1, 2]),
        tags::LEFT | tags::LEFT_DONE => Some(&[4]),
        tags::RIGHT | tags::RIGHT_DONE => Some(&[5]),
        tags::MERGE => Some(&[8, 9]),
        tags::TAKE_LEFT => Some(&[10, 11]),
        tags::TAKE_RIGHT => Some(&[12, 13]),
        tags::LEFT_EXTRAS | tags::RIGHT_EXTRAS => Some(&[14]),
        _ => None,
    }
}

/// Instrumented merge sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl Algorithm for MergeSort {
    type Input = [i32];

    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn run(&self, input: &[i32]) -> Recording {
        debug!(event = "record_start", algorithm = self.name(), elements = input.len());

        let mut arr = working_copy(input);
        let mut recorder = Recorder::new(arr.len());

        if !arr.is_empty() {
            let high = arr.len() - 1;
            sort_range(&mut recorder, &mut arr, 0, high);
            // The outermost merge is done; every element is final now.
            for element in &arr {
                recorder.settle(element.index);
            }
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
        return;
    }

    let mid = (low + high) / 2;

    recorder.push(Frame::new(
        tags::LEFT,
        format!("Sorting left half [{low}..{mid}]"),
    ));
    sort_range(recorder, arr, low, mid);
    recorder.push(Frame::new(
        tags::LEFT_DONE,
        format!("Left half [{low}..{mid}] sorted"),
    ));

    recorder.push(Frame::new(
        tags::RIGHT,
        format!("Sorting right half [{}..{high}]", mid + 1),
    ));
    sort_range(recorder, arr, mid + 1, high);
    recorder.push(Frame::new(
        tags::RIGHT_DONE,
        format!("Right half [{}..{high}] sorted", mid + 1),
    ));

    merge(recorder, arr, low, mid, high);
}

/// Merges the sorted runs `arr[low..=mid]` and `arr[mid+1..=high]` in
/// place, one rotation per out-of-order right-run head.
fn merge(recorder: &mut Recorder, arr: &mut [SortElement], low: usize, mid: usize, high: usize) {
    recorder.push(Frame::new(
        tags::MERGE,
        format!("Merging [{low}..{mid}] and [{}..{high}]", mid + 1),
    ));

    // l: first unmerged left-run slot; r: first unmerged right-run slot.
    // Slots low..l are merged, l..r hold the remaining left run.
    let mut l = low;
    let mut r = mid + 1;

    while l < r && r <= high {
        recorder.count_comparison();
        if arr[l].value <= arr[r].value {
            recorder.push(
                Frame::new(
                    tags::TAKE_LEFT,
                    format!("{} <= {}, keeping in place", arr[l].value, arr[r].value),
                )
                .with_highlight(arr[l].index),
            );
            l += 1;
        } else {
            let distance = (r - l) as u32;
            let mut frame = Frame::new(
                tags::TAKE_RIGHT,
                format!("{} > {}, rotating forward", arr[l].value, arr[r].value),
            )
            .with_motion(Motion::new(arr[r].index, Direction::Left, distance))
            .with_highlight(arr[r].index);
            for shifted in &arr[l..r] {
                frame = frame.with_motion(Motion::new(shifted.index, Direction::Right, 1));
            }
            recorder.push(frame);
            arr[l..=r].rotate_right(1);
            l += 1;
            r += 1;
        }
    }

    if l < r && l <= high && r > high {
        recorder.push(Frame::new(
            tags::LEFT_EXTRAS,
            "Remaining left-run elements are already in place",
        ));
    } else if l == r && r <= high {
        recorder.push(Frame::new(
            tags::RIGHT_EXTRAS,
            "Remaining right-run elements are already in place",
        ));
    }
}
