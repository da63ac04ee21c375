//! Selection sort instrumentation.

use stepviz_core::{Frame, Recorder, Recording};
use tracing::{debug, info};

use super::{exchange_motions, working_copy};
use crate::algorithm::Algorithm;

/// Semantic tags emitted by [`SelectionSort`].
pub mod tags {
    pub const START: &str = "selection.start";
    pub const NEW_MIN: &str = "selection.new-min";
    pub const KEEP_MIN: &str = "selection.keep-min";
    pub const SWAP: &str = "selection.swap";
    pub const IN_PLACE: &str = "selection.in-place";
}

pub const PSEUDOCODE: &[&str] = &[
    "SelectionSort(data):",
    "    for i in 0 .. n-2:",
    "        min = i",
    "        for j in i+1 .. n-1:",
    "            if data[j] < data[min]:",
    "                min = j",
    "        swap(data[i], data[min])",
];

pub fn pseudocode_lines(tag: &str) -> Option<&'static [usize]> {
    match tag {
        tags::START => Some(&[0]),
        tags::NEW_MIN => Some(&[4, 5]),
        tags::KEEP_MIN => Some(&[4]),
        tags::SWAP | tags::IN_PLACE => Some(&[6]),
        _ => None,
    }
}

/// Instrumented selection sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl Algorithm for SelectionSort {
    type Input = [i32];

    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn run(&self, input: &[i32]) -> Recording {
        debug!(event = "record_start", algorithm = self.name(), elements = input.len());

        let mut arr = working_copy(input);
        let mut recorder = Recorder::new(arr.len());
        recorder.push(Frame::new(
            tags::START,
            format!("Selection sort over {} elements", arr.len()),
        ));

        let n = arr.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                recorder.count_comparison();
                if arr[j].value < arr[min].value {
                    min = j;
                    recorder.push(
                        Frame::new(
                            tags::NEW_MIN,
                            format!("{} is the new minimum", arr[j].value),
                        )
                        .with_highlight(arr[j].index)
                        .with_pointer(arr[min].index, "M"),
                    );
                } else {
                    recorder.push(
                        Frame::new(
                            tags::KEEP_MIN,
                            format!("{} >= {}, minimum unchanged", arr[j].value, arr[min].value),
                        )
                        .with_highlight(arr[j].index)
                        .with_pointer(arr[min].index, "M"),
                    );
                }
            }

            if min != i {
                let (right, left) = exchange_motions(&arr, i, min);
                recorder.push(
                    Frame::new(
                        tags::SWAP,
                        format!("Moving {} into position {}", arr[min].value, i),
                    )
                    .with_motion(right)
                    .with_motion(left)
                    .with_highlight(arr[min].index),
                );
                arr.swap(i, min);
            } else {
                recorder.push(
                    Frame::new(
                        tags::IN_PLACE,
                        format!("{} is already in position {}", arr[i].value, i),
                    )
                    .with_highlight(arr[i].index),
                );
            }
            recorder.settle(arr[i].index);
        }
        if let Some(last) = arr.last() {
            recorder.settle(last.index);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_count_is_fixed_by_length() {
        // Selection sort always performs n(n-1)/2 value comparisons.
        for input in [vec![1, 2, 3, 4], vec![4, 3, 2, 1], vec![2, 4, 1, 3]] {
            let recording = SelectionSort.run(&input);
            assert_eq!(recording.comparisons(), 6);
        }
    }

    #[test]
    fn final_positions_sort_the_input() {
        let recording = SelectionSort.run(&[5, 1, 4, 2]);
        let mut timeline = recording.timeline().clone();
        while timeline.forward().is_some() {}
        // values by final slot: slot of element 0 (5) must be 3, etc.
        assert_eq!(timeline.positions(), &[3, 0, 2, 1]);
    }

    #[test]
    fn every_element_settles() {
        let recording = SelectionSort.run(&[3, 1, 2]);
        let mut settled = recording.settled_at(recording.timeline().len());
        settled.sort_unstable();
        assert_eq!(settled, vec![0, 1, 2]);
    }

    #[test]
    fn settles_in_outer_loop_order() {
        let recording = SelectionSort.run(&[2, 1]);
        // Element 1 (value 1) lands in slot 0 and settles first.
        assert_eq!(recording.settled()[0].element, 1);
    }
}
