//! Bubble sort instrumentation.
//!
//! Shrinking-bound bubble sort with early exit on a clean pass. With
//! this policy a reverse-sorted input of length n costs exactly
//! n(n-1)/2 comparisons.

use stepviz_core::{Frame, Recorder, Recording};
use tracing::{debug, info};

use super::{exchange_motions, working_copy};
use crate::algorithm::Algorithm;

/// Semantic tags emitted by [`BubbleSort`]. Keys of the pseudocode map.
pub mod tags {
    pub const START: &str = "bubble.start";
    pub const SWAP: &str = "bubble.swap";
    pub const NO_SWAP: &str = "bubble.no-swap";
}

/// Display pseudocode; frame tags map onto these line numbers.
pub const PSEUDOCODE: &[&str] = &[
    "BubbleSort(data):",
    "    repeat until no swaps happen:",
    "        for j in 0 .. bound-1:",
    "            if data[j] > data[j+1]:",
    "                swap(data[j], data[j+1])",
    "        shrink bound by one",
];

/// Pseudocode lines highlighted for `tag`, or `None` for unknown tags
/// (the renderer then simply omits the highlight).
pub fn pseudocode_lines(tag: &str) -> Option<&'static [usize]> {
    match tag {
        tags::START => Some(&[0]),
        tags::SWAP => Some(&[3, 4]),
        tags::NO_SWAP => Some(&[3]),
        _ => None,
    }
}

/// Instrumented bubble sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Algorithm for BubbleSort {
    type Input = [i32];

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn run(&self, input: &[i32]) -> Recording {
        debug!(event = "record_start", algorithm = self.name(), elements = input.len());

        let mut arr = working_copy(input);
        let mut recorder = Recorder::new(arr.len());
        recorder.push(Frame::new(
            tags::START,
            format!("Bubble sort over {} elements", arr.len()),
        ));

        if arr.len() <= 1 {
            if let Some(only) = arr.first() {
                recorder.settle(only.index);
            }
            return finish(recorder, self.name());
        }

        let mut bound = arr.len() - 1;
        loop {
            let mut swapped = false;
            for j in 0..bound {
                recorder.count_comparison();
                if arr[j].value > arr[j + 1].value {
                    let (right, left) = exchange_motions(&arr, j, j + 1);
                    recorder.push(
                        Frame::new(
                            tags::SWAP,
                            format!("{} > {}, swapping", arr[j].value, arr[j + 1].value),
                        )
                        .with_motion(right)
                        .with_motion(left)
                        .with_highlight(arr[j].index)
                        .with_highlight(arr[j + 1].index),
                    );
                    arr.swap(j, j + 1);
                    swapped = true;
                } else {
                    recorder.push(
                        Frame::new(
                            tags::NO_SWAP,
                            format!("{} <= {}, no swap", arr[j].value, arr[j + 1].value),
                        )
                        .with_highlight(arr[j].index)
                        .with_highlight(arr[j + 1].index),
                    );
                }
            }

            // The largest element of the unsorted region has bubbled to
            // the bound and never moves again.
            recorder.settle(arr[bound].index);

            if !swapped {
                // Clean pass: everything below the bound is in place too.
                for element in &arr[0..bound] {
                    recorder.settle(element.index);
                }
                break;
            }
            bound -= 1;
            if bound == 0 {
                recorder.settle(arr[0].index);
                break;
            }
        }

        finish(recorder, self.name())
    }
}

fn finish(recorder: Recorder, algorithm: &'static str) -> Recording {
    info!(
        event = "record_end",
        algorithm,
        frames = recorder.recorded(),
        comparisons = recorder.comparisons(),
    );
    recorder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_element_scenario() {
        // [3,1,2]: pass 1 swaps twice, pass 2 compares once cleanly.
        let recording = BubbleSort.run(&[3, 1, 2]);
        assert_eq!(recording.comparisons(), 3);

        let mut timeline = recording.timeline().clone();
        while timeline.forward().is_some() {}
        // Element 0 (value 3) ends in slot 2, element 1 (value 1) in
        // slot 0, element 2 (value 2) in slot 1.
        assert_eq!(timeline.positions(), &[2, 0, 1]);

        while timeline.backward().is_some() {}
        assert_eq!(timeline.positions(), &[0, 1, 2]);
        assert_eq!(timeline.cursor(), 0);
    }

    #[test]
    fn reverse_sorted_comparison_count() {
        for n in 2..=8usize {
            let input: Vec<i32> = (0..n as i32).rev().collect();
            let recording = BubbleSort.run(&input);
            assert_eq!(
                recording.comparisons(),
                (n * (n - 1) / 2) as u64,
                "reverse-sorted length {n}"
            );
        }
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let recording = BubbleSort.run(&[1, 2, 3, 4]);
        assert_eq!(recording.comparisons(), 3);
        // Everything settles after the clean pass.
        assert_eq!(
            recording.settled_at(recording.timeline().len()).len(),
            4
        );
    }

    #[test]
    fn singleton_settles_without_comparisons() {
        let recording = BubbleSort.run(&[7]);
        assert_eq!(recording.comparisons(), 0);
        assert_eq!(recording.settled_at(recording.timeline().len()), vec![0]);
    }

    #[test]
    fn tags_are_mapped() {
        assert_eq!(pseudocode_lines(tags::SWAP), Some(&[3usize, 4][..]));
        assert_eq!(pseudocode_lines("unknown"), None);
    }
}
