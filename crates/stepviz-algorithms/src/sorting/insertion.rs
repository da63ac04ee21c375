//! Insertion sort instrumentation.
//!
//! Each key is compared leftwards through the sorted prefix; every
//! displaced prefix element shifts right by one in its own frame, and
//! the key drops into its slot with a single leftward motion.

use stepviz_core::{Direction, Frame, Motion, Recorder, Recording};
use tracing::{debug, info};

use super::working_copy;
use crate::algorithm::Algorithm;

/// Semantic tags emitted by [`InsertionSort`].
pub mod tags {
    pub const START: &str = "insertion.start";
    pub const KEY: &str = "insertion.key";
    pub const SHIFT: &str = "insertion.shift";
    pub const STOP: &str = "insertion.stop";
    pub const INSERT: &str = "insertion.insert";
}

pub const PSEUDOCODE: &[&str] = &[
    "InsertionSort(data):",
    "    for i in 1 .. n-1:",
    "        key = data[i]",
    "        j = i-1",
    "        while j >= 0 and data[j] > key:",
    "            shift data[j] one slot right",
    "            j -= 1",
    "        place key at slot j+1",
];

pub fn pseudocode_lines(tag: &str) -> Option<&'static [usize]> {
    match tag {
        tags::START => Some(&[0]),
        tags::KEY => Some(&[2, 3]),
        tags::SHIFT => Some(&[4, 5, 6]),
        tags::STOP => Some(&[4]),
        tags::INSERT => Some(&[7]),
        _ => None,
    }
}

/// Instrumented insertion sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Algorithm for InsertionSort {
    type Input = [i32];

    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn run(&self, input: &[i32]) -> Recording {
        debug!(event = "record_start", algorithm = self.name(), elements = input.len());

        let mut arr = working_copy(input);
        let mut recorder = Recorder::new(arr.len());
        recorder.push(Frame::new(
            tags::START,
            format!("Insertion sort over {} elements", arr.len()),
        ));

        for i in 1..arr.len() {
            let key = arr[i];
            recorder.push(
                Frame::new(tags::KEY, format!("Picking {} as the key", key.value))
                    .with_highlight(key.index)
                    .with_pointer(key.index, "K"),
            );

            let mut j = i;
            while j > 0 {
                recorder.count_comparison();
                if arr[j - 1].value > key.value {
                    recorder.push(
                        Frame::new(
                            tags::SHIFT,
                            format!("{} > {}, shifting right", arr[j - 1].value, key.value),
                        )
                        .with_motion(Motion::new(arr[j - 1].index, Direction::Right, 1))
                        .with_highlight(arr[j - 1].index)
                        .with_pointer(key.index, "K"),
                    );
                    arr[j] = arr[j - 1];
                    j -= 1;
                } else {
                    recorder.push(
                        Frame::new(
                            tags::STOP,
                            format!("{} <= {}, stopping", arr[j - 1].value, key.value),
                        )
                        .with_highlight(arr[j - 1].index)
                        .with_pointer(key.index, "K"),
                    );
                    break;
                }
            }

            let distance = (i - j) as u32;
            let mut insert = Frame::new(
                tags::INSERT,
                format!("Placing {} at slot {}", key.value, j),
            )
            .with_highlight(key.index)
            .with_pointer(key.index, "K");
            if distance >= 1 {
                insert = insert.with_motion(Motion::new(key.index, Direction::Left, distance));
            }
            recorder.push(insert);
            arr[j] = key;
        }

        // Nothing is final until the whole run ends: a later key can
        // displace any prefix element.
        for element in &arr {
            recorder.settle(element.index);
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
    fn final_positions_sort_the_input() {
        let recording = InsertionSort.run(&[4, 3, 2, 1]);
        let mut timeline = recording.timeline().clone();
        while timeline.forward().is_some() {}
        assert_eq!(timeline.positions(), &[3, 2, 1, 0]);
    }

    #[test]
    fn shifts_reverse_exactly() {
        let recording = InsertionSort.run(&[2, 3, 1]);
        let mut timeline = recording.timeline().clone();
        for _ in 0..timeline.len() {
            timeline.forward();
        }
        for _ in 0..timeline.len() {
            timeline.backward();
        }
        assert_eq!(timeline.positions(), &[0, 1, 2]);
    }

    #[test]
    fn sorted_input_compares_n_minus_one_times() {
        let recording = InsertionSort.run(&[1, 2, 3, 4, 5]);
        assert_eq!(recording.comparisons(), 4);
    }

    #[test]
    fn reverse_sorted_compares_maximally() {
        let recording = InsertionSort.run(&[3, 2, 1]);
        // Every key walks the whole prefix: 1 + 2 comparisons.
        assert_eq!(recording.comparisons(), 3);
    }

    #[test]
    fn settles_only_at_the_end() {
        let recording = InsertionSort.run(&[2, 1, 3]);
        let total = recording.timeline().len();
        for settled in recording.settled() {
            assert_eq!(settled.step, total);
        }
    }
}
