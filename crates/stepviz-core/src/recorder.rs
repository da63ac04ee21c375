//! Recording an instrumented run.
//!
//! Instrumentation and playback are separated by type: a [`Recorder`]
//! can only append, a [`Recording`] can only play. An adapter drives the
//! recorder while the algorithm executes, then calls [`Recorder::finish`]
//! to seal the log. There is no way to append to a sealed recording.

use crate::frame::Frame;
use crate::timeline::Timeline;

/// Marks the step count after which an element is permanently done.
///
/// Once the cursor has advanced past `step` frames, `element` has
/// reached its final region and will never move again. Consumed by the
/// renderer to pick done-vs-active highlighting; has no effect on
/// position playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettledAt {
    pub step: usize,
    pub element: usize,
}

/// Append-only frame log under construction, plus the run counters.
#[derive(Debug)]
pub struct Recorder {
    element_count: usize,
    frames: Vec<Frame>,
    settled: Vec<SettledAt>,
    comparisons: u64,
}

impl Recorder {
    /// Creates a recorder for a problem instance of `element_count`
    /// logical elements.
    pub fn new(element_count: usize) -> Self {
        Self {
            element_count,
            frames: Vec::new(),
            settled: Vec::new(),
            comparisons: 0,
        }
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Number of frames recorded so far.
    pub fn recorded(&self) -> usize {
        self.frames.len()
    }

    /// Appends a frame to the log.
    pub fn push(&mut self, frame: Frame) {
        debug_assert!(
            frame.validate(self.element_count).is_ok(),
            "invalid frame recorded: {:?}",
            frame.validate(self.element_count)
        );
        self.frames.push(frame);
    }

    /// Counts one value-vs-value comparison.
    ///
    /// Structural checks (bounds, run exhaustion, single-element ranges)
    /// are never counted.
    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Marks `element` as permanently done as of the current step count.
    pub fn settle(&mut self, element: usize) {
        debug_assert!(element < self.element_count);
        self.settled.push(SettledAt {
            step: self.frames.len(),
            element,
        });
    }

    /// Seals the log and hands it over for playback.
    pub fn finish(self) -> Recording {
        Recording {
            timeline: Timeline::new(self.frames, self.element_count),
            settled: self.settled,
            comparisons: self.comparisons,
        }
    }
}

/// A sealed instrumentation run: the timeline plus the settled list and
/// comparison count for the info panel.
#[derive(Debug, Clone)]
pub struct Recording {
    timeline: Timeline,
    settled: Vec<SettledAt>,
    comparisons: u64,
}

impl Recording {
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    pub fn settled(&self) -> &[SettledAt] {
        &self.settled
    }

    /// Elements permanently done once `cursor` frames are applied.
    ///
    /// Pure read-side computation; at the "finished" resting state the
    /// renderer asks for `settled_at(timeline.len())` to paint the done
    /// pass.
    pub fn settled_at(&self, cursor: usize) -> Vec<usize> {
        self.settled
            .iter()
            .filter(|s| s.step <= cursor)
            .map(|s| s.element)
            .collect()
    }

    /// Total value-vs-value comparisons performed by the run.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Direction, Motion};

    #[test]
    fn settle_records_current_step_count() {
        let mut recorder = Recorder::new(3);
        recorder.push(Frame::new("a", ""));
        recorder.push(Frame::new("b", ""));
        recorder.settle(2);
        recorder.push(Frame::new("c", ""));
        recorder.settle(0);

        let recording = recorder.finish();
        assert_eq!(
            recording.settled(),
            &[
                SettledAt { step: 2, element: 2 },
                SettledAt { step: 3, element: 0 },
            ]
        );
        assert_eq!(recording.settled_at(1), Vec::<usize>::new());
        assert_eq!(recording.settled_at(2), vec![2]);
        assert_eq!(recording.settled_at(3), vec![2, 0]);
    }

    #[test]
    fn comparisons_accumulate() {
        let mut recorder = Recorder::new(2);
        recorder.count_comparison();
        recorder.count_comparison();
        assert_eq!(recorder.comparisons(), 2);
        assert_eq!(recorder.finish().comparisons(), 2);
    }

    #[test]
    fn finished_recording_plays_back() {
        let mut recorder = Recorder::new(2);
        recorder.push(
            Frame::new("swap", "Swapping 0 and 1")
                .with_motion(Motion::new(0, Direction::Right, 1))
                .with_motion(Motion::new(1, Direction::Left, 1)),
        );
        let mut recording = recorder.finish();

        let snap = recording.timeline_mut().forward().unwrap();
        assert_eq!(snap.positions, vec![1, 0]);
    }
}
