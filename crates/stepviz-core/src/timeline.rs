//! The replayable frame log and its cursor.
//!
//! A [`Timeline`] is produced once, in full, by an instrumentation run;
//! afterwards only the cursor moves. Stepping forward applies a frame's
//! motions to the position table; stepping backward applies their exact
//! reverses in the same order. The two are inverses, so any walk of the
//! cursor that returns to a given index reproduces the position table
//! bit for bit.

use crate::frame::{Frame, Pointer};

/// Render-ready description of the visualization after one cursor move.
///
/// Delivered to the renderer after every successful `forward`/`backward`
/// call, plus once at cursor 0 before any step. The position table is
/// copied out so the renderer never aliases playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Logical element index -> current visual slot.
    pub positions: Vec<i32>,
    /// Human-readable description of the current step.
    pub narrative: String,
    /// Elements to draw highlighted-as-active, if any.
    pub highlights: Vec<usize>,
    /// Labeled pointers attached to elements, in display order.
    pub pointers: Vec<Pointer>,
    /// Semantic tag of the current frame (pseudocode map key).
    pub tag: &'static str,
    /// Number of frames applied so far.
    pub cursor: usize,
    /// Total number of frames in the timeline.
    pub total: usize,
}

/// An ordered, immutable frame log plus a playback cursor.
///
/// The cursor counts applied frames: `frames[0..cursor)` are applied,
/// the rest are not. Cursor 0 ("before start") and `len` ("finished")
/// are both legitimate resting states. Stepping past either end is a
/// benign no-op reported as `None`, never an error; the caller disables
/// the corresponding control.
#[derive(Debug, Clone)]
pub struct Timeline {
    frames: Vec<Frame>,
    cursor: usize,
    positions: Vec<i32>,
}

impl Timeline {
    /// Creates a timeline over a fully recorded frame log.
    ///
    /// The position table starts as the identity mapping: element `i`
    /// sits in slot `i`.
    pub fn new(frames: Vec<Frame>, element_count: usize) -> Self {
        debug_assert!(
            frames.iter().all(|f| f.validate(element_count).is_ok()),
            "frame log references elements outside 0..{element_count}"
        );
        Self {
            frames,
            cursor: 0,
            positions: (0..element_count).map(|i| i as i32).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn element_count(&self) -> usize {
        self.positions.len()
    }

    /// Current position table (element index -> visual slot).
    pub fn positions(&self) -> &[i32] {
        &self.positions
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.frames.len()
    }

    /// The recorded frame at `index`, independent of the cursor.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Applies the next frame and returns the resulting snapshot.
    ///
    /// Returns `None` at the end of the timeline; repeated calls there
    /// leave cursor and positions untouched.
    pub fn forward(&mut self) -> Option<Snapshot> {
        if self.cursor == self.frames.len() {
            return None;
        }
        let idx = self.cursor;
        let Self {
            frames, positions, ..
        } = self;
        for motion in frames[idx].motions() {
            positions[motion.element] += motion.direction.sign() * motion.magnitude as i32;
        }
        self.cursor += 1;
        Some(self.snapshot_of(idx))
    }

    /// Un-applies the most recently applied frame.
    ///
    /// Motions are reversed (opposite direction, same magnitude) and
    /// applied in their original order. Returns `None` at the start of
    /// the timeline. The returned snapshot describes the frame the
    /// cursor now rests on, or the initial snapshot at cursor 0.
    pub fn backward(&mut self) -> Option<Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        let idx = self.cursor - 1;
        let Self {
            frames, positions, ..
        } = self;
        for motion in frames[idx].motions() {
            let rev = motion.reversed();
            positions[rev.element] += rev.direction.sign() * rev.magnitude as i32;
        }
        self.cursor = idx;
        if idx == 0 {
            Some(self.initial_snapshot())
        } else {
            Some(self.snapshot_of(idx - 1))
        }
    }

    /// The designated cursor-0 snapshot: identity positions, the first
    /// frame's narrative, no highlights or pointers.
    pub fn initial_snapshot(&self) -> Snapshot {
        Snapshot {
            positions: (0..self.positions.len()).map(|i| i as i32).collect(),
            narrative: self
                .frames
                .first()
                .map(|f| f.narrative().to_owned())
                .unwrap_or_default(),
            highlights: Vec::new(),
            pointers: Vec::new(),
            tag: self.frames.first().map(Frame::tag).unwrap_or(""),
            cursor: 0,
            total: self.frames.len(),
        }
    }

    /// Snapshot describing the current cursor without moving it.
    pub fn current_snapshot(&self) -> Snapshot {
        if self.cursor == 0 {
            self.initial_snapshot()
        } else {
            self.snapshot_of(self.cursor - 1)
        }
    }

    fn snapshot_of(&self, frame_index: usize) -> Snapshot {
        let frame = &self.frames[frame_index];
        Snapshot {
            positions: self.positions.clone(),
            narrative: frame.narrative().to_owned(),
            highlights: frame.highlights().to_vec(),
            pointers: frame.pointers().to_vec(),
            tag: frame.tag(),
            cursor: self.cursor,
            total: self.frames.len(),
        }
    }
}
