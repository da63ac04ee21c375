//! One algorithm step's full visual delta.

use smallvec::SmallVec;

use crate::error::FrameError;
use crate::motion::Motion;

/// A labeled marker attached to an element: a pivot pointer `"P"`, loop
/// indices `"I"`/`"J"`, or per-vertex annotations such as `"d=2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    pub element: usize,
    pub label: String,
}

/// One step of an instrumented algorithm run.
///
/// A frame carries a semantic `tag` (a key into the algorithm's
/// pseudocode line map), a human-readable `narrative`, zero or more
/// [`Motion`]s, and optional highlight/pointer annotations. Frames are
/// immutable once recorded into a timeline.
///
/// A tag the renderer does not recognize simply renders without a
/// pseudocode highlight; it is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    tag: &'static str,
    narrative: String,
    motions: SmallVec<[Motion; 2]>,
    highlights: Vec<usize>,
    pointers: Vec<Pointer>,
}

impl Frame {
    /// Creates a frame with no motions or annotations.
    pub fn new(tag: &'static str, narrative: impl Into<String>) -> Self {
        Self {
            tag,
            narrative: narrative.into(),
            motions: SmallVec::new(),
            highlights: Vec::new(),
            pointers: Vec::new(),
        }
    }

    /// Adds a motion. Motions within one frame touch distinct elements
    /// and are applied in insertion order.
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motions.push(motion);
        self
    }

    /// Adds a highlighted element.
    pub fn with_highlight(mut self, element: usize) -> Self {
        self.highlights.push(element);
        self
    }

    /// Attaches a labeled pointer to an element.
    pub fn with_pointer(mut self, element: usize, label: impl Into<String>) -> Self {
        self.pointers.push(Pointer {
            element,
            label: label.into(),
        });
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    pub fn highlights(&self) -> &[usize] {
        &self.highlights
    }

    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    /// Validates every motion in this frame against `element_count`.
    pub fn validate(&self, element_count: usize) -> Result<(), FrameError> {
        for motion in &self.motions {
            motion.validate(element_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Direction;

    #[test]
    fn builder_collects_parts_in_order() {
        let frame = Frame::new("swap", "Swapping 3 and 1")
            .with_motion(Motion::new(0, Direction::Right, 1))
            .with_motion(Motion::new(1, Direction::Left, 1))
            .with_highlight(0)
            .with_pointer(1, "J");

        assert_eq!(frame.tag(), "swap");
        assert_eq!(frame.motions().len(), 2);
        assert_eq!(frame.motions()[0].element, 0);
        assert_eq!(frame.highlights(), &[0]);
        assert_eq!(frame.pointers()[0].label, "J");
    }

    #[test]
    fn validate_flags_bad_motion() {
        let frame = Frame::new("swap", "").with_motion(Motion::new(9, Direction::Left, 1));
        assert!(frame.validate(4).is_err());
        assert!(frame.validate(10).is_ok());
    }
}
