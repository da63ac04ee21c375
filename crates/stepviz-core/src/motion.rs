//! Directional slot displacements.
//!
//! A [`Motion`] is the smallest unit of visual change: one logical element
//! moving a whole number of slots in one direction. Motions are immutable
//! and exactly reversible, which is what makes backward playback possible
//! without re-running the algorithm that produced them.

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// Direction of a slot displacement, measured in element-width units for
/// `Left`/`Right` and element-height units for `Up`/`Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    ///
    /// This is the single operation that makes backward playback exact:
    /// un-applying a motion is applying the same magnitude the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Signed contribution of one slot in this direction to a position
    /// scalar: `Right`/`Down` are positive, `Left`/`Up` negative.
    pub(crate) fn sign(self) -> i32 {
        match self {
            Direction::Right | Direction::Down => 1,
            Direction::Left | Direction::Up => -1,
        }
    }
}

/// One logical element moving `magnitude` slots in `direction`.
///
/// `element` is the element's logical index, assigned once when the
/// problem instance is created and never renumbered afterwards. Motions
/// always name logical identity, not the element's current slot.
///
/// Zero-magnitude motions are never constructed by well-behaved
/// instrumentation; they would be visual no-ops and break the symmetry
/// between a motion and its reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motion {
    pub element: usize,
    pub direction: Direction,
    pub magnitude: u32,
}

impl Motion {
    /// Creates a new motion.
    pub fn new(element: usize, direction: Direction, magnitude: u32) -> Self {
        debug_assert!(magnitude >= 1, "zero-magnitude motion for element {element}");
        Self {
            element,
            direction,
            magnitude,
        }
    }

    /// Returns the exact inverse of this motion: opposite direction,
    /// same magnitude, same element.
    pub fn reversed(self) -> Self {
        Self {
            element: self.element,
            direction: self.direction.opposite(),
            magnitude: self.magnitude,
        }
    }

    /// Checks this motion against the element count of its timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the motion names an element outside
    /// `0..element_count` or has zero magnitude. Either indicates a bug
    /// in the instrumentation that produced it.
    pub fn validate(&self, element_count: usize) -> Result<(), FrameError> {
        if self.element >= element_count {
            return Err(FrameError::ElementOutOfRange {
                element: self.element,
                element_count,
            });
        }
        if self.magnitude == 0 {
            return Err(FrameError::ZeroMagnitude {
                element: self.element,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn reversed_flips_direction_only() {
        let m = Motion::new(3, Direction::Right, 2);
        let r = m.reversed();
        assert_eq!(r.element, 3);
        assert_eq!(r.direction, Direction::Left);
        assert_eq!(r.magnitude, 2);
    }

    #[test]
    fn reversed_twice_is_identity() {
        let m = Motion::new(0, Direction::Down, 5);
        assert_eq!(m.reversed().reversed(), m);
    }

    #[test]
    fn validate_rejects_out_of_range_element() {
        let m = Motion::new(4, Direction::Left, 1);
        assert!(m.validate(4).is_err());
        assert!(m.validate(5).is_ok());
    }

    #[test]
    fn validate_rejects_zero_magnitude() {
        let m = Motion {
            element: 0,
            direction: Direction::Left,
            magnitude: 0,
        };
        assert!(matches!(
            m.validate(4),
            Err(FrameError::ZeroMagnitude { element: 0 })
        ));
    }
}
