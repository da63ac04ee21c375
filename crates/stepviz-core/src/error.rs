//! Error types for stepviz-core.

use thiserror::Error;

/// Validation failures for recorded frames.
///
/// These indicate bugs in an instrumentation adapter, not runtime
/// conditions: a correct adapter never produces them. Playback boundary
/// conditions (stepping past either end of a timeline) are deliberately
/// not errors; they are signaled as `None` by the stepping methods.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// A motion names an element outside the timeline's element range.
    #[error("motion references element {element} outside 0..{element_count}")]
    ElementOutOfRange {
        element: usize,
        element_count: usize,
    },

    /// A motion with zero magnitude was recorded.
    #[error("zero-magnitude motion recorded for element {element}")]
    ZeroMagnitude { element: usize },
}
