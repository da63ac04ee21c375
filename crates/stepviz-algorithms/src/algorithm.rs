//! Algorithm capability trait.

use stepviz_core::Recording;

/// An algorithm that runs to completion while recording a frame log.
///
/// Instrumentation is a one-shot, synchronous pass: the adapter executes
/// the canonical algorithm against its own working copy of the input and
/// emits one frame per semantically meaningful step as a side effect.
/// The finished [`Recording`] is then handed to the playback layer; no
/// algorithm code runs during playback.
///
/// Adapters share no mutable state, so a problem instance can be
/// re-instrumented at will.
///
/// # Type Parameters
/// * `Input` - The problem instance type (a value slice for the sorting
///   family, a graph for traversals)
pub trait Algorithm {
    type Input: ?Sized;

    /// Human-readable algorithm name, used in logs and the info panel.
    fn name(&self) -> &'static str;

    /// Runs the algorithm over `input` and returns the sealed recording.
    fn run(&self, input: &Self::Input) -> Recording;
}
