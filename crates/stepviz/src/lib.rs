//! stepviz - Replayable algorithm animation engine
//!
//! Instrument a classic algorithm once, then step its visual log
//! forward and backward exactly, without ever re-running the algorithm.
//!
//! # Example
//!
//! ```rust
//! use stepviz::prelude::*;
//!
//! // Instrument a run and walk it.
//! let recording = BubbleSort.run(&[3, 1, 2]);
//! let (mut player, _handle) = Player::new(recording);
//!
//! let snapshot = player.step_forward().unwrap();
//! assert_eq!(snapshot.cursor, 1);
//!
//! // Backward playback is exact.
//! let snapshot = player.step_backward().unwrap();
//! assert_eq!(snapshot.positions, vec![0, 1, 2]);
//! ```

// Core model
pub use stepviz_core::{
    Direction, Frame, FrameError, Motion, Pointer, Recorder, Recording, SettledAt, Snapshot,
    Timeline,
};

// Instrumentation adapters
pub use stepviz_algorithms::{
    Algorithm, Bfs, BfsResult, BfsVertex, BubbleSort, Edge, Graph, InsertionSort, MergeSort,
    QuickSort, SelectionSort, Vertex, VisitState,
};

// Pseudocode tables live in their algorithm modules
pub use stepviz_algorithms::{graph, sorting};

// Input contract and configuration
pub use stepviz_config::{
    materialize, parse_custom_array, AlgorithmKind, ArraySpec, AutoplayConfig, ConfigError,
    InputError, VisualizerConfig, MAX_ELEMENTS,
};

// Playback
pub use stepviz_playback::{AutoplayTimer, Player, PlayerCommand, PlayerHandle};

/// Instruments one sorting run for a configured algorithm kind.
///
/// Returns `None` for [`AlgorithmKind::Bfs`], which takes a graph
/// instead of a value array.
pub fn record_sort(kind: AlgorithmKind, values: &[i32]) -> Option<Recording> {
    match kind {
        AlgorithmKind::Bubble => Some(BubbleSort.run(values)),
        AlgorithmKind::Selection => Some(SelectionSort.run(values)),
        AlgorithmKind::Insertion => Some(InsertionSort.run(values)),
        AlgorithmKind::Quick => Some(QuickSort.run(values)),
        AlgorithmKind::Merge => Some(MergeSort.run(values)),
        AlgorithmKind::Bfs => None,
    }
}

pub mod prelude {
    pub use super::{
        Algorithm, AlgorithmKind, ArraySpec, AutoplayTimer, Bfs, BubbleSort, Direction, Frame,
        Graph, InsertionSort, MergeSort, Motion, Player, PlayerHandle, QuickSort, Recording,
        SelectionSort, Snapshot, Timeline, VisualizerConfig,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sort_covers_every_sorting_kind() {
        for kind in [
            AlgorithmKind::Bubble,
            AlgorithmKind::Selection,
            AlgorithmKind::Insertion,
            AlgorithmKind::Quick,
            AlgorithmKind::Merge,
        ] {
            let recording = record_sort(kind, &[2, 1, 3]).unwrap();
            assert!(recording.timeline().len() > 0);
        }
        assert!(record_sort(AlgorithmKind::Bfs, &[1]).is_none());
    }

    #[test]
    fn config_to_playback_round_trip() {
        let config = VisualizerConfig::new()
            .with_algorithm(AlgorithmKind::Quick)
            .with_array(ArraySpec::Random { size: 6 })
            .with_random_seed(11);

        let values = materialize(config.array.as_ref().unwrap(), &mut config.rng()).unwrap();
        let recording = record_sort(config.algorithm, &values).unwrap();
        let (mut player, _handle) = Player::new(recording);

        let total = player.progress().1;
        let snap = player.jump_to(total).unwrap();

        // Values read off by final slot are sorted.
        let mut by_slot = vec![0; values.len()];
        for (element, &slot) in snap.positions.iter().enumerate() {
            by_slot[slot as usize] = values[element];
        }
        let mut expected = values.clone();
        expected.sort_unstable();
        assert_eq!(by_slot, expected);
    }
}
