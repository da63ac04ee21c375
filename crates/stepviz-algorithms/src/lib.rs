//! stepviz Algorithms - Instrumentation adapters
//!
//! This crate runs classic algorithms to completion while recording a
//! replayable frame log:
//! - The [`Algorithm`] capability trait
//! - Sorting adapters: bubble, selection, insertion, quick, merge
//! - A grid-placed graph model with a BFS adapter
//! - Per-algorithm pseudocode line maps keyed by emitted frame tags

pub mod algorithm;
pub mod graph;
pub mod sorting;

pub use algorithm::Algorithm;
pub use graph::{Bfs, BfsResult, BfsVertex, Edge, Graph, Vertex, VisitState};
pub use sorting::{BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
