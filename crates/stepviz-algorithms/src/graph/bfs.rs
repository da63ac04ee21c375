//! Breadth-first search instrumentation.
//!
//! Unlike the sorting family, traversal frames carry no motions -
//! vertices never change cells. Frames carry the dequeued frontier as a
//! highlight plus distance/parent pointer annotations, and the shared
//! cursor mechanics apply unchanged (position playback is a no-op).

use std::collections::{BTreeMap, VecDeque};

use stepviz_core::{Frame, Recorder, Recording};
use tracing::{debug, info, warn};

use super::Graph;
use crate::algorithm::Algorithm;

/// Semantic tags emitted by [`Bfs`].
pub mod tags {
    pub const START: &str = "bfs.start";
    pub const VISIT: &str = "bfs.visit";
    pub const DISCOVER: &str = "bfs.discover";
    pub const SKIP: &str = "bfs.already-seen";
}

pub const PSEUDOCODE: &[&str] = &[
    "BFS(graph, s):",
    "    for each vertex u: color[u] = WHITE, dist[u] = INF, parent[u] = NIL",
    "    color[s] = GRAY; dist[s] = 0",
    "    enqueue(Q, s)",
    "    while Q is not empty:",
    "        u = dequeue(Q)",
    "        for each v adjacent to u:",
    "            if color[v] == WHITE:",
    "                color[v] = GRAY; dist[v] = dist[u]+1; parent[v] = u",
    "                enqueue(Q, v)",
    "        color[u] = BLACK",
];

pub fn pseudocode_lines(tag: &str) -> Option<&'static [usize]> {
    match tag {
        tags::START => Some(&[1, 2, 3]),
        tags::VISIT => Some(&[4, 5]),
        tags::DISCOVER => Some(&[7, 8, 9]),
        tags::SKIP => Some(&[7]),
        _ => None,
    }
}

/// Classical CLRS visit coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// Not yet discovered.
    White,
    /// Discovered, waiting in the queue.
    Gray,
    /// Fully explored.
    Black,
}

/// Per-vertex traversal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsVertex {
    pub state: VisitState,
    pub parent: Option<usize>,
    pub dist: Option<u32>,
}

impl BfsVertex {
    fn undiscovered() -> Self {
        Self {
            state: VisitState::White,
            parent: None,
            dist: None,
        }
    }
}

/// Final traversal data for the info panel and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    /// Vertices in dequeue order.
    pub order: Vec<usize>,
    /// Per-vertex state; unreached vertices stay White with no
    /// distance or parent.
    pub vertices: BTreeMap<usize, BfsVertex>,
}

/// Instrumented breadth-first search from a fixed source vertex.
#[derive(Debug, Clone, Copy)]
pub struct Bfs {
    source: usize,
}

impl Bfs {
    pub fn new(source: usize) -> Self {
        Self { source }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Runs the traversal, returning both the recording and the final
    /// per-vertex data.
    pub fn run_with_result(&self, graph: &Graph) -> (Recording, BfsResult) {
        debug!(
            event = "record_start",
            algorithm = "BFS",
            vertices = graph.vertex_count(),
            source = self.source,
        );

        let mut recorder = Recorder::new(graph.id_bound());
        let mut vertices: BTreeMap<usize, BfsVertex> = graph
            .vertices()
            .map(|v| (v.id, BfsVertex::undiscovered()))
            .collect();
        let mut order = Vec::new();

        if !graph.contains_vertex(self.source) {
            warn!(event = "missing_source", source = self.source);
            return (recorder.finish(), BfsResult { order, vertices });
        }

        let source = vertices.get_mut(&self.source).expect("source checked above");
        source.state = VisitState::Gray;
        source.dist = Some(0);

        recorder.push(
            Frame::new(
                tags::START,
                format!("Breadth-first search from vertex {}", self.source),
            )
            .with_highlight(self.source)
            .with_pointer(self.source, "S"),
        );

        let mut queue = VecDeque::from([self.source]);
        while let Some(u) = queue.pop_front() {
            let dist_u = vertices[&u].dist.expect("queued vertices have a distance");
            recorder.push(
                Frame::new(tags::VISIT, format!("Visiting vertex {u}"))
                    .with_highlight(u)
                    .with_pointer(u, format!("d={dist_u}")),
            );
            order.push(u);

            for edge in graph.neighbors(u) {
                let v = edge.dst;
                let record = vertices.get_mut(&v).expect("edges point at vertices");
                if record.state == VisitState::White {
                    record.state = VisitState::Gray;
                    record.dist = Some(dist_u + 1);
                    record.parent = Some(u);
                    recorder.push(
                        Frame::new(
                            tags::DISCOVER,
                            format!("Discovered vertex {v} via edge {u} -> {v}"),
                        )
                        .with_highlight(v)
                        .with_pointer(v, format!("d={}", dist_u + 1))
                        .with_pointer(v, format!("p={u}")),
                    );
                    queue.push_back(v);
                } else {
                    recorder.push(
                        Frame::new(
                            tags::SKIP,
                            format!("Edge {u} -> {v}: vertex {v} already discovered"),
                        )
                        .with_highlight(v),
                    );
                }
            }

            vertices.get_mut(&u).expect("visited vertex exists").state = VisitState::Black;
            recorder.settle(u);
        }

        info!(
            event = "record_end",
            algorithm = "BFS",
            frames = recorder.recorded(),
            visited = order.len(),
        );
        (recorder.finish(), BfsResult { order, vertices })
    }
}

impl Algorithm for Bfs {
    type Input = Graph;

    fn name(&self) -> &'static str {
        "Breadth-First Search"
    }

    fn run(&self, graph: &Graph) -> Recording {
        self.run_with_result(graph).0
    }
}
