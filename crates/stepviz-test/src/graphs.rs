//! Known graph inputs, described as vertex placements and edge lists so
//! this crate does not depend on the graph model itself.

/// Vertex placements `(id, row, col)` and undirected edges `(src, dst)`
/// for the path graph 0 - 1 - 2.
pub fn path3() -> (Vec<(usize, usize, usize)>, Vec<(usize, usize)>) {
    (
        vec![(0, 0, 0), (1, 0, 1), (2, 0, 2)],
        vec![(0, 1), (1, 2)],
    )
}

/// A 2x2 grid with a diagonal: 0-1, 0-2, 1-3, 2-3, 0-3.
pub fn square_with_diagonal() -> (Vec<(usize, usize, usize)>, Vec<(usize, usize)>) {
    (
        vec![(0, 0, 0), (1, 0, 1), (2, 1, 0), (3, 1, 1)],
        vec![(0, 1), (0, 2), (1, 3), (2, 3), (0, 3)],
    )
}

/// A disconnected pair: component {0,1} and isolated vertex 5.
pub fn disconnected() -> (Vec<(usize, usize, usize)>, Vec<(usize, usize)>) {
    (vec![(0, 0, 0), (1, 0, 1), (5, 2, 2)], vec![(0, 1)])
}
