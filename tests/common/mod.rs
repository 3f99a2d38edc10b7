// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use hall_matching::{BipartiteGraph, Side, VertexId};

/// Initialize logging once per test binary; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a bipartite graph from side sizes and `(left, right)` index pairs.
///
/// Returns the graph together with the left and right vertex ids, so tests
/// can refer to vertices by position rather than by raw id.
pub fn build_graph(
    left_count: usize,
    right_count: usize,
    edges: &[(usize, usize)],
) -> (BipartiteGraph, Vec<VertexId>, Vec<VertexId>) {
    init_logging();
    let mut graph = BipartiteGraph::new();
    let left = graph.add_vertices(Side::Left, left_count);
    let right = graph.add_vertices(Side::Right, right_count);
    for &(u, v) in edges {
        graph.add_edge(left[u], right[v]).unwrap();
    }
    (graph, left, right)
}
