// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Concrete bipartite graph container.
//!
//! [`BipartiteGraph`] is an adjacency-list graph that enforces the
//! bipartite structure at construction time: every vertex is created with
//! a side, and `add_edge` rejects self-loops and same-side edges. The
//! matching core therefore never has to re-validate the coloring.
//!
//! Neighbor lists are kept sorted, which makes the adjacency test a binary
//! search, keeps iteration order deterministic, and makes duplicate edge
//! insertion a no-op.

use thiserror::Error;

use crate::graph::{Edge, GraphView, Side, VertexId};

/// Error rejecting malformed input at the graph boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint does not name an existing vertex.
    #[error("vertex {vertex} does not exist (graph has {vertex_count} vertices)")]
    UnknownVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Both endpoints are the same vertex.
    #[error("self-loop at vertex {vertex}")]
    SelfLoop { vertex: VertexId },

    /// Both endpoints lie on the same side of the bipartition.
    #[error("vertices {u} and {v} are both on the {side} side")]
    SameSide { u: VertexId, v: VertexId, side: Side },
}

/// A finite bipartite graph with sorted adjacency lists.
///
/// # Example
///
/// ```
/// use hall_matching::{BipartiteGraph, GraphView, Side};
///
/// let mut graph = BipartiteGraph::new();
/// let a = graph.add_vertex(Side::Left);
/// let x = graph.add_vertex(Side::Right);
/// graph.add_edge(a, x).unwrap();
///
/// assert!(graph.adjacent(a, x));
/// assert!(graph.adjacent(x, a));
/// assert_eq!(graph.neighbors(a), vec![x]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    /// Side of each vertex, indexed by `VertexId`.
    sides: Vec<Side>,

    /// Sorted neighbor list of each vertex, indexed by `VertexId`.
    neighbors: Vec<Vec<VertexId>>,

    /// Number of edges (each unordered pair counted once).
    edge_count: usize,
}

impl BipartiteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex on the given side, returning its id.
    pub fn add_vertex(&mut self, side: Side) -> VertexId {
        let id = self.sides.len();
        self.sides.push(side);
        self.neighbors.push(Vec::new());
        id
    }

    /// Add `count` vertices on the given side, returning their ids.
    pub fn add_vertices(&mut self, side: Side, count: usize) -> Vec<VertexId> {
        (0..count).map(|_| self.add_vertex(side)).collect()
    }

    /// Add an edge between `u` and `v`.
    ///
    /// Rejects unknown vertices, self-loops, and same-side edges.
    /// Adding an edge that already exists is a no-op.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        for vertex in [u, v] {
            if vertex >= self.sides.len() {
                return Err(GraphError::UnknownVertex {
                    vertex,
                    vertex_count: self.sides.len(),
                });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }
        if self.sides[u] == self.sides[v] {
            return Err(GraphError::SameSide {
                u: u.min(v),
                v: u.max(v),
                side: self.sides[u],
            });
        }

        let mut inserted = false;
        for (from, to) in [(u, v), (v, u)] {
            let list = &mut self.neighbors[from];
            if let Err(position) = list.binary_search(&to) {
                list.insert(position, to);
                inserted = true;
            }
        }
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All edges in ascending `(lo, hi)` order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (v, list) in self.neighbors.iter().enumerate() {
            for &w in list {
                if v < w {
                    edges.push(Edge::new(v, w));
                }
            }
        }
        edges
    }

}

impl GraphView for BipartiteGraph {
    fn vertex_count(&self) -> usize {
        self.sides.len()
    }

    fn side(&self, v: VertexId) -> Side {
        self.sides[v]
    }

    fn adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors
            .get(u)
            .is_some_and(|list| list.binary_search(&v).is_ok())
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        self.neighbors[v].clone()
    }
}
