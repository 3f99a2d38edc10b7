// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Augmentation step: grow a matching along an augmenting path.
//!
//! Flipping the membership of every edge on an augmenting path removes the
//! path's k matched edges and inserts its k+1 unmatched edges, so the
//! matching grows by exactly one edge and its support gains exactly the two
//! path endpoints. Interior vertices stay covered, only their partners
//! change.
//!
//! Validation runs first and is total: an invalid sequence is rejected with
//! a [`PathDefect`] before any mutation, so a failed augmentation leaves the
//! matching untouched.

use crate::graph::{Edge, GraphView};
use crate::matching::{Matching, MatchingError};
use crate::path::{AlternatingPath, PathDefect};

impl Matching {
    /// Check that `path` is an augmenting path for this matching.
    ///
    /// The rules, in the order they are checked:
    /// 1. even vertex count, at least two (odd number of edges)
    /// 2. no repeated vertex
    /// 3. both endpoints uncovered
    /// 4. consecutive vertices adjacent in the graph
    /// 5. edges alternate, starting and ending with a non-matching edge
    pub fn check_augmenting<G: GraphView>(
        &self,
        graph: &G,
        path: &AlternatingPath,
    ) -> Result<(), PathDefect> {
        let vertices = path.vertices();
        if vertices.len() < 2 || vertices.len() % 2 != 0 {
            return Err(PathDefect::WrongLength {
                count: vertices.len(),
            });
        }

        let mut sorted = vertices.to_vec();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(PathDefect::RepeatedVertex { vertex: pair[0] });
            }
        }

        for endpoint in [path.start(), path.end()] {
            if self.covers(endpoint) {
                return Err(PathDefect::MatchedEndpoint { vertex: endpoint });
            }
        }

        for (position, pair) in vertices.windows(2).enumerate() {
            let (u, v) = (pair[0], pair[1]);
            if !graph.adjacent(u, v) {
                return Err(PathDefect::MissingEdge {
                    u: u.min(v),
                    v: u.max(v),
                });
            }
            // Odd positions must be matching edges, even positions must not.
            let matched = self.contains_edge(&Edge::new(u, v));
            if matched != (position % 2 == 1) {
                return Err(PathDefect::BrokenAlternation { u, v, position });
            }
        }

        Ok(())
    }

    /// Flip every edge of an augmenting path, growing the matching by one.
    ///
    /// On success `len` increases by exactly one and the support gains
    /// exactly the two endpoints of `path`. Fails with
    /// [`MatchingError::InvalidPath`] and leaves the matching unchanged if
    /// `path` does not augment it.
    ///
    /// # Example
    ///
    /// ```
    /// use hall_matching::{AlternatingPath, BipartiteGraph, Edge, Matching, Side};
    ///
    /// let mut graph = BipartiteGraph::new();
    /// let a = graph.add_vertex(Side::Left);
    /// let b = graph.add_vertex(Side::Left);
    /// let x = graph.add_vertex(Side::Right);
    /// let y = graph.add_vertex(Side::Right);
    /// for (u, v) in [(a, x), (a, y), (b, x)] {
    ///     graph.add_edge(u, v).unwrap();
    /// }
    ///
    /// // Start from {{a, x}}, then augment from b along b - x - a - y.
    /// let mut matching = Matching::empty();
    /// matching.augment_along(&graph, &AlternatingPath::new(vec![a, x])).unwrap();
    /// matching.augment_along(&graph, &AlternatingPath::new(vec![b, x, a, y])).unwrap();
    ///
    /// assert_eq!(matching.edges(), vec![Edge::new(a, y), Edge::new(b, x)]);
    /// ```
    pub fn augment_along<G: GraphView>(
        &mut self,
        graph: &G,
        path: &AlternatingPath,
    ) -> Result<(), MatchingError> {
        self.check_augmenting(graph, path)?;

        // Matched edges leave before their endpoints are re-paired, so the
        // opposite table never holds a vertex in two edges.
        for (position, edge) in path.edges().enumerate() {
            if position % 2 == 1 {
                self.remove(edge);
            }
        }
        for (position, edge) in path.edges().enumerate() {
            if position % 2 == 0 {
                self.insert(edge);
            }
        }
        Ok(())
    }
}
