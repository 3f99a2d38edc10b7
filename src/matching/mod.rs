// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matching data structure.
//!
//! A [`Matching`] is a vertex-disjoint set of graph edges. Disjointness is
//! the core invariant and is structural here: the matching is stored as a
//! partial opposite-map, a lookup table keyed by vertex that holds each
//! covered vertex's unique partner. A table slot can only hold one partner,
//! so no reachable state has a vertex in two edges.
//!
//! # Lifecycle
//!
//! A matching starts empty and grows only by whole-path augmentation
//! ([`Matching::augment_along`]); there is no single-edge insertion in the
//! public interface. Two matchings on disjoint supports can be combined
//! with [`Matching::disjoint_union`]. This discipline is what keeps the
//! disjointness invariant at every observable state.
//!
//! # Errors
//!
//! Operations that would break the invariant fail with a [`MatchingError`]
//! naming the offending vertex. These indicate caller bugs: a correctly
//! written driver never triggers them.

pub mod augment;

use thiserror::Error;

use crate::graph::{Edge, GraphView, VertexId};
use crate::path::PathDefect;

/// Error from a matching operation.
///
/// All variants are programmer errors: callers treat them as fatal rather
/// than retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchingError {
    /// `opposite` was asked for a vertex outside the support.
    #[error("vertex {vertex} is not covered by the matching")]
    NotMatched { vertex: VertexId },

    /// `disjoint_union` was given matchings whose supports intersect.
    #[error("matchings overlap at vertex {vertex}")]
    OverlappingSupport { vertex: VertexId },

    /// `augment_along` was given a sequence that is not an augmenting path.
    #[error("augmenting path rejected: {0}")]
    InvalidPath(#[from] PathDefect),
}

/// A vertex-disjoint set of graph edges.
///
/// # Example
///
/// ```
/// use hall_matching::{AlternatingPath, BipartiteGraph, Matching, Side};
///
/// let mut graph = BipartiteGraph::new();
/// let a = graph.add_vertex(Side::Left);
/// let x = graph.add_vertex(Side::Right);
/// graph.add_edge(a, x).unwrap();
///
/// let mut matching = Matching::empty();
/// matching
///     .augment_along(&graph, &AlternatingPath::new(vec![a, x]))
///     .unwrap();
///
/// assert_eq!(matching.len(), 1);
/// assert_eq!(matching.opposite(a), Ok(x));
/// assert_eq!(matching.opposite(x), Ok(a));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matching {
    /// Partner of each covered vertex, indexed by `VertexId`.
    ///
    /// Invariant: `table[v] == Some(w)` iff `table[w] == Some(v)`, and
    /// `v != w`. The table grows on demand; slots past the end are `None`.
    table: Vec<Option<VertexId>>,

    /// Number of edges (half the number of covered vertices).
    len: usize,
}

impl Matching {
    /// The empty matching. Never fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of edges in the matching.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the matching has no edges.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the matching contains the given edge.
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.partner(edge.lo()) == Some(edge.hi())
    }

    /// The partner of `v`, or `None` if `v` is uncovered.
    ///
    /// This is the non-failing form of [`Matching::opposite`], used where
    /// an uncovered vertex is an ordinary case rather than a bug.
    pub fn partner(&self, v: VertexId) -> Option<VertexId> {
        self.table.get(v).copied().flatten()
    }

    /// The unique vertex matched with `v`.
    ///
    /// Fails with [`MatchingError::NotMatched`] when `v` is outside the
    /// support. For covered vertices this is an involution:
    /// `opposite(opposite(v)) == v` and `opposite(v) != v`.
    pub fn opposite(&self, v: VertexId) -> Result<VertexId, MatchingError> {
        self.partner(v).ok_or(MatchingError::NotMatched { vertex: v })
    }

    /// Whether `v` is covered by some edge of the matching.
    pub fn covers(&self, v: VertexId) -> bool {
        self.partner(v).is_some()
    }

    /// The covered vertices, in ascending order.
    pub fn support(&self) -> Vec<VertexId> {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(v, &partner)| partner.map(|_| v))
            .collect()
    }

    /// The edges of the matching, in ascending `(lo, hi)` order.
    pub fn edges(&self) -> Vec<Edge> {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(v, &partner)| {
                partner.filter(|&w| v < w).map(|w| Edge::new(v, w))
            })
            .collect()
    }

    /// Check both matching invariants against a graph.
    ///
    /// Verifies that every edge is a graph edge and that the opposite
    /// table is a self-consistent partial involution (which is what vertex
    /// disjointness amounts to in this representation). Intended as a
    /// property check, not for the search hot path.
    pub fn is_valid<G: GraphView>(&self, graph: &G) -> bool {
        let mut covered = 0usize;
        for (v, partner) in self.table.iter().enumerate() {
            if let Some(w) = *partner {
                if w == v || self.partner(w) != Some(v) {
                    return false;
                }
                if !graph.has_edge(&Edge::new(v, w)) {
                    return false;
                }
                covered += 1;
            }
        }
        covered == 2 * self.len
    }

    /// Combine two matchings with disjoint supports.
    ///
    /// Fails with [`MatchingError::OverlappingSupport`] naming a shared
    /// vertex if the supports intersect. Given two valid inputs the result
    /// is valid by construction, with
    /// `len == self.len() + other.len()`.
    pub fn disjoint_union(&self, other: &Matching) -> Result<Matching, MatchingError> {
        let mut union = self.clone();
        for edge in other.edges() {
            for vertex in [edge.lo(), edge.hi()] {
                if union.covers(vertex) {
                    return Err(MatchingError::OverlappingSupport { vertex });
                }
            }
            union.insert(edge);
        }
        Ok(union)
    }

    /// Add an edge between two uncovered vertices.
    ///
    /// Private: public growth goes through augmentation, which preserves
    /// the lifecycle discipline documented on the module.
    pub(crate) fn insert(&mut self, edge: Edge) {
        let (lo, hi) = edge.endpoints();
        if self.table.len() <= hi {
            self.table.resize(hi + 1, None);
        }
        debug_assert!(self.table[lo].is_none() && self.table[hi].is_none());
        self.table[lo] = Some(hi);
        self.table[hi] = Some(lo);
        self.len += 1;
    }

    /// Remove an edge currently in the matching.
    pub(crate) fn remove(&mut self, edge: Edge) {
        debug_assert!(self.contains_edge(&edge));
        self.table[edge.lo()] = None;
        self.table[edge.hi()] = None;
        self.len -= 1;
    }
}

/// Equality is by edge set; the internal table may differ in trailing
/// capacity between matchings with the same edges.
impl PartialEq for Matching {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.edges() == other.edges()
    }
}

impl Eq for Matching {}
