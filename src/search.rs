// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Alternating-path search engine.
//!
//! Breadth-first search from an unmatched left vertex over alternating
//! edge types. The conceptual state machine has two states, named for the
//! kind of edge about to be traversed:
//!
//! - **Unmatched** (at a left vertex): any graph edge not in the matching
//!   may be taken, moving to a right vertex.
//! - **Matched** (at a right vertex): only the unique matching edge at
//!   that vertex may be taken, moving back to a left vertex.
//!
//! The search succeeds the moment it discovers an uncovered right vertex;
//! the parent chain back to the start is then a shortest augmenting path.
//! Breadth-first order is not needed for the correctness of a single
//! augmentation, but shortest paths bound the work when the search is run
//! repeatedly by the driver.
//!
//! # Algorithm
//!
//! The two states are fused into a single loop that only ever enqueues
//! left vertices: discovering a covered right vertex immediately follows
//! its matching edge to the partner. A visited set forbids vertex reuse,
//! which both guarantees termination and keeps any reported path simple.
//! Traversing a matching edge out of a left vertex is impossible by
//! construction: the partner of a covered left vertex was visited at the
//! moment the left vertex was discovered.
//!
//! # Exhaustion
//!
//! If the queue drains without finding an uncovered right vertex, no
//! augmenting path exists from this start vertex under this matching. That
//! alone certifies nothing about other vertices; the engine reports the
//! [`Reachable`] vertex sets and the driver turns them into a deficiency
//! certificate: every reachable right vertex is matched, paired one-to-one
//! with a reachable left vertex other than the start, so the reachable
//! left set has exactly one more vertex than its whole neighbor image.
//!
//! Each search is `O(V + E)`.

use std::collections::VecDeque;

use thiserror::Error;

use crate::graph::{GraphView, Side, VertexId};
use crate::matching::Matching;
use crate::path::AlternatingPath;
use crate::statistics::{Counter, Statistics};

/// Result of one alternating search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest augmenting path from the start vertex.
    Augmenting(AlternatingPath),

    /// No augmenting path exists from the start vertex; the alternating
    /// reachable sets are reported for certificate construction.
    Exhausted(Reachable),
}

/// The vertices reached by an exhausted alternating search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachable {
    /// Reachable left vertices (including the start), ascending.
    pub left: Vec<VertexId>,

    /// Reachable right vertices (all of them matched), ascending.
    pub right: Vec<VertexId>,
}

/// The configured step budget ran out mid-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("edge-scan budget of {limit} exhausted before the search completed")]
pub struct BudgetExceeded {
    pub limit: u64,
}

/// Search for an augmenting path starting at `start`.
///
/// `start` must be an uncovered left vertex; the driver guarantees this.
/// Every adjacency-list entry examined counts one edge scan against
/// `statistics`, and the search aborts with [`BudgetExceeded`] once the
/// cumulative count reaches `limit`.
///
/// Neighbors are explored in the order the graph reports them, so the
/// result is deterministic for a deterministic graph view.
///
/// # Example
///
/// ```
/// use hall_matching::{alternating_search, BipartiteGraph, Matching, SearchOutcome, Side};
/// use hall_matching::statistics::Statistics;
///
/// let mut graph = BipartiteGraph::new();
/// let a = graph.add_vertex(Side::Left);
/// let x = graph.add_vertex(Side::Right);
/// graph.add_edge(a, x).unwrap();
///
/// let matching = Matching::empty();
/// let mut statistics = Statistics::new();
/// match alternating_search(&graph, &matching, a, &mut statistics, None).unwrap() {
///     SearchOutcome::Augmenting(path) => assert_eq!(path.vertices(), &[a, x]),
///     SearchOutcome::Exhausted(_) => unreachable!(),
/// }
/// ```
pub fn alternating_search<G: GraphView>(
    graph: &G,
    matching: &Matching,
    start: VertexId,
    statistics: &mut Statistics,
    limit: Option<u64>,
) -> Result<SearchOutcome, BudgetExceeded> {
    debug_assert_eq!(graph.side(start), Side::Left);
    debug_assert!(!matching.covers(start));

    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut parent: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        for w in graph.neighbors(v) {
            if let Some(limit) = limit {
                if statistics.get(Counter::EdgesScanned) >= limit {
                    return Err(BudgetExceeded { limit });
                }
            }
            statistics.increment(Counter::EdgesScanned);

            if visited[w] {
                continue;
            }
            visited[w] = true;
            parent[w] = Some(v);

            match matching.partner(w) {
                None => {
                    // Uncovered right vertex: the parent chain is a
                    // shortest augmenting path.
                    log::trace!("augmenting path found ending at {}", w);
                    return Ok(SearchOutcome::Augmenting(trace_back(w, &parent)));
                }
                Some(u) => {
                    debug_assert!(!visited[u]);
                    visited[u] = true;
                    parent[u] = Some(w);
                    queue.push_back(u);
                }
            }
        }
    }

    let (left, right) = split_by_side(graph, &visited);
    Ok(SearchOutcome::Exhausted(Reachable { left, right }))
}

/// Follow the parent chain from `endpoint` back to the start.
fn trace_back(endpoint: VertexId, parent: &[Option<VertexId>]) -> AlternatingPath {
    let mut vertices = vec![endpoint];
    let mut current = endpoint;
    while let Some(previous) = parent[current] {
        vertices.push(previous);
        current = previous;
    }
    vertices.reverse();
    AlternatingPath::new(vertices)
}

/// Partition the visited vertices by side, each ascending.
fn split_by_side<G: GraphView>(graph: &G, visited: &[bool]) -> (Vec<VertexId>, Vec<VertexId>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (v, &seen) in visited.iter().enumerate() {
        if seen {
            match graph.side(v) {
                Side::Left => left.push(v),
                Side::Right => right.push(v),
            }
        }
    }
    (left, right)
}
