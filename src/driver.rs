// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matching construction driver.
//!
//! The driver owns the accumulator matching for the duration of one run
//! and works through the left side as an explicit decreasing work set:
//! left vertices are taken in ascending index order, and for each vertex
//! still unsaturated the alternating search either yields an augmenting
//! path (apply it, move on) or exhausts (certify the reachable left set
//! as deficient and stop).
//!
//! Each augmentation saturates its start vertex permanently: later
//! augmentations re-pair interior vertices but never uncover them. So one
//! pass over the left side suffices, and the run does at most `|Left|`
//! searches of `O(V + E)` each, `O(V·(V + E))` in total. A step budget can
//! bound that product for degenerate inputs.
//!
//! # Outcomes
//!
//! Failure to saturate is not an error: [`MatchingOutcome::Deficient`] is
//! an ordinary result carrying the certificate. The `Err` channel of
//! [`MatchingDriver::saturate_left`] is reserved for the step budget and
//! for invariant violations that indicate a bug.

use thiserror::Error;

use crate::graph::{GraphView, Side};
use crate::hall::HallViolation;
use crate::matching::{Matching, MatchingError};
use crate::search::{alternating_search, BudgetExceeded, SearchOutcome};
use crate::statistics::{Counter, Statistics};

/// Result of a driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchingOutcome {
    /// Every left vertex is covered by the returned matching.
    Saturated(Matching),

    /// The left side cannot be saturated. `certificate` proves it;
    /// `partial` is the matching accumulated before the stuck vertex.
    Deficient {
        certificate: HallViolation,
        partial: Matching,
    },
}

impl MatchingOutcome {
    /// Whether the run saturated the left side.
    pub fn is_saturated(&self) -> bool {
        matches!(self, MatchingOutcome::Saturated(_))
    }

    /// The matching produced by the run, saturating or partial.
    pub fn matching(&self) -> &Matching {
        match self {
            MatchingOutcome::Saturated(matching) => matching,
            MatchingOutcome::Deficient { partial, .. } => partial,
        }
    }
}

/// Error from a driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The configured step budget ran out.
    #[error(transparent)]
    Budget(#[from] BudgetExceeded),

    /// A matching operation failed; this indicates a bug, not an input
    /// problem, and must not be retried.
    #[error("matching invariant violated: {0}")]
    Matching(#[from] MatchingError),
}

/// Drives matching construction on one graph.
///
/// # Example
///
/// ```
/// use hall_matching::{BipartiteGraph, MatchingDriver, MatchingOutcome, Side};
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
/// let mut driver = MatchingDriver::new(&graph);
/// match driver.saturate_left().unwrap() {
///     MatchingOutcome::Saturated(matching) => assert_eq!(matching.len(), 2),
///     MatchingOutcome::Deficient { .. } => unreachable!(),
/// }
/// ```
#[derive(Debug)]
pub struct MatchingDriver<'g, G: GraphView> {
    graph: &'g G,

    /// Upper bound on adjacency scans per run, `None` for unlimited.
    max_edge_scans: Option<u64>,

    /// Counters for the most recent run.
    statistics: Statistics,
}

impl<'g, G: GraphView> MatchingDriver<'g, G> {
    /// Create a driver with no step budget.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            max_edge_scans: None,
            statistics: Statistics::new(),
        }
    }

    /// Bound the total number of adjacency scans per run.
    ///
    /// The worst case is `O(V·(V + E))` scans; a budget turns a degenerate
    /// input into a [`BudgetExceeded`] error instead of a stall.
    pub fn with_step_budget(mut self, max_edge_scans: u64) -> Self {
        self.max_edge_scans = Some(max_edge_scans);
        self
    }

    /// Counters from the most recent [`saturate_left`] run.
    ///
    /// [`saturate_left`]: MatchingDriver::saturate_left
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Build a matching saturating the left side, or certify that none
    /// exists.
    ///
    /// An empty left side returns the empty matching without searching.
    /// The result is deterministic: vertices are taken lowest-index first
    /// and searches explore neighbors in the order the graph reports them.
    pub fn saturate_left(&mut self) -> Result<MatchingOutcome, DriverError> {
        self.statistics = Statistics::new();
        let mut matching = Matching::empty();

        let left = self.graph.vertices_on(Side::Left);
        log::debug!("saturating {} left vertices", left.len());

        for v in left {
            if matching.covers(v) {
                continue;
            }
            self.statistics.increment(Counter::SearchesRun);

            let outcome = alternating_search(
                self.graph,
                &matching,
                v,
                &mut self.statistics,
                self.max_edge_scans,
            )?;

            match outcome {
                SearchOutcome::Augmenting(path) => {
                    log::debug!("augmenting from {} along {}", v, path);
                    matching.augment_along(self.graph, &path)?;
                    self.statistics.increment(Counter::Augmentations);
                }
                SearchOutcome::Exhausted(reachable) => {
                    // The reachable left set is deficient: its whole image
                    // is the reachable right set, one vertex smaller.
                    let certificate = HallViolation::certify(self.graph, &reachable.left)
                        .expect("exhausted search reaches a deficient set on a bipartite graph");
                    log::debug!("left side not saturable: {}", certificate);
                    self.statistics.increment(Counter::Certificates);
                    return Ok(MatchingOutcome::Deficient {
                        certificate,
                        partial: matching,
                    });
                }
            }
        }

        log::debug!("left side saturated with {} edges", matching.len());
        Ok(MatchingOutcome::Saturated(matching))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::BipartiteGraph;
    use std::collections::BTreeSet;

    #[test]
    fn test_empty_left_side_returns_empty_matching() {
        let mut graph = BipartiteGraph::new();
        graph.add_vertices(Side::Right, 3);

        let mut driver = MatchingDriver::new(&graph);
        let outcome = driver.saturate_left().unwrap();
        assert_eq!(outcome, MatchingOutcome::Saturated(Matching::empty()));
        // No search was performed.
        assert_eq!(driver.statistics().get(Counter::SearchesRun), 0);
    }

    #[test]
    fn test_saturates_when_possible() {
        // Scenario: a sees {x, y}, b sees {x}; forced matching size 2.
        let mut graph = BipartiteGraph::new();
        let a = graph.add_vertex(Side::Left);
        let b = graph.add_vertex(Side::Left);
        let x = graph.add_vertex(Side::Right);
        let y = graph.add_vertex(Side::Right);
        for (u, v) in [(a, x), (a, y), (b, x)] {
            graph.add_edge(u, v).unwrap();
        }

        let mut driver = MatchingDriver::new(&graph);
        match driver.saturate_left().unwrap() {
            MatchingOutcome::Saturated(matching) => {
                assert_eq!(matching.len(), 2);
                assert!(matching.covers(a));
                assert!(matching.covers(b));
                assert!(matching.is_valid(&graph));
            }
            outcome => panic!("expected saturation, got {:?}", outcome),
        }
        assert_eq!(driver.statistics().get(Counter::Augmentations), 2);
    }

    #[test]
    fn test_reports_deficient_set() {
        // Three left vertices crowded onto two right vertices.
        let mut graph = BipartiteGraph::new();
        let left = graph.add_vertices(Side::Left, 3);
        let right = graph.add_vertices(Side::Right, 2);
        for &u in &left {
            for &v in &right {
                graph.add_edge(u, v).unwrap();
            }
        }

        let mut driver = MatchingDriver::new(&graph);
        match driver.saturate_left().unwrap() {
            MatchingOutcome::Deficient { certificate, partial } => {
                assert_eq!(
                    certificate.deficient_set(),
                    &left.iter().copied().collect::<BTreeSet<_>>()
                );
                assert_eq!(
                    certificate.neighbor_image(),
                    &right.iter().copied().collect::<BTreeSet<_>>()
                );
                // Two vertices were matched before the third got stuck.
                assert_eq!(partial.len(), 2);
                assert!(partial.is_valid(&graph));
            }
            outcome => panic!("expected deficiency, got {:?}", outcome),
        }
        assert_eq!(driver.statistics().get(Counter::Certificates), 1);
    }

    #[test]
    fn test_budget_exhaustion_is_an_error() {
        let mut graph = BipartiteGraph::new();
        let left = graph.add_vertices(Side::Left, 3);
        let right = graph.add_vertices(Side::Right, 3);
        for &u in &left {
            for &v in &right {
                graph.add_edge(u, v).unwrap();
            }
        }

        let mut driver = MatchingDriver::new(&graph).with_step_budget(2);
        assert_eq!(
            driver.saturate_left(),
            Err(DriverError::Budget(BudgetExceeded { limit: 2 }))
        );
    }

    #[test]
    fn test_runs_are_deterministic() {
        let mut graph = BipartiteGraph::new();
        let left = graph.add_vertices(Side::Left, 4);
        let right = graph.add_vertices(Side::Right, 4);
        for &u in &left {
            for &v in &right {
                if (u + v) % 3 != 0 {
                    graph.add_edge(u, v).unwrap();
                }
            }
        }

        let mut driver = MatchingDriver::new(&graph);
        let first = driver.saturate_left().unwrap();
        let second = driver.saturate_left().unwrap();
        assert_eq!(first, second);
    }
}
