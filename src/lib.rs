// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constructive bipartite matching with Hall deficiency certificates.
//!
//! Builds a matching saturating the left side of a bipartite graph by
//! repeated alternating-path augmentation, or proves that none exists by
//! producing a deficient subset of the left side (the constructive
//! direction of Hall's marriage theorem).
//!
//! # Architecture
//!
//! The crate is a pure computational core with no I/O surface, split into
//! leaf-first components:
//!
//! - [`graph`]: the [`GraphView`] trait the algorithms query (finite
//!   vertex set, symmetric irreflexive adjacency, two-sided coloring), and
//!   the concrete [`BipartiteGraph`] container that validates its input at
//!   the boundary.
//! - [`matching`]: the vertex-disjoint edge set, stored as a partial
//!   opposite-map so disjointness is structural; grows only by whole-path
//!   augmentation.
//! - [`search`]: breadth-first alternating-path search; finds a shortest
//!   augmenting path from an unmatched left vertex or reports the
//!   reachable vertex sets.
//! - [`hall`]: neighbor images, deficiency tests, and the
//!   [`HallViolation`] certificate.
//! - [`driver`]: the top-level loop (lowest-index unsaturated left
//!   vertex, search, augment, repeat), at most `|Left|` searches of
//!   `O(V + E)` each.
//!
//! The whole construction is single-threaded, synchronous, and
//! deterministic: every choice point (which vertex to augment from, which
//! neighbor to explore first) is resolved by lowest index.
//!
//! # Example
//!
//! ```
//! use hall_matching::{BipartiteGraph, MatchingDriver, MatchingOutcome, Side};
//!
//! // Left {a, b, c} crowded onto right {x, y}.
//! let mut graph = BipartiteGraph::new();
//! let left = graph.add_vertices(Side::Left, 3);
//! let right = graph.add_vertices(Side::Right, 2);
//! for &u in &left {
//!     for &v in &right {
//!         graph.add_edge(u, v).unwrap();
//!     }
//! }
//!
//! let mut driver = MatchingDriver::new(&graph);
//! match driver.saturate_left().unwrap() {
//!     MatchingOutcome::Deficient { certificate, partial } => {
//!         assert_eq!(certificate.shortfall(), 1);
//!         assert_eq!(partial.len(), 2);
//!     }
//!     MatchingOutcome::Saturated(_) => unreachable!(),
//! }
//! ```
//!
//! # Outcomes and errors
//!
//! A deficient left side is a normal outcome, reported inside `Ok`. The
//! error channel carries only the optional step budget running out
//! ([`search::BudgetExceeded`]) and matching-invariant violations
//! ([`MatchingError`]), which indicate bugs and are never retried.

pub mod driver;
pub mod graph;
pub mod hall;
pub mod matching;
pub mod path;
pub mod search;
pub mod statistics;

// Re-export commonly used types
pub use driver::{DriverError, MatchingDriver, MatchingOutcome};
pub use graph::{BipartiteGraph, Edge, GraphError, GraphView, Side, VertexId};
pub use hall::{is_deficient, neighbor_image, HallViolation};
pub use matching::{Matching, MatchingError};
pub use path::{AlternatingPath, PathDefect};
pub use search::{alternating_search, BudgetExceeded, SearchOutcome};
