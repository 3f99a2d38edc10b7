// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hall deficiency checker.
//!
//! A matching saturating the whole left side exists exactly when every
//! subset `S` of the left side has a neighbor image at least as large as
//! itself. This module computes neighbor images, tests subsets for
//! deficiency, and packages a failing subset as a [`HallViolation`]
//! certificate.
//!
//! The driver uses the checker in both directions: as the condition its
//! success guarantees for every subset, and constructively, to certify the
//! reachable left set of a failed alternating search. The certificate's
//! image is always recomputed here from the graph rather than taken from
//! the search, so a certificate is checkable on its own.

use std::collections::BTreeSet;
use std::fmt;

use crate::graph::{GraphView, VertexId};

/// The union of the neighbors of every vertex in `set`.
///
/// Duplicates in `set` are harmless. The result is ordered, so iteration
/// is deterministic.
pub fn neighbor_image<G: GraphView>(graph: &G, set: &[VertexId]) -> BTreeSet<VertexId> {
    let mut image = BTreeSet::new();
    for &v in set {
        image.extend(graph.neighbors(v));
    }
    image
}

/// Whether `set` has fewer neighbors than members.
///
/// `set` is deduplicated before comparison, so a repeated vertex cannot
/// fake a deficiency.
pub fn is_deficient<G: GraphView>(graph: &G, set: &[VertexId]) -> bool {
    let members: BTreeSet<VertexId> = set.iter().copied().collect();
    neighbor_image(graph, set).len() < members.len()
}

/// Certificate that no matching saturates the left side.
///
/// Carries a deficient subset of the left side together with its computed
/// neighbor image; checking the claim by hand only needs the graph's
/// adjacency lists. Produced by the driver, never constructed from an
/// unverified set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallViolation {
    deficient_set: BTreeSet<VertexId>,
    neighbor_image: BTreeSet<VertexId>,
}

impl HallViolation {
    /// Certify a deficient set, computing its image from the graph.
    ///
    /// Returns `None` if `set` is not actually deficient, so a violation
    /// value always witnesses a true violation.
    pub fn certify<G: GraphView>(graph: &G, set: &[VertexId]) -> Option<Self> {
        let deficient_set: BTreeSet<VertexId> = set.iter().copied().collect();
        let neighbor_image = neighbor_image(graph, set);
        if neighbor_image.len() < deficient_set.len() {
            Some(Self {
                deficient_set,
                neighbor_image,
            })
        } else {
            None
        }
    }

    /// The deficient subset of the left side.
    pub fn deficient_set(&self) -> &BTreeSet<VertexId> {
        &self.deficient_set
    }

    /// The neighbor image of the deficient set.
    pub fn neighbor_image(&self) -> &BTreeSet<VertexId> {
        &self.neighbor_image
    }

    /// How many vertices the image is short of the set.
    pub fn shortfall(&self) -> usize {
        self.deficient_set.len() - self.neighbor_image.len()
    }
}

impl fmt::Display for HallViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_set(f: &mut fmt::Formatter<'_>, set: &BTreeSet<VertexId>) -> fmt::Result {
            write!(f, "{{")?;
            for (i, v) in set.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "}}")
        }

        write_set(f, &self.deficient_set)?;
        write!(f, " has {} vertices but its neighbor image ", self.deficient_set.len())?;
        write_set(f, &self.neighbor_image)?;
        write!(f, " has only {}", self.neighbor_image.len())
    }
}
