// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for alternating search and path augmentation.
//!
//! These drive the search engine and the augmentation step directly,
//! without the driver, the way a caller managing its own loop would.

mod common;

use hall_matching::statistics::Statistics;
use hall_matching::{
    alternating_search, AlternatingPath, Edge, HallViolation, Matching, MatchingError,
    PathDefect, SearchOutcome,
};
use std::collections::BTreeSet;

#[test]
fn test_search_then_augment_rematches_interior() {
    // Starting matching {{a, x}}; from b the only augmenting path is
    // b - x - a - y.
    let (graph, left, right) = common::build_graph(2, 2, &[(0, 0), (0, 1), (1, 0)]);
    let (a, b, x, y) = (left[0], left[1], right[0], right[1]);

    let mut matching = Matching::empty();
    matching
        .augment_along(&graph, &AlternatingPath::new(vec![a, x]))
        .unwrap();

    let mut statistics = Statistics::new();
    let outcome = alternating_search(&graph, &matching, b, &mut statistics, None).unwrap();
    let path = match outcome {
        SearchOutcome::Augmenting(path) => path,
        outcome => panic!("expected augmenting path, got {:?}", outcome),
    };
    assert_eq!(path.vertices(), &[b, x, a, y]);

    matching.augment_along(&graph, &path).unwrap();
    assert_eq!(matching.edges(), vec![Edge::new(a, y), Edge::new(b, x)]);
    assert_eq!(matching.len(), 2);
}

#[test]
fn test_exhausted_search_yields_a_certifiable_set() {
    // a and b share the single right vertex x.
    let (graph, left, right) = common::build_graph(2, 1, &[(0, 0), (1, 0)]);
    let (a, b, x) = (left[0], left[1], right[0]);

    let mut matching = Matching::empty();
    matching
        .augment_along(&graph, &AlternatingPath::new(vec![a, x]))
        .unwrap();

    let mut statistics = Statistics::new();
    let outcome = alternating_search(&graph, &matching, b, &mut statistics, None).unwrap();
    let reachable = match outcome {
        SearchOutcome::Exhausted(reachable) => reachable,
        outcome => panic!("expected exhaustion, got {:?}", outcome),
    };

    let violation = HallViolation::certify(&graph, &reachable.left).unwrap();
    assert_eq!(violation.deficient_set(), &BTreeSet::from([a, b]));
    assert_eq!(violation.neighbor_image(), &BTreeSet::from([x]));
}

#[test]
fn test_each_augmentation_grows_by_exactly_one() {
    let edges: Vec<(usize, usize)> = (0..4)
        .flat_map(|i| (0..4).map(move |j| (i, j)))
        .collect();
    let (graph, left, _) = common::build_graph(4, 4, &edges);

    let mut matching = Matching::empty();
    for (round, &v) in left.iter().enumerate() {
        let mut statistics = Statistics::new();
        let outcome =
            alternating_search(&graph, &matching, v, &mut statistics, None).unwrap();
        match outcome {
            SearchOutcome::Augmenting(path) => {
                let before = matching.support();
                matching.augment_along(&graph, &path).unwrap();
                assert_eq!(matching.len(), round + 1);
                assert!(before.iter().all(|&w| matching.covers(w)));
            }
            outcome => panic!("expected augmenting path, got {:?}", outcome),
        }
    }
    assert!(matching.is_valid(&graph));
}

#[test]
fn test_rejected_paths_surface_their_defect() {
    let (graph, left, right) = common::build_graph(2, 2, &[(0, 0), (0, 1), (1, 0)]);
    let (a, b, x, y) = (left[0], left[1], right[0], right[1]);

    let mut matching = Matching::empty();
    matching
        .augment_along(&graph, &AlternatingPath::new(vec![a, x]))
        .unwrap();

    // Endpoint already matched.
    let error = matching
        .augment_along(&graph, &AlternatingPath::new(vec![b, x]))
        .unwrap_err();
    assert_eq!(
        error,
        MatchingError::InvalidPath(PathDefect::MatchedEndpoint { vertex: x })
    );
    assert_eq!(
        error.to_string(),
        format!("augmenting path rejected: endpoint {} is already matched", x)
    );

    // Vertices not adjacent.
    let error = matching
        .augment_along(&graph, &AlternatingPath::new(vec![b, y]))
        .unwrap_err();
    assert_eq!(
        error,
        MatchingError::InvalidPath(PathDefect::MissingEdge { u: b, v: y })
    );

    // The failed attempts left the matching untouched.
    assert_eq!(matching.edges(), vec![Edge::new(a, x)]);
}
