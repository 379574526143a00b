//! Tests for the MST engines.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rstest::rstest;

use crate::error::{BoundaryStage, MstError, MstErrorCode};
use crate::graph::{Edge, Graph, Point};
use crate::mst::{FindStrategy, SpanningTree};
use crate::test_utils::square_points;

use super::{JsonBoundary, KruskalEngine, MstEngine, PrimOracle};

fn scattered(count: usize, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let points: Vec<Point> = (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..500.0), rng.gen_range(0.0..500.0)))
        .collect();
    Graph::complete(&points).expect("finite points must build")
}

fn engines() -> Vec<Box<dyn MstEngine>> {
    vec![
        Box::new(KruskalEngine::new(FindStrategy::Naive)),
        Box::new(KruskalEngine::new(FindStrategy::PathCompression)),
        Box::new(PrimOracle),
        Box::new(JsonBoundary::new(PrimOracle)),
        Box::new(JsonBoundary::new(KruskalEngine::default())),
    ]
}

#[rstest]
#[case(KruskalEngine::default().name().to_owned(), "kruskal")]
#[case(PrimOracle.name().to_owned(), "prim")]
#[case(JsonBoundary::new(PrimOracle).name().to_owned(), "prim+json")]
#[case(JsonBoundary::new(JsonBoundary::new(PrimOracle)).name().to_owned(), "prim+json+json")]
fn engines_report_their_names(#[case] actual: String, #[case] expected: &str) {
    assert_eq!(actual, expected);
}

#[test]
fn every_engine_solves_the_square() {
    let graph = Graph::complete(&square_points()).expect("square must build");
    for engine in engines() {
        let tree = engine.solve(&graph).expect("square is connected");
        assert_eq!(tree.len(), 3, "{}", engine.name());
        assert_eq!(tree.node_count(), 4, "{}", engine.name());
        assert_eq!(tree.total_weight(), 30.0, "{}", engine.name());
    }
}

#[rstest]
#[case(0)]
#[case(1)]
fn every_engine_returns_an_empty_tree_for_trivial_graphs(#[case] count: usize) {
    let graph = scattered(count, 7);
    for engine in engines() {
        let tree = engine.solve(&graph).expect("trivial graphs succeed");
        assert!(tree.is_empty(), "{}", engine.name());
    }
}

#[rstest]
#[case(12, 1)]
#[case(40, 2)]
#[case(75, 3)]
fn prim_matches_kruskal_total_weight(#[case] count: usize, #[case] seed: u64) {
    let graph = scattered(count, seed);
    let local = KruskalEngine::default()
        .solve(&graph)
        .expect("complete graph is connected");
    let reference = PrimOracle.solve(&graph).expect("complete graph is connected");

    assert_eq!(local.len(), reference.len());
    let scale = local.total_weight().abs().max(1.0);
    assert!((local.total_weight() - reference.total_weight()).abs() <= 1e-9 * scale);
}

#[test]
fn prim_reports_disconnected_graphs() {
    let points: Vec<Point> = (0..4).map(|i| Point::new(f64::from(i), 0.0)).collect();
    let graph = Graph::from_parts(&points, vec![Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)])
        .expect("sparse graph must build");

    let err = PrimOracle.solve(&graph).expect_err("two components");
    assert_eq!(
        err,
        MstError::DisconnectedGraph {
            accepted: 1,
            required: 3
        }
    );
}

#[test]
fn prim_keeps_the_lightest_parallel_edge() {
    let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    let graph = Graph::from_parts(
        &points,
        vec![Edge::new(0, 1, 4.0), Edge::new(1, 0, 2.0), Edge::new(0, 0, 0.1)],
    )
    .expect("sparse graph must build");

    let tree = PrimOracle.solve(&graph).expect("connected");
    assert_eq!(tree.edges(), &[Edge::new(0, 1, 2.0)]);
}

#[test]
fn prim_rejects_out_of_range_edges() {
    let graph: Graph = serde_json::from_str(
        r#"{"nodes":[{"id":0,"position":{"x":0.0,"y":0.0}},{"id":1,"position":{"x":1.0,"y":0.0}}],
            "edges":[{"source":3,"target":1,"weight":1.0}]}"#,
    )
    .expect("fixture must parse");
    let err = PrimOracle.solve(&graph).expect_err("node 3 does not exist");
    assert_eq!(err.code(), MstErrorCode::InvalidNodeId);
}

#[test]
fn boundary_preserves_exact_weights() {
    let graph = scattered(30, 11);
    let direct = PrimOracle.solve(&graph).expect("connected");
    let remote = JsonBoundary::new(PrimOracle)
        .solve(&graph)
        .expect("connected");
    assert_eq!(direct, remote);
}

#[test]
fn boundary_propagates_inner_errors_unchanged() {
    let points: Vec<Point> = (0..3).map(|i| Point::new(f64::from(i), 0.0)).collect();
    let graph = Graph::from_parts(&points, Vec::new()).expect("edgeless graph must build");

    let err = JsonBoundary::new(KruskalEngine::default())
        .solve(&graph)
        .expect_err("edgeless graph is disconnected");
    assert_eq!(err.code(), MstErrorCode::DisconnectedGraph);
}

/// Engine whose result carries a weight JSON cannot represent.
struct NanWeightEngine;

impl MstEngine for NanWeightEngine {
    fn name(&self) -> &str {
        "nan"
    }

    fn solve(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        Ok(SpanningTree::from_edges(
            graph.node_count(),
            vec![Edge::new(0, 1, f64::NAN)],
        ))
    }
}

#[test]
fn boundary_failures_name_the_engine_and_stage() {
    // serde_json writes NaN as `null`, which cannot be read back as `f64`.
    let graph = Graph::complete(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)])
        .expect("finite points must build");

    let err = JsonBoundary::new(NanWeightEngine)
        .solve(&graph)
        .expect_err("NaN weights cannot cross the boundary");
    assert_eq!(err.code(), MstErrorCode::Boundary);
    let MstError::Boundary { engine, stage, .. } = &err else {
        panic!("expected a boundary failure, got {err:?}");
    };
    assert_eq!(engine, "nan+json");
    assert_eq!(*stage, BoundaryStage::Decode);
    assert!(err.to_string().starts_with("nan+json failed to decode"));
}
