//! Property 1: Minimality against independent solvers.
//!
//! For any generated point set small enough to enumerate, verifies that the
//! Kruskal tree weighs exactly as much as the lightest spanning tree found by
//! brute force. Larger sets are checked against the Prim engine instead.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::engine::{KruskalEngine, PrimOracle};
use crate::graph::Graph;
use crate::mst::{FindStrategy, kruskal_with};
use crate::validate::{DEFAULT_TOLERANCE, cross_validate};

use super::helpers::weights_agree;
use super::oracle::{MAX_ORACLE_NODES, exhaustive_minimum};
use super::types::PointFixture;

/// Runs the oracle minimality property for the given fixture.
pub(super) fn run_oracle_minimality_property(
    fixture: &PointFixture,
    strategy: FindStrategy,
) -> TestCaseResult {
    if fixture.points.len() > MAX_ORACLE_NODES {
        return Err(TestCaseError::reject(format!(
            "{} points exceed the exhaustive oracle limit",
            fixture.points.len()
        )));
    }

    let graph = Graph::complete(&fixture.points)
        .map_err(|e| TestCaseError::fail(format!("graph construction failed: {e}")))?;
    let tree = kruskal_with(&graph, strategy).map_err(|e| {
        TestCaseError::fail(format!(
            "kruskal failed: {e} (layout={:?}, nodes={})",
            fixture.layout,
            fixture.points.len(),
        ))
    })?;

    let oracle = exhaustive_minimum(&graph);
    let Some(expected) = oracle.total_weight else {
        return Err(TestCaseError::fail(format!(
            "oracle found no spanning tree for a complete graph on {} nodes",
            fixture.points.len(),
        )));
    };

    if !weights_agree(tree.total_weight(), expected) {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, oracle={expected} \
             (layout={:?}, nodes={}, trees enumerated={})",
            tree.total_weight(),
            fixture.layout,
            fixture.points.len(),
            oracle.spanning_trees,
        )));
    }

    Ok(())
}

/// Runs the reference agreement property: Kruskal and the Prim engine must
/// produce trees of equal size whose weights agree within the default
/// validation tolerance.
pub(super) fn run_reference_agreement_property(
    fixture: &PointFixture,
    strategy: FindStrategy,
) -> TestCaseResult {
    let graph = Graph::complete(&fixture.points)
        .map_err(|e| TestCaseError::fail(format!("graph construction failed: {e}")))?;
    let report = cross_validate(
        &graph,
        &KruskalEngine::new(strategy),
        &PrimOracle,
        DEFAULT_TOLERANCE,
    )
    .map_err(|e| TestCaseError::fail(format!("engine failed: {e}")))?;

    if !report.matched() {
        return Err(TestCaseError::fail(format!(
            "engines disagree: kruskal={} ({} edges), prim={} ({} edges) (layout={:?})",
            report.local_total_weight(),
            report.local_edge_count(),
            report.reference_total_weight(),
            report.reference_edge_count(),
            fixture.layout,
        )));
    }
    Ok(())
}
