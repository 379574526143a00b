//! Property 2: Structural invariant verification.
//!
//! For any tree produced by Kruskal over a complete graph, verifies:
//!
//! - **Edge count**: `n - 1` edges for `n >= 1`, none for `n == 0`.
//! - **Acyclicity**: no edge closes a cycle.
//! - **Connectivity**: the edges join every node into one component.
//! - **Provenance**: every tree edge is an edge of the input graph.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::Graph;
use crate::mst::{FindStrategy, kruskal_with};

use super::helpers::components_if_acyclic;
use super::types::PointFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(
    fixture: &PointFixture,
    strategy: FindStrategy,
) -> TestCaseResult {
    let node_count = fixture.points.len();
    let graph = Graph::complete(&fixture.points)
        .map_err(|e| TestCaseError::fail(format!("graph construction failed: {e}")))?;
    let tree = kruskal_with(&graph, strategy).map_err(|e| {
        TestCaseError::fail(format!(
            "kruskal failed: {e} (layout={:?}, nodes={node_count})",
            fixture.layout,
        ))
    })?;

    let expected_edges = node_count.saturating_sub(1);
    if tree.len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected {expected_edges} (layout={:?})",
            tree.len(),
            fixture.layout,
        )));
    }

    match components_if_acyclic(node_count, tree.edges()) {
        None => {
            return Err(TestCaseError::fail(format!(
                "tree contains a cycle (layout={:?}, nodes={node_count})",
                fixture.layout,
            )));
        }
        Some(components) if node_count > 0 && components != 1 => {
            return Err(TestCaseError::fail(format!(
                "tree leaves {components} components (layout={:?}, nodes={node_count})",
                fixture.layout,
            )));
        }
        Some(_) => {}
    }

    for (i, edge) in tree.edges().iter().enumerate() {
        if !graph.edges().contains(edge) {
            return Err(TestCaseError::fail(format!(
                "tree edge {i} ({}, {}, {}) is not an input edge",
                edge.source(),
                edge.target(),
                edge.weight(),
            )));
        }
    }

    Ok(())
}
