//! Property 3: Repeatability.
//!
//! Runs Kruskal on the same graph several times, with both find strategies,
//! and asserts that every run reports the same total weight and edge count.
//! Edge identity is not compared because the weight sort does not order ties.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::Graph;
use crate::mst::{FindStrategy, kruskal_with};

use super::helpers::weights_agree;
use super::types::{PointFixture, RepeatabilityConfig};

/// Runs the repeatability property for the given fixture.
pub(super) fn run_repeatability_property(fixture: &PointFixture) -> TestCaseResult {
    let config = RepeatabilityConfig::load();
    let graph = Graph::complete(&fixture.points)
        .map_err(|e| TestCaseError::fail(format!("graph construction failed: {e}")))?;

    let baseline = kruskal_with(&graph, FindStrategy::Naive).map_err(|e| {
        TestCaseError::fail(format!(
            "baseline kruskal failed: {e} (layout={:?}, nodes={})",
            fixture.layout,
            fixture.points.len(),
        ))
    })?;

    let strategies = [FindStrategy::Naive, FindStrategy::PathCompression];
    for run in 1..config.repetitions {
        let strategy = strategies[run % strategies.len()];
        let result = kruskal_with(&graph, strategy).map_err(|e| {
            TestCaseError::fail(format!("run {run}: kruskal failed: {e} ({strategy:?})"))
        })?;

        if !weights_agree(result.total_weight(), baseline.total_weight()) {
            return Err(TestCaseError::fail(format!(
                "run {run}: total weight diverged: baseline={}, run={} \
                 ({strategy:?}, layout={:?}, nodes={})",
                baseline.total_weight(),
                result.total_weight(),
                fixture.layout,
                fixture.points.len(),
            )));
        }

        if result.len() != baseline.len() {
            return Err(TestCaseError::fail(format!(
                "run {run}: edge count diverged: baseline={}, run={} ({strategy:?})",
                baseline.len(),
                result.len(),
            )));
        }
    }

    Ok(())
}
