//! Cross validation of two MST engines on the same graph.
//!
//! A disagreement between the engines is a diagnostic, not a failure: it is
//! logged at `warn` and recorded in the [`ComparisonReport`]. Errors raised
//! by either engine are returned unchanged.

use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use crate::engine::MstEngine;
use crate::error::MstError;
use crate::graph::Graph;
use crate::mst::SpanningTree;

/// Relative tolerance used when none is supplied.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Result of comparing a local engine against a reference engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    local_engine: String,
    reference_engine: String,
    local_tree: SpanningTree,
    reference_tree: SpanningTree,
    local_duration: Duration,
    reference_duration: Duration,
    tolerance: f64,
    matched: bool,
}

impl ComparisonReport {
    /// Returns the local engine name.
    #[must_use]
    #[rustfmt::skip]
    pub fn local_engine(&self) -> &str { &self.local_engine }

    /// Returns the reference engine name.
    #[must_use]
    #[rustfmt::skip]
    pub fn reference_engine(&self) -> &str { &self.reference_engine }

    /// Returns the tree computed by the local engine.
    #[must_use]
    #[rustfmt::skip]
    pub fn local_tree(&self) -> &SpanningTree { &self.local_tree }

    /// Returns the tree computed by the reference engine.
    #[must_use]
    #[rustfmt::skip]
    pub fn reference_tree(&self) -> &SpanningTree { &self.reference_tree }

    /// Returns the total weight of the local tree.
    #[must_use]
    pub fn local_total_weight(&self) -> f64 {
        self.local_tree.total_weight()
    }

    /// Returns the total weight of the reference tree.
    #[must_use]
    pub fn reference_total_weight(&self) -> f64 {
        self.reference_tree.total_weight()
    }

    /// Returns the number of edges in the local tree.
    #[must_use]
    pub fn local_edge_count(&self) -> usize {
        self.local_tree.len()
    }

    /// Returns the number of edges in the reference tree.
    #[must_use]
    pub fn reference_edge_count(&self) -> usize {
        self.reference_tree.len()
    }

    /// Returns the wall time the local engine took.
    #[must_use]
    #[rustfmt::skip]
    pub fn local_duration(&self) -> Duration { self.local_duration }

    /// Returns the wall time the reference engine took.
    #[must_use]
    #[rustfmt::skip]
    pub fn reference_duration(&self) -> Duration { self.reference_duration }

    /// Returns the local wall time in fractional milliseconds.
    #[must_use]
    pub fn local_duration_ms(&self) -> f64 {
        self.local_duration.as_secs_f64() * 1_000.0
    }

    /// Returns the reference wall time in fractional milliseconds.
    #[must_use]
    pub fn reference_duration_ms(&self) -> f64 {
        self.reference_duration.as_secs_f64() * 1_000.0
    }

    /// Returns the relative tolerance the weights were compared with.
    #[must_use]
    #[rustfmt::skip]
    pub fn tolerance(&self) -> f64 { self.tolerance }

    /// Returns `true` when both trees have the same edge count and their
    /// total weights agree within tolerance.
    #[must_use]
    #[rustfmt::skip]
    pub fn matched(&self) -> bool { self.matched }

    /// Consumes the report, returning the local and reference trees.
    #[must_use]
    pub fn into_trees(self) -> (SpanningTree, SpanningTree) {
        (self.local_tree, self.reference_tree)
    }
}

/// Returns `true` when `left` and `right` differ by at most
/// `tolerance * max(1, |left|, |right|)`.
#[must_use]
pub fn weights_match(left: f64, right: f64, tolerance: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= tolerance * scale
}

/// Runs `local` and `reference` on `graph` and compares their results.
///
/// # Errors
/// Returns the first [`MstError`] raised by either engine. A disagreement
/// between the engines is not an error; see [`ComparisonReport::matched`].
///
/// # Examples
/// ```
/// use spanwise_core::{
///     DEFAULT_TOLERANCE, Graph, JsonBoundary, KruskalEngine, Point, PrimOracle, cross_validate,
/// };
///
/// let graph = Graph::complete(&[
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
/// ])?;
/// let report = cross_validate(
///     &graph,
///     &KruskalEngine::default(),
///     &JsonBoundary::new(PrimOracle),
///     DEFAULT_TOLERANCE,
/// )?;
/// assert!(report.matched());
/// assert_eq!(report.reference_engine(), "prim+json");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.cross_validate",
    err,
    skip(graph, local, reference),
    fields(nodes = graph.node_count(), local = %local.name(), reference = %reference.name())
)]
pub fn cross_validate(
    graph: &Graph,
    local: &dyn MstEngine,
    reference: &dyn MstEngine,
    tolerance: f64,
) -> Result<ComparisonReport, MstError> {
    let (local_tree, local_duration) = timed(local, graph)?;
    let (reference_tree, reference_duration) = timed(reference, graph)?;

    let matched = local_tree.len() == reference_tree.len()
        && weights_match(
            local_tree.total_weight(),
            reference_tree.total_weight(),
            tolerance,
        );

    let report = ComparisonReport {
        local_engine: local.name().to_owned(),
        reference_engine: reference.name().to_owned(),
        local_tree,
        reference_tree,
        local_duration,
        reference_duration,
        tolerance,
        matched,
    };

    if matched {
        info!(
            total_weight = report.local_total_weight(),
            local_ms = report.local_duration_ms(),
            reference_ms = report.reference_duration_ms(),
            "engines agree"
        );
    } else {
        warn!(
            local_engine = %report.local_engine,
            reference_engine = %report.reference_engine,
            local_total_weight = report.local_total_weight(),
            reference_total_weight = report.reference_total_weight(),
            local_edges = report.local_edge_count(),
            reference_edges = report.reference_edge_count(),
            tolerance,
            "engines disagree on the minimum spanning tree"
        );
    }
    Ok(report)
}

fn timed(engine: &dyn MstEngine, graph: &Graph) -> Result<(SpanningTree, Duration), MstError> {
    let started = Instant::now();
    let tree = engine.solve(graph)?;
    Ok((tree, started.elapsed()))
}
