//! Interchangeable MST engines.
//!
//! [`MstEngine`] is the seam the cross validator compares across. The local
//! engine wraps [`crate::kruskal_with`]; the reference engine is a dense
//! Prim's implementation that shares no code with Kruskal, and
//! [`JsonBoundary`] lets either one sit behind a serialising call boundary.

mod boundary;
mod prim;

use crate::error::MstError;
use crate::graph::Graph;
use crate::mst::{FindStrategy, SpanningTree, kruskal_with};

pub use self::{boundary::JsonBoundary, prim::PrimOracle};

/// Computes a minimum spanning tree for a graph.
///
/// Implementations must not mutate the graph and must return some valid
/// minimum spanning tree. Trees from different engines may differ where edge
/// weights tie, but their total weights agree.
pub trait MstEngine {
    /// Returns a short engine name for logs and reports.
    fn name(&self) -> &str;

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError`] when the graph is malformed or disconnected, or
    /// when the engine cannot be reached.
    fn solve(&self, graph: &Graph) -> Result<SpanningTree, MstError>;
}

/// The local Kruskal engine.
///
/// # Examples
/// ```
/// use spanwise_core::{FindStrategy, Graph, KruskalEngine, MstEngine, Point};
///
/// let engine = KruskalEngine::new(FindStrategy::PathCompression);
/// let graph = Graph::complete(&[Point::new(0.0, 0.0), Point::new(0.0, 2.0)])?;
/// assert_eq!(engine.solve(&graph)?.total_weight(), 2.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KruskalEngine {
    strategy: FindStrategy,
}

impl KruskalEngine {
    /// Creates an engine that uses `strategy` for union-find lookups.
    #[must_use]
    pub const fn new(strategy: FindStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured find strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> FindStrategy { self.strategy }
}

impl MstEngine for KruskalEngine {
    fn name(&self) -> &str {
        "kruskal"
    }

    fn solve(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        kruskal_with(graph, self.strategy)
    }
}

#[cfg(test)]
mod tests;
