//! Minimum spanning tree construction with Kruskal's algorithm.
//!
//! Edges are sorted by ascending weight and scanned once. An edge joins the
//! tree when its endpoints sit in different union-find sets; the scan stops
//! as soon as the tree holds `n - 1` edges. Equal weights are sorted in no
//! particular order, so callers should compare trees by total weight rather
//! than by edge identity.

mod union_find;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::MstError;
use crate::graph::{Edge, Graph};

pub use self::union_find::DisjointSet;

/// Selects how [`DisjointSet::find`] treats the chain it walks.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FindStrategy {
    /// Walk to the root without rewriting parent links.
    #[default]
    Naive,
    /// Point every node on the walked chain directly at the root.
    PathCompression,
}

/// A spanning tree expressed as edges copied from the source graph.
///
/// Edges appear in the order the solver accepted them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    node_count: usize,
    edges: Vec<Edge>,
}

impl SpanningTree {
    pub(crate) fn from_edges(node_count: usize, edges: Vec<Edge>) -> Self {
        Self { node_count, edges }
    }

    /// Returns the tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of nodes the tree spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the tree has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Sums the edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

/// Computes a minimum spanning tree with the default [`FindStrategy`].
///
/// # Errors
/// See [`kruskal_with`].
///
/// # Examples
/// ```
/// use spanwise_core::{Graph, Point, kruskal};
///
/// let graph = Graph::complete(&[
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 0.0),
///     Point::new(10.0, 0.0),
/// ])?;
/// let tree = kruskal(&graph)?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 10.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn kruskal(graph: &Graph) -> Result<SpanningTree, MstError> {
    kruskal_with(graph, FindStrategy::default())
}

/// Computes a minimum spanning tree using `strategy` for union-find lookups.
///
/// Graphs with zero or one node yield an empty tree.
///
/// # Errors
/// Returns an error when:
/// - an edge weight is non-finite
/// - an edge references a node id `>= node_count`
/// - the edges run out before `n - 1` of them connect the graph
#[instrument(
    name = "core.kruskal",
    level = "debug",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edges().len())
)]
pub fn kruskal_with(graph: &Graph, strategy: FindStrategy) -> Result<SpanningTree, MstError> {
    let node_count = graph.node_count();
    let required = node_count.saturating_sub(1);
    if required == 0 {
        return Ok(SpanningTree::from_edges(node_count, Vec::new()));
    }

    let sorted = sorted_edges(graph.edges())?;
    let mut sets = DisjointSet::with_strategy(node_count, strategy);
    let mut accepted = Vec::with_capacity(required);
    let mut scanned = 0_usize;

    for edge in sorted {
        scanned += 1;
        let source_root = sets.find(edge.source())?;
        let target_root = sets.find(edge.target())?;
        if source_root == target_root {
            continue;
        }
        sets.union(source_root, target_root)?;
        accepted.push(*edge);
        if accepted.len() == required {
            break;
        }
    }

    if accepted.len() < required {
        return Err(MstError::DisconnectedGraph {
            accepted: accepted.len(),
            required,
        });
    }

    let tree = SpanningTree::from_edges(node_count, accepted);
    debug!(
        scanned,
        total_weight = tree.total_weight(),
        "spanning tree complete"
    );
    Ok(tree)
}

fn sorted_edges(edges: &[Edge]) -> Result<Vec<&Edge>, MstError> {
    if let Some(edge) = edges.iter().find(|edge| !edge.weight().is_finite()) {
        return Err(MstError::NonFiniteWeight {
            left: edge.source(),
            right: edge.target(),
        });
    }

    let mut sorted: Vec<&Edge> = edges.iter().collect();
    sort_by_weight(&mut sorted);
    Ok(sorted)
}

#[cfg(feature = "parallel")]
fn sort_by_weight(edges: &mut [&Edge]) {
    edges.par_sort_unstable_by(|left, right| left.weight().total_cmp(&right.weight()));
}

#[cfg(not(feature = "parallel"))]
fn sort_by_weight(edges: &mut [&Edge]) {
    edges.sort_unstable_by(|left, right| left.weight().total_cmp(&right.weight()));
}

#[cfg(test)]
mod property;
