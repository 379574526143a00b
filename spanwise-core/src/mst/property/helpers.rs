//! Shared helper functions for MST property-based tests.

use crate::graph::Edge;
use crate::validate::weights_match;

/// Relative tolerance for comparing totals summed in different orders.
const SUMMATION_TOLERANCE: f64 = 1e-9;

/// Root lookup with path halving, kept independent of [`crate::DisjointSet`].
fn root_of(links: &mut [usize], mut node: usize) -> usize {
    while links[node] != node {
        links[node] = links[links[node]];
        node = links[node];
    }
    node
}

/// Counts the components left after joining `edges`, or `None` when an edge
/// closes a cycle.
pub(super) fn components_if_acyclic(node_count: usize, edges: &[Edge]) -> Option<usize> {
    let mut links: Vec<usize> = (0..node_count).collect();
    edges.iter().try_fold(node_count, |components, edge| {
        let source = root_of(&mut links, edge.source());
        let target = root_of(&mut links, edge.target());
        (source != target).then(|| {
            links[target] = source;
            components - 1
        })
    })
}

/// Returns `true` when two totals agree up to summation order.
pub(super) fn weights_agree(left: f64, right: f64) -> bool {
    weights_match(left, right, SUMMATION_TOLERANCE)
}
