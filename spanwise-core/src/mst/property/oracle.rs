//! Exhaustive spanning-tree oracle for MST property verification.
//!
//! Enumerates every `(n - 1)`-edge subset of the input graph and keeps the
//! lightest subset that spans all nodes. The search is combinatorial, so
//! callers keep `n` at or below [`MAX_ORACLE_NODES`].

use crate::graph::{Edge, Graph};

use super::helpers::components_if_acyclic;

/// Largest node count the exhaustive oracle is asked to handle.
pub(super) const MAX_ORACLE_NODES: usize = 7;

/// Result of the exhaustive oracle.
#[derive(Clone, Debug)]
pub(super) struct ExhaustiveMstResult {
    /// Minimum total weight over all spanning trees, or `None` when the graph
    /// has no spanning tree.
    pub total_weight: Option<f64>,
    /// Number of distinct spanning trees found.
    pub spanning_trees: usize,
}

/// Enumerates every spanning tree of `graph` and returns the lightest weight.
pub(super) fn exhaustive_minimum(graph: &Graph) -> ExhaustiveMstResult {
    let required = graph.node_count().saturating_sub(1);
    let mut search = Search {
        edges: graph.edges(),
        node_count: graph.node_count(),
        required,
        chosen: Vec::with_capacity(required),
        best: None,
        spanning_trees: 0,
    };
    search.visit(0);
    ExhaustiveMstResult {
        total_weight: search.best,
        spanning_trees: search.spanning_trees,
    }
}

struct Search<'a> {
    edges: &'a [Edge],
    node_count: usize,
    required: usize,
    chosen: Vec<Edge>,
    best: Option<f64>,
    spanning_trees: usize,
}

impl Search<'_> {
    fn visit(&mut self, start: usize) {
        if self.chosen.len() == self.required {
            self.record();
            return;
        }

        let remaining = self.required - self.chosen.len();
        for index in start..self.edges.len() {
            if self.edges.len() - index < remaining {
                break;
            }
            self.chosen.push(self.edges[index]);
            // Prune as soon as the partial selection closes a cycle.
            if components_if_acyclic(self.node_count, &self.chosen).is_some() {
                self.visit(index + 1);
            }
            self.chosen.pop();
        }
    }

    fn record(&mut self) {
        let spanning = usize::from(self.node_count > 0);
        if components_if_acyclic(self.node_count, &self.chosen) != Some(spanning) {
            return;
        }
        self.spanning_trees += 1;
        let weight: f64 = self.chosen.iter().map(Edge::weight).sum();
        self.best = Some(self.best.map_or(weight, |best| best.min(weight)));
    }
}
