//! Dense Prim's algorithm used as the reference engine.
//!
//! Grows the tree from node 0, each round attaching the outside node with the
//! cheapest known connection. The adjacency matrix keeps the lightest edge
//! between each pair, so parallel edges and self-loops are harmless. Runs in
//! `O(n^2)` time and space regardless of the edge count.

use crate::error::MstError;
use crate::graph::{Edge, Graph};
use crate::mst::SpanningTree;

use super::MstEngine;

/// Reference MST engine based on Prim's algorithm.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimOracle;

impl MstEngine for PrimOracle {
    fn name(&self) -> &str {
        "prim"
    }

    fn solve(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        let node_count = graph.node_count();
        let required = node_count.saturating_sub(1);
        if required == 0 {
            return Ok(SpanningTree::from_edges(node_count, Vec::new()));
        }

        let matrix = AdjacencyMatrix::from_graph(graph)?;
        let mut in_tree = vec![false; node_count];
        let mut best = vec![f64::INFINITY; node_count];
        let mut link: Vec<Option<usize>> = vec![None; node_count];
        let mut edges = Vec::with_capacity(required);
        best[0] = 0.0;

        for _ in 0..node_count {
            let next = (0..node_count)
                .filter(|&node| !in_tree[node] && best[node].is_finite())
                .min_by(|&left, &right| best[left].total_cmp(&best[right]));
            let Some(node) = next else {
                return Err(MstError::DisconnectedGraph {
                    accepted: edges.len(),
                    required,
                });
            };

            in_tree[node] = true;
            if let Some(from) = link[node] {
                edges.push(Edge::new(from.min(node), from.max(node), best[node]));
            }

            for other in 0..node_count {
                if in_tree[other] {
                    continue;
                }
                let weight = matrix.weight(node, other);
                if weight < best[other] {
                    best[other] = weight;
                    link[other] = Some(node);
                }
            }
        }

        Ok(SpanningTree::from_edges(node_count, edges))
    }
}

/// Row-major matrix of the lightest edge weight between each node pair.
struct AdjacencyMatrix {
    node_count: usize,
    weights: Vec<f64>,
}

impl AdjacencyMatrix {
    fn from_graph(graph: &Graph) -> Result<Self, MstError> {
        let node_count = graph.node_count();
        let mut weights = vec![f64::INFINITY; node_count * node_count];
        for edge in graph.edges() {
            let (left, right) = (edge.source(), edge.target());
            for node in [left, right] {
                if node >= node_count {
                    return Err(MstError::InvalidNodeId { node, node_count });
                }
            }
            if !edge.weight().is_finite() {
                return Err(MstError::NonFiniteWeight { left, right });
            }
            if left == right {
                continue;
            }
            for index in [left * node_count + right, right * node_count + left] {
                weights[index] = weights[index].min(edge.weight());
            }
        }
        Ok(Self {
            node_count,
            weights,
        })
    }

    fn weight(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.node_count + to]
    }
}
