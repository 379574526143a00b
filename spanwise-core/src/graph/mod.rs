//! Points, nodes and the complete Euclidean graph built from them.
//!
//! [`Graph::complete`] connects every unordered pair of input points once,
//! storing the pair as `(i, j)` with `i < j` in row-major order. The weight of
//! each edge is the Euclidean distance between its endpoints and never changes
//! after construction.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::GraphError;

/// Identifier of a node: its position in the input point sequence.
pub type NodeId = usize;

/// A position on the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Point;
    ///
    /// let point = Point::new(3.0, 4.0);
    /// assert_eq!(point.distance(Point::new(0.0, 0.0)), 5.0);
    /// ```
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the point a fraction `t` of the way from `self` to `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A graph vertex anchored at a point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    position: Point,
}

impl Node {
    /// Returns the node id.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> NodeId { self.id }

    /// Returns the node position.
    #[must_use]
    #[rustfmt::skip]
    pub fn position(&self) -> Point { self.position }
}

/// An undirected weighted edge.
///
/// `source` and `target` only record storage order; the edge has no
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: f64,
}

impl Edge {
    /// Creates an edge between two node ids.
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint stored first.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> NodeId { self.source }

    /// Returns the endpoint stored second.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> NodeId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}

/// Nodes and the weighted edges between them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds the complete Euclidean graph over `points`.
    ///
    /// Node `i` sits at `points[i]`. Every pair `i < j` yields exactly one
    /// edge, so `n` points produce `n * (n - 1) / 2` edges.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteCoordinate`] when a point has a NaN or
    /// infinite coordinate.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{Graph, Point};
    ///
    /// let graph = Graph::complete(&[
    ///     Point::new(0.0, 0.0),
    ///     Point::new(3.0, 4.0),
    ///     Point::new(6.0, 8.0),
    /// ])?;
    /// assert_eq!(graph.edges().len(), 3);
    /// assert_eq!(graph.edges()[0].weight(), 5.0);
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    #[instrument(
        name = "core.complete_graph",
        level = "debug",
        err,
        skip(points),
        fields(points = points.len())
    )]
    pub fn complete(points: &[Point]) -> Result<Self, GraphError> {
        let nodes = nodes_from_points(points)?;
        let edges = complete_edges(points);
        debug_assert_eq!(edges.len(), complete_edge_count(points.len()));
        debug!(edges = edges.len(), "built complete graph");
        Ok(Self { nodes, edges })
    }

    /// Builds a graph from explicit points and edges.
    ///
    /// Unlike [`Graph::complete`] the edge set may be sparse or disconnected.
    ///
    /// # Errors
    /// Returns [`GraphError`] when a point is non-finite, an edge references a
    /// node outside the point range, or an edge weight is non-finite.
    pub fn from_parts(points: &[Point], edges: Vec<Edge>) -> Result<Self, GraphError> {
        let nodes = nodes_from_points(points)?;
        let node_count = nodes.len();
        for edge in &edges {
            for node in [edge.source, edge.target] {
                if node >= node_count {
                    return Err(GraphError::InvalidNodeId { node, node_count });
                }
            }
            if !edge.weight.is_finite() {
                return Err(GraphError::NonFiniteWeight {
                    left: edge.source,
                    right: edge.target,
                });
            }
        }
        Ok(Self { nodes, edges })
    }

    /// Returns the nodes in id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the edges in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Returns the position of `node`, if present.
    #[must_use]
    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.nodes.get(node).map(Node::position)
    }
}

/// Returns the number of edges in a complete graph on `node_count` nodes.
#[must_use]
pub const fn complete_edge_count(node_count: usize) -> usize {
    node_count * node_count.saturating_sub(1) / 2
}

fn nodes_from_points(points: &[Point]) -> Result<Vec<Node>, GraphError> {
    points
        .iter()
        .enumerate()
        .map(|(id, &position)| {
            if position.is_finite() {
                Ok(Node { id, position })
            } else {
                Err(GraphError::NonFiniteCoordinate {
                    index: id,
                    x: position.x,
                    y: position.y,
                })
            }
        })
        .collect()
}

fn row_edges(points: &[Point], source: usize) -> impl Iterator<Item = Edge> + '_ {
    let origin = points[source];
    points
        .iter()
        .enumerate()
        .skip(source + 1)
        .map(move |(target, &other)| Edge::new(source, target, origin.distance(other)))
}

#[cfg(feature = "parallel")]
fn complete_edges(points: &[Point]) -> Vec<Edge> {
    (0..points.len())
        .into_par_iter()
        .flat_map_iter(|source| row_edges(points, source))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn complete_edges(points: &[Point]) -> Vec<Edge> {
    (0..points.len())
        .flat_map(|source| row_edges(points, source))
        .collect()
}
