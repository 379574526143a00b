//! JSON call boundary around an [`MstEngine`].
//!
//! The graph is encoded to JSON text and decoded back before the inner engine
//! sees it, and the resulting tree makes the same trip on the way out. This
//! models an engine that lives behind a process or runtime boundary and lets
//! the cross validator measure what marshalling costs.

use std::time::{Duration, Instant};

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::{BoundaryStage, MstError};
use crate::graph::Graph;
use crate::mst::SpanningTree;

use super::MstEngine;

/// Wraps an engine so that its input and output cross a JSON boundary.
///
/// # Examples
/// ```
/// use spanwise_core::{Graph, JsonBoundary, MstEngine, Point, PrimOracle};
///
/// let engine = JsonBoundary::new(PrimOracle);
/// assert_eq!(engine.name(), "prim+json");
///
/// let graph = Graph::complete(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)])?;
/// assert_eq!(engine.solve(&graph)?.total_weight(), 5.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct JsonBoundary<E> {
    inner: E,
    name: String,
}

impl<E: MstEngine> JsonBoundary<E> {
    /// Places `inner` behind a JSON boundary.
    #[must_use]
    pub fn new(inner: E) -> Self {
        let name = format!("{}+json", inner.name());
        Self { inner, name }
    }

    /// Returns the wrapped engine.
    #[must_use]
    #[rustfmt::skip]
    pub fn inner(&self) -> &E { &self.inner }

    fn round_trip<T>(&self, value: &T, marshal: &mut Duration) -> Result<T, MstError>
    where
        T: Serialize + DeserializeOwned,
    {
        let started = Instant::now();
        let wire = serde_json::to_string(value).map_err(|err| MstError::Boundary {
            engine: self.name.clone(),
            stage: BoundaryStage::Encode,
            message: err.to_string(),
        })?;
        let decoded = serde_json::from_str(&wire).map_err(|err| MstError::Boundary {
            engine: self.name.clone(),
            stage: BoundaryStage::Decode,
            message: err.to_string(),
        })?;
        *marshal += started.elapsed();
        Ok(decoded)
    }
}

impl<E: MstEngine> MstEngine for JsonBoundary<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&self, graph: &Graph) -> Result<SpanningTree, MstError> {
        let mut marshal = Duration::ZERO;
        let remote_graph = self.round_trip(graph, &mut marshal)?;
        let remote_tree = self.inner.solve(&remote_graph)?;
        let tree = self.round_trip(&remote_tree, &mut marshal)?;
        debug!(
            engine = %self.name,
            marshal_us = marshal.as_micros(),
            "boundary round trip complete"
        );
        Ok(tree)
    }
}
