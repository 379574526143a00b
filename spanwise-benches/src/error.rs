//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use spanwise_core::{AnimationError, GraphError, MstError, SamplingError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The sampling surface was rejected.
    #[error("point sampling failed: {0}")]
    Sampling(#[from] SamplingError),
    /// Graph construction failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Animator setup failed.
    #[error("animation setup failed: {0}")]
    Animation(#[from] AnimationError),
}
