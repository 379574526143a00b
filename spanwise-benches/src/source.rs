//! Seeded point sets for benchmarks.

use spanwise_core::{Graph, PointSampler};

use crate::error::BenchSetupError;

/// Surface width used for every benchmark point set.
pub const SURFACE_WIDTH: f64 = 1280.0;

/// Surface height used for every benchmark point set.
pub const SURFACE_HEIGHT: f64 = 720.0;

/// Builds the complete graph over `point_count` points sampled from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError`] if the surface or the graph is rejected.
pub fn scatter(point_count: usize, seed: u64) -> Result<Graph, BenchSetupError> {
    let sampler = PointSampler::new(
        SURFACE_WIDTH,
        SURFACE_HEIGHT,
        PointSampler::DEFAULT_PADDING,
    )?;
    Ok(Graph::complete(&sampler.sample(point_count, seed))?)
}
