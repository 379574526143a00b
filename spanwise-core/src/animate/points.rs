//! Batched painting of the sampled points.

use tracing::debug;

use crate::error::AnimationError;
use crate::graph::Point;
use crate::render::{PointStyle, RenderSink};

use super::FrameClock;

/// Number of frames a full point pass is spread across.
const POINT_BATCHES: usize = 20;

/// Paints every point as a disc, yielding a frame before each batch.
///
/// Batches hold `max(1, n / 20)` points, so large inputs appear in roughly
/// twenty steps. Returns the number of frames the clock advanced.
///
/// # Errors
/// Returns [`AnimationError::PointSink`] when the sink rejects a point; no
/// further points are drawn.
pub fn paint_points(
    points: &[Point],
    sink: &mut dyn RenderSink,
    clock: &mut dyn FrameClock,
    style: PointStyle,
) -> Result<u64, AnimationError> {
    let batch = (points.len() / POINT_BATCHES).max(1);
    let mut frames = 0_u64;
    for (index, &point) in points.iter().enumerate() {
        if index % batch == 0 {
            clock.next_frame();
            frames += 1;
        }
        sink.draw_point(point, style.radius, style.color)
            .map_err(|source| AnimationError::PointSink { index, source })?;
    }
    debug!(points = points.len(), batch, frames, "points painted");
    Ok(frames)
}
