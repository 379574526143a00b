//! Random point placement on a padded drawing surface.
//!
//! Coordinates are whole numbers drawn uniformly from `[0, width)` and
//! `[0, height)`. A coordinate that lands inside the padding band is shifted
//! inwards by the padding, so points cluster slightly near the edges of the
//! usable area instead of being redrawn.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::error::SamplingError;
use crate::graph::Point;

/// Samples points on a `width` by `height` surface.
///
/// # Examples
/// ```
/// use spanwise_core::PointSampler;
///
/// let sampler = PointSampler::new(1280.0, 720.0, 50.0)?;
/// let points = sampler.sample(100, 7);
/// assert_eq!(points.len(), 100);
/// assert_eq!(points, sampler.sample(100, 7));
/// # Ok::<(), spanwise_core::SamplingError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSampler {
    width: f64,
    height: f64,
    padding: f64,
}

impl PointSampler {
    /// Padding applied when none is configured.
    pub const DEFAULT_PADDING: f64 = 50.0;

    /// Creates a sampler for the given surface.
    ///
    /// # Errors
    /// Returns [`SamplingError::InvalidSurface`] when either extent is not a
    /// positive finite number and [`SamplingError::InvalidPadding`] when the
    /// padding is negative, non-finite, or at least half of either extent.
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self, SamplingError> {
        let positive = |extent: f64| extent.is_finite() && extent > 0.0;
        if !(positive(width) && positive(height)) {
            return Err(SamplingError::InvalidSurface { width, height });
        }
        if !(padding.is_finite() && padding >= 0.0)
            || 2.0 * padding >= width
            || 2.0 * padding >= height
        {
            return Err(SamplingError::InvalidPadding {
                padding,
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    /// Returns the surface width.
    #[must_use]
    #[rustfmt::skip]
    pub fn width(&self) -> f64 { self.width }

    /// Returns the surface height.
    #[must_use]
    #[rustfmt::skip]
    pub fn height(&self) -> f64 { self.height }

    /// Returns the padding.
    #[must_use]
    #[rustfmt::skip]
    pub fn padding(&self) -> f64 { self.padding }

    /// Samples `count` points deterministically from `seed`.
    #[must_use]
    pub fn sample(&self, count: usize, seed: u64) -> Vec<Point> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.sample_with(count, &mut rng)
    }

    /// Samples `count` points from `rng`.
    #[must_use]
    pub fn sample_with<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Point> {
        let points: Vec<Point> = (0..count)
            .map(|_| {
                let x = self.place(rng.gen_range(0.0..1.0_f64) * self.width, self.width);
                let y = self.place(rng.gen_range(0.0..1.0_f64) * self.height, self.height);
                Point::new(x, y)
            })
            .collect();
        debug!(count, width = self.width, height = self.height, "points sampled");
        points
    }

    fn place(&self, raw: f64, extent: f64) -> f64 {
        let mut coordinate = raw.floor();
        if coordinate < self.padding {
            coordinate += self.padding;
        }
        if coordinate > extent - self.padding {
            coordinate -= self.padding;
        }
        coordinate
    }
}
