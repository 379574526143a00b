//! Shared test utilities for `spanwise-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::error::SinkError;
use crate::graph::Point;
use crate::render::{Color, RenderSink, Stroke};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANWISE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestRunProfile::load(default_cases, false).config()
}

/// Corners of the axis-aligned square with side 10 anchored at the origin.
#[must_use]
pub(crate) fn square_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

/// [`RenderSink`] that accepts a fixed number of draw calls and then fails.
pub(crate) struct FailingSink {
    remaining: usize,
}

impl FailingSink {
    /// Creates a sink that fails on call number `allowed + 1`.
    #[must_use]
    pub(crate) fn after(allowed: usize) -> Self {
        Self { remaining: allowed }
    }

    fn spend(&mut self) -> Result<(), SinkError> {
        if self.remaining == 0 {
            return Err(SinkError::Rejected {
                reason: "surface detached".to_owned(),
            });
        }
        self.remaining -= 1;
        Ok(())
    }
}

impl RenderSink for FailingSink {
    fn draw_segment(&mut self, _from: Point, _to: Point, _stroke: &Stroke) -> Result<(), SinkError> {
        self.spend()
    }

    fn draw_point(&mut self, _at: Point, _radius: f64, _color: Color) -> Result<(), SinkError> {
        self.spend()
    }
}
