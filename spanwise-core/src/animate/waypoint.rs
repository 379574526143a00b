//! Intermediate points along an animated segment.

use crate::graph::Point;

/// Spacing between waypoints used when none is configured.
pub const DEFAULT_WAYPOINT_SPACING: f64 = 10.0;

/// Largest number of interpolated waypoints a single segment may need.
///
/// Segments longer than `MAX_SEGMENT_STEPS * spacing` cannot be animated.
pub const MAX_SEGMENT_STEPS: usize = 1 << 20;

/// Waypoints of one segment, evaluated on demand.
///
/// Point `i` is the interpolation at `t = i / divisions` for `i < steps` and
/// `to` for `i == steps`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Segment {
    from: Point,
    to: Point,
    divisions: f64,
    steps: usize,
}

impl Segment {
    /// Plans the segment from `from` to `to`, or returns `None` when it needs
    /// more than [`MAX_SEGMENT_STEPS`] waypoints.
    ///
    /// Zero-length segments, non-finite distances and invalid spacings
    /// degrade to the two-point path `[from, to]`.
    pub(super) fn plan(from: Point, to: Point, spacing: f64) -> Option<Self> {
        let divisions = from.distance(to) / spacing;
        let degenerate = !(spacing.is_finite() && spacing > 0.0)
            || divisions.is_nan()
            || divisions <= 0.0;
        if degenerate {
            return Some(Self {
                from,
                to,
                divisions: 1.0,
                steps: 1,
            });
        }
        if divisions > MAX_SEGMENT_STEPS as f64 {
            return None;
        }
        Some(Self {
            from,
            to,
            divisions,
            steps: divisions.ceil() as usize,
        })
    }

    /// The same waypoints walked from `to` back to `from`.
    pub(super) const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..self
        }
    }

    pub(super) const fn origin(&self) -> Point {
        self.from
    }

    /// Number of points on the path, both endpoints included.
    pub(super) const fn len(&self) -> usize {
        self.steps + 1
    }

    pub(super) fn point(&self, index: usize) -> Point {
        if index < self.steps {
            self.from.lerp(self.to, index as f64 / self.divisions)
        } else {
            self.to
        }
    }
}

/// Returns the points an animated segment from `from` to `to` passes through.
///
/// With `divisions = distance / spacing`, the result holds the interpolated
/// points at `t = i / divisions` for `i` in `0..ceil(divisions)`, followed by
/// `to`. The first point is always `from` and the last is always `to`.
///
/// A zero-length segment, a non-finite distance, or a spacing that is not a
/// positive finite number yields `[from, to]`. Returns `None` when the
/// segment would need more than [`MAX_SEGMENT_STEPS`] waypoints.
///
/// # Examples
/// ```
/// use spanwise_core::{Point, waypoints};
///
/// let path = waypoints(Point::new(0.0, 0.0), Point::new(25.0, 0.0), 10.0);
/// let xs: Option<Vec<f64>> = path.map(|path| path.iter().map(|point| point.x).collect());
/// assert_eq!(xs, Some(vec![0.0, 10.0, 20.0, 25.0]));
///
/// assert!(waypoints(Point::new(0.0, 0.0), Point::new(1e25, 0.0), 10.0).is_none());
/// ```
#[must_use]
pub fn waypoints(from: Point, to: Point, spacing: f64) -> Option<Vec<Point>> {
    let segment = Segment::plan(from, to, spacing)?;
    Some((0..segment.len()).map(|index| segment.point(index)).collect())
}
