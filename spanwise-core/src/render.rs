//! Drawing primitives consumed by the traversal animator.
//!
//! A [`RenderSink`] is handed to the animator per run, so the same animation
//! can target a canvas, a log file, or an in-memory recorder.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::SinkError;
use crate::graph::Point;

/// An opaque RGB colour.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Stroke colour used for tree edges.
    pub const TREE: Self = Self::rgb(0xc6, 0xf6, 0x8d);
    /// Fill colour used for sampled points.
    pub const POINT: Self = Self::rgb(0xd4, 0xbf, 0xf9);
    /// Stroke colour used for the reference overlay.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Creates a colour from its channels.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Color;
    ///
    /// assert_eq!(Color::rgb(198, 246, 141).to_string(), "#c6f68d");
    /// ```
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the `(red, green, blue)` channels.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Line width and colour applied to every segment of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    /// Line width in surface units.
    pub width: f64,
    /// Line colour.
    pub color: Color,
}

impl Stroke {
    /// Creates a stroke.
    #[must_use]
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(5.0, Color::TREE)
    }
}

/// Radius and fill colour for painted points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    /// Disc radius in surface units.
    pub radius: f64,
    /// Fill colour.
    pub color: Color,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            radius: 3.0,
            color: Color::POINT,
        }
    }
}

/// Destination for draw calls.
///
/// Implementations must apply calls in the order they are issued.
pub trait RenderSink {
    /// Draws a straight segment from `from` to `to`.
    ///
    /// # Errors
    /// Returns [`SinkError`] when the segment cannot be drawn.
    fn draw_segment(&mut self, from: Point, to: Point, stroke: &Stroke) -> Result<(), SinkError>;

    /// Draws a filled disc centred on `at`.
    ///
    /// # Errors
    /// Returns [`SinkError`] when the disc cannot be drawn.
    fn draw_point(&mut self, at: Point, radius: f64, color: Color) -> Result<(), SinkError>;
}

/// A single call received by a sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCall {
    /// A [`RenderSink::draw_segment`] call.
    Segment {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke used.
        stroke: Stroke,
    },
    /// A [`RenderSink::draw_point`] call.
    Point {
        /// Disc centre.
        at: Point,
        /// Disc radius.
        radius: f64,
        /// Fill colour.
        color: Color,
    },
}

/// Sink that keeps every call in memory in issue order.
///
/// # Examples
/// ```
/// use spanwise_core::{DrawCall, Point, RecordingSink, RenderSink, Stroke};
///
/// let mut sink = RecordingSink::default();
/// sink.draw_segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0), &Stroke::default())?;
/// assert!(matches!(sink.calls()[0], DrawCall::Segment { .. }));
/// # Ok::<(), spanwise_core::SinkError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    calls: Vec<DrawCall>,
}

impl RecordingSink {
    /// Returns the recorded calls.
    #[must_use]
    #[rustfmt::skip]
    pub fn calls(&self) -> &[DrawCall] { &self.calls }

    /// Returns only the segment calls as `(from, to)` pairs.
    #[must_use]
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Segment { from, to, .. } => Some((*from, *to)),
                DrawCall::Point { .. } => None,
            })
            .collect()
    }

    /// Consumes the sink, returning the recorded calls.
    #[must_use]
    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }
}

impl RenderSink for RecordingSink {
    fn draw_segment(&mut self, from: Point, to: Point, stroke: &Stroke) -> Result<(), SinkError> {
        self.calls.push(DrawCall::Segment {
            from,
            to,
            stroke: *stroke,
        });
        Ok(())
    }

    fn draw_point(&mut self, at: Point, radius: f64, color: Color) -> Result<(), SinkError> {
        self.calls.push(DrawCall::Point { at, radius, color });
        Ok(())
    }
}
