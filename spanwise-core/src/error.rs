//! Error types for the spanwise core library.
//!
//! Every error enum carries a stable machine-readable code so callers can log
//! or match on failures without parsing display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised while building a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A point had a NaN or infinite coordinate.
    #[error("point {index} has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input sequence.
        index: usize,
        /// Horizontal coordinate as supplied.
        x: f64,
        /// Vertical coordinate as supplied.
        y: f64,
    },
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge contained a non-finite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The first endpoint id (as provided).
        left: usize,
        /// The second endpoint id (as provided).
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A point had a NaN or infinite coordinate.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "GRAPH_NON_FINITE_COORDINATE",
        /// An edge referenced a node id that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
        /// An edge contained a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// Direction of travel across an engine boundary.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoundaryStage {
    /// Encoding the graph or tree into the wire representation.
    Encode,
    /// Decoding the graph or tree out of the wire representation.
    Decode,
}

impl fmt::Display for BoundaryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        })
    }
}

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// A union-find operation or edge referenced a node outside `[0, n)`.
    #[error("node {node} is out of range for {node_count} nodes")]
    InvalidNodeId {
        /// The invalid node id.
        node: usize,
        /// The number of nodes tracked by the structure.
        node_count: usize,
    },
    /// An edge contained a non-finite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The first endpoint id.
        left: usize,
        /// The second endpoint id.
        right: usize,
    },
    /// The sorted edges ran out before the tree spanned every node.
    #[error("graph is disconnected: accepted {accepted} of {required} tree edges")]
    DisconnectedGraph {
        /// Number of edges accepted before the input was exhausted.
        accepted: usize,
        /// Number of edges a spanning tree needs (`n - 1`).
        required: usize,
    },
    /// Marshalling across an engine boundary failed.
    #[error("{engine} failed to {stage} across its boundary: {message}")]
    Boundary {
        /// Name of the engine whose boundary failed.
        engine: String,
        /// Whether encoding or decoding failed.
        stage: BoundaryStage,
        /// Message reported by the codec.
        message: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A node id was out of range.
        InvalidNodeId => InvalidNodeId { .. } => "MST_INVALID_NODE_ID",
        /// An edge contained a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "MST_NON_FINITE_WEIGHT",
        /// The graph did not connect every node.
        DisconnectedGraph => DisconnectedGraph { .. } => "MST_DISCONNECTED_GRAPH",
        /// An engine boundary failed to marshal data.
        Boundary => Boundary { .. } => "MST_BOUNDARY_FAILURE",
    }
}

/// Errors raised while configuring a [`crate::PointSampler`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SamplingError {
    /// The drawing surface has a non-positive or non-finite extent.
    #[error("surface must have positive finite extent (got {width}x{height})")]
    InvalidSurface {
        /// Requested surface width.
        width: f64,
        /// Requested surface height.
        height: f64,
    },
    /// The padding is negative, non-finite, or leaves no room on the surface.
    #[error("padding {padding} does not fit a {width}x{height} surface")]
    InvalidPadding {
        /// Requested padding.
        padding: f64,
        /// Requested surface width.
        width: f64,
        /// Requested surface height.
        height: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`SamplingError`] variants.
    enum SamplingErrorCode for SamplingError {
        /// The drawing surface is invalid.
        InvalidSurface => InvalidSurface { .. } => "SAMPLING_INVALID_SURFACE",
        /// The padding is invalid.
        InvalidPadding => InvalidPadding { .. } => "SAMPLING_INVALID_PADDING",
    }
}

/// Failure reported by a [`crate::RenderSink`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing to the underlying device failed.
    #[error("render sink I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The sink refused the draw call.
    #[error("render sink rejected the draw call: {reason}")]
    Rejected {
        /// Explanation supplied by the sink.
        reason: String,
    },
}

/// Errors returned by the traversal animator and the point painter.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AnimationError {
    /// A tree edge referenced a node the graph does not contain.
    #[error("tree edge {edge} references node {node}, but the graph has {node_count} nodes")]
    InvalidNodeId {
        /// Position of the edge in the spanning tree.
        edge: usize,
        /// The missing node id.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// Waypoint spacing was zero, negative or non-finite.
    #[error("waypoint spacing must be positive and finite (got {spacing})")]
    InvalidSpacing {
        /// The rejected spacing.
        spacing: f64,
    },
    /// A tree edge is too long to animate at the configured spacing.
    #[error(
        "tree edge {edge} spans {distance} units, more than {limit} waypoints at spacing {spacing}"
    )]
    SegmentTooLong {
        /// Position of the edge in the spanning tree.
        edge: usize,
        /// Length of the edge.
        distance: f64,
        /// The configured spacing.
        spacing: f64,
        /// Largest waypoint count per edge.
        limit: usize,
    },
    /// The sink failed while drawing a tree edge.
    #[error("render sink failed while drawing tree edge {edge}: {source}")]
    EdgeSink {
        /// Position of the edge in the spanning tree.
        edge: usize,
        /// Error reported by the sink.
        #[source]
        source: SinkError,
    },
    /// The sink failed while drawing a point.
    #[error("render sink failed while drawing point {index}: {source}")]
    PointSink {
        /// Position of the point in the input sequence.
        index: usize,
        /// Error reported by the sink.
        #[source]
        source: SinkError,
    },
}

define_error_codes! {
    /// Stable codes describing [`AnimationError`] variants.
    enum AnimationErrorCode for AnimationError {
        /// A tree edge referenced a missing node.
        InvalidNodeId => InvalidNodeId { .. } => "ANIMATION_INVALID_NODE_ID",
        /// Waypoint spacing was invalid.
        InvalidSpacing => InvalidSpacing { .. } => "ANIMATION_INVALID_SPACING",
        /// A tree edge needs too many waypoints.
        SegmentTooLong => SegmentTooLong { .. } => "ANIMATION_SEGMENT_TOO_LONG",
        /// The sink failed while drawing an edge.
        EdgeSink => EdgeSink { .. } => "ANIMATION_EDGE_SINK_FAILURE",
        /// The sink failed while drawing a point.
        PointSink => PointSink { .. } => "ANIMATION_POINT_SINK_FAILURE",
    }
}
