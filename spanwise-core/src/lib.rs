//! Spanwise core library.
//!
//! Builds the complete Euclidean graph over a point set, computes its minimum
//! spanning tree with Kruskal's algorithm, cross-checks the result against an
//! independent Prim's engine, and animates the tree into a [`RenderSink`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod animate;
mod engine;
mod error;
mod graph;
mod mst;
mod render;
mod sampling;
mod validate;

#[cfg(test)]
mod test_utils;

pub use crate::{
    animate::{
        AnimationConfig, ClaimPolicy, DEFAULT_WAYPOINT_SPACING, EdgeState, FixedInterval,
        FrameClock, Immediate, MAX_SEGMENT_STEPS, TraversalAnimator, TraversalReport,
        paint_points, waypoints,
    },
    engine::{JsonBoundary, KruskalEngine, MstEngine, PrimOracle},
    error::{
        AnimationError, AnimationErrorCode, BoundaryStage, GraphError, GraphErrorCode, MstError,
        MstErrorCode, SamplingError, SamplingErrorCode, SinkError,
    },
    graph::{Edge, Graph, Node, NodeId, Point, complete_edge_count},
    mst::{DisjointSet, FindStrategy, SpanningTree, kruskal, kruskal_with},
    render::{Color, DrawCall, PointStyle, RecordingSink, RenderSink, Stroke},
    sampling::PointSampler,
    validate::{ComparisonReport, DEFAULT_TOLERANCE, cross_validate, weights_match},
};
