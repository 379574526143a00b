//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and layout types used by the point generation
//! strategies and property functions.

use spanwise_test_support::ci::property_test_profile::load_repetitions;

use crate::graph::Point;

const DEFAULT_REPETITIONS: usize = 5;

/// Spatial layout used when generating points.
///
/// Each layout stresses a different aspect of the solver: lattices and
/// collinear runs produce many equal weights, duplicates produce zero-weight
/// edges, and clusters produce a wide spread between short and long edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum PointLayout {
    /// Independent uniform coordinates.
    Scattered,
    /// Integer grid positions, so many pairs share a distance.
    Lattice,
    /// A handful of tight clusters far apart from each other.
    Clustered,
    /// Points spaced along a single line.
    Collinear,
    /// Scattered points with some positions repeated exactly.
    Duplicates,
}

/// Fixture for MST property tests.
///
/// Captures the generated points and the layout used during generation,
/// providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct PointFixture {
    /// Generated point positions.
    pub points: Vec<Point>,
    /// Layout used during generation.
    pub layout: PointLayout,
}

/// Configuration for the repeatability property.
pub(super) struct RepeatabilityConfig {
    /// Number of times to repeat the MST computation per input.
    pub repetitions: usize,
}

impl RepeatabilityConfig {
    /// Loads the repetition count from `SPANWISE_MST_PBT_REPETITIONS`,
    /// falling back to five when it is unset or below two.
    pub(super) fn load() -> Self {
        Self {
            repetitions: load_repetitions(DEFAULT_REPETITIONS),
        }
    }
}
