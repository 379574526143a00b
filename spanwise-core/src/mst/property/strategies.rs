//! Strategy builders for MST property-based tests.
//!
//! Provides point generation strategies that produce varied spatial layouts
//! designed to stress the Kruskal implementation. Each generator is driven
//! by a seeded [`SmallRng`] so failing cases replay exactly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Point;

use super::types::{PointFixture, PointLayout};

/// Side length of the square the scattered layouts draw from.
const EXTENT: f64 = 1_000.0;
/// Spacing between neighbouring lattice and collinear positions.
const STEP: f64 = 10.0;

/// Generates fixtures with between zero and `max_nodes` points.
pub(super) fn point_fixture_strategy(max_nodes: usize) -> impl Strategy<Value = PointFixture> {
    (any::<PointLayout>(), 0..=max_nodes, any::<u64>()).prop_map(|(layout, count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, count, &mut rng)
    })
}

/// Generates a fixture for a specific layout and point count.
///
/// Useful for targeted rstest cases where the layout is chosen explicitly
/// rather than sampled by proptest.
pub(super) fn generate_fixture(
    layout: PointLayout,
    count: usize,
    rng: &mut SmallRng,
) -> PointFixture {
    let points = match layout {
        PointLayout::Scattered => scattered(count, rng),
        PointLayout::Lattice => lattice(count, rng),
        PointLayout::Clustered => clustered(count, rng),
        PointLayout::Collinear => collinear(count, rng),
        PointLayout::Duplicates => duplicates(count, rng),
    };
    PointFixture { points, layout }
}

fn scattered(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..EXTENT), rng.gen_range(0.0..EXTENT)))
        .collect()
}

/// Snaps points to a small integer grid so distances repeat often.
fn lattice(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let side = (count as f64).sqrt().ceil() as u32 + 1;
    (0..count)
        .map(|_| {
            let column = rng.gen_range(0..=side);
            let row = rng.gen_range(0..=side);
            Point::new(f64::from(column) * STEP, f64::from(row) * STEP)
        })
        .collect()
}

fn clustered(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let centres: Vec<Point> = (0..rng.gen_range(1..=4))
        .map(|_| Point::new(rng.gen_range(0.0..EXTENT), rng.gen_range(0.0..EXTENT)))
        .collect();
    (0..count)
        .map(|_| {
            let centre = centres[rng.gen_range(0..centres.len())];
            Point::new(
                centre.x + rng.gen_range(-5.0..5.0),
                centre.y + rng.gen_range(-5.0..5.0),
            )
        })
        .collect()
}

fn collinear(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let slots = u32::try_from(count.saturating_mul(2)).unwrap_or(u32::MAX);
    (0..count)
        .map(|_| Point::new(f64::from(rng.gen_range(0..=slots)) * STEP, 0.0))
        .collect()
}

fn duplicates(count: usize, rng: &mut SmallRng) -> Vec<Point> {
    let distinct = scattered(count.div_ceil(2).max(1), rng);
    (0..count)
        .map(|_| distinct[rng.gen_range(0..distinct.len())])
        .collect()
}

// Proptest `Arbitrary` implementation for `PointLayout` is provided manually
// so the tie-heavy layouts are sampled more often.
impl proptest::arbitrary::Arbitrary for PointLayout {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Scattered),
            3 => Just(Self::Lattice),
            2 => Just(Self::Clustered),
            2 => Just(Self::Collinear),
            2 => Just(Self::Duplicates),
        ]
    }
}
