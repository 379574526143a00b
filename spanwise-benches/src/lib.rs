//! Benchmark support crate for spanwise.
//!
//! Provides seeded point sets and parameter types used by the Criterion
//! benchmarks for MST solving and tree animation.

pub mod error;
pub mod params;
pub mod source;
