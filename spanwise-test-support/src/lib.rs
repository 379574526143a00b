//! Shared test utilities used across spanwise crates.
//!
//! [`tracing::RecordingLayer`] captures spans and events so tests can assert
//! on instrumentation, and [`ci::property_test_profile`] turns environment
//! overrides into proptest configuration.

pub mod ci;
pub mod tracing;
