//! Library surface for the spanwise command-line tool.
//!
//! Exposes the argument model, the command pipeline, and logging setup so the
//! binary stays a thin wrapper and the pipeline can be tested in-process.

pub mod cli;
pub mod logging;
