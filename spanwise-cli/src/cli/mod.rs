//! Command-line interface orchestration for spanwise.
//!
//! The `run` command samples points on a drawing surface, builds the complete
//! graph over them, solves its minimum spanning tree with the local Kruskal
//! engine, checks the result against the Prim reference behind a JSON
//! boundary, and animates both trees into a render sink.

mod commands;

pub use commands::{
    Cli, CliError, Command, JsonLinesSink, OVERLAY_STROKE, PolicyArg, RunCommand, RunSummary,
    render_summary, run_cli,
};
