//! Command implementations and argument parsing for the spanwise CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanwise_core::{
    AnimationConfig, AnimationError, ClaimPolicy, Color, ComparisonReport, DEFAULT_TOLERANCE,
    DEFAULT_WAYPOINT_SPACING, DrawCall, FindStrategy, FixedInterval, Graph, GraphError,
    JsonBoundary, KruskalEngine, MstError, Point, PointSampler, PointStyle, PrimOracle,
    RenderSink, SamplingError, SinkError, SpanningTree, Stroke, TraversalAnimator,
    TraversalReport, cross_validate, paint_points,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_POINTS: usize = 100;
const DEFAULT_WIDTH: f64 = 1280.0;
const DEFAULT_HEIGHT: f64 = 720.0;

/// Stroke used for the reference tree drawn over the local one.
pub const OVERLAY_STROKE: Stroke = Stroke::new(2.0, Color::BLACK);

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Sample points, build their minimum spanning tree, and animate it."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the sample, solve, validate, and animate pipeline.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of points to sample.
    #[arg(long, default_value_t = DEFAULT_POINTS)]
    pub points: usize,

    /// Drawing surface width.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Drawing surface height.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Band along each edge of the surface that points are shifted out of.
    #[arg(long, default_value_t = PointSampler::DEFAULT_PADDING)]
    pub padding: f64,

    /// Seed for point sampling. A random seed is chosen when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between animation frames in milliseconds.
    #[arg(long = "frame-interval-ms", default_value_t = 0)]
    pub frame_interval_ms: u64,

    /// Distance between consecutive waypoints along an edge.
    #[arg(long, default_value_t = DEFAULT_WAYPOINT_SPACING)]
    pub spacing: f64,

    /// How traversals claim the edges they draw.
    #[arg(long = "claim-policy", value_enum, default_value_t = PolicyArg::Atomic)]
    pub claim_policy: PolicyArg,

    /// Compress union-find paths in the local engine.
    #[arg(long = "path-compression")]
    pub path_compression: bool,

    /// Relative tolerance for comparing the two tree weights.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Skip drawing the reference tree over the local tree.
    #[arg(long = "no-overlay")]
    pub no_overlay: bool,

    /// Write every draw call to this file as JSON lines.
    #[arg(long = "draw-log")]
    pub draw_log: Option<PathBuf>,
}

impl Default for RunCommand {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: PointSampler::DEFAULT_PADDING,
            seed: None,
            frame_interval_ms: 0,
            spacing: DEFAULT_WAYPOINT_SPACING,
            claim_policy: PolicyArg::Atomic,
            path_compression: false,
            tolerance: DEFAULT_TOLERANCE,
            no_overlay: false,
            draw_log: None,
        }
    }
}

/// Claim policies selectable on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum PolicyArg {
    /// Every edge is drawn exactly once.
    #[default]
    Atomic,
    /// Siblings may draw the same edge concurrently.
    CheckThenSet,
}

impl PolicyArg {
    const fn label(self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::CheckThenSet => "check-then-set",
        }
    }
}

impl From<PolicyArg> for ClaimPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Atomic => Self::Atomic,
            PolicyArg::CheckThenSet => Self::CheckThenSet,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The draw log could not be created or flushed.
    #[error("failed to write draw log `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The surface or padding was rejected.
    #[error(transparent)]
    Sampling(#[from] SamplingError),
    /// The graph could not be built from the sampled points.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// An MST engine failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Drawing failed.
    #[error(transparent)]
    Animation(#[from] AnimationError),
}

impl CliError {
    /// Returns the stable code of the wrapped library error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Sampling(err) => Some(err.code().as_str()),
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Mst(err) => Some(err.code().as_str()),
            Self::Animation(err) => Some(err.code().as_str()),
        }
    }
}

/// Summarises the outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Seed the points were sampled with.
    pub seed: u64,
    /// Number of sampled points.
    pub points: usize,
    /// Number of edges in the complete graph.
    pub graph_edges: usize,
    /// Comparison of the local and reference engines.
    pub comparison: ComparisonReport,
    /// Frames spent painting points.
    pub point_frames: u64,
    /// Traversal of the local tree.
    pub traversal: TraversalReport,
    /// Traversal of the reference tree, unless the overlay was skipped.
    pub overlay: Option<TraversalReport>,
    /// Draw calls issued across the whole run.
    pub draw_calls: usize,
}

impl RunSummary {
    /// Returns the number of frames the whole run took.
    #[must_use]
    pub fn total_frames(&self) -> u64 {
        self.point_frames
            + self.traversal.frames()
            + self.overlay.as_ref().map_or(0, TraversalReport::frames)
    }
}

/// Render sink that writes each draw call as one JSON object per line.
///
/// # Examples
/// ```
/// use spanwise_cli::cli::JsonLinesSink;
/// use spanwise_core::{Point, RenderSink, Stroke};
///
/// let mut sink = JsonLinesSink::new(Vec::new());
/// sink.draw_segment(Point::new(0.0, 0.0), Point::new(3.0, 4.0), &Stroke::default())?;
/// let text = String::from_utf8(sink.into_inner()).expect("JSON is UTF-8");
/// assert!(text.starts_with(r#"{"kind":"segment""#));
/// assert!(text.ends_with('\n'));
/// # Ok::<(), spanwise_core::SinkError>(())
/// ```
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
    calls: usize,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer, calls: 0 }
    }

    /// Returns the number of calls written so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn calls(&self) -> usize { self.calls }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    /// Returns the writer's [`io::Error`].
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, call: &DrawCall) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, call).map_err(io::Error::from)?;
        self.writer.write_all(b"\n")?;
        self.calls += 1;
        Ok(())
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn draw_segment(&mut self, from: Point, to: Point, stroke: &Stroke) -> Result<(), SinkError> {
        self.emit(&DrawCall::Segment {
            from,
            to,
            stroke: *stroke,
        })
    }

    fn draw_point(&mut self, at: Point, radius: f64, color: Color) -> Result<(), SinkError> {
        self.emit(&DrawCall::Point { at, radius, color })
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when any stage of the pipeline fails.
///
/// # Examples
/// ```
/// # use spanwise_cli::cli::{Cli, Command, RunCommand, run_cli};
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         points: 12,
///         seed: Some(7),
///         ..RunCommand::default()
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(summary.comparison.matched());
/// assert!(summary.traversal.all_visited());
/// # Ok::<(), spanwise_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(seed = field::Empty, points = command.points, policy = command.claim_policy.label()),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let seed = command.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);

    match command.draw_log.as_deref() {
        Some(path) => {
            let file = File::create(path).map_err(|source| io_error(path, source))?;
            let mut sink = JsonLinesSink::new(BufWriter::new(file));
            let summary = execute(&command, seed, &mut sink)?;
            sink.flush().map_err(|source| io_error(path, source))?;
            Ok(summary)
        }
        None => execute(&command, seed, &mut JsonLinesSink::new(io::sink())),
    }
}

fn io_error(path: &Path, source: io::Error) -> CliError {
    CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn execute<W: Write>(
    command: &RunCommand,
    seed: u64,
    sink: &mut JsonLinesSink<W>,
) -> Result<RunSummary, CliError> {
    let sampler = PointSampler::new(command.width, command.height, command.padding)?;
    let points = sampler.sample(command.points, seed);
    let mut clock = FixedInterval::new(Duration::from_millis(command.frame_interval_ms));

    let point_frames = paint_points(&points, sink, &mut clock, PointStyle::default())?;

    let graph = Graph::complete(&points)?;
    let strategy = if command.path_compression {
        FindStrategy::PathCompression
    } else {
        FindStrategy::Naive
    };
    let comparison = cross_validate(
        &graph,
        &KruskalEngine::new(strategy),
        &JsonBoundary::new(PrimOracle),
        command.tolerance,
    )?;

    let config = AnimationConfig::new()
        .with_spacing(command.spacing)
        .with_claim_policy(command.claim_policy.into());
    let traversal = animate(&graph, comparison.local_tree(), config, sink, &mut clock)?;
    let overlay = if command.no_overlay {
        None
    } else {
        let overlay_config = config.with_stroke(OVERLAY_STROKE);
        Some(animate(
            &graph,
            comparison.reference_tree(),
            overlay_config,
            sink,
            &mut clock,
        )?)
    };

    let summary = RunSummary {
        seed,
        points: points.len(),
        graph_edges: graph.edges().len(),
        comparison,
        point_frames,
        traversal,
        overlay,
        draw_calls: sink.calls(),
    };
    info!(
        seed,
        matched = summary.comparison.matched(),
        total_weight = summary.comparison.local_total_weight(),
        frames = summary.total_frames(),
        "command completed"
    );
    Ok(summary)
}

fn animate(
    graph: &Graph,
    tree: &SpanningTree,
    config: AnimationConfig,
    sink: &mut dyn RenderSink,
    clock: &mut FixedInterval,
) -> Result<TraversalReport, AnimationError> {
    TraversalAnimator::new(graph, tree, config)?.run(sink, clock)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    let comparison = &summary.comparison;
    writeln!(writer, "seed: {}", summary.seed)?;
    writeln!(
        writer,
        "points: {} ({} graph edges)",
        summary.points, summary.graph_edges
    )?;
    for (engine, weight, edges, millis) in [
        (
            comparison.local_engine(),
            comparison.local_total_weight(),
            comparison.local_edge_count(),
            comparison.local_duration_ms(),
        ),
        (
            comparison.reference_engine(),
            comparison.reference_total_weight(),
            comparison.reference_edge_count(),
            comparison.reference_duration_ms(),
        ),
    ] {
        writeln!(
            writer,
            "{engine}\tweight {weight:.3}\tedges {edges}\t{millis:.3} ms"
        )?;
    }
    let verdict = if comparison.matched() { "yes" } else { "no" };
    writeln!(writer, "matched: {verdict}")?;
    writeln!(
        writer,
        "traversal: {} segments, {} duplicate renders",
        summary.traversal.segments(),
        summary.traversal.duplicate_renders()
    )?;
    if let Some(overlay) = &summary.overlay {
        writeln!(writer, "overlay: {} segments", overlay.segments())?;
    }
    writeln!(
        writer,
        "frames: {}\tdraw calls: {}",
        summary.total_frames(),
        summary.draw_calls
    )?;
    Ok(())
}
