//! Animated traversal of a spanning tree.
//!
//! Drawing starts at the first tree edge. Once an edge has been fully drawn
//! every tree edge sharing an endpoint with it is drawn next, all of them
//! concurrently, and an edge's traversal only completes once everything it
//! spawned has completed. Concurrency is cooperative: each frame, every
//! drawing task advances by one waypoint and then the [`FrameClock`] ticks.
//!
//! Each run owns a fresh per-edge [`EdgeState`] vector. [`ClaimPolicy`]
//! decides whether an edge already being drawn by a sibling may be drawn a
//! second time.

mod clock;
mod points;
mod waypoint;

use tracing::{debug, instrument};

use crate::error::AnimationError;
use crate::graph::{Edge, Graph};
use crate::mst::SpanningTree;
use crate::render::{RenderSink, Stroke};

pub use self::{
    clock::{FixedInterval, FrameClock, Immediate},
    points::paint_points,
    waypoint::{DEFAULT_WAYPOINT_SPACING, MAX_SEGMENT_STEPS, waypoints},
};

use self::waypoint::Segment;

/// Controls when a spawned traversal may claim its edge.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ClaimPolicy {
    /// An edge is claimed the moment a traversal is spawned for it, so it is
    /// drawn exactly once.
    #[default]
    Atomic,
    /// Only edges that have finished drawing are skipped. Siblings may draw
    /// the same edge concurrently.
    CheckThenSet,
}

/// Per-run drawing state of a tree edge.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeState {
    /// Not yet reached.
    #[default]
    Pending,
    /// A traversal is drawing the edge.
    Rendering,
    /// The edge has been fully drawn at least once.
    Rendered,
}

/// Configures a [`TraversalAnimator`].
///
/// # Examples
/// ```
/// use spanwise_core::{AnimationConfig, ClaimPolicy, Color, Stroke};
///
/// let config = AnimationConfig::new()
///     .with_stroke(Stroke::new(2.0, Color::BLACK))
///     .with_claim_policy(ClaimPolicy::CheckThenSet);
/// assert_eq!(config.spacing(), 10.0);
/// assert_eq!(config.claim_policy(), ClaimPolicy::CheckThenSet);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    stroke: Stroke,
    spacing: f64,
    claim_policy: ClaimPolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stroke: Stroke::default(),
            spacing: DEFAULT_WAYPOINT_SPACING,
            claim_policy: ClaimPolicy::default(),
        }
    }
}

impl AnimationConfig {
    /// Creates a configuration populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the stroke applied to every segment.
    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Overrides the distance between waypoints.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Overrides the claim policy.
    #[must_use]
    pub fn with_claim_policy(mut self, policy: ClaimPolicy) -> Self {
        self.claim_policy = policy;
        self
    }

    /// Returns the configured stroke.
    #[must_use]
    #[rustfmt::skip]
    pub fn stroke(&self) -> Stroke { self.stroke }

    /// Returns the configured waypoint spacing.
    #[must_use]
    #[rustfmt::skip]
    pub fn spacing(&self) -> f64 { self.spacing }

    /// Returns the configured claim policy.
    #[must_use]
    #[rustfmt::skip]
    pub fn claim_policy(&self) -> ClaimPolicy { self.claim_policy }
}

/// Outcome of one animation run.
#[derive(Clone, Debug, PartialEq)]
pub struct TraversalReport {
    frames: u64,
    segments: usize,
    renders: Vec<u32>,
    states: Vec<EdgeState>,
    completions: Vec<usize>,
}

impl TraversalReport {
    /// Returns the number of frames the clock advanced.
    #[must_use]
    #[rustfmt::skip]
    pub fn frames(&self) -> u64 { self.frames }

    /// Returns the number of segments drawn.
    #[must_use]
    #[rustfmt::skip]
    pub fn segments(&self) -> usize { self.segments }

    /// Returns how many times each tree edge was fully drawn.
    #[must_use]
    #[rustfmt::skip]
    pub fn renders(&self) -> &[u32] { &self.renders }

    /// Returns the final state of each tree edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn states(&self) -> &[EdgeState] { &self.states }

    /// Returns tree edge positions in the order their traversals completed.
    #[must_use]
    #[rustfmt::skip]
    pub fn completions(&self) -> &[usize] { &self.completions }

    /// Returns `true` when tree edge `edge` was drawn.
    #[must_use]
    pub fn visited(&self, edge: usize) -> bool {
        self.states.get(edge) == Some(&EdgeState::Rendered)
    }

    /// Returns `true` when every tree edge was drawn.
    #[must_use]
    pub fn all_visited(&self) -> bool {
        self.states.iter().all(|state| *state == EdgeState::Rendered)
    }

    /// Returns the number of renders beyond the first, summed over all edges.
    #[must_use]
    pub fn duplicate_renders(&self) -> u32 {
        self.renders
            .iter()
            .map(|count| count.saturating_sub(1))
            .sum()
    }
}

/// One in-flight traversal of a tree edge.
#[derive(Debug)]
struct Task {
    edge: usize,
    segment: Segment,
    cursor: usize,
    parent: Option<usize>,
    pending_children: usize,
}

impl Task {
    fn drawn(&self) -> bool {
        self.cursor == self.segment.len()
    }
}

/// Mutable state of a single [`TraversalAnimator::run`].
struct Run {
    tasks: Vec<Task>,
    active: Vec<usize>,
    states: Vec<EdgeState>,
    renders: Vec<u32>,
    completions: Vec<usize>,
    segments: usize,
    frames: u64,
}

/// Animates a spanning tree edge by edge.
///
/// # Examples
/// ```
/// use spanwise_core::{
///     AnimationConfig, Graph, Immediate, Point, RecordingSink, TraversalAnimator, kruskal,
/// };
///
/// let graph = Graph::complete(&[
///     Point::new(0.0, 0.0),
///     Point::new(20.0, 0.0),
///     Point::new(40.0, 0.0),
/// ])?;
/// let tree = kruskal(&graph)?;
/// let animator = TraversalAnimator::new(&graph, &tree, AnimationConfig::default())?;
///
/// let mut sink = RecordingSink::default();
/// let report = animator.run(&mut sink, &mut Immediate::default())?;
/// assert!(report.all_visited());
/// assert_eq!(report.duplicate_renders(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct TraversalAnimator {
    edges: Vec<Edge>,
    segments: Vec<Segment>,
    by_source: Vec<Vec<usize>>,
    by_target: Vec<Vec<usize>>,
    config: AnimationConfig,
}

impl TraversalAnimator {
    /// Prepares an animation of `tree` over the node positions of `graph`.
    ///
    /// # Errors
    /// Returns [`AnimationError::InvalidSpacing`] for a non-positive or
    /// non-finite waypoint spacing, [`AnimationError::InvalidNodeId`] when
    /// a tree edge references a node `graph` does not contain, and
    /// [`AnimationError::SegmentTooLong`] when an edge would need more than
    /// [`MAX_SEGMENT_STEPS`] waypoints.
    pub fn new(
        graph: &Graph,
        tree: &SpanningTree,
        config: AnimationConfig,
    ) -> Result<Self, AnimationError> {
        let spacing = config.spacing();
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(AnimationError::InvalidSpacing { spacing });
        }

        let node_count = graph.node_count();
        let mut by_source = vec![Vec::new(); node_count];
        let mut by_target = vec![Vec::new(); node_count];
        let mut segments = Vec::with_capacity(tree.len());
        for (index, edge) in tree.edges().iter().enumerate() {
            let locate = |node: usize| {
                graph
                    .position(node)
                    .ok_or_else(|| AnimationError::InvalidNodeId {
                        edge: index,
                        node,
                        node_count,
                    })
            };
            let (from, to) = (locate(edge.source())?, locate(edge.target())?);
            let segment = Segment::plan(from, to, spacing).ok_or_else(|| {
                AnimationError::SegmentTooLong {
                    edge: index,
                    distance: from.distance(to),
                    spacing,
                    limit: MAX_SEGMENT_STEPS,
                }
            })?;
            segments.push(segment);
            by_source[edge.source()].push(index);
            by_target[edge.target()].push(index);
        }

        Ok(Self {
            edges: tree.edges().to_vec(),
            segments,
            by_source,
            by_target,
            config,
        })
    }

    /// Returns the animation configuration.
    #[must_use]
    #[rustfmt::skip]
    pub fn config(&self) -> &AnimationConfig { &self.config }

    /// Draws the tree into `sink`, pacing frames with `clock`.
    ///
    /// The state of every edge starts as [`EdgeState::Pending`] on each call,
    /// so an animator can be run repeatedly.
    ///
    /// # Errors
    /// Returns [`AnimationError::EdgeSink`] when the sink rejects a segment.
    /// The run stops at the failing segment.
    #[instrument(
        name = "core.animate",
        err,
        skip_all,
        fields(edges = self.edges.len(), policy = ?self.config.claim_policy())
    )]
    pub fn run(
        &self,
        sink: &mut dyn RenderSink,
        clock: &mut dyn FrameClock,
    ) -> Result<TraversalReport, AnimationError> {
        let edge_count = self.edges.len();
        let mut run = Run {
            tasks: Vec::new(),
            active: Vec::new(),
            states: vec![EdgeState::Pending; edge_count],
            renders: vec![0; edge_count],
            completions: Vec::with_capacity(edge_count),
            segments: 0,
            frames: 0,
        };

        if edge_count > 0 {
            run.states[0] = EdgeState::Rendering;
            self.spawn(&mut run, 0, false, None);
        }

        while !run.active.is_empty() {
            for &task_id in &run.active {
                let task = &mut run.tasks[task_id];
                let waypoint = task.segment.point(task.cursor);
                task.cursor += 1;
                sink.draw_segment(task.segment.origin(), waypoint, &self.config.stroke())
                    .map_err(|source| AnimationError::EdgeSink {
                        edge: task.edge,
                        source,
                    })?;
                run.segments += 1;
            }
            clock.next_frame();
            run.frames += 1;

            let (finished, still_drawing): (Vec<usize>, Vec<usize>) = run
                .active
                .iter()
                .copied()
                .partition(|&task_id| run.tasks[task_id].drawn());
            run.active = still_drawing;
            for task_id in finished {
                self.finish_drawing(&mut run, task_id);
            }
        }

        let report = TraversalReport {
            frames: run.frames,
            segments: run.segments,
            renders: run.renders,
            states: run.states,
            completions: run.completions,
        };
        debug!(
            frames = report.frames,
            segments = report.segments,
            duplicates = report.duplicate_renders(),
            "traversal complete"
        );
        Ok(report)
    }

    fn spawn(&self, run: &mut Run, edge: usize, reversed: bool, parent: Option<usize>) {
        let forward = self.segments[edge];
        let segment = if reversed { forward.reversed() } else { forward };
        run.tasks.push(Task {
            edge,
            segment,
            cursor: 0,
            parent,
            pending_children: 0,
        });
        run.active.push(run.tasks.len() - 1);
    }

    /// Applies the entry guard for `edge`, claiming it when admitted.
    fn admit(&self, run: &mut Run, edge: usize) -> bool {
        let admitted = match self.config.claim_policy() {
            ClaimPolicy::Atomic => run.states[edge] == EdgeState::Pending,
            ClaimPolicy::CheckThenSet => run.states[edge] != EdgeState::Rendered,
        };
        if admitted {
            run.states[edge] = EdgeState::Rendering;
        }
        admitted
    }

    fn finish_drawing(&self, run: &mut Run, task_id: usize) {
        let edge = run.tasks[task_id].edge;
        run.states[edge] = EdgeState::Rendered;
        run.renders[edge] += 1;

        let mut spawned = 0;
        for (next, reversed) in self.frontier(edge) {
            if self.admit(run, next) {
                self.spawn(run, next, reversed, Some(task_id));
                spawned += 1;
            }
        }
        run.tasks[task_id].pending_children = spawned;
        if spawned == 0 {
            Self::complete(run, task_id);
        }
    }

    /// Marks `task_id` complete and completes every ancestor whose children
    /// have now all completed.
    fn complete(run: &mut Run, task_id: usize) {
        let mut current = Some(task_id);
        while let Some(id) = current {
            run.completions.push(run.tasks[id].edge);
            let parent = run.tasks[id].parent;
            current = parent.filter(|&parent| {
                let task = &mut run.tasks[parent];
                task.pending_children -= 1;
                task.pending_children == 0
            });
        }
    }

    /// Tree edges adjacent to `edge`, in tree order: those leaving either
    /// endpoint through their source first, then those reaching either
    /// endpoint through their target, drawn reversed.
    fn frontier(&self, edge: usize) -> Vec<(usize, bool)> {
        let current = self.edges[edge];
        let forward = merged(
            &self.by_source[current.source()],
            &self.by_source[current.target()],
        );
        let backward = merged(
            &self.by_target[current.source()],
            &self.by_target[current.target()],
        );
        forward
            .into_iter()
            .map(|next| (next, false))
            .chain(backward.into_iter().map(|next| (next, true)))
            .collect()
    }
}

fn merged(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut all: Vec<usize> = left.iter().chain(right).copied().collect();
    all.sort_unstable();
    all.dedup();
    all
}
