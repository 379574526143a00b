//! Property-based tests for the Kruskal MST implementation.
//!
//! Verifies Kruskal against an exhaustive spanning-tree oracle on small
//! inputs, validates structural invariants (acyclicity, connectivity, edge
//! count), and checks that repeated runs agree on total weight across point
//! layouts with and without weight ties.

mod equivalence;
mod helpers;
mod oracle;
mod repeatability;
mod strategies;
mod structural;
mod types;
