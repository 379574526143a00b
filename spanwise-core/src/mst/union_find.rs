//! Weighted union-find used by Kruskal's algorithm.
//!
//! `find` walks parent links without rewriting them unless
//! [`FindStrategy::PathCompression`] is selected. Both strategies report the
//! same roots; only the length of later walks differs.
//!
//! Union is by rank. The lower-rank root is attached beneath the higher-rank
//! root; on equal rank the right root is attached beneath the left root and
//! the left root's rank grows by one.

use std::cmp::Ordering;

use super::FindStrategy;
use crate::error::MstError;

/// Disjoint-set forest over the node ids `0..n`.
///
/// # Examples
/// ```
/// use spanwise_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(0)?, sets.find(1)?);
/// assert_eq!(sets.components(), 3);
/// # Ok::<(), spanwise_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
    strategy: FindStrategy,
}

impl DisjointSet {
    /// Creates `node_count` singleton sets using the default find strategy.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self::with_strategy(node_count, FindStrategy::default())
    }

    /// Creates `node_count` singleton sets using `strategy` for `find`.
    #[must_use]
    pub fn with_strategy(node_count: usize, strategy: FindStrategy) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
            strategy,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the find strategy in use.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> FindStrategy { self.strategy }

    /// Returns the root of the set containing `node`.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidNodeId`] when `node` is outside `0..n`.
    pub fn find(&mut self, node: usize) -> Result<usize, MstError> {
        self.check(node)?;
        let root = self.root_of(node);
        if self.strategy == FindStrategy::PathCompression {
            self.compress(node, root);
        }
        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when both
    /// elements already shared a root.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidNodeId`] when either element is outside
    /// `0..n`. The structure is unchanged in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, MstError> {
        self.check(right)?;
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let (parent, child) = match self.rank[left_root].cmp(&self.rank[right_root]) {
            Ordering::Less => (right_root, left_root),
            Ordering::Greater => (left_root, right_root),
            Ordering::Equal => {
                self.rank[left_root] = self.rank[left_root].saturating_add(1);
                (left_root, right_root)
            }
        };
        self.parent[child] = parent;
        self.components -= 1;
        Ok(true)
    }

    fn check(&self, node: usize) -> Result<(), MstError> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(MstError::InvalidNodeId {
                node,
                node_count: self.parent.len(),
            })
        }
    }

    fn root_of(&self, node: usize) -> usize {
        let mut current = node;
        while self.parent[current] != current {
            current = self.parent[current];
        }
        current
    }

    fn compress(&mut self, mut node: usize, root: usize) {
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
    }
}
