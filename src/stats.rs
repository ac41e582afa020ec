//! Aggregate counters for a tree, computed by walking it.

use serde::{Deserialize, Serialize};

/// Tree statistics
///
/// Produced by [`crate::QuadTree::stats`]; useful for debug overlays and
/// for asserting on tree shape in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of points stored in the tree.
    pub total_points: usize,
    /// Number of nodes, the root included.
    pub node_count: usize,
    /// Number of nodes that have not split.
    pub leaf_count: usize,
    /// Deepest level that currently has a node; 0 for a bare root.
    pub max_occupied_depth: u32,
}
