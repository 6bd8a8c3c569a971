//! Randomized binary space partitioning
//!
//! Splits the level rectangle into candidate room regions with a
//! budget-limited sequence of randomized cuts. The tree is built
//! breadth-first with an explicit work queue so larger regions are split
//! before their descendants, keeping the partition balanced regardless of
//! depth. Nodes live in an arena (`Vec`) and reference their children by
//! index.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::geom::Vertex;

/// Axis a partition node splits along
///
/// The level rectangle spans the x and z axes of the game plane. Split axes
/// alternate at each level of the tree, which keeps aspect ratios roughly
/// balanced across depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Cut perpendicular to the x axis
    X,
    /// Cut perpendicular to the z axis
    Z,
}

impl Axis {
    /// The other axis
    #[inline]
    pub fn flipped(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }
}

/// Index of a node within a [`PartitionTree`] arena
pub type NodeId = usize;

/// A rectangular region in the partition tree
///
/// A node either has no children (a *leaf*, contributing one anchor point)
/// or exactly two. Dimensions are integers; anchor centers use truncating
/// division, so anchors land on whole coordinates.
#[derive(Debug, Clone)]
pub struct PartitionNode {
    /// Region extent along the x axis
    pub width: i32,
    /// Region extent along the z axis
    pub length: i32,
    /// Region origin along the x axis
    pub start_x: i32,
    /// Region origin along the z axis
    pub start_z: i32,
    /// Axis this node would split along
    pub axis: Axis,
    /// Arena index of the left child, if split
    pub left: Option<NodeId>,
    /// Arena index of the right child, if split
    pub right: Option<NodeId>,
}

impl PartitionNode {
    fn new(width: i32, length: i32, start_x: i32, start_z: i32, axis: Axis) -> Self {
        Self {
            width,
            length,
            start_x,
            start_z,
            axis,
            left: None,
            right: None,
        }
    }

    /// Whether this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Anchor point at the region's truncated center
    ///
    /// Computed as `start + dimension / 2` with integer division, matching
    /// fixed-point anchor placement rather than the true geometric center
    /// when a dimension is odd.
    pub fn center(&self) -> Vertex {
        let cx = self.start_x + self.width / 2;
        let cz = self.start_z + self.length / 2;
        Vertex::new(cx as f32, cz as f32)
    }
}

/// Arena-backed binary partition tree
///
/// Built once by [`partition_space`] and never rebalanced. Node 0 is always
/// the root covering the full level rectangle.
#[derive(Debug, Clone)]
pub struct PartitionTree {
    nodes: Vec<PartitionNode>,
}

impl PartitionTree {
    /// Arena index of the root node
    pub const ROOT: NodeId = 0;

    /// The root node
    #[inline]
    pub fn root(&self) -> &PartitionNode {
        &self.nodes[Self::ROOT]
    }

    /// Look up a node by arena index
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&PartitionNode> {
        self.nodes.get(id)
    }

    /// Total number of nodes in the arena
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of successful splits performed while building the tree
    ///
    /// Every split adds exactly two nodes, so this is derivable from the
    /// arena size.
    #[inline]
    pub fn split_count(&self) -> usize {
        (self.nodes.len() - 1) / 2
    }

    /// Leaf node indices in pre-order (left before right)
    pub fn leaf_ids(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![Self::ROOT];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf() {
                leaves.push(id);
                continue;
            }
            // Push right first so the left subtree is visited first
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }

        leaves
    }

    /// Number of leaf regions
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaf_ids().len()
    }

    /// Anchor points at the leaf-region centers, in pre-order
    ///
    /// The order is not semantically significant downstream but is
    /// deterministic for a fixed seed.
    pub fn anchor_points(&self) -> Vec<Vertex> {
        self.leaf_ids()
            .into_iter()
            .map(|id| self.nodes[id].center())
            .collect()
    }
}

/// Result of a partition run
#[derive(Debug, Clone)]
pub struct PartitionOutcome {
    /// The finished partition tree
    pub tree: PartitionTree,
    /// Room budget left over when splitting stopped
    ///
    /// Zero means the requested room count was reached. A positive value
    /// means candidate regions fell below the minimum size (or had no valid
    /// cut interval) before the budget ran out. Best-effort under-generation,
    /// not an error.
    pub unused_budget: u32,
}

/// Partition the level rectangle into candidate room regions
///
/// Builds the tree breadth-first: the root covers the full rectangle and
/// counts as one room, so the split budget is `total_rooms - 1`. Each
/// dequeued node is split at a uniformly random cut point that leaves both
/// children at least `min_room_size` along the cut axis; nodes that are too
/// small, or have no valid cut interval, stay leaves. Children flip the cut
/// axis and re-enter the queue.
///
/// The same seed always reproduces the identical tree.
///
/// # Arguments
///
/// * `width` - Level extent along the x axis
/// * `length` - Level extent along the z axis
/// * `total_rooms` - Requested number of leaf regions
/// * `min_room_size` - Minimum child extent along the cut axis
/// * `seed` - Seed for the cut-point generator
///
/// # Example
///
/// ```rust
/// use room_layout_graph::partition_space;
///
/// let outcome = partition_space(100, 100, 4, 20, 42);
/// assert_eq!(outcome.tree.leaf_count(), 4);
/// assert_eq!(outcome.unused_budget, 0);
/// ```
pub fn partition_space(
    width: i32,
    length: i32,
    total_rooms: u32,
    min_room_size: i32,
    seed: u32,
) -> PartitionOutcome {
    // A zero or negative minimum would admit zero-area children
    let min_room_size = min_room_size.max(1);

    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    let mut nodes = vec![PartitionNode::new(width, length, 0, 0, Axis::X)];

    let mut queue = VecDeque::new();
    queue.push_back(PartitionTree::ROOT);

    // The root already counts as one room
    let mut budget = total_rooms.saturating_sub(1);

    while budget > 0 {
        let Some(id) = queue.pop_front() else {
            break;
        };

        let node = &nodes[id];
        let (w, l, sx, sz, axis) = (
            node.width,
            node.length,
            node.start_x,
            node.start_z,
            node.axis,
        );

        if w < min_room_size || l < min_room_size {
            continue;
        }

        let (left, right) = match axis {
            Axis::X => {
                let min_start = sx + min_room_size;
                let min_end = sx + w - min_room_size;
                if min_start > min_end {
                    continue;
                }
                let cut = rng.gen_range(min_start..=min_end) - sx;
                (
                    PartitionNode::new(cut, l, sx, sz, axis.flipped()),
                    PartitionNode::new(w - cut, l, sx + cut, sz, axis.flipped()),
                )
            }
            Axis::Z => {
                let min_start = sz + min_room_size;
                let min_end = sz + l - min_room_size;
                if min_start > min_end {
                    continue;
                }
                let cut = rng.gen_range(min_start..=min_end) - sz;
                (
                    PartitionNode::new(w, l - cut, sx, sz + cut, axis.flipped()),
                    PartitionNode::new(w, cut, sx, sz, axis.flipped()),
                )
            }
        };

        let left_id = nodes.len();
        nodes.push(left);
        let right_id = nodes.len();
        nodes.push(right);

        nodes[id].left = Some(left_id);
        nodes[id].right = Some(right_id);

        queue.push_back(left_id);
        queue.push_back(right_id);
        budget -= 1;
    }

    PartitionOutcome {
        tree: PartitionTree { nodes },
        unused_budget: budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Children must exactly tile their parent along the cut axis
    fn assert_children_tile(tree: &PartitionTree) {
        for id in 0..tree.node_count() {
            let node = tree.node(id).unwrap();
            let (Some(left_id), Some(right_id)) = (node.left, node.right) else {
                assert!(node.is_leaf());
                continue;
            };
            let left = tree.node(left_id).unwrap();
            let right = tree.node(right_id).unwrap();

            match node.axis {
                Axis::X => {
                    assert_eq!(left.width + right.width, node.width);
                    assert_eq!(left.length, node.length);
                    assert_eq!(right.length, node.length);
                    assert_eq!(left.start_x, node.start_x);
                    assert_eq!(right.start_x, node.start_x + left.width);
                    assert_eq!(left.start_z, node.start_z);
                    assert_eq!(right.start_z, node.start_z);
                }
                Axis::Z => {
                    assert_eq!(left.length + right.length, node.length);
                    assert_eq!(left.width, node.width);
                    assert_eq!(right.width, node.width);
                    assert_eq!(left.start_x, node.start_x);
                    assert_eq!(right.start_x, node.start_x);
                    assert_eq!(right.start_z, node.start_z);
                    assert_eq!(left.start_z, node.start_z + right.length);
                }
            }
            assert_eq!(left.axis, node.axis.flipped());
            assert_eq!(right.axis, node.axis.flipped());
        }
    }

    #[test]
    fn test_four_room_scenario() {
        let outcome = partition_space(100, 100, 4, 20, 42);

        assert_eq!(outcome.unused_budget, 0);
        assert_eq!(outcome.tree.leaf_count(), 4);

        // Every leaf satisfies the minimum size: all three splits were valid
        for id in outcome.tree.leaf_ids() {
            let leaf = outcome.tree.node(id).unwrap();
            assert!(leaf.width >= 20);
            assert!(leaf.length >= 20);
        }
    }

    #[test]
    fn test_children_tile_parent() {
        for seed in [0, 1, 7, 42, 12345] {
            let outcome = partition_space(200, 160, 16, 15, seed);
            assert_children_tile(&outcome.tree);
        }
    }

    #[test]
    fn test_leaf_count_is_splits_plus_one() {
        for seed in [3, 99, 1000] {
            let outcome = partition_space(300, 300, 24, 10, seed);
            let tree = &outcome.tree;
            assert_eq!(tree.leaf_count(), tree.split_count() + 1);
            // Every consumed budget unit is a successful split
            let consumed = 24 - 1 - outcome.unused_budget as usize;
            assert_eq!(tree.split_count(), consumed);
        }
    }

    #[test]
    fn test_under_generation_reports_remaining_budget() {
        // A 30x30 region cannot be cut while leaving 20 on both sides
        let outcome = partition_space(30, 30, 10, 20, 42);

        assert_eq!(outcome.tree.leaf_count(), 1);
        assert_eq!(outcome.unused_budget, 9);
    }

    #[test]
    fn test_single_room_never_splits() {
        let outcome = partition_space(100, 100, 1, 10, 42);

        assert_eq!(outcome.tree.leaf_count(), 1);
        assert_eq!(outcome.unused_budget, 0);
        assert!(outcome.tree.root().is_leaf());
    }

    #[test]
    fn test_anchor_centers_truncate() {
        let outcome = partition_space(9, 9, 1, 5, 0);
        let anchors = outcome.tree.anchor_points();

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0], Vertex::new(4.0, 4.0));
    }

    #[test]
    fn test_determinism_per_seed() {
        let a = partition_space(200, 200, 16, 20, 42).tree.anchor_points();
        let b = partition_space(200, 200, 16, 20, 42).tree.anchor_points();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = partition_space(200, 200, 16, 20, 12345).tree.anchor_points();
        let b = partition_space(200, 200, 16, 20, 67890).tree.anchor_points();
        assert_ne!(a, b);
    }

    #[test]
    fn test_anchor_order_is_preorder() {
        let outcome = partition_space(100, 100, 2, 20, 7);
        let tree = &outcome.tree;

        // One split: the root's first-cut children are the only leaves,
        // left before right
        assert_eq!(tree.leaf_count(), 2);
        let left = tree.node(tree.root().left.unwrap()).unwrap();
        let right = tree.node(tree.root().right.unwrap()).unwrap();
        assert_eq!(tree.anchor_points(), vec![left.center(), right.center()]);
    }
}
