//! Core layout generation pipeline
//!
//! Three pure stages: randomized binary space partitioning, incremental
//! Delaunay triangulation and minimum spanning tree extraction. Each stage
//! hands an immutable snapshot to the next and never mutates a structure it
//! did not create.

mod partition;
mod delaunay;
mod spanning;

pub use partition::{partition_space, Axis, NodeId, PartitionNode, PartitionOutcome, PartitionTree};
pub use delaunay::triangulate;
pub use spanning::{build_spanning_tree, SpanningTree};

use crate::config::LayoutConfig;
use crate::geom::Vertex;

/// Generate room anchor points from configuration
///
/// Runs the partition stage with the configured seed and extracts the
/// leaf-region centers. Returns the anchors in deterministic pre-order
/// together with the unused room budget (zero when the requested room count
/// was reached).
pub fn generate_anchor_points(config: &LayoutConfig) -> (Vec<Vertex>, u32) {
    let outcome = partition_space(
        config.width(),
        config.length(),
        config.total_rooms,
        config.min_room_size,
        config.seed,
    );
    (outcome.tree.anchor_points(), outcome.unused_budget)
}
