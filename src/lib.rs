//! Room-based level layout graph generation
//!
//! A standalone library for generating procedural room-layout graphs,
//! suitable for use with any game engine (Bevy, Godot, etc.)
//!
//! The pipeline partitions a rectangular level into room anchor points with
//! randomized binary space partitioning, connects the anchors with an
//! incremental Delaunay triangulation (Bowyer-Watson) and reduces the
//! triangulation to a minimum spanning tree (Prim) that forms the level's
//! corridor skeleton.
//!
//! # Quick Start
//!
//! ```rust
//! use room_layout_graph::*;
//!
//! // Generate a layout
//! let config = LayoutConfigBuilder::new()
//!     .seed(42)
//!     .level_size(LevelSize::Standard)
//!     .build().unwrap();
//!
//! let layout = LevelLayout::generate(config).unwrap();
//!
//! // Export the graph for rendering or room placement
//! let graph = build_layout_graph(&layout);
//! println!("Generated {} rooms, {} corridors", graph.room_count(), graph.corridor_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-room lookups using KD-tree
//! - `serde`: Enables serialization support for configuration

// Modules
pub mod error;
pub mod config;
pub mod geom;
pub mod generation;
pub mod layout;
pub mod graph;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{LayoutError, Result};
pub use config::{LayoutConfig, LayoutConfigBuilder, LevelSize};
pub use geom::{Edge, Triangle, Vertex};
pub use generation::{
    build_spanning_tree, generate_anchor_points, partition_space, triangulate, Axis, NodeId,
    PartitionNode, PartitionOutcome, PartitionTree, SpanningTree,
};
pub use layout::LevelLayout;
pub use graph::{build_layout_graph, LayoutGraph};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
