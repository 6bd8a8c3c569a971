//! LevelLayout main structure

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::generation::{build_spanning_tree, partition_space, triangulate, SpanningTree};
use crate::geom::{Edge, Triangle, Vertex};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;
#[cfg(feature = "spatial-index")]
use glam::Vec2;

/// A complete generated level layout
///
/// Owns the output of every pipeline stage: the room anchor points, the
/// Delaunay triangulation over them and the minimum spanning tree that forms
/// the level's connective skeleton. Rooms are addressed by their index into
/// the anchor list, which is stable and deterministic for a fixed
/// configuration.
///
/// # Examples
///
/// ```
/// use room_layout_graph::*;
///
/// let config = LayoutConfigBuilder::new()
///     .seed(42)
///     .level_size(LevelSize::Standard)
///     .build()
///     .unwrap();
///
/// let layout = LevelLayout::generate(config).unwrap();
/// println!("Generated {} rooms", layout.room_count());
///
/// // Corridors connect every room when the triangulation is connected
/// if layout.is_fully_connected() {
///     assert_eq!(layout.corridors().len(), layout.room_count() - 1);
/// }
/// ```
#[derive(Clone)]
pub struct LevelLayout {
    /// Configuration used to generate this layout
    config: LayoutConfig,

    /// Room anchor points in deterministic partition order
    anchors: Vec<Vertex>,

    /// Room budget the partitioner could not spend
    unused_budget: u32,

    /// Delaunay triangulation over the anchors
    triangles: Vec<Triangle>,

    /// Spanning tree over the triangulation's edges
    spanning: SpanningTree,

    /// Corridor neighbors per room index, sorted
    corridor_adjacency: Vec<Vec<usize>>,

    /// Spatial index for position-to-room lookups (optional feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl LevelLayout {
    /// Generate a layout from configuration
    ///
    /// Sequences the three pipeline stages: partition the level rectangle
    /// into room anchors, triangulate the anchors, then extract the minimum
    /// spanning tree. Each stage consumes the previous stage's output as an
    /// immutable snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` when the partitioner produced fewer than
    /// 3 anchors (a configuration requesting at least 3 rooms on a region
    /// large enough to split avoids this). The error is local to the failed
    /// triangulation; no partial layout escapes.
    pub fn generate(config: LayoutConfig) -> Result<Self> {
        let outcome = partition_space(
            config.width(),
            config.length(),
            config.total_rooms,
            config.min_room_size,
            config.seed,
        );
        let anchors = outcome.tree.anchor_points();
        let unused_budget = outcome.unused_budget;

        let triangles = triangulate(&anchors)?;
        let spanning = build_spanning_tree(&triangles);
        let corridor_adjacency = corridor_adjacency(&anchors, spanning.mst_edges());

        #[cfg(feature = "spatial-index")]
        let spatial_index = {
            let positions: Vec<Vec2> = anchors.iter().map(|a| a.position()).collect();
            SpatialIndex::new(&positions)
        };

        Ok(Self {
            config,
            anchors,
            unused_budget,
            triangles,
            spanning,
            corridor_adjacency,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Get the configuration used to generate this layout
    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of generated rooms
    #[inline]
    pub fn room_count(&self) -> usize {
        self.anchors.len()
    }

    /// Room anchor points in deterministic partition order
    #[inline]
    pub fn anchor_points(&self) -> &[Vertex] {
        &self.anchors
    }

    /// Room budget the partitioner could not spend
    ///
    /// Zero when the requested room count was reached; positive when
    /// candidate regions ran out before the budget did.
    #[inline]
    pub fn unused_budget(&self) -> u32 {
        self.unused_budget
    }

    /// The Delaunay triangulation over the anchors
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The spanning-tree stage output
    #[inline]
    pub fn spanning_tree(&self) -> &SpanningTree {
        &self.spanning
    }

    /// Corridor edges: the minimum spanning tree over the room graph
    #[inline]
    pub fn corridors(&self) -> &[Edge] {
        self.spanning.mst_edges()
    }

    /// Whether the corridors reach every room
    ///
    /// False only when the triangulation's edge graph was disconnected; the
    /// spanning tree then covers the start room's component only.
    #[inline]
    pub fn is_fully_connected(&self) -> bool {
        self.spanning.is_spanning()
    }

    /// Rooms directly connected to a room by a corridor
    ///
    /// Returns an empty slice if the room index is invalid.
    pub fn connected_rooms(&self, room: usize) -> &[usize] {
        self.corridor_adjacency
            .get(room)
            .map(|neighbors| neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Rooms with exactly one corridor
    ///
    /// These sit at the end of paths through the spanning tree, which makes
    /// them natural candidates for treasure or boss placement downstream.
    pub fn dead_end_rooms(&self) -> Vec<usize> {
        self.corridor_adjacency
            .iter()
            .enumerate()
            .filter(|(_, neighbors)| neighbors.len() == 1)
            .map(|(room, _)| room)
            .collect()
    }

    /// Find rooms within a given corridor hop count from a room (BFS)
    ///
    /// # Arguments
    ///
    /// * `room` - Starting room index
    /// * `hops` - Maximum number of corridor hops (0 = just the room itself)
    ///
    /// # Returns
    ///
    /// Sorted room indices within range, including the starting room.
    /// Returns an empty vec if the room index is invalid.
    pub fn rooms_within_hops(&self, room: usize, hops: usize) -> Vec<usize> {
        if room >= self.anchors.len() {
            return vec![];
        }

        let mut visited = std::collections::HashSet::new();
        let mut current = vec![room];
        visited.insert(room);

        for _ in 0..hops {
            let mut next = Vec::new();
            for &r in &current {
                for &neighbor in self.connected_rooms(r) {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            current = next;
        }

        let mut rooms: Vec<usize> = visited.into_iter().collect();
        rooms.sort_unstable();
        rooms
    }

    /// Find the room whose anchor is nearest to a position
    /// (requires the `spatial-index` feature)
    ///
    /// Uses the KD-tree index for O(log n) lookup, for converting cursor or
    /// world positions into room indices.
    #[cfg(feature = "spatial-index")]
    pub fn find_room_at(&self, position: Vec2) -> usize {
        self.spatial_index.find_nearest(position)
    }
}

/// Index-based corridor adjacency, sorted per room for determinism
fn corridor_adjacency(anchors: &[Vertex], corridors: &[Edge]) -> Vec<Vec<usize>> {
    let index: HashMap<Vertex, usize> = anchors
        .iter()
        .enumerate()
        .map(|(i, &anchor)| (anchor, i))
        .collect();

    let mut adjacency = vec![Vec::new(); anchors.len()];
    for edge in corridors {
        if let (Some(&a), Some(&b)) = (index.get(&edge.a()), index.get(&edge.b())) {
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
    }

    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
    }

    adjacency
}
