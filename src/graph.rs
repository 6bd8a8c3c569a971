//! Flattened graph export for LevelLayout
//!
//! Generates engine-agnostic, index-based graph data from a generated
//! layout, for consumption by renderers and room-placement systems.

use std::collections::HashMap;

use crate::geom::{Edge, Vertex};
use crate::layout::LevelLayout;

/// Engine-agnostic layout graph output
///
/// Contains flat arrays suitable for any engine or tool:
/// positions are room anchors in room-index order, and every edge is a pair
/// of room indices into that array. `corridors` is a subset of `edges`: the
/// spanning tree a consumer carves walkable connections from, while `edges`
/// carries the full triangulation for consumers that want loops or optional
/// extra passages.
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    /// Room anchor positions, indexed by room
    pub positions: Vec<[f32; 2]>,
    /// Triangulation edges as room-index pairs
    pub edges: Vec<[u32; 2]>,
    /// Spanning-tree edges as room-index pairs
    pub corridors: Vec<[u32; 2]>,
}

impl LayoutGraph {
    /// Get the number of rooms
    pub fn room_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangulation edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of corridor edges
    pub fn corridor_count(&self) -> usize {
        self.corridors.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Build a flattened graph from a generated layout
///
/// Room indices follow the layout's anchor order, so indices here agree with
/// [`LevelLayout::connected_rooms`] and the spatial index.
pub fn build_layout_graph(layout: &LevelLayout) -> LayoutGraph {
    let anchors = layout.anchor_points();
    let index: HashMap<Vertex, u32> = anchors
        .iter()
        .enumerate()
        .map(|(i, &anchor)| (anchor, i as u32))
        .collect();

    let positions = anchors.iter().map(|a| [a.x, a.y]).collect();

    let to_pair = |edge: &Edge| -> Option<[u32; 2]> {
        match (index.get(&edge.a()), index.get(&edge.b())) {
            (Some(&a), Some(&b)) => Some([a, b]),
            _ => None,
        }
    };

    let edges = layout
        .spanning_tree()
        .edges()
        .iter()
        .filter_map(to_pair)
        .collect();

    let corridors = layout.corridors().iter().filter_map(to_pair).collect();

    LayoutGraph {
        positions,
        edges,
        corridors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayoutConfigBuilder, LevelSize};

    fn graph() -> (LevelLayout, LayoutGraph) {
        let config = LayoutConfigBuilder::new()
            .seed(42)
            .level_size(LevelSize::Standard)
            .build()
            .unwrap();
        let layout = LevelLayout::generate(config).unwrap();
        let graph = build_layout_graph(&layout);
        (layout, graph)
    }

    #[test]
    fn test_graph_matches_layout() {
        let (layout, graph) = graph();

        assert!(!graph.is_empty());
        assert_eq!(graph.room_count(), layout.room_count());
        assert_eq!(graph.edge_count(), layout.spanning_tree().edges().len());
        assert_eq!(graph.corridor_count(), layout.corridors().len());
    }

    #[test]
    fn test_indices_are_in_bounds() {
        let (_, graph) = graph();

        let rooms = graph.room_count() as u32;
        for pair in graph.edges.iter().chain(graph.corridors.iter()) {
            assert!(pair[0] < rooms);
            assert!(pair[1] < rooms);
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_corridors_are_a_subset_of_edges() {
        let (_, graph) = graph();

        let normalize = |pair: &[u32; 2]| {
            let mut p = *pair;
            p.sort_unstable();
            p
        };
        let edge_set: std::collections::HashSet<[u32; 2]> =
            graph.edges.iter().map(normalize).collect();

        for corridor in &graph.corridors {
            assert!(edge_set.contains(&normalize(corridor)));
        }
    }

    #[test]
    fn test_positions_follow_anchor_order() {
        let (layout, graph) = graph();

        for (anchor, position) in layout.anchor_points().iter().zip(&graph.positions) {
            assert_eq!(position, &[anchor.x, anchor.y]);
        }
    }
}
