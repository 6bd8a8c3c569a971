//! Minimum spanning tree extraction (Prim's algorithm)
//!
//! Derives a vertex and edge set from the triangulation and grows a single
//! tree from a deterministic start vertex, always taking the cheapest edge
//! crossing the visited/unvisited boundary.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::geom::{Edge, Triangle, Vertex};

/// Result of a spanning-tree run
///
/// Carries the populated graph (vertices in first-appearance order, edges
/// deduplicated through symmetric equality) alongside the MST edges in
/// construction order and the vertex visit order. For a connected input
/// graph `mst_edges.len() == vertices.len() - 1`; for a disconnected one
/// only the start vertex's component is spanned, which
/// [`is_spanning`](SpanningTree::is_spanning) makes observable.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    mst_edges: Vec<Edge>,
    visited: Vec<Vertex>,
}

impl SpanningTree {
    /// Graph vertices in first-appearance order
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Deduplicated graph edges in first-appearance order
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Accepted MST edges in construction order
    #[inline]
    pub fn mst_edges(&self) -> &[Edge] {
        &self.mst_edges
    }

    /// Vertices in the order Prim's algorithm visited them
    ///
    /// Every spanned vertex appears exactly once.
    #[inline]
    pub fn visit_order(&self) -> &[Vertex] {
        &self.visited
    }

    /// Whether every graph vertex was reached from the start vertex
    #[inline]
    pub fn is_spanning(&self) -> bool {
        self.visited.len() == self.vertices.len()
    }

    /// Sum of the MST edge weights
    pub fn total_weight(&self) -> f32 {
        self.mst_edges.iter().map(|e| e.weight()).sum()
    }
}

/// Frontier entry: min-heap on weight, ties broken by insertion sequence
struct FrontierEdge {
    weight: f32,
    seq: u64,
    edge: Edge,
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

/// Build a minimum spanning tree over a triangulation's edges
///
/// Populates the graph from every triangle's corners and three side edges
/// (vertices come from the triangles' own corners; edges deduplicate through
/// symmetric equality), then runs Prim's algorithm from the first vertex in
/// insertion order.
///
/// An empty triangle list yields an empty tree. A disconnected edge set
/// yields a tree over the start vertex's component only.
///
/// # Example
///
/// ```rust
/// use room_layout_graph::{build_spanning_tree, triangulate, Vertex};
///
/// let points = [
///     Vertex::new(0.0, 0.0),
///     Vertex::new(10.0, 0.0),
///     Vertex::new(10.0, 10.0),
///     Vertex::new(0.0, 10.0),
/// ];
/// let triangles = triangulate(&points).unwrap();
/// let tree = build_spanning_tree(&triangles);
///
/// assert_eq!(tree.mst_edges().len(), tree.vertices().len() - 1);
/// ```
pub fn build_spanning_tree(triangles: &[Triangle]) -> SpanningTree {
    let mut vertices = Vec::new();
    let mut vertex_set = HashSet::new();
    let mut edges = Vec::new();
    let mut edge_keys = HashSet::new();

    for triangle in triangles {
        for corner in triangle.vertices() {
            if vertex_set.insert(corner) {
                vertices.push(corner);
            }
        }
        for edge in triangle.edges() {
            if edge_keys.insert(edge.key()) {
                edges.push(edge);
            }
        }
    }

    let (mst_edges, visited) = prim(&vertices, &edges);

    SpanningTree {
        vertices,
        edges,
        mst_edges,
        visited,
    }
}

fn prim(vertices: &[Vertex], edges: &[Edge]) -> (Vec<Edge>, Vec<Vertex>) {
    let Some(&start) = vertices.first() else {
        return (Vec::new(), Vec::new());
    };

    let mut adjacency: HashMap<Vertex, Vec<Edge>> = HashMap::new();
    for &edge in edges {
        adjacency.entry(edge.a()).or_default().push(edge);
        adjacency.entry(edge.b()).or_default().push(edge);
    }

    let mut visited_set = HashSet::new();
    let mut visited = Vec::new();
    let mut mst_edges = Vec::new();
    let mut frontier: BinaryHeap<Reverse<FrontierEdge>> = BinaryHeap::new();
    let mut seq = 0u64;

    visited_set.insert(start);
    visited.push(start);
    push_incident(&adjacency, &visited_set, start, &mut frontier, &mut seq);

    while let Some(Reverse(entry)) = frontier.pop() {
        let edge = entry.edge;
        let a_visited = visited_set.contains(&edge.a());
        let b_visited = visited_set.contains(&edge.b());

        // Stale entry: the far endpoint was reached through a cheaper edge
        if a_visited && b_visited {
            continue;
        }

        let next = if a_visited { edge.b() } else { edge.a() };
        mst_edges.push(edge);
        visited_set.insert(next);
        visited.push(next);
        push_incident(&adjacency, &visited_set, next, &mut frontier, &mut seq);
    }

    (mst_edges, visited)
}

/// Push every edge incident to `from` whose far endpoint is unvisited
fn push_incident(
    adjacency: &HashMap<Vertex, Vec<Edge>>,
    visited: &HashSet<Vertex>,
    from: Vertex,
    frontier: &mut BinaryHeap<Reverse<FrontierEdge>>,
    seq: &mut u64,
) {
    for &edge in adjacency.get(&from).into_iter().flatten() {
        let Some(far) = edge.opposite(from) else {
            continue;
        };
        if !visited.contains(&far) {
            frontier.push(Reverse(FrontierEdge {
                weight: edge.weight(),
                seq: *seq,
                edge,
            }));
            *seq += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{partition_space, triangulate};

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(x, y)
    }

    fn square_triangles() -> Vec<Triangle> {
        let points = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)];
        triangulate(&points).unwrap()
    }

    /// Union-find over vertex indices for cycle/connectivity checks
    struct UnionFind {
        parent: Vec<usize>,
    }

    impl UnionFind {
        fn new(n: usize) -> Self {
            Self {
                parent: (0..n).collect(),
            }
        }

        fn find(&mut self, i: usize) -> usize {
            if self.parent[i] != i {
                let root = self.find(self.parent[i]);
                self.parent[i] = root;
            }
            self.parent[i]
        }

        /// Returns false if both were already in the same set (a cycle)
        fn union(&mut self, a: usize, b: usize) -> bool {
            let ra = self.find(a);
            let rb = self.find(b);
            if ra == rb {
                return false;
            }
            self.parent[ra] = rb;
            true
        }
    }

    #[test]
    fn test_square_mst() {
        let tree = build_spanning_tree(&square_triangles());

        assert_eq!(tree.vertices().len(), 4);
        // Four sides plus one diagonal
        assert_eq!(tree.edges().len(), 5);
        assert_eq!(tree.mst_edges().len(), 3);
        assert!(tree.is_spanning());
        // Three sides of length 10 beat any tree using the diagonal
        assert!((tree.total_weight() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_equal_weights_pop_in_insertion_order() {
        let tree = build_spanning_tree(&square_triangles());

        // Insertion order of the square's weight-10 sides fixes the result:
        // (0,0)-(10,0), then (0,10)-(0,0), then (10,0)-(10,10)
        let expected = [
            Edge::new(v(0.0, 0.0), v(10.0, 0.0)),
            Edge::new(v(0.0, 10.0), v(0.0, 0.0)),
            Edge::new(v(10.0, 0.0), v(10.0, 10.0)),
        ];
        assert_eq!(tree.mst_edges(), &expected);
    }

    #[test]
    fn test_graph_vertices_come_from_triangle_corners() {
        let triangles = square_triangles();
        let tree = build_spanning_tree(&triangles);

        // Vertex population uses each triangle's own corners, not remixed
        // coordinate pairs
        for &vertex in tree.vertices() {
            assert!(
                triangles.iter().any(|t| t.contains_vertex(vertex)),
                "vertex ({}, {}) is not a triangle corner",
                vertex.x,
                vertex.y
            );
        }
    }

    #[test]
    fn test_mst_is_acyclic_and_connected() {
        let anchors = partition_space(200, 200, 12, 20, 11).tree.anchor_points();
        let triangles = triangulate(&anchors).unwrap();
        let tree = build_spanning_tree(&triangles);

        assert!(tree.is_spanning());
        assert_eq!(tree.mst_edges().len(), tree.vertices().len() - 1);

        let index: HashMap<Vertex, usize> = tree
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, &vx)| (vx, i))
            .collect();

        let mut uf = UnionFind::new(tree.vertices().len());
        for edge in tree.mst_edges() {
            let a = index[&edge.a()];
            let b = index[&edge.b()];
            assert!(uf.union(a, b), "MST contains a cycle");
        }

        // N-1 acyclic edges over N vertices connect everything
        let root = uf.find(0);
        for i in 1..tree.vertices().len() {
            assert_eq!(uf.find(i), root);
        }
    }

    #[test]
    fn test_disconnected_graph_spans_start_component_only() {
        let mut triangles = square_triangles();
        // A second component far from the square
        triangles.push(
            Triangle::new(v(1000.0, 1000.0), v(1010.0, 1000.0), v(1000.0, 1010.0)).unwrap(),
        );

        let tree = build_spanning_tree(&triangles);

        assert_eq!(tree.vertices().len(), 7);
        assert!(!tree.is_spanning());
        assert_eq!(tree.visit_order().len(), 4);
        assert_eq!(tree.mst_edges().len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let tree = build_spanning_tree(&[]);

        assert!(tree.vertices().is_empty());
        assert!(tree.edges().is_empty());
        assert!(tree.mst_edges().is_empty());
        assert!(tree.is_spanning());
    }

    #[test]
    fn test_deterministic() {
        let anchors = partition_space(160, 160, 10, 20, 5).tree.anchor_points();
        let triangles = triangulate(&anchors).unwrap();

        let first = build_spanning_tree(&triangles);
        let second = build_spanning_tree(&triangles);
        assert_eq!(first.mst_edges(), second.mst_edges());
        assert_eq!(first.visit_order(), second.visit_order());
    }
}
