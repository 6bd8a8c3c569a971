//! Spatial indexing for fast position-to-room lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::Vec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Wrapper around a KD-tree for spatial queries
///
/// Provides O(log n) nearest-neighbor lookups to convert 2D positions into
/// room indices, for cursor picking, spawn placement and position queries.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build a spatial index from room anchor positions
    ///
    /// Creates an immutable KD-tree from the provided anchor positions.
    /// This is called once during layout generation.
    ///
    /// # Example
    ///
    /// ```
    /// use room_layout_graph::SpatialIndex;
    /// use glam::Vec2;
    ///
    /// let anchors = vec![
    ///     Vec2::new(10.0, 10.0),
    ///     Vec2::new(80.0, 10.0),
    ///     Vec2::new(45.0, 70.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&anchors);
    /// assert_eq!(index.find_nearest(Vec2::new(12.0, 8.0)), 0);
    /// ```
    pub fn new(anchors: &[Vec2]) -> Self {
        let points: Vec<[f32; 2]> = anchors.iter().map(|a| [a.x, a.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Find the room anchor nearest to a position
    ///
    /// # Arguments
    ///
    /// * `position` - 2D position to query
    ///
    /// # Returns
    ///
    /// Index of the nearest anchor in the slice the index was built from
    pub fn find_nearest(&self, position: Vec2) -> usize {
        let query = [position.x, position.y];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}

#[cfg(test)]
#[cfg(feature = "spatial-index")]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let anchors = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(100.0, 100.0),
        ];

        let index = SpatialIndex::new(&anchors);

        assert_eq!(index.find_nearest(Vec2::new(10.0, 5.0)), 0);
        assert_eq!(index.find_nearest(Vec2::new(90.0, 10.0)), 1);
        assert_eq!(index.find_nearest(Vec2::new(5.0, 95.0)), 2);
        assert_eq!(index.find_nearest(Vec2::new(80.0, 80.0)), 3);
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let anchors = vec![Vec2::new(25.0, 25.0), Vec2::new(75.0, 75.0)];

        let index = SpatialIndex::new(&anchors);

        assert_eq!(index.find_nearest(anchors[0]), 0);
        assert_eq!(index.find_nearest(anchors[1]), 1);
    }
}
