//! 2D anchor point

use glam::Vec2;
use std::hash::{Hash, Hasher};

/// A 2D point in the level plane
///
/// Vertices are immutable value types; every pipeline stage shares them
/// read-only. Equality is **exact** coordinate equality with no epsilon
/// tolerance: two vertices produced by different arithmetic paths may
/// compare unequal even when geometrically "the same". The partitioner only
/// emits integer-valued centers, for which exact equality is well defined.
///
/// `-0.0` and `0.0` compare equal and hash identically, so hash-based sets
/// stay consistent with `==`. Coordinates must be finite; the triangulation
/// entry point rejects non-finite input before any vertex lands in a set.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Position along the x axis
    pub x: f32,
    /// Position along the z axis of the level plane (2D y)
    pub y: f32,
}

impl Vertex {
    /// Create a new vertex
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position as a `glam` vector
    #[inline]
    pub fn position(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another vertex
    #[inline]
    pub fn distance_to(self, other: Vertex) -> f32 {
        self.position().distance(other.position())
    }

    /// Whether both coordinates are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Canonical bit pattern used for hashing, with `-0.0` folded into `0.0`
    pub(crate) fn key(self) -> (u32, u32) {
        (canonical_bits(self.x), canonical_bits(self.y))
    }
}

fn canonical_bits(v: f32) -> u32 {
    if v == 0.0 {
        0.0f32.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Vec2> for Vertex {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vertex> for Vec2 {
    fn from(v: Vertex) -> Self {
        v.position()
    }
}
