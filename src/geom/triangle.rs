//! Triangle with a precomputed circumcircle

use glam::DVec2;

use crate::error::{LayoutError, Result};

use super::{Edge, Vertex};

/// A triangle with its circumcircle derived once at construction
///
/// The circumcenter and circumradius are computed from the corner vertices
/// when the triangle is created and never recomputed, so they stay consistent
/// with the stored corners for the triangle's whole lifetime.
///
/// The circumcenter uses the determinant formula rather than intersecting
/// perpendicular-bisector slope equations, so vertical and axis-aligned edges
/// need no special casing. The only degenerate input is a collinear corner
/// set, which is rejected at construction.
///
/// Circumcircle data is kept in `f64`: the containment test is the
/// numerically delicate step of the triangulation, and double precision keeps
/// it exact for the integer-valued anchors the partitioner emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    v1: Vertex,
    v2: Vertex,
    v3: Vertex,
    circumcenter: DVec2,
    circum_radius_sq: f64,
}

impl Triangle {
    /// Create a triangle and derive its circumcircle
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGeometry` if the corners are collinear (including
    /// repeated corners) or any coordinate is non-finite.
    pub fn new(v1: Vertex, v2: Vertex, v3: Vertex) -> Result<Self> {
        if !(v1.is_finite() && v2.is_finite() && v3.is_finite()) {
            return Err(LayoutError::DegenerateGeometry(
                "triangle corner has a non-finite coordinate".to_string(),
            ));
        }

        let (ax, ay) = (v1.x as f64, v1.y as f64);
        let (bx, by) = (v2.x as f64, v2.y as f64);
        let (cx, cy) = (v3.x as f64, v3.y as f64);

        // Twice the signed area; zero means the corners are collinear
        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
        if d == 0.0 {
            return Err(LayoutError::DegenerateGeometry(format!(
                "collinear triangle corners ({}, {}), ({}, {}), ({}, {})",
                v1.x, v1.y, v2.x, v2.y, v3.x, v3.y
            )));
        }

        let a_sq = ax * ax + ay * ay;
        let b_sq = bx * bx + by * by;
        let c_sq = cx * cx + cy * cy;

        let ux = (a_sq * (by - cy) + b_sq * (cy - ay) + c_sq * (ay - by)) / d;
        let uy = (a_sq * (cx - bx) + b_sq * (ax - cx) + c_sq * (bx - ax)) / d;

        let circumcenter = DVec2::new(ux, uy);
        let circum_radius_sq = circumcenter.distance_squared(DVec2::new(ax, ay));

        Ok(Self {
            v1,
            v2,
            v3,
            circumcenter,
            circum_radius_sq,
        })
    }

    /// First corner
    #[inline]
    pub fn v1(&self) -> Vertex {
        self.v1
    }

    /// Second corner
    #[inline]
    pub fn v2(&self) -> Vertex {
        self.v2
    }

    /// Third corner
    #[inline]
    pub fn v3(&self) -> Vertex {
        self.v3
    }

    /// The three corners in construction order
    #[inline]
    pub fn vertices(&self) -> [Vertex; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Center of the circumcircle
    #[inline]
    pub fn circumcenter(&self) -> DVec2 {
        self.circumcenter
    }

    /// Radius of the circumcircle
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circum_radius_sq.sqrt()
    }

    /// Whether `point` lies within or on the circumcircle
    ///
    /// The boundary is inclusive: co-circular points count as inside. The
    /// comparison happens on squared distances in `f64`.
    pub fn in_circumcircle(&self, point: Vertex) -> bool {
        let p = DVec2::new(point.x as f64, point.y as f64);
        self.circumcenter.distance_squared(p) <= self.circum_radius_sq
    }

    /// Whether `vertex` is one of the three corners (exact equality)
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.v1 == vertex || self.v2 == vertex || self.v3 == vertex
    }

    /// The three side edges
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.v1, self.v2),
            Edge::new(self.v2, self.v3),
            Edge::new(self.v3, self.v1),
        ]
    }
}
