//! Incremental Delaunay triangulation (Bowyer-Watson)
//!
//! Inserts points one at a time into a working triangle set seeded with an
//! oversized super-triangle. For each point, every triangle whose
//! circumcircle contains the point (boundary inclusive) is removed, the
//! cavity boundary is re-triangulated against the point, and super-triangle
//! remnants are stripped once all points are in.

use std::collections::{HashMap, HashSet};

use crate::error::{LayoutError, Result};
use crate::geom::{Edge, Triangle, Vertex};

/// Triangulate a point set
///
/// Points are inserted in input order; duplicate points are coalesced to
/// their first occurrence. The result is deterministic for a fixed input
/// order, and every distinct input point is a corner of at least one output
/// triangle unless the whole set is collinear (a collinear set triangulates
/// to an empty list: every working triangle still leans on a super-triangle
/// vertex and is removed).
///
/// # Errors
///
/// Returns `DegenerateGeometry` when fewer than 3 distinct points remain
/// after coalescing, when any coordinate is non-finite, or when an insertion
/// would construct a collinear triangle. The error is local to this call;
/// callers may retry with a jittered point set.
///
/// # Example
///
/// ```rust
/// use room_layout_graph::{triangulate, Vertex};
///
/// let points = [
///     Vertex::new(0.0, 0.0),
///     Vertex::new(10.0, 0.0),
///     Vertex::new(10.0, 10.0),
///     Vertex::new(0.0, 10.0),
/// ];
/// let triangles = triangulate(&points).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate(points: &[Vertex]) -> Result<Vec<Triangle>> {
    let points = distinct_points(points)?;

    let super_triangle = super_triangle(&points)?;
    let [s1, s2, s3] = super_triangle.vertices();

    let mut triangles = vec![super_triangle];
    for &point in &points {
        insert_point(&mut triangles, point)?;
    }

    triangles.retain(|t| {
        !(t.contains_vertex(s1) || t.contains_vertex(s2) || t.contains_vertex(s3))
    });

    Ok(triangles)
}

/// Validate coordinates and coalesce duplicates, preserving input order
fn distinct_points(points: &[Vertex]) -> Result<Vec<Vertex>> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::with_capacity(points.len());

    for &point in points {
        if !point.is_finite() {
            return Err(LayoutError::DegenerateGeometry(
                "triangulation point has a non-finite coordinate".to_string(),
            ));
        }
        if seen.insert(point) {
            distinct.push(point);
        }
    }

    if distinct.len() < 3 {
        return Err(LayoutError::DegenerateGeometry(format!(
            "triangulation needs at least 3 distinct points (got {})",
            distinct.len()
        )));
    }

    Ok(distinct)
}

/// Build a triangle strictly containing every input point
///
/// Expands the point set's bounding box by ten times its larger dimension
/// and places three corners outside that margin.
fn super_triangle(points: &[Vertex]) -> Result<Triangle> {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    let dx = max_x - min_x;
    let dy = max_y - min_y;
    let delta_max = dx.max(dy) * 10.0;

    Triangle::new(
        Vertex::new(min_x - delta_max, min_y - delta_max),
        Vertex::new(min_x + 2.0 * delta_max, min_y + delta_max),
        Vertex::new(min_x - delta_max, min_y + 2.0 * delta_max),
    )
}

/// Insert one point: carve out the bad-triangle cavity and re-triangulate
/// its boundary against the point
fn insert_point(triangles: &mut Vec<Triangle>, point: Vertex) -> Result<()> {
    let mut cavity_edges = Vec::new();
    let mut kept = Vec::with_capacity(triangles.len());

    for triangle in triangles.drain(..) {
        if triangle.in_circumcircle(point) {
            cavity_edges.extend(triangle.edges());
        } else {
            kept.push(triangle);
        }
    }
    *triangles = kept;

    for edge in boundary_edges(cavity_edges) {
        triangles.push(Triangle::new(edge.a(), edge.b(), point)?);
    }

    Ok(())
}

/// Retain only edges appearing exactly once across the bad triangles
///
/// An edge shared by two bad triangles is interior to the cavity; the
/// symmetric edge equality makes the two orientations count as one.
fn boundary_edges(edges: Vec<Edge>) -> Vec<Edge> {
    let mut counts: HashMap<_, u32> = HashMap::new();
    for edge in &edges {
        *counts.entry(edge.key()).or_insert(0) += 1;
    }

    edges
        .into_iter()
        .filter(|edge| counts[&edge.key()] == 1)
        .collect()
}
