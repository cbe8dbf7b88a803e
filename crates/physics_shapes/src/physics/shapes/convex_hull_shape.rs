//! Convex hull collision shape
//!
//! The hull is stored as the point cloud it was built from, in the order the
//! caller supplied it. No hull is computed here; downstream consumers build
//! faces from the points. What this module does check is whether the points
//! can enclose a volume at all: at least four finite points that do not all
//! lie on one plane.

use super::aabb::Aabb;
use super::box_shape::box_inertia;
use super::error::ShapeError;
use crate::foundation::math::{is_finite_vec, Quat, Transform, Vec3};

/// Default relative tolerance for degenerate vertex sets
///
/// Distances are compared against this fraction of the point cloud's
/// bounding diagonal.
pub const DEFAULT_DEGENERACY_TOLERANCE: f32 = 1e-5;

/// Smallest number of points that can enclose a volume
pub const MIN_HULL_VERTICES: usize = 4;

/// A convex hull described by its point cloud
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHullShape {
    vertices: Vec<Vec3>,
}

impl ConvexHullShape {
    /// Creates a hull and checks that it encloses a volume
    pub fn new(vertices: Vec<Vec3>) -> Result<Self, ShapeError> {
        Self::with_tolerance(vertices, DEFAULT_DEGENERACY_TOLERANCE)
    }

    /// Creates a hull, checking for degeneracy with the given relative tolerance
    pub fn with_tolerance(vertices: Vec<Vec3>, tolerance: f32) -> Result<Self, ShapeError> {
        let hull = Self::new_deferred(vertices)?;
        hull.validate(tolerance)?;
        Ok(hull)
    }

    /// Creates a hull without the volume check
    ///
    /// Coordinates must still be finite. Call [`validate`](Self::validate)
    /// before the hull is first used if the input is untrusted.
    pub fn new_deferred(vertices: Vec<Vec3>) -> Result<Self, ShapeError> {
        if let Some(index) = vertices.iter().position(|v| !is_finite_vec(v)) {
            return Err(ShapeError::InvalidArgument(format!(
                "convex hull vertex {index} is not finite: {:?}",
                vertices[index]
            )));
        }
        Ok(Self { vertices })
    }

    /// Checks that the points enclose a volume
    ///
    /// Fails with [`ShapeError::InvalidGeometry`] when there are fewer than
    /// four points, or when they are coincident, collinear or coplanar
    /// within `tolerance` times the bounding diagonal.
    pub fn validate(&self, tolerance: f32) -> Result<(), ShapeError> {
        if self.vertices.len() < MIN_HULL_VERTICES {
            return Err(ShapeError::InvalidGeometry(format!(
                "convex hull needs at least {MIN_HULL_VERTICES} vertices, got {}",
                self.vertices.len()
            )));
        }

        // Measure in units of the largest coordinate so squared lengths stay in range
        let scale = self
            .vertices
            .iter()
            .flat_map(|v| v.iter())
            .fold(0.0_f32, |max, c| max.max(c.abs()));
        if scale <= 0.0 {
            return Err(ShapeError::InvalidGeometry("convex hull vertices are coincident".to_string()));
        }
        let points: Vec<Vec3> = self.vertices.iter().map(|v| v / scale).collect();

        let diagonal = Aabb::from_points(points.iter().copied())
            .unwrap_or_default()
            .extents()
            .norm();
        if diagonal <= 0.0 {
            return Err(ShapeError::InvalidGeometry("convex hull vertices are coincident".to_string()));
        }
        let limit = tolerance.max(0.0) * diagonal;

        let origin = points[0];

        // Farthest point from the first one spans a line
        let (far, far_distance) = farthest_by(&points, |v| (v - origin).norm());
        if far_distance <= limit {
            return Err(ShapeError::InvalidGeometry("convex hull vertices are coincident".to_string()));
        }
        let axis = (far - origin) / far_distance;

        // Farthest point from that line spans a plane
        let (side, side_distance) = farthest_by(&points, |v| (v - origin).cross(&axis).norm());
        if side_distance <= limit {
            return Err(ShapeError::InvalidGeometry("convex hull vertices are collinear".to_string()));
        }
        let normal = (far - origin).cross(&(side - origin)).normalize();

        // Any point off that plane gives the hull a volume
        let (_, height) = farthest_by(&points, |v| (v - origin).dot(&normal).abs());
        if height <= limit {
            return Err(ShapeError::InvalidGeometry("convex hull vertices are coplanar".to_string()));
        }

        Ok(())
    }

    /// Points in insertion order
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Number of stored points
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gives the points back to the caller
    pub fn into_vertices(self) -> Vec<Vec3> {
        self.vertices
    }

    /// Bounds in the shape's own space (a point at the origin when empty)
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied()).unwrap_or_default()
    }

    /// Exact bounds of the points after uniform `scale`, then `transform`
    pub fn aabb(&self, transform: &Transform, scale: f32) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| transform.transform_point(v * scale)))
            .unwrap_or_else(|| Aabb::point(transform.position))
    }

    /// New hull with every point rotated about the local origin
    #[must_use]
    pub fn rotated(&self, rotation: &Quat) -> ConvexHullShape {
        ConvexHullShape {
            vertices: self.vertices.iter().map(|v| rotation * v).collect(),
        }
    }

    /// Inertia diagonal, approximated by the hull's bounding box
    pub fn local_inertia(&self, mass: f32) -> Vec3 {
        box_inertia(self.local_aabb().extents(), mass)
    }

    /// Volume of the bounding box (an upper bound of the hull volume)
    pub fn volume(&self) -> f32 {
        let e = self.local_aabb().extents();
        e.x * e.y * e.z
    }
}

fn farthest_by(points: &[Vec3], metric: impl Fn(&Vec3) -> f32) -> (Vec3, f32) {
    points
        .iter()
        .map(|v| (*v, metric(v)))
        .fold((points[0], 0.0), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
}
