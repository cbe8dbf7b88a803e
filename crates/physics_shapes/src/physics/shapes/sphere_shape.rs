//! Sphere collision shape

use super::aabb::Aabb;
use super::error::{require_positive, ShapeError};
use crate::foundation::math::{Transform, Vec3};

/// A sphere centered on its local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    radius: f32,
}

impl SphereShape {
    /// Creates a sphere; the radius must be positive and finite
    pub fn new(radius: f32) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: require_positive("sphere radius", radius)?,
        })
    }

    /// Radius in local units
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Bounds in the shape's own space
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(Vec3::zeros(), Vec3::repeat(self.radius))
    }

    /// Bounds after uniform `scale`, then `transform`
    pub fn aabb(&self, transform: &Transform, scale: f32) -> Aabb {
        Aabb::from_center_half_extents(transform.position, Vec3::repeat(self.radius * scale.abs()))
    }

    /// Diagonal of the inertia tensor for a solid sphere of `mass`
    pub fn local_inertia(&self, mass: f32) -> Vec3 {
        Vec3::repeat(0.4 * mass * self.radius * self.radius)
    }

    /// Enclosed volume
    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * std::f32::consts::PI * self.radius.powi(3)
    }
}
