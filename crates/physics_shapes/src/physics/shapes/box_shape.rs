//! Box collision shape

use super::aabb::Aabb;
use super::error::{require_positive, ShapeError};
use crate::foundation::math::{abs_matrix, Quat, Transform, Vec3};

/// A box centered on its local origin
///
/// Stores the **full** extents (width, height, depth), not half extents.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    extents: Vec3,
}

impl BoxShape {
    /// Creates a box with the given full extents
    ///
    /// Every component must be positive and finite.
    pub fn new(extents: Vec3) -> Result<Self, ShapeError> {
        require_positive("box extent x", extents.x)?;
        require_positive("box extent y", extents.y)?;
        require_positive("box extent z", extents.z)?;
        Ok(Self { extents })
    }

    /// Full extents along each axis
    pub fn extents(&self) -> Vec3 {
        self.extents
    }

    /// Half extents along each axis
    pub fn half_extents(&self) -> Vec3 {
        self.extents * 0.5
    }

    /// Bounds in the shape's own space
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(Vec3::zeros(), self.half_extents())
    }

    /// Bounds after uniform `scale`, then `transform`
    pub fn aabb(&self, transform: &Transform, scale: f32) -> Aabb {
        self.local_aabb().transformed(transform, scale)
    }

    /// Axis-aligned box enclosing this box after `rotation`
    ///
    /// Boxes have no orientation of their own, so the rotated shape is
    /// widened to stay axis aligned.
    #[must_use]
    pub fn rotated(&self, rotation: &Quat) -> BoxShape {
        let m = abs_matrix(&rotation.to_rotation_matrix().into_inner());
        BoxShape {
            extents: m * self.extents,
        }
    }

    /// Diagonal of the inertia tensor for a solid box of `mass`
    pub fn local_inertia(&self, mass: f32) -> Vec3 {
        box_inertia(self.extents, mass)
    }

    /// Enclosed volume
    pub fn volume(&self) -> f32 {
        self.extents.x * self.extents.y * self.extents.z
    }
}

/// Inertia diagonal of a solid box with full extents `l`
pub(crate) fn box_inertia(l: Vec3, mass: f32) -> Vec3 {
    let (x2, y2, z2) = (l.x * l.x, l.y * l.y, l.z * l.z);
    Vec3::new(y2 + z2, x2 + z2, x2 + y2) * (mass / 12.0)
}
