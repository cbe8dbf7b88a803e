//! Axis-aligned bounding boxes for collision shapes

use crate::foundation::math::{abs_matrix, Transform, Vec3};

/// An axis-aligned bounding box given by its minimum and maximum corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::point(Vec3::zeros())
    }
}

impl Aabb {
    /// Creates a box from its corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Degenerate box containing a single point
    pub fn point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Creates a box centered on `center` reaching `half_extents` along each axis
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest box enclosing all points, or `None` for an empty iterator
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::point(first), |acc, p| acc.union(&Self::point(p))))
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size along each axis
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half size along each axis
    pub fn half_extents(&self) -> Vec3 {
        self.extents() * 0.5
    }

    /// Smallest box enclosing both boxes
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Whether the point lies inside or on the boundary
    pub fn contains_point(&self, p: &Vec3) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// Whether two boxes overlap (touching counts)
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Bounds of this box after uniform `scale`, then `transform`
    ///
    /// The result is the tightest axis-aligned box around the rotated box:
    /// each half extent is the absolute rotation matrix applied to the
    /// original half extents.
    #[must_use]
    pub fn transformed(&self, transform: &Transform, scale: f32) -> Aabb {
        let center = transform.transform_point(self.center() * scale);
        let half = abs_matrix(&transform.rotation_matrix()) * (self.half_extents() * scale.abs());
        Aabb::from_center_half_extents(center, half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{constants::HALF_PI, Quat};
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points() {
        let aabb = Aabb::from_points([
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 4.0),
        ])
        .unwrap();

        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 4.0));
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_union_and_containment() {
        let a = Aabb::from_center_half_extents(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::from_center_half_extents(Vec3::new(3.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let merged = a.union(&b);

        assert_eq!(merged.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(merged.max, Vec3::new(4.0, 1.0, 1.0));
        assert!(merged.contains_point(&Vec3::new(2.0, 0.5, -0.5)));
        assert!(!a.contains_point(&Vec3::new(2.0, 0.0, 0.0)));
        assert!(!a.intersects(&b));
        assert!(merged.intersects(&b));
    }

    #[test]
    fn test_transformed_translation_and_scale() {
        let aabb = Aabb::from_center_half_extents(Vec3::zeros(), Vec3::new(1.0, 2.0, 3.0));
        let moved = aabb.transformed(&Transform::from_position(Vec3::new(10.0, 0.0, 0.0)), 2.0);

        assert_relative_eq!(moved.min, Vec3::new(8.0, -4.0, -6.0));
        assert_relative_eq!(moved.max, Vec3::new(12.0, 4.0, 6.0));
    }

    #[test]
    fn test_transformed_quarter_turn_swaps_axes() {
        let aabb = Aabb::from_center_half_extents(Vec3::zeros(), Vec3::new(1.0, 2.0, 3.0));
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), HALF_PI);
        let turned = aabb.transformed(&Transform::from_rotation(rotation), 1.0);

        assert_relative_eq!(turned.half_extents(), Vec3::new(3.0, 2.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_transformed_is_tight_for_any_rotation() {
        let aabb = Aabb::from_center_half_extents(Vec3::zeros(), Vec3::new(1.0, 2.0, 3.0));
        let rotation = Quat::from_euler_angles(0.3, -1.1, 0.7);
        let turned = aabb.transformed(&Transform::from_rotation(rotation), 1.0);

        let corners = Aabb::from_points((0..8).map(|i| {
            let sign = |bit: i32| if i & bit == 0 { -1.0 } else { 1.0 };
            rotation * Vec3::new(sign(1), 2.0 * sign(2), 3.0 * sign(4))
        }))
        .unwrap();
        assert_relative_eq!(turned.min, corners.min, epsilon = 1e-5);
        assert_relative_eq!(turned.max, corners.max, epsilon = 1e-5);
    }
}
