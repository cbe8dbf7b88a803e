//! Compound collision shape
//!
//! A compound aggregates child shapes, each placed by a local transform, into
//! one logical collider. It is the only shape that can change after the
//! factory hands it out: callers grow it with [`CompoundShape::add_child_shape`].

use super::aabb::Aabb;
use super::box_shape::box_inertia;
use super::CollisionShape;
use crate::foundation::math::{Quat, Transform, Vec3};

/// A child of a compound shape
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundChild {
    /// Placement of the child relative to the compound's origin
    pub transform: Transform,
    /// The child's geometry
    pub shape: CollisionShape,
}

/// A growable collection of child shapes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundShape {
    children: Vec<CompoundChild>,
}

impl CompoundShape {
    /// Creates an empty compound
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child placed by `transform`
    pub fn add_child_shape(&mut self, transform: Transform, shape: impl Into<CollisionShape>) {
        self.children.push(CompoundChild {
            transform,
            shape: shape.into(),
        });
    }

    /// Children in insertion order
    pub fn children(&self) -> &[CompoundChild] {
        &self.children
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether the compound has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Removes and returns the child at `index`, keeping the order of the rest
    pub fn remove_child(&mut self, index: usize) -> Option<CompoundChild> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Removes every child
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Bounds of all children in the compound's own space
    ///
    /// An empty compound reports a degenerate box at the origin.
    pub fn local_aabb(&self) -> Aabb {
        self.aabb(&Transform::identity(), 1.0)
    }

    /// Bounds after uniform `scale`, then `transform`
    ///
    /// Each child is bounded in world space on its own, which gives a tighter
    /// box than rotating the local bounds.
    pub fn aabb(&self, transform: &Transform, scale: f32) -> Aabb {
        self.children
            .iter()
            .map(|child| {
                let placed = Transform::from_position_rotation(
                    child.transform.position * scale,
                    child.transform.rotation,
                );
                child.shape.aabb(&transform.combine(&placed), scale)
            })
            .reduce(|acc, aabb| acc.union(&aabb))
            .unwrap_or_else(|| Aabb::point(transform.position))
    }

    /// New compound with every child placement rotated about the origin
    #[must_use]
    pub fn rotated(&self, rotation: &Quat) -> CompoundShape {
        let turn = Transform::from_rotation(*rotation);
        CompoundShape {
            children: self
                .children
                .iter()
                .map(|child| CompoundChild {
                    transform: turn.combine(&child.transform),
                    shape: child.shape.clone(),
                })
                .collect(),
        }
    }

    /// Inertia diagonal, approximated by the compound's bounding box
    pub fn local_inertia(&self, mass: f32) -> Vec3 {
        if self.is_empty() {
            return Vec3::zeros();
        }
        box_inertia(self.local_aabb().extents(), mass)
    }

    /// Sum of the children's volumes (overlap is counted twice)
    pub fn volume(&self) -> f32 {
        self.children.iter().map(|child| child.shape.volume()).sum()
    }
}
