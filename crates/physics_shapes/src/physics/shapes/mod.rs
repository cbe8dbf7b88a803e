//! Collision shape descriptors
//!
//! Shapes are immutable geometric descriptions handed to a physics world,
//! which later derives mass, inertia and collision response from them.
//! Everything is stored in model space; world-space bounds are computed on
//! demand from a [`Transform`] and a uniform scale.
//!
//! # Key Types
//!
//! - [`CollisionShape`] - Closed set of shape variants
//! - [`BoxShape`], [`SphereShape`], [`ConvexHullShape`], [`CompoundShape`] - One type per variant
//! - [`Aabb`] - Bounds reported by every shape
//! - [`ShapeError`] - Why a shape could not be built

pub mod aabb;
pub mod box_shape;
pub mod compound_shape;
pub mod convex_hull_shape;
pub mod error;
pub mod sphere_shape;

use std::fmt;

pub use aabb::Aabb;
pub use box_shape::BoxShape;
pub use compound_shape::{CompoundChild, CompoundShape};
pub use convex_hull_shape::{ConvexHullShape, DEFAULT_DEGENERACY_TOLERANCE, MIN_HULL_VERTICES};
pub use error::ShapeError;
pub use sphere_shape::SphereShape;

use crate::foundation::math::{Quat, Transform, Vec3};

/// Discriminant of a [`CollisionShape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`BoxShape`]
    Box,
    /// [`ConvexHullShape`]
    ConvexHull,
    /// [`CompoundShape`]
    Compound,
    /// [`SphereShape`]
    Sphere,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Box => "box",
            Self::ConvexHull => "convex hull",
            Self::Compound => "compound",
            Self::Sphere => "sphere",
        })
    }
}

/// Collision shape types (stored in MODEL SPACE)
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    /// Box given by full extents
    Box(BoxShape),
    /// Convex hull given by its points
    ConvexHull(ConvexHullShape),
    /// Collection of placed child shapes
    Compound(CompoundShape),
    /// Sphere given by its radius
    Sphere(SphereShape),
}

impl CollisionShape {
    /// Which variant this is
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Box(_) => ShapeKind::Box,
            Self::ConvexHull(_) => ShapeKind::ConvexHull,
            Self::Compound(_) => ShapeKind::Compound,
            Self::Sphere(_) => ShapeKind::Sphere,
        }
    }

    /// Bounds in the shape's own space
    pub fn local_aabb(&self) -> Aabb {
        match self {
            Self::Box(shape) => shape.local_aabb(),
            Self::ConvexHull(shape) => shape.local_aabb(),
            Self::Compound(shape) => shape.local_aabb(),
            Self::Sphere(shape) => shape.local_aabb(),
        }
    }

    /// Bounds after uniform `scale`, then `transform`
    pub fn aabb(&self, transform: &Transform, scale: f32) -> Aabb {
        match self {
            Self::Box(shape) => shape.aabb(transform, scale),
            Self::ConvexHull(shape) => shape.aabb(transform, scale),
            Self::Compound(shape) => shape.aabb(transform, scale),
            Self::Sphere(shape) => shape.aabb(transform, scale),
        }
    }

    /// New shape rotated about its local origin; `self` is left untouched
    #[must_use]
    pub fn rotated(&self, rotation: &Quat) -> CollisionShape {
        match self {
            Self::Box(shape) => Self::Box(shape.rotated(rotation)),
            Self::ConvexHull(shape) => Self::ConvexHull(shape.rotated(rotation)),
            Self::Compound(shape) => Self::Compound(shape.rotated(rotation)),
            Self::Sphere(shape) => Self::Sphere(*shape),
        }
    }

    /// Diagonal of the local inertia tensor for the given mass
    pub fn local_inertia(&self, mass: f32) -> Vec3 {
        match self {
            Self::Box(shape) => shape.local_inertia(mass),
            Self::ConvexHull(shape) => shape.local_inertia(mass),
            Self::Compound(shape) => shape.local_inertia(mass),
            Self::Sphere(shape) => shape.local_inertia(mass),
        }
    }

    /// Enclosed volume (approximate for hulls and compounds)
    pub fn volume(&self) -> f32 {
        match self {
            Self::Box(shape) => shape.volume(),
            Self::ConvexHull(shape) => shape.volume(),
            Self::Compound(shape) => shape.volume(),
            Self::Sphere(shape) => shape.volume(),
        }
    }

    /// The box, if this is one
    pub fn as_box(&self) -> Option<&BoxShape> {
        match self {
            Self::Box(shape) => Some(shape),
            _ => None,
        }
    }

    /// The convex hull, if this is one
    pub fn as_convex_hull(&self) -> Option<&ConvexHullShape> {
        match self {
            Self::ConvexHull(shape) => Some(shape),
            _ => None,
        }
    }

    /// The compound, if this is one
    pub fn as_compound(&self) -> Option<&CompoundShape> {
        match self {
            Self::Compound(shape) => Some(shape),
            _ => None,
        }
    }

    /// Mutable access to the compound, for adding children after creation
    pub fn as_compound_mut(&mut self) -> Option<&mut CompoundShape> {
        match self {
            Self::Compound(shape) => Some(shape),
            _ => None,
        }
    }

    /// The sphere, if this is one
    pub fn as_sphere(&self) -> Option<&SphereShape> {
        match self {
            Self::Sphere(shape) => Some(shape),
            _ => None,
        }
    }
}

impl From<BoxShape> for CollisionShape {
    fn from(shape: BoxShape) -> Self {
        Self::Box(shape)
    }
}

impl From<ConvexHullShape> for CollisionShape {
    fn from(shape: ConvexHullShape) -> Self {
        Self::ConvexHull(shape)
    }
}

impl From<CompoundShape> for CollisionShape {
    fn from(shape: CompoundShape) -> Self {
        Self::Compound(shape)
    }
}

impl From<SphereShape> for CollisionShape {
    fn from(shape: SphereShape) -> Self {
        Self::Sphere(shape)
    }
}
