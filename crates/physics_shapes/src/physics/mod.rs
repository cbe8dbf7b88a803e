//! Physics module for collision shape construction
//!
//! Shapes are built through a [`CollisionShapeFactory`], optionally from
//! data files via [`ShapeSet`], and kept by the caller (for example in a
//! [`ShapeRegistry`]). Collision detection and dynamics live elsewhere.

pub mod descriptor;
pub mod factory;
pub mod registry;
pub mod shapes;

pub use descriptor::{ChildDescriptor, ShapeDescriptor, ShapeSet};
pub use factory::{CollisionShapeFactory, DefaultShapeFactory, HullValidation, ShapeFactoryConfig};
pub use registry::ShapeRegistry;
pub use shapes::{
    Aabb,
    BoxShape,
    CollisionShape,
    CompoundChild,
    CompoundShape,
    ConvexHullShape,
    ShapeError,
    ShapeKind,
    SphereShape,
};
