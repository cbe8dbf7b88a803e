//! # Physics Shapes
//!
//! Collision shape construction for the engine's physics subsystem.
//!
//! ## Features
//!
//! - **Shape Factory**: One trait for building boxes, spheres, convex hulls and compounds
//! - **Validation**: Non-positive sizes and degenerate hulls are rejected with typed errors
//! - **Data Driven**: Shape sets load from TOML or RON and build through the factory
//! - **Thread Safe**: Factories are stateless and can be shared between threads
//!
//! ## Quick Start
//!
//! ```rust
//! use physics_shapes::prelude::*;
//!
//! fn main() -> Result<(), ShapeError> {
//!     let factory = DefaultShapeFactory::new();
//!
//!     let mut ship = factory.new_compound_shape();
//!     ship.add_child_shape(Transform::identity(), factory.new_box(Vec3::new(4.0, 1.0, 2.0))?);
//!     ship.add_child_shape(
//!         Transform::from_position(Vec3::new(0.0, 0.0, 2.0)),
//!         factory.new_sphere(1.0)?,
//!     );
//!
//!     let mut registry = ShapeRegistry::new();
//!     let handle = registry.insert_named("ship", ship);
//!     assert_eq!(registry.get(handle).map(CollisionShape::kind), Some(ShapeKind::Compound));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        foundation::{
            collections::ShapeHandle,
            math::{Quat, Transform, Vec3},
        },
        physics::{
            Aabb,
            BoxShape,
            CollisionShape,
            CollisionShapeFactory,
            CompoundShape,
            ConvexHullShape,
            DefaultShapeFactory,
            HullValidation,
            ShapeDescriptor,
            ShapeError,
            ShapeFactoryConfig,
            ShapeKind,
            ShapeRegistry,
            ShapeSet,
            SphereShape,
        },
    };
}
