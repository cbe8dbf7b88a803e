//! Data-driven shape descriptions
//!
//! Game content declares colliders in TOML or RON files. A [`ShapeDescriptor`]
//! is the serialized form of one shape and is turned into a real
//! [`CollisionShape`] only through a [`CollisionShapeFactory`], so file input
//! gets exactly the validation that code input gets. Unknown keys are parse
//! errors, so a misspelled field cannot silently fall back to its default.
//!
//! ```toml
//! [shapes.crate]
//! type = "unit_cube"
//!
//! [shapes.ship]
//! type = "compound"
//!
//! [[shapes.ship.children]]
//! position = [0.0, 0.0, 2.0]
//! shape = { type = "sphere", radius = 1.0 }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::factory::CollisionShapeFactory;
use super::shapes::{CollisionShape, ShapeError};
use crate::config::Config;
use crate::foundation::math::{constants::DEG_TO_RAD, Quat, Transform, Vec3};

/// Serialized description of a single collision shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ShapeDescriptor {
    /// Box with full extents
    Box {
        /// Width, height and depth
        extents: [f32; 3],
    },
    /// Box with extents of one
    UnitCube,
    /// Sphere
    Sphere {
        /// Radius
        radius: f32,
    },
    /// Convex hull over a point cloud
    ConvexHull {
        /// Hull points in insertion order
        vertices: Vec<[f32; 3]>,
    },
    /// Compound of placed children
    Compound {
        /// Child shapes in insertion order
        #[serde(default)]
        children: Vec<ChildDescriptor>,
    },
}

/// A placed child of a compound descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildDescriptor {
    /// Offset from the compound's origin
    #[serde(default)]
    pub position: [f32; 3],
    /// Roll, pitch and yaw in degrees
    #[serde(default)]
    pub rotation_degrees: [f32; 3],
    /// The child's geometry
    pub shape: ShapeDescriptor,
}

impl ChildDescriptor {
    /// Placement of the child as a rigid transform
    pub fn transform(&self) -> Transform {
        let [roll, pitch, yaw] = self.rotation_degrees.map(|deg| deg * DEG_TO_RAD);
        Transform::from_position_rotation(
            Vec3::from(self.position),
            Quat::from_euler_angles(roll, pitch, yaw),
        )
    }
}

impl ShapeDescriptor {
    /// Builds the described shape with `factory`
    ///
    /// Errors inside compound children are tagged with the child index.
    pub fn build<F>(&self, factory: &F) -> Result<CollisionShape, ShapeError>
    where
        F: CollisionShapeFactory + ?Sized,
    {
        let shape = match self {
            Self::Box { extents } => factory.new_box(Vec3::from(*extents))?.into(),
            Self::UnitCube => factory.new_unit_cube()?.into(),
            Self::Sphere { radius } => factory.new_sphere(*radius)?.into(),
            Self::ConvexHull { vertices } => factory
                .new_convex_hull(vertices.iter().copied().map(Vec3::from).collect())?
                .into(),
            Self::Compound { children } => {
                let mut compound = factory.new_compound_shape();
                for (index, child) in children.iter().enumerate() {
                    let shape = child
                        .shape
                        .build(factory)
                        .map_err(|e| e.in_shape(format!("child {index}")))?;
                    compound.add_child_shape(child.transform(), shape);
                }
                compound.into()
            }
        };
        Ok(shape)
    }
}

/// Named collection of shape descriptors, loadable from TOML or RON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeSet {
    /// Descriptors keyed by name
    #[serde(default)]
    pub shapes: BTreeMap<String, ShapeDescriptor>,
}

impl Config for ShapeSet {}

impl ShapeSet {
    /// Adds or replaces a named descriptor
    pub fn insert(&mut self, name: impl Into<String>, descriptor: ShapeDescriptor) {
        self.shapes.insert(name.into(), descriptor);
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the set has no descriptors
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Builds every shape, stopping at the first failure
    ///
    /// The error names the shape that failed.
    pub fn build_all<F>(&self, factory: &F) -> Result<BTreeMap<String, CollisionShape>, ShapeError>
    where
        F: CollisionShapeFactory + ?Sized,
    {
        self.shapes
            .iter()
            .map(|(name, descriptor)| {
                descriptor
                    .build(factory)
                    .map(|shape| (name.clone(), shape))
                    .map_err(|e| e.in_shape(name.as_str()))
            })
            .collect()
    }
}
