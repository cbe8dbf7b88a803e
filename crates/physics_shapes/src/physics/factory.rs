//! Collision shape factory
//!
//! [`CollisionShapeFactory`] is the single entry point physics code uses to
//! build shapes. Implementations hold no shared mutable state, so one factory
//! can serve any number of threads, and a rejected call never affects later
//! ones.

use serde::{Deserialize, Serialize};

use super::shapes::{
    BoxShape, CompoundShape, ConvexHullShape, ShapeError, SphereShape,
    DEFAULT_DEGENERACY_TOLERANCE,
};
use crate::config::Config;
use crate::foundation::math::Vec3;

/// Factory interface to create new collision shapes
pub trait CollisionShapeFactory: Send + Sync {
    /// Creates a new box shape with the given **full** extents
    fn new_box(&self, extents: Vec3) -> Result<BoxShape, ShapeError>;

    /// Creates a new convex hull shape from the given vertices
    ///
    /// The vertex list is moved into the returned shape.
    fn new_convex_hull(&self, vertices: Vec<Vec3>) -> Result<ConvexHullShape, ShapeError>;

    /// Creates a new box shape with unit extents, that is a cube with sides of length 1
    fn new_unit_cube(&self) -> Result<BoxShape, ShapeError> {
        self.new_box(Vec3::new(1.0, 1.0, 1.0))
    }

    /// Creates a new empty compound shape
    fn new_compound_shape(&self) -> CompoundShape;

    /// Creates a new sphere shape with the given radius
    fn new_sphere(&self, radius: f32) -> Result<SphereShape, ShapeError>;
}

/// When convex hull input is checked for degeneracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HullValidation {
    /// Reject degenerate point sets at creation
    #[default]
    Eager,
    /// Accept any finite point set; callers run
    /// [`ConvexHullShape::validate`] before first use
    Deferred,
}

/// Settings for [`DefaultShapeFactory`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeFactoryConfig {
    /// When to check convex hulls for degeneracy
    pub hull_validation: HullValidation,
    /// Relative tolerance for coincident, collinear and coplanar hull points
    pub degeneracy_tolerance: f32,
}

impl Default for ShapeFactoryConfig {
    fn default() -> Self {
        Self {
            hull_validation: HullValidation::Eager,
            degeneracy_tolerance: DEFAULT_DEGENERACY_TOLERANCE,
        }
    }
}

impl Config for ShapeFactoryConfig {}

/// Standard shape factory
///
/// Its only state is an immutable [`ShapeFactoryConfig`].
#[derive(Debug, Clone, Default)]
pub struct DefaultShapeFactory {
    config: ShapeFactoryConfig,
}

impl DefaultShapeFactory {
    /// Factory with default settings (eager hull validation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory with the given settings
    pub fn with_config(config: ShapeFactoryConfig) -> Self {
        log::debug!("Shape factory configured: {:?}", config);
        Self { config }
    }

    /// Current settings
    pub fn config(&self) -> &ShapeFactoryConfig {
        &self.config
    }
}

fn logged<T>(operation: &str, result: Result<T, ShapeError>) -> Result<T, ShapeError> {
    match &result {
        Ok(_) => log::trace!("{operation}: created"),
        Err(error) => log::debug!("{operation}: rejected ({error})"),
    }
    result
}

impl CollisionShapeFactory for DefaultShapeFactory {
    fn new_box(&self, extents: Vec3) -> Result<BoxShape, ShapeError> {
        logged("new_box", BoxShape::new(extents))
    }

    fn new_convex_hull(&self, vertices: Vec<Vec3>) -> Result<ConvexHullShape, ShapeError> {
        let result = match self.config.hull_validation {
            HullValidation::Eager => {
                ConvexHullShape::with_tolerance(vertices, self.config.degeneracy_tolerance)
            }
            HullValidation::Deferred => ConvexHullShape::new_deferred(vertices),
        };
        logged("new_convex_hull", result)
    }

    fn new_compound_shape(&self) -> CompoundShape {
        log::trace!("new_compound_shape: created");
        CompoundShape::new()
    }

    fn new_sphere(&self, radius: f32) -> Result<SphereShape, ShapeError> {
        logged("new_sphere", SphereShape::new(radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use crate::foundation::logging;
    use crate::physics::shapes::CollisionShape;

    fn unit_cube_corners() -> Vec<Vec3> {
        (0..8)
            .map(|i| {
                Vec3::new(
                    f32::from(u8::from(i & 1 != 0)),
                    f32::from(u8::from(i & 2 != 0)),
                    f32::from(u8::from(i & 4 != 0)),
                )
            })
            .collect()
    }

    #[test]
    fn test_box_keeps_extents_exactly() {
        logging::try_init_for_tests();
        let factory = DefaultShapeFactory::new();
        for extents in [Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.001, 1e4, 0.3)] {
            assert_eq!(factory.new_box(extents).unwrap().extents(), extents);
        }
    }

    #[test]
    fn test_unit_cube_equals_box_of_ones() {
        let factory = DefaultShapeFactory::new();
        assert_eq!(
            factory.new_unit_cube().unwrap(),
            factory.new_box(Vec3::new(1.0, 1.0, 1.0)).unwrap()
        );
    }

    #[test]
    fn test_sphere_radius_and_rejection() {
        let factory = DefaultShapeFactory::new();
        assert_eq!(factory.new_sphere(0.75).unwrap().radius(), 0.75);
        assert!(matches!(factory.new_sphere(0.0), Err(ShapeError::InvalidArgument(_))));
        assert!(matches!(factory.new_sphere(-2.0), Err(ShapeError::InvalidArgument(_))));
    }

    #[test]
    fn test_factory_is_reusable_after_failure() {
        let factory = DefaultShapeFactory::new();
        assert!(factory.new_box(Vec3::new(-1.0, 1.0, 1.0)).is_err());
        assert!(factory.new_convex_hull(vec![Vec3::zeros()]).is_err());
        assert!(factory.new_box(Vec3::new(1.0, 1.0, 1.0)).is_ok());
        assert!(factory.new_sphere(1.0).is_ok());
    }

    #[test]
    fn test_compound_starts_empty_and_is_independent() {
        let factory = DefaultShapeFactory::new();
        let mut first = factory.new_compound_shape();
        let second = factory.new_compound_shape();

        first.add_child_shape(Default::default(), factory.new_unit_cube().unwrap());
        assert_eq!(first.child_count(), 1);
        assert_eq!(second.child_count(), 0);
    }

    #[test]
    fn test_convex_hull_preserves_cube_corners() {
        let factory = DefaultShapeFactory::new();
        let corners = unit_cube_corners();
        let hull = factory.new_convex_hull(corners.clone()).unwrap();

        assert_eq!(hull.vertex_count(), 8);
        assert_eq!(hull.vertices(), corners.as_slice());
    }

    #[test]
    fn test_eager_rejects_coplanar_deferred_accepts() {
        let flat: Vec<Vec3> = unit_cube_corners().into_iter().filter(|v| v.z == 0.0).collect();

        let eager = DefaultShapeFactory::new();
        assert!(matches!(
            eager.new_convex_hull(flat.clone()),
            Err(ShapeError::InvalidGeometry(_))
        ));

        let deferred = DefaultShapeFactory::with_config(ShapeFactoryConfig {
            hull_validation: HullValidation::Deferred,
            ..Default::default()
        });
        let hull = deferred.new_convex_hull(flat).unwrap();
        assert_eq!(hull.vertex_count(), 4);
        assert!(hull.validate(deferred.config().degeneracy_tolerance).is_err());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let factory: Box<dyn CollisionShapeFactory> = Box::new(DefaultShapeFactory::new());
        let shape: CollisionShape = factory.new_unit_cube().unwrap().into();
        assert_eq!(shape.as_box().unwrap().extents(), Vec3::new(1.0, 1.0, 1.0));
    }

    /// Factory that doubles every box, to check the unit cube goes through `new_box`
    struct DoublingFactory(DefaultShapeFactory);

    impl CollisionShapeFactory for DoublingFactory {
        fn new_box(&self, extents: Vec3) -> Result<BoxShape, ShapeError> {
            self.0.new_box(extents * 2.0)
        }

        fn new_convex_hull(&self, vertices: Vec<Vec3>) -> Result<ConvexHullShape, ShapeError> {
            self.0.new_convex_hull(vertices)
        }

        fn new_compound_shape(&self) -> CompoundShape {
            self.0.new_compound_shape()
        }

        fn new_sphere(&self, radius: f32) -> Result<SphereShape, ShapeError> {
            self.0.new_sphere(radius)
        }
    }

    #[test]
    fn test_unit_cube_is_derived_from_new_box() {
        let factory = DoublingFactory(DefaultShapeFactory::new());
        assert_eq!(factory.new_unit_cube().unwrap().extents(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_concurrent_calls_match_sequential() {
        let factory = DefaultShapeFactory::new();
        let build = |i: usize| {
            let size = 1.0 + i as f32;
            (
                factory.new_box(Vec3::new(size, size * 2.0, size * 3.0)).unwrap(),
                factory.new_sphere(size).unwrap(),
                factory.new_convex_hull(unit_cube_corners()).unwrap(),
                factory.new_compound_shape(),
            )
        };

        let sequential: Vec<_> = (0..16).map(build).collect();
        let concurrent: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..16).map(|i| scope.spawn(move || build(i))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, concurrent);
    }

    #[test]
    fn test_config_parses_from_toml_and_ron() {
        let toml_text = "hull_validation = \"deferred\"\n";
        let from_toml = ShapeFactoryConfig::from_str_as(toml_text, ConfigFormat::Toml).unwrap();
        assert_eq!(from_toml.hull_validation, HullValidation::Deferred);
        assert_eq!(from_toml.degeneracy_tolerance, DEFAULT_DEGENERACY_TOLERANCE);

        let ron_text = "(hull_validation: eager, degeneracy_tolerance: 0.001)";
        let from_ron = ShapeFactoryConfig::from_str_as(ron_text, ConfigFormat::Ron).unwrap();
        assert_eq!(from_ron.hull_validation, HullValidation::Eager);
        assert_eq!(from_ron.degeneracy_tolerance, 0.001);

        let misspelled = "hull_validaton = \"deferred\"\n";
        assert!(matches!(
            ShapeFactoryConfig::from_str_as(misspelled, ConfigFormat::Toml),
            Err(crate::config::ConfigError::Parse(_))
        ));
    }
}
