//! Shape inspector
//!
//! Loads a shape set (TOML or RON), builds every shape through the default
//! factory and prints bounds, volume and unit-mass inertia for each one.
//!
//! Usage: `shape_inspector <shapes.toml|shapes.ron> [factory.toml|factory.ron]`

use physics_shapes::foundation::logging::{self, info, warn, LevelFilter};
use physics_shapes::prelude::*;

const USAGE: &str = "usage: shape_inspector <shapes.toml|shapes.ron> [factory.toml|factory.ron]";

fn format_vec(v: &Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

fn describe(shape: &CollisionShape) -> String {
    match shape {
        CollisionShape::Box(b) => format!("extents {}", format_vec(&b.extents())),
        CollisionShape::Sphere(s) => format!("radius {:.3}", s.radius()),
        CollisionShape::ConvexHull(h) => format!("{} vertices", h.vertex_count()),
        CollisionShape::Compound(c) => format!("{} children", c.child_count()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(LevelFilter::Info);

    let mut args = std::env::args().skip(1);
    let shapes_path = args.next().ok_or(USAGE)?;

    let config = match args.next() {
        Some(path) => {
            info!("Loading factory config from {}", path);
            ShapeFactoryConfig::load_from_file(&path)?
        }
        None => ShapeFactoryConfig::default(),
    };
    let factory = DefaultShapeFactory::with_config(config);

    info!("Loading shape set from {}", shapes_path);
    let set = ShapeSet::load_from_file(&shapes_path)?;
    if set.is_empty() {
        warn!("{} declares no shapes", shapes_path);
        return Ok(());
    }

    let mut registry = ShapeRegistry::new();
    for (name, shape) in set.build_all(&factory)? {
        registry.insert_named(name, shape);
    }
    info!("Built {} shapes", registry.len());

    let mut names: Vec<_> = registry.names().collect();
    names.sort_unstable_by_key(|(name, _)| *name);

    println!("=== Shape Summary ===");
    for (name, handle) in names {
        let Some(shape) = registry.get(handle) else {
            continue;
        };
        let aabb = shape.local_aabb();
        println!("{name} [{}]: {}", shape.kind(), describe(shape));
        println!("  aabb    {} .. {}", format_vec(&aabb.min), format_vec(&aabb.max));
        println!("  volume  {:.4}", shape.volume());
        println!("  inertia {} (unit mass)", format_vec(&shape.local_inertia(1.0)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn asset(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
    }

    #[test]
    fn test_sample_assets_load_and_build() {
        let config = ShapeFactoryConfig::load_from_file(asset("factory.ron")).unwrap();
        assert_eq!(config, ShapeFactoryConfig::default());

        let set = ShapeSet::load_from_file(asset("sample_shapes.toml")).unwrap();
        let shapes = set.build_all(&DefaultShapeFactory::with_config(config)).unwrap();

        assert_eq!(shapes.len(), 5);
        assert_eq!(shapes["crate"].kind(), ShapeKind::Box);
        assert_eq!(shapes["boulder"].kind(), ShapeKind::Sphere);
        assert_eq!(shapes["pillar"].kind(), ShapeKind::Box);
        assert_eq!(shapes["wedge"].kind(), ShapeKind::ConvexHull);
        assert_eq!(shapes["ship"].as_compound().unwrap().child_count(), 3);
    }

    #[test]
    fn test_describe() {
        let factory = DefaultShapeFactory::new();
        let cube: CollisionShape = factory.new_unit_cube().unwrap().into();
        assert_eq!(describe(&cube), "extents (1.000, 1.000, 1.000)");

        let ship: CollisionShape = factory.new_compound_shape().into();
        assert_eq!(describe(&ship), "0 children");
    }
}
