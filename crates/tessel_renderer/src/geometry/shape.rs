/// A shape request: which primitive family plus its raw (unclamped)
/// parameters. `build` clamps and generates.
use glam::Vec3;

use super::{primitives, MeshBuilder};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cube {
        size: f32,
    },
    Cuboid {
        dimensions: Vec3,
    },
    Cone {
        radius: f32,
        height: f32,
        subdivisions: u32,
    },
    Cylinder {
        radius: f32,
        height: f32,
        subdivisions: u32,
    },
    Tube {
        outer_radius: f32,
        inner_radius: f32,
        height: f32,
        subdivisions: u32,
    },
    Torus {
        outer_radius: f32,
        inner_radius: f32,
        subdivisions_a: u32,
        subdivisions_b: u32,
    },
    Sphere {
        radius: f32,
        subdivisions: u32,
    },
}

impl Shape {
    /// Generates the positions for this shape.
    pub fn build(&self) -> MeshBuilder {
        match *self {
            Shape::Cube { size } => primitives::cube(size),
            Shape::Cuboid { dimensions } => primitives::cuboid(dimensions),
            Shape::Cone { radius, height, subdivisions } => {
                primitives::cone(radius, height, subdivisions)
            }
            Shape::Cylinder { radius, height, subdivisions } => {
                primitives::cylinder(radius, height, subdivisions)
            }
            Shape::Tube { outer_radius, inner_radius, height, subdivisions } => {
                primitives::tube(outer_radius, inner_radius, height, subdivisions)
            }
            Shape::Torus { outer_radius, inner_radius, subdivisions_a, subdivisions_b } => {
                primitives::torus(outer_radius, inner_radius, subdivisions_a, subdivisions_b)
            }
            Shape::Sphere { radius, subdivisions } => primitives::sphere(radius, subdivisions),
        }
    }

    /// Short name, used as the GPU buffer label.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Cube { .. } => "Cube",
            Shape::Cuboid { .. } => "Cuboid",
            Shape::Cone { .. } => "Cone",
            Shape::Cylinder { .. } => "Cylinder",
            Shape::Tube { .. } => "Tube",
            Shape::Torus { .. } => "Torus",
            Shape::Sphere { .. } => "Sphere",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_shapes() -> Vec<Shape> {
        vec![
            Shape::Cube { size: 1.0 },
            Shape::Cuboid { dimensions: Vec3::new(1.0, 2.0, 3.0) },
            Shape::Cone { radius: 1.0, height: 2.0, subdivisions: 7 },
            Shape::Cylinder { radius: 1.0, height: 2.0, subdivisions: 7 },
            Shape::Tube { outer_radius: 1.0, inner_radius: 0.5, height: 1.0, subdivisions: 7 },
            Shape::Torus { outer_radius: 1.0, inner_radius: 0.5, subdivisions_a: 7, subdivisions_b: 5 },
            Shape::Sphere { radius: 1.0, subdivisions: 4 },
            Shape::Sphere { radius: 1.0, subdivisions: 0 },
        ]
    }

    #[test]
    fn every_shape_is_a_triangle_soup() {
        for shape in all_shapes() {
            let b = shape.build();
            assert!(!b.is_empty(), "{} is empty", shape.name());
            assert_eq!(b.vertex_count() % 3, 0, "{}", shape.name());
        }
    }

    #[test]
    fn build_dispatches_to_the_generator() {
        let shape = Shape::Tube { outer_radius: 2.0, inner_radius: 1.0, height: 0.5, subdivisions: 9 };
        assert_eq!(shape.build(), primitives::tube(2.0, 1.0, 0.5, 9));
    }
}
