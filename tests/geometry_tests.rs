// Host-side tests for mesh generation.

#![allow(dead_code)]
mod geometry {
    include!("../src/geometry.rs");
}

use geometry::*;
use glam::Vec3;

fn palette() -> Vec<Vec3> {
    vec![Vec3::X, Vec3::Y, Vec3::Z]
}

#[test]
fn tetrahedron_has_four_faces() {
    let shape = Shape::Tetrahedron { radius: 2.0 };
    let tris = shape.triangles(&palette());
    assert_eq!(shape.face_count(), 4);
    assert_eq!(tris.len(), 12);
}

#[test]
fn cuboid_has_six_faces() {
    let shape = Shape::Cuboid { size: 2.5 };
    let tris = shape.triangles(&palette());
    assert_eq!(shape.face_count(), 6);
    assert_eq!(tris.len(), 36);
}

#[test]
fn tetrahedron_vertices_lie_on_radius() {
    let tris = Shape::Tetrahedron { radius: 2.0 }.triangles(&[]);
    for v in &tris {
        let len = Vec3::from(v.position).length();
        assert!((len - 2.0).abs() < 1e-5, "vertex at {}", len);
    }
}

#[test]
fn cuboid_vertices_lie_on_half_extent() {
    let tris = Shape::Cuboid { size: 2.5 }.triangles(&[]);
    for v in &tris {
        let p = Vec3::from(v.position);
        assert!((p.abs().max_element() - 1.25).abs() < 1e-5);
        assert!((p.x.abs() - 1.25).abs() < 1e-5);
        assert!((p.y.abs() - 1.25).abs() < 1e-5);
        assert!((p.z.abs() - 1.25).abs() < 1e-5);
    }
}

#[test]
fn normals_are_unit_and_face_outward() {
    let shapes = [Shape::Tetrahedron { radius: 1.0 }, Shape::Cuboid { size: 1.0 }];
    for shape in shapes {
        for tri in shape.triangles(&palette()).chunks_exact(3) {
            let n = Vec3::from(tri[0].normal);
            assert!((n.length() - 1.0).abs() < 1e-5);
            let centroid = tri
                .iter()
                .map(|v| Vec3::from(v.position))
                .fold(Vec3::ZERO, |a, b| a + b)
                / 3.0;
            assert!(n.dot(centroid) > 0.0, "{:?} has an inward face", shape);
            assert!(tri.iter().all(|v| v.normal == tri[0].normal));
        }
    }
}

#[test]
fn face_colors_cycle_through_palette() {
    let colors = palette();
    let tris = Shape::Cuboid { size: 1.0 }.triangles(&colors);
    // two triangles per cube face
    for (face, quad) in tris.chunks_exact(6).enumerate() {
        let expected = colors[face % colors.len()].to_array();
        assert!(quad.iter().all(|v| v.color == expected));
    }
}

#[test]
fn empty_palette_paints_white() {
    let tris = Shape::Tetrahedron { radius: 1.0 }.triangles(&[]);
    assert!(tris.iter().all(|v| v.color == [1.0, 1.0, 1.0]));
}

#[test]
fn scaled_shape_grows_uniformly() {
    assert_eq!(
        Shape::Tetrahedron { radius: 1.0 }.scaled(1.1),
        Shape::Tetrahedron { radius: 1.1 }
    );
    assert_eq!(
        Shape::Cuboid { size: 2.0 }.scaled(1.5),
        Shape::Cuboid { size: 3.0 }
    );
}
