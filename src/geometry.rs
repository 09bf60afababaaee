use glam::Vec3;

/// Flat-shaded triangle vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Solid shapes the scenes are built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Regular tetrahedron whose vertices lie on a sphere of `radius`.
    Tetrahedron { radius: f32 },
    /// Axis-aligned cube with edge length `size`.
    Cuboid { size: f32 },
}

// Unit tetrahedron corners and counter-clockwise faces
const TETRA_CORNERS: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];
const TETRA_FACES: [[usize; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

// Cube faces as (normal, u, v) with u x v == normal, ordered +X -X +Y -Y +Z -Z
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

impl Shape {
    pub fn face_count(&self) -> usize {
        match self {
            Shape::Tetrahedron { .. } => TETRA_FACES.len(),
            Shape::Cuboid { .. } => CUBE_FACES.len(),
        }
    }

    /// Same shape grown by `factor`.
    pub fn scaled(&self, factor: f32) -> Shape {
        match *self {
            Shape::Tetrahedron { radius } => Shape::Tetrahedron {
                radius: radius * factor,
            },
            Shape::Cuboid { size } => Shape::Cuboid {
                size: size * factor,
            },
        }
    }

    /// Triangle list with one color per face, cycling through `face_colors`.
    /// An empty color list paints every face white.
    pub fn triangles(&self, face_colors: &[Vec3]) -> Vec<MeshVertex> {
        let color_for = |face: usize| {
            if face_colors.is_empty() {
                Vec3::ONE
            } else {
                face_colors[face % face_colors.len()]
            }
        };
        let mut out = Vec::with_capacity(self.face_count() * 6);
        match *self {
            Shape::Tetrahedron { radius } => {
                let corners = TETRA_CORNERS.map(|c| Vec3::from(c).normalize() * radius);
                for (face, idx) in TETRA_FACES.iter().enumerate() {
                    let (a, b, c) = (corners[idx[0]], corners[idx[1]], corners[idx[2]]);
                    push_triangle(&mut out, a, b, c, color_for(face));
                }
            }
            Shape::Cuboid { size } => {
                let h = size * 0.5;
                for (face, (n, u, v)) in CUBE_FACES.iter().enumerate() {
                    let (n, u, v) = (Vec3::from(*n), Vec3::from(*u), Vec3::from(*v));
                    let center = n * h;
                    let corner = |su: f32, sv: f32| center + (u * su + v * sv) * h;
                    let color = color_for(face);
                    push_triangle(
                        &mut out,
                        corner(-1.0, -1.0),
                        corner(1.0, -1.0),
                        corner(1.0, 1.0),
                        color,
                    );
                    push_triangle(
                        &mut out,
                        corner(-1.0, -1.0),
                        corner(1.0, 1.0),
                        corner(-1.0, 1.0),
                        color,
                    );
                }
            }
        }
        out
    }
}

fn push_triangle(out: &mut Vec<MeshVertex>, a: Vec3, b: Vec3, c: Vec3, color: Vec3) {
    let normal = (b - a).cross(c - a).normalize_or_zero();
    for p in [a, b, c] {
        out.push(MeshVertex {
            position: p.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        });
    }
}
