use crate::motion::hex_to_linear;
use crate::scene::{Light, PointBuffer, Scene, Solid};
use glam::Vec3;

pub(crate) const MAX_LIGHTS: usize = 8;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    pub(crate) position_range: [f32; 4],
    pub(crate) color_intensity: [f32; 4],
}

/// Per-frame camera, lighting and fog block shared by every pipeline.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) fog_color: [f32; 4],
    pub(crate) fog_range: [f32; 4],
    pub(crate) lights: [LightPacked; MAX_LIGHTS],
}

impl Globals {
    pub(crate) fn from_scene(scene: &Scene) -> Self {
        let cam = &scene.camera;
        let mut ambient = Vec3::ZERO;
        let mut lights = [LightPacked::default(); MAX_LIGHTS];
        let mut count = 0usize;
        for light in &scene.lights {
            match *light {
                Light::Ambient { color, intensity } => ambient += hex_to_linear(color) * intensity,
                Light::Point {
                    color,
                    intensity,
                    distance,
                    position,
                } => {
                    if count == MAX_LIGHTS {
                        continue;
                    }
                    lights[count] = LightPacked {
                        position_range: position.extend(distance).to_array(),
                        color_intensity: hex_to_linear(color).extend(intensity).to_array(),
                    };
                    count += 1;
                }
            }
        }
        let (fog_color, fog_near, fog_far) = match scene.fog {
            Some(f) => (hex_to_linear(f.color).extend(1.0), f.near, f.far),
            None => (Vec3::ZERO.extend(0.0), 0.0, 0.0),
        };
        Self {
            view: cam.view_matrix().to_cols_array_2d(),
            proj: cam.projection_matrix().to_cols_array_2d(),
            camera_pos: cam.position.extend(1.0).to_array(),
            ambient: ambient.extend(1.0).to_array(),
            fog_color: fog_color.to_array(),
            fog_range: [fog_near, fog_far, count as f32, 0.0],
            lights,
        }
    }
}

/// Per-solid instance data; the glow shell of a solid reuses its instance.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SolidInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) material: [f32; 4],
    pub(crate) glow: [f32; 4],
}

impl SolidInstance {
    pub(crate) const ATTRIBS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4
    ];

    pub(crate) fn from_solid(solid: &Solid) -> Self {
        let m = &solid.material;
        let glow = solid
            .glow
            .map(|g| hex_to_linear(g.color).extend(g.opacity).to_array())
            .unwrap_or([0.0; 4]);
        Self {
            model: solid.model_matrix().to_cols_array_2d(),
            material: [m.emissive, m.metalness, m.roughness, 0.0],
            glow,
        }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SolidInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SwarmUniform {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
}

impl SwarmUniform {
    pub(crate) fn from_points(points: &PointBuffer) -> Self {
        Self {
            model: points.model_matrix().to_cols_array_2d(),
            params: [points.size, points.opacity, 0.0, 0.0],
        }
    }
}

pub(crate) const MESH_ATTRIBS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];
pub(crate) const POINT_ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
pub(crate) const POINT_COLOR_ATTRIBS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![1 => Float32x3];
