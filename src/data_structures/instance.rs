//! Placed scene objects and their GPU representation.
//!
//! An [`Instance`] is one transformed copy of a [`GeometryKind`]. Instances of the
//! same kind share one base shape, so the renderer draws them with instancing:
//! each instance is flattened into an [`InstanceRaw`] and uploaded as a vertex
//! buffer with per-instance step mode.

use cgmath::{Matrix4, Rad, SquareMatrix};

use crate::data_structures::geometry::GeometryKind;

/// Anything that can describe its own vertex buffer layout to wgpu.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// One placed object: kind, position, x/y rotation, uniform scale and protection.
///
/// Rotation holds Euler angles in radians around the x and y axes. There is no z
/// component; it is always the identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub kind: GeometryKind,
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Vector2<f32>,
    pub scale: f32,
    /// Protected instances survive regeneration.
    pub protected: bool,
}

impl Instance {
    /// Create an unprotected instance with identity transformation.
    pub fn new(kind: GeometryKind) -> Self {
        Self {
            kind,
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            rotation: cgmath::Vector2::new(0.0, 0.0),
            scale: 1.0,
            protected: false,
        }
    }

    /// The centerpiece label: at the origin, unrotated, unit scale, protected.
    pub fn label() -> Self {
        Self {
            protected: true,
            ..Self::new(GeometryKind::Label)
        }
    }

    pub fn rotation_matrix(&self) -> cgmath::Matrix3<f32> {
        cgmath::Matrix3::from_angle_x(Rad(self.rotation.x))
            * cgmath::Matrix3::from_angle_y(Rad(self.rotation.y))
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.rotation_matrix())
            * Matrix4::from_scale(self.scale)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        let world_matrix = self.to_matrix();
        // A zero scale collapses the matrix; treat it as right-handed.
        let det = world_matrix.determinant();
        let handedness = if det < 0.0 { -1.0 } else { 1.0 };
        InstanceRaw {
            model: world_matrix.into(),
            normal: self.rotation_matrix().into(),
            handedness,
        }
    }
}

/**
 * The raw instance is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 3]; 3],
    pub handedness: f32,
}

/**
 * Stride layout: the model matrix as four vec4s, the normal matrix as three vec3s
 * and the handedness sign. Locations 0..=4 are left to the per-vertex buffer.
 */
impl Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // Shaders advance to the next element once per instance, not per vertex.
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 25]>() as wgpu::BufferAddress,
                    shader_location: 12,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}
