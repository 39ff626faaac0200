//! Unit meshes the GPU front end instances for spheres and markers.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Latitude/longitude sphere of radius 1. `phi_resolution` counts the rings
/// from pole to pole (poles included), `theta_resolution` the segments
/// around the axis. The seam column is duplicated.
pub fn unit_sphere(phi_resolution: u32, theta_resolution: u32) -> Mesh {
    let rings = phi_resolution.max(3);
    let segments = theta_resolution.max(3);
    let columns = segments + 1;

    let mut vertices = Vec::with_capacity((rings * columns) as usize);
    for i in 0..rings {
        let phi = PI * i as f32 / (rings - 1) as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..columns {
            let theta = TAU * j as f32 / segments as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let p = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(MeshVertex {
                position: p,
                normal: p,
            });
        }
    }

    let mut indices = Vec::with_capacity(((rings - 1) * segments * 6) as usize);
    for i in 0..rings - 1 {
        for j in 0..segments {
            let a = i * columns + j;
            let b = a + columns;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    Mesh { vertices, indices }
}

/// Three axis-aligned unit segments crossing at the origin, as a line list.
pub fn axis_cross() -> [[f32; 3]; 6] {
    [
        [-0.5, 0.0, 0.0],
        [0.5, 0.0, 0.0],
        [0.0, -0.5, 0.0],
        [0.0, 0.5, 0.0],
        [0.0, 0.0, -0.5],
        [0.0, 0.0, 0.5],
    ]
}
