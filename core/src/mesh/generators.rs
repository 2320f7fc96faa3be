//! Mesh generators for common shapes.
//!
//! These generators produce [`CpuMesh`] values ready for the shading
//! pipeline's vertex decode: a textured cube and quad (position + uv
//! configuration) and a colored triangle (position + color + uv
//! configuration).

use super::data::CpuMesh;
use super::layout::VertexLayout;

/// Internal vertex type for the uv configuration (position + uv).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PuVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

/// Internal vertex type for the color configuration (position + color + uv).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PcuVertex {
    position: [f32; 3],
    color: [f32; 3],
    uv: [f32; 2],
}

/// Generate an axis-aligned cube centered at the origin.
///
/// 36 non-indexed vertices (two triangles per face), `position_uv` layout
/// (20 bytes per vertex). Each face spans the full [0,1] uv range.
///
/// # Arguments
///
/// * `half_extent` - Half the edge length of the cube
pub fn generate_cube(half_extent: f32) -> CpuMesh {
    let h = half_extent;

    #[rustfmt::skip]
    let vertices = [
        // back face (-Z)
        PuVertex { position: [-h, -h, -h], uv: [0.0, 0.0] },
        PuVertex { position: [ h, -h, -h], uv: [1.0, 0.0] },
        PuVertex { position: [ h,  h, -h], uv: [1.0, 1.0] },
        PuVertex { position: [ h,  h, -h], uv: [1.0, 1.0] },
        PuVertex { position: [-h,  h, -h], uv: [0.0, 1.0] },
        PuVertex { position: [-h, -h, -h], uv: [0.0, 0.0] },
        // front face (+Z)
        PuVertex { position: [-h, -h,  h], uv: [0.0, 0.0] },
        PuVertex { position: [ h, -h,  h], uv: [1.0, 0.0] },
        PuVertex { position: [ h,  h,  h], uv: [1.0, 1.0] },
        PuVertex { position: [ h,  h,  h], uv: [1.0, 1.0] },
        PuVertex { position: [-h,  h,  h], uv: [0.0, 1.0] },
        PuVertex { position: [-h, -h,  h], uv: [0.0, 0.0] },
        // left face (-X)
        PuVertex { position: [-h,  h,  h], uv: [1.0, 0.0] },
        PuVertex { position: [-h,  h, -h], uv: [1.0, 1.0] },
        PuVertex { position: [-h, -h, -h], uv: [0.0, 1.0] },
        PuVertex { position: [-h, -h, -h], uv: [0.0, 1.0] },
        PuVertex { position: [-h, -h,  h], uv: [0.0, 0.0] },
        PuVertex { position: [-h,  h,  h], uv: [1.0, 0.0] },
        // right face (+X)
        PuVertex { position: [ h,  h,  h], uv: [1.0, 0.0] },
        PuVertex { position: [ h,  h, -h], uv: [1.0, 1.0] },
        PuVertex { position: [ h, -h, -h], uv: [0.0, 1.0] },
        PuVertex { position: [ h, -h, -h], uv: [0.0, 1.0] },
        PuVertex { position: [ h, -h,  h], uv: [0.0, 0.0] },
        PuVertex { position: [ h,  h,  h], uv: [1.0, 0.0] },
        // bottom face (-Y)
        PuVertex { position: [-h, -h, -h], uv: [0.0, 1.0] },
        PuVertex { position: [ h, -h, -h], uv: [1.0, 1.0] },
        PuVertex { position: [ h, -h,  h], uv: [1.0, 0.0] },
        PuVertex { position: [ h, -h,  h], uv: [1.0, 0.0] },
        PuVertex { position: [-h, -h,  h], uv: [0.0, 0.0] },
        PuVertex { position: [-h, -h, -h], uv: [0.0, 1.0] },
        // top face (+Y)
        PuVertex { position: [-h,  h, -h], uv: [0.0, 1.0] },
        PuVertex { position: [ h,  h, -h], uv: [1.0, 1.0] },
        PuVertex { position: [ h,  h,  h], uv: [1.0, 0.0] },
        PuVertex { position: [ h,  h,  h], uv: [1.0, 0.0] },
        PuVertex { position: [-h,  h,  h], uv: [0.0, 0.0] },
        PuVertex { position: [-h,  h, -h], uv: [0.0, 1.0] },
    ];

    let vertex_bytes = bytemuck::cast_slice(&vertices).to_vec();

    CpuMesh::new(VertexLayout::position_uv())
        .with_vertex_data(vertex_bytes)
        .with_label("cube")
}

/// Generate a quad mesh on the XY plane.
///
/// Creates a quad centered at the origin with the given half-width and
/// half-height, `position_uv` layout with u16 indices.
///
/// UV coordinates go from (0,0) at bottom-left to (1,1) at top-right.
///
/// # Arguments
///
/// * `half_width` - Half the width of the quad along the X axis
/// * `half_height` - Half the height of the quad along the Y axis
pub fn generate_quad(half_width: f32, half_height: f32) -> CpuMesh {
    let vertices = [
        PuVertex {
            position: [-half_width, -half_height, 0.0],
            uv: [0.0, 0.0],
        },
        PuVertex {
            position: [half_width, -half_height, 0.0],
            uv: [1.0, 0.0],
        },
        PuVertex {
            position: [half_width, half_height, 0.0],
            uv: [1.0, 1.0],
        },
        PuVertex {
            position: [-half_width, half_height, 0.0],
            uv: [0.0, 1.0],
        },
    ];

    let indices: [u16; 6] = [0, 1, 2, 2, 3, 0];
    let vertex_bytes = bytemuck::cast_slice(&vertices).to_vec();

    CpuMesh::new(VertexLayout::position_uv())
        .with_vertex_data(vertex_bytes)
        .with_indices_u16(&indices)
        .with_label("quad")
}

/// Generate a triangle with red, green, and blue corner colors.
///
/// Three non-indexed vertices in the `position_color_uv` layout (32 bytes
/// per vertex). This is the color-attribute vertex configuration.
pub fn generate_triangle() -> CpuMesh {
    let vertices = [
        PcuVertex {
            position: [-0.5, -0.5, 0.0],
            color: [1.0, 0.0, 0.0],
            uv: [0.0, 0.0],
        },
        PcuVertex {
            position: [0.5, -0.5, 0.0],
            color: [0.0, 1.0, 0.0],
            uv: [1.0, 0.0],
        },
        PcuVertex {
            position: [0.0, 0.5, 0.0],
            color: [0.0, 0.0, 1.0],
            uv: [0.5, 1.0],
        },
    ];

    let vertex_bytes = bytemuck::cast_slice(&vertices).to_vec();

    CpuMesh::new(VertexLayout::position_color_uv())
        .with_vertex_data(vertex_bytes)
        .with_label("triangle")
}
