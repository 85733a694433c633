//! # Vertex Data Structures
//!
//! GPU-compatible vertex formats handed across the renderer boundary.

/// A 3D vertex with position and normal data.
///
/// The `#[repr(C)]` layout plus the bytemuck derives let a renderer upload a
/// `&[Vertex3D]` slice directly as a byte buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z].
    pub position: [f32; 3],
    /// Unit normal vector [nx, ny, nz] for lighting calculations.
    pub normal: [f32; 3],
}

impl Vertex3D {
    /// View a vertex slice as raw bytes for buffer upload.
    pub fn as_bytes(vertices: &[Vertex3D]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
