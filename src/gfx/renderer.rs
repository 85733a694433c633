//! The renderer boundary.
//!
//! Everything GPU-shaped (context setup, shaders, textures, the actual draw
//! call sequence) lives behind [`Renderer`]. The scene hands each drawable's
//! mesh, color and derived matrices across this trait and assumes the call
//! succeeds; driver and I/O failures are the implementation's concern.

use cgmath::Matrix4;
use log::trace;

use crate::gfx::scene::Mesh;

/// Consumes one drawable per call and issues the actual draw.
pub trait Renderer {
    /// Draw `mesh` with the given flat color and derived matrices.
    fn render(
        &mut self,
        mesh: &Mesh,
        color: [f32; 4],
        model_matrix: &Matrix4<f32>,
        normal_matrix: &Matrix4<f32>,
    );
}

/// A renderer that discards everything. Useful for warming caches and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _: &Mesh, _: [f32; 4], _: &Matrix4<f32>, _: &Matrix4<f32>) {}
}

/// A renderer that logs each draw call at trace level and counts them.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    draw_calls: u64,
}

impl TraceRenderer {
    /// Create a trace renderer with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls issued since construction.
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl Renderer for TraceRenderer {
    fn render(
        &mut self,
        mesh: &Mesh,
        color: [f32; 4],
        model_matrix: &Matrix4<f32>,
        _normal_matrix: &Matrix4<f32>,
    ) {
        self.draw_calls += 1;
        trace!(
            "draw call {}: {} indices, color {:?}, origin at {:?}",
            self.draw_calls,
            mesh.index_count(),
            color,
            [model_matrix.w.x, model_matrix.w.y, model_matrix.w.z]
        );
    }
}
