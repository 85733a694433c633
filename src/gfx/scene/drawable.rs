//! Leaf scene elements: a shared mesh plus per-instance transform state.

use std::sync::Arc;

use cgmath::{Matrix, Matrix4, SquareMatrix};
use log::warn;

use super::mesh::Mesh;
use super::transform::Transform;
use crate::gfx::renderer::Renderer;

/// A renderable instance of a [`Mesh`].
///
/// The mesh is shared and immutable; the drawable owns its color, its own
/// transform (how this one instance sits relative to the node it hangs off),
/// and the cached model/normal matrices derived during propagation.
#[derive(Debug)]
pub struct Drawable {
    mesh: Arc<Mesh>,
    color: [f32; 4],
    transform: Transform,
    model_matrix: Matrix4<f32>,
    normal_matrix: Matrix4<f32>,
    recomputes: u64,
}

impl Drawable {
    /// Create a drawable over a shared mesh with a flat RGBA color.
    pub fn new(mesh: Arc<Mesh>, color: [f32; 4]) -> Self {
        Self {
            mesh,
            color,
            transform: Transform::identity(),
            model_matrix: Matrix4::identity(),
            normal_matrix: Matrix4::identity(),
            recomputes: 0,
        }
    }

    /// The shared mesh this drawable renders.
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    /// Flat RGBA color handed to the renderer.
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Replace the drawable's color. Colors do not affect cached matrices.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    /// Replace the drawable's own transform.
    ///
    /// The cached matrices become stale; inside a scene the owning node is
    /// marked dirty by [`Scene::transform`](super::Scene::transform), and a
    /// standalone drawable is refreshed by calling [`recompute`](Self::recompute).
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// The drawable's own transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Derive the cached matrices from an accumulated ancestor matrix.
    ///
    /// The own transform is innermost: `model = accumulated * own`. The
    /// normal matrix is the transposed inverse of the model matrix, so
    /// lighting normals stay correct under non-uniform scaling.
    pub fn recompute(&mut self, accumulated: &Matrix4<f32>) {
        self.model_matrix = *accumulated * self.transform.matrix();
        self.normal_matrix = match self.model_matrix.invert() {
            Some(inverse) => inverse.transpose(),
            None => {
                warn!("model matrix is singular; normal matrix falls back to identity");
                Matrix4::identity()
            }
        };
        self.recomputes += 1;
    }

    /// Cached model matrix from the last recompute.
    pub fn model_matrix(&self) -> &Matrix4<f32> {
        &self.model_matrix
    }

    /// Cached normal matrix from the last recompute.
    pub fn normal_matrix(&self) -> &Matrix4<f32> {
        &self.normal_matrix
    }

    /// How many times this drawable's matrices have been derived.
    ///
    /// Cache diagnostics: a drawable whose counter did not move across a
    /// `draw` was served entirely from cache.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Hand this drawable to the renderer. No other side effects.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.render(
            &self.mesh,
            self.color,
            &self.model_matrix,
            &self.normal_matrix,
        );
    }
}

impl Clone for Drawable {
    /// Stamp a new instance sharing the same mesh.
    ///
    /// Color, transform and cached matrices are copied, but the clone's
    /// transform state is fully independent afterward and its recompute
    /// counter starts at zero.
    fn clone(&self) -> Self {
        Self {
            mesh: Arc::clone(&self.mesh),
            color: self.color,
            transform: self.transform.clone(),
            model_matrix: self.model_matrix,
            normal_matrix: self.normal_matrix,
            recomputes: 0,
        }
    }
}
