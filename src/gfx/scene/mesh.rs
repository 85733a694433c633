//! Immutable renderable meshes.
//!
//! A [`Mesh`] is validated once at construction and never mutated afterward,
//! which is what makes sharing one mesh across many drawables sound: all four
//! wheels of a car can reference a single 20-sided prism.

use std::sync::Arc;

use super::vertex::Vertex3D;
use crate::error::Result;
use crate::gfx::geometry::GeometryData;

/// Immutable triangulated geometry, shared by reference.
///
/// Built from [`GeometryData`]; construction enforces the geometry
/// invariants, so a `Mesh` in hand is always renderable.
#[derive(Debug)]
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Build a mesh from generated geometry.
    ///
    /// # Errors
    ///
    /// Fails if the geometry is empty, its normals are not index-aligned
    /// with its positions, or its index list is ragged or out of bounds.
    pub fn new(geometry: GeometryData) -> Result<Self> {
        geometry.validate()?;
        let vertices = geometry
            .positions
            .iter()
            .zip(&geometry.normals)
            .map(|(&position, &normal)| Vertex3D { position, normal })
            .collect();
        Ok(Self {
            vertices,
            indices: geometry.indices,
        })
    }

    /// Build a mesh and wrap it for sharing.
    pub fn shared(geometry: GeometryData) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(geometry)?))
    }

    /// Packed vertex data in upload order.
    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    /// Triangle index list, counter-clockwise triples.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of indices.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gfx::geometry::{generate_cube, generate_prism};

    #[test]
    fn mesh_packs_positions_and_normals() {
        let mesh = Mesh::new(generate_cube()).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertices()[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn mesh_rejects_invalid_geometry() {
        let mut geometry = generate_prism(5).unwrap();
        geometry.indices.push(999);
        geometry.indices.push(999);
        geometry.indices.push(999);
        assert!(matches!(
            Mesh::new(geometry),
            Err(Error::IndexOutOfBounds { index: 999, .. })
        ));
    }

    #[test]
    fn shared_meshes_are_reference_counted() {
        let mesh = Mesh::shared(generate_prism(20).unwrap()).unwrap();
        let other = Arc::clone(&mesh);
        assert!(Arc::ptr_eq(&mesh, &other));
    }
}
