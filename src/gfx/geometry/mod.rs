//! # Procedural Geometry Generation
//!
//! This module produces triangulated geometry for convex solids without any
//! external model files. All shapes are flat shaded: vertices belonging to
//! the same face share one normal, so corner vertices are duplicated per
//! face instead of being welded.
//!
//! ## Supported Solids
//!
//! - **Prism**: regular n-sided prism for any `n >= 3`
//! - **Cube**: unit cube centered at the origin
//! - **Wedge**: right triangular prism
//! - **Frustum**: truncated four-sided pyramid
//!
//! ## Usage
//!
//! ```
//! use trestle::gfx::geometry::{generate_prism, generate_cube};
//!
//! // A 20-sided prism, e.g. a wheel
//! let wheel = generate_prism(20).unwrap();
//! assert_eq!(wheel.vertex_count(), 120);
//!
//! // A unit cube
//! let cube = generate_cube();
//! assert_eq!(cube.triangle_count(), 12);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::error::{Error, Result};

/// Triangulated geometry produced by the generators in this module.
///
/// Positions and normals are index-aligned; `indices` references positions in
/// counter-clockwise triples as seen from outside the solid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z).
    pub positions: Vec<[f32; 3]>,
    /// Unit normal vectors, one per vertex.
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices, counter-clockwise winding.
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create an empty geometry buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in this geometry.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in this geometry.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a convex face as a triangle fan from its first corner.
    ///
    /// The corners must be listed counter-clockwise as seen from outside the
    /// solid; every appended vertex carries `normal`, keeping the face flat
    /// shaded. A face with `k` corners contributes `k` vertices and `k - 2`
    /// triangles.
    pub fn push_convex_face(&mut self, corners: &[[f32; 3]], normal: [f32; 3]) {
        let base = self.positions.len() as u32;
        for &corner in corners {
            self.positions.push(corner);
            self.normals.push(normal);
        }
        for i in 1..corners.len().saturating_sub(1) as u32 {
            self.indices.push(base);
            self.indices.push(base + i);
            self.indices.push(base + i + 1);
        }
    }

    /// Check the buffer invariants that a renderable mesh relies on.
    ///
    /// Verifies that the geometry is non-empty, that normals are
    /// index-aligned with positions, that the index list describes whole
    /// triangles, and that every index is in bounds.
    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() || self.indices.is_empty() {
            return Err(Error::EmptyGeometry);
        }
        if self.normals.len() != self.positions.len() {
            return Err(Error::MisalignedNormals {
                normals: self.normals.len(),
                positions: self.positions.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(Error::RaggedIndices {
                count: self.indices.len(),
            });
        }
        for &index in &self.indices {
            if index as usize >= self.positions.len() {
                return Err(Error::IndexOutOfBounds {
                    index,
                    vertex_count: self.positions.len(),
                });
            }
        }
        Ok(())
    }
}
