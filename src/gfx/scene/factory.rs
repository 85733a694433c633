//! Memoizing factory for the built-in solids.
//!
//! Mesh generation is deterministic and meshes are immutable, so the factory
//! caches each solid the first time it is requested and hands out the same
//! [`Arc<Mesh>`] on every subsequent request. Asking for "a 20-sided prism"
//! twice yields one mesh, not two.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use super::mesh::Mesh;
use crate::error::Result;
use crate::gfx::geometry::{generate_cube, generate_frustum, generate_prism, generate_wedge};

/// The solids the factory knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolidKind {
    /// Unit cube centered at the origin.
    Cube,
    /// Right triangular prism.
    Wedge,
    /// Truncated four-sided pyramid.
    Frustum,
    /// Regular prism with the given number of sides (at least 3).
    Prism(u32),
}

/// Builds and memoizes meshes for [`SolidKind`] requests.
#[derive(Default)]
pub struct MeshFactory {
    cache: HashMap<SolidKind, Arc<Mesh>>,
}

impl MeshFactory {
    /// Create a factory with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the mesh for `kind`, generating it on first request.
    ///
    /// # Errors
    ///
    /// [`Error::DegeneratePolygon`](crate::error::Error::DegeneratePolygon)
    /// for `Prism(n)` with `n < 3`. Nothing is cached on failure.
    pub fn make(&mut self, kind: SolidKind) -> Result<Arc<Mesh>> {
        if let Some(mesh) = self.cache.get(&kind) {
            return Ok(Arc::clone(mesh));
        }

        let geometry = match kind {
            SolidKind::Cube => generate_cube(),
            SolidKind::Wedge => generate_wedge(),
            SolidKind::Frustum => generate_frustum(),
            SolidKind::Prism(sides) => generate_prism(sides)?,
        };
        let mesh = Mesh::shared(geometry)?;
        debug!(
            "generated {:?}: {} vertices, {} triangles",
            kind,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.cache.insert(kind, Arc::clone(&mesh));
        Ok(mesh)
    }

    /// Number of distinct solids generated so far.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}
