//! Error taxonomy for mesh and scene construction.
//!
//! Every variant is an invalid-argument class failure: the offending mesh or
//! node is never built, nothing is retried, and the error surfaces straight
//! to the caller assembling the scene. Drawing a well-formed scene cannot
//! fail, so [`Scene::draw`](crate::gfx::scene::Scene::draw) returns nothing.

use thiserror::Error;

/// Construction-time failures for geometry and scene elements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A polygon or prism was requested with fewer than 3 sides.
    #[error("a convex polygon needs at least 3 sides, got {sides}")]
    DegeneratePolygon {
        /// The rejected side count.
        sides: u32,
    },

    /// Geometry with no vertices or no triangles was handed to a mesh.
    #[error("geometry has no vertices or no triangles")]
    EmptyGeometry,

    /// A triangle index referenced a vertex that does not exist.
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index value.
        index: u32,
        /// Number of vertices actually present.
        vertex_count: usize,
    },

    /// The normal buffer is not index-aligned with the position buffer.
    #[error("{normals} normals for {positions} positions; expected one normal per vertex")]
    MisalignedNormals {
        /// Number of normals present.
        normals: usize,
        /// Number of positions present.
        positions: usize,
    },

    /// The index list does not describe whole triangles.
    #[error("index count {count} is not a multiple of 3")]
    RaggedIndices {
        /// Number of indices present.
        count: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
