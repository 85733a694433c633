// src/lib.rs
//! Trestle
//!
//! A hierarchical 3D scene assembly library: composite objects (vehicles,
//! buildings, wheels) are built from procedurally generated convex meshes
//! hung on a transform tree, and drawn each frame with per-node matrices
//! that are recomputed only where something actually changed.
//!
//! The actual GPU work lives behind the [`gfx::renderer::Renderer`] trait;
//! this crate owns the geometry, the transform algebra and the cache.

pub mod animation;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export the error types for convenience
pub use error::{Error, Result};
