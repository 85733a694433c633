//! # Graphics Module
//!
//! Everything graphics-related: procedural geometry generation, the scene
//! graph with its transform cache, and the renderer trait boundary.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - convex solid generators producing
//!   validated, flat-shaded triangle data
//! - **Scene** ([`scene`]) - meshes, drawables and the node tree with lazy
//!   transform-cache invalidation
//! - **Renderer** ([`renderer`]) - the trait an external renderer implements
//!   to consume mesh + matrix pairs
//!
//! The split mirrors the data flow: generators feed meshes, meshes feed
//! drawables, drawables hang off scene nodes, and the scene hands finished
//! matrices to the renderer once per frame.

pub mod geometry;
pub mod renderer;
pub mod scene;

// Re-export commonly used types
pub use renderer::{NullRenderer, Renderer, TraceRenderer};
pub use scene::{Drawable, Mesh, MeshFactory, NodeId, Scene, SolidKind, Transform};
