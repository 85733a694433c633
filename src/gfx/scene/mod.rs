//! # Scene Management Module
//!
//! Hierarchical scene assembly: immutable shared meshes, drawable instances,
//! and the transform tree that positions them.
//!
//! ## Key Components
//!
//! - [`Scene`] - node arena, dirty tracking and the per-frame draw traversal
//! - [`Drawable`] - a mesh instance with its own transform and cached matrices
//! - [`Mesh`] / [`MeshFactory`] - validated immutable geometry, memoized per solid
//! - [`Transform`] - replayable affine step list
//! - [`Vertex3D`] - packed vertex layout handed across the renderer boundary
//!
//! ## Usage
//!
//! ```
//! use trestle::gfx::renderer::NullRenderer;
//! use trestle::gfx::scene::{Drawable, MeshFactory, Scene, SolidKind, Transform};
//!
//! let mut factory = MeshFactory::new();
//! let mut scene = Scene::new();
//!
//! let body = scene.add_drawable(
//!     scene.root(),
//!     Drawable::new(factory.make(SolidKind::Cube)?, [1.0, 0.0, 0.0, 1.0]),
//! );
//! scene.grouped(body, Transform::identity().scale(3.0));
//! scene.draw(&mut NullRenderer);
//! # Ok::<(), trestle::Error>(())
//! ```

pub mod drawable;
pub mod factory;
pub mod mesh;
pub mod node;
pub mod scene;
pub mod transform;
pub mod vertex;

// Re-export main types
pub use drawable::Drawable;
pub use factory::{MeshFactory, SolidKind};
pub use mesh::Mesh;
pub use node::NodeId;
pub use scene::{Scene, SceneStatistics};
pub use transform::Transform;
pub use vertex::Vertex3D;
