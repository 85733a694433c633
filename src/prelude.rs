//! # Trestle Prelude
//!
//! Convenient single import for typical scene-building code:
//!
//! ```
//! use trestle::prelude::*;
//!
//! let mut factory = MeshFactory::new();
//! let mut scene = Scene::new();
//! let wheel = Drawable::new(factory.make(SolidKind::Prism(20))?, [0.2, 0.2, 0.2, 1.0]);
//! let hub = scene.add_drawable(scene.root(), wheel);
//! scene.transform(hub, Transform::identity().rotate_y(Deg(90.0)));
//! scene.draw(&mut NullRenderer);
//! # Ok::<(), Error>(())
//! ```

// Re-export core scene types
pub use crate::gfx::scene::{
    Drawable, Mesh, MeshFactory, NodeId, Scene, SceneStatistics, SolidKind, Transform, Vertex3D,
};

// Re-export geometry generation
pub use crate::gfx::geometry::{
    generate_cube, generate_frustum, generate_prism, generate_wedge, GeometryData,
};

// Re-export the renderer boundary
pub use crate::gfx::renderer::{NullRenderer, Renderer, TraceRenderer};

// Re-export the animation framework
pub use crate::animation::{Animation, AnimationPlayer};

// Re-export error handling
pub use crate::error::{Error, Result};

// Re-export common external dependencies
pub use cgmath::{Deg, Matrix4, Vector3};
