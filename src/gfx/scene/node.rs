//! Scene graph node records.
//!
//! Nodes live in a [`Scene`](super::Scene) arena and refer to each other by
//! [`NodeId`]; the arena owns every node, so the tree has single ownership
//! and no cycles by construction.

use cgmath::{Matrix4, SquareMatrix};

use super::drawable::Drawable;
use super::transform::Transform;

/// Stable handle to a node inside the [`Scene`](super::Scene) that created it.
///
/// Handles are plain indices: cheap to copy, valid for the lifetime of their
/// scene, and meaningless in any other scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One node of the scene tree.
///
/// `group` positions the node and its whole subtree; the drawable's own
/// transform (if any) affects only the drawable itself. `valid` and
/// `accumulated` are the lazy transform cache: a fresh node starts invalid
/// so its first traversal computes it.
#[derive(Debug)]
pub(crate) struct SceneNode {
    pub(crate) drawable: Option<Drawable>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) group: Transform,
    pub(crate) valid: bool,
    pub(crate) accumulated: Matrix4<f32>,
}

impl SceneNode {
    pub(crate) fn new(drawable: Option<Drawable>) -> Self {
        Self {
            drawable,
            children: Vec::new(),
            group: Transform::identity(),
            valid: false,
            accumulated: Matrix4::identity(),
        }
    }
}
