//! Scene container and cached hierarchical transform propagation.
//!
//! The scene owns an arena of nodes addressed by [`NodeId`]. Drawing is two
//! passes: `propagate` recomputes cached matrices along paths that actually
//! changed, then `render_all` walks the tree issuing draw calls without
//! touching any matrix math. Re-rendering an unchanged scene therefore costs
//! no matrix work at all.

use cgmath::{Matrix4, SquareMatrix};
use log::trace;

use super::drawable::Drawable;
use super::node::{NodeId, SceneNode};
use super::transform::Transform;
use crate::gfx::renderer::Renderer;

/// A tree of transform nodes with lazily cached matrices.
///
/// The scene is an explicit context object: it is created by the driver
/// loop, mutated through node handles, and drawn once per frame. There is no
/// global state.
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Create a scene containing only an empty root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![SceneNode::new(None)],
        }
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach an empty child node under `parent` and return its handle.
    ///
    /// Handles are only valid for the scene that produced them; using one
    /// from another scene panics or addresses the wrong node.
    pub fn add(&mut self, parent: NodeId) -> NodeId {
        self.insert(parent, None)
    }

    /// Attach a child node carrying `drawable` under `parent`.
    pub fn add_drawable(&mut self, parent: NodeId, drawable: Drawable) -> NodeId {
        self.insert(parent, Some(drawable))
    }

    fn insert(&mut self, parent: NodeId, drawable: Option<Drawable>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode::new(drawable));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Set the own transform of the node's drawable and mark the node dirty.
    ///
    /// Only this node is marked; descendants are forced during the next
    /// traversal, which keeps the setter O(1).
    pub fn transform(&mut self, id: NodeId, transform: Transform) {
        let node = &mut self.nodes[id.0];
        if let Some(drawable) = node.drawable.as_mut() {
            drawable.set_transform(transform);
        }
        node.valid = false;
    }

    /// Set the group transform of a node and mark it dirty.
    ///
    /// The group transform positions the node and everything beneath it.
    pub fn grouped(&mut self, id: NodeId, transform: Transform) {
        let node = &mut self.nodes[id.0];
        node.group = transform;
        node.valid = false;
    }

    /// The drawable attached at `id`, if any.
    pub fn drawable(&self, id: NodeId) -> Option<&Drawable> {
        self.nodes[id.0].drawable.as_ref()
    }

    /// Recolor the drawable at `id`. Colors do not invalidate matrix caches.
    pub fn set_color(&mut self, id: NodeId, color: [f32; 4]) {
        if let Some(drawable) = self.nodes[id.0].drawable.as_mut() {
            drawable.set_color(color);
        }
    }

    /// Draw the scene: refresh stale matrices, then issue draw calls.
    ///
    /// The output is identical to recomputing every matrix from scratch;
    /// the cache only elides arithmetic that provably cannot change the
    /// result. Two consecutive draws with no setter calls in between perform
    /// zero matrix recomputation.
    pub fn draw(&mut self, renderer: &mut dyn Renderer) {
        self.propagate(self.root(), Matrix4::identity(), false);
        self.render_all(self.root(), renderer);
    }

    /// Recompute cached matrices along forced paths.
    ///
    /// The walk always descends: a clean, unforced node does no matrix work
    /// but still passes its cached accumulated matrix down, so a dirty node
    /// anywhere below a clean one recomputes against the correct ancestor
    /// matrix. Once a node recomputes, all its descendants are forced, since
    /// their inherited matrix changed even if their own transforms did not.
    fn propagate(&mut self, id: NodeId, parent_accum: Matrix4<f32>, force: bool) {
        let effective = force || !self.nodes[id.0].valid;
        if effective {
            let node = &mut self.nodes[id.0];
            let accumulated = parent_accum * node.group.matrix();
            node.accumulated = accumulated;
            if let Some(drawable) = node.drawable.as_mut() {
                drawable.recompute(&accumulated);
            }
            node.valid = true;
            trace!("recomputed node {}", id.0);
        }

        let accumulated = self.nodes[id.0].accumulated;
        for i in 0..self.nodes[id.0].children.len() {
            let child = self.nodes[id.0].children[i];
            self.propagate(child, accumulated, effective);
        }
    }

    /// Issue draw calls for the whole tree. Touches no matrices.
    fn render_all(&self, id: NodeId, renderer: &mut dyn Renderer) {
        let node = &self.nodes[id.0];
        if let Some(drawable) = node.drawable.as_ref() {
            drawable.render(renderer);
        }
        for &child in &node.children {
            self.render_all(child, renderer);
        }
    }

    /// Aggregate counts over the whole scene.
    pub fn statistics(&self) -> SceneStatistics {
        let drawables = || self.nodes.iter().filter_map(|n| n.drawable.as_ref());
        SceneStatistics {
            node_count: self.nodes.len(),
            drawable_count: drawables().count(),
            total_vertices: drawables().map(|d| d.mesh().vertex_count()).sum(),
            total_triangles: drawables().map(|d| d.mesh().triangle_count()).sum(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Scene-wide counts for diagnostics and driver display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    /// Nodes in the arena, including the root and empty grouping nodes.
    pub node_count: usize,
    /// Nodes carrying a drawable.
    pub drawable_count: usize,
    /// Vertices across all attached meshes, counting shared meshes once per use.
    pub total_vertices: u32,
    /// Triangles across all attached meshes, counting shared meshes once per use.
    pub total_triangles: u32,
}
