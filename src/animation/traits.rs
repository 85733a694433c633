//! Core animation trait.
//!
//! The scene never pushes itself forward: a driver loop pulls it by applying
//! per-frame transform updates and then drawing. [`Animation`] is the hook
//! the driver calls to apply those updates.

use crate::gfx::scene::Scene;

/// Per-frame hook that mutates scene transforms before a draw.
///
/// Implementations hold their own state (node handles, elapsed time, easing
/// parameters) and write transforms through the scene's setters, so only the
/// nodes they touch get recomputed on the next draw.
pub trait Animation {
    /// Called once when the animation is attached.
    ///
    /// Use this to build scene content and capture the node handles that
    /// `update` will steer.
    fn initialize(&mut self, scene: &mut Scene);

    /// Advance the animation by one time step.
    ///
    /// # Arguments
    /// * `delta_time` - Time elapsed since the last update, in seconds
    /// * `scene` - Scene whose transforms to update
    fn update(&mut self, delta_time: f32, scene: &mut Scene);

    /// Animation name for diagnostics.
    fn name(&self) -> &str;

    /// Restore the animation (and any scene state it owns) to its start.
    fn reset(&mut self, _scene: &mut Scene) {}
}
