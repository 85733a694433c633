//! Per-frame animation hooks.
//!
//! The core scene is passive: it only ever reacts to `draw` and the
//! transform setters. This module supplies the conventional driver shape on
//! top — an [`Animation`] implements the per-frame `update(dt)` hook, and an
//! [`AnimationPlayer`] owns it, handling pause, time scaling and fixed
//! timesteps before each draw.

pub mod player;
pub mod traits;

pub use player::AnimationPlayer;
pub use traits::Animation;
