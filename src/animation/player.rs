//! Drives an [`Animation`] against a scene.

use log::debug;

use super::traits::Animation;
use crate::gfx::scene::Scene;

/// Owns an attached animation and feeds it frame time.
///
/// The player sits between the external render loop and the scene: the loop
/// calls [`update`](Self::update) once per frame with the elapsed wall time,
/// the player scales or slices it, and the animation writes transforms. The
/// player makes no timing decisions of its own.
pub struct AnimationPlayer {
    animation: Option<Box<dyn Animation>>,
    paused: bool,
    time_scale: f32,
    accumulated_time: f32,
    fixed_timestep: Option<f32>,
}

impl AnimationPlayer {
    /// Create a player with nothing attached.
    pub fn new() -> Self {
        Self {
            animation: None,
            paused: false,
            time_scale: 1.0,
            accumulated_time: 0.0,
            fixed_timestep: None,
        }
    }

    /// Attach an animation, replacing any previous one.
    ///
    /// The animation is initialized against `scene` immediately.
    pub fn attach(&mut self, mut animation: Box<dyn Animation>, scene: &mut Scene) {
        animation.initialize(scene);
        debug!("attached animation '{}'", animation.name());
        self.animation = Some(animation);
        self.paused = false;
        self.accumulated_time = 0.0;
    }

    /// Detach the current animation, if any.
    pub fn detach(&mut self) {
        if let Some(animation) = self.animation.take() {
            debug!("detached animation '{}'", animation.name());
        }
    }

    /// Whether updates are currently suppressed.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume updates.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Scale applied to incoming frame time (1.0 = real time).
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale;
    }

    /// Run updates on a fixed timestep, accumulating leftover frame time.
    ///
    /// `None` returns to variable timestep.
    pub fn set_fixed_timestep(&mut self, timestep: Option<f32>) {
        self.fixed_timestep = timestep;
        self.accumulated_time = 0.0;
    }

    /// Advance the attached animation by one frame.
    ///
    /// With a fixed timestep configured, the scaled frame time is accumulated
    /// and the animation stepped zero or more times in whole increments,
    /// which keeps it deterministic under jittery frame times.
    pub fn update(&mut self, delta_time: f32, scene: &mut Scene) {
        if self.paused {
            return;
        }
        let Some(animation) = self.animation.as_mut() else {
            return;
        };

        let scaled = delta_time * self.time_scale;
        match self.fixed_timestep {
            Some(step) => {
                self.accumulated_time += scaled;
                while self.accumulated_time >= step {
                    animation.update(step, scene);
                    self.accumulated_time -= step;
                }
            }
            None => animation.update(scaled, scene),
        }
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingAnimation {
        updates: Rc<Cell<u32>>,
        last_dt: Rc<Cell<f32>>,
    }

    impl Animation for CountingAnimation {
        fn initialize(&mut self, _scene: &mut Scene) {}

        fn update(&mut self, delta_time: f32, _scene: &mut Scene) {
            self.updates.set(self.updates.get() + 1);
            self.last_dt.set(delta_time);
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn counting_player() -> (AnimationPlayer, Scene, Rc<Cell<u32>>, Rc<Cell<f32>>) {
        let updates = Rc::new(Cell::new(0));
        let last_dt = Rc::new(Cell::new(0.0));
        let mut player = AnimationPlayer::new();
        let mut scene = Scene::new();
        player.attach(
            Box::new(CountingAnimation {
                updates: Rc::clone(&updates),
                last_dt: Rc::clone(&last_dt),
            }),
            &mut scene,
        );
        (player, scene, updates, last_dt)
    }

    #[test]
    fn paused_player_updates_nothing() {
        let (mut player, mut scene, updates, _) = counting_player();
        player.set_paused(true);
        player.update(0.1, &mut scene);
        assert_eq!(updates.get(), 0);
    }

    #[test]
    fn time_scale_stretches_frame_time() {
        let (mut player, mut scene, _, last_dt) = counting_player();
        player.set_time_scale(2.0);
        player.update(0.5, &mut scene);
        assert_eq!(last_dt.get(), 1.0);
    }

    #[test]
    fn fixed_timestep_steps_in_whole_increments() {
        let (mut player, mut scene, updates, last_dt) = counting_player();
        player.set_fixed_timestep(Some(0.1));

        // 0.25s of frame time yields two fixed steps with 0.05 left over.
        player.update(0.25, &mut scene);
        assert_eq!(updates.get(), 2);
        assert_eq!(last_dt.get(), 0.1);

        // The leftover carries into the next frame.
        player.update(0.05, &mut scene);
        assert_eq!(updates.get(), 3);
    }
}
