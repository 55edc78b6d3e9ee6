//! Per-frame render loop
//!
//! Each tick reads the clock, advances the orbit damping, draws, applies the
//! enabled animations, asks the host for another frame and updates the
//! frame-rate counter, in that order. A draw error stops the loop for good.

use crate::animation;
use crate::clock::Clock;
use crate::state::AppState;
use crate::stats::FrameStats;

/// Host side of the loop: draws frames and schedules the next one.
pub trait FrameTarget {
    type Error: std::error::Error;

    /// Draw the scene from the camera once.
    fn draw(&mut self, state: &AppState) -> Result<(), Self::Error>;

    /// Ask the host to call the loop again on its next frame.
    fn request_next_frame(&mut self);
}

/// Loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Drives [`AppState`] one frame at a time.
#[derive(Debug)]
pub struct RenderLoop<C: Clock> {
    clock: C,
    state: LoopState,
    stats: FrameStats,
    elapsed: f32,
    frames: u64,
}

impl<C: Clock> RenderLoop<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: LoopState::Running,
            stats: FrameStats::new(),
            elapsed: 0.0,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Elapsed time read on the last tick.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed
    }

    /// Number of completed ticks.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Run one frame. Does nothing once the loop has stopped.
    pub fn tick<T: FrameTarget>(
        &mut self,
        app: &mut AppState,
        target: &mut T,
    ) -> Result<(), T::Error> {
        if self.state == LoopState::Stopped {
            return Ok(());
        }

        let elapsed = self.clock.elapsed_time();
        self.elapsed = elapsed;

        app.controls.update(&mut app.camera);

        if let Err(err) = target.draw(app) {
            tracing::error!("Render loop stopped after {} frames: {}", self.frames, err);
            self.state = LoopState::Stopped;
            return Err(err);
        }

        animation::apply(&app.params, &mut app.scene, elapsed);

        target.request_next_frame();
        self.stats.update(elapsed);
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::StageConfig;
    use crate::scene::SLOT_COUNT;
    use approx::assert_relative_eq;
    use glam::Vec3;
    use std::f32::consts::PI;

    #[derive(Debug)]
    struct DrawFailed;

    impl std::fmt::Display for DrawFailed {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "draw failed")
        }
    }

    impl std::error::Error for DrawFailed {}

    /// Records what the loop asked of the host.
    #[derive(Default)]
    struct RecordingTarget {
        draws: Vec<[Vec3; SLOT_COUNT]>,
        requests: usize,
        fail: bool,
    }

    impl FrameTarget for RecordingTarget {
        type Error = DrawFailed;

        fn draw(&mut self, state: &AppState) -> Result<(), DrawFailed> {
            if self.fail {
                return Err(DrawFailed);
            }
            self.draws.push(state.scene.lights.map(|l| l.position));
            Ok(())
        }

        fn request_next_frame(&mut self) {
            self.requests += 1;
        }
    }

    fn app() -> AppState {
        AppState::new(&StageConfig::default(), 800.0, 600.0, 1.0)
    }

    #[test]
    fn test_idle_ticks_leave_scene_unchanged() {
        let mut state = app();
        let before = state.scene.clone();
        let mut render_loop = RenderLoop::new(ManualClock::default());
        let mut target = RecordingTarget::default();

        for _ in 0..5 {
            render_loop.clock_mut().advance(0.7);
            render_loop.tick(&mut state, &mut target).unwrap();
        }

        assert_eq!(state.scene, before);
        assert_eq!(target.draws.len(), 5);
        assert_eq!(target.requests, 5);
        assert_eq!(render_loop.frame_count(), 5);
    }

    #[test]
    fn test_light_animation_follows_clock() {
        let mut state = app();
        state.params.animate_lights = true;
        let spacing = state.params.light_spacing;
        let mut render_loop = RenderLoop::new(ManualClock::new(PI));
        let mut target = RecordingTarget::default();

        render_loop.tick(&mut state, &mut target).unwrap();

        for i in 0..SLOT_COUNT {
            assert_relative_eq!(
                state.scene.lights[i].position.x,
                (i as f32 - 1.0) * (spacing + 0.4),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn test_draw_happens_before_animation() {
        let mut state = app();
        state.params.animate_lights = true;
        let initial = state.scene.lights.map(|l| l.position);
        let mut render_loop = RenderLoop::new(ManualClock::new(PI));
        let mut target = RecordingTarget::default();

        render_loop.tick(&mut state, &mut target).unwrap();

        assert_eq!(target.draws[0], initial);
        assert_ne!(state.scene.lights[0].position, initial[0]);
    }

    #[test]
    fn test_draw_error_stops_loop() {
        let mut state = app();
        let mut render_loop = RenderLoop::new(ManualClock::default());
        let mut target = RecordingTarget {
            fail: true,
            ..Default::default()
        };

        assert!(render_loop.tick(&mut state, &mut target).is_err());
        assert_eq!(render_loop.state(), LoopState::Stopped);
        assert_eq!(target.requests, 0);

        target.fail = false;
        render_loop.tick(&mut state, &mut target).unwrap();
        assert!(target.draws.is_empty());
        assert_eq!(target.requests, 0);
        assert!(!render_loop.is_running());
    }

    #[test]
    fn test_tick_advances_orbit_damping() {
        let mut state = app();
        state.controls.rotate(glam::Vec2::new(80.0, 0.0), 600.0);
        let start = state.camera.position;
        let mut render_loop = RenderLoop::new(ManualClock::default());
        let mut target = RecordingTarget::default();

        render_loop.tick(&mut state, &mut target).unwrap();

        assert_ne!(state.camera.position, start);
        assert_eq!(render_loop.elapsed_time(), 0.0);
    }
}
