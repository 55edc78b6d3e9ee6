//! Frame clocks

use std::time::Instant;

/// Source of elapsed time for the render loop.
pub trait Clock {
    /// Seconds since the clock started.
    fn elapsed_time(&mut self) -> f32;
}

/// Monotonic wall clock that starts on its first read.
#[derive(Debug, Default)]
pub struct SystemClock {
    start: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn elapsed_time(&mut self) -> f32 {
        let start = *self.start.get_or_insert_with(Instant::now);
        start.elapsed().as_secs_f32()
    }
}

/// Clock driven by hand, for deterministic frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    time: f32,
}

impl ManualClock {
    pub fn new(time: f32) -> Self {
        Self { time }
    }

    pub fn set(&mut self, time: f32) {
        self.time = time;
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }
}

impl Clock for ManualClock {
    fn elapsed_time(&mut self) -> f32 {
        self.time
    }
}
