//! Frame-rate counter

/// Length of one FPS sampling window in seconds.
const WINDOW_SECS: f32 = 1.0;

/// Frames-per-second counter fed once per frame.
///
/// FPS is published once per one-second window as
/// `frames * 1000 / window_ms`; min and max track the published values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStats {
    window_start: Option<f32>,
    last_time: Option<f32>,
    frames: u32,
    fps: Option<f32>,
    min_fps: Option<f32>,
    max_fps: Option<f32>,
    frame_ms: f32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` seconds on the loop clock.
    pub fn update(&mut self, now: f32) {
        if let Some(last) = self.last_time {
            self.frame_ms = (now - last) * 1000.0;
        }
        self.last_time = Some(now);

        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let window = now - start;
        if window >= WINDOW_SECS {
            let fps = self.frames as f32 * 1000.0 / (window * 1000.0);
            self.fps = Some(fps);
            self.min_fps = Some(self.min_fps.map_or(fps, |m| m.min(fps)));
            self.max_fps = Some(self.max_fps.map_or(fps, |m| m.max(fps)));
            self.window_start = Some(now);
            self.frames = 0;
        }
    }

    /// Last published FPS, if a full window has elapsed.
    pub fn fps(&self) -> Option<f32> {
        self.fps
    }

    pub fn min_fps(&self) -> Option<f32> {
        self.min_fps
    }

    pub fn max_fps(&self) -> Option<f32> {
        self.max_fps
    }

    /// Time between the last two frames in milliseconds.
    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn feed(stats: &mut FrameStats, fps: f32, seconds: f32, start: f32) -> f32 {
        let dt = 1.0 / fps;
        let frames = (seconds * fps).round() as u32;
        let mut t = start;
        for _ in 0..frames {
            stats.update(t);
            t += dt;
        }
        t
    }

    #[test]
    fn test_no_fps_before_first_window() {
        let mut stats = FrameStats::new();
        feed(&mut stats, 60.0, 0.5, 0.0);
        assert_eq!(stats.fps(), None);
    }

    #[test]
    fn test_fps_published_after_window() {
        let mut stats = FrameStats::new();
        feed(&mut stats, 60.0, 1.1, 0.0);

        let fps = stats.fps().unwrap();
        assert!((58.0..=62.0).contains(&fps), "fps = {fps}");
        assert_relative_eq!(stats.frame_ms(), 1000.0 / 60.0, epsilon = 0.01);
    }

    #[test]
    fn test_min_max_track_windows() {
        let mut stats = FrameStats::new();
        let t = feed(&mut stats, 60.0, 1.1, 0.0);
        feed(&mut stats, 30.0, 1.1, t);

        let min = stats.min_fps().unwrap();
        let max = stats.max_fps().unwrap();
        assert!(min < 35.0, "min = {min}");
        assert!(max > 55.0, "max = {max}");
    }
}
