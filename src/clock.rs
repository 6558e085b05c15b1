//! Frame rate limiting

use std::time::Duration;

/// Time one frame takes at `fps` frames per second, zero for `fps == 0`
pub fn frame_duration(fps: u32) -> Duration {
    if fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f64(1.0 / fps as f64)
    }
}

/// Keeps a frame loop at a steady pace
///
/// `tick` simply sleeps for one frame. Work done during the frame is not
/// subtracted, so the real rate is a bit below `fps`.
#[derive(Debug)]
pub struct Clock {
    frames: u64,
}

impl Clock {
    pub fn new() -> Self {
        Clock { frames: 0 }
    }

    /// Blocks the calling thread for `1 / fps` seconds
    pub fn tick(&mut self, fps: u32) {
        std::thread::sleep(frame_duration(fps));
        self.frames += 1;
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(10), Duration::from_millis(100));
        assert_eq!(frame_duration(0), Duration::ZERO);
    }

    #[test]
    fn test_tick_sleeps_one_frame() {
        let mut clock = Clock::new();
        let start = Instant::now();

        clock.tick(50);

        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn test_tick_zero_fps_does_not_sleep() {
        let mut clock = Clock::new();
        clock.tick(0);
        assert_eq!(clock.frames(), 1);
    }
}
