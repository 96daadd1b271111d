use std::time::{Duration, Instant};

/// Largest time step the integrator will accept, in seconds. Frame hitches
/// longer than this are truncated rather than integrated.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Supplies elapsed real time since the previous frame, pre-clamped for the
/// integrator.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Seconds since the last call, clamped to [`MAX_FRAME_DT`].
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }

    /// Wall-clock seconds since the clock was created. Drives flicker.
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame time tracker for instrumentation.
#[derive(Debug)]
pub struct FrameTimer {
    history: Vec<Duration>,
    capacity: usize,
    index: usize,
    filled: bool,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: vec![Duration::ZERO; capacity],
            capacity,
            index: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.capacity;
        if self.index == 0 {
            self.filled = true;
        }
    }

    pub fn average(&self) -> Duration {
        let count = if self.filled { self.capacity } else { self.index };
        if count == 0 {
            return Duration::ZERO;
        }
        let total: Duration = self.history[..count].iter().sum();
        total / count as u32
    }

    pub fn max(&self) -> Duration {
        let count = if self.filled { self.capacity } else { self.index };
        self.history[..count]
            .iter()
            .copied()
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn count(&self) -> usize {
        if self.filled { self.capacity } else { self.index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_never_exceeds_clamp() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(70));
        let dt = clock.delta();
        assert!(dt <= MAX_FRAME_DT);
        // And a back-to-back query is near zero, not clamped.
        let dt2 = clock.delta();
        assert!(dt2 < MAX_FRAME_DT);
        assert!(dt2 >= 0.0);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let clock = FrameClock::new();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }

    #[test]
    fn frame_timer_tracks_history() {
        let mut timer = FrameTimer::new(3);
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(30));

        assert_eq!(timer.count(), 3);
        assert_eq!(timer.average(), Duration::from_millis(20));
        assert_eq!(timer.max(), Duration::from_millis(30));
    }

    #[test]
    fn frame_timer_wraps_around() {
        let mut timer = FrameTimer::new(2);
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(30)); // overwrites first

        assert_eq!(timer.count(), 2);
        // Should contain 20 and 30
        assert_eq!(timer.average(), Duration::from_millis(25));
    }
}
