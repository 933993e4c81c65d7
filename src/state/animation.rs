//! Pulse animation for the "building your preview" screen

use std::time::{Duration, Instant};

/// Repeating fade in/out, one full cycle per [`PulseAnimation::PERIOD`]
#[derive(Debug, Clone, Copy)]
pub struct PulseAnimation {
    pub start_time: Instant,
}

impl PulseAnimation {
    const PERIOD: Duration = Duration::from_millis(1500);

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start_time: Instant) -> Self {
        Self { start_time }
    }

    /// Brightness in 0.0..=1.0 at `now`; 1.0 at the start of each cycle
    pub fn intensity_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        let period = Self::PERIOD.as_secs_f32();
        let phase = (elapsed.as_secs_f32() % period) / period;
        // Triangle wave 1 -> 0 -> 1, smoothed
        let tri = (phase * 2.0 - 1.0).abs();
        simple_easing::sine_in_out(tri)
    }

    pub fn intensity(&self) -> f32 {
        self.intensity_at(Instant::now())
    }
}

impl Default for PulseAnimation {
    fn default() -> Self {
        Self::new()
    }
}
