//! Frame clock
//!
//! Turns the absolute timestamps handed out by the display refresh into
//! per-frame deltas.

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Milliseconds since the previous call. The first call after a reset
    /// returns 0 so a stale timestamp can't cause a speed or physics spike.
    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
