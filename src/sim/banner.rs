//! Milestone banner timing

/// Text shown while the banner is up
pub const BANNER_TEXT: &str = "GMOO!";

/// Transient celebratory overlay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Banner {
    pub visible: bool,
    /// Time on screen since the last trigger
    pub elapsed_ms: f64,
}

impl Banner {
    /// Show the banner, restarting its timer even if already visible
    pub fn trigger(&mut self) {
        self.visible = true;
        self.elapsed_ms = 0.0;
    }

    /// Accumulate frame time; hides once `duration_ms` is exceeded
    pub fn advance(&mut self, dt_ms: f64, duration_ms: f64) {
        if !self.visible {
            return;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms > duration_ms {
            self.visible = false;
        }
    }
}
