//! Player physics
//!
//! Gravity is applied per frame, not per millisecond. The jump arc therefore
//! depends on the display refresh rate, which is how the game has always felt.

use super::state::Player;

impl Player {
    /// Integrate one frame: gravity into velocity, velocity into position,
    /// then clamp to the ground line
    pub fn step(&mut self, gravity: f32) {
        self.dy += gravity;
        self.pos.y += self.dy;

        // Landing exactly on the line counts as touching down
        let ground = self.ground_y();
        if self.pos.y >= ground && self.dy >= 0.0 {
            self.pos.y = ground;
            self.dy = 0.0;
            self.grounded = true;
        }
    }

    /// Start a jump if standing on the ground. Returns whether it happened.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.dy = impulse;
        self.grounded = false;
        true
    }
}
