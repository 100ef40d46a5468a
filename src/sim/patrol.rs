//! Enemy patrol AI
//!
//! Enemies walk at a constant speed and bounce off the field edges.

use super::state::Enemy;

impl Enemy {
    /// Move one tick and reverse direction at the field bounds
    pub fn patrol(&mut self, field_width: f32) {
        self.pos.x += self.velocity_x;

        if self.pos.x <= 0.0 || self.pos.x >= field_width - self.size.x {
            self.velocity_x = -self.velocity_x;
        }
    }
}
