//! Player kinematics
//!
//! Movement, jump impulse and gravity are fixed increments per tick; they are
//! deliberately not scaled by the elapsed time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// The player-controlled body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units per tick, +y is down)
    pub velocity_y: f32,
    /// Set while supported by the ground or a platform
    pub can_jump: bool,
}

impl PlayerBody {
    /// Body standing on the ground at the spawn column
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.spawn_x, tuning.ground_rest_y()),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            velocity_y: 0.0,
            can_jump: true,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True if the body's top is above its resting height on the ground
    #[inline]
    pub fn is_above_ground(&self, tuning: &Tuning) -> bool {
        self.pos.y < tuning.ground_level - self.size.y
    }

    /// Apply horizontal intent and the jump impulse.
    ///
    /// Returns true if a jump started this tick.
    pub fn apply_input(&mut self, input: &TickInput, tuning: &Tuning) -> bool {
        self.pos.x += input.horizontal() * tuning.move_speed;

        if input.jump && self.can_jump {
            self.velocity_y = tuning.jump_force;
            self.can_jump = false;
            return true;
        }
        false
    }

    /// Accelerate downward and move by the new velocity
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.velocity_y += tuning.gravity;
        self.pos.y += self.velocity_y;
    }

    /// Snap onto the ground if the body reached it. Returns true on contact.
    pub fn clamp_to_ground(&mut self, tuning: &Tuning) -> bool {
        if self.bottom() >= tuning.ground_level {
            self.settle_at(tuning.ground_level - self.size.y);
            true
        } else {
            false
        }
    }

    /// Come to rest with the top edge at `y`
    pub fn settle_at(&mut self, y: f32) {
        self.pos.y = y;
        self.velocity_y = 0.0;
        self.can_jump = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(left: bool, right: bool, jump: bool) -> TickInput {
        TickInput { left, right, jump }
    }

    #[test]
    fn test_spawn_on_ground() {
        let tuning = Tuning::default();
        let body = PlayerBody::spawn(&tuning);
        assert_eq!(body.pos, Vec2::new(100.0, 516.0));
        assert_eq!(body.bottom(), tuning.ground_level);
        assert!(body.can_jump);
        assert!(!body.is_above_ground(&tuning));
    }

    #[test]
    fn test_horizontal_movement() {
        let tuning = Tuning::default();
        let mut body = PlayerBody::spawn(&tuning);

        body.apply_input(&input(false, true, false), &tuning);
        assert_eq!(body.pos.x, 105.0);

        body.apply_input(&input(true, false, false), &tuning);
        body.apply_input(&input(true, false, false), &tuning);
        assert_eq!(body.pos.x, 95.0);

        // Both directions cancel out
        body.apply_input(&input(true, true, false), &tuning);
        assert_eq!(body.pos.x, 95.0);
    }

    #[test]
    fn test_jump_requires_can_jump() {
        let tuning = Tuning::default();
        let mut body = PlayerBody::spawn(&tuning);

        assert!(body.apply_input(&input(false, false, true), &tuning));
        assert_eq!(body.velocity_y, tuning.jump_force);
        assert!(!body.can_jump);

        // Held key does not re-trigger
        body.velocity_y = -5.0;
        assert!(!body.apply_input(&input(false, false, true), &tuning));
        assert_eq!(body.velocity_y, -5.0);
    }

    #[test]
    fn test_ground_clamp() {
        let tuning = Tuning::default();
        let mut body = PlayerBody::spawn(&tuning);
        body.can_jump = false;

        body.integrate(&tuning);
        assert_eq!(body.pos.y, 516.5);
        assert!(body.clamp_to_ground(&tuning));
        assert_eq!(body.pos.y, 516.0);
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.can_jump);
    }

    #[test]
    fn test_no_clamp_in_air() {
        let tuning = Tuning::default();
        let mut body = PlayerBody::spawn(&tuning);
        body.pos.y = 200.0;
        body.can_jump = false;

        body.integrate(&tuning);
        assert!(!body.clamp_to_ground(&tuning));
        assert_eq!(body.velocity_y, tuning.gravity);
        assert!(!body.can_jump);
    }

    proptest! {
        #[test]
        fn prop_gravity_adds_exactly_per_tick(start_y in 0.0f32..300.0, ticks in 1usize..20) {
            let tuning = Tuning::default();
            let mut body = PlayerBody::spawn(&tuning);
            body.pos.y = start_y;
            body.can_jump = false;

            let mut prev = body.velocity_y;
            for _ in 0..ticks {
                body.integrate(&tuning);
                if body.clamp_to_ground(&tuning) {
                    prop_assert_eq!(body.velocity_y, 0.0);
                    break;
                }
                prop_assert_eq!(body.velocity_y, prev + tuning.gravity);
                prev = body.velocity_y;
            }
        }
    }
}
