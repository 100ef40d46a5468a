//! Game balance and physics tuning
//!
//! Every gameplay constant the simulation reads comes through here, so a
//! host can swap balance without recompiling. Defaults reproduce the
//! reference game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading tuning data
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Physics and scoring parameters
///
/// Physics values are per tick, matching the fixed-step reference game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Y of the ground surface; bodies rest with their bottom here
    pub ground_level: f32,

    // === Player physics ===
    pub gravity: f32,
    /// Initial vertical velocity of a jump (negative is up)
    pub jump_force: f32,
    pub move_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,

    // === Collision ===
    /// Half-height of the band around a surface top that counts as landing
    pub landing_tolerance: f32,
    /// Resting sink into a platform after landing
    pub landing_sink: f32,

    // === Combat / scoring ===
    pub starting_health: u32,
    /// Invincibility window after a hit (seconds)
    pub invincibility_secs: f32,
    pub stomp_score: u64,
    pub item_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_level: GROUND_LEVEL,

            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            move_speed: MOVE_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: PLAYER_SPAWN_X,

            landing_tolerance: LANDING_TOLERANCE,
            landing_sink: LANDING_SINK,

            starting_health: STARTING_HEALTH,
            invincibility_secs: INVINCIBILITY_SECS,
            stomp_score: STOMP_SCORE,
            item_score: ITEM_SCORE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with (NaN included)
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.field_width > 0.0) {
            return invalid("field_width", "must be positive");
        }
        if !(self.field_height > 0.0) {
            return invalid("field_height", "must be positive");
        }
        if !(self.player_width > 0.0) {
            return invalid("player_width", "must be positive");
        }
        if !(self.player_height > 0.0) {
            return invalid("player_height", "must be positive");
        }
        if !(self.ground_level > self.player_height) {
            return invalid("ground_level", "must leave room for the player");
        }
        if self.ground_level > self.field_height {
            return invalid("ground_level", "must lie within the field");
        }
        if !(self.jump_force < 0.0) {
            return invalid("jump_force", "must be negative (upward)");
        }
        if !(self.gravity >= 0.0) {
            return invalid("gravity", "must not be negative");
        }
        if !(self.landing_tolerance >= 0.0) {
            return invalid("landing_tolerance", "must not be negative");
        }
        if !(self.invincibility_secs >= 0.0) {
            return invalid("invincibility_secs", "must not be negative");
        }
        if !self.move_speed.is_finite() {
            return invalid("move_speed", "must be finite");
        }
        if !self.spawn_x.is_finite() {
            return invalid("spawn_x", "must be finite");
        }
        if !(self.landing_sink.is_finite() && self.landing_sink >= 0.0) {
            return invalid("landing_sink", "must be finite and not negative");
        }
        if self.starting_health == 0 {
            return invalid("starting_health", "must be at least 1");
        }
        Ok(())
    }

    /// Y where the player's top sits when standing on the ground
    #[inline]
    pub fn ground_rest_y(&self) -> f32 {
        self.ground_level - self.player_height
    }
}
