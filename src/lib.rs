//! Stomp Run - A minimal 2D side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Per-tick simulation (physics, collisions, game state)
//! - `game`: Host boundary (initialize / advance / reset)
//! - `snapshot`: What the host sees after each tick
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use game::Game;
pub use snapshot::Snapshot;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// Reference values. `Tuning::default()` is built from these.
pub mod consts {
    /// Nominal tick length in seconds, for hosts without a clock (~16 ms)
    pub const NOMINAL_DT: f32 = 0.016;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Y coordinate of the ground surface (screen coords, +y down)
    pub const GROUND_LEVEL: f32 = 600.0;

    /// Player physics, in units per tick (not scaled by dt)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_FORCE: f32 = -13.0;
    pub const MOVE_SPEED: f32 = 5.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 84.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;

    /// Vertical window around a surface top that counts as landing on it
    pub const LANDING_TOLERANCE: f32 = 15.0;
    /// How far the player sinks into a platform when resting on it
    pub const LANDING_SINK: f32 = 10.0;

    /// Combat and scoring
    pub const STARTING_HEALTH: u32 = 3;
    pub const INVINCIBILITY_SECS: f32 = 2.0;
    pub const STOMP_SCORE: u64 = 10;
    pub const ITEM_SCORE: u64 = 5;
}

/// Clamp a host-supplied elapsed time to a usable value.
///
/// Negative and NaN become 0 so no time passes.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 { 0.0 } else { dt }
}
