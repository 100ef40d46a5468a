//! Simulation tick
//!
//! Advances the world by one frame in a fixed order:
//! player physics, platform landing, enemy patrol, enemy contact, item
//! pickup, then the invincibility countdown.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_enemies, resolve_items, resolve_platforms};
use super::state::{GameEvent, GameState, RemovedEntity, Surface};
use crate::sanitize_dt;
use crate::tuning::Tuning;

/// Input for a single tick: which keys are held right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl TickInput {
    /// -1, 0 or +1; opposite directions cancel
    #[inline]
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// What a tick produced besides the state change itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    pub removed: Vec<RemovedEntity>,
}

/// Advance the game state by one tick.
///
/// `dt` is the real elapsed time in seconds and only drives the
/// invincibility countdown. Does nothing once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if state.is_game_over() {
        log::debug!("tick ignored: game is over");
        return outcome;
    }

    let dt = sanitize_dt(dt);
    state.time_ticks += 1;

    // --- PLAYER PHYSICS ---
    let was_supported = state.player.can_jump;
    let was_airborne = state.player.is_above_ground(tuning);

    if state.player.apply_input(input, tuning) {
        outcome.events.push(GameEvent::Jumped);
    }
    state.player.integrate(tuning);
    let on_ground = state.player.clamp_to_ground(tuning);

    // --- PLATFORMS ---
    let on_platform = resolve_platforms(&mut state.player, &state.platforms, tuning);

    // Walked off a ledge: no jumping until supported again
    if !on_platform && !on_ground && was_airborne {
        state.player.can_jump = false;
    }

    if !was_supported {
        if on_platform {
            outcome.events.push(GameEvent::Landed {
                surface: Surface::Platform,
            });
        } else if on_ground {
            outcome.events.push(GameEvent::Landed {
                surface: Surface::Ground,
            });
        }
    }

    // --- ENEMIES ---
    for enemy in &mut state.enemies {
        enemy.patrol(tuning.field_width);
    }
    let took_hit = resolve_enemies(state, tuning, &mut outcome);

    // --- ITEMS ---
    resolve_items(state, tuning, &mut outcome);

    // A window opened this tick starts counting next tick
    if !took_hit {
        state.advance_invincibility(dt);
    }

    outcome
}
