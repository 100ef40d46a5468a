//! Per-tick snapshot for the host
//!
//! Copies out everything a renderer or HUD needs, so the host never holds
//! a reference into the simulation.

use serde::Serialize;

use crate::sim::{
    Enemy, GameEvent, GamePhase, GameState, Item, Platform, PlayerBody, RemovedEntity, TickOutcome,
};

/// World state after a tick, plus what changed during it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: PlayerBody,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub score: u64,
    pub health: u32,
    pub invincibility_remaining: f32,
    pub phase: GamePhase,
    /// Entities the host should stop drawing
    pub removed: Vec<RemovedEntity>,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    /// Capture `state` along with the outcome of the tick that produced it
    pub fn capture(state: &GameState, outcome: TickOutcome) -> Self {
        Self {
            tick: state.time_ticks,
            player: state.player.clone(),
            platforms: state.platforms.clone(),
            enemies: state.enemies.clone(),
            items: state.items.clone(),
            score: state.score,
            health: state.health,
            invincibility_remaining: state.invincibility_remaining,
            phase: state.phase,
            removed: outcome.removed,
            events: outcome.events,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
