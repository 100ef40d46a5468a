//! Host boundary
//!
//! `Game` owns the simulation state and its tuning. A host builds one, calls
//! `advance_tick` once per frame with the keys currently held, and calls
//! `reset` after a game over.

use crate::sim::{GamePhase, GameState, TickInput, TickOutcome, tick};
use crate::snapshot::Snapshot;
use crate::tuning::{Tuning, TuningError};

/// A running game
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    tuning: Tuning,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Game with the reference tuning
    pub fn new() -> Self {
        let tuning = Tuning::default();
        Self {
            state: GameState::new(&tuning),
            tuning,
        }
    }

    /// Game with custom tuning; the tuning is validated first
    pub fn initialize(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::new(&tuning),
            tuning,
        })
    }

    /// Advance one tick with the held keys and the real elapsed seconds.
    ///
    /// After a game over this changes nothing and returns the frozen state.
    pub fn advance_tick(&mut self, input: &TickInput, elapsed: f32) -> Snapshot {
        let outcome = tick(&mut self.state, input, &self.tuning, elapsed);
        Snapshot::capture(&self.state, outcome)
    }

    /// Start over: fresh level, full health, zero score
    pub fn reset(&mut self) -> Snapshot {
        log::info!(
            "Resetting game (previous score {}, tick {})",
            self.state.score,
            self.state.time_ticks
        );
        self.state = GameState::new(&self.tuning);
        self.snapshot()
    }

    /// Current state without advancing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, TickOutcome::default())
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
