//! Game state and core simulation types
//!
//! `GameState::new` is the single setup path: it builds the player, the
//! reference level and the counters together, both at startup and on reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::body::PlayerBody;
use crate::tuning::Tuning;

/// Stable identifier for removable entities
pub type EntityId = u32;

/// Reference level layout as (x, y, width, height)
const REFERENCE_PLATFORMS: [(f32, f32, f32, f32); 3] = [
    (200.0, 450.0, 100.0, 50.0),
    (400.0, 350.0, 100.0, 50.0),
    (600.0, 250.0, 100.0, 50.0),
];

/// (x, y, width, height, velocity_x)
const REFERENCE_ENEMIES: [(f32, f32, f32, f32, f32); 2] = [
    (300.0, 420.0, 90.0, 70.0, -2.0),
    (500.0, 320.0, 90.0, 70.0, 2.0),
];

const REFERENCE_ITEMS: [(f32, f32, f32, f32); 2] = [
    (350.0, 400.0, 50.0, 50.0),
    (550.0, 300.0, 50.0, 50.0),
];

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Health ran out; frozen until reset
    GameOver,
}

/// What the player came to rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Ground,
    Platform,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed { surface: Surface },
    EnemyStomped { id: EntityId },
    PlayerHit { health: u32 },
    ItemCollected { id: EntityId },
    GameOver { score: u64 },
}

/// An entity that left the world this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovedEntity {
    Enemy(EntityId),
    Item(EntityId),
}

/// A static platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (units per tick)
    pub velocity_x: f32,
}

impl Enemy {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A collectible item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Item {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Score (only ever increases within a run)
    pub score: u64,
    /// Player health, clamped to [0, starting_health]
    pub health: u32,
    /// Seconds left in the invincibility window
    pub invincibility_remaining: f32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The player
    pub player: PlayerBody,
    pub platforms: Vec<Platform>,
    /// Active enemies (in spawn order)
    pub enemies: Vec<Enemy>,
    /// Active items (in spawn order)
    pub items: Vec<Item>,
    /// Next entity ID
    next_id: EntityId,
}

impl GameState {
    /// Build a fresh run with the reference level
    pub fn new(tuning: &Tuning) -> Self {
        let mut state = Self::empty(tuning);

        state.platforms = REFERENCE_PLATFORMS
            .iter()
            .map(|&(x, y, w, h)| Platform::new(x, y, w, h))
            .collect();

        for &(x, y, w, h, vx) in &REFERENCE_ENEMIES {
            state.spawn_enemy(Vec2::new(x, y), Vec2::new(w, h), vx);
        }
        for &(x, y, w, h) in &REFERENCE_ITEMS {
            state.spawn_item(Vec2::new(x, y), Vec2::new(w, h));
        }

        log::info!(
            "Level ready: {} platforms, {} enemies, {} items",
            state.platforms.len(),
            state.enemies.len(),
            state.items.len()
        );

        state
    }

    /// A run with the player spawned but no level entities
    pub fn empty(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            health: tuning.starting_health,
            invincibility_remaining: 0.0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player: PlayerBody::spawn(tuning),
            platforms: Vec::new(),
            enemies: Vec::new(),
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_enemy(&mut self, pos: Vec2, size: Vec2, velocity_x: f32) -> EntityId {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos,
            size,
            velocity_x,
        });
        id
    }

    pub fn spawn_item(&mut self, pos: Vec2, size: Vec2) -> EntityId {
        let id = self.next_entity_id();
        self.items.push(Item { id, pos, size });
        id
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincibility_remaining > 0.0
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add points to the score
    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Take one point of damage and open the invincibility window.
    ///
    /// Returns true if this hit ended the run.
    pub fn take_hit(&mut self, tuning: &Tuning) -> bool {
        self.health = self.health.saturating_sub(1).min(tuning.starting_health);
        self.invincibility_remaining = tuning.invincibility_secs;

        if self.health == 0 && self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            log::info!("Game over! Final score: {}", self.score);
            return true;
        }
        false
    }

    /// Count the invincibility window down by `dt` seconds
    pub fn advance_invincibility(&mut self, dt: f32) {
        if self.invincibility_remaining > 0.0 {
            self.invincibility_remaining = (self.invincibility_remaining - dt).max(0.0);
        }
    }
}
