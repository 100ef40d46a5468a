//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of host concerns:
//! - Fixed per-tick physics increments
//! - Elapsed time only drives timers
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod body;
pub mod collision;
pub mod patrol;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use body::PlayerBody;
pub use collision::{EnemyContact, classify_enemy_contact, resolve_enemies, resolve_items, resolve_platforms};
pub use state::{
    Enemy, EntityId, GameEvent, GamePhase, GameState, Item, Platform, RemovedEntity, Surface,
};
pub use tick::{TickInput, TickOutcome, tick};
