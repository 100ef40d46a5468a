//! Collision detection and response
//!
//! All contacts are plain AABB overlap tests. "From above" is decided by a
//! tolerance band around the other box's top edge rather than by a swept
//! test, so side or underside contact with a platform is simply ignored.

use super::aabb::Aabb;
use super::body::PlayerBody;
use super::state::{EntityId, GameEvent, GameState, Platform, RemovedEntity};
use super::tick::TickOutcome;
use crate::tuning::Tuning;

/// How the player touched an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    /// Landed on its head
    Stomp,
    /// Any other contact
    Hit,
}

/// Classify contact between the player and an enemy, if they touch at all
pub fn classify_enemy_contact(player: &Aabb, enemy: &Aabb, tolerance: f32) -> Option<EnemyContact> {
    if !player.intersects(enemy) {
        return None;
    }
    if player.bottom_near_top_of(enemy, tolerance) {
        Some(EnemyContact::Stomp)
    } else {
        Some(EnemyContact::Hit)
    }
}

/// Land the player on any platform whose top is within the tolerance band.
///
/// Returns true if the player is resting on a platform after this pass.
pub fn resolve_platforms(player: &mut PlayerBody, platforms: &[Platform], tuning: &Tuning) -> bool {
    let mut landed = false;

    for platform in platforms {
        let body = player.aabb();
        let surface = platform.aabb();
        if body.intersects(&surface) && body.bottom_near_top_of(&surface, tuning.landing_tolerance) {
            player.settle_at(surface.top() - player.size.y + tuning.landing_sink);
            landed = true;
        }
    }

    landed
}

/// Resolve player/enemy contact: stomps kill, anything else hurts.
///
/// Skipped entirely while invincible. Otherwise every touching enemy is
/// processed, so several hits can land in one tick; once health is gone,
/// later hits in the same pass are no-ops. Returns true if the player took
/// a hit.
pub fn resolve_enemies(state: &mut GameState, tuning: &Tuning, outcome: &mut TickOutcome) -> bool {
    if state.is_invincible() || state.is_game_over() {
        return false;
    }

    let mut stomped: Vec<EntityId> = Vec::new();
    let mut took_hit = false;

    // Index pass; removals are applied after the scan
    for i in 0..state.enemies.len() {
        let (id, enemy_box) = (state.enemies[i].id, state.enemies[i].aabb());
        match classify_enemy_contact(&state.player.aabb(), &enemy_box, tuning.landing_tolerance) {
            Some(EnemyContact::Stomp) => {
                stomped.push(id);
                state.award(tuning.stomp_score);
                outcome.events.push(GameEvent::EnemyStomped { id });
                log::debug!("Stomped enemy {} (score {})", id, state.score);
            }
            Some(EnemyContact::Hit) if !state.is_game_over() => {
                took_hit = true;
                let ended = state.take_hit(tuning);
                outcome.events.push(GameEvent::PlayerHit {
                    health: state.health,
                });
                log::debug!("Hit by enemy {} (health {})", id, state.health);
                if ended {
                    outcome.events.push(GameEvent::GameOver { score: state.score });
                }
            }
            Some(EnemyContact::Hit) | None => {}
        }
    }

    if !stomped.is_empty() {
        state.enemies.retain(|e| !stomped.contains(&e.id));
        outcome
            .removed
            .extend(stomped.into_iter().map(RemovedEntity::Enemy));
    }

    took_hit
}

/// Collect every item the player overlaps
pub fn resolve_items(state: &mut GameState, tuning: &Tuning, outcome: &mut TickOutcome) {
    let player_box = state.player.aabb();
    let collected: Vec<EntityId> = state
        .items
        .iter()
        .filter(|item| player_box.intersects(&item.aabb()))
        .map(|item| item.id)
        .collect();

    if collected.is_empty() {
        return;
    }

    state.items.retain(|item| !collected.contains(&item.id));
    for id in collected {
        state.award(tuning.item_score);
        outcome.events.push(GameEvent::ItemCollected { id });
        outcome.removed.push(RemovedEntity::Item(id));
        log::debug!("Collected item {} (score {})", id, state.score);
    }
}
