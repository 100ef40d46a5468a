//! Stomp Run entry point
//!
//! Headless runner: drives the simulation with a scripted autopilot at the
//! nominal tick rate and logs what happens.
//!
//! Usage: `stomp-run [tuning.json] [ticks]`

use stomp_run::consts::NOMINAL_DT;
use stomp_run::sim::{GameEvent, TickInput};
use stomp_run::{Game, Snapshot, Tuning};

/// Ticks to run when none are given (~1 minute at 60 Hz)
const DEFAULT_TICKS: u64 = 3600;
/// Game overs to recover from before stopping
const MAX_RESETS: u32 = 3;
/// Jump at least this often so the autopilot explores platforms
const JUMP_CADENCE: u64 = 90;
/// How far ahead an enemy triggers an evasive jump
const ENEMY_LOOKAHEAD: f32 = 120.0;

/// Walks back and forth across the field, jumping over (or onto) enemies
struct Autopilot {
    heading_right: bool,
}

impl Autopilot {
    fn new() -> Self {
        Self {
            heading_right: true,
        }
    }

    fn next_input(&mut self, snap: &Snapshot, tuning: &Tuning) -> TickInput {
        let player = &snap.player;
        if player.pos.x + player.size.x >= tuning.field_width {
            self.heading_right = false;
        } else if player.pos.x <= 0.0 {
            self.heading_right = true;
        }

        let enemy_ahead = snap.enemies.iter().any(|enemy| {
            let dx = enemy.pos.x - player.pos.x;
            if self.heading_right {
                dx > 0.0 && dx < ENEMY_LOOKAHEAD
            } else {
                dx < 0.0 && dx > -(ENEMY_LOOKAHEAD + enemy.size.x)
            }
        });

        TickInput {
            left: !self.heading_right,
            right: self.heading_right,
            jump: enemy_ahead || snap.tick % JUMP_CADENCE == 0,
        }
    }
}

fn load_tuning(path: Option<String>) -> Tuning {
    match path {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning from {}: {}; using defaults", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    }
}

fn log_events(snap: &Snapshot) {
    for event in &snap.events {
        match event {
            GameEvent::EnemyStomped { .. } | GameEvent::ItemCollected { .. } => {
                log::info!("tick {}: {:?} -> score {}", snap.tick, event, snap.score);
            }
            GameEvent::PlayerHit { health } => {
                log::warn!("tick {}: hit! health {}", snap.tick, health);
            }
            GameEvent::GameOver { score } => {
                log::warn!("tick {}: game over with score {}", snap.tick, score);
            }
            GameEvent::Jumped | GameEvent::Landed { .. } => {
                log::trace!("tick {}: {:?}", snap.tick, event);
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Stomp Run (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = load_tuning(args.next());
    let ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TICKS);

    let mut game = match Game::initialize(tuning) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid tuning: {}; using defaults", e);
            Game::new()
        }
    };
    let tuning = game.tuning().clone();

    let mut autopilot = Autopilot::new();
    let mut snap = game.snapshot();
    let mut resets = 0;

    for _ in 0..ticks {
        let input = autopilot.next_input(&snap, &tuning);
        snap = game.advance_tick(&input, NOMINAL_DT);
        log_events(&snap);

        if snap.is_game_over() {
            if resets == MAX_RESETS {
                break;
            }
            resets += 1;
            snap = game.reset();
            autopilot = Autopilot::new();
        }
    }

    log::info!(
        "Finished after {} resets: score {}, health {}, {} enemies and {} items left",
        resets,
        snap.score,
        snap.health,
        snap.enemies.len(),
        snap.items.len()
    );

    match snap.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final snapshot: {}", e),
    }
}
