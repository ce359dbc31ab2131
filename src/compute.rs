//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current state
//! (or entity) and returns a brand-new value. Time enters only through the
//! `now_ms` game-clock reading passed in by the caller, so a run is fully
//! reproducible from its sequence of clock readings and pointer events.

use std::f64::consts::FRAC_PI_4;
use std::sync::Arc;

use crate::config::GameConfig;
use crate::entities::{Bullet, Enemy, GameState, Player};
use crate::geometry::circles_overlap;
use crate::path::LinearDescent;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player centred, nothing else alive.
pub fn init_state(config: GameConfig) -> GameState {
    GameState {
        player: Player::new(&config),
        enemies: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        frame: 0,
        theta: 0.0,
        config,
    }
}

/// Horizontal spawn point for the enemy created at spawn angle `theta`.
///
/// Sweeps a cosine across the playfield so consecutive enemies alternate
/// sides instead of stacking.
pub fn spawn_offset_x(config: &GameConfig, theta: f64) -> f64 {
    let half = f64::from(config.playfield_width().saturating_sub(config.sprite_size) / 2);
    half + (half - config.sprite_radius()) * theta.cos()
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Move the player to the pointer, clamped per axis so the sprite stays in
/// the playfield horizontally and on screen vertically. The pointer stays
/// hidden only when neither axis had to be clamped.
pub fn apply_pointer(state: &GameState, pointer_x: f64, pointer_y: f64) -> GameState {
    let config = &state.config;
    let size = f64::from(config.sprite_size);
    let max_x = (f64::from(config.playfield_width()) - size).max(0.0);
    let max_y = (f64::from(config.screen_height) - size).max(0.0);

    let x = pointer_x.clamp(0.0, max_x);
    let y = pointer_y.clamp(0.0, max_y);
    let clamped = x != pointer_x || y != pointer_y;

    GameState {
        player: Player {
            x,
            y,
            pointer_visible: clamped,
        },
        ..state.clone()
    }
}

// ── Entity update rules ──────────────────────────────────────────────────────

/// Move an enemy along its path. `None` once it has left through the left,
/// right or bottom edge; enemies above the top edge are still arriving.
pub fn advance_enemy(enemy: &Enemy, now_ms: u64, config: &GameConfig) -> Option<Enemy> {
    let elapsed = now_ms.saturating_sub(enemy.spawned_at_ms) as f64;
    let step = enemy.path.evaluate(elapsed);

    let x = step.dx + enemy.offset_x;
    let y = step.dy + enemy.offset_y;
    let size = f64::from(config.sprite_size);

    if x + size < 0.0
        || x > f64::from(config.playfield_width())
        || y > f64::from(config.screen_height)
    {
        return None;
    }

    Some(Enemy {
        x,
        y,
        angle: enemy.angle + step.angle_delta,
        ..enemy.clone()
    })
}

/// The fan an enemy shoots on `frame`: `bullet_count` bullets evenly spread
/// around the full circle starting at the enemy's angle, or nothing when
/// `frame` is not a multiple of the fire interval.
pub fn fire(enemy: &Enemy, frame: u64, bullet_speed: f64) -> Vec<Bullet> {
    if frame % enemy.fire_interval != 0 {
        return Vec::new();
    }
    (0..enemy.bullet_count)
        .map(|i| {
            let angle = enemy.angle + f64::from(i) * enemy.angle_step;
            Bullet::new(enemy.x, enemy.y, angle, bullet_speed)
        })
        .collect()
}

/// Translate a bullet by its velocity. `None` once the sprite is entirely
/// outside the playfield (one sprite of slack on every edge).
pub fn advance_bullet(bullet: &Bullet, config: &GameConfig) -> Option<Bullet> {
    let moved = translate(bullet);
    bullet_in_bounds(&moved, config).then_some(moved)
}

fn translate(bullet: &Bullet) -> Bullet {
    Bullet {
        x: bullet.x + bullet.vx,
        y: bullet.y + bullet.vy,
        ..bullet.clone()
    }
}

fn bullet_in_bounds(bullet: &Bullet, config: &GameConfig) -> bool {
    let size = f64::from(config.sprite_size);
    !(bullet.y + size < 0.0
        || bullet.y > f64::from(config.screen_height)
        || bullet.x + size < 0.0
        || bullet.x > f64::from(config.playfield_width()))
}

/// Whether a bullet overlaps the player, both treated as circles of the
/// sprite radius.
pub fn hits_player(bullet: &Bullet, player: &Player, config: &GameConfig) -> bool {
    let r = config.sprite_radius();
    circles_overlap(player.x, player.y, r, bullet.x, bullet.y, r)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame. `now_ms` is the game clock; enemy
/// paths are evaluated against it.
pub fn tick(state: &GameState, now_ms: u64) -> GameState {
    let config = &state.config;
    let frame = state.frame;

    // ── 1. Spawn ─────────────────────────────────────────────────────────────
    let mut theta = state.theta;
    let mut enemies = state.enemies.clone();
    if frame % config.spawn_every_frames.max(1) == 0 {
        theta += FRAC_PI_4;
        let x = spawn_offset_x(config, theta);
        let path = Arc::new(LinearDescent {
            speed_per_ms: config.path_descent_per_ms,
            spin_degrees: config.path_spin_degrees,
        });
        enemies.push(Enemy::new(
            config.enemy_bullet_count,
            config.enemy_bullet_frequency,
            x,
            config.sprite_size,
            path,
            now_ms,
        ));
        log::debug!("frame {}: enemy spawned at x={:.1}", frame, x);
    }

    // ── 2. Move enemies, retire the ones that left, let the rest fire ───────
    let before = enemies.len();
    let enemies: Vec<Enemy> = enemies
        .iter()
        .filter_map(|e| advance_enemy(e, now_ms, config))
        .collect();
    if enemies.len() < before {
        log::debug!("frame {}: {} enemies left the playfield", frame, before - enemies.len());
    }

    let mut bullets = state.bullets.clone();
    for enemy in &enemies {
        bullets.extend(fire(enemy, frame, config.bullet_speed));
    }

    // ── 3. Move bullets; a hit scores even on the frame the bullet exits ────
    let mut hits: u64 = 0;
    let bullets: Vec<Bullet> = bullets
        .iter()
        .filter_map(|b| {
            let moved = translate(b);
            if hits_player(&moved, &state.player, config) {
                hits += 1;
                return None;
            }
            bullet_in_bounds(&moved, config).then_some(moved)
        })
        .collect();
    if hits > 0 {
        log::debug!("frame {}: player hit by {} bullets", frame, hits);
    }

    GameState {
        enemies,
        bullets,
        score: state.score + hits,
        frame: frame + 1,
        theta,
        ..state.clone()
    }
}
