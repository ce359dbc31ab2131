//! All game entity types. Update rules live in `compute`.

use std::f64::consts::PI;
use std::sync::Arc;

use crate::config::{GameConfig, FIRE_RATE_BASE};
use crate::path::EnemyPath;

/// What a draw call is for; each kind has its own sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Bullet,
    Enemy,
    Player,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    /// Top-left corner of the sprite, playfield pixels.
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Firing angle in degrees; the sprite keeps it for its whole flight.
    pub angle: f64,
}

impl Bullet {
    /// Angle 0 points straight down (the +90° turns screen-space "right"
    /// into "down").
    pub fn new(x: f64, y: f64, angle: f64, speed: f64) -> Self {
        let radians = (angle + 90.0) * PI / 180.0;
        Bullet {
            x,
            y,
            vx: radians.cos() * speed,
            vy: radians.sin() * speed,
            angle,
        }
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    /// Whether the host pointer should be drawn (it is hidden while it sits
    /// inside the playfield).
    pub pointer_visible: bool,
}

impl Player {
    /// Centred in the playfield.
    pub fn new(config: &GameConfig) -> Self {
        let size = config.sprite_size;
        Player {
            x: f64::from(config.playfield_width().saturating_sub(size) / 2),
            y: f64::from(config.screen_height.saturating_sub(size) / 2),
            pointer_visible: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    /// Spawn point; the path output is added to it every frame.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Degrees.
    pub angle: f64,
    pub bullet_count: u32,
    /// Degrees between neighbouring bullets of one fan.
    pub angle_step: f64,
    /// Fires on frames that are a multiple of this.
    pub fire_interval: u64,
    pub path: Arc<dyn EnemyPath>,
    /// Game-clock reading when the enemy appeared.
    pub spawned_at_ms: u64,
}

impl Enemy {
    /// A new enemy sits just above the top edge at `offset_x`.
    ///
    /// `bullet_count` and `bullet_frequency` are clamped to at least 1 so the
    /// fan and the fire interval are always defined.
    pub fn new(
        bullet_count: u32,
        bullet_frequency: u32,
        offset_x: f64,
        sprite_size: u32,
        path: Arc<dyn EnemyPath>,
        spawned_at_ms: u64,
    ) -> Self {
        let bullet_count = bullet_count.max(1);
        let offset_y = -f64::from(sprite_size);
        Enemy {
            x: offset_x,
            y: offset_y,
            offset_x,
            offset_y,
            angle: 0.0,
            bullet_count,
            angle_step: 360.0 / f64::from(bullet_count),
            fire_interval: u64::from((FIRE_RATE_BASE / bullet_frequency.max(1)).max(1)),
            path,
            spawned_at_ms,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the simulation owns. Cloneable so `compute::tick` can return a
/// fresh copy without mutating its input.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    /// One point per bullet that reached the player.
    pub score: u64,
    pub frame: u64,
    /// Accumulated angle that spreads spawn points across the playfield.
    pub theta: f64,
    pub config: GameConfig,
}
