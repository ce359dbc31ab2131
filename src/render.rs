//! The drawing boundary between the simulation and whatever shows it.

use crate::entities::{EntityKind, GameState};

/// A target the game can draw one frame onto.
///
/// Coordinates are playfield pixels (sprite top-left), angles are degrees.
pub trait Surface {
    type Error;

    fn set_pointer_visible(&mut self, visible: bool) -> Result<(), Self::Error>;

    fn draw_entity(&mut self, kind: EntityKind, x: f64, y: f64, angle: f64)
        -> Result<(), Self::Error>;

    fn draw_scoreboard(&mut self, score: u64, elapsed_secs: u64) -> Result<(), Self::Error>;
}

/// Issue the draw calls for one frame: player, bullets, enemies, then the
/// scoreboard. `elapsed_ms` is the game clock.
pub fn render_frame<S: Surface>(
    surface: &mut S,
    state: &GameState,
    elapsed_ms: u64,
) -> Result<(), S::Error> {
    surface.set_pointer_visible(state.player.pointer_visible)?;

    let player = &state.player;
    surface.draw_entity(EntityKind::Player, player.x, player.y, 0.0)?;

    for bullet in &state.bullets {
        surface.draw_entity(EntityKind::Bullet, bullet.x, bullet.y, bullet.angle)?;
    }
    for enemy in &state.enemies {
        surface.draw_entity(EntityKind::Enemy, enemy.x, enemy.y, enemy.angle)?;
    }

    surface.draw_scoreboard(state.score, elapsed_ms / 1000)
}
