//! Initial world construction and enemy-grid layout.

use crate::config::GameConfig;
use crate::entities::{Enemy, EnemyGrid, Ship, WorldState};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the starting world: ship at its start position, a fresh enemy grid,
/// no bullets, score 0 and the previously persisted high score.
pub fn init_world(config: &GameConfig, high_score: u32) -> WorldState {
    let (x, y) = ship_start(config);
    WorldState {
        ship: Ship {
            x,
            y,
            width: config.ship.width,
            height: config.ship.height,
            color: config.ship.color,
        },
        enemies: create_enemies(config),
        bullets: Vec::new(),
        score: 0,
        high_score,
        paused: false,
        width: config.canvas.width,
        height: config.canvas.height,
    }
}

/// Horizontal centre of the canvas (top-left anchored, so the ship sits just
/// right of centre), `bottom_margin` above the bottom edge.
pub fn ship_start(config: &GameConfig) -> (f64, f64) {
    (
        config.canvas.width / 2.0,
        config.canvas.height - config.ship.bottom_margin,
    )
}

/// Lay out a complete `rows × columns` grid, horizontally centred on the
/// canvas and starting `offset_top` from the top edge.
pub fn create_enemies(config: &GameConfig) -> EnemyGrid {
    let e = &config.enemies;
    let start_x = (config.canvas.width - config.grid_width()) / 2.0;

    (0..e.rows)
        .map(|row| {
            let y = row as f64 * (e.height + e.padding) + e.offset_top;
            (0..e.columns)
                .map(|column| Enemy {
                    x: start_x + column as f64 * (e.width + e.padding),
                    y,
                    width: e.width,
                    height: e.height,
                    color: e.color,
                })
                .collect()
        })
        .collect()
}

/// Replace whatever is left of the current wave with a fresh grid.
pub fn respawn_enemies(world: &mut WorldState, config: &GameConfig) {
    world.enemies = create_enemies(config);
}

/// Full reset after the ship is hit.  The high score is left alone.
pub fn reset_game(world: &mut WorldState, config: &GameConfig) {
    let (x, y) = ship_start(config);
    world.ship.x = x;
    world.ship.y = y;
    world.score = 0;
    world.bullets.clear();
    respawn_enemies(world, config);
}
