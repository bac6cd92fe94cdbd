//! Per-tick movement of bullets and enemies.

use crate::entities::WorldState;

/// Move every bullet up by `speed`, then drop the ones whose bottom edge has
/// left the top of the canvas.  All positions are updated before any bullet
/// is filtered.
pub fn update_bullets(world: &mut WorldState, speed: f64) {
    for bullet in world.bullets.iter_mut() {
        bullet.y -= speed;
    }
    world.bullets.retain(|b| b.y + b.height > 0.0);
}

/// Enemies only ever move straight down.
pub fn update_enemy_positions(world: &mut WorldState, descent: f64) {
    for enemy in world.enemies.iter_mut().flatten() {
        enemy.y += descent;
    }
}
