//! Collision detection and its scoring consequences.
//!
//! Every test here is a plain AABB overlap: touching edges do not count.

use tracing::debug;

use crate::entities::{Rect, WorldState};

/// Summary of one bullet–enemy pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitReport {
    pub enemies_destroyed: u32,
    /// Set when the pass pushed the high score up at least once.
    pub new_high_score: bool,
}

pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Position of the first enemy (row-major) overlapping `rect`.
fn first_hit(world: &WorldState, rect: &Rect) -> Option<(usize, usize)> {
    world.enemies.iter().enumerate().find_map(|(row, enemies)| {
        enemies
            .iter()
            .position(|enemy| overlaps(rect, &enemy.rect()))
            .map(|column| (row, column))
    })
}

/// Resolve bullet–enemy hits.
///
/// Bullets are visited from the highest index down, so removing the current
/// bullet never shifts one that is still to be visited.  Each bullet takes
/// out at most one enemy: the first overlapping one in row-then-column order.
pub fn check_collisions(world: &mut WorldState, points: u32) -> HitReport {
    let mut report = HitReport::default();

    for b in (0..world.bullets.len()).rev() {
        let rect = world.bullets[b].rect();
        let Some((row, column)) = first_hit(world, &rect) else {
            continue;
        };
        world.bullets.remove(b);
        world.enemies[row].remove(column);
        debug!(row, column, "enemy destroyed");

        report.enemies_destroyed += 1;
        if update_score(world, points) {
            report.new_high_score = true;
        }
    }
    report
}

/// True as soon as any enemy overlaps the ship.
pub fn check_enemy_collision(world: &WorldState) -> bool {
    let ship = world.ship.rect();
    world.enemies_iter().any(|enemy| overlaps(&ship, &enemy.rect()))
}

/// A wave is cleared once every survivor has descended past `clear_line`.
/// An empty grid is trivially cleared.
pub fn are_all_enemies_cleared(world: &WorldState, clear_line: f64) -> bool {
    world.enemies_iter().all(|enemy| enemy.y > clear_line)
}

/// Add `points` to the score, raising the high score if it is beaten.
/// Returns whether the high score changed.
pub fn update_score(world: &mut WorldState, points: u32) -> bool {
    world.score = world.score.saturating_add(points);
    if world.score > world.high_score {
        world.high_score = world.score;
        debug!(high_score = world.high_score, "new high score");
        true
    } else {
        false
    }
}
