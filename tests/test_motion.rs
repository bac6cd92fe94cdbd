use arcade_shooter::config::GameConfig;
use arcade_shooter::entities::*;
use arcade_shooter::motion::*;
use arcade_shooter::spawn::init_world;

fn make_world() -> WorldState {
    let mut w = init_world(&GameConfig::default(), 0);
    w.enemies.clear();
    w
}

fn bullet(y: f64) -> Bullet {
    Bullet { x: 100.0, y, width: 5.0, height: 10.0, color: ColorTag::Green }
}

// ── update_bullets ────────────────────────────────────────────────────────────

#[test]
fn bullets_move_up_by_speed() {
    let mut w = make_world();
    w.bullets = vec![bullet(300.0), bullet(120.0)];
    update_bullets(&mut w, 5.0);
    let ys: Vec<f64> = w.bullets.iter().map(|b| b.y).collect();
    assert_eq!(ys, vec![295.0, 115.0]);
}

#[test]
fn bullets_do_not_move_sideways() {
    let mut w = make_world();
    w.bullets = vec![bullet(300.0)];
    update_bullets(&mut w, 5.0);
    assert_eq!(w.bullets[0].x, 100.0);
}

#[test]
fn bullet_removed_once_bottom_edge_reaches_top() {
    let mut w = make_world();
    // y=-5 → -10, bottom edge exactly 0 → removed
    w.bullets = vec![bullet(-5.0)];
    update_bullets(&mut w, 5.0);
    assert!(w.bullets.is_empty());
}

#[test]
fn bullet_partially_visible_is_kept() {
    let mut w = make_world();
    // y=-4 → -9, bottom edge 1 → kept
    w.bullets = vec![bullet(-4.0)];
    update_bullets(&mut w, 5.0);
    assert_eq!(w.bullets.len(), 1);
    assert_eq!(w.bullets[0].y, -9.0);
}

#[test]
fn filtering_uses_moved_positions() {
    // Before moving, bottom edge is 4 (> 0) and would survive a stale filter.
    // After moving it is -1 and must be gone.
    let mut w = make_world();
    w.bullets = vec![bullet(-6.0), bullet(50.0)];
    update_bullets(&mut w, 5.0);
    assert_eq!(w.bullets.len(), 1);
    assert_eq!(w.bullets[0].y, 45.0);
}

#[test]
fn no_bullets_is_a_no_op() {
    let mut w = make_world();
    update_bullets(&mut w, 5.0);
    assert!(w.bullets.is_empty());
}

// ── update_enemy_positions ────────────────────────────────────────────────────

#[test]
fn enemies_descend_by_step_only() {
    let cfg = GameConfig::default();
    let mut w = init_world(&cfg, 0);
    let before = w.enemies.clone();
    update_enemy_positions(&mut w, 1.0);
    for (row_before, row_after) in before.iter().zip(&w.enemies) {
        for (b, a) in row_before.iter().zip(row_after) {
            assert_eq!(a.y, b.y + 1.0);
            assert_eq!(a.x, b.x);
        }
    }
}

#[test]
fn enemies_in_ragged_rows_all_move() {
    let cfg = GameConfig::default();
    let mut w = init_world(&cfg, 0);
    w.enemies[1].remove(0);
    w.enemies[2].clear();
    update_enemy_positions(&mut w, 1.0);
    assert_eq!(w.enemies[0][0].y, -49.0);
    assert!(w.enemies[1].iter().all(|e| e.y == -29.0));
    assert_eq!(w.enemies[1].len(), 4);
}
