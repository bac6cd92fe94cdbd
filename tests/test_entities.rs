use arcade_shooter::entities::*;

fn make_world() -> WorldState {
    WorldState {
        ship: Ship { x: 200.0, y: 540.0, width: 25.0, height: 15.0, color: ColorTag::Blue },
        enemies: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        high_score: 0,
        paused: false,
        width: 400.0,
        height: 600.0,
    }
}

fn enemy(x: f64, y: f64) -> Enemy {
    Enemy { x, y, width: 15.0, height: 10.0, color: ColorTag::Red }
}

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 5.0, 8.0);
    assert_eq!(r.right(), 15.0);
    assert_eq!(r.bottom(), 28.0);
}

#[test]
fn entity_rect_mirrors_fields() {
    let s = make_world().ship;
    assert_eq!(s.rect(), Rect::new(200.0, 540.0, 25.0, 15.0));
}

#[test]
fn enemies_iter_is_row_major() {
    let mut w = make_world();
    w.enemies = vec![
        vec![enemy(0.0, 0.0), enemy(20.0, 0.0)],
        vec![],
        vec![enemy(0.0, 30.0)],
    ];
    let xs: Vec<(f64, f64)> = w.enemies_iter().map(|e| (e.x, e.y)).collect();
    assert_eq!(xs, vec![(0.0, 0.0), (20.0, 0.0), (0.0, 30.0)]);
    assert_eq!(w.enemy_count(), 3);
}

#[test]
fn world_clone_is_independent() {
    let original = make_world();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(vec![enemy(5.0, 5.0)]);

    assert_eq!(original.ship.x, 200.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
