//! All game entity types — pure data, no game logic.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum ColorTag {
    Blue,
    Red,
    Green,
    Black,
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

/// The player's ship.  There is exactly one; it is moved back to its start
/// position on reset rather than recreated.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ColorTag,
}

impl Ship {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ColorTag,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ColorTag,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Enemies grouped by row.  Within a row enemies keep their left-to-right
/// spawn order; removing one shifts the rest of the row down by one index.
pub type EnemyGrid = Vec<Vec<Enemy>>;

/// The entire world.  Owned by the controller and lent to each component
/// for the duration of one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub ship: Ship,
    pub enemies: EnemyGrid,
    /// Unordered; only the player fires.
    pub bullets: Vec<Bullet>,
    pub score: u32,
    /// Never decreases, survives resets.
    pub high_score: u32,
    pub paused: bool,
    pub width: f64,
    pub height: f64,
}

impl WorldState {
    /// Iterate every surviving enemy in row-major order.
    pub fn enemies_iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().flatten()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.iter().map(Vec::len).sum()
    }
}
