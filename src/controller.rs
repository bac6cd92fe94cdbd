//! Frame orchestration, pause handling and input commands.

use tracing::{info, warn};

use crate::collision::{are_all_enemies_cleared, check_collisions, check_enemy_collision};
use crate::config::GameConfig;
use crate::entities::{Bullet, WorldState};
use crate::motion::{update_bullets, update_enemy_positions};
use crate::ports::{FrameScheduler, KeyValueStore, Renderer};
use crate::spawn::{init_world, reset_game, respawn_enemies};

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Keys the core understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    P,
    Space,
}

impl Key {
    /// Map a host key identifier.  Anything unrecognised yields `None`.
    pub fn from_identifier(id: &str) -> Option<Key> {
        match id {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "p" | "P" => Some(Key::P),
            " " | "Space" => Some(Key::Space),
            _ => None,
        }
    }

    pub fn command(self) -> InputCommand {
        match self {
            Key::ArrowLeft => InputCommand::Move(Direction::Left),
            Key::ArrowRight => InputCommand::Move(Direction::Right),
            Key::ArrowUp => InputCommand::Move(Direction::Up),
            Key::ArrowDown => InputCommand::Move(Direction::Down),
            Key::P => InputCommand::TogglePause,
            Key::Space => InputCommand::Fire,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    TogglePause,
    Fire,
}

// ── Tick ──────────────────────────────────────────────────────────────────────

/// What happened during one call to [`GameLoopController::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// False when the game was paused and nothing ran.
    pub ran: bool,
    pub respawned: bool,
    pub reset: bool,
    pub enemies_destroyed: u32,
}

pub struct GameLoopController<S: KeyValueStore> {
    world: WorldState,
    config: GameConfig,
    store: S,
}

impl<S: KeyValueStore> GameLoopController<S> {
    /// Build the world, reading the persisted high score from `store`.
    /// A missing or unparsable value counts as 0.
    pub fn new(config: GameConfig, store: S) -> Self {
        let high_score = store
            .get(&config.scoring.high_score_key)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);
        let world = init_world(&config, high_score);
        Self {
            world,
            config,
            store,
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_paused(&self) -> bool {
        self.world.paused
    }

    /// Arm the very first tick.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        if !self.world.paused {
            scheduler.request_next_frame();
        }
    }

    /// Run one frame.  The step order is fixed: later steps read what earlier
    /// ones wrote.
    pub fn tick(
        &mut self,
        renderer: &mut impl Renderer,
        scheduler: &mut impl FrameScheduler,
    ) -> TickReport {
        let mut report = TickReport::default();
        if self.world.paused {
            return report;
        }
        report.ran = true;

        renderer.clear();

        if are_all_enemies_cleared(&self.world, self.config.enemies.clear_line) {
            info!("all enemies cleared, respawning");
            respawn_enemies(&mut self.world, &self.config);
            report.respawned = true;
        }

        if check_enemy_collision(&self.world) {
            info!(score = self.world.score, "ship hit, resetting game");
            reset_game(&mut self.world, &self.config);
            report.reset = true;
        }

        update_enemy_positions(&mut self.world, self.config.enemies.descent);
        update_bullets(&mut self.world, self.config.bullets.speed);

        let hits = check_collisions(&mut self.world, self.config.scoring.points_per_enemy);
        report.enemies_destroyed = hits.enemies_destroyed;
        if hits.new_high_score {
            self.persist_high_score();
        }

        self.render(renderer);

        scheduler.request_next_frame();
        report
    }

    fn persist_high_score(&mut self) {
        let key = &self.config.scoring.high_score_key;
        let value = self.world.high_score.to_string();
        if let Err(e) = self.store.set(key, &value) {
            warn!("could not persist high score: {e}");
        }
    }

    /// Draw order: ship, enemies, bullets, score, high score.
    fn render(&self, renderer: &mut impl Renderer) {
        let w = &self.world;
        let hud = &self.config.hud;

        renderer.fill_rect(w.ship.rect(), w.ship.color);
        for enemy in w.enemies_iter() {
            renderer.fill_rect(enemy.rect(), enemy.color);
        }
        for bullet in &w.bullets {
            renderer.fill_rect(bullet.rect(), bullet.color);
        }

        let (sx, sy) = hud.score_pos;
        renderer.fill_text(&format!("Score: {}", w.score), sx, sy, &hud.font, hud.color);
        let (hx, hy) = hud.high_score_pos;
        renderer.fill_text(
            &format!("High Score: {}", w.high_score),
            hx,
            hy,
            &hud.font,
            hud.color,
        );
    }

    // ── Input-driven state transitions ───────────────────────────────────────

    pub fn handle_key(&mut self, key: Key, scheduler: &mut impl FrameScheduler) {
        self.apply(key.command(), scheduler);
    }

    /// Apply a command immediately.  The ship is clamped back onto the canvas
    /// afterwards, whatever the command was.
    pub fn apply(&mut self, command: InputCommand, scheduler: &mut impl FrameScheduler) {
        match command {
            InputCommand::Move(direction) => self.move_ship(direction),
            InputCommand::TogglePause => self.toggle_pause(scheduler),
            InputCommand::Fire => self.fire(),
        }
        self.clamp_ship();
    }

    fn move_ship(&mut self, direction: Direction) {
        let step = self.config.ship.step;
        let ship = &mut self.world.ship;
        match direction {
            Direction::Left => ship.x -= step,
            Direction::Right => ship.x += step,
            Direction::Up => ship.y -= step,
            Direction::Down => ship.y += step,
        }
    }

    fn toggle_pause(&mut self, scheduler: &mut impl FrameScheduler) {
        self.world.paused = !self.world.paused;
        if self.world.paused {
            info!("paused");
        } else {
            info!("resumed");
            scheduler.request_next_frame();
        }
    }

    /// New bullet centred on the ship, starting at the ship's top edge.
    fn fire(&mut self) {
        let b = &self.config.bullets;
        let ship = &self.world.ship;
        self.world.bullets.push(Bullet {
            x: ship.x + ship.width / 2.0 - b.width / 2.0,
            y: ship.y,
            width: b.width,
            height: b.height,
            color: b.color,
        });
    }

    fn clamp_ship(&mut self) {
        let (width, height) = (self.world.width, self.world.height);
        let ship = &mut self.world.ship;
        ship.x = ship.x.min(width - ship.width).max(0.0);
        ship.y = ship.y.min(height - ship.height).max(0.0);
    }
}
