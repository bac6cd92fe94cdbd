//! Tunable constants, loadable from a RON file.
//!
//! Every section is `#[serde(default)]`, so a config file only needs to name
//! the values it changes.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::entities::ColorTag;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}
impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub width: f64,
    pub height: f64,
    /// Distance moved per directional key press.
    pub step: f64,
    /// Start/reset y is `canvas.height - bottom_margin`.
    pub bottom_margin: f64,
    pub color: ColorTag,
}
impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            width: 25.0,
            height: 15.0,
            step: 10.0,
            bottom_margin: 60.0,
            color: ColorTag::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub width: f64,
    pub height: f64,
    pub rows: usize,
    pub columns: usize,
    pub padding: f64,
    /// Negative: the grid spawns above the visible area.
    pub offset_top: f64,
    /// Downward movement per tick.
    pub descent: f64,
    /// A wave counts as cleared once every survivor's y is strictly below
    /// (greater than) this line.
    pub clear_line: f64,
    pub color: ColorTag,
}
impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            width: 15.0,
            height: 10.0,
            rows: 3,
            columns: 5,
            padding: 10.0,
            offset_top: -50.0,
            descent: 1.0,
            clear_line: 200.0,
            color: ColorTag::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub width: f64,
    pub height: f64,
    /// Upward movement per tick.
    pub speed: f64,
    pub color: ColorTag,
}
impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 10.0,
            speed: 5.0,
            color: ColorTag::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub points_per_enemy: u32,
    /// Key the high score is persisted under.
    pub high_score_key: String,
}
impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_enemy: 10,
            high_score_key: "highScore".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub font: String,
    pub color: ColorTag,
    pub score_pos: (f64, f64),
    pub high_score_pos: (f64, f64),
}
impl Default for HudConfig {
    fn default() -> Self {
        Self {
            font: "10px Arial".into(),
            color: ColorTag::Black,
            score_pos: (10.0, 20.0),
            high_score_pos: (10.0, 40.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas: CanvasConfig,
    pub ship: ShipConfig,
    pub enemies: EnemyConfig,
    pub bullets: BulletConfig,
    pub scoring: ScoringConfig,
    pub hud: HudConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Total width of one enemy row including inner padding.
    pub fn grid_width(&self) -> f64 {
        let e = &self.enemies;
        let cols = e.columns as f64;
        cols * e.width + (cols - 1.0).max(0.0) * e.padding
    }

    /// Non-fatal sanity checks.  Nothing here stops the game; callers log
    /// the returned warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        let c = &self.canvas;
        if c.width <= 0.0 || c.height <= 0.0 {
            w.push(format!("canvas dimensions must be > 0 (got {}x{})", c.width, c.height));
        }
        if self.ship.width <= 0.0 || self.ship.height <= 0.0 {
            w.push("ship dimensions must be > 0".into());
        }
        if self.ship.width > c.width || self.ship.height > c.height {
            w.push(format!(
                "ship {}x{} does not fit the {}x{} canvas",
                self.ship.width, self.ship.height, c.width, c.height
            ));
        }
        if self.grid_width() > c.width {
            w.push(format!(
                "enemy grid is {} wide, wider than the canvas ({})",
                self.grid_width(),
                c.width
            ));
        }
        if self.enemies.clear_line < 0.0 || self.enemies.clear_line >= c.height {
            w.push(format!(
                "enemies.clear_line {} lies outside the canvas (0..{}); waves may never clear",
                self.enemies.clear_line, c.height
            ));
        }
        if self.enemies.descent <= 0.0 {
            w.push(format!("enemies.descent {} must be > 0", self.enemies.descent));
        }
        if self.bullets.speed <= 0.0 {
            w.push(format!("bullets.speed {} must be > 0", self.bullets.speed));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_empty());
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: GameConfig =
            ron::from_str("(canvas: (width: 640.0), enemies: (clear_line: 320.0))").unwrap();
        assert_eq!(cfg.canvas.width, 640.0);
        assert_eq!(cfg.canvas.height, 600.0);
        assert_eq!(cfg.enemies.clear_line, 320.0);
        assert_eq!(cfg.enemies.rows, 3);
        assert_eq!(cfg.scoring.points_per_enemy, 10);
    }

    #[test]
    fn validate_flags_clear_line_outside_canvas() {
        let mut cfg = GameConfig::default();
        cfg.enemies.clear_line = 900.0;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("clear_line"));
    }

    #[test]
    fn grid_width_matches_layout() {
        // 5 * 15 + 4 * 10
        assert_eq!(GameConfig::default().grid_width(), 115.0);
    }

    #[test]
    fn existing_file_is_loaded() {
        let path = std::env::temp_dir()
            .join(format!("arcade_shooter_cfg_{}.ron", std::process::id()));
        fs::write(&path, "(bullets: (speed: 8.0))").unwrap();
        let (cfg, err) = GameConfig::load_or_default(&path);
        let _ = fs::remove_file(&path);
        assert!(err.is_none());
        assert_eq!(cfg.bullets.speed, 8.0);
        assert_eq!(cfg.bullets.width, 5.0);
    }

    #[test]
    fn malformed_file_falls_back_to_default() {
        let path = std::env::temp_dir()
            .join(format!("arcade_shooter_bad_{}.ron", std::process::id()));
        fs::write(&path, "(bullets: (speed: fast))").unwrap();
        let (cfg, err) = GameConfig::load_or_default(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(cfg, GameConfig::default());
        assert!(err.unwrap().starts_with("parse RON"));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let (cfg, err) = GameConfig::load_or_default("/nonexistent/arcade_shooter.ron");
        assert_eq!(cfg, GameConfig::default());
        assert!(err.unwrap().starts_with("read config"));
    }
}
