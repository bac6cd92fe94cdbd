//! Capabilities the core calls out to.  Hosts implement these; the core never
//! touches a terminal, a file or a clock directly.

use std::fmt;

use crate::entities::{ColorTag, Rect};

/// 2D drawing surface in canvas coordinates.
pub trait Renderer {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: ColorTag);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: ColorTag);
}

/// String key-value persistence (used for the high score).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Arms the next tick.  A tick that does not call this is the last one until
/// something else re-arms the loop.
pub trait FrameScheduler {
    fn request_next_frame(&mut self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    InvalidKey(String),
    Io { key: String, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid store key: {key:?}"),
            Self::Io { key, message } => write!(f, "failed to write {key:?}: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}
