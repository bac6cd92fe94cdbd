//! Simulation core for a small arcade shooter.
//!
//! The world is a plain value (`WorldState`) that every component borrows
//! mutably; rendering, high-score storage and frame scheduling are reached
//! only through the traits in [`ports`].

pub mod collision;
pub mod config;
pub mod controller;
pub mod entities;
pub mod motion;
pub mod ports;
pub mod spawn;
pub mod store;
