//! Double Decision - a dual-task perceptual speed minigame
//!
//! Core modules:
//! - `sim`: Deterministic round logic (sector allocation, placement, scoring)
//! - `theme`: Asset tables for the selectable visual themes
//! - `progress`: Running statistics persisted between sessions
//! - `web`: wasm-bindgen facade consumed by the DOM layer

pub mod progress;
pub mod sim;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use sim::{Difficulty, GamePhase, GameState, ObjectKind, PeripheralObject};
pub use theme::Theme;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Number of angular sectors dividing the play field
    pub const NUM_SECTORS: usize = 8;

    /// Spawn radius band, in percent of the play-field half-extent.
    /// The correct object always sits at the band midpoint (28%),
    /// which keeps a 64px sprite inside the wedge overlay.
    pub const MIN_SPAWN_RADIUS: f32 = 20.0;
    pub const MAX_SPAWN_RADIUS: f32 = 36.0;

    /// Rendered footprint of a peripheral object, in pixels
    pub const OBJECT_PIXEL_SIZE: f32 = 64.0;
    /// Reference edge length of the square play field, in pixels
    pub const CONTAINER_PIXEL_SIZE: f32 = 1000.0;

    /// Display-time budget curve (milliseconds)
    pub const INITIAL_DISPLAY_TIME_MS: u32 = 500;
    pub const MIN_DISPLAY_TIME_MS: u32 = 200;
    pub const MAX_DISPLAY_TIME_MS: u32 = 1000;
    /// How much the display time shrinks after every round
    pub const DIFFICULTY_STEP_MS: u32 = 50;

    /// Rounds per session
    pub const TOTAL_ROUNDS: u32 = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
