//! Burger Defense - a small arcade shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, spawning, game state)
//! - `settings`: Overridable game balance and world configuration
//! - `audio`: Sound cue vocabulary and the playback capability
//! - `renderer`: Pure presentation helpers (sprite lookup, draw list, overlays)

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{SoundCue, SoundSink};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Fixed sizes and timings that are part of the art, not the balance
pub mod consts {
    /// Fixed simulation timestep used by the native driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Burger sprite size (pixels)
    pub const PLAYER_WIDTH: i32 = 54;
    pub const PLAYER_HEIGHT: i32 = 54;

    /// Teddy bear sprite size (pixels)
    pub const ENEMY_WIDTH: i32 = 48;
    pub const ENEMY_HEIGHT: i32 = 48;

    /// French fries sprite size
    pub const FRIES_WIDTH: i32 = 10;
    pub const FRIES_HEIGHT: i32 = 26;
    /// Distance above the burger center where fries appear
    pub const FRIES_OFFSET: f32 = 40.0;

    /// Teddy bear projectile sprite size
    pub const ENEMY_PROJECTILE_WIDTH: i32 = 12;
    pub const ENEMY_PROJECTILE_HEIGHT: i32 = 12;
    /// Distance below the bear center where its projectile appears
    pub const ENEMY_PROJECTILE_OFFSET: f32 = 32.0;

    /// Explosion strip layout: 3x3 frames
    pub const EXPLOSION_FRAMES_PER_ROW: u32 = 3;
    pub const EXPLOSION_ROWS: u32 = 3;
    pub const EXPLOSION_FRAMES: u32 = EXPLOSION_FRAMES_PER_ROW * EXPLOSION_ROWS;
    /// Time each explosion frame stays on screen (milliseconds)
    pub const EXPLOSION_FRAME_MS: f32 = 40.0;
    /// Explosion frame size
    pub const EXPLOSION_SIZE: i32 = 64;
}

/// Unit vector pointing along `angle` (radians, screen coordinates)
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Convert a frame delta in seconds to whole milliseconds
#[inline]
pub fn dt_to_millis(dt: f32) -> u32 {
    (dt.max(0.0) * 1000.0).round() as u32
}
