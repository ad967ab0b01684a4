//! Game settings and balance
//!
//! Every value the simulation depends on can be overridden from a JSON file.
//! Missing fields fall back to the defaults below.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Largest world edge accepted from a settings file (pixels)
pub const MAX_WORLD_SIZE: i32 = 1 << 16;

/// Errors raised while loading settings from disk
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "settings read error: {err}"),
            SettingsError::Parse(err) => write!(f, "settings parse error: {err}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// World and balance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Play area width (pixels)
    pub world_width: i32,
    /// Play area height (pixels)
    pub world_height: i32,

    // === Spawning ===
    /// Number of teddy bears kept alive while playing
    pub target_enemies: usize,
    /// Inset from the world edge inside which bears spawn
    pub spawn_border: i32,
    /// Placement attempts per bear before deferring the spawn to a later frame
    pub max_spawn_attempts: u32,

    // === Enemies ===
    /// Slowest bear speed (pixels/sec)
    pub enemy_min_speed: f32,
    /// Random extra speed added on top of the minimum (pixels/sec)
    pub enemy_speed_range: f32,
    /// Shortest wait between bear shots (ms)
    pub enemy_fire_delay_min_ms: f32,
    /// Random extra wait between bear shots (ms)
    pub enemy_fire_delay_range_ms: f32,
    /// Bear projectile speed (pixels/sec)
    pub enemy_projectile_speed: f32,

    // === Damage & scoring ===
    /// Health lost when a bear touches the burger
    pub enemy_contact_damage: i32,
    /// Health lost when a bear projectile hits the burger
    pub enemy_projectile_damage: i32,
    /// Points per bear destroyed by fries
    pub kill_reward: u32,

    // === Player ===
    /// Starting burger health
    pub player_initial_health: i32,
    /// Burger movement speed (pixels/sec)
    pub player_speed: f32,
    /// Minimum time between burger shots (ms)
    pub player_fire_cooldown_ms: f32,
    /// French fries speed (pixels/sec)
    pub fries_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: 800,
            world_height: 600,

            target_enemies: 5,
            spawn_border: 100,
            max_spawn_attempts: 1000,

            enemy_min_speed: 100.0,
            enemy_speed_range: 200.0,
            enemy_fire_delay_min_ms: 1000.0,
            enemy_fire_delay_range_ms: 3000.0,
            enemy_projectile_speed: 200.0,

            enemy_contact_damage: 10,
            enemy_projectile_damage: 5,
            kill_reward: 10,

            player_initial_health: 100,
            player_speed: 300.0,
            player_fire_cooldown_ms: 500.0,
            fries_speed: 300.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as pretty JSON (useful as a template file)
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.world_width <= 0 || self.world_height <= 0 {
            return Err(SettingsError::Invalid(format!(
                "world must have a positive size, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if self.world_width > MAX_WORLD_SIZE || self.world_height > MAX_WORLD_SIZE {
            return Err(SettingsError::Invalid(format!(
                "world is larger than {MAX_WORLD_SIZE}x{MAX_WORLD_SIZE}, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        // Twice the border must stay below both edges
        if self.spawn_border < 0
            || self.spawn_border > (self.world_width - 1) / 2
            || self.spawn_border > (self.world_height - 1) / 2
        {
            return Err(SettingsError::Invalid(format!(
                "spawn border {} leaves no room to spawn",
                self.spawn_border
            )));
        }
        let speeds = [
            self.enemy_min_speed,
            self.enemy_speed_range,
            self.enemy_projectile_speed,
            self.player_speed,
            self.fries_speed,
        ];
        if speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(SettingsError::Invalid(
                "speeds must be finite and non-negative".to_string(),
            ));
        }
        if self.enemy_contact_damage < 0 || self.enemy_projectile_damage < 0 {
            return Err(SettingsError::Invalid("damage must be non-negative".to_string()));
        }
        if self.player_initial_health <= 0 {
            return Err(SettingsError::Invalid(
                "initial health must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "target_enemies": 3, "kill_reward": 25 }"#)
            .expect("valid json");
        assert_eq!(settings.target_enemies, 3);
        assert_eq!(settings.kill_reward, 25);
        assert_eq!(settings.world_width, 800);
    }

    #[test]
    fn test_json_template_loads_back() {
        let json = Settings::default().to_json().expect("serialize");
        assert_eq!(Settings::from_json(&json).expect("parse"), Settings::default());
    }

    #[test]
    fn test_rejects_oversized_border() {
        let err = Settings::from_json(r#"{ "spawn_border": 300 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_huge_border_without_overflow() {
        let err = Settings::from_json(r#"{ "spawn_border": 1500000000 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_border_must_leave_room_on_odd_sizes() {
        let fits = r#"{ "world_width": 801, "world_height": 801, "spawn_border": 400 }"#;
        assert!(Settings::from_json(fits).is_ok());
        let too_wide = r#"{ "world_width": 801, "world_height": 801, "spawn_border": 401 }"#;
        assert!(matches!(
            Settings::from_json(too_wide).unwrap_err(),
            SettingsError::Invalid(_)
        ));
    }

    #[test]
    fn test_rejects_oversized_world() {
        let err = Settings::from_json(r#"{ "world_height": 400000000 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        let edge = format!(r#"{{ "world_width": {MAX_WORLD_SIZE} }}"#);
        assert!(Settings::from_json(&edge).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/burger-settings.json");
        assert_eq!(settings, Settings::default());
    }
}
