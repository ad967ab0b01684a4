//! Sound cues raised by the simulation
//!
//! The simulation never owns audio hardware. It names a cue and hands it to
//! whatever `SoundSink` the host passed in; playback is fire-and-forget.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Teddy bears bounce off each other or a wall
    Bounce,
    /// Burger takes damage
    PlayerDamage,
    /// Burger health hit zero
    PlayerDeath,
    /// Burger fires french fries
    PlayerShot,
    /// Teddy bear fires a projectile
    EnemyShot,
    /// Explosion effect created
    Explosion,
}

impl SoundCue {
    /// Asset name the presentation layer loads for this cue
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundCue::Bounce => "audio/TeddyBounce",
            SoundCue::PlayerDamage => "audio/BurgerDamage",
            SoundCue::PlayerDeath => "audio/BurgerDeath",
            SoundCue::PlayerShot => "audio/BurgerShot",
            SoundCue::EnemyShot => "audio/TeddyShot",
            SoundCue::Explosion => "audio/Explosion",
        }
    }
}

/// Capability to play a sound cue
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Records cues in order (used by tests and replays)
impl SoundSink for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Writes cues to the debug log (headless runs)
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    played: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cues seen so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl SoundSink for LogSink {
    fn play(&mut self, cue: SoundCue) {
        self.played += 1;
        log::debug!("sound: {}", cue.asset_name());
    }
}
