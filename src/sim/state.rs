//! Game state and world ownership
//!
//! `GameState` owns every entity collection, the RNG, score and health, and
//! the current phase. Only `tick` mutates it during play; renderers read a
//! `Snapshot`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::is_collision_free;
use super::entity::{
    Body, Effect, Enemy, EntityKind, EntityRef, LaunchRequest, Player, Projectile, ProjectileKind,
};
use super::random::RandomSource;
use super::rect::Rect;
use crate::audio::{SoundCue, SoundSink};
use crate::consts::*;
use crate::direction_from_angle;
use crate::settings::Settings;

/// Prefix for the health display string
pub const HEALTH_PREFIX: &str = "Health: ";
/// Prefix for the score display string
pub const SCORE_PREFIX: &str = "Score: ";

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running
    Playing,
    /// Frozen until the pause toggle is pressed again
    Paused,
    /// Burger destroyed; terminal
    Ended,
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub rng: RandomSource,
    pub phase: GamePhase,
    /// Set once the quit input has been seen; the host loop exits on it
    pub quit_requested: bool,
    pub player: Player,
    /// Live teddy bears
    pub enemies: Vec<Enemy>,
    /// Projectiles in flight
    pub projectiles: Vec<Projectile>,
    /// Explosion animations
    pub effects: Vec<Effect>,
    pub score: u32,
    /// Death cue has already played
    pub player_dead: bool,
    /// Frames simulated while playing
    pub frame: u64,
    health_text: String,
    score_text: String,
    shown_health: i32,
    shown_score: u32,
    next_id: u32,
}

impl GameState {
    /// Start a game with the initial enemy population in place
    pub fn new(settings: Settings, rng: RandomSource) -> Self {
        let mut state = Self::without_enemies(settings, rng);
        state.respawn_enemies();
        log::info!(
            "Game started (seed {}, {} bears)",
            state.rng.seed(),
            state.enemies.len()
        );
        state
    }

    /// Start a game with only the burger in the world
    pub fn without_enemies(settings: Settings, rng: RandomSource) -> Self {
        let player_pos = Vec2::new(
            settings.world_width as f32 / 2.0,
            settings.world_height as f32 * 7.0 / 8.0,
        );
        let health = settings.player_initial_health;
        let mut state = Self {
            player: Player::new(0, player_pos, health),
            settings,
            rng,
            phase: GamePhase::Playing,
            quit_requested: false,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            effects: Vec::new(),
            score: 0,
            player_dead: false,
            frame: 0,
            health_text: format!("{HEALTH_PREFIX}{health}"),
            score_text: format!("{SCORE_PREFIX}0"),
            shown_health: health,
            shown_score: 0,
            next_id: 1,
        };
        state.player.id = state.next_entity_id();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn health_text(&self) -> &str {
        &self.health_text
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    /// Refresh display strings when the underlying numbers changed
    pub fn refresh_display(&mut self) {
        if self.player.health != self.shown_health {
            self.shown_health = self.player.health;
            self.health_text = format!("{HEALTH_PREFIX}{}", self.shown_health);
        }
        if self.score != self.shown_score {
            self.shown_score = self.score;
            self.score_text = format!("{SCORE_PREFIX}{}", self.shown_score);
        }
    }

    /// Every live entity, player first
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        std::iter::once(EntityRef::Player(&self.player))
            .chain(self.enemies.iter().map(EntityRef::Enemy))
            .chain(self.projectiles.iter().map(EntityRef::Projectile))
            .chain(self.effects.iter().map(EntityRef::Effect))
    }

    /// Hitboxes new bears must stay clear of
    pub fn collision_rects(&self) -> Vec<Rect> {
        self.entities()
            .filter(|e| e.body().is_active())
            .map(|e| e.body().collision_rect())
            .collect()
    }

    pub fn active_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    /// Turn launch requests into projectiles, playing the matching shot cue
    pub fn add_projectiles(
        &mut self,
        requests: impl IntoIterator<Item = LaunchRequest>,
        sounds: &mut impl SoundSink,
    ) {
        for request in requests {
            let id = self.next_entity_id();
            let cue = match request.kind {
                ProjectileKind::FriendlyFries => SoundCue::PlayerShot,
                ProjectileKind::EnemyThrown => SoundCue::EnemyShot,
            };
            sounds.play(cue);
            self.projectiles
                .push(Projectile::new(id, request.kind, request.pos, request.velocity));
        }
    }

    /// Add an explosion at `pos`
    pub fn add_effect(&mut self, pos: Vec2, sounds: &mut impl SoundSink) {
        let id = self.next_entity_id();
        self.effects.push(Effect::new(id, pos));
        sounds.play(SoundCue::Explosion);
    }

    /// Spawn bears until the target population is met.
    /// Returns the number spawned.
    pub fn respawn_enemies(&mut self) -> usize {
        let mut spawned = 0;
        while self.active_enemy_count() < self.settings.target_enemies {
            if !self.spawn_enemy() {
                break;
            }
            spawned += 1;
        }
        spawned
    }

    /// Spawn one bear at a random clear spot with a random velocity.
    ///
    /// Candidates that overlap any current hitbox are rejected. After
    /// `max_spawn_attempts` rejections the spawn is deferred to a later frame
    /// and false is returned.
    pub fn spawn_enemy(&mut self) -> bool {
        let settings = &self.settings;
        let border = settings.spawn_border;
        let occupied = self.collision_rects();

        let attempts = settings.max_spawn_attempts.max(1);
        let span_x = settings.world_width.saturating_sub(border.saturating_mul(2));
        let span_y = settings.world_height.saturating_sub(border.saturating_mul(2));

        let mut found = None;
        for _ in 0..attempts {
            let x = border.saturating_add(self.rng.next_int(span_x));
            let y = border.saturating_add(self.rng.next_int(span_y));
            let pos = Vec2::new(x as f32, y as f32);
            let candidate = Rect::centered_at(pos, ENEMY_WIDTH, ENEMY_HEIGHT);
            if is_collision_free(&candidate, &occupied) {
                found = Some(pos);
                break;
            }
        }

        let Some(pos) = found else {
            log::warn!(
                "No clear spawn spot after {attempts} attempts; deferring bear spawn"
            );
            return false;
        };

        let speed = self.rng.next_float(settings.enemy_speed_range) + settings.enemy_min_speed;
        let angle = self.rng.next_float(std::f32::consts::TAU);
        let velocity = direction_from_angle(angle) * speed;
        let fire_delay = settings.enemy_fire_delay_min_ms
            + self.rng.next_float(settings.enemy_fire_delay_range_ms);

        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, pos, velocity, fire_delay));
        log::debug!("Spawned bear {id} at ({x}, {y})", x = pos.x, y = pos.y);
        true
    }

    /// Drop inactive bears and projectiles and finished explosions
    pub fn remove_inactive(&mut self) {
        self.enemies.retain(|e| e.active);
        self.projectiles.retain(|p| p.active);
        self.effects.retain(|e| !e.finished);
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            health: self.player.health,
            health_text: self.health_text.clone(),
            score_text: self.score_text.clone(),
            sprites: self
                .entities()
                .map(|e| SpriteView {
                    id: e.body().id(),
                    kind: e.kind(),
                    pos: e.pos(),
                    rect: e.draw_rect(),
                    frame: match e {
                        EntityRef::Effect(effect) => effect.frame(),
                        _ => 0,
                    },
                })
                .collect(),
        }
    }
}

/// One drawable entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub rect: Rect,
    /// Animation frame (explosions only)
    pub frame: u32,
}

/// Immutable copy of what the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub health: i32,
    pub health_text: String,
    pub score_text: String,
    pub sprites: Vec<SpriteView>,
}
