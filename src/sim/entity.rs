//! Game entities: the burger, teddy bears, projectiles and explosions
//!
//! Each kind owns its own position, hitbox and per-frame update rule. All
//! cross-entity interaction (collisions, damage, scoring) is driven from
//! `tick`, never from inside an entity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Common view over every kind of body in the world
pub trait Body {
    fn id(&self) -> u32;
    fn collision_rect(&self) -> Rect;
    fn is_active(&self) -> bool;
}

/// Projectile types; the type decides who it can hurt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// French fries fired by the burger; destroy teddy bears
    FriendlyFries,
    /// Fired by teddy bears; damage the burger
    EnemyThrown,
}

impl ProjectileKind {
    pub fn size(&self) -> (i32, i32) {
        match self {
            ProjectileKind::FriendlyFries => (FRIES_WIDTH, FRIES_HEIGHT),
            ProjectileKind::EnemyThrown => (ENEMY_PROJECTILE_WIDTH, ENEMY_PROJECTILE_HEIGHT),
        }
    }
}

/// A request to put a new projectile into the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchRequest {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub velocity: Vec2,
}

/// Capability to create projectiles, handed to entities that can shoot
pub trait ProjectileLauncher {
    fn launch(&mut self, kind: ProjectileKind, pos: Vec2, velocity: Vec2);
}

impl ProjectileLauncher for Vec<LaunchRequest> {
    fn launch(&mut self, kind: ProjectileKind, pos: Vec2, velocity: Vec2) {
        self.push(LaunchRequest { kind, pos, velocity });
    }
}

/// The burger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    /// Never negative
    pub health: i32,
    /// Time left before the next shot is allowed (ms)
    pub fire_cooldown_ms: f32,
}

impl Player {
    pub fn new(id: u32, pos: Vec2, health: i32) -> Self {
        Self {
            id,
            pos,
            health: health.max(0),
            fire_cooldown_ms: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract damage, clamping at zero. Returns true if this hit was fatal.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.health = (self.health - amount.max(0)).max(0);
        was_alive && !self.is_alive()
    }

    /// Move by the input direction inside the world and shoot when allowed
    pub fn update(
        &mut self,
        direction: Vec2,
        fire: bool,
        dt: f32,
        settings: &Settings,
        launcher: &mut impl ProjectileLauncher,
    ) {
        let direction = direction.clamp_length_max(1.0);
        self.pos += direction * settings.player_speed * dt;

        // Keep the whole sprite on screen
        let half = Vec2::new(PLAYER_WIDTH as f32 / 2.0, PLAYER_HEIGHT as f32 / 2.0);
        let world = Vec2::new(settings.world_width as f32, settings.world_height as f32);
        self.pos = self.pos.clamp(half, (world - half).max(half));

        self.fire_cooldown_ms = (self.fire_cooldown_ms - dt * 1000.0).max(0.0);
        if fire && self.fire_cooldown_ms <= 0.0 {
            launcher.launch(
                ProjectileKind::FriendlyFries,
                self.pos - Vec2::new(0.0, FRIES_OFFSET),
                Vec2::new(0.0, -settings.fries_speed),
            );
            self.fire_cooldown_ms = settings.player_fire_cooldown_ms;
        }
    }
}

impl Body for Player {
    fn id(&self) -> u32 {
        self.id
    }

    fn collision_rect(&self) -> Rect {
        Rect::centered_at(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    fn is_active(&self) -> bool {
        self.is_alive()
    }
}

/// A teddy bear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    pub active: bool,
    /// Where the sprite is drawn; a bounce may relocate it
    pub draw_rect: Rect,
    /// Time until the next shot (ms)
    pub fire_timer_ms: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, velocity: Vec2, fire_timer_ms: f32) -> Self {
        Self {
            id,
            pos,
            velocity,
            active: true,
            draw_rect: Rect::centered_at(pos, ENEMY_WIDTH, ENEMY_HEIGHT),
            fire_timer_ms,
        }
    }

    /// Apply a draw rectangle produced by bounce resolution
    pub fn set_draw_rect(&mut self, rect: Rect) {
        self.pos = rect.center();
        self.draw_rect = rect;
    }

    /// Move, bounce off the world edges and shoot when the timer runs out.
    /// Returns true if the bear bounced off an edge this frame.
    pub fn update(
        &mut self,
        dt: f32,
        settings: &Settings,
        rng: &mut RandomSource,
        launcher: &mut impl ProjectileLauncher,
    ) -> bool {
        self.pos += self.velocity * dt;
        let bounced = self.bounce_off_edges(settings.world_width, settings.world_height);
        self.draw_rect = self.collision_rect();

        self.fire_timer_ms -= dt * 1000.0;
        if self.fire_timer_ms <= 0.0 {
            launcher.launch(
                ProjectileKind::EnemyThrown,
                self.pos + Vec2::new(0.0, ENEMY_PROJECTILE_OFFSET),
                Vec2::new(0.0, settings.enemy_projectile_speed),
            );
            self.fire_timer_ms = settings.enemy_fire_delay_min_ms
                + rng.next_float(settings.enemy_fire_delay_range_ms);
        }

        bounced
    }

    fn bounce_off_edges(&mut self, width: i32, height: i32) -> bool {
        let half = Vec2::new(ENEMY_WIDTH as f32 / 2.0, ENEMY_HEIGHT as f32 / 2.0);
        let max = Vec2::new(width as f32, height as f32) - half;
        let mut bounced = false;

        if self.pos.x < half.x {
            self.pos.x = half.x;
            self.velocity.x = self.velocity.x.abs();
            bounced = true;
        } else if self.pos.x > max.x {
            self.pos.x = max.x;
            self.velocity.x = -self.velocity.x.abs();
            bounced = true;
        }

        if self.pos.y < half.y {
            self.pos.y = half.y;
            self.velocity.y = self.velocity.y.abs();
            bounced = true;
        } else if self.pos.y > max.y {
            self.pos.y = max.y;
            self.velocity.y = -self.velocity.y.abs();
            bounced = true;
        }

        bounced
    }
}

impl Body for Enemy {
    fn id(&self) -> u32 {
        self.id
    }

    fn collision_rect(&self) -> Rect {
        Rect::centered_at(self.pos, ENEMY_WIDTH, ENEMY_HEIGHT)
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub velocity: Vec2,
    pub active: bool,
}

impl Projectile {
    pub fn new(id: u32, kind: ProjectileKind, pos: Vec2, velocity: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            velocity,
            active: true,
        }
    }

    /// Move; deactivate once completely outside the world
    pub fn update(&mut self, dt: f32, world_width: i32, world_height: i32) {
        self.pos += self.velocity * dt;
        let world = Rect::new(0, 0, world_width, world_height);
        if !self.collision_rect().intersects(&world) {
            self.active = false;
        }
    }
}

impl Body for Projectile {
    fn id(&self) -> u32 {
        self.id
    }

    fn collision_rect(&self) -> Rect {
        let (width, height) = self.kind.size();
        Rect::centered_at(self.pos, width, height)
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// An explosion animation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub id: u32,
    pub pos: Vec2,
    pub elapsed_ms: f32,
    pub finished: bool,
}

impl Effect {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            elapsed_ms: 0.0,
            finished: false,
        }
    }

    /// Current frame index in the strip
    pub fn frame(&self) -> u32 {
        ((self.elapsed_ms / EXPLOSION_FRAME_MS) as u32).min(EXPLOSION_FRAMES - 1)
    }

    /// (column, row) of the current frame in the 3x3 strip
    pub fn update(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        self.elapsed_ms += dt * 1000.0;
        if self.elapsed_ms >= EXPLOSION_FRAME_MS * EXPLOSION_FRAMES as f32 {
            self.finished = true;
        }
    }
}

impl Body for Effect {
    fn id(&self) -> u32 {
        self.id
    }

    fn collision_rect(&self) -> Rect {
        Rect::centered_at(self.pos, EXPLOSION_SIZE, EXPLOSION_SIZE)
    }

    fn is_active(&self) -> bool {
        !self.finished
    }
}

/// Kind tag for a live entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile(ProjectileKind),
    Effect,
}

/// Borrowed view of any entity, for uniform iteration
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Projectile(&'a Projectile),
    Effect(&'a Effect),
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Player(_) => EntityKind::Player,
            EntityRef::Enemy(_) => EntityKind::Enemy,
            EntityRef::Projectile(p) => EntityKind::Projectile(p.kind),
            EntityRef::Effect(_) => EntityKind::Effect,
        }
    }

    pub fn body(&self) -> &'a dyn Body {
        match *self {
            EntityRef::Player(p) => p as &dyn Body,
            EntityRef::Enemy(e) => e,
            EntityRef::Projectile(p) => p,
            EntityRef::Effect(e) => e,
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            EntityRef::Player(p) => p.pos,
            EntityRef::Enemy(e) => e.pos,
            EntityRef::Projectile(p) => p.pos,
            EntityRef::Effect(e) => e.pos,
        }
    }

    /// Rectangle the sprite occupies on screen
    pub fn draw_rect(&self) -> Rect {
        match self {
            EntityRef::Enemy(e) => e.draw_rect,
            other => other.body().collision_rect(),
        }
    }
}
