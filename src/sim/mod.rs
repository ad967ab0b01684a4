//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform code:
//! - Single-threaded, one `tick` per frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order, entities carry IDs)
//! - No rendering, audio or input-device dependencies

pub mod collision;
pub mod entity;
pub mod random;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BodyOutcome, CollisionOutcome, intersects, is_collision_free, resolve_bounce};
pub use entity::{
    Body, Effect, Enemy, EntityKind, EntityRef, LaunchRequest, Player, Projectile, ProjectileKind,
    ProjectileLauncher,
};
pub use random::RandomSource;
pub use rect::Rect;
pub use state::{GamePhase, GameState, HEALTH_PREFIX, SCORE_PREFIX, Snapshot, SpriteView};
pub use tick::{TickInput, tick};
