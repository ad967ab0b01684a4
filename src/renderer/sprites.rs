//! Sprite handles per entity kind

use crate::consts::{EXPLOSION_FRAMES_PER_ROW, EXPLOSION_SIZE};
use crate::sim::{EntityKind, ProjectileKind, Rect};

/// Content path of a texture the backend loads once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub &'static str);

pub const BURGER: SpriteHandle = SpriteHandle("graphics/burger");
pub const TEDDY_BEAR: SpriteHandle = SpriteHandle("graphics/teddybear");
pub const FRENCH_FRIES: SpriteHandle = SpriteHandle("graphics/frenchfries");
pub const TEDDY_BEAR_PROJECTILE: SpriteHandle = SpriteHandle("graphics/teddybearprojectile");
pub const EXPLOSION_STRIP: SpriteHandle = SpriteHandle("graphics/explosion");

/// Texture for a projectile type
pub fn projectile_sprite(kind: ProjectileKind) -> SpriteHandle {
    match kind {
        ProjectileKind::FriendlyFries => FRENCH_FRIES,
        ProjectileKind::EnemyThrown => TEDDY_BEAR_PROJECTILE,
    }
}

/// Texture for any entity kind
pub fn sprite_for(kind: EntityKind) -> SpriteHandle {
    match kind {
        EntityKind::Player => BURGER,
        EntityKind::Enemy => TEDDY_BEAR,
        EntityKind::Projectile(projectile) => projectile_sprite(projectile),
        EntityKind::Effect => EXPLOSION_STRIP,
    }
}

/// Source rectangle of an explosion frame inside the strip texture
pub fn explosion_source_rect(frame: u32) -> Rect {
    let column = (frame % EXPLOSION_FRAMES_PER_ROW) as i32;
    let row = (frame / EXPLOSION_FRAMES_PER_ROW) as i32;
    Rect::new(
        column * EXPLOSION_SIZE,
        row * EXPLOSION_SIZE,
        EXPLOSION_SIZE,
        EXPLOSION_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_sprites_differ() {
        assert_eq!(projectile_sprite(ProjectileKind::FriendlyFries), FRENCH_FRIES);
        assert_eq!(
            sprite_for(EntityKind::Projectile(ProjectileKind::EnemyThrown)),
            TEDDY_BEAR_PROJECTILE
        );
    }

    #[test]
    fn test_explosion_frames_walk_the_strip() {
        assert_eq!(explosion_source_rect(0), Rect::new(0, 0, 64, 64));
        assert_eq!(explosion_source_rect(4), Rect::new(64, 64, 64, 64));
        assert_eq!(explosion_source_rect(8), Rect::new(128, 128, 64, 64));
    }
}
