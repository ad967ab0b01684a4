//! Ordered draw commands for one frame

use glam::Vec2;

use super::sprites::{SpriteHandle, explosion_source_rect, sprite_for};
use crate::sim::{EntityKind, GamePhase, Rect, Snapshot};

/// Where the HUD text sits
pub const HEALTH_TEXT_POS: Vec2 = Vec2::new(20.0, 20.0);
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(20.0, 50.0);

/// One draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Sprite {
        sprite: SpriteHandle,
        /// Destination on screen
        dest: Rect,
        /// Region of the texture; `None` means the whole texture
        source: Option<Rect>,
    },
    Text {
        text: String,
        pos: Vec2,
    },
}

/// Everything to draw this frame, back to front
///
/// While playing: burger, bears, projectiles, explosions, then the HUD. Paused
/// and ended frames draw only the centered overlay message.
pub fn build_draw_list(snapshot: &Snapshot, world_width: i32, world_height: i32) -> Vec<DrawItem> {
    if let Some(text) = overlay_text(snapshot) {
        return vec![DrawItem::Text {
            text,
            pos: Vec2::new(world_width as f32 / 2.0, world_height as f32 / 2.0),
        }];
    }

    let layer = |kind: EntityKind| match kind {
        EntityKind::Player => 0,
        EntityKind::Enemy => 1,
        EntityKind::Projectile(_) => 2,
        EntityKind::Effect => 3,
    };
    let mut sprites: Vec<_> = snapshot.sprites.iter().collect();
    sprites.sort_by_key(|s| layer(s.kind));

    let mut items: Vec<DrawItem> = sprites
        .into_iter()
        .map(|s| DrawItem::Sprite {
            sprite: sprite_for(s.kind),
            dest: s.rect,
            source: (s.kind == EntityKind::Effect).then(|| explosion_source_rect(s.frame)),
        })
        .collect();

    items.push(DrawItem::Text {
        text: snapshot.health_text.clone(),
        pos: HEALTH_TEXT_POS,
    });
    items.push(DrawItem::Text {
        text: snapshot.score_text.clone(),
        pos: SCORE_TEXT_POS,
    });
    items
}

/// Centered message for the non-playing phases
pub fn overlay_text(snapshot: &Snapshot) -> Option<String> {
    match snapshot.phase {
        GamePhase::Playing => None,
        GamePhase::Paused => Some("P to Unpause!".to_string()),
        GamePhase::Ended => Some(format!("You Lost! Final Score: {}", snapshot.score)),
    }
}
