//! Presentation helpers
//!
//! Nothing here touches a GPU or window. These functions turn a `Snapshot`
//! into an ordered list of sprite draws and text, which a platform backend
//! (sprite batch, terminal, web canvas) can replay as-is.

pub mod draw_list;
pub mod sprites;

pub use draw_list::{DrawItem, build_draw_list, overlay_text};
pub use sprites::{SpriteHandle, explosion_source_rect, projectile_sprite, sprite_for};
