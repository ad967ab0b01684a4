//! Collision detection and response for rectangular bodies
//!
//! The only physics in the game: overlap tests, spawn clearance checks, and a
//! simplified elastic bounce between two moving rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Standard axis-aligned overlap test (touching edges do not count)
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// True iff `candidate` overlaps none of `existing`
pub fn is_collision_free(candidate: &Rect, existing: &[Rect]) -> bool {
    existing.iter().all(|rect| !candidate.intersects(rect))
}

/// Resolved state for one body after a bounce
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyOutcome {
    /// Velocity after the bounce (pixels/sec)
    pub velocity: Vec2,
    /// Where the body should be drawn at the end of the step
    pub draw_rect: Rect,
    /// The body was knocked out of the world; callers remove it
    pub out_of_bounds: bool,
}

/// Result of resolving a collision between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionOutcome {
    pub first: BodyOutcome,
    pub second: BodyOutcome,
}

/// Axis along which two bodies made contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactAxis {
    Horizontal,
    Vertical,
}

/// Position of a body `ms_before_end` milliseconds before it reached `rect`
fn rewind(rect: &Rect, velocity: Vec2, ms_before_end: u32) -> Rect {
    rect.translated(-velocity * (ms_before_end as f32 / 1000.0))
}

/// Resolve a collision between two moving rectangles over the last `dt_ms`
///
/// Both bodies are rewound to the start of the step and swept forward one
/// millisecond at a time to find when they first touched. The overlap shape at
/// that moment picks the contact axis: a tall, thin overlap means the bodies
/// met side to side, a wide, short one means top to bottom. Velocity
/// components along that axis are exchanged (equal-mass elastic collision)
/// when the bodies are closing, and both bodies then travel the rest of the
/// step with their new velocities. If they still overlap after that, they are
/// pushed apart along the contact axis so the pair does not re-trigger next
/// frame.
///
/// Velocities are in pixels per second. Returns `None` when the rectangles do
/// not overlap or have no relative motion.
pub fn resolve_bounce(
    dt_ms: u32,
    world_width: i32,
    world_height: i32,
    first_velocity: Vec2,
    first_rect: Rect,
    second_velocity: Vec2,
    second_rect: Rect,
) -> Option<CollisionOutcome> {
    if !first_rect.intersects(&second_rect) {
        return None;
    }
    if (first_velocity - second_velocity).length_squared() == 0.0 {
        return None;
    }

    // Sweep from the start of the step; at t == dt_ms the bodies are at their
    // current rectangles, which are known to overlap.
    let (contact_ms, first_contact, second_contact) = (0..=dt_ms)
        .map(|t| {
            (
                t,
                rewind(&first_rect, first_velocity, dt_ms - t),
                rewind(&second_rect, second_velocity, dt_ms - t),
            )
        })
        .find(|(_, a, b)| a.intersects(b))
        .unwrap_or((dt_ms, first_rect, second_rect));

    let overlap = first_contact.intersection(&second_contact)?;
    let axis = if overlap.width <= overlap.height {
        ContactAxis::Horizontal
    } else {
        ContactAxis::Vertical
    };

    let separation = second_contact.center() - first_contact.center();
    let relative = first_velocity - second_velocity;
    let closing = match axis {
        ContactAxis::Horizontal => relative.x * separation.x > 0.0,
        ContactAxis::Vertical => relative.y * separation.y > 0.0,
    };

    let (mut first_new, mut second_new) = (first_velocity, second_velocity);
    if closing {
        match axis {
            ContactAxis::Horizontal => std::mem::swap(&mut first_new.x, &mut second_new.x),
            ContactAxis::Vertical => std::mem::swap(&mut first_new.y, &mut second_new.y),
        }
    }

    let remaining = (dt_ms - contact_ms) as f32 / 1000.0;
    let mut first_draw = first_contact.translated(first_new * remaining);
    let mut second_draw = second_contact.translated(second_new * remaining);

    if let Some(still) = first_draw.intersection(&second_draw) {
        separate(&mut first_draw, &mut second_draw, still, axis);
    }

    Some(CollisionOutcome {
        first: BodyOutcome {
            velocity: first_new,
            draw_rect: first_draw,
            out_of_bounds: !first_draw.is_within(world_width, world_height),
        },
        second: BodyOutcome {
            velocity: second_new,
            draw_rect: second_draw,
            out_of_bounds: !second_draw.is_within(world_width, world_height),
        },
    })
}

/// Push two overlapping rectangles apart along `axis` until they just touch
fn separate(first: &mut Rect, second: &mut Rect, overlap: Rect, axis: ContactAxis) {
    let (depth, first_is_lower) = match axis {
        ContactAxis::Horizontal => (overlap.width, first.center().x <= second.center().x),
        ContactAxis::Vertical => (overlap.height, first.center().y <= second.center().y),
    };
    let first_push = depth / 2;
    let second_push = depth - first_push;
    let (first_delta, second_delta) = if first_is_lower {
        (-first_push, second_push)
    } else {
        (first_push, -second_push)
    };
    match axis {
        ContactAxis::Horizontal => {
            first.x += first_delta;
            second.x += second_delta;
        }
        ContactAxis::Vertical => {
            first.y += first_delta;
            second.y += second_delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const W: i32 = 800;
    const H: i32 = 600;

    #[test]
    fn test_collision_free() {
        let existing = [Rect::new(0, 0, 50, 50), Rect::new(200, 200, 50, 50)];
        assert!(is_collision_free(&Rect::new(60, 60, 40, 40), &existing));
        assert!(!is_collision_free(&Rect::new(220, 180, 40, 40), &existing));
        assert!(is_collision_free(&Rect::new(50, 0, 10, 10), &existing));
        assert!(is_collision_free(&Rect::new(1, 1, 1, 1), &[]));
    }

    #[test]
    fn test_head_on_horizontal_swaps_x() {
        let a = Rect::new(100, 100, 48, 48);
        let b = Rect::new(140, 100, 48, 48);
        let out = resolve_bounce(17, W, H, Vec2::new(100.0, 0.0), a, Vec2::new(-100.0, 0.0), b)
            .expect("overlapping bodies resolve");

        assert_eq!(out.first.velocity, Vec2::new(-100.0, 0.0));
        assert_eq!(out.second.velocity, Vec2::new(100.0, 0.0));
        assert!(!out.first.draw_rect.intersects(&out.second.draw_rect));
        assert!(!out.first.out_of_bounds);
        assert!(!out.second.out_of_bounds);
    }

    #[test]
    fn test_vertical_contact_swaps_y_only() {
        let a = Rect::new(300, 100, 48, 48);
        let b = Rect::new(310, 144, 48, 48);
        let out = resolve_bounce(17, W, H, Vec2::new(20.0, 150.0), a, Vec2::new(-30.0, -50.0), b)
            .expect("overlapping bodies resolve");

        assert_eq!(out.first.velocity, Vec2::new(20.0, -50.0));
        assert_eq!(out.second.velocity, Vec2::new(-30.0, 150.0));
        assert!(!out.first.draw_rect.intersects(&out.second.draw_rect));
    }

    #[test]
    fn test_separating_bodies_keep_velocity() {
        // Already overlapping but moving apart: no exchange, just pushed clear
        let a = Rect::new(100, 100, 48, 48);
        let b = Rect::new(120, 100, 48, 48);
        let va = Vec2::new(-10.0, 0.0);
        let vb = Vec2::new(10.0, 0.0);
        let out = resolve_bounce(17, W, H, va, a, vb, b).expect("overlapping bodies resolve");

        assert_eq!(out.first.velocity, va);
        assert_eq!(out.second.velocity, vb);
        assert!(!out.first.draw_rect.intersects(&out.second.draw_rect));
    }

    #[test]
    fn test_no_overlap_returns_none() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(100, 100, 10, 10);
        assert!(resolve_bounce(17, W, H, Vec2::X, a, Vec2::NEG_X, b).is_none());
    }

    #[test]
    fn test_no_relative_motion_returns_none() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(resolve_bounce(17, W, H, Vec2::ONE, a, Vec2::ONE, b).is_none());
    }

    #[test]
    fn test_knocked_out_of_bounds_is_flagged() {
        // Pinned against the left wall, the push-apart shoves the first body out
        let a = Rect::new(0, 200, 48, 48);
        let b = Rect::new(10, 200, 48, 48);
        let out = resolve_bounce(17, W, H, Vec2::new(0.0, 0.0), a, Vec2::new(-200.0, 0.0), b)
            .expect("overlapping bodies resolve");

        assert!(out.first.out_of_bounds);
        assert!(!out.second.out_of_bounds);
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(
            ax in -100i32..100, ay in -100i32..100, aw in 0i32..80, ah in 0i32..80,
            bx in -100i32..100, by in -100i32..100, bw in 0i32..80, bh in 0i32..80,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn prop_resolved_bodies_do_not_overlap(
            dx in -40i32..40, dy in -40i32..40,
            vax in -300f32..300.0, vay in -300f32..300.0,
            vbx in -300f32..300.0, vby in -300f32..300.0,
        ) {
            let a = Rect::new(376, 276, 48, 48);
            let b = Rect::new(376 + dx, 276 + dy, 48, 48);
            let va = Vec2::new(vax, vay);
            let vb = Vec2::new(vbx, vby);
            if let Some(out) = resolve_bounce(17, W, H, va, a, vb, b) {
                prop_assert!(!out.first.draw_rect.intersects(&out.second.draw_rect));
            }
        }
    }
}
