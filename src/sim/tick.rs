//! Per-frame simulation step
//!
//! Runs the fixed pipeline: advance entities, bear-bear bounces, bear-burger
//! contact, bear projectiles vs burger, fries vs bears, death check, cleanup,
//! respawn, display refresh. Later passes read the active flags written by
//! earlier ones, so the order is load-bearing.

use glam::Vec2;

use super::collision::{intersects, resolve_bounce};
use super::entity::{Body, LaunchRequest, ProjectileKind};
use super::state::{GamePhase, GameState};
use crate::audio::{SoundCue, SoundSink};
use crate::dt_to_millis;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired burger direction; each axis in [-1, 1]
    pub movement: Vec2,
    /// Fire held
    pub fire: bool,
    /// Pause toggle pressed this frame
    pub pause: bool,
    /// Quit pressed this frame
    pub quit: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, sounds: &mut impl SoundSink) {
    if input.quit && !state.quit_requested {
        log::info!("Quit requested");
        state.quit_requested = true;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                log::debug!("Paused");
                state.phase = GamePhase::Paused;
            }
            GamePhase::Paused => {
                log::debug!("Resumed");
                state.phase = GamePhase::Playing;
            }
            GamePhase::Ended => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }
    state.frame += 1;

    advance_entities(state, input, dt, sounds);
    resolve_enemy_bounces(state, dt, sounds);
    resolve_enemy_contact(state, sounds);
    resolve_enemy_projectiles(state, sounds);
    resolve_friendly_projectiles(state, sounds);

    state.remove_inactive();
    if state.phase == GamePhase::Playing {
        state.respawn_enemies();
    }
    state.refresh_display();
}

/// Step 1: move everything, collecting shots through the launch queue
fn advance_entities(state: &mut GameState, input: &TickInput, dt: f32, sounds: &mut impl SoundSink) {
    let mut launches: Vec<LaunchRequest> = Vec::new();

    state
        .player
        .update(input.movement, input.fire, dt, &state.settings, &mut launches);

    for enemy in state.enemies.iter_mut().filter(|e| e.active) {
        if enemy.update(dt, &state.settings, &mut state.rng, &mut launches) {
            sounds.play(SoundCue::Bounce);
        }
    }

    state.add_projectiles(launches, sounds);

    let (width, height) = (state.settings.world_width, state.settings.world_height);
    for projectile in state.projectiles.iter_mut().filter(|p| p.active) {
        projectile.update(dt, width, height);
    }
    for effect in &mut state.effects {
        effect.update(dt);
    }
}

/// Step 2: every unordered pair of active bears
fn resolve_enemy_bounces(state: &mut GameState, dt: f32, sounds: &mut impl SoundSink) {
    let dt_ms = dt_to_millis(dt);
    let (width, height) = (state.settings.world_width, state.settings.world_height);
    let count = state.enemies.len();

    for i in 0..count {
        for j in (i + 1)..count {
            let (head, tail) = state.enemies.split_at_mut(j);
            let (first, second) = (&mut head[i], &mut tail[0]);
            if !first.active || !second.active {
                continue;
            }
            let (first_rect, second_rect) = (first.collision_rect(), second.collision_rect());
            if !intersects(&first_rect, &second_rect) {
                continue;
            }

            let Some(outcome) = resolve_bounce(
                dt_ms,
                width,
                height,
                first.velocity,
                first_rect,
                second.velocity,
                second_rect,
            ) else {
                continue;
            };
            sounds.play(SoundCue::Bounce);

            if outcome.first.out_of_bounds {
                log::debug!("Bear {} bounced out of play", first.id);
                first.active = false;
            } else {
                first.velocity = outcome.first.velocity;
                first.set_draw_rect(outcome.first.draw_rect);
            }
            if outcome.second.out_of_bounds {
                log::debug!("Bear {} bounced out of play", second.id);
                second.active = false;
            } else {
                second.velocity = outcome.second.velocity;
                second.set_draw_rect(outcome.second.draw_rect);
            }
        }
    }
}

/// Step 3: bears that touch the burger explode and hurt it
fn resolve_enemy_contact(state: &mut GameState, sounds: &mut impl SoundSink) {
    let player_rect = state.player.collision_rect();
    let damage = state.settings.enemy_contact_damage;

    for i in 0..state.enemies.len() {
        let enemy = &mut state.enemies[i];
        if !enemy.active || !intersects(&enemy.collision_rect(), &player_rect) {
            continue;
        }
        enemy.active = false;
        let pos = enemy.pos;
        log::debug!("Bear {} rammed the burger", enemy.id);

        damage_player(state, damage, sounds);
        state.add_effect(pos, sounds);
    }
}

/// Step 4: bear projectiles only hurt the burger
fn resolve_enemy_projectiles(state: &mut GameState, sounds: &mut impl SoundSink) {
    let player_rect = state.player.collision_rect();
    let damage = state.settings.enemy_projectile_damage;

    for i in 0..state.projectiles.len() {
        let projectile = &mut state.projectiles[i];
        if projectile.kind != ProjectileKind::EnemyThrown
            || !projectile.active
            || !intersects(&projectile.collision_rect(), &player_rect)
        {
            continue;
        }
        projectile.active = false;
        damage_player(state, damage, sounds);
    }
}

/// Step 5: fries destroy bears and score
fn resolve_friendly_projectiles(state: &mut GameState, sounds: &mut impl SoundSink) {
    for i in 0..state.enemies.len() {
        for j in 0..state.projectiles.len() {
            let enemy = &state.enemies[i];
            let projectile = &state.projectiles[j];
            if projectile.kind != ProjectileKind::FriendlyFries
                || !enemy.active
                || !projectile.active
                || !intersects(&enemy.collision_rect(), &projectile.collision_rect())
            {
                continue;
            }

            let pos = enemy.pos;
            state.enemies[i].active = false;
            state.projectiles[j].active = false;
            state.score = state.score.saturating_add(state.settings.kill_reward);
            log::debug!("Bear {} destroyed, score {}", state.enemies[i].id, state.score);
            state.add_effect(pos, sounds);
        }
    }
}

/// Apply damage and run the death check (step 6) right after it
fn damage_player(state: &mut GameState, amount: i32, sounds: &mut impl SoundSink) {
    state.player.take_damage(amount);
    sounds.play(SoundCue::PlayerDamage);

    if state.player.health == 0 && !state.player_dead {
        state.player_dead = true;
        state.phase = GamePhase::Ended;
        sounds.play(SoundCue::PlayerDeath);
        log::info!("Burger destroyed. Final score: {}", state.score);
    }
}
