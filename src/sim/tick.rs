//! Fixed timestep simulation tick
//!
//! One tick runs the seven-step update in a fixed order: drone integration,
//! laser advance, boundary resolution, laser-vs-enemy resolution, enemy
//! descent, camera recompute, frame-ready. The host scheduler fires this at
//! 50 Hz and must not overlap ticks; nothing in here blocks.

use glam::Vec2;

use super::collision;
use super::state::{FireSide, GameEvent, GamePhase, GameState, Rotation, ThrustCommand};
use crate::consts::*;
use crate::{lateral_axis, thrust_axis};

/// Control signals for a single tick. Rotation is latched (the input
/// collaborator supplies the current stick state every tick); the rest are
/// one-shot commands cleared by the host after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub rotate: Rotation,
    pub thrust: Option<ThrustCommand>,
    pub fire: Option<FireSide>,
    pub toggle_hud: bool,
}

/// Advance the session by one tick. No-op outside `Running`; `load` is the
/// only way back in.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.time_ticks += 1;

    apply_input(state, input);
    integrate_drone(state);
    advance_laser(state);
    resolve_wall_collisions(state);
    resolve_laser_hits(state);
    advance_enemies(state);
    advance_wave_timer(state);
    update_camera(state);
}

/// Latch rotation and apply the one-shot commands
fn apply_input(state: &mut GameState, input: &TickInput) {
    state.rotation = input.rotate;
    if let Some(cmd) = input.thrust {
        state.motion.thrust = match cmd {
            ThrustCommand::Full => FULL_THRUST,
            ThrustCommand::Cut => 0.0,
            // No sticky hover on the ground
            ThrustCommand::Release => {
                if state.grounded() {
                    0.0
                } else {
                    HOVER_THRUST
                }
            }
        };
    }
    if input.toggle_hud {
        state.hud_enabled = !state.hud_enabled;
    }
    if let Some(side) = input.fire {
        state.fire(side);
    }
}

/// Integrate thrust, recoil and gravity into the velocity, then advance
/// heading and position.
fn integrate_drone(state: &mut GameState) {
    let heading = state.drone.angle_deg;
    let accel = thrust_axis(heading) * state.motion.thrust
        - lateral_axis(heading) * state.motion.recoil
        + Vec2::new(0.0, GRAVITY);
    state.motion.vel += accel;

    let rate = match state.rotation {
        Rotation::Left => -ROTATION_RATE,
        Rotation::Right => ROTATION_RATE,
        Rotation::None => 0.0,
    };
    state.drone.rotate_by(rate);
    state.drone.translate(state.motion.vel);
}

/// Clear the one-tick recoil impulse and extrapolate the laser while its
/// origin is still inside the zone. A laser that has left the zone stops
/// moving and stops producing collisions.
fn advance_laser(state: &mut GameState) {
    state.motion.recoil = 0.0;
    let zone = state.zone;
    if let Some(laser) = &mut state.laser {
        if zone.contains(laser.p1) {
            laser.advance();
        }
    }
}

/// Resolve drone-vs-boundary contacts. All four edges are checked
/// independently every tick; corner contacts apply both resolutions.
fn resolve_wall_collisions(state: &mut GameState) {
    let zone = state.zone;
    let contact = collision::wall_contacts(&state.drone.bounds(), &zone);
    let size = state.drone.size;

    if contact.left {
        state.motion.vel.x = 0.0;
        state.drone.pos.x = zone.min.x;
    }
    if contact.right {
        state.motion.vel.x = 0.0;
        state.drone.pos.x = zone.max.x - size;
    }
    if contact.ceiling {
        state.motion.vel.y = 0.0;
        state.drone.pos.y = zone.min.y;
    }
    if contact.ground {
        state.motion.thrust = 0.0;
        state.motion.vel.y = 0.0;
        state.motion.vel.x *= GROUND_DRAG;
        state.drone.angle_deg = 0.0;
        state.drone.pos.y = zone.max.y - size;
        // Passive regeneration while grounded, one round per tick
        if state.ammo < MAX_AMMO {
            state.ammo += 1;
        }
    }
}

/// Test the laser against every live enemy and book the kills. Completing
/// the roster arms the wave-respawn countdown, at most once per wave.
fn resolve_laser_hits(state: &mut GameState) {
    let Some(laser) = state.laser else {
        return;
    };
    if !state.zone.contains(laser.p1) {
        return;
    }

    let roster = state.enemies.len() as u32;
    for enemy in &mut state.enemies {
        if enemy.dead {
            continue;
        }
        if collision::segment_intersects_rect(laser.p1, laser.p2, &enemy.bounds()) {
            enemy.kill();
            state.score += 1;
            state.enemies_dead += 1;
            state.events.push(GameEvent::EnemyDestroyed);
        }
    }

    if state.enemies_dead == roster && state.respawn_ticks.is_none() {
        state.respawn_ticks = Some(WAVE_RESPAWN_DELAY_TICKS);
        log::debug!("wave {} cleared, respawn pending", state.wave_number);
    }
}

/// Descend every live enemy; any breach of the ground ends the session.
/// Defeat pre-empts a pending wave respawn.
fn advance_enemies(state: &mut GameState) {
    let zone = state.zone;
    let mut breached = false;
    for enemy in &mut state.enemies {
        if enemy.dead {
            continue;
        }
        enemy.pos.y += enemy.v_speed;
        if collision::reached_ground(&enemy.bounds(), &zone) {
            breached = true;
        }
    }

    if breached {
        state.phase = GamePhase::GameOver;
        state.respawn_ticks = None;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "enemies reached the ground on wave {}, final score {}",
            state.wave_number,
            state.score
        );
    }
}

/// Count down a pending wave respawn and roll the next roster when it fires
fn advance_wave_timer(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }
    match state.respawn_ticks {
        Some(0) => {
            state.respawn_ticks = None;
            state.wave_number += 1;
            state.spawn_roster();
        }
        Some(ticks) => state.respawn_ticks = Some(ticks - 1),
        None => {}
    }
}

/// Track the drone with the camera (top-left corner of the view)
fn update_camera(state: &mut GameState) {
    state.camera = state.drone.center() - Vec2::new(VIEW_HALF_WIDTH, VIEW_HALF_HEIGHT);
}
