//! Read-only render and HUD projections
//!
//! A snapshot is captured between ticks and handed to the rendering
//! collaborator; it never aliases live simulation state, so the renderer can
//! keep it across the next tick. Nothing in here feeds back into the
//! simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::{GameState, Laser, Located, Rect};

/// Drone pose plus its transformed outline, ready to draw
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DronePose {
    pub pos: Vec2,
    pub angle_deg: f32,
    pub outline: [Vec2; 5],
}

/// Instrument readouts, using the cockpit display scalings: throttle as a
/// percentage of hover-doubling thrust, speeds in m/s, altitude in meters
/// above the drone's resting height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudState {
    pub ammo: u32,
    pub score: u32,
    pub wave: u32,
    pub throttle_pct: i32,
    pub horizontal_speed: i32,
    pub vertical_speed: i32,
    pub altitude: i32,
    /// Minimap frame in screen space (1:10 scale, centered on the drone)
    pub minimap: Rect,
    /// Minimap blip positions for live enemies only
    pub blips: Vec<Vec2>,
    /// Screen-space velocity indicator tip, relative to the view center
    pub velocity_vector: Vec2,
}

/// Everything the rendering collaborator needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    /// World boundary outline
    pub zone: Rect,
    /// Top-left corner of the view; the renderer translates by its negation
    pub camera: Vec2,
    pub drone: DronePose,
    /// Live enemy rectangles
    pub enemies: Vec<Rect>,
    /// Laser segment, present only while active and in-bounds
    pub laser: Option<Laser>,
    /// Instruments, omitted while the HUD is toggled off
    pub hud: Option<HudState>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let laser = state
            .laser
            .filter(|laser| state.zone.contains(laser.p1));

        Self {
            tick: state.time_ticks,
            zone: state.zone,
            camera: state.camera,
            drone: DronePose {
                pos: state.drone.pos,
                angle_deg: state.drone.angle_deg,
                outline: state.drone.outline(),
            },
            enemies: state
                .enemies
                .iter()
                .filter(|e| !e.dead)
                .map(|e| e.bounds())
                .collect(),
            laser,
            hud: state.hud_enabled.then(|| hud_state(state)),
        }
    }
}

fn hud_state(state: &GameState) -> HudState {
    let map_size = state.zone.width() / MAP_SCALE;
    let map_origin = Vec2::new(
        VIEW_HALF_WIDTH - state.drone.x() / MAP_SCALE,
        VIEW_HALF_HEIGHT - state.drone.y() / MAP_SCALE - map_size,
    );

    let blips = state
        .enemies
        .iter()
        .filter(|e| !e.dead)
        .map(|e| blip_position(&state.drone, e, e.size))
        .collect();

    HudState {
        ammo: state.ammo,
        score: state.score,
        wave: state.wave_number,
        throttle_pct: (state.motion.thrust * 50.0 / GRAVITY) as i32,
        horizontal_speed: (state.motion.vel.x * 7.0).abs() as i32,
        vertical_speed: (-state.motion.vel.y * 7.0) as i32,
        altitude: ((-state.drone.pos.y - state.drone.size) / 10.0) as i32,
        minimap: Rect::from_pos_size(map_origin, map_size, map_size),
        blips,
        velocity_vector: state.motion.vel * 10.0,
    }
}

/// Project an entity onto the drone-centered minimap
fn blip_position(anchor: &impl Located, target: &impl Located, footprint: f32) -> Vec2 {
    Vec2::new(
        VIEW_HALF_WIDTH - anchor.x() / MAP_SCALE + (target.x() - footprint / 5.0) / MAP_SCALE,
        VIEW_HALF_HEIGHT - anchor.y() / MAP_SCALE + (target.y() - footprint / 5.0) / MAP_SCALE,
    )
}
