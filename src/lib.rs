//! Drone Defence - simulation core for a 2D air-defence arcade game
//!
//! A player-flown drone shoots descending enemies before they reach the
//! ground, across waves of increasing enemy speed. This crate is the headless
//! core only: flight physics, projectile motion, wave spawning, collision
//! resolution and score/ammo bookkeeping. Rendering, audio playback and
//! keyboard plumbing are external collaborators that feed discrete control
//! signals in ([`sim::TickInput`]) and consume drained events
//! ([`sim::GameEvent`]) plus per-frame snapshots ([`snapshot::RenderSnapshot`])
//! out.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `snapshot`: Read-only render/HUD projections for display collaborators

pub mod sim;
pub mod snapshot;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval (50 Hz scheduler cadence)
    pub const TICK_MS: u64 = 20;

    /// Side length of the square playing zone. The zone spans
    /// `[0, ZONE_SIZE]` horizontally and `[-ZONE_SIZE, 0]` vertically,
    /// with y growing downward and the ground at `y = 0`.
    pub const ZONE_SIZE: f32 = 5000.0;

    /// Drone bounding-box side length
    pub const DRONE_SIZE: f32 = 20.0;

    /// Downward acceleration applied every tick
    pub const GRAVITY: f32 = 0.2;
    /// Thrust while the throttle is held (climbs at one gravity net)
    pub const FULL_THRUST: f32 = GRAVITY * 2.0;
    /// Thrust that exactly counteracts gravity
    pub const HOVER_THRUST: f32 = GRAVITY;
    /// Rotation rate in degrees per tick
    pub const ROTATION_RATE: f32 = 3.0;
    /// Horizontal velocity decay factor while grounded
    pub const GROUND_DRAG: f32 = 0.9;

    /// Ammo capacity, also the ground-regeneration ceiling
    pub const MAX_AMMO: u32 = 50;
    /// Muzzle length of a freshly fired laser segment
    pub const LASER_LENGTH: f32 = 100.0;
    /// Magnitude of the one-tick recoil impulse (sign follows the fired side)
    pub const RECOIL_IMPULSE: f32 = 1.0;

    /// Enemy roster size per wave
    pub const MAX_ENEMIES: usize = 20;
    /// Enemy edge length is `ENEMY_SIZE_MIN + rand * ENEMY_SIZE_SPAN`
    pub const ENEMY_SIZE_MIN: f32 = 40.0;
    pub const ENEMY_SIZE_SPAN: f32 = 40.0;
    /// Base of the wave speed curve: `1.7^(rand * wave_number)`
    pub const ENEMY_SPEED_BASE: f32 = 1.7;
    /// Fraction of the zone height forming the spawn band at the top edge
    pub const SPAWN_BAND: f32 = 0.2;
    /// Delay between clearing a wave and the next spawn (1 s at 50 Hz)
    pub const WAVE_RESPAWN_DELAY_TICKS: u32 = 50;

    /// Half extents of the renderer's view, used for camera centering
    pub const VIEW_HALF_WIDTH: f32 = 900.0;
    pub const VIEW_HALF_HEIGHT: f32 = 500.0;
    /// World units per minimap unit
    pub const MAP_SCALE: f32 = 10.0;
    /// Minimap blip diameter
    pub const BLIP_SIZE: f32 = 5.0;
}

/// Unit vector along the drone's thrust axis for a heading in degrees.
/// At 0° the drone points straight up (negative y).
#[inline]
pub fn thrust_axis(angle_deg: f32) -> Vec2 {
    let r = angle_deg.to_radians();
    Vec2::new(r.sin(), -r.cos())
}

/// Unit vector along the drone's lateral axis (the right-side firing
/// direction) for a heading in degrees. Perpendicular to [`thrust_axis`].
#[inline]
pub fn lateral_axis(angle_deg: f32) -> Vec2 {
    let r = angle_deg.to_radians();
    Vec2::new(r.cos(), r.sin())
}
