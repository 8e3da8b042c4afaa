//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (per-wave streams derived from the session seed)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallContact, reached_ground, segment_intersects_rect, wall_contacts};
pub use state::{
    Drone, Enemy, FireSide, GameEvent, GamePhase, GameState, Kinematics, Laser, Located, Rect,
    Rotation, ThrustCommand,
};
pub use tick::{TickInput, tick};
