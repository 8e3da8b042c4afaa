//! Game state and core simulation types
//!
//! Everything the host must hold to run and serialize a session lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lateral_axis;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session constructed but never loaded; the loop must not tick
    NotStarted,
    /// Active gameplay
    Running,
    /// An enemy reached the ground; ticking is halted until the next load
    GameOver,
}

/// Latched rotation control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    Left,
    Right,
    #[default]
    None,
}

/// One-shot throttle commands from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrustCommand {
    /// Throttle pressed: full thrust
    Full,
    /// Kill switch pressed: thrust to zero
    Cut,
    /// Throttle released: hover if airborne, zero on the ground
    Release,
}

/// Which side of the drone a laser fires from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireSide {
    Left,
    Right,
}

/// Discrete signals for external collaborators, drained once per frame.
/// Audio maps `ShotFired`/`EnemyDestroyed` to its samples and never reports
/// back; the menu collaborator handles `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    EnemyDestroyed,
    WaveStarted { wave: u32 },
    GameOver { score: u32 },
}

/// Axis-aligned rectangle with y growing downward.
///
/// Containment is half-open (`min` inclusive, `max` exclusive) so a point
/// resting exactly on the ground or right edge counts as outside.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: pos,
            max: pos + Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

/// Shared position capability for entities projected onto the camera and
/// minimap. Keeps the projections generic without inheriting any shape
/// behavior into the simulation types.
pub trait Located {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
}

/// The player-controlled drone: pose and shape only. Velocity, thrust and
/// recoil are session kinematics owned by [`GameState`], not the drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drone {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Heading in degrees; 0° points straight up, unconstrained (wraps via trig)
    pub angle_deg: f32,
    /// Bounding-box side length
    pub size: f32,
}

impl Drone {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            angle_deg: 0.0,
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size, self.size)
    }

    pub fn rotate_by(&mut self, degrees: f32) {
        self.angle_deg += degrees;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// World-space outline: the five-point hull (square with a notch cut
    /// into the bottom edge), rotated by the heading about the drone center.
    pub fn outline(&self) -> [Vec2; 5] {
        let s = self.size;
        let local = [
            Vec2::new(0.0, 0.0),
            Vec2::new(s, 0.0),
            Vec2::new(s, s),
            Vec2::new(s / 2.0, s / 2.0),
            Vec2::new(0.0, s),
        ];
        let center = self.center();
        let (sin, cos) = self.angle_deg.to_radians().sin_cos();
        local.map(|p| {
            let v = self.pos + p - center;
            center + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
        })
    }
}

impl Located for Drone {
    fn x(&self) -> f32 {
        self.pos.x
    }

    fn y(&self) -> f32 {
        self.pos.y
    }
}

/// A descending enemy. Spawned once per wave; killed enemies collapse to a
/// zero-area box and are never revived within their wave.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Bounding-box side length, fixed at spawn
    pub size: f32,
    /// Descent speed per tick, fixed at spawn and scaled by the wave number
    pub v_speed: f32,
    pub dead: bool,
}

impl Enemy {
    /// Roll a fresh enemy for the given wave: exponential wave-scaled speed,
    /// random size, and a random spot in the band just below the zone's top
    /// edge (staggered entry).
    pub fn spawn(rng: &mut Pcg32, zone: &Rect, wave_number: u32) -> Self {
        let v_speed = ENEMY_SPEED_BASE.powf(rng.random::<f32>() * wave_number as f32);
        let size = ENEMY_SIZE_MIN + rng.random::<f32>() * ENEMY_SIZE_SPAN;
        let x = zone.min.x + rng.random::<f32>() * (zone.width() - size);
        let y = zone.min.y + rng.random::<f32>() * zone.height() * SPAWN_BAND;
        Self {
            pos: Vec2::new(x, y),
            size,
            v_speed,
            dead: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size, self.size)
    }

    /// Mark dead and collapse the bounding box so the slot can no longer
    /// produce collisions.
    pub fn kill(&mut self) {
        self.dead = true;
        self.pos = Vec2::ZERO;
        self.size = 0.0;
    }
}

impl Located for Enemy {
    fn x(&self) -> f32 {
        self.pos.x
    }

    fn y(&self) -> f32 {
        self.pos.y
    }
}

/// The laser segment: previous and current head position. Firing replaces
/// the whole segment, so at most one laser is ever in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Laser {
    /// Build the muzzle segment for a shot from `origin` along the drone's
    /// lateral axis (left shots point opposite it).
    pub fn fire_from(origin: Vec2, angle_deg: f32, side: FireSide) -> Self {
        let dir = match side {
            FireSide::Left => -lateral_axis(angle_deg),
            FireSide::Right => lateral_axis(angle_deg),
        };
        Self {
            p1: origin,
            p2: origin + dir * LASER_LENGTH,
        }
    }

    /// Constant-velocity extrapolation: the segment becomes
    /// `(p2, 2*p2 - p1)`, repeating the previous tick's displacement.
    pub fn advance(&mut self) {
        let next = 2.0 * self.p2 - self.p1;
        self.p1 = self.p2;
        self.p2 = next;
    }
}

/// Session kinematics for the drone, owned by the loop rather than the
/// drone itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Kinematics {
    /// Velocity in units per tick
    pub vel: Vec2,
    /// Current thrust along the drone's heading
    pub thrust: f32,
    /// One-tick reactive impulse opposite the fired side; cleared when the
    /// laser advances
    pub recoil: f32,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed; every wave derives its own spawn stream from it
    pub seed: u64,
    pub phase: GamePhase,
    /// Immutable world boundary
    pub zone: Rect,
    pub drone: Drone,
    pub motion: Kinematics,
    /// Latched rotation input
    pub rotation: Rotation,
    /// In-flight laser, if one has been fired this session
    pub laser: Option<Laser>,
    /// Fixed roster, re-rolled slot by slot at every wave start
    pub enemies: Vec<Enemy>,
    pub ammo: u32,
    pub score: u32,
    pub wave_number: u32,
    pub enemies_dead: u32,
    /// Countdown to the next wave spawn; set exactly once per cleared wave,
    /// cleared by defeat or reload
    pub respawn_ticks: Option<u32>,
    pub hud_enabled: bool,
    /// Top-left corner of the renderer's view, tracking the drone
    pub camera: Vec2,
    pub time_ticks: u64,
    /// Pending collaborator signals, drained by the host each frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh, not-yet-started session shell. [`GameState::load`] is the only
    /// transition into `Running`.
    pub fn new(seed: u64) -> Self {
        let zone = Rect::new(Vec2::new(0.0, -ZONE_SIZE), Vec2::new(ZONE_SIZE, 0.0));
        let mut drone = Drone::new(DRONE_SIZE);
        drone.pos = Vec2::new(zone.min.x + zone.width() / 2.0, zone.max.y - DRONE_SIZE);
        Self {
            seed,
            phase: GamePhase::NotStarted,
            zone,
            drone,
            motion: Kinematics::default(),
            rotation: Rotation::None,
            laser: None,
            enemies: Vec::with_capacity(MAX_ENEMIES),
            ammo: MAX_AMMO,
            score: 0,
            wave_number: 1,
            enemies_dead: 0,
            respawn_ticks: None,
            hud_enabled: true,
            camera: Vec2::ZERO,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// (Re)start the session: every entity and counter returns to its
    /// default, wave 1 spawns, and the loop may tick. The menu collaborator
    /// calls this from both `NotStarted` and `GameOver`; any pending wave
    /// respawn from a previous run is discarded.
    pub fn load(&mut self) {
        *self = Self::new(self.seed);
        self.phase = GamePhase::Running;
        self.camera = self.drone.center() - Vec2::new(VIEW_HALF_WIDTH, VIEW_HALF_HEIGHT);
        self.spawn_roster();
    }

    /// Per-wave RNG stream, derived from the session seed so that saved
    /// state stays serializable without carrying generator internals.
    pub fn wave_rng(&self, wave_number: u32) -> Pcg32 {
        let stream = (wave_number as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Pcg32::seed_from_u64(self.seed ^ stream)
    }

    /// Re-roll the full roster for the current wave number and reset the
    /// dead count.
    pub fn spawn_roster(&mut self) {
        let mut rng = self.wave_rng(self.wave_number);
        self.enemies.clear();
        for _ in 0..MAX_ENEMIES {
            self.enemies
                .push(Enemy::spawn(&mut rng, &self.zone, self.wave_number));
        }
        self.enemies_dead = 0;
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave_number,
        });
        log::info!(
            "wave {} spawned with {} enemies",
            self.wave_number,
            self.enemies.len()
        );
    }

    /// Fire a laser from the drone center. Rejected without side effects at
    /// zero ammo; otherwise the previous laser (if any) is discarded, recoil
    /// kicks opposite the fired side, and a `ShotFired` signal is queued.
    pub fn fire(&mut self, side: FireSide) {
        if self.ammo == 0 {
            return;
        }
        self.laser = Some(Laser::fire_from(
            self.drone.center(),
            self.drone.angle_deg,
            side,
        ));
        self.motion.recoil = match side {
            FireSide::Left => -RECOIL_IMPULSE,
            FireSide::Right => RECOIL_IMPULSE,
        };
        self.ammo -= 1;
        self.events.push(GameEvent::ShotFired);
    }

    /// Whether the drone's bottom edge is in ground contact
    pub fn grounded(&self) -> bool {
        self.drone.bounds().max.y >= self.zone.max.y
    }

    /// Hand the queued collaborator signals to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
