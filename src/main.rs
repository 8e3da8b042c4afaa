//! Drone Defence entry point
//!
//! Headless demo driver: runs a scripted session at the fixed cadence and
//! logs the signals a real host would hand to its audio/menu collaborators.
//!
//! Usage: `drone-defence [seed] [--realtime]`

use std::error::Error;
use std::time::Duration;

use drone_defence::consts::TICK_MS;
use drone_defence::sim::{
    FireSide, GameEvent, GamePhase, GameState, Rotation, ThrustCommand, TickInput, tick,
};
use drone_defence::snapshot::RenderSnapshot;

const MAX_DEMO_TICKS: u64 = 50_000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut seed: u64 = 0xD205_EED;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            s => seed = s.parse().map_err(|e| format!("bad seed {s:?}: {e}"))?,
        }
    }

    let mut state = GameState::new(seed);
    state.load();
    log::info!("session loaded, seed {seed}");

    while state.phase == GamePhase::Running && state.time_ticks < MAX_DEMO_TICKS {
        let input = scripted_input(state.time_ticks);
        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::ShotFired => log::debug!("audio: shoot"),
                GameEvent::EnemyDestroyed => log::debug!("audio: explosion"),
                GameEvent::WaveStarted { wave } => log::info!("wave {wave} incoming"),
                GameEvent::GameOver { score } => log::info!("game over, final score {score}"),
            }
        }

        if realtime {
            std::thread::sleep(Duration::from_millis(TICK_MS));
        }
    }

    // Final frame as a real renderer would see it
    let snapshot = RenderSnapshot::capture(&state);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Minimal autopilot: climb off the pad, hover while sweeping the heading
/// and firing alternating sides, then cut thrust and sit on the ground long
/// enough for the ammo to regenerate.
fn scripted_input(tick_no: u64) -> TickInput {
    let phase = tick_no % 1500;
    let mut input = TickInput::default();
    if phase < 200 {
        input.thrust = Some(ThrustCommand::Full);
    } else if phase < 1200 {
        input.thrust = Some(ThrustCommand::Release);
        input.rotate = if (phase / 100) % 2 == 0 {
            Rotation::Left
        } else {
            Rotation::Right
        };
        if phase % 15 == 0 {
            input.fire = Some(if (phase / 15) % 2 == 0 {
                FireSide::Left
            } else {
                FireSide::Right
            });
        }
    } else {
        input.thrust = Some(ThrustCommand::Cut);
    }
    input
}
