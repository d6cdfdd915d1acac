//! Curling 3D headless entry point
//!
//! Plays a full match with both teams on autopilot and prints the final
//! frame as JSON. A windowed front end drives the same `tick`/`build_frame`
//! pair once per frame at `TICK_RATE_HZ`.
//!
//! Usage: `curling3d [easy|normal|hard] [seed]`

use glam::Vec2;

use curling3d::consts::*;
use curling3d::sim::{GamePhase, GameState, TickInput, tick};
use curling3d::view::build_frame;
use curling3d::{Difficulty, Settings};

/// Safety valve: a match is a few thousand ticks
const MAX_TICKS: u64 = 1_000_000;

fn parse_args() -> (Difficulty, u64) {
    let mut args = std::env::args().skip(1);

    let difficulty = match args.next() {
        Some(arg) => Difficulty::from_str(&arg).unwrap_or_else(|| {
            log::warn!("Unknown difficulty '{}', using Normal", arg);
            Difficulty::Normal
        }),
        None => Difficulty::Normal,
    };

    let seed = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|err| {
            log::warn!("Invalid seed '{}' ({}), using 0", arg, err);
            0
        }),
        None => 0,
    };

    (difficulty, seed)
}

fn main() {
    env_logger::init();
    log::info!("Curling 3D (headless) starting...");

    let (difficulty, seed) = parse_args();
    let settings = Settings {
        difficulty,
        ..Settings::default()
    };
    let mut state = GameState::with_settings(seed, settings);

    let mut input = TickInput {
        select_difficulty: Some(difficulty),
        autoplay: true,
        ..Default::default()
    };

    let mut last_phase = state.phase.label();
    while state.running && state.phase != GamePhase::GameOver && state.time_ticks < MAX_TICKS {
        tick(&mut state, &input);
        input.select_difficulty = None;

        let phase = state.phase.label();
        if phase != last_phase {
            log::debug!("tick {}: {} -> {}", state.time_ticks, last_phase, phase);
            last_phase = phase;
        }
    }

    if state.phase != GamePhase::GameOver {
        log::warn!("Match did not finish within {} ticks", MAX_TICKS);
    }

    let seconds = state.time_ticks as f32 / TICK_RATE_HZ as f32;
    log::info!(
        "Final score Red {} - Yellow {} after {} ticks ({:.1}s of play)",
        state.scores.red,
        state.scores.yellow,
        state.time_ticks,
        seconds
    );

    let frame = build_frame(&state, Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0));
    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize final frame: {}", err),
    }
}
