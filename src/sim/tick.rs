//! Fixed timestep simulation tick
//!
//! Game flow state machine: menu → reset → cut-in → aiming ⇄ moving →
//! result → (next end | game over). One call advances everything by one frame.

use glam::Vec2;

use super::bot::{BotShot, decide, plan_shot};
use super::physics::{all_stopped, step_stones};
use super::projection::ViewMode;
use super::scoring::score_end;
use super::state::{
    AimState, Banner, BannerTone, BotStage, ChargeDirection, CutInNext, GamePhase, GameState,
    Stone, SweepParticle, Team,
};
use crate::consts::*;
use crate::settings::Difficulty;
use crate::{clamp_to_corridor, target_position, throw_position};

/// Input sampled once per tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Difficulty picked on the start menu
    pub select_difficulty: Option<Difficulty>,
    /// Lateral aim keys (held)
    pub aim_left: bool,
    pub aim_right: bool,
    /// Charge button went down this tick
    pub charge_pressed: bool,
    /// Charge button came up this tick
    pub charge_released: bool,
    /// Sweep button held
    pub sweep: bool,
    /// Pointer position (screen pixels), where the broom is drawn
    pub pointer: Vec2,
    /// Demo mode - the bot also plays the human team
    pub autoplay: bool,
    /// Leave the game-over screen for a fresh match
    pub restart: bool,
    /// Leave the loop
    pub quit: bool,
}

/// Particles spawned per tick while sweeping
const SWEEP_PARTICLES_PER_TICK: usize = 3;

/// Horizontal broom wobble (pixels) at a given tick
pub fn broom_shake(time_ticks: u64) -> f32 {
    let millis = time_ticks as f32 * (1000.0 / TICK_RATE_HZ as f32);
    (millis * 0.05).sin() * 15.0
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.quit && state.running {
        log::info!("Quit requested at tick {}", state.time_ticks);
        state.running = false;
    }
    if !state.running {
        return;
    }

    state.time_ticks += 1;
    state.sweeping = false;

    for particle in state.particles.iter_mut() {
        particle.update();
    }
    state.particles.retain(|p| p.alive());

    match state.phase {
        GamePhase::StartMenu => {
            if let Some(difficulty) = input.select_difficulty {
                state.settings.difficulty = difficulty;
                log::info!("Match start: difficulty {}", difficulty.as_str());
                state.phase = GamePhase::Reset;
            }
        }
        GamePhase::Reset => tick_reset(state),
        GamePhase::CutIn {
            timer,
            next,
            camera_from,
        } => tick_cut_in(state, timer, next, camera_from),
        GamePhase::Aiming(aim) => tick_aiming(state, input, aim),
        GamePhase::Moving => tick_moving(state, input),
        GamePhase::Result { hold } => tick_result(state, hold),
        GamePhase::GameOver => {
            if input.restart {
                log::info!("Restarting match");
                state.restart();
            }
        }
    }
}

/// Show a banner, then hand over to `next`. The camera glides from wherever
/// it is now back toward the throw line.
pub fn start_cut_in(
    state: &mut GameState,
    text: impl Into<String>,
    sub: impl Into<String>,
    tone: BannerTone,
    next: CutInNext,
) {
    state.banner = Some(Banner {
        text: text.into(),
        sub: sub.into(),
        tone,
    });
    state.phase = GamePhase::CutIn {
        timer: 0,
        next,
        camera_from: state.camera.depth,
    };
}

fn is_human_turn(state: &GameState, input: &TickInput) -> bool {
    state.turn == state.human_team() && !input.autoplay
}

fn tick_reset(state: &mut GameState) {
    state.stones.clear();
    state.current = None;
    state.stones_thrown = 0;

    // Team without the hammer throws first
    let starter = state.hammer.other();
    state.turn = starter;
    log::info!(
        "End {}/{}: {} throws first, {} has the hammer",
        state.current_end,
        MAX_ENDS,
        starter.name(),
        state.hammer.name()
    );

    let text = format!("End {}", state.current_end);
    let sub = format!("{} team starts", starter.name());
    start_cut_in(state, text, sub, BannerTone::Team(starter), CutInNext::Aiming);
}

fn tick_cut_in(state: &mut GameState, timer: u32, next: CutInNext, camera_from: f32) {
    let timer = timer + 1;
    let t = timer as f32 / CUT_IN_TICKS as f32;
    state.camera.glide(camera_from, CAMERA_CUT_IN_Y, t);

    if timer < CUT_IN_TICKS {
        state.phase = GamePhase::CutIn {
            timer,
            next,
            camera_from,
        };
        return;
    }

    state.banner = None;
    state.camera.mode = ViewMode::Perspective;
    state.phase = match next {
        CutInNext::Reset => GamePhase::Reset,
        CutInNext::Aiming => {
            state.current = Some(Stone::new(throw_position(), state.turn));
            GamePhase::Aiming(AimState::default())
        }
    };
}

fn tick_aiming(state: &mut GameState, input: &TickInput, mut aim: AimState) {
    state.camera.ease_toward(CAMERA_AIM_Y);
    state.camera.mode = ViewMode::Perspective;

    if state.current.is_none() {
        log::warn!("Aiming without a stone, spawning one for {}", state.turn.name());
        state.current = Some(Stone::new(throw_position(), state.turn));
    }

    let launch_power = if is_human_turn(state, input) {
        aim_human(state, input, &mut aim)
    } else {
        aim_bot(state, &mut aim)
    };

    if let Some(stone) = state.current.as_mut() {
        stone.pos.x = clamp_to_corridor(stone.pos.x, stone.radius);
    }

    match launch_power {
        Some(power) => launch(state, power),
        None => state.phase = GamePhase::Aiming(aim),
    }
}

/// Keyboard aiming. Returns the launch power on release.
fn aim_human(state: &mut GameState, input: &TickInput, aim: &mut AimState) -> Option<f32> {
    if input.charge_pressed {
        aim.charging = true;
        aim.charge = 0.0;
        aim.direction = ChargeDirection::Up;
    }
    if input.charge_released && aim.charging {
        aim.charging = false;
        return Some(aim.charge);
    }

    if let Some(stone) = state.current.as_mut() {
        if input.aim_left {
            stone.pos.x -= AIM_SPEED;
        }
        if input.aim_right {
            stone.pos.x += AIM_SPEED;
        }
    }

    // Gauge bounces between 0 and max while held
    if aim.charging {
        aim.charge += CHARGE_STEP * aim.direction.sign();
        if aim.charge >= POWER_MAX {
            aim.charge = POWER_MAX;
            aim.direction = ChargeDirection::Down;
        } else if aim.charge <= 0.0 {
            aim.charge = 0.0;
            aim.direction = ChargeDirection::Up;
        }
    }
    None
}

/// Scripted bot aiming: plan, walk to the line, charge. Returns the launch
/// power once the charge reaches the plan.
fn aim_bot(state: &mut GameState, aim: &mut AimState) -> Option<f32> {
    match aim.bot {
        BotStage::Plan => {
            let shot = bot_shot(state);
            aim.bot = BotStage::Walk {
                target_x: clamp_to_corridor(shot.target_x, STONE_RADIUS),
                power: shot.power,
            };
            None
        }
        BotStage::Walk { target_x, power } => {
            if let Some(stone) = state.current.as_mut() {
                let dx = target_x - stone.pos.x;
                if dx.abs() > AIM_SPEED {
                    stone.pos.x += AIM_SPEED.copysign(dx);
                } else {
                    aim.bot = BotStage::Charge { power };
                }
            }
            None
        }
        BotStage::Charge { power } => {
            aim.charge += CHARGE_STEP;
            (aim.charge >= power).then_some(aim.charge)
        }
    }
}

fn bot_shot(state: &mut GameState) -> BotShot {
    let target = target_position();
    let difficulty = state.difficulty();
    if state.settings.bot_noise {
        let mut rng = state.rng_state.next_rng();
        decide(&state.stones, state.turn, difficulty, target, &mut rng)
    } else {
        plan_shot(&state.stones, state.turn, difficulty, target)
    }
}

fn launch(state: &mut GameState, power: f32) {
    if let Some(stone) = state.current.as_mut() {
        stone.launch(power);
    }
    state.stones_thrown += 1;
    log::info!(
        "{} throws stone {}/{} with power {:.1}",
        state.turn.name(),
        state.stones_thrown,
        STONES_PER_END,
        power
    );
    state.phase = GamePhase::Moving;
}

fn tick_moving(state: &mut GameState, input: &TickInput) {
    state.sweeping = is_human_turn(state, input) && input.sweep;
    if state.sweeping {
        let shake = broom_shake(state.time_ticks);
        let mut rng = state.rng_state.next_rng();
        for _ in 0..SWEEP_PARTICLES_PER_TICK {
            let pos = input.pointer + Vec2::new(shake, 0.0);
            state.particles.push(SweepParticle::spawn(pos, &mut rng));
        }
    }

    let friction = if state.sweeping {
        FRICTION_SWEEP
    } else {
        FRICTION_NORMAL
    };
    step_stones(&mut state.stones, state.current.as_mut(), friction);

    let lead_y = state
        .current
        .as_ref()
        .or(state.stones.last())
        .map_or(START_Y, |s| s.pos.y);
    state.camera.follow(lead_y);

    if !all_stopped(state.all_stones()) {
        return;
    }

    if let Some(stone) = state.current.take() {
        if stone.out_of_play {
            log::info!("{} stone went out of play", stone.team.name());
        }
        state.stones.push(stone);
    }

    if state.stones_thrown >= STONES_PER_END {
        log::info!("End {} complete, all stones thrown", state.current_end);
        state.phase = GamePhase::Result {
            hold: RESULT_HOLD_TICKS,
        };
        return;
    }

    state.turn = state.turn.other();
    let text = format!("{} TEAM", state.turn.name().to_uppercase());
    let sub = format!("Throw {} / {}", state.stones_thrown + 1, STONES_PER_END);
    let tone = BannerTone::Team(state.turn);
    start_cut_in(state, text, sub, tone, CutInNext::Aiming);
}

fn tick_result(state: &mut GameState, hold: u32) {
    state.camera.mode = ViewMode::TopDown;
    if hold > 0 {
        state.phase = GamePhase::Result { hold: hold - 1 };
        return;
    }

    let end = score_end(&state.stones, target_position());
    state.scores.add(end);
    // Team that did not score gets the hammer; a blank end keeps it
    if let Some(scorer) = end.scorer() {
        state.hammer = scorer.other();
    }
    log::info!(
        "End {} result: Red {} - Yellow {} (match {} - {}), hammer {}",
        state.current_end,
        end.red,
        end.yellow,
        state.scores.red,
        state.scores.yellow,
        state.hammer.name()
    );

    state.current_end += 1;
    if state.current_end > MAX_ENDS {
        let winner = match state.scores.red.cmp(&state.scores.yellow) {
            std::cmp::Ordering::Greater => Some(Team::Red),
            std::cmp::Ordering::Less => Some(Team::Yellow),
            std::cmp::Ordering::Equal => None,
        };
        log::info!(
            "Game over: Red {} - Yellow {} ({})",
            state.scores.red,
            state.scores.yellow,
            winner.map_or("draw", |t| t.name())
        );
        state.phase = GamePhase::GameOver;
    } else {
        let sub = format!("Red {} - Yellow {}", end.red, end.yellow);
        start_cut_in(state, "End complete", sub, BannerTone::Neutral, CutInNext::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::scoring::TeamScores;

    fn select(difficulty: Difficulty) -> TickInput {
        TickInput {
            select_difficulty: Some(difficulty),
            ..Default::default()
        }
    }

    /// Tick until `done` holds; returns ticks taken
    fn run_until(
        state: &mut GameState,
        input: &TickInput,
        max_ticks: u32,
        done: impl Fn(&GameState) -> bool,
    ) -> u32 {
        for n in 0..max_ticks {
            if done(state) {
                return n;
            }
            tick(state, input);
        }
        panic!("condition not reached in {} ticks (phase {})", max_ticks, state.phase.label());
    }

    fn is_aiming(state: &GameState) -> bool {
        matches!(state.phase, GamePhase::Aiming(_))
    }

    /// Fresh deterministic game sitting at the first aim of end 1 (Red's turn)
    fn game_at_first_aim() -> GameState {
        let mut state = GameState::with_settings(1, Settings::deterministic(Difficulty::Normal));
        tick(&mut state, &select(Difficulty::Normal));
        run_until(&mut state, &TickInput::default(), 1000, is_aiming);
        state
    }

    fn aim_state(state: &GameState) -> AimState {
        match state.phase {
            GamePhase::Aiming(aim) => aim,
            other => panic!("expected aiming, got {}", other.label()),
        }
    }

    #[test]
    fn test_menu_waits_for_difficulty() {
        let mut state = GameState::new(5);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::StartMenu);

        tick(&mut state, &select(Difficulty::Hard));
        assert_eq!(state.phase, GamePhase::Reset);
        assert_eq!(state.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_reset_announces_end_and_starter() {
        let mut state = GameState::new(5);
        tick(&mut state, &select(Difficulty::Normal));
        tick(&mut state, &TickInput::default());

        assert!(matches!(
            state.phase,
            GamePhase::CutIn {
                timer: 0,
                next: CutInNext::Aiming,
                ..
            }
        ));
        // Yellow holds the hammer at the start, so Red throws first
        assert_eq!(state.turn, Team::Red);
        let banner = state.banner.clone().unwrap();
        assert_eq!(banner.text, "End 1");
        assert_eq!(banner.sub, "Red team starts");
        assert_eq!(state.stones_thrown, 0);
    }

    #[test]
    fn test_cut_in_duration_and_spawn() {
        let mut state = GameState::new(5);
        tick(&mut state, &select(Difficulty::Normal));
        tick(&mut state, &TickInput::default());

        let ticks = run_until(&mut state, &TickInput::default(), 1000, is_aiming);
        assert_eq!(ticks, CUT_IN_TICKS);
        assert!(state.banner.is_none());
        assert_eq!(state.camera.depth, CAMERA_CUT_IN_Y);
        let stone = state.current.as_ref().unwrap();
        assert_eq!(stone.pos, throw_position());
        assert_eq!(stone.team, Team::Red);
        assert!(stone.stopped);
    }

    #[test]
    fn test_charge_gauge_bounces() {
        let mut state = game_at_first_aim();
        let press = TickInput {
            charge_pressed: true,
            ..Default::default()
        };
        tick(&mut state, &press);
        assert_eq!(aim_state(&state).charge, CHARGE_STEP);

        // Up to max, then back down
        let up_ticks = (POWER_MAX / CHARGE_STEP) as u32;
        for _ in 0..up_ticks + 4 {
            tick(&mut state, &TickInput::default());
        }
        let aim = aim_state(&state);
        assert_eq!(aim.direction, ChargeDirection::Down);
        assert!(aim.charge < POWER_MAX);
        assert!(aim.charge >= 0.0);
    }

    #[test]
    fn test_release_launches_stone() {
        let mut state = game_at_first_aim();
        tick(
            &mut state,
            &TickInput {
                charge_pressed: true,
                ..Default::default()
            },
        );
        for _ in 0..39 {
            tick(&mut state, &TickInput::default());
        }
        let charge = aim_state(&state).charge;
        assert_eq!(charge, 20.0);

        tick(
            &mut state,
            &TickInput {
                charge_released: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Moving);
        assert_eq!(state.stones_thrown, 1);
        let stone = state.current.as_ref().unwrap();
        assert_eq!(stone.vel, Vec2::new(0.0, -charge));
        assert!(!stone.stopped);
    }

    #[test]
    fn test_release_without_charge_is_ignored() {
        let mut state = game_at_first_aim();
        tick(
            &mut state,
            &TickInput {
                charge_released: true,
                ..Default::default()
            },
        );
        assert!(is_aiming(&state));
        assert_eq!(state.stones_thrown, 0);
    }

    #[test]
    fn test_aim_clamped_to_corridor() {
        let mut state = game_at_first_aim();
        let left = TickInput {
            aim_left: true,
            ..Default::default()
        };
        for _ in 0..200 {
            tick(&mut state, &left);
        }
        assert_eq!(state.current.as_ref().unwrap().pos.x, PLAY_MIN_X + STONE_RADIUS);

        let right = TickInput {
            aim_right: true,
            ..Default::default()
        };
        for _ in 0..400 {
            tick(&mut state, &right);
        }
        assert_eq!(state.current.as_ref().unwrap().pos.x, PLAY_MAX_X - STONE_RADIUS);
    }

    #[test]
    fn test_sweep_reduces_friction_and_sprays() {
        let mut state = game_at_first_aim();
        tick(
            &mut state,
            &TickInput {
                charge_pressed: true,
                ..Default::default()
            },
        );
        for _ in 0..39 {
            tick(&mut state, &TickInput::default());
        }
        tick(
            &mut state,
            &TickInput {
                charge_released: true,
                ..Default::default()
            },
        );
        let sweep = TickInput {
            sweep: true,
            pointer: Vec2::new(300.0, 600.0),
            ..Default::default()
        };
        tick(&mut state, &sweep);
        assert!(state.sweeping);
        assert_eq!(state.particles.len(), SWEEP_PARTICLES_PER_TICK);
        let vel = state.current.as_ref().unwrap().vel.y;
        assert!((vel - (-20.0 * FRICTION_SWEEP)).abs() < 1e-4);
    }

    #[test]
    fn test_bot_cannot_sweep() {
        let mut state = game_at_first_aim();
        state.turn = Team::Yellow;
        run_until(&mut state, &TickInput::default(), 1000, |s| s.phase == GamePhase::Moving);
        let sweep = TickInput {
            sweep: true,
            ..Default::default()
        };
        tick(&mut state, &sweep);
        assert!(!state.sweeping);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_bot_walks_then_charges_to_plan() {
        let mut state = game_at_first_aim();
        state.turn = Team::Yellow;
        if let Some(stone) = state.current.as_mut() {
            stone.team = Team::Yellow;
        }
        state.stones.push(Stone::new(Vec2::new(360.0, 420.0), Team::Red));

        let planned = plan_shot(&state.stones, Team::Yellow, Difficulty::Normal, target_position());
        run_until(&mut state, &TickInput::default(), 1000, |s| s.phase == GamePhase::Moving);

        let stone = state.current.as_ref().unwrap();
        assert!((stone.pos.x - planned.target_x).abs() <= AIM_SPEED);
        assert!(-stone.vel.y >= planned.power);
        assert!(-stone.vel.y < planned.power + CHARGE_STEP);
        assert_eq!(state.stones_thrown, 1);
    }

    #[test]
    fn test_turn_flips_after_settle() {
        let mut state = game_at_first_aim();
        let auto = TickInput {
            autoplay: true,
            ..Default::default()
        };
        run_until(&mut state, &auto, 5000, |s| s.phase == GamePhase::Moving);
        run_until(&mut state, &auto, 5000, |s| matches!(s.phase, GamePhase::CutIn { .. }));

        assert_eq!(state.turn, Team::Yellow);
        assert!(state.current.is_none());
        assert_eq!(state.stones.len(), 1);
        let banner = state.banner.clone().unwrap();
        assert_eq!(banner.text, "YELLOW TEAM");
        assert_eq!(banner.sub, "Throw 2 / 8");
    }

    #[test]
    fn test_hammer_goes_to_team_that_did_not_score() {
        let mut state = GameState::new(9);
        state.hammer = Team::Red;
        state.stones = vec![Stone::new(target_position(), Team::Red)];
        state.phase = GamePhase::Result { hold: 0 };
        tick(&mut state, &TickInput::default());

        assert_eq!(state.scores, TeamScores::new(1, 0));
        assert_eq!(state.hammer, Team::Yellow);
        assert_eq!(state.current_end, 2);
        assert!(matches!(
            state.phase,
            GamePhase::CutIn {
                next: CutInNext::Reset,
                ..
            }
        ));
        assert_eq!(state.banner.clone().unwrap().sub, "Red 1 - Yellow 0");
    }

    #[test]
    fn test_blank_end_keeps_hammer() {
        let mut state = GameState::new(9);
        state.hammer = Team::Red;
        state.phase = GamePhase::Result { hold: 0 };
        tick(&mut state, &TickInput::default());

        assert_eq!(state.scores, TeamScores::default());
        assert_eq!(state.hammer, Team::Red);
    }

    #[test]
    fn test_result_holds_before_scoring() {
        let mut state = GameState::new(9);
        state.stones = vec![Stone::new(target_position(), Team::Yellow)];
        state.phase = GamePhase::Result {
            hold: RESULT_HOLD_TICKS,
        };
        for _ in 0..RESULT_HOLD_TICKS {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.scores, TeamScores::default());
        assert_eq!(state.view_mode(), ViewMode::TopDown);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.scores, TeamScores::new(0, 1));
    }

    #[test]
    fn test_last_end_ends_game_and_restart() {
        let mut state = GameState::new(9);
        state.current_end = MAX_ENDS;
        state.phase = GamePhase::Result { hold: 0 };
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.current_end, MAX_ENDS + 1);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::StartMenu);
        assert_eq!(state.current_end, 1);
        assert_eq!(state.scores, TeamScores::default());
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut state = game_at_first_aim();
        let ticks = state.time_ticks;
        tick(
            &mut state,
            &TickInput {
                quit: true,
                ..Default::default()
            },
        );
        assert!(!state.running);
        tick(&mut state, &select(Difficulty::Easy));
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_full_match_with_deterministic_bots() {
        let mut state = GameState::with_settings(2024, Settings::deterministic(Difficulty::Hard));
        tick(
            &mut state,
            &TickInput {
                select_difficulty: Some(Difficulty::Hard),
                autoplay: true,
                ..Default::default()
            },
        );

        let auto = TickInput {
            autoplay: true,
            ..Default::default()
        };
        let mut prev_thrown = 0;
        let mut throws_seen = 0;
        let mut end_resets = 0;
        let mut end_totals = TeamScores::default();
        let mut prev_scores = TeamScores::default();

        for _ in 0..200_000 {
            if state.phase == GamePhase::GameOver {
                break;
            }
            tick(&mut state, &auto);

            if state.stones_thrown == prev_thrown + 1 {
                throws_seen += 1;
            } else if state.stones_thrown < prev_thrown {
                assert_eq!(prev_thrown, STONES_PER_END);
                assert_eq!(state.stones_thrown, 0);
                end_resets += 1;
            } else {
                assert_eq!(state.stones_thrown, prev_thrown);
            }
            prev_thrown = state.stones_thrown;

            assert!(state.stones_thrown <= STONES_PER_END);
            assert!(state.used_stones(Team::Red) <= STONES_PER_TEAM);
            assert!(state.used_stones(Team::Yellow) <= STONES_PER_TEAM);
            assert!(state.scores.red >= prev_scores.red);
            assert!(state.scores.yellow >= prev_scores.yellow);
            if state.scores != prev_scores {
                end_totals.red += state.scores.red - prev_scores.red;
                end_totals.yellow += state.scores.yellow - prev_scores.yellow;
                // Only one team scores per end
                assert!(state.scores.red == prev_scores.red || state.scores.yellow == prev_scores.yellow);
            }
            prev_scores = state.scores;
            for stone in state.all_stones() {
                assert!(stone.pos.is_finite());
            }
        }

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.current_end, MAX_ENDS + 1);
        assert_eq!(throws_seen, STONES_PER_END * MAX_ENDS);
        assert_eq!(end_resets, MAX_ENDS - 1);
        assert_eq!(end_totals, state.scores);
        assert!(state.scores.red + state.scores.yellow <= STONES_PER_TEAM * MAX_ENDS);
    }

    #[test]
    fn test_determinism() {
        // Same seed and inputs, noisy bots included
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            select(Difficulty::Easy),
            TickInput {
                autoplay: true,
                ..Default::default()
            },
        ];

        for input in &inputs {
            for _ in 0..3000 {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        let json1 = serde_json::to_string(&state1).unwrap();
        let json2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(json1, json2);
        assert_eq!(state1.time_ticks, 6000);
    }
}
