//! Game state and core simulation types
//!
//! Everything the simulation step owns lives here: the stone roster, the
//! stone in play, match bookkeeping and the current phase.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::projection::{Camera, ViewMode};
use super::scoring::TeamScores;
use crate::consts::*;
use crate::settings::{Difficulty, Settings};

/// The two teams. Red is the human side, Yellow the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Yellow,
}

impl Team {
    pub fn other(self) -> Self {
        match self {
            Team::Red => Team::Yellow,
            Team::Yellow => Team::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::Red => "Red",
            Team::Yellow => "Yellow",
        }
    }

    /// RGB color used for this team's stones and banners
    pub fn color(self) -> [u8; 3] {
        match self {
            Team::Red => [230, 60, 60],
            Team::Yellow => [230, 210, 40],
        }
    }
}

/// A curling stone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stone {
    pub pos: Vec2,
    pub vel: Vec2,
    pub team: Team,
    pub radius: f32,
    /// At rest; never integrated while set
    pub stopped: bool,
    /// Left the sheet; ignored by scoring, collisions and drawing
    pub out_of_play: bool,
    /// Cosmetic handle rotation (degrees)
    pub spin: f32,
}

impl Stone {
    pub fn new(pos: Vec2, team: Team) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            team,
            radius: STONE_RADIUS,
            stopped: true,
            out_of_play: false,
            spin: 0.0,
        }
    }

    /// Release the stone down the sheet
    pub fn launch(&mut self, power: f32) {
        self.vel = Vec2::new(0.0, -power);
        self.stopped = false;
    }

    /// Takes part in collisions and scoring
    pub fn is_active(&self) -> bool {
        !self.out_of_play
    }
}

/// Direction the power gauge is moving while charging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeDirection {
    Up,
    Down,
}

impl ChargeDirection {
    pub fn sign(self) -> f32 {
        match self {
            ChargeDirection::Up => 1.0,
            ChargeDirection::Down => -1.0,
        }
    }
}

/// Scripted bot sequence while aiming
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BotStage {
    /// Pick a shot
    Plan,
    /// Slide the stone laterally toward the aim line
    Walk { target_x: f32, power: f32 },
    /// Ramp the charge up to the planned power
    Charge { power: f32 },
}

/// Per-phase data for aiming
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimState {
    pub charge: f32,
    pub direction: ChargeDirection,
    /// Human charge button held
    pub charging: bool,
    pub bot: BotStage,
}

impl Default for AimState {
    fn default() -> Self {
        Self {
            charge: 0.0,
            direction: ChargeDirection::Up,
            charging: false,
            bot: BotStage::Plan,
        }
    }
}

/// Phase a cut-in hands over to when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutInNext {
    Reset,
    Aiming,
}

/// Current phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a difficulty choice
    StartMenu,
    /// Clear the sheet and announce a new end
    Reset,
    /// Timed banner while the camera glides back to the throw line
    CutIn {
        timer: u32,
        next: CutInNext,
        camera_from: f32,
    },
    /// Current stone on the throw line
    Aiming(AimState),
    /// Stones in motion
    Moving,
    /// All stones thrown; hold then tally
    Result { hold: u32 },
    /// Match finished
    GameOver,
}

impl GamePhase {
    pub fn label(&self) -> &'static str {
        match self {
            GamePhase::StartMenu => "START_MENU",
            GamePhase::Reset => "RESET",
            GamePhase::CutIn { .. } => "CUT_IN",
            GamePhase::Aiming(_) => "AIMING",
            GamePhase::Moving => "MOVING",
            GamePhase::Result { .. } => "RESULT",
            GamePhase::GameOver => "GAME_OVER",
        }
    }
}

/// Banner tint: a team color or the neutral (blue) announcement color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerTone {
    Team(Team),
    Neutral,
}

impl BannerTone {
    pub fn color(self) -> [u8; 3] {
        match self {
            BannerTone::Team(team) => team.color(),
            BannerTone::Neutral => [50, 100, 200],
        }
    }
}

/// Text shown by the cut-in transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    pub sub: String,
    pub tone: BannerTone,
}

/// Ice spray kicked up by the broom (visual only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub size: f32,
}

/// Particles live at most this long (ticks)
pub const SWEEP_PARTICLE_MAX_LIFE: u32 = 40;

impl SweepParticle {
    pub fn spawn(pos: Vec2, rng: &mut impl Rng) -> Self {
        let angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
        let speed: f32 = rng.random_range(2.0..=6.0);
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: rng.random_range(20..=SWEEP_PARTICLE_MAX_LIFE),
            size: rng.random_range(3u32..=6) as f32,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        self.size = (self.size - 0.1).max(0.0);
    }

    pub fn alive(&self) -> bool {
        self.life > 0 && self.size > 0.0
    }
}

/// RNG state wrapper for serialization.
///
/// Each draw site gets a fresh PCG stream, so the state stays two integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out the next generator in the sequence
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream = self.stream.wrapping_add(1);
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub settings: Settings,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Settled stones of the current end
    pub stones: Vec<Stone>,
    /// Stone being aimed or in flight
    pub current: Option<Stone>,
    pub stones_thrown: u32,
    /// 1-based; reaches `MAX_ENDS + 1` when the match is over
    pub current_end: u32,
    /// Match totals, never decreasing
    pub scores: TeamScores,
    /// Whose throw is active
    pub turn: Team,
    /// Throws last in the next end
    pub hammer: Team,
    pub camera: Camera,
    pub banner: Option<Banner>,
    /// Human team is sweeping this tick
    pub sweeping: bool,
    #[serde(skip)]
    pub particles: Vec<SweepParticle>,
    /// Cleared by a quit request
    pub running: bool,
}

impl GameState {
    /// Create a new game at the start menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            settings: Settings::default(),
            time_ticks: 0,
            phase: GamePhase::StartMenu,
            stones: Vec::new(),
            current: None,
            stones_thrown: 0,
            current_end: 1,
            scores: TeamScores::default(),
            turn: Team::Red,
            hammer: Team::Yellow,
            camera: Camera::new(CAMERA_CUT_IN_Y),
            banner: None,
            sweeping: false,
            particles: Vec::new(),
            running: true,
        }
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        let mut state = Self::new(seed);
        state.settings = settings;
        state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    /// Team driven by keyboard/pointer input
    pub fn human_team(&self) -> Team {
        Team::Red
    }

    pub fn view_mode(&self) -> ViewMode {
        self.camera.mode
    }

    /// Settled stones plus the current one, in roster order
    pub fn all_stones(&self) -> impl Iterator<Item = &Stone> {
        self.stones.iter().chain(self.current.iter())
    }

    /// Stones of `team` thrown or on the throw line this end
    pub fn used_stones(&self, team: Team) -> u32 {
        self.all_stones().filter(|s| s.team == team).count() as u32
    }

    pub fn remaining_stones(&self, team: Team) -> u32 {
        STONES_PER_TEAM.saturating_sub(self.used_stones(team))
    }

    /// Back to a fresh match at the start menu, keeping seed and settings
    pub fn restart(&mut self) {
        let seed = self.seed;
        let settings = self.settings.clone();
        let rng_state = self.rng_state.clone();
        *self = Self::with_settings(seed, settings);
        self.rng_state = rng_state;
    }
}
