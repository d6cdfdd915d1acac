//! Curling 3D - pseudo-3D curling game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (stone physics, projection, scoring, bot, game flow)
//! - `view`: Per-frame output consumed by an external renderer
//! - `settings`: Difficulty presets chosen from the start menu

pub mod settings;
pub mod sim;
pub mod view;

pub use settings::{Difficulty, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per rendered frame)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Screen dimensions (pixels)
    pub const SCREEN_W: f32 = 600.0;
    pub const SCREEN_H: f32 = 800.0;

    /// Length of the sheet along y (world units)
    pub const WORLD_DEPTH: f32 = 2400.0;

    /// Stone defaults
    pub const STONE_RADIUS: f32 = 38.0;

    /// Play corridor, centered on the screen
    pub const CORRIDOR_HALF_WIDTH: f32 = 320.0;
    pub const PLAY_MIN_X: f32 = SCREEN_W / 2.0 - CORRIDOR_HALF_WIDTH;
    pub const PLAY_MAX_X: f32 = SCREEN_W / 2.0 + CORRIDOR_HALF_WIDTH;

    /// Per-tick velocity multipliers
    pub const FRICTION_NORMAL: f32 = 0.985;
    pub const FRICTION_SWEEP: f32 = 0.995;

    /// Speed below which a stone snaps to rest (world units/tick)
    pub const STOP_THRESHOLD: f32 = 0.05;
    /// Velocity kept (and inverted) when bouncing off a side or the far wall
    pub const WALL_RESTITUTION: f32 = 0.5;
    /// Stone-on-stone impulse scale, split between the pair (game-feel tuning)
    pub const COLLISION_RESTITUTION: f32 = 1.9;

    /// Launch power
    pub const POWER_MAX: f32 = 35.0;
    pub const CHARGE_STEP: f32 = 0.5;
    /// Lateral aim speed (world units/tick)
    pub const AIM_SPEED: f32 = 4.0;

    /// Match structure
    pub const MAX_ENDS: u32 = 2;
    pub const STONES_PER_END: u32 = 8;
    pub const STONES_PER_TEAM: u32 = 4;

    /// Key depths along the sheet
    pub const START_Y: f32 = WORLD_DEPTH - 300.0;
    pub const TARGET_Y: f32 = 400.0;
    pub const SWITCH_VIEW_LINE: f32 = TARGET_Y + 500.0;

    /// Perspective camera
    pub const HORIZON_Y: f32 = 150.0;
    pub const VIEW_DIST: f32 = 5000.0;
    pub const NEAR_CLIP: f32 = 10.0;
    pub const FAR_CLIP: f32 = VIEW_DIST + 2000.0;
    pub const CAMERA_HEIGHT: f32 = 500.0;
    pub const FOCAL_LENGTH: f32 = 500.0;
    /// Stones read as ellipses in perspective; draw them larger to compensate
    pub const PERSPECTIVE_STONE_SCALE: f32 = 1.5;

    /// Top-down view
    pub const TOP_DOWN_SCALE: f32 = 0.8;

    /// Camera targets (world y of the eye)
    pub const CAMERA_CUT_IN_Y: f32 = START_Y + 500.0;
    pub const CAMERA_AIM_Y: f32 = START_Y + 600.0;
    pub const CAMERA_FOLLOW_OFFSET: f32 = 700.0;
    pub const CAMERA_EASE: f32 = 0.1;

    /// Banner transition length (ticks)
    pub const CUT_IN_TICKS: u32 = 120;
    /// Top-down hold before an end is tallied (ticks)
    pub const RESULT_HOLD_TICKS: u32 = 60;
}

/// Center of the house
#[inline]
pub fn target_position() -> Vec2 {
    Vec2::new(consts::SCREEN_W / 2.0, consts::TARGET_Y)
}

/// Spawn point on the throw line
#[inline]
pub fn throw_position() -> Vec2 {
    Vec2::new(consts::SCREEN_W / 2.0, consts::START_Y)
}

/// Clamp an x coordinate so a body of `radius` stays inside the corridor
#[inline]
pub fn clamp_to_corridor(x: f32, radius: f32) -> f32 {
    x.clamp(consts::PLAY_MIN_X + radius, consts::PLAY_MAX_X - radius)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
