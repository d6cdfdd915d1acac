//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame, velocities in world units per tick
//! - Seeded RNG only
//! - Stable iteration order (roster order, current stone last)
//! - No rendering or platform dependencies

pub mod bot;
pub mod collision;
pub mod physics;
pub mod projection;
pub mod scoring;
pub mod state;
pub mod tick;

pub use bot::{BotShot, ShotKind, decide, plan_shot};
pub use collision::{CollisionResult, resolve_collisions, resolve_pair, stone_stone_collision};
pub use physics::{advance, all_stopped, step_stones};
pub use projection::{Camera, ScreenPoint, ViewMode, project, project_perspective, project_top_down};
pub use scoring::{TeamScores, score_end, scoring_order};
pub use state::{
    AimState, Banner, BannerTone, BotStage, ChargeDirection, CutInNext, GamePhase, GameState,
    Stone, Team,
};
pub use tick::{TickInput, start_cut_in, tick};
