//! Per-frame view model
//!
//! Everything an external renderer needs to draw one frame, resolved to
//! screen space from the post-tick state. Drawing itself happens elsewhere.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::settings::Difficulty;
use crate::sim::projection::{ViewMode, project, project_perspective, stone_draw_radius};
use crate::sim::TeamScores;
use crate::sim::state::{BannerTone, GamePhase, GameState, SWEEP_PARTICLE_MAX_LIFE, Team};
use crate::sim::tick::broom_shake;

/// A stone resolved to screen space
#[derive(Debug, Clone, Serialize)]
pub struct StoneSprite {
    pub team: Team,
    pub screen: Vec2,
    pub scale: f32,
    /// Radius to draw, in pixels
    pub radius_px: f32,
    /// World y; draw far (small y) first
    pub depth: f32,
    pub spin: f32,
    /// The stone being aimed or in flight
    pub current: bool,
}

/// GPU instance for a stone sprite
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct StoneInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub spin: f32,
    pub color: [f32; 4],
}

/// Raw bytes of an instance slice, ready for a vertex buffer upload
pub fn stone_instance_bytes(instances: &[StoneInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

impl From<&StoneSprite> for StoneInstance {
    fn from(sprite: &StoneSprite) -> Self {
        let [r, g, b] = sprite.team.color();
        Self {
            center: sprite.screen.to_array(),
            radius: sprite.radius_px,
            spin: sprite.spin,
            color: [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0],
        }
    }
}

/// Scoreboard
#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    /// End shown on the board (never past the last end)
    pub end: u32,
    pub scores: TeamScores,
    pub hammer: Team,
    pub remaining_red: u32,
    pub remaining_yellow: u32,
    pub phase: &'static str,
}

/// Cut-in banner with its slide offset
#[derive(Debug, Clone, Serialize)]
pub struct BannerView {
    pub text: String,
    pub sub: String,
    pub color: [u8; 3],
    /// Dark text on light (yellow) banners
    pub dark_text: bool,
    /// 0..=1 through the cut-in
    pub progress: f32,
    /// Horizontal slide in pixels
    pub offset_x: f32,
}

/// Power gauge under the aimed stone
#[derive(Debug, Clone, Serialize)]
pub struct Gauge {
    pub anchor: Vec2,
    pub scale: f32,
    /// Charge as a fraction of max power
    pub fraction: f32,
    pub color: [u8; 3],
}

/// Broom cursor while the human team is up
#[derive(Debug, Clone, Serialize)]
pub struct Broom {
    pub pos: Vec2,
    pub sweeping: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleSprite {
    pub pos: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// End-of-match screen
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub text: &'static str,
    pub scores: TeamScores,
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub view_mode: ViewMode,
    pub camera_depth: f32,
    /// Depth-sorted, far to near
    pub stones: Vec<StoneSprite>,
    pub particles: Vec<ParticleSprite>,
    pub hud: Option<Hud>,
    pub banner: Option<BannerView>,
    pub gauge: Option<Gauge>,
    pub broom: Option<Broom>,
    pub menu: Option<&'static str>,
    pub verdict: Option<Verdict>,
}

impl Frame {
    /// Stone sprites packed for an instance buffer
    pub fn stone_instances(&self) -> Vec<StoneInstance> {
        self.stones.iter().map(StoneInstance::from).collect()
    }
}

/// Horizontal banner slide: ease in from the right over the first 20%, out to
/// the left over the last 20%
pub fn banner_offset(progress: f32) -> f32 {
    if progress < 0.2 {
        let t = progress / 0.2;
        SCREEN_W * (1.0 - t * t)
    } else if progress > 0.8 {
        let t = (progress - 0.8) / 0.2;
        -SCREEN_W * t * t
    } else {
        0.0
    }
}

/// Build the frame for the current state. `pointer` is the mouse position.
pub fn build_frame(state: &GameState, pointer: Vec2) -> Frame {
    let mode = state.view_mode();
    let camera_depth = state.camera.depth;

    let mut stones: Vec<StoneSprite> = state
        .stones
        .iter()
        .map(|s| (s, false))
        .chain(state.current.iter().map(|s| (s, true)))
        .filter(|(s, _)| s.is_active())
        .filter_map(|(s, current)| {
            let point = project(mode, s.pos, camera_depth)?;
            Some(StoneSprite {
                team: s.team,
                screen: point.pos,
                scale: point.scale,
                radius_px: stone_draw_radius(s.radius, &point, mode),
                depth: s.pos.y,
                spin: s.spin,
                current,
            })
        })
        .collect();
    stones.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    let particles = state
        .particles
        .iter()
        .filter(|p| p.alive())
        .map(|p| ParticleSprite {
            pos: p.pos,
            size: p.size,
            alpha: p.life as f32 / SWEEP_PARTICLE_MAX_LIFE as f32,
        })
        .collect();

    let mut frame = Frame {
        view_mode: mode,
        camera_depth,
        stones,
        particles,
        hud: None,
        banner: None,
        gauge: None,
        broom: None,
        menu: None,
        verdict: None,
    };

    match state.phase {
        GamePhase::StartMenu => {
            frame.menu = Some(Difficulty::MENU_LABEL);
            return frame;
        }
        GamePhase::GameOver => {
            frame.verdict = Some(Verdict {
                text: if state.scores.red > state.scores.yellow {
                    "WIN!!"
                } else {
                    "LOSE..."
                },
                scores: state.scores,
            });
            return frame;
        }
        _ => {}
    }

    frame.hud = Some(Hud {
        end: state.current_end.min(MAX_ENDS),
        scores: state.scores,
        hammer: state.hammer,
        remaining_red: state.remaining_stones(Team::Red),
        remaining_yellow: state.remaining_stones(Team::Yellow),
        phase: state.phase.label(),
    });

    match state.phase {
        GamePhase::CutIn { timer, .. } => {
            if let Some(banner) = &state.banner {
                let progress = timer as f32 / CUT_IN_TICKS as f32;
                frame.banner = Some(BannerView {
                    text: banner.text.clone(),
                    sub: banner.sub.clone(),
                    color: banner.tone.color(),
                    dark_text: banner.tone == BannerTone::Team(Team::Yellow),
                    progress,
                    offset_x: banner_offset(progress),
                });
            }
        }
        GamePhase::Aiming(aim) => {
            if mode == ViewMode::Perspective {
                frame.gauge = state
                    .current
                    .as_ref()
                    .and_then(|s| project_perspective(s.pos, camera_depth))
                    .map(|point| {
                        let fraction = aim.charge / POWER_MAX;
                        Gauge {
                            anchor: point.pos + Vec2::new(0.0, 40.0 * point.scale),
                            scale: point.scale,
                            fraction,
                            color: [(255.0 * fraction) as u8, (255.0 * (1.0 - fraction)) as u8, 0],
                        }
                    });
            }
            if state.turn == state.human_team() {
                frame.broom = Some(Broom {
                    pos: pointer,
                    sweeping: false,
                });
            }
        }
        GamePhase::Moving => {
            if state.turn == state.human_team() {
                let shake = if state.sweeping {
                    broom_shake(state.time_ticks)
                } else {
                    0.0
                };
                frame.broom = Some(Broom {
                    pos: pointer + Vec2::new(shake, 0.0),
                    sweeping: state.sweeping,
                });
            }
        }
        _ => {}
    }

    frame
}
