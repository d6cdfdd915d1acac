//! World → screen projection
//!
//! Two views of the same sheet: a pseudo-3D perspective looking down the
//! sheet from behind the throw line, and a flat top-down view of the house.
//! World x maps to screen x around the screen center in both.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

/// Which projection the renderer should use this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Perspective,
    TopDown,
}

impl ViewMode {
    /// View for a stone leading play at world depth `y`
    pub fn for_depth(y: f32) -> Self {
        if y < SWITCH_VIEW_LINE {
            ViewMode::TopDown
        } else {
            ViewMode::Perspective
        }
    }
}

/// A projected point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub pos: Vec2,
    /// Pixels per world unit at this point (> 0)
    pub scale: f32,
}

/// Perspective projection. `None` when the point is behind the near clip
/// plane or past the far clip plane.
pub fn project_perspective(world: Vec2, camera_depth: f32) -> Option<ScreenPoint> {
    let relative_depth = camera_depth - world.y;
    if !(NEAR_CLIP..=FAR_CLIP).contains(&relative_depth) {
        return None;
    }

    let scale = FOCAL_LENGTH / relative_depth;
    let center_x = SCREEN_W / 2.0;
    Some(ScreenPoint {
        pos: Vec2::new(
            center_x + (world.x - center_x) * scale,
            HORIZON_Y + CAMERA_HEIGHT * scale,
        ),
        scale,
    })
}

/// Top-down projection centered on the house. Always visible.
pub fn project_top_down(world: Vec2) -> ScreenPoint {
    let scale = TOP_DOWN_SCALE;
    let center_x = SCREEN_W / 2.0;
    ScreenPoint {
        pos: Vec2::new(
            center_x + (world.x - center_x) * scale,
            SCREEN_H / 2.0 + (world.y - TARGET_Y) * scale,
        ),
        scale,
    }
}

/// Project under `mode`
pub fn project(mode: ViewMode, world: Vec2, camera_depth: f32) -> Option<ScreenPoint> {
    match mode {
        ViewMode::Perspective => project_perspective(world, camera_depth),
        ViewMode::TopDown => Some(project_top_down(world)),
    }
}

/// On-screen radius of a stone of world radius `radius` at `point`
pub fn stone_draw_radius(radius: f32, point: &ScreenPoint, mode: ViewMode) -> f32 {
    let boost = match mode {
        ViewMode::Perspective => PERSPECTIVE_STONE_SCALE,
        ViewMode::TopDown => 1.0,
    };
    (radius * point.scale * boost).max(2.0)
}

/// Virtual eye position along the sheet, plus the active view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// World y of the eye
    pub depth: f32,
    pub mode: ViewMode,
}

impl Camera {
    pub fn new(depth: f32) -> Self {
        Self {
            depth,
            mode: ViewMode::Perspective,
        }
    }

    /// Exponential ease toward `target` (one tick)
    pub fn ease_toward(&mut self, target: f32) {
        self.depth += (target - self.depth) * CAMERA_EASE;
    }

    /// Linear glide from `from` to `to`, `t` in [0, 1]
    pub fn glide(&mut self, from: f32, to: f32, t: f32) {
        self.depth = lerp(from, to, t.clamp(0.0, 1.0));
    }

    /// Follow the lead stone while it travels: switch to top-down once it
    /// crosses the view line, otherwise trail it in perspective.
    pub fn follow(&mut self, lead_y: f32) {
        self.mode = ViewMode::for_depth(lead_y);
        if self.mode == ViewMode::Perspective {
            let target =
                (lead_y + CAMERA_FOLLOW_OFFSET).clamp(TARGET_Y + CAMERA_FOLLOW_OFFSET, CAMERA_AIM_Y);
            self.ease_toward(target);
        }
    }
}
