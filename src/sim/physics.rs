//! Stone kinematics
//!
//! Explicit per-tick integration: no dt, velocities are world units per tick.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::state::Stone;
use crate::clamp_to_corridor;
use crate::consts::*;

/// Advance a single stone by one tick under `friction`.
///
/// Integrates, decays, snaps to rest below [`STOP_THRESHOLD`], then handles
/// the side walls, the far wall (y < 0, bounces) and the back line
/// (y > [`WORLD_DEPTH`], stone is lost).
pub fn advance(stone: &mut Stone, friction: f32) {
    if stone.stopped {
        return;
    }

    stone.pos += stone.vel;
    stone.vel *= friction;

    let speed = stone.vel.length();
    stone.spin -= speed * 5.0;
    if speed < STOP_THRESHOLD {
        stone.vel = Vec2::ZERO;
        stone.stopped = true;
    }

    let min_x = PLAY_MIN_X + stone.radius;
    let max_x = PLAY_MAX_X - stone.radius;
    if stone.pos.x < min_x {
        stone.pos.x = min_x;
        stone.vel.x *= -WALL_RESTITUTION;
    } else if stone.pos.x > max_x {
        stone.pos.x = max_x;
        stone.vel.x *= -WALL_RESTITUTION;
    }

    if stone.pos.y < 0.0 {
        stone.pos.y = 0.0;
        stone.vel.y *= -WALL_RESTITUTION;
    }
    if stone.pos.y > WORLD_DEPTH {
        stone.vel = Vec2::ZERO;
        stone.stopped = true;
        stone.out_of_play = true;
    }
}

/// One physics tick over every stone on the sheet.
///
/// `current` (the thrown stone) uses `current_friction`; settled stones always
/// use [`FRICTION_NORMAL`]. Returns the number of collision impulses applied.
pub fn step_stones(stones: &mut [Stone], mut current: Option<&mut Stone>, current_friction: f32) -> u32 {
    if let Some(stone) = current.as_deref_mut() {
        advance(stone, current_friction);
    }
    for stone in stones.iter_mut() {
        advance(stone, FRICTION_NORMAL);
    }

    let mut bodies: Vec<&mut Stone> = stones.iter_mut().chain(current).collect();
    let impulses = resolve_collisions(&mut bodies);

    // Overlap correction can shove a stone past a side wall
    for stone in bodies.iter_mut().filter(|s| s.is_active()) {
        stone.pos.x = clamp_to_corridor(stone.pos.x, stone.radius);
    }

    impulses
}

/// True once nothing on the sheet is moving
pub fn all_stopped<'a>(mut stones: impl Iterator<Item = &'a Stone>) -> bool {
    stones.all(|s| s.stopped)
}
