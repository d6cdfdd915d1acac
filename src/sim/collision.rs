//! Collision detection and response between stones
//!
//! Equal-mass circles, one pass per tick, no broad phase: at most nine
//! stones are ever on the sheet.

use glam::Vec2;

use super::state::Stone;
use crate::consts::COLLISION_RESTITUTION;

/// Separation used when two stones sit exactly on top of each other
const FALLBACK_SEPARATION: Vec2 = Vec2::X;

/// Result of a stone/stone overlap check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the stones overlap
    pub hit: bool,
    /// Unit normal pointing from `b` toward `a`
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check overlap between two stones
pub fn stone_stone_collision(a: &Stone, b: &Stone) -> CollisionResult {
    let min_dist = a.radius + b.radius;
    let mut delta = a.pos - b.pos;
    let mut dist = delta.length();

    if dist >= min_dist {
        return CollisionResult::miss();
    }

    if dist == 0.0 {
        delta = FALLBACK_SEPARATION;
        dist = 1.0;
    }

    CollisionResult {
        hit: true,
        normal: delta / dist,
        penetration: min_dist - dist,
    }
}

/// Resolve one pair: push apart by half the overlap each, then exchange an
/// impulse if they are still approaching. Returns true if an impulse was applied.
pub fn resolve_pair(a: &mut Stone, b: &mut Stone) -> bool {
    let result = stone_stone_collision(a, b);
    if !result.hit {
        return false;
    }

    let correction = result.normal * (result.penetration * 0.5);
    a.pos += correction;
    b.pos -= correction;

    let vel_along_normal = (a.vel - b.vel).dot(result.normal);
    if vel_along_normal >= 0.0 {
        return false;
    }

    let impulse = result.normal * (-COLLISION_RESTITUTION * vel_along_normal / 2.0);
    a.vel += impulse;
    b.vel -= impulse;
    // Both re-enter integration so the settle check sees them again
    a.stopped = false;
    b.stopped = false;
    true
}

/// Run one pass over all active pairs. Returns the number of impulses applied.
pub fn resolve_collisions(stones: &mut [&mut Stone]) -> u32 {
    let mut impulses = 0;
    for j in 1..stones.len() {
        let (head, tail) = stones.split_at_mut(j);
        let b: &mut Stone = &mut *tail[0];
        if !b.is_active() {
            continue;
        }
        for a in head.iter_mut() {
            let a: &mut Stone = &mut **a;
            if !a.is_active() {
                continue;
            }
            if resolve_pair(a, b) {
                impulses += 1;
            }
        }
    }
    if impulses > 0 {
        log::debug!("Resolved {} stone collisions", impulses);
    }
    impulses
}
