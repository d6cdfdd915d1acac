//! End scoring
//!
//! Classic curling count: only the team with the stone nearest the button
//! scores, one point per stone closer than the opponent's best stone.

use std::cmp::Ordering;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Stone, Team};
use crate::consts::WORLD_DEPTH;

/// Points per team for one end (or accumulated over a match)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamScores {
    pub red: u32,
    pub yellow: u32,
}

impl TeamScores {
    pub fn new(red: u32, yellow: u32) -> Self {
        Self { red, yellow }
    }

    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::Red => self.red,
            Team::Yellow => self.yellow,
        }
    }

    pub fn add(&mut self, other: TeamScores) {
        self.red += other.red;
        self.yellow += other.yellow;
    }

    /// Team that scored, if any
    pub fn scorer(&self) -> Option<Team> {
        if self.red > 0 {
            Some(Team::Red)
        } else if self.yellow > 0 {
            Some(Team::Yellow)
        } else {
            None
        }
    }
}

/// Stone counts toward the score: still in play and inside the scoring half
pub fn in_scoring_position(stone: &Stone) -> bool {
    stone.is_active() && stone.pos.y < WORLD_DEPTH / 2.0
}

/// Stones in scoring position, nearest to `target` first
pub fn scoring_order(stones: &[Stone], target: Vec2) -> Vec<&Stone> {
    let mut valid: Vec<&Stone> = stones.iter().filter(|s| in_scoring_position(s)).collect();
    valid.sort_by(|a, b| {
        a.pos
            .distance(target)
            .partial_cmp(&b.pos.distance(target))
            .unwrap_or(Ordering::Equal)
    });
    valid
}

/// Score an end from the settled stones
pub fn score_end(stones: &[Stone], target: Vec2) -> TeamScores {
    let ordered = scoring_order(stones, target);
    let Some(leader) = ordered.first().map(|s| s.team) else {
        return TeamScores::default();
    };

    let points = ordered.iter().take_while(|s| s.team == leader).count() as u32;
    match leader {
        Team::Red => TeamScores::new(points, 0),
        Team::Yellow => TeamScores::new(0, points),
    }
}
