//! Demo autopilot
//!
//! Plays the game from outside the simulation: it only reads state and
//! answers whether to flap this tick, so runs stay deterministic.

use super::state::{GamePhase, GameState, ObstaclePair};
use crate::consts::*;

/// How far below the gap centre the bird may sink before flapping
pub const AUTOPILOT_MARGIN: f32 = 16.0;

/// Next pair the bird still has to clear
pub fn next_pair(state: &GameState) -> Option<&ObstaclePair> {
    let bird_x = state.bird.entity.position.x;
    state
        .obstacle_pairs
        .iter()
        .filter(|pair| pair.x + OBSTACLE_SIZE.x / 2.0 + BIRD_COLLISION_RADIUS >= bird_x)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
}

/// Vertical centre of the next gap, or the view centre if nothing is ahead
pub fn next_gap_center(state: &GameState) -> f32 {
    next_pair(state)
        .map(|pair| (pair.top.position.y + pair.bottom.position.y) / 2.0)
        .unwrap_or(0.0)
}

/// Whether to press this tick
pub fn wants_flap(state: &GameState) -> bool {
    match state.phase() {
        // Kick off the run
        GamePhase::Idle => true,
        GamePhase::Colliding => false,
        GamePhase::Playing => {
            let bird = &state.bird;
            bird.y_velocity <= 0.0
                && bird.entity.position.y < next_gap_center(state) - AUTOPILOT_MARGIN
        }
    }
}
