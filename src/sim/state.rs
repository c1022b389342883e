//! Game state and core simulation types
//!
//! Everything the simulation touches lives in [`GameState`], including the
//! seeded RNG, so a snapshot is a plain `Clone`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::obstacles::place_pair;
use crate::consts::*;

/// Current phase of gameplay
///
/// Derived from the play-started and collision flags; a reset is an event, not
/// a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first flap
    Idle,
    /// Bird flying, world scrolling
    Playing,
    /// Bird hit something, world frozen, bird falling
    Colliding,
}

/// The player
#[derive(Debug, Clone, Copy, Default)]
pub struct Bird {
    pub entity: Entity,
    pub y_velocity: f32,
    /// Sticky until the next reset
    pub is_colliding: bool,
}

/// Two obstacles sharing one horizontal coordinate
#[derive(Debug, Clone, Copy, Default)]
pub struct ObstaclePair {
    pub x: f32,
    pub top: Entity,
    pub bottom: Entity,
}

/// Cloud sprite variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloudKind {
    #[default]
    One,
    Two,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cloud {
    pub entity: Entity,
    pub kind: CloudKind,
    pub speed_scale: f32,
}

/// What the HUD should show this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDisplay {
    /// Before play starts: the stored high score
    HighScore(u32),
    /// During a run
    Score(u32),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub play_started: bool,
    pub score: u32,
    /// Index of the pair that scored most recently
    pub last_scored_pair: Option<usize>,
    pub bird: Bird,
    pub obstacle_pairs: [ObstaclePair; OBSTACLE_PAIR_COUNT],
    pub clouds: [Cloud; CLOUD_COUNT],
    pub hills: [Entity; HILL_TILE_COUNT],
    pub ground: [Entity; GROUND_TILE_COUNT],
    pub score_display: ScoreDisplay,
    /// Simulation tick counter (since the last reset)
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seed, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(seed: u64, rng: Pcg32) -> Self {
        let mut state = Self {
            seed,
            rng,
            play_started: false,
            score: 0,
            last_scored_pair: None,
            bird: Bird::default(),
            obstacle_pairs: [ObstaclePair::default(); OBSTACLE_PAIR_COUNT],
            clouds: [Cloud::default(); CLOUD_COUNT],
            hills: [Entity::default(); HILL_TILE_COUNT],
            ground: [Entity::default(); GROUND_TILE_COUNT],
            score_display: ScoreDisplay::HighScore(0),
            time_ticks: 0,
        };
        state.setup();
        state
    }

    /// Rebuild everything to construction defaults
    ///
    /// The RNG stream carries on rather than being re-seeded, so consecutive
    /// runs in one session get different layouts while staying reproducible
    /// from the session seed. Entity versions carry on too, one past their
    /// old values.
    pub fn reset(&mut self) {
        let fresh = Self::with_rng(self.seed, self.rng.clone());
        let old = std::mem::replace(self, fresh);

        // Every entity jumps back to its start, so each must snap
        follow(&mut self.bird.entity, &old.bird.entity);
        for (pair, old) in self.obstacle_pairs.iter_mut().zip(&old.obstacle_pairs) {
            follow(&mut pair.top, &old.top);
            follow(&mut pair.bottom, &old.bottom);
        }
        for (cloud, old) in self.clouds.iter_mut().zip(&old.clouds) {
            follow(&mut cloud.entity, &old.entity);
        }
        for (hill, old) in self.hills.iter_mut().zip(&old.hills) {
            follow(hill, old);
        }
        for (tile, old) in self.ground.iter_mut().zip(&old.ground) {
            follow(tile, old);
        }
    }

    pub fn phase(&self) -> GamePhase {
        if !self.play_started {
            GamePhase::Idle
        } else if self.bird.is_colliding {
            GamePhase::Colliding
        } else {
            GamePhase::Playing
        }
    }

    /// World scrolls only while a run is live
    #[inline]
    pub fn is_scrolling(&self) -> bool {
        self.phase() == GamePhase::Playing
    }

    /// Uniform float in `[min, max]`
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.random_range(min..=max)
    }

    fn setup(&mut self) {
        for (i, pair) in self.obstacle_pairs.iter_mut().enumerate() {
            place_pair(pair, OBSTACLE_X_SPACING * (i + 1) as f32, &mut self.rng);
        }

        for i in 0..CLOUD_COUNT {
            let x = self.random_range(CLOUD_X_MIN, CLOUD_X_MAX);
            self.respawn_cloud(i, x);
        }

        let hill_start = Vec2::new(
            -HALF_VIEW_WIDTH + HILL_SIZE.x / 2.0,
            -HALF_VIEW_HEIGHT + HILL_SIZE.y / 2.0,
        );
        for (i, hill) in self.hills.iter_mut().enumerate() {
            *hill = Entity::at(hill_start + Vec2::new(HILL_SIZE.x * i as f32, 0.0));
        }

        let ground_start = Vec2::new(
            -HALF_VIEW_WIDTH + GROUND_TILE_SIZE.x / 2.0,
            -HALF_VIEW_HEIGHT + GROUND_TILE_SIZE.y / 2.0,
        );
        for (i, tile) in self.ground.iter_mut().enumerate() {
            *tile = Entity::at(ground_start + Vec2::new(GROUND_TILE_SIZE.x * i as f32, 0.0));
        }
    }

    /// Reroll a cloud's look and speed and put it at `x`
    pub(crate) fn respawn_cloud(&mut self, index: usize, x: f32) {
        let kind = if self.rng.random_bool(0.5) {
            CloudKind::One
        } else {
            CloudKind::Two
        };
        let speed_scale = self.random_range(CLOUD_SPEED_SCALE_MIN, CLOUD_SPEED_SCALE_MAX);
        let y = self.random_range(CLOUD_Y_MIN, CLOUD_Y_MAX);
        let (scale_min, scale_max) = cloud_scale_band(index, CLOUD_COUNT);
        let scale = self.random_range(scale_min, scale_max);

        let cloud = &mut self.clouds[index];
        cloud.entity.bump_version();
        cloud.entity.position = Vec2::new(x, y);
        cloud.entity.scale = Vec2::splat(scale);
        cloud.kind = kind;
        cloud.speed_scale = speed_scale;
    }
}

/// Continue `entity`'s version one past `old`'s
fn follow(entity: &mut Entity, old: &Entity) {
    entity.version = old.version.wrapping_add(1);
}

/// The slice of the cloud scale range owned by slot `index`
///
/// Splitting the range into equal bands keeps the pool evenly spread between
/// small and large clouds.
pub fn cloud_scale_band(index: usize, count: usize) -> (f32, f32) {
    let band = (CLOUD_SCALE_MAX - CLOUD_SCALE_MIN) / count as f32;
    let min = CLOUD_SCALE_MIN + band * index as f32;
    (min, min + band)
}
