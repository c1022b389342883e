//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Sub-steps run in
//! a fixed order and later ones read what earlier ones wrote this tick:
//! scoring sees obstacles already scrolled, collision sees the bird already
//! moved.

use super::collision::bird_hits_world;
use super::obstacles::{is_offscreen, place_pair, sync_pair};
use super::state::{GameState, ScoreDisplay};
use crate::audio::AudioSink;
use crate::consts::*;
use crate::highscores::PersistentState;
use crate::platform::Platform;

/// Player input, owned by the host and updated from device events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    /// Flap requested; cleared by the simulation once consumed
    pub flap: bool,
    /// Button held; softens gravity while rising
    pub hovering: bool,
}

impl Input {
    /// Button/touch down
    pub fn press(&mut self) {
        self.flap = true;
        self.hovering = true;
    }

    /// Button/touch up
    pub fn release(&mut self) {
        self.hovering = false;
    }

    pub fn acknowledge_flap(&mut self) {
        self.flap = false;
    }
}

/// Collaborators the tick reports to
pub struct TickContext<'a> {
    pub persistent: &'a mut PersistentState,
    /// Where new high scores are written; skipped when absent
    pub platform: Option<&'a mut dyn Platform>,
    pub audio: &'a mut dyn AudioSink,
}

/// Advance the game state by one fixed timestep
///
/// `dt` must be positive.
pub fn tick(state: &mut GameState, input: &mut Input, ctx: &mut TickContext<'_>, dt: f32) {
    debug_assert!(dt > 0.0, "tick called with non-positive dt {dt}");

    // First flap starts the run
    if !state.play_started && input.flap {
        state.play_started = true;
        log::info!("Run started");
    }

    state.time_ticks += 1;

    update_clouds(state, dt);
    update_hills(state, dt);
    update_obstacles(state, dt);
    update_ground(state, dt);
    update_bird(state, input, &mut *ctx.audio, dt);
    update_score(state, ctx);
    detect_collisions(state, &mut *ctx.audio);
    handle_reset(state, input, ctx);
}

fn update_clouds(state: &mut GameState, dt: f32) {
    let scrolling = state.is_scrolling();

    for i in 0..CLOUD_COUNT {
        let cloud = &mut state.clouds[i];
        cloud.entity.position.x -= CLOUD_SCROLL_SPEED * cloud.speed_scale * dt;
        if scrolling {
            cloud.entity.position.x -= SCROLL_SPEED * CLOUD_SCROLL_MODIFIER * dt;
        }

        if cloud.entity.position.x <= CLOUD_X_MIN {
            state.respawn_cloud(i, CLOUD_X_MAX);
        }
    }
}

fn update_hills(state: &mut GameState, dt: f32) {
    let scrolling = state.is_scrolling();
    let wrap = HILL_SIZE.x * HILL_TILE_COUNT as f32;

    for hill in &mut state.hills {
        if scrolling {
            hill.position.x -= SCROLL_SPEED * HILL_SCROLL_MODIFIER * dt;
        }

        // Right edge, not left: with the start layout a left-edge check fires on tick one
        if hill.position.x + HILL_SIZE.x / 2.0 <= -HALF_VIEW_WIDTH {
            hill.bump_version();
            hill.position.x += wrap;
        }
    }
}

fn update_obstacles(state: &mut GameState, dt: f32) {
    let scrolling = state.is_scrolling();
    let wrap = OBSTACLE_X_SPACING * OBSTACLE_PAIR_COUNT as f32;

    for (i, pair) in state.obstacle_pairs.iter_mut().enumerate() {
        if scrolling {
            pair.x -= SCROLL_SPEED * dt;
        }

        if is_offscreen(pair) {
            let x = pair.x + wrap;
            place_pair(pair, x, &mut state.rng);
            // A recycled pair may score again on its next pass
            if state.last_scored_pair == Some(i) {
                state.last_scored_pair = None;
            }
            log::debug!("Obstacle pair {} recycled to x={:.1}", i, x);
        }

        sync_pair(pair);
    }
}

fn update_ground(state: &mut GameState, dt: f32) {
    let scrolling = state.is_scrolling();
    let wrap = GROUND_TILE_SIZE.x * GROUND_TILE_COUNT as f32;

    for tile in &mut state.ground {
        if scrolling {
            tile.position.x -= SCROLL_SPEED * dt;
        }

        let right = tile.position.x + GROUND_TILE_SIZE.x / 2.0 + GROUND_RECYCLE_PADDING;
        if right <= -HALF_VIEW_WIDTH {
            tile.bump_version();
            tile.position.x += wrap;
        }
    }
}

fn update_bird(state: &mut GameState, input: &mut Input, audio: &mut dyn AudioSink, dt: f32) {
    let bird = &mut state.bird;

    // Gravity is a per-tick decrement tuned for SIM_DT
    if state.play_started {
        if input.hovering && bird.y_velocity > 0.0 {
            bird.y_velocity -= BIRD_GRAVITY * BIRD_HOVER_GRAVITY_SCALE;
        } else {
            bird.y_velocity -= BIRD_GRAVITY;
        }
    }

    if input.flap && !bird.is_colliding {
        if bird.entity.position.y < BIRD_CEILING {
            bird.y_velocity = BIRD_FLAP_FORCE;
        }
        input.acknowledge_flap();
        audio.flap();
    }

    if state.play_started {
        bird.entity.position.y += bird.y_velocity * dt;
    }

    // Cosmetic tilt, updated in every phase
    let degrees = (bird.y_velocity * BIRD_ROTATION_SMOOTHING)
        .clamp(BIRD_ROTATION_MIN_DEGREES, BIRD_ROTATION_MAX_DEGREES);
    bird.entity.rotation = degrees.to_radians();
}

fn update_score(state: &mut GameState, ctx: &mut TickContext<'_>) {
    if state.is_scrolling() {
        for (i, pair) in state.obstacle_pairs.iter().enumerate() {
            if pair.x <= 0.0 && state.last_scored_pair != Some(i) {
                state.last_scored_pair = Some(i);
                state.score += 1;
                ctx.audio.score();
                log::debug!("Scored {} (pair {})", state.score, i);
            }
        }
    }

    state.score_display = if state.play_started {
        ScoreDisplay::Score(state.score)
    } else {
        ScoreDisplay::HighScore(ctx.persistent.high_score)
    };
}

fn detect_collisions(state: &mut GameState, audio: &mut dyn AudioSink) {
    // Sticky until reset
    if state.bird.is_colliding {
        return;
    }

    if bird_hits_world(state) {
        state.bird.is_colliding = true;
        audio.hit();
        log::info!(
            "Bird hit at y={:.1} with score {}",
            state.bird.entity.position.y,
            state.score
        );
    }
}

fn handle_reset(state: &mut GameState, input: &mut Input, ctx: &mut TickContext<'_>) {
    if !state.bird.is_colliding || state.bird.entity.position.y > -VIEW_HEIGHT {
        return;
    }

    log::info!("Run over with score {}", state.score);

    ctx.persistent.submit(state.score, ctx.platform.as_deref_mut());

    state.reset();
    state.score_display = ScoreDisplay::HighScore(ctx.persistent.high_score);
    *input = Input::default();
}
