//! Application context
//!
//! Owns the game state, the previous-tick snapshot, input, and every
//! collaborator. The host feeds it wall-clock time and input events and
//! gets a drawable list back each frame.

use crate::audio::AudioQueue;
use crate::consts::{MAX_FRAME_DELTA, MAX_SUBSTEPS, SIM_DT};
use crate::debug::DebugState;
use crate::highscores::PersistentState;
use crate::platform::Platform;
use crate::renderer::{Drawable, populate};
use crate::sim::state::{GameState, ScoreDisplay};
use crate::sim::tick::{Input, TickContext, tick};

pub struct App {
    state: GameState,
    previous: GameState,
    input: Input,
    persistent: PersistentState,
    debug: Option<DebugState>,
    platform: Option<Box<dyn Platform>>,
    audio: AudioQueue,
    accumulator: f32,
}

impl App {
    pub fn new(seed: u64, platform: Option<Box<dyn Platform>>, debug: Option<DebugState>) -> Self {
        let persistent = PersistentState::load(platform.as_deref());
        let mut state = GameState::new(seed);
        state.score_display = ScoreDisplay::HighScore(persistent.high_score);
        log::info!(
            "Game ready (seed {}, high score {})",
            seed,
            persistent.high_score
        );

        Self {
            previous: state.clone(),
            state,
            input: Input::default(),
            persistent,
            debug,
            platform,
            audio: AudioQueue::new(),
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn persistent(&self) -> &PersistentState {
        &self.persistent
    }

    pub fn input(&self) -> Input {
        self.input
    }

    pub fn debug(&self) -> Option<&DebugState> {
        self.debug.as_ref()
    }

    pub fn debug_mut(&mut self) -> Option<&mut DebugState> {
        self.debug.as_mut()
    }

    /// Sounds triggered since the host last drained them
    pub fn audio_mut(&mut self) -> &mut AudioQueue {
        &mut self.audio
    }

    /// Button/touch down: flap and start hovering
    pub fn press(&mut self) {
        self.input.press();
    }

    /// Button/touch up: stop hovering
    pub fn release(&mut self) {
        self.input.release();
    }

    /// Run simulation ticks for `elapsed_seconds` of wall time and project the result
    pub fn advance(&mut self, elapsed_seconds: f32) -> Vec<Drawable> {
        let speed = self.debug.map_or(1.0, |d| d.sim_speed);
        // Clamp the wall delta, then scale, so fast speeds keep their effect
        let dt = elapsed_seconds.clamp(0.0, MAX_FRAME_DELTA) * speed;
        self.accumulator += dt;

        let max_substeps = MAX_SUBSTEPS * (speed.ceil() as u32).max(1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < max_substeps {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        // Too far behind: drop the backlog rather than carry it forward
        if self.accumulator >= SIM_DT {
            log::debug!(
                "Dropping {:.3}s of simulation backlog",
                self.accumulator - self.accumulator % SIM_DT
            );
            self.accumulator %= SIM_DT;
        }

        let alpha = self.accumulator / SIM_DT;
        populate(&self.state, &self.previous, alpha, self.debug.as_ref())
    }

    /// Snapshot the current state and advance exactly one tick
    pub fn step(&mut self) {
        self.previous = self.state.clone();

        let mut ctx = TickContext {
            persistent: &mut self.persistent,
            platform: self
                .platform
                .as_deref_mut()
                .map(|platform| platform as &mut dyn Platform),
            audio: &mut self.audio,
        };
        tick(&mut self.state, &mut self.input, &mut ctx, SIM_DT);
    }

    /// Debug key: forget the stored high score
    pub fn clear_high_score(&mut self) {
        let debug = self.debug.unwrap_or_default();
        debug.clear_high_score(&mut self.persistent, self.platform.as_deref_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::platform::MemoryPlatform;
    use crate::sim::state::GamePhase;

    fn app() -> App {
        App::new(42, Some(Box::new(MemoryPlatform::default())), Some(DebugState::default()))
    }

    fn texts(drawables: &[Drawable]) -> Vec<String> {
        drawables
            .iter()
            .filter_map(|d| match d {
                Drawable::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_zero_elapsed_does_not_tick() {
        let mut app = app();
        let out = app.advance(0.0);
        assert_eq!(app.state().time_ticks, 0);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_fixed_steps_per_frame() {
        let mut app = app();
        app.advance(SIM_DT * 3.5);
        assert_eq!(app.state().time_ticks, 3);

        // Leftover half tick carries into the next frame
        app.advance(SIM_DT * 0.6);
        assert_eq!(app.state().time_ticks, 4);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut app = app();
        app.advance(10.0);
        assert_eq!(app.state().time_ticks, MAX_SUBSTEPS as u64);

        // Backlog dropped, so a tiny frame does not tick again
        app.advance(0.0);
        assert_eq!(app.state().time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_high_speed_runs_more_ticks() {
        let mut slow = app();
        let mut fast = app();
        if let Some(debug) = slow.debug_mut() {
            debug.set_sim_speed(8.0);
        }
        if let Some(debug) = fast.debug_mut() {
            debug.set_sim_speed(64.0);
        }

        // Idle, so nothing resets the tick counters
        for _ in 0..10 {
            slow.advance(SIM_DT);
            fast.advance(SIM_DT);
        }
        let slow_ticks = slow.state().time_ticks;
        let fast_ticks = fast.state().time_ticks;
        assert!((79..=80).contains(&slow_ticks), "slow ran {slow_ticks}");
        assert!(fast_ticks >= 630, "fast ran {fast_ticks}");
    }

    #[test]
    fn test_reset_shows_stored_high_score() {
        let mut app = App::new(3, Some(Box::new(MemoryPlatform::with_high_score(7))), None);
        app.press();
        app.advance(SIM_DT);
        app.release();

        let mut out = Vec::new();
        for _ in 0..600 {
            out = app.advance(SIM_DT);
            if app.state().phase() == GamePhase::Idle {
                break;
            }
        }

        assert_eq!(app.state().phase(), GamePhase::Idle);
        assert_eq!(app.state().score_display, ScoreDisplay::HighScore(7));
        assert_eq!(texts(&out), vec!["HIGH SCORE".to_string(), "7".to_string()]);
    }

    #[test]
    fn test_sim_speed_scales_time() {
        let mut app = app();
        if let Some(debug) = app.debug_mut() {
            debug.set_sim_speed(2.0);
        }
        app.advance(SIM_DT * 2.1);
        assert_eq!(app.state().time_ticks, 4);

        if let Some(debug) = app.debug_mut() {
            debug.set_sim_speed(0.0);
        }
        app.advance(1.0);
        assert_eq!(app.state().time_ticks, 4);
    }

    #[test]
    fn test_press_starts_run() {
        let mut app = app();
        app.press();
        app.advance(SIM_DT * 1.5);
        assert_eq!(app.state().phase(), GamePhase::Playing);
        assert!(!app.input().flap);
        assert!(app.input().hovering);

        app.release();
        assert!(!app.input().hovering);

        let sounds = app.audio_mut().drain();
        assert_eq!(sounds.first().map(|(e, _)| *e), Some(SoundEffect::Flap));
    }

    #[test]
    fn test_loaded_high_score_shown_before_first_tick() {
        let mut app = App::new(1, Some(Box::new(MemoryPlatform::with_high_score(8))), None);
        assert_eq!(app.persistent().high_score, 8);
        let out = app.advance(0.0);
        assert!(texts(&out).contains(&"8".to_string()));
    }

    #[test]
    fn test_overlay_follows_debug_toggle() {
        let mut app = app();
        let out = app.advance(0.0);
        assert!(!out.iter().any(|d| matches!(d, Drawable::Debug(_))));

        if let Some(debug) = app.debug_mut() {
            debug.toggle_collision_debugger();
        }
        let out = app.advance(0.0);
        assert!(out.iter().any(|d| matches!(d, Drawable::Debug(_))));
    }

    #[test]
    fn test_clear_high_score() {
        let mut app = App::new(1, Some(Box::new(MemoryPlatform::with_high_score(8))), None);
        app.clear_high_score();
        assert_eq!(app.persistent().high_score, 0);
    }

    #[test]
    fn test_runs_without_platform() {
        let mut app = App::new(3, None, None);
        app.press();
        for _ in 0..240 {
            app.advance(SIM_DT);
        }
        // Crashed into the floor and reset back to idle
        assert_eq!(app.state().phase(), GamePhase::Idle);
        assert!(app.state().time_ticks < 240);
        assert_eq!(app.persistent().high_score, 0);
    }

    #[test]
    fn test_snapshot_tracks_previous_tick() {
        let mut app = app();
        app.press();
        app.advance(SIM_DT * 1.5);
        app.advance(SIM_DT);
        let previous_y = app.previous.bird.entity.position.y;
        let current_y = app.state().bird.entity.position.y;
        assert!(current_y > previous_y);
    }
}
