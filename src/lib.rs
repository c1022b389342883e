//! Flappy - a side-scrolling obstacle flyer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, collisions, scoring)
//! - `renderer`: Projection of simulation state into a drawable list
//! - `platform`: High score storage and asset lookup behind a trait
//! - `app`: Host loop owning the state, collaborators and fixed-step accumulator

pub mod app;
pub mod audio;
pub mod debug;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use audio::{AudioQueue, AudioSink, SilentAudio, SoundEffect};
pub use debug::DebugState;
pub use highscores::PersistentState;
pub use platform::{FilePlatform, MemoryPlatform, Platform, PlatformError};
pub use settings::Settings;

/// Game configuration constants
///
/// Physics values are tuned for [`SIM_DT`](consts::SIM_DT); gravity in
/// particular is a per-tick decrement, not an acceleration.
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame the host will feed into the accumulator
    pub const MAX_FRAME_DELTA: f32 = 0.25;

    /// View dimensions (a portrait 1080x1920 screen scaled by 0.2)
    pub const VIEW_WIDTH: f32 = 1080.0 * 0.2;
    pub const VIEW_HEIGHT: f32 = 1920.0 * 0.2;
    pub const HALF_VIEW_WIDTH: f32 = VIEW_WIDTH / 2.0;
    pub const HALF_VIEW_HEIGHT: f32 = VIEW_HEIGHT / 2.0;

    /// World scroll speed (pixels/s)
    pub const SCROLL_SPEED: f32 = 100.0;

    /// Bird physics
    pub const BIRD_GRAVITY: f32 = 10.0;
    pub const BIRD_HOVER_GRAVITY_SCALE: f32 = 0.5;
    pub const BIRD_FLAP_FORCE: f32 = 200.0;
    pub const BIRD_COLLISION_RADIUS: f32 = 12.0;
    /// Flaps are ignored once the bird is at or above this height
    pub const BIRD_CEILING: f32 = HALF_VIEW_HEIGHT;
    /// Cosmetic tilt: degrees of rotation per unit of vertical velocity
    pub const BIRD_ROTATION_SMOOTHING: f32 = 0.2;
    pub const BIRD_ROTATION_MIN_DEGREES: f32 = -30.0;
    pub const BIRD_ROTATION_MAX_DEGREES: f32 = 10.0;
    pub const BIRD_SIZE: Vec2 = Vec2::new(34.0, 24.0);

    /// Obstacles (pipes)
    pub const OBSTACLE_PAIR_COUNT: usize = 2;
    pub const OBSTACLE_SIZE: Vec2 = Vec2::new(64.0, 384.0);
    pub const OBSTACLE_COLLISION_SIZE: Vec2 = Vec2::new(64.0, 384.0);
    /// Random vertical offset of a pair's gap centre, +/- this value
    pub const OBSTACLE_Y_RANGE: f32 = VIEW_HEIGHT * 0.2;
    /// Vertical gap between the top and bottom obstacle
    pub const OBSTACLE_GAP: f32 = VIEW_HEIGHT * 0.22;
    /// Horizontal distance between neighbouring pairs
    pub const OBSTACLE_X_SPACING: f32 = VIEW_WIDTH;

    /// Floor collision box along the bottom of the view
    pub const FLOOR_COLLISION_SIZE: Vec2 = Vec2::new(VIEW_WIDTH, 32.0);
    pub const FLOOR_COLLISION_POSITION: Vec2 = Vec2::new(0.0, -HALF_VIEW_HEIGHT + 16.0);

    /// Clouds
    pub const CLOUD_COUNT: usize = 6;
    pub const CLOUD_SCROLL_SPEED: f32 = 8.0;
    /// Share of the world scroll applied to clouds while playing
    pub const CLOUD_SCROLL_MODIFIER: f32 = 0.1;
    pub const CLOUD_SPEED_SCALE_MIN: f32 = 0.5;
    pub const CLOUD_SPEED_SCALE_MAX: f32 = 1.5;
    /// Clouds recycle at X_MIN and respawn at X_MAX
    pub const CLOUD_X_MIN: f32 = -HALF_VIEW_WIDTH - 64.0;
    pub const CLOUD_X_MAX: f32 = HALF_VIEW_WIDTH + 64.0;
    pub const CLOUD_Y_MIN: f32 = 0.0;
    pub const CLOUD_Y_MAX: f32 = HALF_VIEW_HEIGHT - 32.0;
    pub const CLOUD_SCALE_MIN: f32 = 0.5;
    pub const CLOUD_SCALE_MAX: f32 = 1.0;

    /// Hills (parallax layer)
    pub const HILL_TILE_COUNT: usize = 2;
    pub const HILL_SIZE: Vec2 = Vec2::new(VIEW_WIDTH, 64.0);
    pub const HILL_SCROLL_MODIFIER: f32 = 0.2;

    /// Ground strip
    pub const GROUND_TILE_SIZE: Vec2 = Vec2::new(36.0, 32.0);
    pub const GROUND_TILE_COUNT: usize = (VIEW_WIDTH / 36.0) as usize + 2;
    pub const GROUND_RECYCLE_PADDING: f32 = 2.0;

    /// HUD layout
    pub const SCORE_POSITION: Vec2 = Vec2::new(0.0, HALF_VIEW_HEIGHT - 44.0);
    pub const SCORE_SCALE: f32 = 1.0;
    pub const HIGH_SCORE_LABEL_POSITION: Vec2 = Vec2::new(0.0, HALF_VIEW_HEIGHT - 20.0);
    pub const HIGH_SCORE_LABEL_SCALE: f32 = 0.5;
    pub const SCORE_COLOUR: [f32; 4] = [7.0 / 255.0, 54.0 / 255.0, 66.0 / 255.0, 1.0];
}
