//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by array index)
//! - No rendering dependencies; platform and audio only through traits

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{bird_hits_world, circle_intersects_rect};
pub use entity::Entity;
pub use obstacles::place_pair;
pub use state::{Bird, Cloud, CloudKind, GamePhase, GameState, ObstaclePair, ScoreDisplay};
pub use tick::{Input, TickContext, tick};
