//! Developer controls
//!
//! Collision overlay and simulation speed, plus clearing the stored high
//! score. Hosts map these to keys; the simulation never reads them.

use crate::highscores::PersistentState;
use crate::platform::Platform;

/// Fastest simulation multiplier the speed controls allow
pub const SIM_SPEED_MAX: f32 = 255.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugState {
    pub show_collision_debugger: bool,
    /// Multiplier on wall-clock time fed to the accumulator
    pub sim_speed: f32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_collision_debugger: false,
            sim_speed: 1.0,
        }
    }
}

impl DebugState {
    pub fn toggle_collision_debugger(&mut self) {
        self.show_collision_debugger = !self.show_collision_debugger;
        log::debug!("Collision debugger {}", self.show_collision_debugger);
    }

    /// Tenths below normal speed, whole steps above
    pub fn speed_up(&mut self) {
        let step = if self.sim_speed < 1.0 { 0.1 } else { 1.0 };
        self.set_sim_speed(self.sim_speed + step);
    }

    pub fn slow_down(&mut self) {
        let step = if self.sim_speed <= 1.0 { 0.1 } else { 1.0 };
        self.set_sim_speed(self.sim_speed - step);
    }

    pub fn set_sim_speed(&mut self, speed: f32) {
        // Snap to tenths so repeated steps land on exact values
        let speed = (speed * 10.0).round() / 10.0;
        self.sim_speed = speed.clamp(0.0, SIM_SPEED_MAX);
        log::debug!("Simulation speed {:.1}x", self.sim_speed);
    }

    pub fn clear_high_score(
        &self,
        persistent: &mut PersistentState,
        platform: Option<&mut (dyn Platform + '_)>,
    ) {
        persistent.clear(platform);
    }
}
