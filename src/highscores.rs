//! High score tracking
//!
//! One number survives process restarts. It is read once at startup and only
//! written when a finished run beats it.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// On-disk shape of the stored high score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

/// State that outlives a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistentState {
    pub high_score: u32,
}

impl PersistentState {
    /// Load from the platform, or start at 0 without one
    pub fn load(platform: Option<&dyn Platform>) -> Self {
        let high_score = platform.map(|p| p.high_score()).unwrap_or(0);
        Self { high_score }
    }

    /// Check if a finished run beats the stored score
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.high_score
    }

    /// Record a finished run's score
    ///
    /// Returns true when it was a new high score. Storage failures are logged;
    /// the in-memory value is updated regardless.
    pub fn submit(&mut self, score: u32, platform: Option<&mut (dyn Platform + '_)>) -> bool {
        if !self.qualifies(score) {
            return false;
        }

        log::info!("New high score: {} (was {})", score, self.high_score);
        self.high_score = score;
        if let Some(platform) = platform {
            if let Err(e) = platform.save_high_score(score) {
                log::error!("Failed to save high score: {}", e);
            }
        }
        true
    }

    /// Forget the stored high score
    pub fn clear(&mut self, platform: Option<&mut (dyn Platform + '_)>) {
        self.high_score = 0;
        if let Some(platform) = platform {
            if let Err(e) = platform.save_high_score(0) {
                log::error!("Failed to clear high score: {}", e);
            }
        }
        log::info!("High score cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryPlatform;

    #[test]
    fn test_load_without_platform() {
        assert_eq!(PersistentState::load(None).high_score, 0);
    }

    #[test]
    fn test_submit_only_saves_improvements() {
        let mut platform = MemoryPlatform::with_high_score(5);
        let mut persistent = PersistentState::load(Some(&platform));
        assert_eq!(persistent.high_score, 5);

        assert!(!persistent.submit(5, Some(&mut platform)));
        assert!(!persistent.submit(3, Some(&mut platform)));
        assert_eq!(platform.saves, 0);

        assert!(persistent.submit(9, Some(&mut platform)));
        assert_eq!(persistent.high_score, 9);
        assert_eq!(platform.high_score(), 9);
        assert_eq!(platform.saves, 1);
    }

    #[test]
    fn test_submit_without_platform() {
        let mut persistent = PersistentState::default();
        assert!(persistent.submit(2, None));
        assert_eq!(persistent.high_score, 2);
    }

    #[test]
    fn test_clear() {
        let mut platform = MemoryPlatform::with_high_score(40);
        let mut persistent = PersistentState::load(Some(&platform));
        persistent.clear(Some(&mut platform));
        assert_eq!(persistent.high_score, 0);
        assert_eq!(platform.high_score(), 0);
    }
}
