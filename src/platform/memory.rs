//! In-memory platform for tests and headless runs

use std::path::PathBuf;

use super::{Platform, PlatformError};

#[derive(Debug, Clone, Default)]
pub struct MemoryPlatform {
    high_score: u32,
    /// Number of successful saves
    pub saves: u32,
}

impl MemoryPlatform {
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }
}

impl Platform for MemoryPlatform {
    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PlatformError> {
        self.high_score = score;
        self.saves += 1;
        Ok(())
    }

    fn asset_path(&self, name: &str) -> PathBuf {
        PathBuf::from("assets").join(name)
    }
}
