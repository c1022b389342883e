//! Platform abstraction layer
//!
//! Handles the differences between targets for:
//! - High score storage
//! - Asset lookup
//!
//! Logging goes through the `log` facade and is not part of the trait.

mod file;
mod memory;

pub use file::FilePlatform;
pub use memory::MemoryPlatform;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait Platform {
    /// Stored high score, 0 when nothing is stored or it cannot be read
    fn high_score(&self) -> u32;

    fn save_high_score(&mut self, score: u32) -> Result<(), PlatformError>;

    /// Full path of a named asset
    fn asset_path(&self, name: &str) -> PathBuf;
}
