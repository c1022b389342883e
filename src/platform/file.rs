//! Native platform backed by files on disk

use std::fs;
use std::path::{Path, PathBuf};

use super::{Platform, PlatformError};
use crate::highscores::HighScoreRecord;

const HIGH_SCORE_FILE: &str = "high_score.json";
const ASSET_DIR: &str = "assets";

/// Stores the high score as JSON in `data_dir`, reads assets from next to it
#[derive(Debug, Clone)]
pub struct FilePlatform {
    data_dir: PathBuf,
    asset_root: PathBuf,
}

impl FilePlatform {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let asset_root = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(ASSET_DIR);
        Self {
            data_dir,
            asset_root,
        }
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn high_score_path(&self) -> PathBuf {
        self.data_dir.join(HIGH_SCORE_FILE)
    }

    fn read_record(&self) -> Result<Option<HighScoreRecord>, PlatformError> {
        let path = self.high_score_path();
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}

impl Platform for FilePlatform {
    fn high_score(&self) -> u32 {
        match self.read_record() {
            Ok(Some(record)) => {
                log::info!("Loaded high score {}", record.high_score);
                record.high_score
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!(
                    "Could not read high score from {}: {}",
                    self.high_score_path().display(),
                    e
                );
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PlatformError> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string(&HighScoreRecord { high_score: score })?;
        fs::write(self.high_score_path(), json)?;
        log::info!("High score {} saved", score);
        Ok(())
    }

    fn asset_path(&self, name: &str) -> PathBuf {
        self.asset_root.join(name)
    }
}
