//! Local key-value resume store
//!
//! One pretty-printed JSON file per key under a base directory. Scoring
//! never reads from here; callers load a record and pass it in.

use crate::error::{Result, ResumeScoreError};
use crate::model::ResumeRecord;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub struct ResumeStore {
    dir: PathBuf,
}

impl ResumeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save(&self, key: &str, record: &ResumeRecord) -> Result<PathBuf> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, serde_json::to_string_pretty(record)?)?;
        info!("Saved resume under key '{}' to {}", key, path.display());
        Ok(path)
    }

    /// `None` when nothing is stored under `key`.
    pub fn load(&self, key: &str) -> Result<Option<ResumeRecord>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            debug!("No stored resume for key '{}'", key);
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Returns whether anything was removed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)?;
        info!("Removed stored resume '{}'", key);
        Ok(true)
    }

    /// Stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ResumeScoreError::InvalidInput(format!(
                "Invalid storage key '{}': use letters, digits, '-' or '_'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}
