//! Input manager for loading resume records from disk

use crate::error::{Result, ResumeScoreError};
use crate::input::file_detector::FileType;
use crate::model::ResumeRecord;
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, ResumeRecord>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn load_resume(&mut self, path: &Path) -> Result<ResumeRecord> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached) = self.cache.get(&path_str) {
            info!("Using cached resume for: {}", path.display());
            return Ok(cached.clone());
        }

        if !path.exists() {
            return Err(ResumeScoreError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        if file_type == FileType::Unknown {
            return Err(ResumeScoreError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        info!("Reading resume: {}", path.display());
        let content = fs::read_to_string(path).await?;
        let record = parse_resume(&content, &file_type)?;

        self.cache.insert(path_str, record.clone());

        Ok(record)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeScoreError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Parse resume content of a known file type.
pub fn parse_resume(content: &str, file_type: &FileType) -> Result<ResumeRecord> {
    match file_type {
        FileType::Json => Ok(serde_json::from_str(content)?),
        FileType::Toml => Ok(toml::from_str(content)?),
        FileType::Unknown => Err(ResumeScoreError::UnsupportedFormat(
            "Resume must be JSON or TOML".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Skills;

    #[test]
    fn test_parse_json() {
        let record = parse_resume(
            r#"{"personal": {"name": "Jane"}, "skills": "Rust, Go"}"#,
            &FileType::Json,
        )
        .unwrap();
        assert_eq!(record.personal.name.as_deref(), Some("Jane"));
        assert_eq!(record.skills, Skills::Text("Rust, Go".to_string()));
    }

    #[test]
    fn test_parse_toml() {
        let record = parse_resume(
            "summary = \"Hi\"\n\n[skills]\ntechnical = [\"Rust\"]\ntools = [\"Git\"]\n",
            &FileType::Toml,
        )
        .unwrap();
        assert_eq!(record.summary.as_deref(), Some("Hi"));
        assert_eq!(record.skills.to_list(), vec!["Rust", "Git"]);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = parse_resume("{not json", &FileType::Json).unwrap_err();
        assert!(matches!(err, ResumeScoreError::Parse(_)));
    }
}
