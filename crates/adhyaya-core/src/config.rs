use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::verse::ChapterId;

/// Pre-translated strings shown by the reader. Displayed verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    pub proceed: String,
    pub index_title: String,
    pub chapter_prefix: String,
    pub open_chapter: String,
    pub back_to_cover: String,
    pub previous: String,
    pub next: String,
    pub index: String,
    pub home: String,
    pub verse_heading: String,
    pub meaning_heading: String,
    pub unavailable: String,
    pub empty_chapter: String,
    /// Suffix after the cover file name when the image is absent.
    pub cover_missing: String,
    pub move_cursor: String,
    pub quit: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            proceed: "पुढे जा".to_string(),
            index_title: "अनुक्रमणिका".to_string(),
            chapter_prefix: "अध्याय".to_string(),
            open_chapter: "वाचा".to_string(),
            back_to_cover: "मागे (मुखपृष्ठ)".to_string(),
            previous: "मागे".to_string(),
            next: "पुढे".to_string(),
            index: "अनुक्रमणिका".to_string(),
            home: "मुख्यपृष्ठ".to_string(),
            verse_heading: "संस्कृत श्लोक".to_string(),
            meaning_heading: "मराठीत अर्थ".to_string(),
            unavailable: "मजकूर उपलब्ध नाही".to_string(),
            empty_chapter: "या अध्यायात श्लोक नाहीत".to_string(),
            cover_missing: "सापडले नाही".to_string(),
            move_cursor: "निवडा".to_string(),
            quit: "बाहेर पडा".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub data_dir: PathBuf,
    /// Chapter file name; `{n}` is replaced by the chapter number.
    pub file_pattern: String,
    pub chapters: Vec<ChapterId>,
    pub cover_image: PathBuf,
    pub verse_column: String,
    pub meaning_column: String,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "श्लोक आणि अर्थ".to_string(),
            data_dir: PathBuf::from("."),
            file_pattern: "adhyaya_{n}.csv".to_string(),
            chapters: (1..=4).collect(),
            cover_image: PathBuf::from("cover.jpg"),
            verse_column: "Shloka".to_string(),
            meaning_column: "Meaning".to_string(),
            labels: Labels::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::info!("no config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| anyhow!("invalid config {}: {}", config_path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.file_pattern.contains("{n}") {
            bail!("file_pattern `{}` must contain {{n}}", self.file_pattern);
        }
        let mut seen = HashSet::new();
        for &chapter in &self.chapters {
            if chapter == 0 {
                bail!("chapter numbers start at 1");
            }
            if !seen.insert(chapter) {
                bail!("chapter {} listed twice", chapter);
            }
        }
        Ok(())
    }

    /// Cover image path, resolved against the data directory when relative.
    pub fn cover_path(&self) -> PathBuf {
        self.data_dir.join(&self.cover_image)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("adhyaya").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_offer_four_chapters() {
        let config = Config::default();
        assert_eq!(config.chapters, vec![1, 2, 3, 4]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"chapters": [1, 2, 3, 4, 5, 6], "labels": {"next": "Next"}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.chapters.len(), 6);
        assert_eq!(config.labels.next, "Next");
        assert_eq!(config.labels.previous, Labels::default().previous);
        assert_eq!(config.file_pattern, "adhyaya_{n}.csv");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = Config::default();
        config.title = "Gita".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_duplicate_and_zero_chapters() {
        let mut config = Config::default();
        config.chapters = vec![1, 1];
        assert!(config.validate().is_err());
        config.chapters = vec![0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_pattern_without_placeholder() {
        let mut config = Config::default();
        config.file_pattern = "chapter.csv".to_string();
        assert!(config.validate().is_err());
    }
}
