use super::{CorpusConfig, HighlightConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Application configuration, persisted as quill.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
}

impl AppConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("quill.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.corpus.context_bytes == 0 {
            errors.push("context_bytes must be at least 1".to_string());
        }

        if self.corpus.context_words == 0 {
            errors.push("context_words must be at least 1".to_string());
        }

        if self.corpus.max_hits_per_term == 0 {
            errors.push("max_hits_per_term must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = CorpusConfig::default();
        let pick = |value: usize, fallback: usize| if value == 0 { fallback } else { value };

        Self {
            highlight: self.highlight.clone(),
            corpus: CorpusConfig {
                context_bytes: pick(self.corpus.context_bytes, defaults.context_bytes),
                context_words: pick(self.corpus.context_words, defaults.context_words),
                max_hits_per_term: pick(
                    self.corpus.max_hits_per_term,
                    defaults.max_hits_per_term,
                ),
                shuffle: self.corpus.shuffle,
            },
        }
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
