//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub nlp: NlpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

/// What happens when a single resume cannot be processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort the whole batch on the first failing resume
    #[default]
    FailFast,
    /// Record the failure against that resume and keep going
    Isolate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NlpConfig {
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default = "default_min_name_words")]
    pub min_name_words: usize,
    #[serde(default = "default_max_name_words")]
    pub max_name_words: usize,
    #[serde(default)]
    pub person_recognizer: PersonRecognizerKind,
}

/// Backend used to find person names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonRecognizerKind {
    /// Capitalization rules, no model download
    #[default]
    Heuristic,
    /// rust-bert token classification model (needs the `ner` feature)
    RustBert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    #[serde(default = "default_not_available")]
    pub not_available: String,
    #[serde(default = "default_color_output")]
    pub color_output: bool,
}

fn default_min_name_words() -> usize {
    2
}

fn default_max_name_words() -> usize {
    3
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("ranked_resumes.csv")
}

fn default_not_available() -> String {
    "N/A".to_string()
}

fn default_color_output() -> bool {
    true
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            extra_stopwords: Vec::new(),
            min_name_words: default_min_name_words(),
            max_name_words: default_max_name_words(),
            person_recognizer: PersonRecognizerKind::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            not_available: default_not_available(),
            color_output: default_color_output(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ResumeRankerError::Configuration(format!(
                        "Config file does not exist: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => Self::config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = Self::from_toml(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.nlp.min_name_words == 0 || self.nlp.min_name_words > self.nlp.max_name_words {
            return Err(ResumeRankerError::Configuration(format!(
                "Invalid name word bounds: min {} max {}",
                self.nlp.min_name_words, self.nlp.max_name_words
            )));
        }
        Ok(())
    }
}
