//! TOML configuration for packlint.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::Severity;

/// Top-level packlint configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Rule configurations.
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to deduce module names from file paths.
    #[serde(default = "default_true")]
    pub deduce_path: bool,

    /// Top-level directory for composing module names from file paths.
    #[serde(default)]
    pub top_level_dir: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: Vec::new(),
            deduce_path: true,
            top_level_dir: None,
        }
    }
}

/// Per-rule configuration sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesConfig {
    /// Underscore-privacy rule (DEP401).
    #[serde(rename = "private-import", default)]
    pub private_import: PrivateImportConfig,

    /// Regex denylist rule (DEP501).
    #[serde(rename = "import-denylist", default)]
    pub denylist: DenylistConfig,
}

/// Configuration for the underscore-privacy rule.
#[derive(Debug, Clone, Deserialize)]
pub struct PrivateImportConfig {
    /// Whether the rule runs (default: true).
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Severity override.
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl Default for PrivateImportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }
}

/// Configuration for the regex denylist rule.
///
/// The rule is active iff `patterns` is non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DenylistConfig {
    /// Regular expressions for disallowed import paths.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Optional glob restricting which files the rule applies to.
    #[serde(default)]
    pub files: Option<String>,

    /// Severity override.
    #[serde(default)]
    pub severity: Option<Severity>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

impl Config {
    /// Load from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Validate config consistency.
    ///
    /// Malformed denylist patterns and globs fail here, at configuration
    /// time, never during per-file analysis.
    ///
    /// # Errors
    ///
    /// Returns error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pattern in &self.rules.denylist.patterns {
            if let Err(e) = regex::Regex::new(pattern) {
                return Err(ConfigError::Validation(format!(
                    "rules.import-denylist: bad pattern '{pattern}': {e}"
                )));
            }
        }

        if let Some(files) = &self.rules.denylist.files {
            if let Err(e) = glob::Pattern::new(files) {
                return Err(ConfigError::Validation(format!(
                    "rules.import-denylist: bad file glob '{files}': {e}"
                )));
            }
        }

        for pattern in &self.analyzer.exclude {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(ConfigError::Validation(format!(
                    "analyzer.exclude: bad glob '{pattern}': {e}"
                )));
            }
        }

        Ok(())
    }
}
