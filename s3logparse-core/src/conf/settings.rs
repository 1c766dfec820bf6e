use crate::conf::error::ConfigError;
use crate::input::DEFAULT_PATTERN;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional settings file. Every key has a default, so an empty file is valid.
///
/// ```toml
/// [report]
/// limit = 20
/// skipped_summary = true
///
/// [input]
/// pattern = "**/*.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub report: ReportSettings,
    pub input: InputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    /// Print at most this many entries.
    pub limit: Option<usize>,

    /// Print per-reason skipped line counts to stderr.
    pub skipped_summary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSettings {
    /// Glob used inside directory arguments.
    pub pattern: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let settings: Settings =
            toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.limit == Some(0) {
            return Err(ConfigError::Invalid {
                field: "report.limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.input.pattern.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "input.pattern",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
