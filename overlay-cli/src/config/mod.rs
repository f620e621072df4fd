//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use overlay_engine::{AlignFlag, EngineConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from `path` if given, otherwise defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Engine settings described by this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            align: self.processing.align,
            validate: self.processing.validate,
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Align flag applied to every page ("on" or anything else for off)
    pub align: AlignFlag,

    /// Report malformed chunk geometry
    pub validate: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            align: AlignFlag::On,
            validate: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Process input files in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.align, AlignFlag::On);
        assert!(config.processing.validate);
        assert_eq!(config.output.default_format, OutputFormat::Text);
        assert!(config.output.pretty_json);
        assert!(!config.performance.parallel);
        assert_eq!(config.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = CliConfig::from_toml(
            r#"
[processing]
align = "off"

[output]
default_format = "markdown"
"#,
        )
        .unwrap();

        assert_eq!(config.processing.align, AlignFlag::Off);
        assert!(config.processing.validate);
        assert_eq!(config.output.default_format, OutputFormat::Markdown);
        assert!(config.output.pretty_json);
        assert_eq!(config.performance, PerformanceConfig::default());
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&CliConfig::default()).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[performance]\nparallel = true\nworker_threads = 3\n").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();

        assert!(config.performance.parallel);
        assert_eq!(config.performance.worker_threads, 3);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndefault_format = \"pdf\"\n").unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }
}
