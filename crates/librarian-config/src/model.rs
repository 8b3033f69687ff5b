use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use strum::{Display, EnumString, VariantNames};

/// Simulated analysis latency for interactive sessions
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 600;

/// Snippet characters shown in human-facing previews
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Framework package excluded from extracted dependencies
pub const DEFAULT_FRAMEWORK_PACKAGE: &str = "react";

/// Payload serialization used by exports
pub const DEFAULT_EXPORT_FORMAT: &str = "pretty";

/// Source of a configuration value.
///
/// Precedence: CLI > config file > programmatic > built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value provided via CLI argument
    Cli,
    /// Value loaded from the given configuration file
    ConfigFile(PathBuf),
    /// Value set through [`ConfigBuilder`](crate::ConfigBuilder)
    Programmatic,
    /// Built-in default value
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::ConfigFile(path) => write!(f, "config file ({})", path.display()),
            Self::Programmatic => write!(f, "programmatic"),
            Self::Defaults => write!(f, "defaults"),
        }
    }
}

/// Effective configuration with per-key source attribution
#[derive(Debug, Clone)]
pub struct Config {
    pub defaults: Defaults,
    pub extraction: ExtractionConfig,
    pub export: ExportConfig,
    pub source_attribution: HashMap<String, ConfigSource>,
}

/// `[defaults]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    pub verbose: Option<bool>,
    pub processing_delay_ms: Option<u64>,
    pub preview_chars: Option<usize>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            verbose: Some(false),
            processing_delay_ms: Some(DEFAULT_PROCESSING_DELAY_MS),
            preview_chars: Some(DEFAULT_PREVIEW_CHARS),
        }
    }
}

/// `[extraction]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub framework_package: Option<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            framework_package: Some(DEFAULT_FRAMEWORK_PACKAGE.to_string()),
        }
    }
}

/// `[export]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// `pretty` or `canonical`
    pub format: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: Some(DEFAULT_EXPORT_FORMAT.to_string()),
        }
    }
}

/// Serialization used when printing a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Indented JSON in field order
    #[default]
    Pretty,
    /// JCS canonical JSON
    Canonical,
}

impl Config {
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.defaults.verbose.unwrap_or(false)
    }

    #[must_use]
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(
            self.defaults
                .processing_delay_ms
                .unwrap_or(DEFAULT_PROCESSING_DELAY_MS),
        )
    }

    #[must_use]
    pub fn preview_chars(&self) -> usize {
        self.defaults.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS)
    }

    #[must_use]
    pub fn framework_package(&self) -> &str {
        self.extraction
            .framework_package
            .as_deref()
            .unwrap_or(DEFAULT_FRAMEWORK_PACKAGE)
    }

    /// Configured export format; unknown values are rejected at validation,
    /// so this only falls back for configs built without validation.
    #[must_use]
    pub fn export_format(&self) -> ExportFormat {
        self.export
            .format
            .as_deref()
            .and_then(|format| ExportFormat::from_str(format).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.verbose, Some(false));
        assert_eq!(defaults.processing_delay_ms, Some(600));
        assert_eq!(defaults.preview_chars, Some(100));
        assert_eq!(
            ExtractionConfig::default().framework_package.as_deref(),
            Some("react")
        );
        assert_eq!(ExportConfig::default().format.as_deref(), Some("pretty"));
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("pretty".parse::<ExportFormat>(), Ok(ExportFormat::Pretty));
        assert_eq!(
            "canonical".parse::<ExportFormat>(),
            Ok(ExportFormat::Canonical)
        );
        assert!("Pretty".parse::<ExportFormat>().is_err());
        for name in ExportFormat::VARIANTS {
            assert_eq!(name.parse::<ExportFormat>().unwrap().to_string(), *name);
        }
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "CLI");
        assert_eq!(ConfigSource::Defaults.to_string(), "defaults");
        assert_eq!(
            ConfigSource::ConfigFile(PathBuf::from("a/config.toml")).to_string(),
            format!("config file ({})", PathBuf::from("a/config.toml").display())
        );
    }
}
