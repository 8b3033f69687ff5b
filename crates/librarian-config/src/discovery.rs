use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use librarian_utils::error::{ConfigError, LibrarianError};

use crate::cli_args::CliArgs;
use crate::model::{Config, ConfigSource, Defaults, ExportConfig, ExtractionConfig};

/// Directory holding the configuration file
pub const CONFIG_DIR: &str = ".librarian";

/// Configuration file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

const ATTRIBUTED_KEYS: [&str; 5] = [
    "verbose",
    "processing_delay_ms",
    "preview_chars",
    "framework_package",
    "export_format",
];

/// TOML configuration file structure
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfig {
    defaults: Option<Defaults>,
    extraction: Option<ExtractionConfig>,
    export: Option<ExportConfig>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Uses the current working directory for config file discovery when no
    /// explicit path is provided in `cli_args`.
    pub fn discover(cli_args: &CliArgs) -> Result<Self> {
        let start_dir = std::env::current_dir().map_err(|e| {
            LibrarianError::from(ConfigError::DiscoveryFailed {
                reason: format!("cannot read current directory: {e}"),
            })
        })?;
        Self::discover_from(&start_dir, cli_args)
    }

    /// Discover and load configuration starting from a specific directory
    ///
    /// This is the path-driven variant used by tests to avoid process-global state.
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self> {
        let mut source_attribution: HashMap<String, ConfigSource> = ATTRIBUTED_KEYS
            .iter()
            .map(|key| ((*key).to_string(), ConfigSource::Defaults))
            .collect();

        let mut defaults = Defaults::default();
        let mut extraction = ExtractionConfig::default();
        let mut export = ExportConfig::default();

        let config_path = match &cli_args.config_path {
            Some(explicit_path) => Some(explicit_path.clone()),
            None => Self::discover_config_file_from(start_dir)?,
        };

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?;

            let config_source = ConfigSource::ConfigFile(path.clone());

            if let Some(file_defaults) = file_config.defaults {
                if file_defaults.verbose.is_some() {
                    defaults.verbose = file_defaults.verbose;
                    source_attribution.insert("verbose".to_string(), config_source.clone());
                }
                if file_defaults.processing_delay_ms.is_some() {
                    defaults.processing_delay_ms = file_defaults.processing_delay_ms;
                    source_attribution
                        .insert("processing_delay_ms".to_string(), config_source.clone());
                }
                if file_defaults.preview_chars.is_some() {
                    defaults.preview_chars = file_defaults.preview_chars;
                    source_attribution.insert("preview_chars".to_string(), config_source.clone());
                }
            }

            if let Some(file_extraction) = file_config.extraction
                && file_extraction.framework_package.is_some()
            {
                extraction.framework_package = file_extraction.framework_package;
                source_attribution.insert("framework_package".to_string(), config_source.clone());
            }

            if let Some(file_export) = file_config.export
                && file_export.format.is_some()
            {
                export.format = file_export.format;
                source_attribution.insert("export_format".to_string(), config_source);
            }
        }

        // CLI overrides (highest priority)
        if let Some(verbose) = cli_args.verbose {
            defaults.verbose = Some(verbose);
            source_attribution.insert("verbose".to_string(), ConfigSource::Cli);
        }
        if let Some(delay) = cli_args.processing_delay_ms {
            defaults.processing_delay_ms = Some(delay);
            source_attribution.insert("processing_delay_ms".to_string(), ConfigSource::Cli);
        }
        if let Some(preview_chars) = cli_args.preview_chars {
            defaults.preview_chars = Some(preview_chars);
            source_attribution.insert("preview_chars".to_string(), ConfigSource::Cli);
        }
        if let Some(package) = &cli_args.framework_package {
            extraction.framework_package = Some(package.clone());
            source_attribution.insert("framework_package".to_string(), ConfigSource::Cli);
        }
        if let Some(format) = &cli_args.export_format {
            export.format = Some(format.clone());
            source_attribution.insert("export_format".to_string(), ConfigSource::Cli);
        }

        let config = Self {
            defaults,
            extraction,
            export,
            source_attribution,
        };

        config.validate()?;

        Ok(config)
    }

    /// Discover config file by searching upward from a given directory
    ///
    /// Walks up the directory tree looking for `.librarian/config.toml`, stopping
    /// at repository root markers (.git, .hg, .svn) or the filesystem root.
    pub fn discover_config_file_from(start_dir: &Path) -> Result<Option<PathBuf>> {
        let mut current_dir = start_dir;

        loop {
            let config_path = current_dir.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.is_file() {
                return Ok(Some(config_path));
            }

            if [".git", ".hg", ".svn"]
                .iter()
                .any(|marker| current_dir.join(marker).exists())
            {
                break;
            }

            match current_dir.parent() {
                Some(parent) => current_dir = parent,
                None => break,
            }
        }

        Ok(None)
    }

    /// Load configuration from TOML file
    fn load_config_file(path: &Path) -> Result<TomlConfig> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config: TomlConfig = toml::from_str(&content)
                    .map_err(|e| LibrarianError::from(ConfigError::InvalidFile(e.to_string())))
                    .with_context(|| {
                        format!("Failed to parse TOML config file: {}", path.display())
                    })?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LibrarianError::from(ConfigError::NotFound {
                    path: path.display().to_string(),
                })
                .into())
            }
            Err(e) => Err(anyhow::anyhow!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            )),
        }
    }
}
