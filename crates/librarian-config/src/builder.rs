use std::collections::HashMap;

use librarian_utils::error::LibrarianError;

use crate::model::{
    Config, ConfigSource, Defaults, ExportConfig, ExportFormat, ExtractionConfig,
};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use librarian_config::{Config, ExportFormat};
    ///
    /// let config = Config::builder()
    ///     .framework_package("preact")
    ///     .export_format(ExportFormat::Canonical)
    ///     .build()
    ///     .expect("valid config");
    /// assert_eq!(config.framework_package(), "preact");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for configuring librarian without files or CLI flags.
///
/// All values set via the builder are attributed to
/// [`ConfigSource::Programmatic`]; everything else keeps its default.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    verbose: Option<bool>,
    processing_delay_ms: Option<u64>,
    preview_chars: Option<usize>,
    framework_package: Option<String>,
    export_format: Option<ExportFormat>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    #[must_use]
    pub fn processing_delay_ms(mut self, millis: u64) -> Self {
        self.processing_delay_ms = Some(millis);
        self
    }

    #[must_use]
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = Some(chars);
        self
    }

    #[must_use]
    pub fn framework_package(mut self, package: impl Into<String>) -> Self {
        self.framework_package = Some(package.into());
        self
    }

    #[must_use]
    pub fn export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = Some(format);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    /// Returns a configuration error when a value fails validation.
    pub fn build(self) -> Result<Config, LibrarianError> {
        let mut source_attribution = HashMap::new();
        let mut defaults = Defaults::default();
        let mut extraction = ExtractionConfig::default();
        let mut export = ExportConfig::default();

        let mut attribute = |key: &str| {
            source_attribution.insert(key.to_string(), ConfigSource::Programmatic);
        };

        if let Some(verbose) = self.verbose {
            defaults.verbose = Some(verbose);
            attribute("verbose");
        }
        if let Some(delay) = self.processing_delay_ms {
            defaults.processing_delay_ms = Some(delay);
            attribute("processing_delay_ms");
        }
        if let Some(chars) = self.preview_chars {
            defaults.preview_chars = Some(chars);
            attribute("preview_chars");
        }
        if let Some(package) = self.framework_package {
            extraction.framework_package = Some(package);
            attribute("framework_package");
        }
        if let Some(format) = self.export_format {
            export.format = Some(format.to_string());
            attribute("export_format");
        }

        let config = Config {
            defaults,
            extraction,
            export,
            source_attribution,
        };
        config.validate()?;
        Ok(config)
    }
}
