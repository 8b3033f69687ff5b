use librarian_utils::error::{ConfigError, LibrarianError};
use std::str::FromStr;
use strum::VariantNames;

use crate::model::{Config, ExportFormat};

/// Upper bound for the simulated processing delay (one minute)
const MAX_PROCESSING_DELAY_MS: u64 = 60_000;

impl Config {
    /// Validate configuration values.
    ///
    /// A single problem is reported as `InvalidValue`; several are collected
    /// into `ValidationFailed`.
    pub fn validate(&self) -> Result<(), LibrarianError> {
        let mut problems: Vec<(String, String)> = Vec::new();

        if let Some(preview_chars) = self.defaults.preview_chars
            && preview_chars == 0
        {
            problems.push((
                "preview_chars".to_string(),
                "must be greater than 0".to_string(),
            ));
        }

        if let Some(delay) = self.defaults.processing_delay_ms
            && delay > MAX_PROCESSING_DELAY_MS
        {
            problems.push((
                "processing_delay_ms".to_string(),
                format!("exceeds maximum limit of {MAX_PROCESSING_DELAY_MS} ms"),
            ));
        }

        if let Some(package) = &self.extraction.framework_package
            && package.trim().is_empty()
        {
            problems.push((
                "framework_package".to_string(),
                "must not be empty".to_string(),
            ));
        }

        if let Some(format) = &self.export.format
            && ExportFormat::from_str(format).is_err()
        {
            problems.push((
                "export_format".to_string(),
                format!(
                    "'{format}' is not one of: {}",
                    ExportFormat::VARIANTS.join(", ")
                ),
            ));
        }

        match problems.len() {
            0 => Ok(()),
            1 => {
                let (key, value) = problems.remove(0);
                Err(LibrarianError::Config(ConfigError::InvalidValue { key, value }))
            }
            error_count => Err(LibrarianError::Config(ConfigError::ValidationFailed {
                errors: problems
                    .into_iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect(),
                error_count,
            })),
        }
    }
}
