use std::fmt;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Library-level error type with rich context and user-friendly reporting.
///
/// `LibrarianError` covers the ambient failures around the analysis core:
/// configuration loading, reading snippets, serializing payloads and the
/// CLI-level checks layered on top of the wizard. The wizard and extractor
/// themselves never fail; rejected operations are reported as outcomes.
///
/// # Exit Code Mapping
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Configuration errors and rejected field edits |
/// | 3 | Export requested before the record was finalized |
/// | 66 | Snippet could not be read or was blank |
/// | 1 | Other errors |
///
/// # Example
///
/// ```rust
/// use librarian_utils::error::LibrarianError;
/// use librarian_utils::exit_codes::ExitCode;
///
/// let err = LibrarianError::EmptySnippet { origin: "stdin".to_string() };
/// assert_eq!(err.to_exit_code(), ExitCode::NO_INPUT);
/// assert!(err.display_for_user().contains("Suggestions:"));
/// ```
///
/// Library code returns `LibrarianError` and does NOT call `std::process::exit()`.
#[derive(Error, Debug)]
pub enum LibrarianError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read snippet from {origin}: {reason}")]
    InputUnavailable { origin: String, reason: String },

    #[error("Snippet from {origin} is empty")]
    EmptySnippet { origin: String },

    #[error("Rejected edit of {field}: {value}")]
    InvalidEdit {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Record is not finalized (wizard is at {stage})")]
    NotFinalized { stage: String },

    #[error("Payload serialization failed: {reason}")]
    Serialization { reason: String },
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Wizard,
    FileSystem,
    Serialization,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Wizard => write!(f, "Wizard"),
            Self::FileSystem => write!(f, "File System"),
            Self::Serialization => write!(f, "Serialization"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },

    #[error("Configuration discovery failed: {reason}")]
    DiscoveryFailed { reason: String },

    #[error("Configuration validation failed: {error_count} errors")]
    ValidationFailed {
        errors: Vec<String>,
        error_count: usize,
    },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => {
                format!("Configuration file not found: {path}")
            }
            Self::DiscoveryFailed { reason } => {
                format!("Failed to discover configuration: {reason}")
            }
            Self::ValidationFailed { errors, .. } => {
                format!(
                    "Configuration validation failed with {} errors: {}",
                    errors.len(),
                    errors.join(", ")
                )
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with optional [defaults], [extraction] and [export] sections."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' configuration option has specific format requirements."
            )),
            Self::NotFound { .. } => Some(
                "An explicit --config path must point at an existing file.".to_string(),
            ),
            Self::DiscoveryFailed { .. } => Some(
                "librarian searches upward from the current directory for .librarian/config.toml."
                    .to_string(),
            ),
            Self::ValidationFailed { .. } => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax of the configuration file".to_string(),
                "Run 'librarian config' to see the effective configuration".to_string(),
            ],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "export_format" => vec!["Use format = \"pretty\" or format = \"canonical\"".to_string()],
                "preview_chars" => vec!["Use a positive preview_chars value, e.g. 100".to_string()],
                "framework_package" => {
                    vec!["Set framework_package to the UI framework's npm name, e.g. \"react\"".to_string()]
                }
                _ => vec![format!("Review the value configured for '{key}'")],
            },
            Self::NotFound { path } => vec![
                format!("Create the file at {path} or drop the --config flag"),
                "Let librarian discover .librarian/config.toml automatically".to_string(),
            ],
            Self::DiscoveryFailed { .. } => vec![
                "Run librarian from a readable working directory".to_string(),
                "Pass an explicit --config path".to_string(),
            ],
            Self::ValidationFailed { .. } => vec![
                "Fix the listed configuration values and re-run".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

impl UserFriendlyError for LibrarianError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(config_err) => config_err.user_message(),
            Self::Io(io_err) => format!("File system operation failed: {io_err}"),
            Self::InputUnavailable { origin, reason } => {
                format!("Could not read the component snippet from {origin}: {reason}")
            }
            Self::EmptySnippet { origin } => {
                format!("The snippet from {origin} is empty, there is nothing to analyze")
            }
            Self::InvalidEdit { field, value, .. } => {
                format!("'{value}' is not an accepted value for {field}")
            }
            Self::NotFinalized { stage } => {
                format!("The record has not been finalized yet (current stage: {stage})")
            }
            Self::Serialization { reason } => {
                format!("Failed to serialize the export payload: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(config_err) => config_err.context(),
            Self::Io(_) => {
                Some("This usually indicates a permissions issue or a missing file.".to_string())
            }
            Self::InputUnavailable { .. } | Self::EmptySnippet { .. } => Some(
                "librarian reads the snippet from the given file, or from stdin when no file is given."
                    .to_string(),
            ),
            Self::InvalidEdit { field, allowed, .. } if !allowed.is_empty() => Some(format!(
                "Accepted values for {field}: {}.",
                allowed.join(", ")
            )),
            Self::InvalidEdit { .. } => None,
            Self::NotFinalized { .. } => Some(
                "A payload only exists after the reviewed record is confirmed.".to_string(),
            ),
            Self::Serialization { .. } => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(config_err) => config_err.suggestions(),
            Self::Io(_) => vec![
                "Check file permissions in the current directory".to_string(),
                "Verify the path exists".to_string(),
            ],
            Self::InputUnavailable { .. } => vec![
                "Check that the snippet file exists and is valid UTF-8".to_string(),
                "Pipe the snippet through stdin instead".to_string(),
            ],
            Self::EmptySnippet { .. } => {
                vec!["Paste a component's source before analyzing".to_string()]
            }
            Self::InvalidEdit { .. } => vec!["Pick one of the listed values".to_string()],
            Self::NotFinalized { .. } => {
                vec!["Run 'confirm' in the session before exporting".to_string()]
            }
            Self::Serialization { .. } => {
                vec!["Report this as a bug together with the snippet".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::FileSystem,
            Self::InputUnavailable { .. } | Self::EmptySnippet { .. } => ErrorCategory::Input,
            Self::InvalidEdit { .. } | Self::NotFinalized { .. } => ErrorCategory::Wizard,
            Self::Serialization { .. } => ErrorCategory::Serialization,
        }
    }
}

impl LibrarianError {
    /// Get a user-friendly error message with context and actionable suggestions.
    ///
    /// ```text
    /// Error: <user message>
    ///
    /// Context: <context if available>
    ///
    /// Suggestions:
    ///   • <suggestion 1>
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = format!("Error: {}\n", self.user_message());

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the appropriate CLI exit code.
    ///
    /// This is the single source of truth for CLI exit codes.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::InvalidEdit { .. } => ExitCode::CLI_ARGS,
            Self::InputUnavailable { .. } | Self::EmptySnippet { .. } => ExitCode::NO_INPUT,
            Self::NotFinalized { .. } => ExitCode::NOT_FINALIZED,
            Self::Io(_) | Self::Serialization { .. } => ExitCode::INTERNAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_maps_to_cli_args() {
        let err = LibrarianError::Config(ConfigError::InvalidValue {
            key: "export_format".to_string(),
            value: "yaml".to_string(),
        });
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("canonical"))
        );
    }

    #[test]
    fn test_invalid_category_edit_lists_choices() {
        let err = LibrarianError::InvalidEdit {
            field: "category".to_string(),
            value: "Widget".to_string(),
            allowed: vec!["Atom".to_string(), "Molecule".to_string(), "Utility".to_string()],
        };
        let context = err.context().unwrap();
        assert!(context.contains("Molecule"));
        assert!(context.contains("Utility"));
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
    }

    #[test]
    fn test_display_for_user_layout() {
        let err = LibrarianError::NotFinalized {
            stage: "review".to_string(),
        };
        let message = err.display_for_user();
        assert!(message.starts_with("Error: The record has not been finalized"));
        assert!(message.contains("\nContext: "));
        assert!(message.contains("  • Run 'confirm'"));
        assert_eq!(err.to_exit_code(), ExitCode::NOT_FINALIZED);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LibrarianError = io.into();
        assert_eq!(err.category(), ErrorCategory::FileSystem);
        assert_eq!(err.to_exit_code(), ExitCode::INTERNAL);
    }
}
