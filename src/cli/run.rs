//! CLI entry point and dispatch logic
//!
//! `run()` parses arguments, discovers configuration, initializes logging,
//! creates the tokio runtime and dispatches to command handlers. It handles
//! all error output itself.

use anyhow::Result;
use clap::Parser;

use librarian_config::{CliArgs, Config};
use librarian_utils::error::LibrarianError;
use librarian_utils::exit_codes::ExitCode;
use librarian_utils::logging::init_tracing;
use librarian_wizard::{SimulatedLatency, WizardController};

use super::args::{Cli, Commands};
use super::commands::{
    FieldOverrides, PayloadView, execute_analyze_command, execute_config_command,
    execute_create_command, extractor_for,
};
use super::session::Session;

/// Main CLI execution function.
///
/// Returns `Err(ExitCode)` after printing the error report; main.rs only maps
/// that to the process exit status.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        verbose: cli.verbose.then_some(true),
        processing_delay_ms: cli.delay_ms,
        preview_chars: cli.preview_chars,
        framework_package: cli.framework.clone(),
        export_format: cli.format.clone(),
    };

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => return Err(report_failure(&err, "config")),
    };

    // A subscriber may already be installed when embedded; keep going without ours.
    let _ = init_tracing(config.verbose());

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("✗ Failed to create async runtime: {e}");
            return Err(ExitCode::INTERNAL);
        }
    };

    let operation = match &cli.command {
        Commands::Analyze { .. } => "analyze",
        Commands::Create { .. } => "create",
        Commands::Session => "session",
        Commands::Config => "config",
    };

    let result = rt.block_on(async {
        match cli.command {
            Commands::Analyze { file } => execute_analyze_command(file.as_deref(), &config),
            Commands::Create {
                file,
                name,
                category,
                dependencies,
                description,
                canonical,
                preview,
            } => {
                let overrides = FieldOverrides {
                    name,
                    category,
                    dependencies,
                    description,
                };
                let view = if preview {
                    PayloadView::Preview
                } else if canonical {
                    PayloadView::Canonical
                } else {
                    PayloadView::from(config.export_format())
                };
                execute_create_command(file.as_deref(), &overrides, view, &config)
            }
            Commands::Session => execute_session_command(&config).await,
            Commands::Config => execute_config_command(&config),
        }
    });

    match result {
        Ok(()) => Ok(()),
        Err(error) => Err(report_failure(&error, operation)),
    }
}

async fn execute_session_command(config: &Config) -> Result<()> {
    let hook = SimulatedLatency::new(config.processing_delay());
    let wizard = WizardController::with_extractor(extractor_for(config));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut session = Session::new(
        wizard,
        &hook,
        stdin.lock(),
        stdout.lock(),
        PayloadView::from(config.export_format()),
        config.preview_chars(),
    );
    session.run().await?;
    Ok(())
}

/// Print an error report and pick the exit code
fn report_failure(error: &anyhow::Error, operation: &str) -> ExitCode {
    if let Some(librarian_error) = error.downcast_ref::<LibrarianError>() {
        eprintln!("{}", librarian_error.display_for_user());
        tracing::debug!(operation, "Command failed");
        return librarian_error.to_exit_code();
    }

    eprintln!("✗ Unexpected error during {operation}: {error:#}");
    eprintln!("\n  General troubleshooting:");
    eprintln!("    - Run with --verbose for more detailed output");
    eprintln!("    - Run 'librarian config' to check the effective configuration");
    ExitCode::INTERNAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_librarian_errors_keep_their_exit_code() {
        let err = anyhow::Error::new(LibrarianError::EmptySnippet {
            origin: "stdin".to_string(),
        });
        assert_eq!(report_failure(&err, "create"), ExitCode::NO_INPUT);

        let err = anyhow::Error::new(crate::cli::commands::invalid_category("Widget"));
        assert_eq!(report_failure(&err, "create"), ExitCode::CLI_ARGS);
    }

    #[test]
    fn test_context_wrapped_config_error_is_found() {
        let err = anyhow::Error::new(LibrarianError::Config(
            librarian_utils::error::ConfigError::InvalidFile("bad".to_string()),
        ))
        .context("Failed to load config file");
        assert_eq!(report_failure(&err, "config"), ExitCode::CLI_ARGS);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(report_failure(&err, "analyze"), ExitCode::INTERNAL);
    }
}
