//! Logging and observability infrastructure for librarian
//!
//! Structured logging via `tracing`. Log output always goes to stderr so that
//! stdout stays reserved for records and payloads.

use std::io::IsTerminal;
use tracing::{Level, debug, info, span};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Check if colored output should be used.
///
/// Returns true only if:
/// - stderr is a terminal (TTY)
/// - NO_COLOR environment variable is not set
fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Initialize tracing subscriber for structured logging
///
/// Sets up tracing with either compact (default) or verbose format.
/// `RUST_LOG` takes precedence over the built-in filters.
///
/// # Arguments
/// * `verbose` - If true, enable debug output for librarian crates and span close events
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("librarian=debug,info")
            } else {
                EnvFilter::try_new("librarian=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if verbose {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_color())
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_line_number(false)
                    .with_file(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_color())
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_line_number(false)
                    .with_file(false)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}

/// Create a span covering one wizard operation
pub fn wizard_span(operation: &str, stage: &str) -> tracing::Span {
    span!(
        Level::DEBUG,
        "wizard_operation",
        operation = %operation,
        stage = %stage,
    )
}

/// Log an applied stage transition
pub fn log_transition(operation: &str, from: &str, to: &str) {
    debug!(
        operation = %operation,
        from = %from,
        to = %to,
        "Wizard transition applied"
    );
}

/// Log an operation the wizard ignored, with the reason
pub fn log_ignored(operation: &str, stage: &str, reason: &str) {
    debug!(
        operation = %operation,
        stage = %stage,
        reason = %reason,
        "Wizard operation ignored"
    );
}

/// Log a finalized record. Only sizes are logged, never snippet content.
pub fn log_finalized(name: &str, category: &str, dependency_count: usize, snippet_bytes: usize) {
    info!(
        name = %name,
        category = %category,
        dependency_count = dependency_count,
        snippet_bytes = snippet_bytes,
        "Component record finalized"
    );
}
