use std::path::PathBuf;

/// CLI overrides fed into configuration discovery.
///
/// `None` means the flag was not given and lower-precedence sources apply.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub verbose: Option<bool>,
    pub processing_delay_ms: Option<u64>,
    pub preview_chars: Option<usize>,
    pub framework_package: Option<String>,
    pub export_format: Option<String>,
}
