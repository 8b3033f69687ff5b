//! One-shot command implementations

use anyhow::Result;
use std::path::Path;

use librarian_config::{Config, ExportFormat};
use librarian_export::ExportPayload;
use librarian_extraction::{Extractor, ExtractorOptions};
use librarian_record::{Category, RecordField};
use librarian_utils::canonicalization::emit_pretty;
use librarian_utils::error::LibrarianError;
use librarian_wizard::{IgnoreReason, Outcome, WizardController};
use strum::VariantNames;

use super::input::load_snippet;

/// How a payload is rendered for output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PayloadView {
    Pretty,
    Canonical,
    Preview,
}

impl From<ExportFormat> for PayloadView {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Pretty => Self::Pretty,
            ExportFormat::Canonical => Self::Canonical,
        }
    }
}

/// Extractor configured from the effective config
pub(crate) fn extractor_for(config: &Config) -> Extractor {
    Extractor::new(ExtractorOptions {
        framework_package: config.framework_package().to_string(),
    })
}

pub(crate) fn serialization_error(err: &anyhow::Error) -> LibrarianError {
    LibrarianError::Serialization {
        reason: format!("{err:#}"),
    }
}

pub(crate) fn render_payload(
    payload: &ExportPayload,
    view: PayloadView,
    preview_chars: usize,
) -> Result<String, LibrarianError> {
    let rendered = match view {
        PayloadView::Pretty => payload.to_pretty_json(),
        PayloadView::Canonical => payload.to_canonical_json(),
        PayloadView::Preview => payload.display_preview(preview_chars).to_pretty_json(),
    };
    rendered.map_err(|e| serialization_error(&e))
}

pub(crate) fn invalid_category(value: &str) -> LibrarianError {
    LibrarianError::InvalidEdit {
        field: RecordField::Category.to_string(),
        value: value.to_string(),
        allowed: Category::VARIANTS.iter().map(ToString::to_string).collect(),
    }
}

/// Execute `analyze`: print the extracted record
pub(crate) fn execute_analyze_command(file: Option<&Path>, config: &Config) -> Result<()> {
    let snippet = load_snippet(file)?;
    let record = extractor_for(config).analyze(&snippet.text);
    tracing::debug!(
        origin = %snippet.origin,
        name = %record.name,
        category = %record.category,
        "Snippet analyzed"
    );

    let json = emit_pretty(&record).map_err(|e| serialization_error(&e))?;
    println!("{json}");
    Ok(())
}

/// Field replacements passed to `create`
#[derive(Debug, Default)]
pub(crate) struct FieldOverrides {
    pub name: Option<String>,
    pub category: Option<String>,
    pub dependencies: Option<String>,
    pub description: Option<String>,
}

impl FieldOverrides {
    fn edits(&self) -> Vec<(RecordField, &str)> {
        [
            (RecordField::Name, self.name.as_deref()),
            (RecordField::Category, self.category.as_deref()),
            (RecordField::Dependencies, self.dependencies.as_deref()),
            (RecordField::Description, self.description.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

/// Execute `create`: submit, apply overrides, confirm, print the payload
pub(crate) fn execute_create_command(
    file: Option<&Path>,
    overrides: &FieldOverrides,
    view: PayloadView,
    config: &Config,
) -> Result<()> {
    let snippet = load_snippet(file)?;
    let mut wizard = WizardController::with_extractor(extractor_for(config));

    if let Outcome::Ignored(_) = wizard.submit(&snippet.text) {
        return Err(LibrarianError::EmptySnippet {
            origin: snippet.origin,
        }
        .into());
    }

    for (field, value) in overrides.edits() {
        if let Outcome::Ignored(IgnoreReason::InvalidCategory) = wizard.edit_field(field, value) {
            return Err(invalid_category(value).into());
        }
    }

    wizard.confirm();
    let payload = wizard
        .export_payload()
        .ok_or_else(|| LibrarianError::NotFinalized {
            stage: wizard.stage().to_string(),
        })?;

    println!("{}", render_payload(payload, view, config.preview_chars())?);
    Ok(())
}

/// Execute `config`: print effective values with their sources
pub(crate) fn execute_config_command(config: &Config) -> Result<()> {
    println!("Effective configuration:");
    for (key, entry) in config.effective_config() {
        println!("  {key} = {} ({})", entry.value, entry.source);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use librarian_record::ComponentRecord;

    fn payload() -> ExportPayload {
        librarian_export::format(&ComponentRecord::default(), &"x".repeat(150))
    }

    #[test]
    fn test_overrides_keep_field_order() {
        let overrides = FieldOverrides {
            description: Some("Text".to_string()),
            name: Some("Card".to_string()),
            ..FieldOverrides::default()
        };
        assert_eq!(
            overrides.edits(),
            vec![(RecordField::Name, "Card"), (RecordField::Description, "Text")]
        );
    }

    #[test]
    fn test_render_views() {
        let payload = payload();
        let pretty = render_payload(&payload, PayloadView::Pretty, 100).unwrap();
        assert!(pretty.contains("\"codeSnippet\""));

        let canonical = render_payload(&payload, PayloadView::Canonical, 100).unwrap();
        assert!(canonical.starts_with("{\"codeSnippet\""));
        assert!(!canonical.contains('\n'));

        let preview = render_payload(&payload, PayloadView::Preview, 10).unwrap();
        assert!(preview.contains("xxxxxxxxxx... (full code stored)"));
    }

    #[test]
    fn test_invalid_category_lists_allowed_values() {
        match invalid_category("Widget") {
            LibrarianError::InvalidEdit { field, allowed, .. } => {
                assert_eq!(field, "category");
                assert_eq!(allowed.len(), 6);
                assert!(allowed.contains(&"Utility".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extractor_uses_configured_framework() {
        let config = Config::builder().framework_package("preact").build().unwrap();
        let record = extractor_for(&config).analyze("import { h } from 'preact';");
        assert!(record.dependencies.is_empty());
    }
}
