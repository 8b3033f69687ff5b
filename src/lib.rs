//! librarian - catalogue UI component snippets as structured metadata records
//!
//! A pasted component snippet goes through three stages:
//!
//! 1. **Input**: the raw snippet is submitted and analyzed heuristically
//! 2. **Review**: the extracted record (name, category, dependencies,
//!    description) is edited
//! 3. **Finalized**: the record is frozen and exported together with the full
//!    snippet
//!
//! librarian can be used as a CLI (`librarian analyze`, `create`, `session`)
//! or embedded as a library.
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use librarian::{Category, RecordField, Stage, WizardController};
//!
//! let mut wizard = WizardController::new();
//! wizard.submit("/** Top navigation. */ export default function NavBar() {}");
//! assert_eq!(wizard.state().record.category, Category::Molecule);
//!
//! wizard.edit_field(RecordField::Dependencies, "clsx, framer-motion");
//! wizard.confirm();
//! assert_eq!(wizard.stage(), Stage::Finalized);
//!
//! let json = wizard.export_payload().unwrap().to_pretty_json().unwrap();
//! assert!(json.contains("\"codeSnippet\""));
//! ```
//!
//! # JSON Contracts
//!
//! Payloads are emitted either as pretty JSON in field order or in JCS
//! (RFC 8785) canonical form. Use [`emit_jcs`] for your own canonical output.
//!
//! # Stable Public API
//!
//! - [`analyze`], [`Extractor`], [`ExtractorOptions`], [`infer_category`]
//! - [`ComponentRecord`], [`DraftRecord`], [`Category`], [`RecordField`]
//! - [`WizardController`], [`Stage`], [`Outcome`], [`IgnoreReason`], [`WizardState`]
//! - [`ExportPayload`], [`DisplayPayload`], [`format_payload`]
//! - [`Config`], [`ConfigBuilder`], [`LibrarianError`], [`ExitCode`]
//!
//! The `cli` module is hidden and not covered by semver guarantees.

pub use librarian_config::{CliArgs, Config, ConfigBuilder, ConfigSource, ExportFormat};
pub use librarian_export::{
    DEFAULT_PREVIEW_CHARS, DisplayPayload, ExportPayload, PREVIEW_MARKER,
    format as format_payload,
};
pub use librarian_extraction::{Extractor, ExtractorOptions, analyze, infer_category};
pub use librarian_record::{
    Category, ComponentRecord, DEFAULT_DESCRIPTION, DEFAULT_NAME, DraftRecord, RecordField,
    is_valid_category, normalize_dependencies,
};
pub use librarian_utils::canonicalization::emit_jcs;
pub use librarian_utils::error::{LibrarianError, UserFriendlyError};
pub use librarian_utils::exit_codes::ExitCode;
pub use librarian_wizard::{
    IgnoreReason, Immediate, Outcome, ProcessingHook, SimulatedLatency, Stage, WizardController,
    WizardState,
};

#[doc(hidden)]
pub mod cli;
