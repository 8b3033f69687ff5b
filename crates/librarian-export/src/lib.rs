//! Export formatting for finalized component records
//!
//! A finalized record plus its full snippet becomes an [`ExportPayload`]. The
//! payload has two serializations: pretty JSON for copy consumers and JCS
//! canonical JSON for anything that hashes or diffs payloads. A truncated
//! [`DisplayPayload`] exists for human-facing screens only.

mod emit;
mod model;

pub use model::{DEFAULT_PREVIEW_CHARS, DisplayPayload, ExportPayload, PREVIEW_MARKER};

use librarian_record::ComponentRecord;

/// Combine a finalized record with its snippet.
///
/// Pure: the snippet is carried in full and unmodified.
#[must_use]
pub fn format(record: &ComponentRecord, snippet: &str) -> ExportPayload {
    ExportPayload {
        name: record.name.clone(),
        category: record.category,
        dependencies: record.dependencies.clone(),
        description: record.description.clone(),
        code_snippet: snippet.to_string(),
    }
}
