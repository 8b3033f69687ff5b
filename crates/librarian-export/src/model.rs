use librarian_record::{Category, ComponentRecord};
use serde::{Deserialize, Serialize};

/// Snippet characters kept by [`ExportPayload::display_preview`] by default
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Appended to every truncated display snippet
pub const PREVIEW_MARKER: &str = "... (full code stored)";

/// Transferable representation of a finalized record.
///
/// Field names on the wire: `name`, `type`, `dependencies`, `description`,
/// `codeSnippet`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub dependencies: Vec<String>,
    pub description: String,
    pub code_snippet: String,
}

/// Human-facing copy of a payload with a shortened snippet.
///
/// Not a valid export: the snippet is lossy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub dependencies: Vec<String>,
    pub description: String,
    pub code_snippet: String,
}

impl ExportPayload {
    /// The record part of the payload
    #[must_use]
    pub fn record(&self) -> ComponentRecord {
        ComponentRecord {
            name: self.name.clone(),
            category: self.category,
            dependencies: self.dependencies.clone(),
            description: self.description.clone(),
        }
    }

    /// Build the display copy: the first `limit` characters of the snippet
    /// followed by [`PREVIEW_MARKER`].
    ///
    /// Counts characters, not bytes, so multi-byte text is never split.
    #[must_use]
    pub fn display_preview(&self, limit: usize) -> DisplayPayload {
        let mut code_snippet: String = self.code_snippet.chars().take(limit).collect();
        code_snippet.push_str(PREVIEW_MARKER);

        DisplayPayload {
            name: self.name.clone(),
            category: self.category,
            dependencies: self.dependencies.clone(),
            description: self.description.clone(),
            code_snippet,
        }
    }
}
