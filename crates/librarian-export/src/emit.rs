use anyhow::Result;
use librarian_utils::canonicalization::{emit_jcs, emit_pretty};

use crate::model::{DisplayPayload, ExportPayload};

impl ExportPayload {
    /// Two-space indented JSON in field declaration order.
    ///
    /// This is the string handed to clipboard and copy consumers; it is stable
    /// for a given payload.
    ///
    /// # Errors
    /// Only fails if serialization itself fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        emit_pretty(self)
    }

    /// JCS (RFC 8785) canonical JSON: sorted keys, no insignificant whitespace.
    ///
    /// # Errors
    /// Only fails if serialization or canonicalization fails.
    pub fn to_canonical_json(&self) -> Result<String> {
        emit_jcs(self)
    }
}

impl DisplayPayload {
    /// Pretty JSON for terminal display.
    ///
    /// # Errors
    /// Only fails if serialization itself fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        emit_pretty(self)
    }
}
