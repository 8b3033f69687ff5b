use anyhow::{Context, Result};
use serde::Serialize;

/// Emit a value as JCS-canonical JSON (RFC 8785).
///
/// This is the standard way to emit JSON for automated consumers of export
/// payloads. JCS ensures deterministic output regardless of field ordering in
/// the source struct; array order is preserved.
///
/// # Example
///
/// ```rust
/// use librarian_utils::canonicalization::emit_jcs;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct MyOutput {
///     name: String,
///     value: i32,
/// }
///
/// let output = MyOutput { name: "test".into(), value: 42 };
/// let json = emit_jcs(&output).expect("serialization should succeed");
/// assert_eq!(json, r#"{"name":"test","value":42}"#);
/// ```
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON using JCS")?;
    String::from_utf8(json_bytes).with_context(|| "JCS output contained invalid UTF-8")
}

/// Emit a value as two-space indented JSON in struct declaration order.
///
/// This is the human-readable counterpart of [`emit_jcs`]: stable for a given
/// type, but keys follow the declaration order instead of being sorted.
pub fn emit_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).with_context(|| "Failed to serialize value to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        zeta: &'static str,
        alpha: Vec<&'static str>,
    }

    #[test]
    fn test_jcs_sorts_keys_and_keeps_array_order() {
        let sample = Sample {
            zeta: "last",
            alpha: vec!["b", "a"],
        };
        let json = emit_jcs(&sample).unwrap();
        assert_eq!(json, r#"{"alpha":["b","a"],"zeta":"last"}"#);
    }

    #[test]
    fn test_pretty_keeps_declaration_order() {
        let sample = Sample {
            zeta: "last",
            alpha: vec![],
        };
        let json = emit_pretty(&sample).unwrap();
        assert!(json.find("zeta").unwrap() < json.find("alpha").unwrap());
        assert!(json.contains("\n  \"zeta\": \"last\""));
    }

    #[test]
    fn test_jcs_is_deterministic() {
        let sample = Sample {
            zeta: "z",
            alpha: vec!["x"],
        };
        assert_eq!(emit_jcs(&sample).unwrap(), emit_jcs(&sample).unwrap());
    }

    #[test]
    fn test_jcs_escapes_control_characters() {
        let json = emit_jcs(&"line1\nline2\t\"quoted\"").unwrap();
        assert_eq!(json, r#""line1\nline2\t\"quoted\"""#);
    }
}
