use librarian_utils::error::LibrarianError;
use std::io::Read;
use std::path::Path;

/// A snippet together with a label for where it came from
#[derive(Debug)]
pub(crate) struct LoadedSnippet {
    pub origin: String,
    pub text: String,
}

/// Read a snippet from `file`, or from stdin when `file` is absent or `-`.
///
/// Blank snippets are rejected here so one-shot commands fail fast.
pub(crate) fn load_snippet(file: Option<&Path>) -> Result<LoadedSnippet, LibrarianError> {
    let (origin, text) = match file {
        Some(path) if path != Path::new("-") => {
            let origin = path.display().to_string();
            let text = std::fs::read_to_string(path).map_err(|e| {
                LibrarianError::InputUnavailable {
                    origin: origin.clone(),
                    reason: e.to_string(),
                }
            })?;
            (origin, text)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| LibrarianError::InputUnavailable {
                    origin: "stdin".to_string(),
                    reason: e.to_string(),
                })?;
            ("stdin".to_string(), text)
        }
    };

    if text.trim().is_empty() {
        return Err(LibrarianError::EmptySnippet { origin });
    }
    Ok(LoadedSnippet { origin, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Card.jsx");
        fs::write(&path, "const Card = () => null;").unwrap();

        let loaded = load_snippet(Some(&path)).unwrap();
        assert_eq!(loaded.text, "const Card = () => null;");
        assert!(loaded.origin.ends_with("Card.jsx"));
    }

    #[test]
    fn test_missing_file_is_input_unavailable() {
        let temp = TempDir::new().unwrap();
        let err = load_snippet(Some(&temp.path().join("missing.jsx"))).unwrap_err();
        assert!(matches!(err, LibrarianError::InputUnavailable { .. }));
    }

    #[test]
    fn test_blank_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blank.jsx");
        fs::write(&path, " \n\t\n").unwrap();
        let err = load_snippet(Some(&path)).unwrap_err();
        assert!(matches!(err, LibrarianError::EmptySnippet { .. }));
    }
}
