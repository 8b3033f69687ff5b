//! Heuristic metadata extraction from component snippets
//!
//! Turns a pasted component source into a [`ComponentRecord`] guess without a
//! real parser. Patterns are deliberately cheap: each field is resolved by a
//! fixed-precedence pattern search and falls back to the record sentinels when
//! nothing matches.
//!
//! # Resolution order
//!
//! 1. Name: `export default function Name`, else `const Name = (`/`props`/`{`
//! 2. Dependencies: module strings of `import ... from '...'` statements
//! 3. Description: the first `/** ... */` documentation comment
//! 4. Category: keyword match on the resolved name
//!
//! Extraction is total: any input, including malformed or adversarial text,
//! yields a record.

use librarian_record::{Category, ComponentRecord, DEFAULT_DESCRIPTION, DEFAULT_NAME};
use regex::Regex;
use std::sync::LazyLock;

/// Package name of the UI framework, excluded from dependencies by default
pub const DEFAULT_FRAMEWORK_PACKAGE: &str = "react";

static DEFAULT_EXPORT_FN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+default\s+function\s+([A-Za-z0-9_]+)").unwrap());

static CONST_COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const\s+([A-Za-z0-9_]+)\s*=\s*(?:\(|props|\{)").unwrap()
});

// The clause between `import` and `from` may span lines (multi-line named imports)
// but never crosses a statement end or a string literal.
static IMPORT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+[^;'"]*?\s+from\s+['"]([^'"]*)['"]"#).unwrap()
});

// Extra asterisks before the closing `*/` (`**/` style) belong to the delimiter.
static DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\**\*/").unwrap());

// A JSDoc-shaped tag after prose: `@param x`, `@returns`. `@mui/material` is not one.
static INLINE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s@[A-Za-z]+(?:\s|$)").unwrap());

/// Keyword groups checked in order; the first group with a hit decides.
const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["card", "modal", "nav"], Category::Molecule),
    (&["page", "layout", "dashboard"], Category::Organism),
    (&["provider", "context"], Category::Logic),
];

/// Tunables for extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Import source treated as the framework itself and never listed
    pub framework_package: String,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            framework_package: DEFAULT_FRAMEWORK_PACKAGE.to_string(),
        }
    }
}

/// Snippet analyzer carrying its extraction options
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractorOptions,
}

impl Extractor {
    #[must_use]
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Analyze a snippet into a best-effort record.
    ///
    /// Pure and deterministic; unresolved fields take the record sentinels.
    #[must_use]
    pub fn analyze(&self, snippet: &str) -> ComponentRecord {
        let name = resolve_name(snippet);
        let category = name.as_deref().map_or(Category::Atom, infer_category);

        ComponentRecord {
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            category,
            dependencies: resolve_dependencies(snippet, &self.options.framework_package),
            description: resolve_description(snippet)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

/// Analyze a snippet with the default options.
///
/// ```rust
/// use librarian_extraction::analyze;
/// use librarian_record::Category;
///
/// let record = analyze("import Foo from 'lib-a'; const Card = (props) => {}");
/// assert_eq!(record.name, "Card");
/// assert_eq!(record.category, Category::Molecule);
/// assert_eq!(record.dependencies, vec!["lib-a"]);
/// ```
#[must_use]
pub fn analyze(snippet: &str) -> ComponentRecord {
    Extractor::default().analyze(snippet)
}

/// Resolve the component name, trying the default export before const bindings
#[must_use]
pub fn resolve_name(snippet: &str) -> Option<String> {
    DEFAULT_EXPORT_FN
        .captures(snippet)
        .or_else(|| CONST_COMPONENT.captures(snippet))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Collect root package names of imports, first-seen order, without duplicates.
///
/// Relative imports (leading `.`), empty module strings and the framework
/// package itself are skipped; `lib/sub/path` is reduced to `lib`. A module
/// with nothing before its first `/` has no root and is skipped too.
#[must_use]
pub fn resolve_dependencies(snippet: &str, framework_package: &str) -> Vec<String> {
    let mut dependencies: Vec<String> = Vec::new();

    for caps in IMPORT_FROM.captures_iter(snippet) {
        let Some(module) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if module.is_empty() || module.starts_with('.') || module == framework_package {
            continue;
        }
        let root = root_package(module);
        if root.is_empty() {
            continue;
        }
        if !dependencies.iter().any(|known| known == root) {
            dependencies.push(root.to_string());
        }
    }

    dependencies
}

/// Text of a module specifier up to its first `/`
#[must_use]
pub fn root_package(module: &str) -> &str {
    module.split('/').next().unwrap_or(module)
}

/// Extract prose from the first documentation comment.
///
/// Returns `None` when there is no `/** */` block or when nothing but tags
/// and blank lines remain after cleanup.
#[must_use]
pub fn resolve_description(snippet: &str) -> Option<String> {
    let body = DOC_COMMENT.captures(snippet)?.get(1)?.as_str();

    let prose: Vec<&str> = body
        .lines()
        .map(|line| line.trim_start().trim_start_matches('*').trim())
        .filter(|line| !line.starts_with('@'))
        .map(strip_tags)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if prose.is_empty() {
        None
    } else {
        Some(prose.join(" "))
    }
}

/// Cut a prose line at its first trailing annotation tag
fn strip_tags(line: &str) -> &str {
    match INLINE_TAG.find(line) {
        Some(tag) => &line[..tag.start()],
        None => line,
    }
}

/// Infer the category from a component name.
///
/// Case-insensitive substring match; Molecule keywords win over Organism
/// keywords, which win over Logic keywords.
#[must_use]
pub fn infer_category(name: &str) -> Category {
    let lowered = name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(Category::Atom, |(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_example() {
        let record = analyze(
            "import Foo from 'lib-a'; import Bar from 'lib-a/sub'; const Card = (props) => {}",
        );
        assert_eq!(record.name, "Card");
        assert_eq!(record.category, Category::Molecule);
        assert_eq!(record.dependencies, vec!["lib-a"]);
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_navbar_example() {
        let record = analyze(
            "/** Renders a navigation bar. @param x */ export default function NavBar() {}",
        );
        assert_eq!(record.name, "NavBar");
        assert_eq!(record.category, Category::Molecule);
        assert_eq!(record.description, "Renders a navigation bar.");
        assert!(record.dependencies.is_empty());
    }

    #[test]
    fn test_no_matches_yields_defaults() {
        let record = analyze("let x = 1;\nfunction helper() { return x; }");
        assert_eq!(record, ComponentRecord::default());
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        assert_eq!(analyze(""), ComponentRecord::default());
        assert_eq!(analyze("   \n\t"), ComponentRecord::default());
    }

    #[test]
    fn test_default_export_wins_over_const() {
        let snippet = r#"
const Helper = (props) => null;
export default function ProfilePage() {
  return <Helper />;
}
"#;
        assert_eq!(resolve_name(snippet).as_deref(), Some("ProfilePage"));
        assert_eq!(analyze(snippet).category, Category::Organism);
    }

    #[test]
    fn test_const_binding_variants() {
        assert_eq!(
            resolve_name("const Badge = ({ label }) => <span />").as_deref(),
            Some("Badge")
        );
        assert_eq!(
            resolve_name("const Badge=props => <span />").as_deref(),
            Some("Badge")
        );
        assert_eq!(
            resolve_name("const styles = { color: 'red' }").as_deref(),
            Some("styles")
        );
        assert_eq!(resolve_name("const LIMIT = 10;"), None);
    }

    #[test]
    fn test_dependencies_skip_relative_and_framework() {
        let snippet = r#"
import React, { useState } from 'react';
import { motion } from "framer-motion";
import Button from './Button';
import theme from '../theme';
import clsx from 'clsx';
import { debounce } from 'lodash/debounce';
import get from 'lodash/get';
"#;
        assert_eq!(
            resolve_dependencies(snippet, DEFAULT_FRAMEWORK_PACKAGE),
            vec!["framer-motion", "clsx", "lodash"]
        );
    }

    #[test]
    fn test_framework_subpath_is_kept() {
        // Only the exact framework package is excluded.
        let snippet = "import { createRoot } from 'react-dom/client';";
        assert_eq!(
            resolve_dependencies(snippet, DEFAULT_FRAMEWORK_PACKAGE),
            vec!["react-dom"]
        );
    }

    #[test]
    fn test_multiline_named_import() {
        let snippet = "import {\n  Code,\n  Copy,\n} from 'lucide-react';\n";
        assert_eq!(
            resolve_dependencies(snippet, DEFAULT_FRAMEWORK_PACKAGE),
            vec!["lucide-react"]
        );
    }

    #[test]
    fn test_side_effect_import_is_not_a_dependency() {
        let snippet = "import './styles.css';\nimport clsx from 'clsx';";
        assert_eq!(
            resolve_dependencies(snippet, DEFAULT_FRAMEWORK_PACKAGE),
            vec!["clsx"]
        );
    }

    #[test]
    fn test_scoped_package_reduces_to_scope() {
        let snippet = "import { Box } from '@mui/material';";
        assert_eq!(
            resolve_dependencies(snippet, DEFAULT_FRAMEWORK_PACKAGE),
            vec!["@mui"]
        );
    }

    #[test]
    fn test_custom_framework_package() {
        let extractor = Extractor::new(ExtractorOptions {
            framework_package: "preact".to_string(),
        });
        let record = extractor.analyze("import { h } from 'preact';\nimport React from 'react';");
        assert_eq!(record.dependencies, vec!["react"]);
    }

    #[test]
    fn test_empty_module_string_is_skipped() {
        assert!(resolve_dependencies("import x from '';", "react").is_empty());
    }

    #[test]
    fn test_rootless_module_is_skipped() {
        assert!(resolve_dependencies("import x from '/abs/path';", "react").is_empty());
    }

    #[test]
    fn test_multiline_doc_comment() {
        let snippet = r#"
/**
 * Shows a dismissible alert.
 * Supports **bold** text.
 *
 * @param {string} message
 * @returns {JSX.Element}
 */
export default function Alert({ message }) {}
"#;
        assert_eq!(
            resolve_description(snippet).as_deref(),
            Some("Shows a dismissible alert. Supports **bold** text.")
        );
    }

    #[test]
    fn test_plain_block_comment_is_not_documentation() {
        assert_eq!(resolve_description("/* internal note */ const A = () => {}"), None);
    }

    #[test]
    fn test_tag_only_comment_falls_back() {
        let record = analyze("/**\n * @deprecated\n */\nconst Old = () => null;");
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_email_is_not_a_tag() {
        assert_eq!(
            resolve_description("/** Contact ui@example.com for help */").as_deref(),
            Some("Contact ui@example.com for help")
        );
    }

    #[test]
    fn test_lines_starting_with_at_are_dropped() {
        let snippet = "/**\n * Shows a thing.\n * @_internal\n * @1x scale\n */";
        assert_eq!(resolve_description(snippet).as_deref(), Some("Shows a thing."));
    }

    #[test]
    fn test_scoped_package_in_prose_is_kept() {
        assert_eq!(
            resolve_description("/** Wraps @mui/material Box with padding. */").as_deref(),
            Some("Wraps @mui/material Box with padding.")
        );
    }

    #[test]
    fn test_inline_tag_cuts_line() {
        assert_eq!(
            resolve_description("/** Renders a navigation bar. @param x */").as_deref(),
            Some("Renders a navigation bar.")
        );
        assert_eq!(
            resolve_description("/** Old button. @deprecated */").as_deref(),
            Some("Old button.")
        );
    }

    #[test]
    fn test_double_asterisk_close() {
        assert_eq!(
            resolve_description("/** Renders a button. **/ const Button = () => {}").as_deref(),
            Some("Renders a button.")
        );
        assert_eq!(
            resolve_description("/**\n * Multi line.\n **/").as_deref(),
            Some("Multi line.")
        );
    }

    #[test]
    fn test_first_doc_comment_wins() {
        let snippet = "/** First. */\n/** Second. */";
        assert_eq!(resolve_description(snippet).as_deref(), Some("First."));
    }

    #[test]
    fn test_unterminated_comment_is_ignored() {
        assert_eq!(resolve_description("/** never closed"), None);
    }

    #[test]
    fn test_category_precedence() {
        assert_eq!(infer_category("ProviderCard"), Category::Molecule);
        assert_eq!(infer_category("DashboardModal"), Category::Molecule);
        assert_eq!(infer_category("PageContext"), Category::Organism);
        assert_eq!(infer_category("ThemeProvider"), Category::Logic);
        assert_eq!(infer_category("AuthContext"), Category::Logic);
        assert_eq!(infer_category("Button"), Category::Atom);
    }

    #[test]
    fn test_category_is_case_insensitive() {
        assert_eq!(infer_category("SIDENAV"), Category::Molecule);
        assert_eq!(infer_category("mainlayout"), Category::Organism);
    }

    #[test]
    fn test_unresolved_name_is_atom() {
        let record = analyze("import { motion } from 'framer-motion';");
        assert_eq!(record.name, DEFAULT_NAME);
        assert_eq!(record.category, Category::Atom);
        assert_eq!(record.dependencies, vec!["framer-motion"]);
    }

    #[test]
    fn test_root_package() {
        assert_eq!(root_package("lib-a/sub/deeper"), "lib-a");
        assert_eq!(root_package("clsx"), "clsx");
        assert_eq!(root_package("/absolute"), "");
    }
}
