//! Component record model shared by extraction, editing and export
//!
//! This crate owns the record schema, the closed category set, the fallback
//! sentinels and the normalization rules, so that the extractor and manual
//! edits apply exactly the same defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, VariantNames};

/// Name used when no component name could be resolved
pub const DEFAULT_NAME: &str = "UntitledComponent";

/// Description used when no documentation comment could be resolved
pub const DEFAULT_DESCRIPTION: &str = "No description extracted.";

/// Separator used when rendering a dependency list for editing
pub const DEPENDENCY_SEPARATOR: &str = ", ";

/// Design-system category of a component.
///
/// The set is closed: values are parsed by exact, case-sensitive name and
/// serialize to that same name (e.g. `"Molecule"`).
///
/// ```rust
/// use librarian_record::Category;
/// use strum::VariantNames;
///
/// assert_eq!(Category::default(), Category::Atom);
/// assert_eq!("Organism".parse::<Category>().unwrap(), Category::Organism);
/// assert_eq!(Category::VARIANTS.len(), 6);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    VariantNames,
)]
pub enum Category {
    /// Smallest building block (buttons, inputs, labels)
    #[default]
    Atom,
    /// Small composition of atoms (cards, modals, navigation)
    Molecule,
    /// Page-level section (pages, layouts, dashboards)
    Organism,
    /// Page skeleton without content
    Template,
    /// Non-visual logic (providers, contexts)
    Logic,
    /// Helpers that render nothing themselves
    Utility,
}

impl Category {
    /// Returns the canonical name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Atom => "Atom",
            Self::Molecule => "Molecule",
            Self::Organism => "Organism",
            Self::Template => "Template",
            Self::Logic => "Logic",
            Self::Utility => "Utility",
        }
    }
}

/// Membership test against the closed category set (exact name match).
#[must_use]
pub fn is_valid_category(value: &str) -> bool {
    Category::from_str(value).is_ok()
}

/// Split a free-text dependency field into an ordered list.
///
/// Tokens are split on commas and trimmed; empty tokens are dropped. Order is
/// preserved and duplicates are kept: only extractor output is deduplicated.
#[must_use]
pub fn normalize_dependencies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// The metadata record describing one component.
///
/// This is the shape produced by the extractor and frozen at finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Component identifier, never empty once finalized
    pub name: String,
    /// Design-system category
    pub category: Category,
    /// Root package names in first-seen order
    pub dependencies: Vec<String>,
    /// Prose description
    pub description: String,
}

impl Default for ComponentRecord {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            category: Category::default(),
            dependencies: Vec::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl ComponentRecord {
    /// Render this record into its editable form.
    #[must_use]
    pub fn to_draft(&self) -> DraftRecord {
        DraftRecord {
            name: self.name.clone(),
            category: self.category,
            dependencies: self.dependencies.join(DEPENDENCY_SEPARATOR),
            description: self.description.clone(),
        }
    }
}

/// Editable form of a record, as shown during review.
///
/// Dependencies are held as the raw comma-separated text the user edits;
/// they are only split into a list by [`DraftRecord::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub name: String,
    pub category: Category,
    pub dependencies: String,
    pub description: String,
}

impl Default for DraftRecord {
    fn default() -> Self {
        ComponentRecord::default().to_draft()
    }
}

impl DraftRecord {
    /// Apply a single field edit.
    ///
    /// # Errors
    /// Returns [`RecordEditError::InvalidCategory`] when a category edit names a
    /// value outside the closed set; the draft is left untouched in that case.
    pub fn apply_edit(&mut self, field: RecordField, value: &str) -> Result<(), RecordEditError> {
        match field {
            RecordField::Name => self.name = value.to_string(),
            RecordField::Category => {
                self.category =
                    Category::from_str(value).map_err(|_| RecordEditError::InvalidCategory {
                        value: value.to_string(),
                    })?;
            }
            RecordField::Dependencies => self.dependencies = value.to_string(),
            RecordField::Description => self.description = value.to_string(),
        }
        Ok(())
    }

    /// Freeze the draft into a record.
    ///
    /// Dependencies are normalized; a blank name or description falls back to
    /// its sentinel.
    #[must_use]
    pub fn finalize(&self) -> ComponentRecord {
        ComponentRecord {
            name: or_default(&self.name, DEFAULT_NAME),
            category: self.category,
            dependencies: normalize_dependencies(&self.dependencies),
            description: or_default(&self.description, DEFAULT_DESCRIPTION),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Fields that can be edited during review.
///
/// Parses from snake_case names; `type` is accepted as an alias of `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum RecordField {
    Name,
    #[strum(to_string = "category", serialize = "type")]
    Category,
    Dependencies,
    Description,
}

/// Errors raised when an edit cannot be applied to a draft
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordEditError {
    /// The value is not one of the category names
    #[error("'{value}' is not a valid category")]
    InvalidCategory { value: String },
}
