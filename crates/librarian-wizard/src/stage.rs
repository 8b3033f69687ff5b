use serde::Serialize;
use std::fmt;
use strum::{Display, EnumString};

/// Wizard stage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// Waiting for a snippet
    #[default]
    Input,
    /// Draft extracted and open for edits
    Review,
    /// Record frozen, payload available
    Finalized,
}

impl Stage {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Review => "review",
            Self::Finalized => "finalized",
        }
    }

    /// One-based position in the workflow
    #[must_use]
    pub const fn step(&self) -> u8 {
        match self {
            Self::Input => 1,
            Self::Review => 2,
            Self::Finalized => 3,
        }
    }
}

/// Result of a wizard operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed as requested
    Applied,
    /// Nothing changed
    Ignored(IgnoreReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why an operation left the wizard untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Submitted snippet was empty or whitespace only
    BlankSnippet,
    /// Operation is only valid in `expected`
    WrongStage { expected: Stage, actual: Stage },
    /// Category edit named a value outside the closed set
    InvalidCategory,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankSnippet => write!(f, "snippet is blank"),
            Self::WrongStage { expected, actual } => {
                write!(f, "only valid in {expected} stage (currently {actual})")
            }
            Self::InvalidCategory => write!(f, "category is not in the allowed set"),
        }
    }
}
