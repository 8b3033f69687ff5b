//! CLI argument definitions and parsing structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// librarian - catalogue UI component snippets as structured records
#[derive(Parser)]
#[command(name = "librarian")]
#[command(about = "Extract, review and export metadata records for UI component snippets")]
#[command(long_about = r#"
librarian turns a pasted component snippet into a metadata record (name,
category, dependencies, description), lets you review and edit it, and exports
the finalized record together with the full snippet as JSON.

EXAMPLES:
  # Show what would be extracted from a file
  librarian analyze src/components/NavBar.jsx

  # Create a payload from stdin, overriding the category
  cat Card.tsx | librarian create --category Organism

  # Walk through the wizard interactively
  librarian session

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .librarian/config.toml
  Use --config to specify an explicit config file path
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Framework package excluded from dependencies (default: react)
    #[arg(long, global = true)]
    pub framework: Option<String>,

    /// Simulated analysis delay for interactive sessions, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Snippet characters shown by preview output (default: 100)
    #[arg(long, global = true)]
    pub preview_chars: Option<usize>,

    /// Payload format when no view flag is given: pretty or canonical
    #[arg(long, global = true)]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the record extracted from a snippet
    ///
    /// EXAMPLES:
    ///   librarian analyze Card.jsx
    ///   pbpaste | librarian analyze
    Analyze {
        /// Snippet file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Run the whole wizard non-interactively and print the export payload
    ///
    /// The snippet is analyzed, the given fields replace the extracted ones,
    /// and the confirmed record is printed.
    ///
    /// EXAMPLES:
    ///   librarian create Card.jsx --description "Product card"
    ///   librarian create Modal.tsx --dependencies "clsx, framer-motion" --canonical
    Create {
        /// Snippet file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Replace the extracted name
        #[arg(long)]
        name: Option<String>,

        /// Replace the inferred category (Atom, Molecule, Organism, Template, Logic, Utility)
        #[arg(long)]
        category: Option<String>,

        /// Replace the dependency list (comma separated)
        #[arg(long)]
        dependencies: Option<String>,

        /// Replace the extracted description
        #[arg(long)]
        description: Option<String>,

        /// Emit JCS canonical JSON instead of pretty JSON
        #[arg(long, conflicts_with = "preview")]
        canonical: bool,

        /// Emit the display preview with a shortened snippet
        #[arg(long)]
        preview: bool,
    },

    /// Interactive line-oriented wizard on stdin/stdout
    ///
    /// Type `help` inside the session for the command list.
    Session,

    /// Show the effective configuration and where each value came from
    Config,
}
