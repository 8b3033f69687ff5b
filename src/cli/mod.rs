//! Command-line interface for librarian
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions (clap)
//! - `run`: Main entry point and command dispatch
//! - `commands`: One-shot command implementations
//! - `input`: Snippet loading from files and stdin
//! - `session`: Line-oriented interactive wizard

pub mod args;
mod commands;
mod input;
mod run;
mod session;

pub use args::{Cli, Commands};
pub use run::run;
pub use session::Session;
