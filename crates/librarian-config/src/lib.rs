//! Configuration management for librarian
//!
//! This crate provides hierarchical configuration with discovery and precedence:
//! CLI > file > defaults. Supports TOML configuration files with `[defaults]`,
//! `[extraction]`, and `[export]` sections, usually found at
//! `.librarian/config.toml`.

mod builder;
mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use cli_args::CliArgs;
pub use model::*;
pub use sources::EffectiveValue;
