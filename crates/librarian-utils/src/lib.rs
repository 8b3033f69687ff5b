//! Foundation utilities for librarian: error types, exit codes, logging and
//! JSON emission shared by every crate in the workspace.

pub mod canonicalization;
pub mod error;
pub mod exit_codes;
pub mod logging;
