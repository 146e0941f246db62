//! Tooling & Integration Layer
//!
//! Command-line access to the persisted fold state, for inspecting and pruning
//! what the keeper remembers outside of a running host.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
