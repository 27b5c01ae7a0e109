//! Command-line interface for catalog-lint.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, LintArgs, RulesArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
