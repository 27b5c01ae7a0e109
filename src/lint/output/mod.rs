//! Lint output formatters.
//!
//! This module provides formatters for outputting lint findings
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::ValidationError;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format findings to the given writer.
    fn format<W: Write>(&self, findings: &[ValidationError], writer: &mut W)
        -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
