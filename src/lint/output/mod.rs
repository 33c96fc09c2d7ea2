//! Lint output formatters.
//!
//! This module provides formatters for writing a [`ValidationResult`]
//! report.

pub mod human;

use crate::lint::ValidationResult;
use std::io::Write;

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format a validation result to the given writer.
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()>;
}

pub use human::{HumanFormatter, ERRORS_BANNER, SUCCESS_BANNER, WARNINGS_BANNER};
