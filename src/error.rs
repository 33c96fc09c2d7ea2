//! Error types for invlint operations.
//!
//! This module defines [`InvlintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Inventory failures (missing, unreadable, unparsable) are typed so the
//!   validator can turn each into a single error finding
//! - Rules configuration failures stop the run before any check executes
//! - Lint findings are never errors; they are data on a
//!   [`ValidationResult`](crate::lint::ValidationResult)

use std::path::PathBuf;
use thiserror::Error;

use crate::inventory::ParseError;

/// Core error type for invlint operations.
#[derive(Debug, Error)]
pub enum InvlintError {
    /// Inventory file does not exist.
    #[error("Inventory file {} does not exist", path.display())]
    InventoryNotFound { path: PathBuf },

    /// Inventory path exists but could not be read as text.
    #[error("Inventory file {} could not be read: {source}", path.display())]
    InventoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Inventory file is not valid section/key-value text.
    #[error("Failed to parse inventory at {}: {source}", path.display())]
    InventoryParseError {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Rules configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the rules configuration file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Rules configuration parsed but holds unusable values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for invlint operations.
pub type Result<T> = std::result::Result<T, InvlintError>;
