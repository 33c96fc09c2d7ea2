//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! a single finding produced while validating an inventory.

use super::rule::{RuleId, Severity};

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
        }
    }

    /// Create an error diagnostic.
    pub fn error(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Warning, message)
    }
}

impl std::fmt::Display for LintDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.rule_id, self.message)
    }
}
