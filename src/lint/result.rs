//! Validation outcome.

use super::diagnostic::LintDiagnostic;
use super::rule::Severity;

/// Findings from one validation run, split by severity.
///
/// Each list keeps detection order. Findings are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<LintDiagnostic>,
    warnings: Vec<LintDiagnostic>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a result from diagnostics in detection order.
    pub fn from_diagnostics(diagnostics: impl IntoIterator<Item = LintDiagnostic>) -> Self {
        let mut result = Self::new();
        for diag in diagnostics {
            result.push(diag);
        }
        result
    }

    /// Append a diagnostic to the list matching its severity.
    pub fn push(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    /// Error findings in detection order.
    pub fn errors(&self) -> &[LintDiagnostic] {
        &self.errors
    }

    /// Warning findings in detection order.
    pub fn warnings(&self) -> &[LintDiagnostic] {
        &self.warnings
    }

    /// True when no errors were found.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when there are no findings at all.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Whether validation passes; strict mode also fails on warnings.
    pub fn passes(&self, strict: bool) -> bool {
        self.is_clean() && !(strict && !self.warnings.is_empty())
    }
}
