//! Sensitive variable value validation.
//!
//! This rule inspects variables in `:vars` sections whose names mark them
//! as passwords, flagging short values and well-known default values.

use crate::config::{
    DEFAULT_INSECURE_DEFAULTS, DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_SENSITIVE_VARIABLES,
};
use crate::inventory::ParsedInventory;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

/// Validates the values of password-like variables.
pub struct VariableValuesRule {
    sensitive_variables: Vec<String>,
    insecure_defaults: Vec<String>,
    min_length: usize,
}

impl VariableValuesRule {
    /// Create the rule from its tables.
    pub fn new(
        sensitive_variables: Vec<String>,
        insecure_defaults: Vec<String>,
        min_length: usize,
    ) -> Self {
        Self {
            sensitive_variables,
            insecure_defaults,
            min_length,
        }
    }

    fn is_sensitive(&self, name: &str) -> bool {
        self.sensitive_variables
            .iter()
            .any(|fragment| name.contains(fragment.as_str()))
    }
}

impl Default for VariableValuesRule {
    fn default() -> Self {
        Self::new(
            DEFAULT_SENSITIVE_VARIABLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            DEFAULT_INSECURE_DEFAULTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            DEFAULT_MIN_PASSWORD_LENGTH,
        )
    }
}

impl LintRule for VariableValuesRule {
    fn id(&self) -> RuleId {
        RuleId::new("variable-values")
    }

    fn name(&self) -> &str {
        "Variable Values"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, inventory: &ParsedInventory) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for section in inventory.sections().filter(|s| s.is_vars()) {
            for (name, value) in section.options() {
                if !self.is_sensitive(name) {
                    continue;
                }
                // Absent and empty values are not inspected
                let Some(value) = value.filter(|v| !v.is_empty()) else {
                    continue;
                };

                if value.chars().count() < self.min_length {
                    diagnostics.push(LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!("Variable '{}' has weak password", name),
                    ));
                }

                if self.insecure_defaults.iter().any(|d| d == value) {
                    diagnostics.push(LintDiagnostic::new(
                        self.id(),
                        Severity::Error,
                        format!("Variable '{}' has insecure default value", name),
                    ));
                }
            }
        }

        diagnostics
    }
}
