//! Required group and empty group validation.
//!
//! This rule ensures the mandatory groups are declared and flags any
//! section that declares nothing.

use crate::config::DEFAULT_REQUIRED_GROUPS;
use crate::inventory::ParsedInventory;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

/// Validates that required groups exist and that no group is empty.
pub struct RequiredGroupsRule {
    required: Vec<String>,
}

impl RequiredGroupsRule {
    /// Create the rule with a list of mandatory section names.
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }
}

impl Default for RequiredGroupsRule {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_GROUPS.iter().map(|g| g.to_string()).collect())
    }
}

impl LintRule for RequiredGroupsRule {
    fn id(&self) -> RuleId {
        RuleId::new("required-groups")
    }

    fn name(&self) -> &str {
        "Required Groups"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, inventory: &ParsedInventory) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for group in &self.required {
            if !inventory.has_section(group) {
                diagnostics.push(LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Required group '{}' not found", group),
                ));
            }
        }

        for section in inventory.sections() {
            if section.is_empty() {
                diagnostics.push(LintDiagnostic::new(
                    self.id(),
                    Severity::Warning,
                    format!("Group '{}' is empty", section.name()),
                ));
            }
        }

        diagnostics
    }
}
