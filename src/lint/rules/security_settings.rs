//! Insecure connection setting detection.
//!
//! This rule scans every option value for a setting marker together with
//! its insecure token, e.g. `ansible_ssh_common_args` with
//! `-o StrictHostKeyChecking=no`.
//!
//! The marker is searched for in the option *value*, not in the option
//! name. A line such as `ansible_host_key_checking=false` in a `:vars`
//! section has the marker as its name and is therefore not reported; the
//! rule catches the setting only when it is written inline after a host.
//! This is a known false-negative gap.

use crate::config::{SecurityCheck, DEFAULT_SECURITY_CHECKS};
use crate::inventory::ParsedInventory;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

/// Detects insecure SSH settings from a marker/token table.
pub struct SecuritySettingsRule {
    checks: Vec<SecurityCheck>,
}

impl SecuritySettingsRule {
    /// Create the rule from a security-check table.
    pub fn new(checks: Vec<SecurityCheck>) -> Self {
        Self { checks }
    }
}

impl Default for SecuritySettingsRule {
    fn default() -> Self {
        Self::new(
            DEFAULT_SECURITY_CHECKS
                .iter()
                .map(|(marker, insecure)| SecurityCheck::new(*marker, *insecure))
                .collect(),
        )
    }
}

impl LintRule for SecuritySettingsRule {
    fn id(&self) -> RuleId {
        RuleId::new("security-settings")
    }

    fn name(&self) -> &str {
        "Security Settings"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, inventory: &ParsedInventory) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for section in inventory.sections() {
            for (_, value) in section.options() {
                let value = value.unwrap_or("");
                let lowered = value.to_lowercase();

                for check in &self.checks {
                    if value.contains(check.marker.as_str())
                        && lowered.contains(&check.insecure_value.to_lowercase())
                    {
                        diagnostics.push(LintDiagnostic::new(
                            self.id(),
                            self.default_severity(),
                            format!(
                                "Insecure setting detected: {}={}",
                                check.marker, check.insecure_value
                            ),
                        ));
                    }
                }
            }
        }

        diagnostics
    }
}
