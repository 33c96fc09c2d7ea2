//! Host name and inline connection variable validation.
//!
//! This rule checks every host in a host-listing section: the host name
//! must look like a hostname token or an IP literal, and the inline
//! variables after it are scanned for a suspicious `ansible_host` and for
//! plaintext passwords.

use crate::inventory::{
    extract_variable, is_host_token, is_valid_hostname, is_valid_ip, ParsedInventory,
};
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

/// Inline variable that overrides the connection address.
const ANSIBLE_HOST: &str = "ansible_host";

/// Inline password variables and what to say about them.
///
/// Each tuple contains (trigger, complaint).
const PASSWORD_VARIABLES: &[(&str, &str)] = &[
    (
        "ansible_ssh_pass=",
        "uses password authentication (consider SSH keys)",
    ),
    (
        "ansible_become_pass=",
        "has become password in inventory (consider vault)",
    ),
];

/// Validates host names and their inline variables.
pub struct HostDefinitionsRule;

impl HostDefinitionsRule {
    fn check_host(&self, host: &str, inline: &str, diagnostics: &mut Vec<LintDiagnostic>) {
        if !is_host_token(host) && !is_valid_ip(host) {
            diagnostics.push(LintDiagnostic::new(
                self.id(),
                self.default_severity(),
                format!("Host '{}' has unusual format", host),
            ));
        }

        if inline.contains("ansible_host=") {
            if let Some(address) = extract_variable(inline, ANSIBLE_HOST) {
                if !is_valid_ip(address) && !is_valid_hostname(address) {
                    diagnostics.push(LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "ansible_host '{}' for host '{}' looks invalid",
                            address, host
                        ),
                    ));
                }
            }
        }

        for (trigger, complaint) in PASSWORD_VARIABLES {
            if inline.contains(trigger) {
                diagnostics.push(LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Host '{}' {}", host, complaint),
                ));
            }
        }
    }
}

impl LintRule for HostDefinitionsRule {
    fn id(&self) -> RuleId {
        RuleId::new("host-definitions")
    }

    fn name(&self) -> &str {
        "Host Definitions"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, inventory: &ParsedInventory) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for section in inventory.sections().filter(|s| !s.is_vars()) {
            for (host, inline) in section.options() {
                self.check_host(host, inline.unwrap_or(""), &mut diagnostics);
            }
        }

        diagnostics
    }
}
