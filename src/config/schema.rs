//! Rules configuration schema.
//!
//! This module contains the struct definitions that map to the optional
//! `.invlint.yml` file. Every field falls back to the built-in tables
//! below, so an empty file is equivalent to no file.

use serde::{Deserialize, Serialize};

/// Groups every inventory must define.
pub const DEFAULT_REQUIRED_GROUPS: &[&str] = &["wordpress_servers"];

/// Variable name fragments that mark a value as a password.
pub const DEFAULT_SENSITIVE_VARIABLES: &[&str] = &[
    "mysql_root_password",
    "wordpress_db_password",
    "wp_admin_password",
];

/// Values that must never be used for a sensitive variable.
pub const DEFAULT_INSECURE_DEFAULTS: &[&str] = &["password", "admin", "123456"];

/// Shortest acceptable sensitive value, in characters.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Built-in security checks.
///
/// Each tuple contains (marker, insecure_value).
pub const DEFAULT_SECURITY_CHECKS: &[(&str, &str)] = &[
    ("ansible_host_key_checking", "false"),
    ("ansible_ssh_common_args", "-o stricthostkeychecking=no"),
];

/// Root configuration structure for .invlint.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvlintConfig {
    /// Section names that must be present
    pub required_groups: Vec<String>,

    /// Substrings of variable names whose values are checked as passwords
    pub sensitive_variables: Vec<String>,

    /// Exact values rejected for sensitive variables (case-sensitive)
    pub insecure_defaults: Vec<String>,

    /// Minimum sensitive value length before a weak-password warning
    pub min_password_length: usize,

    /// Marker/insecure-value pairs scanned for in option values
    pub security_checks: Vec<SecurityCheck>,
}

/// One row of the security-setting table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityCheck {
    /// Setting name searched for in the option value
    pub marker: String,

    /// Token that, when present in the lowercased value, makes the setting insecure
    pub insecure_value: String,
}

impl SecurityCheck {
    /// Create a new security check.
    pub fn new(marker: impl Into<String>, insecure_value: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            insecure_value: insecure_value.into(),
        }
    }
}

impl Default for InvlintConfig {
    fn default() -> Self {
        Self {
            required_groups: to_strings(DEFAULT_REQUIRED_GROUPS),
            sensitive_variables: to_strings(DEFAULT_SENSITIVE_VARIABLES),
            insecure_defaults: to_strings(DEFAULT_INSECURE_DEFAULTS),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            security_checks: DEFAULT_SECURITY_CHECKS
                .iter()
                .map(|(marker, insecure)| SecurityCheck::new(*marker, *insecure))
                .collect(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_builtin_tables() {
        let config = InvlintConfig::default();

        assert_eq!(config.required_groups, vec!["wordpress_servers"]);
        assert_eq!(config.sensitive_variables.len(), 3);
        assert_eq!(config.insecure_defaults, vec!["password", "admin", "123456"]);
        assert_eq!(config.min_password_length, 8);
        assert_eq!(
            config.security_checks[1],
            SecurityCheck::new("ansible_ssh_common_args", "-o stricthostkeychecking=no")
        );
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: InvlintConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, InvlintConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_given_fields() {
        let yaml = r#"
required_groups: [web, db]
min_password_length: 12
"#;
        let config: InvlintConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.required_groups, vec!["web", "db"]);
        assert_eq!(config.min_password_length, 12);
        assert_eq!(config.insecure_defaults, vec!["password", "admin", "123456"]);
    }

    #[test]
    fn parses_security_checks() {
        let yaml = r#"
security_checks:
  - marker: ansible_ssh_extra_args
    insecure_value: "-o userknownhostsfile=/dev/null"
"#;
        let config: InvlintConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.security_checks.len(), 1);
        assert_eq!(config.security_checks[0].marker, "ansible_ssh_extra_args");
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: std::result::Result<InvlintConfig, _> =
            serde_yaml::from_str("required_group: [web]");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_severity_overrides() {
        let yaml = r#"
security_checks:
  - marker: x
    insecure_value: y
    severity: error
"#;
        let result: std::result::Result<InvlintConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
