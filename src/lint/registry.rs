//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores lint rules in registration order, which is
//! also the order their findings are reported in.

use super::rule::{LintRule, RuleId};
use super::rules::{
    HostDefinitionsRule, RequiredGroupsRule, SecuritySettingsRule, VariableValuesRule,
};
use crate::config::InvlintConfig;

/// Ordered registry of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules, configured from `config`.
    ///
    /// Rules run in this order: required groups, host definitions,
    /// variable values, security settings.
    pub fn with_builtins(config: &InvlintConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RequiredGroupsRule::new(
            config.required_groups.clone(),
        )));
        registry.register(Box::new(HostDefinitionsRule));
        registry.register(Box::new(VariableValuesRule::new(
            config.sensitive_variables.clone(),
            config.insecure_defaults.clone(),
            config.min_password_length,
        )));
        registry.register(Box::new(SecuritySettingsRule::new(
            config.security_checks.clone(),
        )));
        registry
    }

    /// Register a lint rule.
    ///
    /// A rule with an already registered ID replaces the old one in place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
