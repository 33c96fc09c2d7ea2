//! Validation engine.
//!
//! The [`Validator`] runs every registered rule against a parsed inventory
//! and concatenates their findings in registry order. Loading failures
//! (missing, unreadable or malformed files) short-circuit into a single
//! error finding without running any rule.

use std::path::Path;

use super::diagnostic::LintDiagnostic;
use super::registry::RuleRegistry;
use super::result::ValidationResult;
use super::rule::RuleId;
use crate::config::InvlintConfig;
use crate::error::InvlintError;
use crate::inventory::{InventoryParser, ParsedInventory};

/// Runs lint rules over inventories.
///
/// # Example
///
/// ```
/// use invlint::inventory::InventoryParser;
/// use invlint::lint::Validator;
///
/// let inventory = InventoryParser::parse("[wordpress_servers]\nweb1\n").unwrap();
/// let result = Validator::default().evaluate(&inventory);
/// assert!(result.is_clean());
/// assert!(result.warnings().is_empty());
/// ```
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    /// Create a validator over an explicit rule registry.
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Create a validator with the built-in rules configured from `config`.
    pub fn with_config(config: &InvlintConfig) -> Self {
        Self::new(RuleRegistry::with_builtins(config))
    }

    /// The rules this validator runs.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run every rule against a parsed inventory.
    pub fn evaluate(&self, inventory: &ParsedInventory) -> ValidationResult {
        let mut result = ValidationResult::new();

        for rule in self.registry.iter() {
            let diagnostics = rule.check(inventory);
            tracing::debug!(
                "Rule {} ({}) produced {} finding(s)",
                rule.name(),
                rule.id(),
                diagnostics.len()
            );
            for diag in diagnostics {
                result.push(diag);
            }
        }

        result
    }

    /// Load, parse and evaluate the inventory at `path`.
    ///
    /// A file that cannot be loaded yields exactly one error finding and
    /// no rule is run.
    pub fn validate_path(&self, path: &Path) -> ValidationResult {
        match InventoryParser::load(path) {
            Ok(inventory) => self.evaluate(&inventory),
            Err(err) => {
                tracing::debug!("Skipping checks: {}", err);
                ValidationResult::from_diagnostics([load_failure(&err)])
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::with_config(&InvlintConfig::default())
    }
}

/// Turn an inventory loading error into its finding.
fn load_failure(err: &InvlintError) -> LintDiagnostic {
    match err {
        InvlintError::InventoryNotFound { .. } => {
            LintDiagnostic::error(RuleId::new("inventory-missing"), err.to_string())
        }
        InvlintError::InventoryParseError { source, .. } => LintDiagnostic::error(
            RuleId::new("inventory-parse"),
            format!("INI parsing error: {}", source),
        ),
        _ => LintDiagnostic::error(RuleId::new("inventory-unreadable"), err.to_string()),
    }
}
