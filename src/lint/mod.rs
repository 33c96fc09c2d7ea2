//! Inventory validation and linting.
//!
//! This module provides inventory validation through a rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of rules ([`RuleRegistry`])
//! - **Engine** - Runs the registry over an inventory ([`Validator`])
//! - **Diagnostics** - Findings with a severity ([`LintDiagnostic`]), collected
//!   into a [`ValidationResult`]
//!
//! # Example
//!
//! ```
//! use invlint::inventory::InventoryParser;
//! use invlint::lint::{Severity, Validator};
//!
//! let inventory = InventoryParser::parse(
//!     "[wordpress_servers:vars]\nwordpress_db_password=admin\n",
//! )
//! .unwrap();
//!
//! let result = Validator::default().evaluate(&inventory);
//!
//! // Missing group plus the denylisted password
//! assert_eq!(result.errors().len(), 2);
//! assert!(result.warnings().iter().all(|d| d.severity == Severity::Warning));
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod engine;
pub mod output;
pub mod registry;
pub mod result;
pub mod rule;
pub mod rules;

pub use diagnostic::LintDiagnostic;
pub use engine::Validator;
pub use output::{HumanFormatter, LintFormatter};
pub use registry::RuleRegistry;
pub use result::ValidationResult;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{HostDefinitionsRule, RequiredGroupsRule, SecuritySettingsRule, VariableValuesRule};
