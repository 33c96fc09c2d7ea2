//! invlint - Ansible INI inventory validator.
//!
//! invlint reads an INI-style inventory, runs a fixed set of correctness
//! and security checks over it, and reports errors and warnings with an
//! exit status suitable for CI pipelines.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Rules configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Inventory parsing and address syntax
//! - [`lint`] - Validation rules, engine and report formatting
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use invlint::inventory::InventoryParser;
//! use invlint::lint::Validator;
//!
//! let inventory = InventoryParser::parse(
//!     "[wordpress_servers]\nweb1 ansible_host=10.0.0.5\n",
//! )
//! .unwrap();
//!
//! let result = Validator::default().evaluate(&inventory);
//! assert!(result.passes(true));
//! ```
//!
//! For file-based validation, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod lint;
pub mod ui;

pub use error::{InvlintError, Result};
