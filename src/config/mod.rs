//! Rules configuration for invlint.
//!
//! The tables the lint rules consult (required groups, sensitive variable
//! names, insecure defaults, security-setting markers) are plain data with
//! built-in defaults that an optional YAML file can replace.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use invlint::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".invlint.yml"), "required_groups: [web]").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.required_groups, vec!["web".to_string()]);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. The file named by `INVLINT_CONFIG`, if set
//! 2. Project config (`.invlint.yml` in the working directory)
//! 3. Built-in defaults

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_from_paths, parse_config, ConfigPaths, CONFIG_ENV_VAR,
    CONFIG_FILE_NAME,
};
pub use schema::{
    InvlintConfig, SecurityCheck, DEFAULT_INSECURE_DEFAULTS, DEFAULT_MIN_PASSWORD_LENGTH,
    DEFAULT_REQUIRED_GROUPS, DEFAULT_SECURITY_CHECKS, DEFAULT_SENSITIVE_VARIABLES,
};
pub use validator::{validate, validate_config, ValidationError};
