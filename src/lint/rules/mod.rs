//! Built-in lint rules.
//!
//! This module contains the validation rules that come with invlint, in
//! the order they run.

pub mod host_definitions;
pub mod required_groups;
pub mod security_settings;
pub mod variable_values;

pub use host_definitions::HostDefinitionsRule;
pub use required_groups::RequiredGroupsRule;
pub use security_settings::SecuritySettingsRule;
pub use variable_values::VariableValuesRule;
