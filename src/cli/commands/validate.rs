//! Validate command implementation.
//!
//! `invlint <INVENTORY> [--strict]` loads the rules configuration, runs every
//! check over the inventory, prints the report and maps the outcome to an
//! exit code.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::{load_from_paths, ConfigPaths};
use crate::error::Result;
use crate::lint::{HumanFormatter, Validator};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    config_paths: ConfigPaths,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    ///
    /// The rules configuration is discovered from the environment and the
    /// project root.
    pub fn new(project_root: &Path, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_paths: ConfigPaths::discover(project_root),
            args,
        }
    }

    /// Use these config paths instead of the discovered ones.
    pub fn with_config_paths(mut self, paths: ConfigPaths) -> Self {
        self.config_paths = paths;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ValidateArgs {
        &self.args
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_from_paths(&self.config_paths) {
            Ok(c) => c,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let validator = Validator::with_config(&config);
        let result = validator.validate_path(&self.args.inventory);

        let report = HumanFormatter::new(ui.use_colors()).render(&result);
        ui.message(report.trim_end());

        let passed = result.passes(self.args.strict);
        tracing::debug!(
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            strict = self.args.strict,
            passed,
            "Validation finished"
        );

        if passed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
