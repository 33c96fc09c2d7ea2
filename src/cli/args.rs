//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// invlint - Ansible INI inventory validator.
#[derive(Debug, Parser)]
#[command(name = "invlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: ValidateArgs,
}

/// Arguments for validating one inventory file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Path to inventory file
    pub inventory: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_inventory_path() {
        let cli = Cli::try_parse_from(["invlint", "hosts.ini"]).unwrap();
        assert_eq!(cli.args.inventory, PathBuf::from("hosts.ini"));
        assert!(!cli.args.strict);
    }

    #[test]
    fn parses_strict_flag() {
        let cli = Cli::try_parse_from(["invlint", "hosts.ini", "--strict"]).unwrap();
        assert!(cli.args.strict);
    }

    #[test]
    fn inventory_path_is_required() {
        assert!(Cli::try_parse_from(["invlint"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["invlint", "hosts.ini", "--fix"]).is_err());
    }
}
