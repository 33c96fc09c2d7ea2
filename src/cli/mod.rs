//! Command-line interface for invlint.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, ValidateArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ValidateCommand};
