//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. invlint has a
//! single command, [`ValidateCommand`], routed by [`CommandDispatcher`].

pub mod dispatcher;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use validate::ValidateCommand;
