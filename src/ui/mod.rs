//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`InvlintTheme`] for styling
//!
//! # Example
//!
//! ```
//! use invlint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("✅ Inventory validation passed!");
//! assert!(ui.has_message("passed"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, InvlintTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display report output to the user.
    fn message(&mut self, msg: &str);

    /// Display an error about the tool itself.
    fn error(&mut self, msg: &str);

    /// Whether report output should be styled.
    fn use_colors(&self) -> bool;
}
