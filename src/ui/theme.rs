//! Visual theme and styling.

use console::Style;

/// invlint's visual theme.
#[derive(Debug, Clone)]
pub struct InvlintTheme {
    /// Style for the success banner (green).
    pub success: Style,
    /// Style for the warnings banner (orange).
    pub warning: Style,
    /// Style for the errors banner and tool errors (red bold).
    pub error: Style,
}

impl Default for InvlintTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl InvlintTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
