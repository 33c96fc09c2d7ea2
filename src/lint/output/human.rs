//! Human-readable output formatter.
//!
//! Prints errors and warnings under their own banners, or a success banner
//! when there is nothing to report.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, ValidationResult};
use crate::ui::InvlintTheme;
use console::Style;
use std::io::Write;

/// Heading printed before error findings.
pub const ERRORS_BANNER: &str = "❌ ERRORS:";

/// Heading printed before warning findings.
pub const WARNINGS_BANNER: &str = "⚠️  WARNINGS:";

/// Printed when there are no findings at all.
pub const SUCCESS_BANNER: &str = "✅ Inventory validation passed!";

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    theme: InvlintTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            InvlintTheme::new()
        } else {
            InvlintTheme::plain()
        };
        Self { theme }
    }

    /// Render a result into a string.
    pub fn render(&self, result: &ValidationResult) -> String {
        let mut output = Vec::new();
        // Writing into a Vec cannot fail
        self.format(result, &mut output).ok();
        String::from_utf8_lossy(&output).into_owned()
    }

    fn write_section<W: Write>(
        writer: &mut W,
        banner: &str,
        style: &Style,
        diagnostics: &[LintDiagnostic],
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", style.apply_to(banner))?;
        for diag in diagnostics {
            writeln!(writer, "  - {}", diag.message)?;
        }
        Ok(())
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, result: &ValidationResult, writer: &mut W) -> std::io::Result<()> {
        if !result.errors().is_empty() {
            Self::write_section(writer, ERRORS_BANNER, &self.theme.error, result.errors())?;
        }

        if !result.warnings().is_empty() {
            Self::write_section(
                writer,
                WARNINGS_BANNER,
                &self.theme.warning,
                result.warnings(),
            )?;
        }

        if result.is_empty() {
            writeln!(writer, "{}", self.theme.success.apply_to(SUCCESS_BANNER))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    fn render(diagnostics: Vec<LintDiagnostic>) -> String {
        HumanFormatter::new(false).render(&ValidationResult::from_diagnostics(diagnostics))
    }

    #[test]
    fn formats_success_banner_when_empty() {
        let output = render(vec![]);

        assert_eq!(output, "✅ Inventory validation passed!\n");
    }

    #[test]
    fn formats_errors_then_warnings() {
        let output = render(vec![
            LintDiagnostic::warning(RuleId::new("r"), "Group 'staging' is empty"),
            LintDiagnostic::error(RuleId::new("r"), "Required group 'wordpress_servers' not found"),
            LintDiagnostic::warning(RuleId::new("r"), "Host 'web_1' has unusual format"),
        ]);

        assert_eq!(
            output,
            "❌ ERRORS:\n  - Required group 'wordpress_servers' not found\n\
             ⚠️  WARNINGS:\n  - Group 'staging' is empty\n  - Host 'web_1' has unusual format\n"
        );
    }

    #[test]
    fn errors_only_has_no_warning_banner() {
        let output = render(vec![LintDiagnostic::error(RuleId::new("r"), "boom")]);

        assert!(output.contains(ERRORS_BANNER));
        assert!(!output.contains("WARNINGS"));
        assert!(!output.contains(SUCCESS_BANNER));
    }

    #[test]
    fn warnings_only_has_no_success_banner() {
        let output = render(vec![LintDiagnostic::warning(RuleId::new("r"), "hmm")]);

        assert!(output.starts_with(WARNINGS_BANNER));
        assert!(!output.contains("ERRORS"));
        assert!(!output.contains(SUCCESS_BANNER));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let output = render(vec![LintDiagnostic::error(RuleId::new("r"), "boom")]);

        assert!(!output.contains('\u{1b}'));
    }
}
