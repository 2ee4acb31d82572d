use ansi_term::Color;
use solpup_lint_config::Severity;
use std::fmt;

/// Represents a lint result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    // The kind of lint ('variable_lint', 'function_lint', etc.)
    pub lint: String,

    // The name of this configured lint rule (user supplied)
    pub lint_name: String,

    // File the finding is in, relative to the project root
    pub file: String,

    // 1-based line, or 0 for findings about a whole file
    pub line: usize,

    // The declaration the finding is about
    pub item: String,

    pub source_line: String,
    pub message: String,
    pub severity: Severity,
}

impl LintResult {
    /// Convert the lint result to a user-readable string with file and line information,
    /// with the severity coloured for the terminal
    pub fn render(&self) -> String {
        self.format_with(&self.severity_to_string(true))
    }

    /// Converts severity into a user-readable string
    fn severity_to_string(&self, color: bool) -> String {
        let (label, paint) = match self.severity {
            Severity::Info => ("info", Color::Blue),
            Severity::Warn => ("warning", Color::Yellow),
            Severity::Error => ("error", Color::Red),
        };
        if color {
            paint.bold().paint(label).to_string()
        } else {
            label.to_string()
        }
    }

    fn format_with(&self, severity: &str) -> String {
        let header = format!(
            "{} [{}::{}]: {}",
            severity, self.lint, self.lint_name, self.message
        );

        if self.line == 0 {
            // File-wide findings have nothing to point at
            return format!("{header}\n --> {}\n", self.file);
        }

        let line_number = self.line.to_string();
        let line_indent = " ".repeat(line_number.len() + 1);
        let (start, width) = self.highlight();
        format!(
            "{header}\n --> {}:{}\n{}|\n{} | {}\n{}| {}{}\n",
            self.file,
            self.line,
            line_indent,
            line_number,
            self.source_line,
            line_indent,
            " ".repeat(start),
            "^".repeat(width.max(1)),
        )
    }

    // Underline the item name if it's on the line, otherwise the whole statement
    fn highlight(&self) -> (usize, usize) {
        if !self.item.is_empty() {
            if let Some(pos) = self.source_line.find(&self.item) {
                let start = self.source_line[..pos].chars().count();
                return (start, self.item.chars().count());
            }
        }
        let trimmed = self.source_line.trim_start();
        let start = self.source_line.chars().count() - trimmed.chars().count();
        (start, trimmed.trim_end().chars().count())
    }
}

impl fmt::Display for LintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with(&self.severity_to_string(false)))
    }
}
