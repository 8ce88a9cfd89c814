//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location of an import statement.
///
/// Line numbers are 1-indexed; columns are 0-indexed byte offsets within
/// the line, following Python's `ast` `col_offset` convention so reported
/// positions line up with what Python tooling prints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within line).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "DEP401").
    pub code: String,
    /// Rule name (e.g., "private-import").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Location of the offending import statement.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
        }
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of files whose analysis was aborted (e.g. an unresolvable
    /// relative import). Counted within `files_checked`.
    #[serde(default)]
    pub files_failed: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    ///
    /// A file whose analysis was aborted counts as an error: its imports
    /// were never judged, so a clean exit would be a lie.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.files_failed > 0
            || self
                .violations
                .iter()
                .any(|v| v.severity == Severity::Error)
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        let warnings = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count();
        let infos = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Info)
            .count();
        (errors, warnings, infos)
    }

    /// Sorts violations by file, then line, then column.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
        self.files_failed += other.files_failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "DEP401",
            "private-import",
            severity,
            Location::new(PathBuf::from("pkg/module.py"), 3, 0),
            "Importing private name 'pkg.sub._impl'.",
        )
    }

    #[test]
    fn has_errors_ignores_warnings() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_errors());
        result.violations.push(make_violation(Severity::Error));
        assert!(result.has_errors());
    }

    #[test]
    fn failed_files_make_the_result_erroneous() {
        let mut result = LintResult::new();
        assert!(!result.has_errors());
        result.files_failed += 1;
        assert!(result.has_errors());
    }

    #[test]
    fn count_by_severity_buckets() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Info));
        assert_eq!(result.count_by_severity(), (2, 0, 1));
    }

    #[test]
    fn display_uses_flake8_style_position() {
        let v = make_violation(Severity::Error);
        let display = format!("{v}");
        assert!(display.starts_with("pkg/module.py:3:0:"));
        assert!(display.contains("[DEP401]"));
    }

    #[test]
    fn sort_orders_by_file_line_column() {
        let mut result = LintResult::new();
        let mut late = make_violation(Severity::Error);
        late.location.line = 9;
        result.violations.push(late);
        result.violations.push(make_violation(Severity::Error));
        result.sort();
        assert_eq!(result.violations[0].location.line, 3);
    }

    #[test]
    fn diagnostic_carries_code_in_message() {
        let v = make_violation(Severity::Error);
        let diag = ViolationDiagnostic::from(&v);
        assert!(format!("{diag}").contains("DEP401"));
    }
}
