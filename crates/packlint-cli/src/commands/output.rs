//! Rendering lint results.
//!
//! Compact output reuses `Violation`'s flake8-style `Display`
//! (`file:line:col: severity [CODE] message`), so it pipes cleanly into
//! editors and CI annotations. Text output adds color and a summary
//! line; JSON serializes the whole `LintResult`.

use std::fmt::Write;

use anyhow::Result;
use packlint_core::{LintResult, Severity, Violation};

use crate::OutputFormat;

/// Prints lint results in the selected format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for violation in &result.violations {
                println!("{}", render(violation));
            }
            println!("{}", summary(result));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => {
            for violation in &result.violations {
                println!("{violation}");
            }
        }
    }
    Ok(())
}

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";

fn color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Info => "\x1b[34m",
    }
}

/// One violation as a two-line block: severity and code up front, the
/// position indented underneath.
fn render(violation: &Violation) -> String {
    format!(
        "{}{}{RESET}[{}]: {}\n  --> {}:{}:{}",
        color(violation.severity),
        violation.severity,
        violation.code,
        violation.message,
        violation.location.file.display(),
        violation.location.line,
        violation.location.column,
    )
}

fn summary(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();

    let tint = if result.has_errors() {
        color(Severity::Error)
    } else if warnings > 0 {
        color(Severity::Warning)
    } else {
        GREEN
    };

    let mut line = format!(
        "{tint}{errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)",
        result.files_checked
    );
    if result.files_failed > 0 {
        let _ = write!(line, "; {} file(s) failed to analyze", result.files_failed);
    }
    line.push_str(RESET);
    line
}
