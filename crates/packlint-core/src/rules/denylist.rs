//! Regex denylist rule (DEP501).
//!
//! Flags imports whose absolute dotted path matches any caller-supplied
//! regular expression. Patterns use `re.match` semantics: anchored at the
//! start of the path, prefix matches count.

use std::path::Path;

use regex::Regex;
use thiserror::Error;

use crate::module_path::ModulePath;
use crate::rule::{ImportRule, Outcome};

/// Errors from building a [`DenylistRule`].
///
/// Raised at configuration time so a malformed pattern can never be
/// silently skipped for some files and applied to others.
#[derive(Debug, Error)]
pub enum DenylistError {
    /// A disallowed pattern is not a valid regular expression.
    #[error("invalid denylist pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern as configured.
        pattern: String,
        /// Regex compile error.
        source: regex::Error,
    },
    /// The file-scoping glob is invalid.
    #[error("invalid denylist file glob '{glob}': {source}")]
    FileGlob {
        /// The offending glob as configured.
        glob: String,
        /// Glob compile error.
        source: glob::PatternError,
    },
}

/// Checks the dotted target path against an ordered set of disallowed
/// patterns. The first match wins; an empty pattern set never fires.
pub struct DenylistRule {
    /// (original pattern text, start-anchored compiled form) pairs.
    patterns: Vec<(String, Regex)>,
    /// Optional glob restricting which source files the rule applies to.
    files: Option<glob::Pattern>,
}

impl DenylistRule {
    /// Compiles the rule from configured pattern strings.
    ///
    /// # Errors
    ///
    /// Fails fast on the first malformed pattern.
    pub fn new<I, S>(patterns: I) -> Result<Self, DenylistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            // Anchor at the start to reproduce Python's re.match.
            let regex =
                Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| {
                    DenylistError::Pattern {
                        pattern: pattern.to_owned(),
                        source,
                    }
                })?;
            compiled.push((pattern.to_owned(), regex));
        }
        Ok(Self {
            patterns: compiled,
            files: None,
        })
    }

    /// Restricts the rule to files matching `glob` (relative paths).
    ///
    /// # Errors
    ///
    /// Fails if the glob is malformed.
    pub fn with_file_glob(mut self, glob: &str) -> Result<Self, DenylistError> {
        let pattern = glob::Pattern::new(glob).map_err(|source| DenylistError::FileGlob {
            glob: glob.to_owned(),
            source,
        })?;
        self.files = Some(pattern);
        Ok(self)
    }

    /// Whether any patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl ImportRule for DenylistRule {
    fn name(&self) -> &'static str {
        "import-denylist"
    }

    fn code(&self) -> &'static str {
        "DEP501"
    }

    fn description(&self) -> &'static str {
        "Disallow imports matching configured regular expressions"
    }

    fn applies_to(&self, file: &Path) -> bool {
        match &self.files {
            Some(pattern) => pattern.matches_path(file),
            None => true,
        }
    }

    fn evaluate(&self, _source: Option<&ModulePath>, target: &ModulePath) -> Outcome {
        let dotted = target.to_string();
        for (pattern, regex) in &self.patterns {
            if regex.is_match(&dotted) {
                return Outcome::Violation(format!(
                    "Import '{dotted}' violates pattern: '{pattern}'."
                ));
            }
        }
        Outcome::Allowed
    }
}
