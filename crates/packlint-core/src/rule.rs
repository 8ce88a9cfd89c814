//! Rule trait for judging import edges.

use std::path::Path;

use crate::module_path::ModulePath;
use crate::types::Severity;

/// Result of evaluating one import edge against one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The import is allowed.
    Allowed,
    /// The import violates the rule, with a human-readable reason.
    Violation(String),
}

impl Outcome {
    /// Returns the violation reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed => None,
            Self::Violation(reason) => Some(reason),
        }
    }
}

/// A rule that judges a single import edge.
///
/// Implementations must be stateless and side-effect-free: `evaluate` is a
/// pure function of `(source, target)`, so independent per-file analysis
/// calls can run in parallel with no synchronization.
///
/// # Example
///
/// ```ignore
/// use packlint_core::{ImportRule, ModulePath, Outcome};
///
/// pub struct NoTestsImport;
///
/// impl ImportRule for NoTestsImport {
///     fn name(&self) -> &'static str { "no-tests-import" }
///     fn code(&self) -> &'static str { "DEP901" }
///
///     fn evaluate(&self, _source: Option<&ModulePath>, target: &ModulePath) -> Outcome {
///         if target.segments().iter().any(|s| s == "tests") {
///             Outcome::Violation(format!("Importing test-only name '{target}'."))
///         } else {
///             Outcome::Allowed
///         }
///     }
/// }
/// ```
pub trait ImportRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "private-import").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "DEP401").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule applies to the given source file.
    ///
    /// File scoping is decided here, outside [`evaluate`](Self::evaluate),
    /// which stays a pure function of module paths.
    fn applies_to(&self, _file: &Path) -> bool {
        true
    }

    /// Judges one import edge.
    ///
    /// # Arguments
    ///
    /// * `source` - Absolute module path of the importing file, if known.
    /// * `target` - Absolute module path being imported.
    fn evaluate(&self, source: Option<&ModulePath>, target: &ModulePath) -> Outcome;
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn ImportRule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl ImportRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn evaluate(&self, _source: Option<&ModulePath>, _target: &ModulePath) -> Outcome {
            Outcome::Violation("always fires".into())
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(rule.applies_to(Path::new("anywhere.py")));
    }

    #[test]
    fn outcome_reason_accessor() {
        assert_eq!(Outcome::Allowed.reason(), None);
        assert_eq!(
            Outcome::Violation("nope".into()).reason(),
            Some("nope")
        );
    }
}
