//! Underscore-privacy rule (DEP401).
//!
//! Disallows importing a leading-underscore name from outside the package
//! that owns it. A module may import its own private siblings: segments up
//! to and including the first one past the shared prefix with the source
//! module are exempt.

use crate::module_path::{is_private_segment, ModulePath};
use crate::rule::{ImportRule, Outcome};

/// Checks that imports do not reach into another package's private names.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrivateImportRule;

impl PrivateImportRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImportRule for PrivateImportRule {
    fn name(&self) -> &'static str {
        "private-import"
    }

    fn code(&self) -> &'static str {
        "DEP401"
    }

    fn description(&self) -> &'static str {
        "Disallow importing leading-underscore names across package boundaries"
    }

    fn evaluate(&self, source: Option<&ModulePath>, target: &ModulePath) -> Outcome {
        // Unknown source degrades to zero shared segments: only the
        // top-level segment is exempt.
        let common = source.map_or(0, |s| s.common_prefix_len(target));

        // The segment at index `common` is the sub-package being entered
        // and may be a private sibling of the source module itself. Every
        // segment past it crosses into a nested package.
        let crossing = target.segments().get(common + 1..).unwrap_or_default();

        if crossing.iter().any(|part| is_private_segment(part)) {
            Outcome::Violation(format!("Importing private name '{target}'."))
        } else {
            Outcome::Allowed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(source: Option<&str>, target: &str) -> Outcome {
        let source = source.map(ModulePath::parse);
        PrivateImportRule::new().evaluate(source.as_ref(), &ModulePath::parse(target))
    }

    #[test]
    fn public_imports_are_allowed() {
        assert_eq!(evaluate(None, "package.module"), Outcome::Allowed);
        assert_eq!(
            evaluate(Some("package.module1"), "package.module2.name"),
            Outcome::Allowed
        );
    }

    #[test]
    fn private_sibling_in_own_package_is_allowed() {
        assert_eq!(
            evaluate(Some("package.module1"), "package._module2"),
            Outcome::Allowed
        );
    }

    #[test]
    fn private_module_in_same_subpackage_is_visible() {
        // The importer lives inside package.subpackage, so _module2 is its
        // own private sibling.
        assert_eq!(
            evaluate(Some("package.subpackage.module"), "package.subpackage._module2.name"),
            Outcome::Allowed
        );
    }

    #[test]
    fn private_name_in_nested_subpackage_is_flagged() {
        let outcome = evaluate(Some("package.module1"), "package.subpackage._module3");
        assert_eq!(
            outcome,
            Outcome::Violation("Importing private name 'package.subpackage._module3'.".into())
        );
    }

    #[test]
    fn unknown_source_exempts_only_top_level() {
        // '_private' is the top-level entry segment, exempt even unknown.
        assert_eq!(evaluate(None, "_private.name"), Outcome::Allowed);
        // One level deeper it is a boundary crossing.
        assert_eq!(
            evaluate(None, "module._name"),
            Outcome::Violation("Importing private name 'module._name'.".into())
        );
    }

    #[test]
    fn importing_shared_ancestor_is_allowed() {
        // Target is a prefix of the source module; nothing beyond the
        // common prefix exists to check.
        assert_eq!(
            evaluate(Some("package.subpackage.module"), "package.subpackage"),
            Outcome::Allowed
        );
    }

    #[test]
    fn dunder_names_are_reserved_public() {
        assert_eq!(evaluate(None, "__future__.print_function"), Outcome::Allowed);
        assert_eq!(
            evaluate(Some("package.module"), "package.sub.__init__"),
            Outcome::Allowed
        );
    }

    #[test]
    fn deep_private_segment_flags_even_with_long_common_prefix() {
        let outcome = evaluate(
            Some("package.sub.module"),
            "package.sub.other._internal.api",
        );
        assert_eq!(
            outcome,
            Outcome::Violation(
                "Importing private name 'package.sub.other._internal.api'.".into()
            )
        );
    }
}
