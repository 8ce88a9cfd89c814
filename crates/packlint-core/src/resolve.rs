//! Relative import normalization.

use thiserror::Error;

use crate::module_path::ModulePath;

/// Errors from normalizing a relative import.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The relative import ascends above the source module's root
    /// (`ascend_level` exceeds the source path depth).
    #[error("relative import ascends {ascend_level} level(s) above module '{source_module}'")]
    InvalidAscendLevel {
        /// Dotted source module path.
        source_module: String,
        /// Number of leading dots on the import statement.
        ascend_level: usize,
    },
}

/// Resolves a possibly-relative import target to an absolute module path.
///
/// `ascend_level` is the number of leading dots on a `from`-import
/// (0 for absolute imports). With a known source module, the last
/// `ascend_level` segments of the source are dropped and the target's
/// segments appended. With an unknown source or level 0 the target is
/// returned unchanged; it is already absolute, or cannot be made absolute.
///
/// # Errors
///
/// [`ResolveError::InvalidAscendLevel`] when `ascend_level` exceeds the
/// source module's depth. This is never silently clamped: a malformed path
/// would misreport every downstream rule decision.
pub fn normalize(
    source: Option<&ModulePath>,
    target: &ModulePath,
    ascend_level: usize,
) -> Result<ModulePath, ResolveError> {
    let Some(source) = source else {
        return Ok(target.clone());
    };
    if ascend_level == 0 {
        return Ok(target.clone());
    }
    if ascend_level > source.len() {
        return Err(ResolveError::InvalidAscendLevel {
            source_module: source.to_string(),
            ascend_level,
        });
    }

    let mut segments: Vec<String> = source.segments()[..source.len() - ascend_level].to_vec();
    segments.extend(target.segments().iter().cloned());
    Ok(ModulePath::new(segments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_level_returns_target_unchanged() {
        let source = ModulePath::parse("package.module");
        let target = ModulePath::parse("other.name");
        assert_eq!(
            normalize(Some(&source), &target, 0),
            Ok(target.clone()),
        );
    }

    #[test]
    fn unknown_source_returns_target_unchanged() {
        let target = ModulePath::parse("module._name");
        assert_eq!(normalize(None, &target, 1), Ok(target.clone()));
    }

    #[test]
    fn single_dot_replaces_last_segment() {
        let source = ModulePath::parse("package.subpackage.module");
        let target = ModulePath::parse("sibling.name");
        assert_eq!(
            normalize(Some(&source), &target, 1),
            Ok(ModulePath::parse("package.subpackage.sibling.name")),
        );
    }

    #[test]
    fn double_dot_ascends_two_levels() {
        let source = ModulePath::parse("package.subpackage.module");
        let target = ModulePath::parse("other");
        assert_eq!(
            normalize(Some(&source), &target, 2),
            Ok(ModulePath::parse("package.other")),
        );
    }

    #[test]
    fn ascend_to_exact_root_is_allowed() {
        let source = ModulePath::parse("package.module");
        let target = ModulePath::parse("top");
        assert_eq!(
            normalize(Some(&source), &target, 2),
            Ok(ModulePath::parse("top")),
        );
    }

    #[test]
    fn ascend_above_root_is_an_error() {
        let source = ModulePath::parse("package.module");
        let target = ModulePath::parse("top");
        assert_eq!(
            normalize(Some(&source), &target, 3),
            Err(ResolveError::InvalidAscendLevel {
                source_module: "package.module".into(),
                ascend_level: 3,
            }),
        );
    }

    #[test]
    fn error_message_names_module_and_level() {
        let source = ModulePath::parse("package.module");
        let err = normalize(Some(&source), &ModulePath::parse("top"), 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "relative import ascends 3 level(s) above module 'package.module'"
        );
    }
}
