//! Module-name determination for analyzed files.
//!
//! The import rules want to know which module the analyzed file *is*. Two
//! sources exist: an in-file annotation comment (authoritative when
//! present) and deduction from the file's path relative to a top-level
//! directory.

use std::path::{Component, Path};

use crate::module_path::ModulePath;

/// Annotation comment prefix: `# packlint.name: package.module`.
const NAME_ANNOTATION: &str = "packlint.name:";

/// Extracts the module name from a `# packlint.name:` comment, if present.
///
/// The first such comment in the file wins.
#[must_use]
pub fn from_annotation(source: &str) -> Option<ModulePath> {
    for line in source.lines() {
        let Some(comment) = line.trim_start().strip_prefix('#') else {
            continue;
        };
        if let Some(value) = comment.trim_start().strip_prefix(NAME_ANNOTATION) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(ModulePath::parse(value));
            }
        }
    }
    None
}

/// Deduces a module name from a file path.
///
/// The path is relativized against `top_level_dir` when given, the `.py`
/// extension is stripped, and path components become dotted segments
/// (`package/module.py` → `package.module`). Returns `None` when the path
/// escapes the top-level directory or contains non-UTF-8 components; the
/// caller then analyzes with an unknown source module.
#[must_use]
pub fn deduce_from_path(path: &Path, top_level_dir: Option<&Path>) -> Option<ModulePath> {
    let rel = match top_level_dir {
        Some(root) => path.strip_prefix(root).unwrap_or(path),
        None => path,
    };

    let mut segments = Vec::new();
    for component in rel.with_extension("").components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str()?.to_owned()),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some(ModulePath::new(segments))
    }
}

/// Determines the module name for a file: annotation comment first, then
/// path deduction (when enabled).
#[must_use]
pub fn determine(
    source: &str,
    path: &Path,
    deduce_path: bool,
    top_level_dir: Option<&Path>,
) -> Option<ModulePath> {
    if let Some(name) = from_annotation(source) {
        tracing::debug!("module name from annotation: {name}");
        return Some(name);
    }
    if deduce_path {
        return deduce_from_path(path, top_level_dir);
    }
    None
}
