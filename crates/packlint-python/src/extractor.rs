//! Import statement intermediate representation.
//!
//! The extractor turns a parsed Python file into [`ImportStatement`]s, one
//! per `import`/`from` statement in source order. Rule evaluation consumes
//! [`ImportEdge`]s, one per imported name; [`FileImports::edges`] performs
//! the expansion lazily.

use std::path::PathBuf;

use packlint_core::ModulePath;

/// Kind of import statement, as a closed set of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// `import a.b, c as d`
    Plain,
    /// `from a.b import c, d as e` (including relative and `__future__` forms)
    From,
}

/// One imported name within a statement, with its optional alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedName {
    /// The imported name (`*` for wildcard imports).
    pub name: String,
    /// Binding alias from an `as` clause.
    pub alias: Option<String>,
}

/// A single import statement extracted from source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Statement kind.
    pub kind: ImportKind,
    /// Explicit module of a from-import (`None` for `from . import x`
    /// and for plain imports, whose names are already full paths).
    pub module: Option<ModulePath>,
    /// Leading-dot count of a relative from-import (0 when absolute).
    pub ascend_level: usize,
    /// Imported names; plain imports carry full dotted paths here.
    pub names: Vec<ImportedName>,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within line).
    pub column: usize,
    /// Byte offset of the statement in the file.
    pub offset: usize,
    /// Byte length of the statement.
    pub length: usize,
}

/// One resolved import relationship: the analyzed file importing one
/// target module/name. Positions are shared across all edges of a
/// statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    /// Target module path (possibly still relative).
    pub target: ModulePath,
    /// Leading-dot count to resolve against the source module.
    pub ascend_level: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within line).
    pub column: usize,
    /// Byte offset of the statement in the file.
    pub offset: usize,
    /// Byte length of the statement.
    pub length: usize,
}

/// All import statements of one analyzed file.
#[derive(Debug, Clone, Default)]
pub struct FileImports {
    /// Path relative to project root.
    pub file_path: PathBuf,
    /// Statements in source order.
    pub statements: Vec<ImportStatement>,
}

impl FileImports {
    /// Expands statements into one edge per imported name, in source order.
    pub fn edges(&self) -> impl Iterator<Item = ImportEdge> + '_ {
        self.statements.iter().flat_map(|stmt| {
            stmt.names.iter().map(move |imported| {
                let target = match (stmt.kind, &stmt.module) {
                    (ImportKind::Plain, _) | (ImportKind::From, None) => {
                        ModulePath::parse(&imported.name)
                    }
                    (ImportKind::From, Some(module)) => module.child(&imported.name),
                };
                ImportEdge {
                    target,
                    ascend_level: stmt.ascend_level,
                    line: stmt.line,
                    column: stmt.column,
                    offset: stmt.offset,
                    length: stmt.length,
                }
            })
        })
    }
}
