//! Python import extractor using Tree-sitter.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use packlint_core::ModulePath;

use crate::extractor::{FileImports, ImportKind, ImportStatement, ImportedName};

/// Extracts import statements from Python source.
///
/// The whole tree is walked, so imports nested in function bodies, class
/// bodies, conditionals and `try` blocks are all found.
pub struct PythonExtractor {
    language: Language,
}

impl PythonExtractor {
    /// Creates a new Python extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Extract all import statements from `source`, in source order.
    #[must_use]
    pub fn extract(&self, file_path: &Path, source: &str) -> FileImports {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .expect("failed to set python language");

        let src = source.as_bytes();
        let tree = parser.parse(src, None).expect("failed to parse");

        let mut result = FileImports {
            file_path: file_path.to_path_buf(),
            statements: Vec::new(),
        };

        Self::walk(&tree.root_node(), src, &mut result.statements);
        tracing::debug!(
            "extracted {} import statement(s) from {}",
            result.statements.len(),
            file_path.display()
        );
        result
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn walk(node: &Node<'_>, src: &[u8], out: &mut Vec<ImportStatement>) {
        match node.kind() {
            "import_statement" => {
                if let Some(stmt) = Self::extract_plain(node, src) {
                    out.push(stmt);
                }
            }
            "import_from_statement" => {
                if let Some(stmt) = Self::extract_from(node, src) {
                    out.push(stmt);
                }
            }
            "future_import_statement" => {
                if let Some(stmt) = Self::extract_future(node, src) {
                    out.push(stmt);
                }
            }
            _ => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    Self::walk(&child, src, out);
                }
            }
        }
    }

    /// `import a.b, c as d`
    fn extract_plain(node: &Node<'_>, src: &[u8]) -> Option<ImportStatement> {
        let names = Self::collect_names(node, src);
        if names.is_empty() {
            return None;
        }
        Some(Self::statement(node, ImportKind::Plain, None, 0, names))
    }

    /// `from a.b import c` / `from ..pkg import c` / `from . import c`
    fn extract_from(node: &Node<'_>, src: &[u8]) -> Option<ImportStatement> {
        let module_node = node.child_by_field_name("module_name")?;

        let (module, ascend_level) = match module_node.kind() {
            "dotted_name" => (Some(ModulePath::parse(Self::text(&module_node, src))), 0),
            "relative_import" => Self::split_relative(&module_node, src),
            _ => return None,
        };

        let names = Self::collect_names(node, src);
        if names.is_empty() {
            return None;
        }
        Some(Self::statement(node, ImportKind::From, module, ascend_level, names))
    }

    /// `from __future__ import x` is a distinct grammar node; the module
    /// name is the keyword itself, not a `dotted_name` child.
    fn extract_future(node: &Node<'_>, src: &[u8]) -> Option<ImportStatement> {
        let names = Self::collect_names(node, src);
        if names.is_empty() {
            return None;
        }
        Some(Self::statement(
            node,
            ImportKind::From,
            Some(ModulePath::parse("__future__")),
            0,
            names,
        ))
    }

    /// Splits a `relative_import` node into its optional module path and
    /// leading-dot count.
    fn split_relative(node: &Node<'_>, src: &[u8]) -> (Option<ModulePath>, usize) {
        let mut module = None;
        let mut ascend_level = 0;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "import_prefix" => {
                    ascend_level = Self::text(&child, src).matches('.').count();
                }
                "dotted_name" => {
                    module = Some(ModulePath::parse(Self::text(&child, src)));
                }
                _ => {}
            }
        }

        (module, ascend_level)
    }

    /// Collects the imported names of a statement: `name`-field children
    /// (`dotted_name` or `aliased_import`) plus wildcard imports.
    fn collect_names(node: &Node<'_>, src: &[u8]) -> Vec<ImportedName> {
        let mut names = Vec::new();

        let mut cursor = node.walk();
        for child in node.children_by_field_name("name", &mut cursor) {
            match child.kind() {
                "dotted_name" => names.push(ImportedName {
                    name: Self::text(&child, src).to_owned(),
                    alias: None,
                }),
                "aliased_import" => {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| Self::text(&n, src).to_owned());
                    let alias = child
                        .child_by_field_name("alias")
                        .map(|n| Self::text(&n, src).to_owned());
                    if let Some(name) = name {
                        names.push(ImportedName { name, alias });
                    }
                }
                _ => {}
            }
        }

        // `from a import *` has no name field; Python's ast reports the
        // alias name as "*" and the rules see the same.
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "wildcard_import" {
                names.push(ImportedName {
                    name: "*".to_owned(),
                    alias: None,
                });
            }
        }

        names
    }

    fn statement(
        node: &Node<'_>,
        kind: ImportKind,
        module: Option<ModulePath>,
        ascend_level: usize,
        names: Vec<ImportedName>,
    ) -> ImportStatement {
        ImportStatement {
            kind,
            module,
            ascend_level,
            names,
            line: node.start_position().row + 1,
            column: node.start_position().column,
            offset: node.start_byte(),
            length: node.end_byte() - node.start_byte(),
        }
    }
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new()
    }
}
