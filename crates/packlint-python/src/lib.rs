//! # packlint-python
//!
//! Tree-sitter based Python import analysis.
//!
//! This crate pairs packlint-core's rules with a concrete Python
//! front end:
//!
//! - [`PythonExtractor`] walks a Tree-sitter parse tree and collects
//!   every import statement, wherever it appears in the file
//! - [`FileImports`] / [`ImportEdge`] model one import per imported name
//! - [`ImportRuleEngine`] resolves relative imports and runs the
//!   configured rules over every edge

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod extractor;
pub mod python;

pub use engine::{AnalysisError, EngineError, ImportRuleEngine};
pub use extractor::{FileImports, ImportEdge, ImportKind, ImportStatement, ImportedName};
pub use python::PythonExtractor;
