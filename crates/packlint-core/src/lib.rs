//! # packlint-core
//!
//! Core framework for Python import linting.
//!
//! This crate provides the building blocks for checking import statements
//! against package-encapsulation rules:
//!
//! - [`ModulePath`] dotted module path value type
//! - [`normalize`] for resolving relative imports to absolute paths
//! - [`ImportRule`] trait plus the two concrete rules,
//!   [`PrivateImportRule`] (DEP401) and [`DenylistRule`] (DEP501)
//! - [`Violation`] / [`LintResult`] for representing findings
//! - [`Config`] for TOML-based rule configuration
//!
//! ## Example
//!
//! ```ignore
//! use packlint_core::{ImportRule, ModulePath, PrivateImportRule};
//!
//! let rule = PrivateImportRule::new();
//! let source = ModulePath::parse("package.module1");
//! let target = ModulePath::parse("package.subpackage._module3");
//! let outcome = rule.evaluate(Some(&source), &target);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod module_path;
mod resolve;
mod rule;
mod types;

/// Concrete import rules.
pub mod rules;

/// Module-name determination helpers.
pub mod module_name;

pub use config::{
    AnalyzerConfig, Config, ConfigError, DenylistConfig, PrivateImportConfig, RulesConfig,
};
pub use module_path::{is_private_segment, ModulePath};
pub use resolve::{normalize, ResolveError};
pub use rule::{ImportRule, Outcome, RuleBox};
pub use rules::{DenylistError, DenylistRule, PrivateImportRule};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
