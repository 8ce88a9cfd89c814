//! Import rule engine.
//!
//! Runs every configured rule against every import edge of a file,
//! producing [`Violation`]s from packlint-core. One engine instance is
//! built per configuration value; independent engines can analyze files in
//! parallel, there is no shared mutable state.

use std::path::Path;

use packlint_core::{
    normalize, Config, DenylistError, DenylistRule, ImportRule, Location, ModulePath, Outcome,
    PrivateImportRule, ResolveError, RuleBox, Severity, Violation,
};

use crate::extractor::FileImports;
use crate::python::PythonExtractor;

/// Errors from building an [`ImportRuleEngine`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Denylist rule configuration is invalid.
    #[error(transparent)]
    Denylist(#[from] DenylistError),
}

/// Errors from analyzing a single file.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A relative import could not be resolved; the whole per-file
    /// analysis is aborted rather than reporting against a malformed path.
    #[error("in {file}:{line}: {source}")]
    Resolve {
        /// File being analyzed.
        file: String,
        /// Line of the offending import.
        line: usize,
        /// Underlying resolution error.
        source: ResolveError,
    },
}

/// Evaluates import rules against extracted file imports.
pub struct ImportRuleEngine {
    /// (rule, effective severity) in registration order.
    rules: Vec<(RuleBox, Severity)>,
    extractor: PythonExtractor,
    deduce_path: bool,
    top_level_dir: Option<std::path::PathBuf>,
}

impl ImportRuleEngine {
    /// Builds an engine from config.
    ///
    /// The privacy rule registers when enabled (default); the denylist
    /// rule registers only when patterns are configured.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed denylist patterns or file globs.
    pub fn new(config: &Config) -> Result<Self, EngineError> {
        let mut rules: Vec<(RuleBox, Severity)> = Vec::new();

        if config.rules.private_import.enabled {
            let rule = PrivateImportRule::new();
            let severity = config
                .rules
                .private_import
                .severity
                .unwrap_or_else(|| rule.default_severity());
            rules.push((Box::new(rule), severity));
        }

        if !config.rules.denylist.patterns.is_empty() {
            let mut rule = DenylistRule::new(&config.rules.denylist.patterns)?;
            if let Some(files) = &config.rules.denylist.files {
                rule = rule.with_file_glob(files)?;
            }
            let severity = config
                .rules
                .denylist
                .severity
                .unwrap_or_else(|| rule.default_severity());
            rules.push((Box::new(rule), severity));
        }

        Ok(Self {
            rules,
            extractor: PythonExtractor::new(),
            deduce_path: config.analyzer.deduce_path,
            top_level_dir: config.analyzer.top_level_dir.clone(),
        })
    }

    /// Number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes one file's source text.
    ///
    /// Determines the module name (annotation comment first, then path
    /// deduction), extracts imports and checks every edge.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] when a relative import ascends above the
    /// module root.
    pub fn analyze(&self, path: &Path, source: &str) -> Result<Vec<Violation>, AnalysisError> {
        let module_name = packlint_core::module_name::determine(
            source,
            path,
            self.deduce_path,
            self.top_level_dir.as_deref(),
        );
        let imports = self.extractor.extract(path, source);
        self.check(&imports, module_name.as_ref())
    }

    /// Checks extracted imports against the rule set.
    ///
    /// Violations follow edge source order; per edge, rule registration
    /// order. An edge flagged by two rules yields two violations.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] when a relative import ascends above the
    /// module root.
    pub fn check(
        &self,
        imports: &FileImports,
        source_module: Option<&ModulePath>,
    ) -> Result<Vec<Violation>, AnalysisError> {
        let mut violations = Vec::new();

        for edge in imports.edges() {
            let target =
                normalize(source_module, &edge.target, edge.ascend_level).map_err(|source| {
                    AnalysisError::Resolve {
                        file: imports.file_path.display().to_string(),
                        line: edge.line,
                        source,
                    }
                })?;

            for (rule, severity) in &self.rules {
                if !rule.applies_to(&imports.file_path) {
                    continue;
                }
                if let Outcome::Violation(reason) = rule.evaluate(source_module, &target) {
                    violations.push(Violation::new(
                        rule.code(),
                        rule.name(),
                        *severity,
                        Location::new(imports.file_path.clone(), edge.line, edge.column)
                            .with_span(edge.offset, edge.length),
                        reason,
                    ));
                }
            }
        }

        tracing::debug!(
            "{}: {} violation(s)",
            imports.file_path.display(),
            violations.len()
        );
        Ok(violations)
    }
}
