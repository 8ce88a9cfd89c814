//! Check command implementation.
//!
//! Loads configuration, discovers Python sources and runs the import
//! rule engine over each file.

use anyhow::{Context, Result};
use packlint_core::{Config, LintResult};
use packlint_python::ImportRuleEngine;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line overrides layered on top of the config file.
pub struct Overrides {
    /// Additional exclude globs.
    pub exclude: Vec<String>,
    /// Additional denylist patterns.
    pub disallowed: Vec<String>,
    /// Top level directory override.
    pub top_level_dir: Option<PathBuf>,
    /// Disables module name deduction from file paths.
    pub no_deduce_path: bool,
}

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    overrides: &Overrides,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let project_dir = if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf()
    };

    let source = crate::config_resolver::locate(&project_dir, explicit_config);
    let mut config = load_config(&source)?;
    apply_overrides(&mut config, overrides);
    config.validate().context("Config validation failed")?;

    let engine = ImportRuleEngine::new(&config).context("Failed to build rule engine")?;

    let mut result = LintResult::new();

    if path.is_file() {
        check_file(&engine, path, path, &mut result)?;
    } else {
        let root = if config.analyzer.root.is_absolute() {
            config.analyzer.root.clone()
        } else {
            path.join(&config.analyzer.root)
        };
        result = lint_tree(&engine, &root, &config.analyzer.exclude)?;
    }

    result.sort();
    super::output::print(&result, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Discovers and analyzes every Python file under `root`.
fn lint_tree(engine: &ImportRuleEngine, root: &Path, exclude: &[String]) -> Result<LintResult> {
    let files = discover_files(root, exclude)?;
    tracing::info!("Analyzing {} Python file(s)", files.len());

    let mut result = LintResult::new();
    for file_path in &files {
        let rel = file_path.strip_prefix(root).unwrap_or(file_path);
        check_file(engine, file_path, rel, &mut result)?;
    }
    Ok(result)
}

/// Analyzes one file, reporting against its root-relative path.
///
/// A relative import that ascends above the module root aborts that
/// file's analysis; remaining files still run, but the failure is
/// recorded so the overall run cannot report clean.
fn check_file(
    engine: &ImportRuleEngine,
    file_path: &Path,
    rel: &Path,
    result: &mut LintResult,
) -> Result<()> {
    let source = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    match engine.analyze(rel, &source) {
        Ok(violations) => result.violations.extend(violations),
        Err(e) => {
            tracing::warn!("analysis failed {e}");
            result.files_failed += 1;
        }
    }
    result.files_checked += 1;
    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load {}", p.display()))
        }
    }
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    config
        .analyzer
        .exclude
        .extend(overrides.exclude.iter().cloned());
    config
        .rules
        .denylist
        .patterns
        .extend(overrides.disallowed.iter().cloned());
    if let Some(dir) = &overrides.top_level_dir {
        config.analyzer.top_level_dir = Some(dir.clone());
    }
    if overrides.no_deduce_path {
        config.analyzer.deduce_path = false;
    }
}

fn discover_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = exclude
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid exclude pattern")?;

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("py") {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if patterns.iter().any(|p| p.matches_path(rel)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
