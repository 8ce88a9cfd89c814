//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# packlint configuration
# Imports are checked against the underscore-privacy rule (DEP401) and,
# when patterns are configured, the regex denylist rule (DEP501).

[analyzer]
root = "."
exclude = ["**/.venv/**", "**/build/**", "**/migrations/**"]

# Module names are deduced from file paths relative to the analyzer root.
# Set top_level_dir when sources live under a source folder, e.g. "src".
deduce_path = true
# top_level_dir = "src"

[rules.private-import]
enabled = true
# severity = "warning"

# Regular expressions for disallowed imports. Patterns are matched
# against the fully resolved dotted path, anchored at its start.

# [rules.import-denylist]
# patterns = ["^gui_package", '.*\.infra\..*']
# files = "services/**/*.py"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("packlint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)?;

    println!("Created packlint.toml");
    println!();
    println!("Next steps:");
    println!("  1. Adjust [analyzer] exclude patterns for your project");
    println!("  2. Run: packlint check");

    Ok(())
}
