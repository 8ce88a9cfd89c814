//! Locating the configuration file.
//!
//! Priority: the `--config` flag, then `packlint.toml` /
//! `.packlint.toml` in the project directory, then `config.toml` in the
//! per-user directory (`$PACKLINT_CONFIG_DIR`, or `~/.packlint`).

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line.
    Explicit(PathBuf),
    /// Config file in the project directory.
    Project(PathBuf),
    /// Config file in the per-user directory.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// The file to load, when one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Whether the config came from the per-user directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Locates the config file for a run.
///
/// An explicit `--config` path is trusted as given, without an existence
/// check; loading it later surfaces the real error.
#[must_use]
pub fn locate(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    match explicit {
        Some(p) => ConfigSource::Explicit(p.to_path_buf()),
        None => search(project_dir, user_config_dir().as_deref()),
    }
}

fn search(project_dir: &Path, user_dir: Option<&Path>) -> ConfigSource {
    let project = ["packlint.toml", ".packlint.toml"]
        .into_iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.exists());
    if let Some(found) = project {
        tracing::debug!("project config at {}", found.display());
        return ConfigSource::Project(found);
    }

    match user_dir.map(|dir| dir.join("config.toml")) {
        Some(found) if found.exists() => {
            tracing::debug!("user config at {}", found.display());
            ConfigSource::Global(found)
        }
        _ => ConfigSource::Default,
    }
}

/// Per-user config directory.
///
/// `$PACKLINT_CONFIG_DIR` overrides the home-based default so tests and
/// CI can redirect it.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("PACKLINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".packlint")))
}
