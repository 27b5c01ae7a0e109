//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::LintConfig;
use crate::error::{LintError, Result};

/// Config file looked for in the catalog root.
pub const DEFAULT_CONFIG_FILE: &str = ".catalog-lint.yml";

/// Resolve which config file applies to a catalog.
///
/// An explicit path is returned as-is; otherwise the default file in the
/// catalog root is used if it exists.
pub fn find_config(catalog_root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let path = catalog_root.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load the config for a catalog, falling back to defaults.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicitly named file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(catalog_root: &Path, explicit: Option<&Path>) -> Result<LintConfig> {
    match find_config(catalog_root, explicit) {
        Some(path) => load_config_file(&path),
        None => {
            debug!(root = %catalog_root.display(), "no config file, using defaults");
            Ok(LintConfig::default())
        }
    }
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintError::Io(e)
        }
    })?;

    debug!(path = %path.display(), "loading config");
    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty file is the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
