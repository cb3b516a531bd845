//! Configuration loading and merging logic.
//!
//! This module handles loading configuration from files and merging
//! configurations from different sources (user config, project config).
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.kickoff/config.toml` (global user preferences)
//! 3. **Project config** - `./.kickoff/config.toml` (per-group overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::errors::ConfigError;
use crate::types::KickoffConfig;
use crate::validation::validate_config;
use kickoff_paths::KickoffPaths;
use std::fs;
use std::path::Path;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &ConfigError) -> bool {
    matches!(e, ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound)
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.kickoff/config.toml`)
/// 3. Project config (`./.kickoff/config.toml`)
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if validation
/// fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<KickoffConfig, ConfigError> {
    let paths = KickoffPaths::resolve().map_err(|e| ConfigError::PathUnavailable {
        message: e.to_string(),
    })?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(&paths.user_config(), &KickoffPaths::project_config(&project_root))
}

/// Hierarchy loading over explicit file locations.
pub(crate) fn load_hierarchy_from(
    user_config: &Path,
    project_config: &Path,
) -> Result<KickoffConfig, ConfigError> {
    let mut config = KickoffConfig::default();

    for (source, path) in [("user", user_config), ("project", project_config)] {
        match load_from_file(path) {
            Ok(loaded) => {
                tracing::debug!(
                    event = "config.file_loaded",
                    source = source,
                    path = %path.display()
                );
                config = merge_configs(config, loaded);
            }
            Err(e) if is_file_not_found(&e) => {}
            Err(e) => {
                tracing::warn!(
                    event = "config.file_load_failed",
                    source = source,
                    path = %path.display(),
                    error = %e
                );
                return Err(e);
            }
        }
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
///
/// The IO error kind is preserved so callers can tell a missing file apart
/// from an unreadable one.
pub fn load_from_file(path: &Path) -> Result<KickoffConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Each field of the override replaces the base value only if it was set.
pub fn merge_configs(base: KickoffConfig, override_config: KickoffConfig) -> KickoffConfig {
    KickoffConfig {
        teams: base.teams.merge(&override_config.teams),
        discipline: base.discipline.merge(&override_config.discipline),
        roster: base.roster.merge(&override_config.roster),
    }
}
