use std::path::{Path, PathBuf};

/// Environment variable that relocates the data directory (useful for tests
/// and for keeping several rosters side by side).
pub const KICKOFF_HOME_ENV: &str = "KICKOFF_HOME";

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found; set $HOME or $KICKOFF_HOME")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.kickoff/` directory layout.
///
/// Single source of truth for every path under `~/.kickoff/`. Use `resolve()` in
/// production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct KickoffPaths {
    kickoff_dir: PathBuf,
}

impl KickoffPaths {
    /// Resolve paths from `$KICKOFF_HOME`, falling back to `~/.kickoff`.
    pub fn resolve() -> Result<Self, PathError> {
        if let Some(dir) = std::env::var_os(KICKOFF_HOME_ENV)
            && !dir.is_empty()
        {
            return Ok(Self {
                kickoff_dir: PathBuf::from(dir),
            });
        }

        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            kickoff_dir: home.join(".kickoff"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(kickoff_dir: PathBuf) -> Self {
        Self { kickoff_dir }
    }

    /// The base `~/.kickoff` directory.
    pub fn kickoff_dir(&self) -> &Path {
        &self.kickoff_dir
    }

    pub fn roster_file(&self) -> PathBuf {
        self.kickoff_dir.join("roster.json")
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.kickoff_dir.join("exports")
    }

    /// Default export target: `~/.kickoff/exports/kickoff_export.json`.
    pub fn default_export_file(&self) -> PathBuf {
        self.exports_dir().join("kickoff_export.json")
    }

    pub fn user_config(&self) -> PathBuf {
        self.kickoff_dir.join("config.toml")
    }

    /// Project-level config: `<project_root>/.kickoff/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".kickoff").join("config.toml")
    }
}
