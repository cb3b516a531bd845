//! Roster file persistence.
//!
//! The roster lives in a single JSON file (`~/.kickoff/roster.json` unless the
//! config overrides it). Writes go to a temp file that is renamed into place,
//! so an interrupted save never leaves a truncated roster.

use std::fs;
use std::path::{Path, PathBuf};

use kickoff_config::KickoffConfig;
use kickoff_paths::KickoffPaths;
use tracing::{debug, warn};

use crate::roster::collection::Roster;
use crate::roster::errors::RosterError;

#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    /// Roster location from config, falling back to the default data directory.
    pub fn open(config: &KickoffConfig) -> Result<Self, RosterError> {
        if let Some(file) = config.roster.file() {
            return Ok(Self::at(file));
        }

        let paths = KickoffPaths::resolve().map_err(|e| RosterError::PathUnavailable {
            message: e.to_string(),
        })?;
        Ok(Self::at(paths.roster_file()))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the roster. A missing file is an empty roster; a corrupt one is an error.
    pub fn load(&self) -> Result<Roster, RosterError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    event = "core.roster.file_missing",
                    path = %self.path.display()
                );
                return Ok(Roster::new());
            }
            Err(e) => return Err(RosterError::IoError { source: e }),
        };

        serde_json::from_str(&content).map_err(|e| {
            warn!(
                event = "core.roster.parse_failed",
                path = %self.path.display(),
                error = %e
            );
            RosterError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })
    }

    pub fn save(&self, roster: &Roster) -> Result<(), RosterError> {
        let content = serde_json::to_string_pretty(roster).map_err(|e| RosterError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;
        write_atomically(&self.path, &content)?;
        debug!(
            event = "core.roster.saved",
            path = %self.path.display(),
            players = roster.len()
        );
        Ok(())
    }
}

/// Write `content` to `path` via a sibling temp file and rename.
pub(crate) fn write_atomically(path: &Path, content: &str) -> Result<(), RosterError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            warn!(
                event = "core.roster.dir_create_failed",
                path = %parent.display(),
                error = %e,
            );
            RosterError::IoError { source: e }
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_file = PathBuf::from(temp_name);

    if let Err(e) = fs::write(&temp_file, content) {
        cleanup_temp_file(&temp_file, &e);
        return Err(RosterError::IoError { source: e });
    }
    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(RosterError::IoError { source: e });
    }
    Ok(())
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        warn!(
            event = "core.roster.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after write error"
        );
    }
}
