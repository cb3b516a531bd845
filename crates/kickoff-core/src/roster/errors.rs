use std::path::PathBuf;

use crate::errors::KickoffError;
use crate::roster::types::{MAX_LEVEL, MIN_LEVEL, PlayerId};

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Player {id} not found")]
    NotFound { id: PlayerId },

    #[error("Player {field} is required")]
    MissingName { field: &'static str },

    #[error("Invalid level {level}: must be between {} and {}", MIN_LEVEL, MAX_LEVEL)]
    InvalidLevel { level: i64 },

    #[error(
        "Roster file '{}' is malformed: {message}\n  Fix or remove the file, or restore it with 'kickoff import'.",
        .path.display()
    )]
    Malformed { path: PathBuf, message: String },

    #[error("Import record #{index} rejected: {message}")]
    InvalidImportRecord { index: usize, message: String },

    #[error("Import file '{}' could not be parsed: {message}", .path.display())]
    InvalidImportFile { path: PathBuf, message: String },

    #[error("Could not resolve roster location: {message}")]
    PathUnavailable { message: String },

    #[error("IO operation failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl KickoffError for RosterError {
    fn error_code(&self) -> &'static str {
        match self {
            RosterError::NotFound { .. } => "PLAYER_NOT_FOUND",
            RosterError::MissingName { .. } => "PLAYER_NAME_MISSING",
            RosterError::InvalidLevel { .. } => "PLAYER_LEVEL_INVALID",
            RosterError::Malformed { .. } => "ROSTER_MALFORMED",
            RosterError::InvalidImportRecord { .. } => "IMPORT_RECORD_INVALID",
            RosterError::InvalidImportFile { .. } => "IMPORT_FILE_INVALID",
            RosterError::PathUnavailable { .. } => "ROSTER_PATH_UNAVAILABLE",
            RosterError::IoError { .. } => "ROSTER_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            RosterError::NotFound { .. }
                | RosterError::MissingName { .. }
                | RosterError::InvalidLevel { .. }
                | RosterError::InvalidImportRecord { .. }
                | RosterError::InvalidImportFile { .. }
        )
    }
}
