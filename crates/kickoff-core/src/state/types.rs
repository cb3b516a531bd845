use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::roster::types::{PlayerId, PlayerUpdate};

/// All roster mutations that can be dispatched through the store.
///
/// Commands use owned types so they can be serialized, logged, and replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Add a player to the roster.
    AddPlayer {
        first_name: String,
        last_name: String,
        level: u8,
        #[serde(default = "default_true")]
        is_active: bool,
    },
    /// Edit a player's names, level, or active flag.
    UpdatePlayer { id: PlayerId, update: PlayerUpdate },
    /// Remove a player from the roster.
    RemovePlayer { id: PlayerId },
    /// Mark a player available or unavailable for the next session.
    SetActive { id: PlayerId, is_active: bool },
    /// Book a player. Reaching the configured limit blacklists them.
    IssueYellowCard { id: PlayerId },
    /// Clear yellow cards for one player, or for everyone when `id` is `None`.
    ResetYellowCards { id: Option<PlayerId> },
    /// Replace the roster with the players in an import file.
    ImportRoster { path: PathBuf },
    /// Remove every player.
    ResetRoster,
}

fn default_true() -> bool {
    true
}
