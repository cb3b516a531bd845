use serde::{Deserialize, Serialize};

use crate::roster::types::{Player, PlayerId};

/// Roster state changes produced by a dispatched command.
///
/// Each variant describes what happened. Failures travel through the
/// `Result` error channel, never the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    PlayerAdded { player: Player },
    PlayerUpdated { player: Player },
    PlayerRemoved { player: Player },
    ActiveChanged { player: Player },
    YellowCardIssued { player: Player },
    /// The player reached the yellow-card limit and was deactivated.
    PlayerBlacklisted { id: PlayerId, yellow_cards: u32 },
    /// Cards were cleared for one player (`Some`) or for the whole roster.
    YellowCardsReset { id: Option<PlayerId>, count: usize },
    RosterImported { count: usize },
    RosterReset { removed: usize },
}
