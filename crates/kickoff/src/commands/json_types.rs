use serde::Serialize;

use kickoff_core::{Lineup, Player, PlayerStatus};

/// A player plus the status bucket it falls into under the current card limit.
#[derive(Serialize)]
pub struct PlayerEntry<'a> {
    #[serde(flatten)]
    pub player: &'a Player,
    pub status: PlayerStatus,
}

#[derive(Serialize)]
pub struct ListResponse<'a> {
    pub players: Vec<PlayerEntry<'a>>,
    pub total: usize,
    pub yellow_card_limit: u32,
}

impl<'a> ListResponse<'a> {
    pub fn new(players: &[&'a Player], yellow_card_limit: u32) -> Self {
        Self {
            players: players
                .iter()
                .map(|player| PlayerEntry {
                    player,
                    status: player.status(yellow_card_limit),
                })
                .collect(),
            total: players.len(),
            yellow_card_limit,
        }
    }
}

#[derive(Serialize)]
pub struct TeamEntry<'a> {
    pub number: usize,
    pub total_level: i64,
    pub average_level: f64,
    pub players: &'a [Player],
}

#[derive(Serialize)]
pub struct TeamsResponse<'a> {
    pub teams: Vec<TeamEntry<'a>>,
    pub eligible_count: usize,
    pub spread: i64,
    pub passes: usize,
}

impl<'a> From<&'a Lineup> for TeamsResponse<'a> {
    fn from(lineup: &'a Lineup) -> Self {
        Self {
            teams: lineup
                .teams
                .iter()
                .map(|team| TeamEntry {
                    number: team.number,
                    total_level: team.total_level,
                    average_level: team.average_level(),
                    players: &team.players,
                })
                .collect(),
            eligible_count: lineup.eligible_count,
            spread: lineup.spread(),
            passes: lineup.passes,
        }
    }
}
