use serde::Serialize;

use crate::roster::types::Player;

/// One generated team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSheet {
    /// 1-based team number.
    pub number: usize,
    pub players: Vec<Player>,
    pub total_level: i64,
}

impl TeamSheet {
    pub fn average_level(&self) -> f64 {
        if self.players.is_empty() {
            0.0
        } else {
            self.total_level as f64 / self.players.len() as f64
        }
    }
}

/// Balanced teams for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lineup {
    pub teams: Vec<TeamSheet>,
    /// Players that took part in the draw.
    pub eligible_count: usize,
    /// Refinement passes that changed something.
    pub passes: usize,
}

impl Lineup {
    /// Difference between the strongest and weakest team totals.
    pub fn spread(&self) -> i64 {
        let totals = self.teams.iter().map(|t| t.total_level);
        match (totals.clone().max(), totals.min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }
}
