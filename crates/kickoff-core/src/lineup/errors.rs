use crate::errors::KickoffError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LineupError {
    #[error("There are no active players to generate teams")]
    NoEligiblePlayers,

    #[error("Team count {requested} is out of range: choose between {min} and {max}")]
    TeamCountOutOfRange { requested: u32, min: u32, max: u32 },

    #[error("You need at least {requested} active players to create {requested} teams (have {eligible})")]
    NotEnoughPlayers { requested: u32, eligible: usize },
}

impl KickoffError for LineupError {
    fn error_code(&self) -> &'static str {
        match self {
            LineupError::NoEligiblePlayers => "NO_ELIGIBLE_PLAYERS",
            LineupError::TeamCountOutOfRange { .. } => "TEAM_COUNT_OUT_OF_RANGE",
            LineupError::NotEnoughPlayers { .. } => "NOT_ENOUGH_PLAYERS",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
