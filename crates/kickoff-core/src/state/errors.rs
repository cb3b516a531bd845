use crate::errors::KickoffError;
use crate::roster::errors::RosterError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Roster {
        #[from]
        source: RosterError,
    },
}

impl KickoffError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Roster { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Roster { source } => source.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error_delegates_to_roster_error() {
        let error: DispatchError = RosterError::NotFound { id: 7 }.into();
        assert_eq!(error.to_string(), "Player 7 not found");
        assert_eq!(error.error_code(), "PLAYER_NOT_FOUND");
        assert!(error.is_user_error());
    }
}
