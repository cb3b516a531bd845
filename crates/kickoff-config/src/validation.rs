//! Configuration validation logic.
//!
//! Ensures configuration values are usable before the roster or team
//! generator sees them.

use crate::defaults::MIN_TEAM_COUNT;
use crate::errors::ConfigError;
use crate::types::KickoffConfig;

/// Validate a KickoffConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `teams.max_count` must be at least 2
/// - `teams.default_count` must lie within `2..=max_count`
/// - `teams.min_players_per_team` must be at least 1
/// - `discipline.yellow_card_limit` must be at least 1
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` describing the first failing rule.
pub fn validate_config(config: &KickoffConfig) -> Result<(), ConfigError> {
    let max_count = config.teams.max_count();
    if max_count < MIN_TEAM_COUNT {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "teams.max_count must be at least {}, got {}",
                MIN_TEAM_COUNT, max_count
            ),
        });
    }

    let default_count = config.teams.default_count();
    if !(MIN_TEAM_COUNT..=max_count).contains(&default_count) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "teams.default_count must be between {} and {}, got {}",
                MIN_TEAM_COUNT, max_count, default_count
            ),
        });
    }

    if config.teams.min_players_per_team() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "teams.min_players_per_team must be at least 1".to_string(),
        });
    }

    if config.discipline.yellow_card_limit() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "discipline.yellow_card_limit must be at least 1".to_string(),
        });
    }

    Ok(())
}
