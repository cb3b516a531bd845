//! # kickoff-config
//!
//! TOML configuration types, loading, and validation for Kickoff.
//!
//! Single source of truth for `KickoffConfig` and its sections.
//! Depends only on `kickoff-paths`.

mod defaults;
mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use defaults::{
    DEFAULT_MAX_TEAM_COUNT, DEFAULT_MIN_PLAYERS_PER_TEAM, DEFAULT_TEAM_COUNT,
    DEFAULT_YELLOW_CARD_LIMIT, MIN_TEAM_COUNT,
};
pub use errors::ConfigError;
pub use loading::{load_from_file, load_hierarchy, merge_configs};
pub use types::{DisciplineConfig, KickoffConfig, RosterConfig, TeamsConfig};
pub use validation::validate_config;

impl KickoffConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
