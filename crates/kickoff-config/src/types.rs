//! Configuration type definitions for Kickoff.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [teams]
//! default_count = 2
//! max_count = 6
//! min_players_per_team = 2
//!
//! [discipline]
//! yellow_card_limit = 3
//!
//! [roster]
//! file = "/home/me/football/roster.json"
//! ```
//!
//! Fields are `Option<T>` to support proper config hierarchy merging:
//! only explicitly-set values override lower-priority configs. Accessors
//! supply the built-in defaults.

use crate::defaults::{
    DEFAULT_MAX_TEAM_COUNT, DEFAULT_MIN_PLAYERS_PER_TEAM, DEFAULT_TEAM_COUNT,
    DEFAULT_YELLOW_CARD_LIMIT,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.kickoff/config.toml`
/// 2. Project config: `./.kickoff/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KickoffConfig {
    /// Team generation settings
    #[serde(default)]
    pub teams: TeamsConfig,

    /// Yellow-card policy
    #[serde(default)]
    pub discipline: DisciplineConfig,

    /// Roster storage location
    #[serde(default)]
    pub roster: RosterConfig,
}

/// Team generation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamsConfig {
    /// Team count used when none is given on the command line.
    /// Default: 2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_count: Option<u32>,

    /// Absolute maximum number of teams.
    /// Default: 6
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,

    /// Minimum players each team must be able to field. Caps the team
    /// count at `eligible / min_players_per_team`.
    /// Default: 2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_players_per_team: Option<u32>,
}

impl TeamsConfig {
    pub fn default_count(&self) -> u32 {
        self.default_count.unwrap_or(DEFAULT_TEAM_COUNT)
    }

    pub fn max_count(&self) -> u32 {
        self.max_count.unwrap_or(DEFAULT_MAX_TEAM_COUNT)
    }

    pub fn min_players_per_team(&self) -> u32 {
        self.min_players_per_team
            .unwrap_or(DEFAULT_MIN_PLAYERS_PER_TEAM)
    }

    pub(crate) fn merge(&self, other: &Self) -> Self {
        Self {
            default_count: other.default_count.or(self.default_count),
            max_count: other.max_count.or(self.max_count),
            min_players_per_team: other.min_players_per_team.or(self.min_players_per_team),
        }
    }
}

/// Disciplinary policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisciplineConfig {
    /// Yellow cards at which a player is blacklisted and deactivated.
    /// Default: 3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow_card_limit: Option<u32>,
}

impl DisciplineConfig {
    pub fn yellow_card_limit(&self) -> u32 {
        self.yellow_card_limit.unwrap_or(DEFAULT_YELLOW_CARD_LIMIT)
    }

    pub(crate) fn merge(&self, other: &Self) -> Self {
        Self {
            yellow_card_limit: other.yellow_card_limit.or(self.yellow_card_limit),
        }
    }
}

/// Roster storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Override for the roster file. Default: `~/.kickoff/roster.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl RosterConfig {
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub(crate) fn merge(&self, other: &Self) -> Self {
        Self {
            file: other.file.clone().or_else(|| self.file.clone()),
        }
    }
}
