use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::balance::Rated;

pub type PlayerId = u64;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// A roster entry.
///
/// Serialized with camelCase keys, the same shape export files use.
/// `isActive` is accepted as either a boolean or `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub level: u8,
    #[serde(
        default = "default_active",
        deserialize_with = "deserialize_active_flag"
    )]
    pub is_active: bool,
    #[serde(default)]
    pub yellow_cards: u32,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_blacklisted(&self, yellow_card_limit: u32) -> bool {
        self.yellow_cards >= yellow_card_limit
    }

    /// Active and under the yellow-card limit.
    pub fn is_eligible(&self, yellow_card_limit: u32) -> bool {
        self.is_active && !self.is_blacklisted(yellow_card_limit)
    }

    pub fn status(&self, yellow_card_limit: u32) -> PlayerStatus {
        if self.is_blacklisted(yellow_card_limit) {
            PlayerStatus::Blacklisted
        } else if self.is_active {
            PlayerStatus::Active
        } else {
            PlayerStatus::Inactive
        }
    }
}

impl Rated for Player {
    fn level(&self) -> i64 {
        i64::from(self.level)
    }
}

/// Roster bucket a player falls into for listing purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Active,
    Inactive,
    Blacklisted,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Inactive => "inactive",
            PlayerStatus::Blacklisted => "blacklisted",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(PlayerStatus::Active),
            "inactive" => Ok(PlayerStatus::Inactive),
            "blacklisted" => Ok(PlayerStatus::Blacklisted),
            other => Err(format!(
                "unknown player status '{}', expected active, inactive or blacklisted",
                other
            )),
        }
    }
}

/// Input for adding a player. Names are trimmed before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub level: u8,
    pub is_active: bool,
}

impl NewPlayer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, level: u8) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            level,
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Partial edit of a player. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub level: Option<u8>,
    pub is_active: Option<bool>,
}

impl PlayerUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.level.is_none()
            && self.is_active.is_none()
    }
}

pub(crate) fn default_active() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ActiveFlag {
    Bool(bool),
    Int(i64),
}

/// Accepts `true`/`false` as well as `1`/`0`.
pub(crate) fn deserialize_active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match ActiveFlag::deserialize(deserializer)? {
        ActiveFlag::Bool(value) => Ok(value),
        ActiveFlag::Int(1) => Ok(true),
        ActiveFlag::Int(0) => Ok(false),
        ActiveFlag::Int(other) => Err(serde::de::Error::custom(format!(
            "isActive must be true, false, 0 or 1, got {}",
            other
        ))),
    }
}
