use serde::{Deserialize, Serialize};

use crate::roster::errors::RosterError;
use crate::roster::types::{MAX_LEVEL, MIN_LEVEL, NewPlayer, Player, PlayerId, PlayerUpdate};

/// In-memory roster. Serialized as a bare JSON array of players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Players in storage order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players ordered by first name, then last name. Id breaks remaining ties.
    pub fn sorted(&self) -> Vec<Player> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| {
            a.first_name
                .cmp(&b.first_name)
                .then_with(|| a.last_name.cmp(&b.last_name))
                .then_with(|| a.id.cmp(&b.id))
        });
        players
    }

    /// Eligible players in storage order.
    pub fn eligible(&self, yellow_card_limit: u32) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.is_eligible(yellow_card_limit))
            .collect()
    }

    pub fn next_id(&self) -> PlayerId {
        self.players.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn add(&mut self, new_player: NewPlayer) -> Result<Player, RosterError> {
        let first_name = validate_name("first name", &new_player.first_name)?;
        let last_name = validate_name("last name", &new_player.last_name)?;
        validate_level(i64::from(new_player.level))?;

        let player = Player {
            id: self.next_id(),
            first_name,
            last_name,
            level: new_player.level,
            is_active: new_player.is_active,
            yellow_cards: 0,
        };
        self.players.push(player.clone());
        Ok(player)
    }

    /// Apply a partial edit. Nothing changes unless every supplied field is valid.
    pub fn update(&mut self, id: PlayerId, update: PlayerUpdate) -> Result<Player, RosterError> {
        let first_name = update
            .first_name
            .as_deref()
            .map(|name| validate_name("first name", name))
            .transpose()?;
        let last_name = update
            .last_name
            .as_deref()
            .map(|name| validate_name("last name", name))
            .transpose()?;
        if let Some(level) = update.level {
            validate_level(i64::from(level))?;
        }

        let player = self.get_mut(id)?;
        if let Some(first_name) = first_name {
            player.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            player.last_name = last_name;
        }
        if let Some(level) = update.level {
            player.level = level;
        }
        if let Some(is_active) = update.is_active {
            player.is_active = is_active;
        }
        Ok(player.clone())
    }

    pub fn remove(&mut self, id: PlayerId) -> Result<Player, RosterError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(RosterError::NotFound { id })?;
        Ok(self.players.remove(index))
    }

    pub fn set_active(&mut self, id: PlayerId, is_active: bool) -> Result<Player, RosterError> {
        let player = self.get_mut(id)?;
        player.is_active = is_active;
        Ok(player.clone())
    }

    /// Book a player. Reaching `yellow_card_limit` also deactivates them.
    pub fn add_yellow_card(
        &mut self,
        id: PlayerId,
        yellow_card_limit: u32,
    ) -> Result<Player, RosterError> {
        let player = self.get_mut(id)?;
        player.yellow_cards = player.yellow_cards.saturating_add(1);
        if player.yellow_cards >= yellow_card_limit {
            player.is_active = false;
        }
        Ok(player.clone())
    }

    /// Clear every player's cards and reactivate them. Returns the player count.
    pub fn reset_yellow_cards(&mut self) -> usize {
        for player in &mut self.players {
            player.yellow_cards = 0;
            player.is_active = true;
        }
        self.players.len()
    }

    pub fn reset_player_yellow_cards(&mut self, id: PlayerId) -> Result<Player, RosterError> {
        let player = self.get_mut(id)?;
        player.yellow_cards = 0;
        player.is_active = true;
        Ok(player.clone())
    }

    /// Remove every player. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.players.len();
        self.players.clear();
        removed
    }

    fn get_mut(&mut self, id: PlayerId) -> Result<&mut Player, RosterError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RosterError::NotFound { id })
    }
}

/// Trim a name, rejecting blanks.
pub(crate) fn validate_name(field: &'static str, value: &str) -> Result<String, RosterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::MissingName { field });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_level(level: i64) -> Result<u8, RosterError> {
    match u8::try_from(level) {
        Ok(level) if (MIN_LEVEL..=MAX_LEVEL).contains(&level) => Ok(level),
        _ => Err(RosterError::InvalidLevel { level }),
    }
}
