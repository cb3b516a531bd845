use kickoff_config::KickoffConfig;
use tracing::{debug, error, info};

use crate::roster::handler as roster_ops;
use crate::roster::store::RosterStore;
use crate::roster::types::NewPlayer;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Default Store implementation that routes commands to the roster handlers.
///
/// Holds the resolved roster location and the `KickoffConfig` whose
/// discipline settings decide when a booking blacklists a player.
pub struct CoreStore {
    roster: RosterStore,
    config: KickoffConfig,
}

impl CoreStore {
    pub fn new(roster: RosterStore, config: KickoffConfig) -> Self {
        Self { roster, config }
    }

    /// Store backed by the roster file the config points at.
    pub fn open(config: KickoffConfig) -> Result<Self, DispatchError> {
        let roster = RosterStore::open(&config)?;
        Ok(Self::new(roster, config))
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn config(&self) -> &KickoffConfig {
        &self.config
    }
}

impl Store for CoreStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::AddPlayer {
                first_name,
                last_name,
                level,
                is_active,
            } => {
                let new_player = NewPlayer {
                    first_name,
                    last_name,
                    level,
                    is_active,
                };
                let player = roster_ops::add_player(&self.roster, new_player)?;
                Ok(vec![Event::PlayerAdded { player }])
            }
            Command::UpdatePlayer { id, update } => {
                let player = roster_ops::update_player(&self.roster, id, update)?;
                Ok(vec![Event::PlayerUpdated { player }])
            }
            Command::RemovePlayer { id } => {
                let player = roster_ops::delete_player(&self.roster, id)?;
                Ok(vec![Event::PlayerRemoved { player }])
            }
            Command::SetActive { id, is_active } => {
                let player = roster_ops::set_active(&self.roster, id, is_active)?;
                Ok(vec![Event::ActiveChanged { player }])
            }
            Command::IssueYellowCard { id } => {
                let limit = self.config.discipline.yellow_card_limit();
                let player = roster_ops::increment_yellow_card(&self.roster, id, limit)?;
                let blacklisted = player.is_blacklisted(limit);
                let yellow_cards = player.yellow_cards;
                let mut events = vec![Event::YellowCardIssued { player }];
                if blacklisted {
                    events.push(Event::PlayerBlacklisted { id, yellow_cards });
                }
                Ok(events)
            }
            Command::ResetYellowCards { id: Some(id) } => {
                roster_ops::reset_player_yellow_cards(&self.roster, id)?;
                Ok(vec![Event::YellowCardsReset {
                    id: Some(id),
                    count: 1,
                }])
            }
            Command::ResetYellowCards { id: None } => {
                let count = roster_ops::reset_yellow_cards(&self.roster)?;
                Ok(vec![Event::YellowCardsReset { id: None, count }])
            }
            Command::ImportRoster { path } => {
                let count = roster_ops::import_roster(&self.roster, &path)?;
                Ok(vec![Event::RosterImported { count }])
            }
            Command::ResetRoster => {
                let removed = roster_ops::reset_roster(&self.roster)?;
                Ok(vec![Event::RosterReset { removed }])
            }
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::errors::RosterError;
    use tempfile::TempDir;

    fn setup() -> (TempDir, CoreStore) {
        let dir = TempDir::new().unwrap();
        let roster = RosterStore::at(dir.path().join("roster.json"));
        (dir, CoreStore::new(roster, KickoffConfig::default()))
    }

    fn add(store: &mut CoreStore, first: &str, level: u8) -> Vec<Event> {
        store
            .dispatch(Command::AddPlayer {
                first_name: first.to_string(),
                last_name: "Test".to_string(),
                level,
                is_active: true,
            })
            .unwrap()
    }

    #[test]
    fn test_core_store_implements_store_trait() {
        fn assert_store<T: Store>(_s: &T) {}
        let (_dir, store) = setup();
        assert_store(&store);
    }

    #[test]
    fn test_add_player_emits_event() {
        let (_dir, mut store) = setup();
        let events = add(&mut store, "Ada", 7);
        assert_eq!(events.len(), 1);
        let Event::PlayerAdded { player } = &events[0] else {
            panic!("expected PlayerAdded, got {:?}", events[0]);
        };
        assert_eq!(player.id, 1);
        assert_eq!(player.first_name, "Ada");
    }

    #[test]
    fn test_third_card_emits_blacklisted() {
        let (_dir, mut store) = setup();
        add(&mut store, "Ada", 7);

        for _ in 0..2 {
            let events = store.dispatch(Command::IssueYellowCard { id: 1 }).unwrap();
            assert_eq!(events.len(), 1);
        }
        let events = store.dispatch(Command::IssueYellowCard { id: 1 }).unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::YellowCardIssued { .. }));
        assert_eq!(
            events[1],
            Event::PlayerBlacklisted {
                id: 1,
                yellow_cards: 3
            }
        );
    }

    #[test]
    fn test_card_limit_comes_from_config() {
        let dir = TempDir::new().unwrap();
        let mut config = KickoffConfig::default();
        config.discipline.yellow_card_limit = Some(1);
        let mut store = CoreStore::new(RosterStore::at(dir.path().join("roster.json")), config);
        add(&mut store, "Ada", 7);

        let events = store.dispatch(Command::IssueYellowCard { id: 1 }).unwrap();
        assert!(matches!(events.last(), Some(Event::PlayerBlacklisted { .. })));
    }

    #[test]
    fn test_reset_cards_single_and_all() {
        let (_dir, mut store) = setup();
        add(&mut store, "Ada", 7);
        add(&mut store, "Bo", 4);

        let events = store
            .dispatch(Command::ResetYellowCards { id: Some(2) })
            .unwrap();
        assert_eq!(
            events,
            vec![Event::YellowCardsReset {
                id: Some(2),
                count: 1
            }]
        );

        let events = store.dispatch(Command::ResetYellowCards { id: None }).unwrap();
        assert_eq!(events, vec![Event::YellowCardsReset { id: None, count: 2 }]);
    }

    #[test]
    fn test_missing_player_returns_roster_error() {
        let (_dir, mut store) = setup();
        let err = store.dispatch(Command::RemovePlayer { id: 9 }).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Roster {
                source: RosterError::NotFound { id: 9 }
            }
        ));
    }

    #[test]
    fn test_reset_roster_reports_removed() {
        let (_dir, mut store) = setup();
        add(&mut store, "Ada", 7);
        add(&mut store, "Bo", 4);
        let events = store.dispatch(Command::ResetRoster).unwrap();
        assert_eq!(events, vec![Event::RosterReset { removed: 2 }]);
    }
}
