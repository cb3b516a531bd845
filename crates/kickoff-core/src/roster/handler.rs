use std::path::Path;

use tracing::{info, warn};

use crate::roster::errors::RosterError;
use crate::roster::interchange;
use crate::roster::store::RosterStore;
use crate::roster::types::{NewPlayer, Player, PlayerId, PlayerUpdate};

/// All players, ordered by first name then last name.
pub fn list_players(store: &RosterStore) -> Result<Vec<Player>, RosterError> {
    let roster = store.load()?;
    info!(event = "core.roster.list_completed", count = roster.len());
    Ok(roster.sorted())
}

pub fn get_player(store: &RosterStore, id: PlayerId) -> Result<Player, RosterError> {
    store
        .load()?
        .get(id)
        .cloned()
        .ok_or(RosterError::NotFound { id })
}

pub fn add_player(store: &RosterStore, new_player: NewPlayer) -> Result<Player, RosterError> {
    info!(
        event = "core.roster.add_started",
        level = new_player.level,
        is_active = new_player.is_active
    );

    let mut roster = store.load()?;
    let player = roster.add(new_player)?;
    store.save(&roster)?;

    info!(
        event = "core.roster.player_added",
        player_id = player.id,
        name = %player.full_name()
    );
    Ok(player)
}

pub fn update_player(
    store: &RosterStore,
    id: PlayerId,
    update: PlayerUpdate,
) -> Result<Player, RosterError> {
    info!(event = "core.roster.update_started", player_id = id);

    let mut roster = store.load()?;
    let player = roster.update(id, update)?;
    store.save(&roster)?;

    info!(event = "core.roster.player_updated", player_id = id);
    Ok(player)
}

pub fn delete_player(store: &RosterStore, id: PlayerId) -> Result<Player, RosterError> {
    let mut roster = store.load()?;
    let player = roster.remove(id)?;
    store.save(&roster)?;

    info!(
        event = "core.roster.player_deleted",
        player_id = id,
        name = %player.full_name()
    );
    Ok(player)
}

pub fn set_active(store: &RosterStore, id: PlayerId, is_active: bool) -> Result<Player, RosterError> {
    let mut roster = store.load()?;
    let player = roster.set_active(id, is_active)?;
    store.save(&roster)?;

    info!(
        event = "core.roster.active_changed",
        player_id = id,
        is_active = is_active
    );
    Ok(player)
}

/// Add a yellow card. The player is deactivated once the count reaches `limit`.
pub fn increment_yellow_card(
    store: &RosterStore,
    id: PlayerId,
    limit: u32,
) -> Result<Player, RosterError> {
    let mut roster = store.load()?;
    let player = roster.add_yellow_card(id, limit)?;
    store.save(&roster)?;

    if player.is_blacklisted(limit) {
        warn!(
            event = "core.roster.player_blacklisted",
            player_id = id,
            yellow_cards = player.yellow_cards,
            limit = limit
        );
    } else {
        info!(
            event = "core.roster.yellow_card_added",
            player_id = id,
            yellow_cards = player.yellow_cards
        );
    }
    Ok(player)
}

/// Clear all yellow cards and reactivate every player. Returns the player count.
pub fn reset_yellow_cards(store: &RosterStore) -> Result<usize, RosterError> {
    let mut roster = store.load()?;
    let count = roster.reset_yellow_cards();
    store.save(&roster)?;

    info!(event = "core.roster.yellow_cards_reset", count = count);
    Ok(count)
}

pub fn reset_player_yellow_cards(store: &RosterStore, id: PlayerId) -> Result<Player, RosterError> {
    let mut roster = store.load()?;
    let player = roster.reset_player_yellow_cards(id)?;
    store.save(&roster)?;

    info!(event = "core.roster.player_yellow_cards_reset", player_id = id);
    Ok(player)
}

/// Remove every player. Returns how many were removed.
pub fn reset_roster(store: &RosterStore) -> Result<usize, RosterError> {
    let mut roster = store.load()?;
    let removed = roster.clear();
    store.save(&roster)?;

    warn!(event = "core.roster.reset_completed", removed = removed);
    Ok(removed)
}

pub fn export_roster(store: &RosterStore, path: &Path) -> Result<usize, RosterError> {
    let roster = store.load()?;
    let count = interchange::write_export(&roster, path)?;

    info!(
        event = "core.roster.export_completed",
        path = %path.display(),
        count = count
    );
    Ok(count)
}

/// Replace the roster with the contents of an import file.
///
/// The existing roster is untouched if the file fails validation.
pub fn import_roster(store: &RosterStore, path: &Path) -> Result<usize, RosterError> {
    info!(event = "core.roster.import_started", path = %path.display());

    let imported = interchange::read_import(path).inspect_err(|e| {
        warn!(
            event = "core.roster.import_rejected",
            path = %path.display(),
            error = %e
        );
    })?;
    store.save(&imported)?;

    info!(event = "core.roster.import_completed", count = imported.len());
    Ok(imported.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, RosterStore) {
        let dir = TempDir::new().unwrap();
        let store = RosterStore::at(dir.path().join("roster.json"));
        (dir, store)
    }

    fn seed(store: &RosterStore) {
        add_player(store, NewPlayer::new("Zoe", "Adams", 6)).unwrap();
        add_player(store, NewPlayer::new("Amir", "Said", 8)).unwrap();
        add_player(store, NewPlayer::new("Lena", "Ortiz", 5).inactive()).unwrap();
    }

    #[test]
    fn test_add_persists() {
        let (_dir, store) = setup();
        let player = add_player(&store, NewPlayer::new("Ada", "Keane", 7)).unwrap();
        assert_eq!(player.id, 1);
        assert_eq!(get_player(&store, 1).unwrap(), player);
    }

    #[test]
    fn test_list_sorted() {
        let (_dir, store) = setup();
        seed(&store);
        let names: Vec<String> = list_players(&store)
            .unwrap()
            .iter()
            .map(|p| p.first_name.clone())
            .collect();
        assert_eq!(names, vec!["Amir", "Lena", "Zoe"]);
    }

    #[test]
    fn test_failed_add_does_not_write() {
        let (_dir, store) = setup();
        assert!(add_player(&store, NewPlayer::new("", "Keane", 7)).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_update_and_delete() {
        let (_dir, store) = setup();
        seed(&store);
        let updated = update_player(
            &store,
            2,
            PlayerUpdate {
                last_name: Some("Saeed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.last_name, "Saeed");

        let removed = delete_player(&store, 2).unwrap();
        assert_eq!(removed.full_name(), "Amir Saeed");
        assert!(matches!(
            get_player(&store, 2),
            Err(RosterError::NotFound { id: 2 })
        ));
        assert!(matches!(
            delete_player(&store, 2),
            Err(RosterError::NotFound { id: 2 })
        ));
    }

    #[test]
    fn test_cards_blacklist_and_reset() {
        let (_dir, store) = setup();
        seed(&store);
        for _ in 0..2 {
            increment_yellow_card(&store, 1, 3).unwrap();
        }
        let booked = increment_yellow_card(&store, 1, 3).unwrap();
        assert!(!booked.is_active);
        assert!(booked.is_blacklisted(3));

        let reset = reset_player_yellow_cards(&store, 1).unwrap();
        assert!(reset.is_active);
        assert_eq!(reset.yellow_cards, 0);
    }

    #[test]
    fn test_reset_all_cards_reactivates_inactive() {
        let (_dir, store) = setup();
        seed(&store);
        increment_yellow_card(&store, 2, 3).unwrap();
        assert_eq!(reset_yellow_cards(&store).unwrap(), 3);
        assert!(
            list_players(&store)
                .unwrap()
                .iter()
                .all(|p| p.is_active && p.yellow_cards == 0)
        );
    }

    #[test]
    fn test_set_active() {
        let (_dir, store) = setup();
        seed(&store);
        assert!(set_active(&store, 3, true).unwrap().is_active);
        assert!(!set_active(&store, 3, false).unwrap().is_active);
    }

    #[test]
    fn test_reset_roster() {
        let (_dir, store) = setup();
        seed(&store);
        assert_eq!(reset_roster(&store).unwrap(), 3);
        assert!(list_players(&store).unwrap().is_empty());
    }

    #[test]
    fn test_export_then_import_restores_players() {
        let (dir, store) = setup();
        seed(&store);
        increment_yellow_card(&store, 1, 3).unwrap();
        let export_path = dir.path().join("export.json");
        assert_eq!(export_roster(&store, &export_path).unwrap(), 3);

        reset_roster(&store).unwrap();
        assert_eq!(import_roster(&store, &export_path).unwrap(), 3);

        let players = list_players(&store).unwrap();
        let names: Vec<String> = players.iter().map(Player::full_name).collect();
        assert_eq!(names, vec!["Amir Said", "Lena Ortiz", "Zoe Adams"]);
        assert!(players.iter().all(|p| p.yellow_cards == 0));
        let lena = players.iter().find(|p| p.first_name == "Lena").unwrap();
        assert!(!lena.is_active);
    }

    #[test]
    fn test_rejected_import_keeps_existing_roster() {
        let (dir, store) = setup();
        seed(&store);
        let before = fs::read_to_string(store.path()).unwrap();

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"[{"firstName": "X", "lastName": "Y", "level": 0}]"#).unwrap();
        assert!(import_roster(&store, &bad).is_err());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_corrupt_roster_blocks_mutation() {
        let (_dir, store) = setup();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(
            add_player(&store, NewPlayer::new("Ada", "Keane", 7)),
            Err(RosterError::Malformed { .. })
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
    }
}
