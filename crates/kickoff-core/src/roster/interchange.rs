//! JSON export and import.
//!
//! Export files are a pretty-printed array of players with camelCase keys.
//! Import accepts the same shape, including older files
//! where `isActive` is `0`/`1` and `yellowCards` may be absent.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::roster::collection::{Roster, validate_level, validate_name};
use crate::roster::errors::RosterError;
use crate::roster::store::write_atomically;
use crate::roster::types::{Player, PlayerId, default_active, deserialize_active_flag};

/// One record of an import file. Ids and card counts are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRecord {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    level: i64,
    #[serde(default = "default_active", deserialize_with = "deserialize_active_flag")]
    is_active: bool,
}

/// Write the roster, sorted by name, to `path`. Returns the player count.
pub fn write_export(roster: &Roster, path: &Path) -> Result<usize, RosterError> {
    let players: Vec<Player> = roster.sorted();
    let content = serde_json::to_string_pretty(&players).map_err(|e| RosterError::IoError {
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    write_atomically(path, &content)?;
    Ok(players.len())
}

/// Parse and validate an import file into a fresh roster.
///
/// Every record is re-added with a new id and zero yellow cards. The whole
/// file is validated before anything is returned, so a bad record never
/// leaves a half-imported roster behind.
pub fn read_import(path: &Path) -> Result<Roster, RosterError> {
    let content = fs::read_to_string(path)?;
    let records: Vec<ImportRecord> =
        serde_json::from_str(&content).map_err(|e| RosterError::InvalidImportFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut players = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        let index = i + 1;
        let player =
            build_player(index as PlayerId, record).map_err(|e| RosterError::InvalidImportRecord {
                index,
                message: e.to_string(),
            })?;
        players.push(player);
    }
    Ok(Roster::from_players(players))
}

fn build_player(id: PlayerId, record: ImportRecord) -> Result<Player, RosterError> {
    Ok(Player {
        id,
        first_name: validate_name("first name", &record.first_name)?,
        last_name: validate_name("last name", &record.last_name)?,
        level: validate_level(record.level)?,
        is_active: record.is_active,
        yellow_cards: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::types::NewPlayer;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_export_is_pretty_camel_case_array() {
        let dir = TempDir::new().unwrap();
        let mut roster = Roster::new();
        roster.add(NewPlayer::new("Zoe", "Adams", 6)).unwrap();
        roster.add(NewPlayer::new("Amir", "Said", 8)).unwrap();

        let path = dir.path().join("exports").join("out.json");
        assert_eq!(write_export(&roster, &path).unwrap(), 2);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\"firstName\": \"Amir\""));
        let parsed: Vec<Player> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0].first_name, "Amir");
        assert_eq!(parsed[1].first_name, "Zoe");
    }

    #[test]
    fn test_import_numeric_active_flags() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "numeric.json",
            r#"[
  {"id": 1700000000000, "firstName": "Ada", "lastName": "Keane", "level": 7, "isActive": 1, "yellowCards": 2},
  {"id": 1700000000001, "firstName": "Bo", "lastName": "Lind", "level": 4, "isActive": 0}
]"#,
        );

        let roster = read_import(&path).unwrap();
        assert_eq!(roster.len(), 2);
        let ada = roster.get(1).unwrap();
        assert_eq!(ada.first_name, "Ada");
        assert!(ada.is_active);
        assert_eq!(ada.yellow_cards, 0);
        let bo = roster.get(2).unwrap();
        assert!(!bo.is_active);
    }

    #[test]
    fn test_import_trims_names() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "in.json",
            r#"[{"firstName": " Ada ", "lastName": "Keane ", "level": 7, "isActive": true}]"#,
        );
        let roster = read_import(&path).unwrap();
        assert_eq!(roster.players()[0].full_name(), "Ada Keane");
    }

    #[test]
    fn test_import_rejects_bad_record_with_position() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "in.json",
            r#"[
  {"firstName": "Ada", "lastName": "Keane", "level": 7},
  {"firstName": "Bo", "lastName": "Lind", "level": 14}
]"#,
        );
        let err = read_import(&path).unwrap_err();
        assert!(matches!(
            err,
            RosterError::InvalidImportRecord { index: 2, .. }
        ));
        assert!(err.to_string().contains("Invalid level 14"));
    }

    #[test]
    fn test_import_rejects_missing_name() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "in.json", r#"[{"lastName": "Keane", "level": 7}]"#);
        let err = read_import(&path).unwrap_err();
        assert!(matches!(
            err,
            RosterError::InvalidImportRecord { index: 1, .. }
        ));
    }

    #[test]
    fn test_import_rejects_non_array() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "in.json", r#"{"players": []}"#);
        assert!(matches!(
            read_import(&path).unwrap_err(),
            RosterError::InvalidImportFile { .. }
        ));
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_import(&dir.path().join("absent.json")).unwrap_err(),
            RosterError::IoError { .. }
        ));
    }
}
