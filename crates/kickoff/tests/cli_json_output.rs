//! Integration tests for `--json` output.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn run_json(home: &Path, args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_kickoff"))
        .args(args)
        .env("KICKOFF_HOME", home)
        .env_remove("RUST_LOG")
        .current_dir(home)
        .output()
        .expect("Failed to execute kickoff");

    assert!(
        output.status.success(),
        "kickoff {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not valid JSON ({}): {}",
            e,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn add(home: &Path, first: &str, last: &str, level: &str) {
    let status = Command::new(env!("CARGO_BIN_EXE_kickoff"))
        .args(["add", first, last, "--level", level])
        .env("KICKOFF_HOME", home)
        .env_remove("RUST_LOG")
        .current_dir(home)
        .status()
        .expect("Failed to execute kickoff add");
    assert!(status.success());
}

#[test]
fn test_list_json_fields() {
    let home = TempDir::new().unwrap();
    add(home.path(), "Ada", "Keane", "9");

    let value = run_json(home.path(), &["list", "--json"]);
    assert_eq!(value["total"], 1);
    assert_eq!(value["yellow_card_limit"], 3);

    let player = &value["players"][0];
    assert_eq!(player["id"], 1);
    assert_eq!(player["firstName"], "Ada");
    assert_eq!(player["lastName"], "Keane");
    assert_eq!(player["level"], 9);
    assert_eq!(player["isActive"], true);
    assert_eq!(player["yellowCards"], 0);
    assert_eq!(player["status"], "active");
}

#[test]
fn test_list_json_status_filter() {
    let home = TempDir::new().unwrap();
    add(home.path(), "Ada", "Keane", "9");
    add(home.path(), "Bo", "Lind", "4");

    let status = Command::new(env!("CARGO_BIN_EXE_kickoff"))
        .args(["deactivate", "2"])
        .env("KICKOFF_HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path())
        .status()
        .unwrap();
    assert!(status.success());

    let value = run_json(home.path(), &["list", "--status", "inactive", "--json"]);
    assert_eq!(value["total"], 1);
    assert_eq!(value["players"][0]["firstName"], "Bo");
    assert_eq!(value["players"][0]["status"], "inactive");
}

#[test]
fn test_teams_json_is_balanced() {
    let home = TempDir::new().unwrap();
    for (first, level) in [("Ada", "9"), ("Bo", "7"), ("Cy", "5"), ("Di", "3")] {
        add(home.path(), first, "Test", level);
    }

    let value = run_json(home.path(), &["teams", "--json"]);
    let teams = value["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(value["eligible_count"], 4);

    let totals: Vec<i64> = teams
        .iter()
        .map(|t| t["total_level"].as_i64().unwrap())
        .collect();
    assert_eq!(totals.iter().sum::<i64>(), 24);
    assert_eq!(value["spread"], (totals[0] - totals[1]).abs());

    for team in teams {
        assert_eq!(team["players"].as_array().unwrap().len(), 2);
    }
    assert_eq!(teams[0]["number"], 1);
    assert_eq!(teams[1]["number"], 2);
}

#[test]
fn test_teams_json_three_teams_uses_every_player() {
    let home = TempDir::new().unwrap();
    for (i, level) in ["10", "9", "8", "6", "5", "4", "3", "2", "1"].iter().enumerate() {
        add(home.path(), &format!("P{}", i), "Test", level);
    }

    let value = run_json(home.path(), &["teams", "-t", "3", "--json"]);
    let teams = value["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 3);

    let mut ids: Vec<u64> = teams
        .iter()
        .flat_map(|t| t["players"].as_array().unwrap().iter())
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=9).collect::<Vec<u64>>());
}
