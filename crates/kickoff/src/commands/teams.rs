use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{LineupError, lineup_ops, roster_ops};

use super::helpers::{load_config_with_warning, open_store};
use super::json_types::TeamsResponse;
use crate::color;
use crate::table::print_team_sheet;

pub(crate) fn handle_teams_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let store = open_store(load_config_with_warning())?;
    let config = store.config();
    let requested = matches
        .get_one::<u32>("teams")
        .copied()
        .unwrap_or_else(|| config.teams.default_count());

    info!(
        event = "cli.teams_started",
        requested = requested,
        json_output = json_output
    );

    let players = match roster_ops::list_players(store.roster()) {
        Ok(players) => players,
        Err(e) => {
            eprintln!("{} {}", color::error("Could not load roster:"), e);

            error!(event = "cli.teams_failed", error = %e);

            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let lineup = match lineup_ops::generate_lineup(&players, requested, config) {
        Ok(lineup) => lineup,
        Err(e) => {
            eprintln!("{} {}", color::error("Could not generate teams:"), e);
            if let Some(hint) = recovery_hint(&e) {
                eprintln!("  {}", color::hint(hint));
            }

            error!(
                event = "cli.teams_failed",
                requested = requested,
                error = %e
            );

            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        let response = TeamsResponse::from(&lineup);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for (i, team) in lineup.teams.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_team_sheet(team);
        }
        println!();
        println!(
            "{}",
            color::muted(&format!(
                "{} eligible players · spread {}",
                lineup.eligible_count,
                lineup.spread()
            ))
        );
    }

    info!(
        event = "cli.teams_completed",
        teams = lineup.teams.len(),
        spread = lineup.spread(),
        passes = lineup.passes
    );
    Ok(())
}

fn recovery_hint(error: &LineupError) -> Option<&'static str> {
    match error {
        LineupError::NoEligiblePlayers => {
            Some("Activate players or clear yellow cards with `kickoff reset-cards`.")
        }
        LineupError::TeamCountOutOfRange { .. } => Some("Pick a different count with --teams."),
        LineupError::NotEnoughPlayers { .. } => None,
    }
}
