use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::roster_ops;
use kickoff_core::{Player, PlayerStatus};

use super::helpers::{format_count, load_config_with_warning, open_store};
use super::json_types::ListResponse;
use crate::color;
use crate::table::TableFormatter;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let status_filter = matches
        .get_one::<String>("status")
        .map(|s| s.parse::<PlayerStatus>())
        .transpose()?;

    info!(
        event = "cli.list_started",
        json_output = json_output,
        status = ?status_filter
    );

    let store = open_store(load_config_with_warning())?;
    let limit = store.config().discipline.yellow_card_limit();

    let players = match roster_ops::list_players(store.roster()) {
        Ok(players) => players,
        Err(e) => {
            eprintln!("{} {}", color::error("Could not list players:"), e);

            error!(event = "cli.list_failed", error = %e);

            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let shown: Vec<&Player> = players
        .iter()
        .filter(|p| status_filter.is_none_or(|status| p.status(limit) == status))
        .collect();

    if json_output {
        let response = ListResponse::new(&shown, limit);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if shown.is_empty() {
        match status_filter {
            Some(status) => println!("No {} players.", status),
            None => println!("No players yet. Add one with `kickoff add <first> <last> --level N`."),
        }
    } else {
        let rows: Vec<Player> = shown.iter().map(|p| (*p).clone()).collect();
        let formatter = TableFormatter::new(&rows, limit);
        formatter.print_table(&rows);
        println!("{}", summary_line(&players, limit));
    }

    info!(event = "cli.list_completed", count = shown.len());
    Ok(())
}

/// "5 players: 3 active, 1 inactive, 1 blacklisted"
fn summary_line(players: &[Player], limit: u32) -> String {
    let count = |status: PlayerStatus| {
        players
            .iter()
            .filter(|p| p.status(limit) == status)
            .count()
    };
    format!(
        "{}: {} active, {} inactive, {} blacklisted",
        format_count(players.len()),
        count(PlayerStatus::Active),
        count(PlayerStatus::Inactive),
        count(PlayerStatus::Blacklisted)
    )
}
