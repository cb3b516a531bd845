use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{Command, Store};

use super::helpers::{affected_player, load_config_with_warning, open_store};
use crate::color;

pub(crate) fn handle_add_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let first_name = matches
        .get_one::<String>("first")
        .ok_or("First name is required")?;
    let last_name = matches
        .get_one::<String>("last")
        .ok_or("Last name is required")?;
    let level = *matches.get_one::<u8>("level").ok_or("Level is required")?;
    let is_active = !matches.get_flag("inactive");

    info!(
        event = "cli.add_started",
        level = level,
        is_active = is_active
    );

    let mut store = open_store(load_config_with_warning())?;

    let command = Command::AddPlayer {
        first_name: first_name.clone(),
        last_name: last_name.clone(),
        level,
        is_active,
    };

    match store.dispatch(command) {
        Ok(emitted) => {
            if let Some(player) = affected_player(&emitted) {
                println!(
                    "Added {} {}",
                    color::chalk(&player.full_name()),
                    color::muted(&format!("(id {}, level {})", player.id, player.level))
                );
                if !player.is_active {
                    println!("  {}", color::muted("Marked unavailable."));
                }
                info!(event = "cli.add_completed", player_id = player.id);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not add player:"), e);

            error!(event = "cli.add_failed", error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
