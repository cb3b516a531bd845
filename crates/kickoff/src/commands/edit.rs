use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{Command, PlayerUpdate, Store};

use super::helpers::{affected_player, load_config_with_warning, open_store};
use crate::color;

pub(crate) fn handle_edit_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = *matches.get_one::<u64>("id").ok_or("Player id is required")?;

    let update = PlayerUpdate {
        first_name: matches.get_one::<String>("first").cloned(),
        last_name: matches.get_one::<String>("last").cloned(),
        level: matches.get_one::<u8>("level").copied(),
        is_active: matches.get_one::<bool>("active").copied(),
    };

    if update.is_empty() {
        eprintln!(
            "{} pass at least one of --first, --last, --level or --active.",
            color::error("Nothing to change:")
        );
        return Err("No fields to update".into());
    }

    info!(event = "cli.edit_started", player_id = id);

    let mut store = open_store(load_config_with_warning())?;

    match store.dispatch(Command::UpdatePlayer { id, update }) {
        Ok(emitted) => {
            if let Some(player) = affected_player(&emitted) {
                let availability = if player.is_active {
                    "available"
                } else {
                    "unavailable"
                };
                println!(
                    "Updated {} {}",
                    color::chalk(&player.full_name()),
                    color::muted(&format!(
                        "(id {}, level {}, {})",
                        player.id, player.level, availability
                    ))
                );
            }
            info!(event = "cli.edit_completed", player_id = id);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not edit player:"), e);

            error!(event = "cli.edit_failed", player_id = id, error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
