use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{Command, Store};

use super::helpers::{affected_player, load_config_with_warning, open_store};
use crate::color;

pub(crate) fn handle_remove_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = *matches.get_one::<u64>("id").ok_or("Player id is required")?;

    info!(event = "cli.remove_started", player_id = id);

    let mut store = open_store(load_config_with_warning())?;

    match store.dispatch(Command::RemovePlayer { id }) {
        Ok(emitted) => {
            if let Some(player) = affected_player(&emitted) {
                println!(
                    "Removed {} {}",
                    color::chalk(&player.full_name()),
                    color::muted(&format!("(id {})", player.id))
                );
            }
            info!(event = "cli.remove_completed", player_id = id);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not remove player:"), e);

            error!(event = "cli.remove_failed", player_id = id, error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
