use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{Command, Event, Store};

use super::helpers::{confirm, format_count, load_config_with_warning, open_store};
use crate::color;

pub(crate) fn handle_reset_cards_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches.get_one::<u64>("id").copied();
    let force = matches.get_flag("force");

    info!(event = "cli.reset_cards_started", player_id = ?id, force = force);

    // Confirmation prompt unless --force or a single player is targeted
    if id.is_none() && !force && !confirm("Clear yellow cards and reactivate every player?")? {
        println!("Aborted.");
        info!(event = "cli.reset_cards_aborted");
        return Ok(());
    }

    let mut store = open_store(load_config_with_warning())?;

    match store.dispatch(Command::ResetYellowCards { id }) {
        Ok(emitted) => {
            for event in &emitted {
                match event {
                    Event::YellowCardsReset { id: Some(id), .. } => {
                        println!("Cleared yellow cards for player {}.", id);
                    }
                    Event::YellowCardsReset { id: None, count } => {
                        println!(
                            "Cleared yellow cards for {}.",
                            color::chalk(&format_count(*count))
                        );
                    }
                    _ => {}
                }
            }
            info!(event = "cli.reset_cards_completed", player_id = ?id);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not reset yellow cards:"), e);

            error!(event = "cli.reset_cards_failed", player_id = ?id, error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
