use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{Command, Store};

use super::helpers::{affected_player, load_config_with_warning, open_store};
use crate::color;

/// `kickoff activate <id>` and `kickoff deactivate <id>`.
pub(crate) fn handle_availability_command(
    matches: &ArgMatches,
    is_active: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = *matches.get_one::<u64>("id").ok_or("Player id is required")?;

    info!(
        event = "cli.availability_started",
        player_id = id,
        is_active = is_active
    );

    let mut store = open_store(load_config_with_warning())?;
    let limit = store.config().discipline.yellow_card_limit();

    match store.dispatch(Command::SetActive { id, is_active }) {
        Ok(emitted) => {
            if let Some(player) = affected_player(&emitted) {
                let state = if is_active {
                    color::grass("available")
                } else {
                    color::muted("unavailable")
                };
                println!("{} is now {}.", color::chalk(&player.full_name()), state);

                if is_active && player.is_blacklisted(limit) {
                    println!(
                        "  {}",
                        color::red_card(&format!(
                            "Still blacklisted with {}/{} yellow cards. Run `kickoff reset-cards {}` to clear them.",
                            player.yellow_cards, limit, player.id
                        ))
                    );
                }
            }
            info!(event = "cli.availability_completed", player_id = id);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not change availability:"), e);

            error!(
                event = "cli.availability_failed",
                player_id = id,
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
