use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{Command, Event, Store};

use super::helpers::{affected_player, load_config_with_warning, open_store};
use crate::color;

pub(crate) fn handle_card_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = *matches.get_one::<u64>("id").ok_or("Player id is required")?;

    info!(event = "cli.card_started", player_id = id);

    let mut store = open_store(load_config_with_warning())?;
    let limit = store.config().discipline.yellow_card_limit();

    match store.dispatch(Command::IssueYellowCard { id }) {
        Ok(emitted) => {
            if let Some(player) = affected_player(&emitted) {
                println!(
                    "Yellow card for {} {}",
                    color::chalk(&player.full_name()),
                    color::cards(
                        player.yellow_cards,
                        limit,
                        &format!("({}/{})", player.yellow_cards, limit)
                    )
                );
            }

            let blacklisted = emitted
                .iter()
                .any(|event| matches!(event, Event::PlayerBlacklisted { .. }));
            if blacklisted {
                println!(
                    "  {}",
                    color::red_card("Blacklisted: left out of team draws until cards are reset.")
                );
            }

            info!(
                event = "cli.card_completed",
                player_id = id,
                blacklisted = blacklisted
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not book player:"), e);

            error!(event = "cli.card_failed", player_id = id, error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
