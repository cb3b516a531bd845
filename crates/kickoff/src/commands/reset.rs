use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{Command, Event, Store};

use super::helpers::{confirm, format_count, load_config_with_warning, open_store};
use crate::color;

pub(crate) fn handle_reset_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let force = matches.get_flag("force");

    info!(event = "cli.reset_started", force = force);

    if !force && !confirm("Delete every player from the roster? This cannot be undone.")? {
        println!("Aborted.");
        info!(event = "cli.reset_aborted");
        return Ok(());
    }

    let mut store = open_store(load_config_with_warning())?;

    match store.dispatch(Command::ResetRoster) {
        Ok(emitted) => {
            let removed = emitted
                .iter()
                .find_map(|event| match event {
                    Event::RosterReset { removed } => Some(*removed),
                    _ => None,
                })
                .unwrap_or(0);
            println!("Removed {}.", color::chalk(&format_count(removed)));
            info!(event = "cli.reset_completed", removed = removed);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not reset roster:"), e);

            error!(event = "cli.reset_failed", error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
