use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::{Command, Event, Store};

use super::helpers::{confirm, format_count, load_config_with_warning, open_store};
use crate::color;

pub(crate) fn handle_import_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<PathBuf>("path")
        .ok_or("Import path is required")?
        .clone();
    let force = matches.get_flag("force");

    info!(event = "cli.import_started", path = %path.display(), force = force);

    if !force
        && !confirm(&format!(
            "Replace the roster with players from {}? Current players will be removed.",
            path.display()
        ))?
    {
        println!("Aborted.");
        info!(event = "cli.import_aborted");
        return Ok(());
    }

    let mut store = open_store(load_config_with_warning())?;

    match store.dispatch(Command::ImportRoster { path: path.clone() }) {
        Ok(emitted) => {
            let count = emitted
                .iter()
                .find_map(|event| match event {
                    Event::RosterImported { count } => Some(*count),
                    _ => None,
                })
                .unwrap_or(0);
            println!(
                "Imported {} from {}.",
                color::chalk(&format_count(count)),
                path.display()
            );
            info!(event = "cli.import_completed", count = count);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not import roster:"), e);
            eprintln!("  {}", color::hint("The existing roster was left unchanged."));

            error!(
                event = "cli.import_failed",
                path = %path.display(),
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
