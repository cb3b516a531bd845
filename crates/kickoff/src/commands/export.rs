use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use kickoff_core::events;
use kickoff_core::roster_ops;
use kickoff_paths::KickoffPaths;

use super::helpers::{format_count, load_config_with_warning, open_store};
use crate::color;

pub(crate) fn handle_export_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = match matches.get_one::<PathBuf>("path") {
        Some(path) => path.clone(),
        None => match KickoffPaths::resolve() {
            Ok(paths) => paths.default_export_file(),
            Err(e) => {
                eprintln!("{} {}", color::error("Could not resolve export path:"), e);
                error!(event = "cli.export_failed", error = %e);
                events::log_app_error(&e);
                return Err(e.into());
            }
        },
    };

    info!(event = "cli.export_started", path = %path.display());

    let store = open_store(load_config_with_warning())?;

    match roster_ops::export_roster(store.roster(), &path) {
        Ok(count) => {
            println!(
                "Exported {} to {}",
                color::chalk(&format_count(count)),
                path.display()
            );
            info!(event = "cli.export_completed", count = count);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", color::error("Could not export roster:"), e);

            error!(
                event = "cli.export_failed",
                path = %path.display(),
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
