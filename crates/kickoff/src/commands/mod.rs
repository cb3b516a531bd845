use clap::ArgMatches;
use tracing::error;

use kickoff_core::events;

mod add;
mod availability;
mod card;
mod completions;
mod edit;
mod export;
mod helpers;
mod import;
mod json_types;
mod list;
mod remove;
mod reset;
mod reset_cards;
mod teams;

use add::handle_add_command;
use availability::handle_availability_command;
use card::handle_card_command;
use completions::handle_completions_command;
use edit::handle_edit_command;
use export::handle_export_command;
use import::handle_import_command;
use list::handle_list_command;
use remove::handle_remove_command;
use reset::handle_reset_command;
use reset_cards::handle_reset_cards_command;
use teams::handle_teams_command;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("add", sub_matches)) => handle_add_command(sub_matches),
        Some(("edit", sub_matches)) => handle_edit_command(sub_matches),
        Some(("remove", sub_matches)) => handle_remove_command(sub_matches),
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("activate", sub_matches)) => handle_availability_command(sub_matches, true),
        Some(("deactivate", sub_matches)) => handle_availability_command(sub_matches, false),
        Some(("card", sub_matches)) => handle_card_command(sub_matches),
        Some(("reset-cards", sub_matches)) => handle_reset_cards_command(sub_matches),
        Some(("teams", sub_matches)) => handle_teams_command(sub_matches),
        Some(("export", sub_matches)) => handle_export_command(sub_matches),
        Some(("import", sub_matches)) => handle_import_command(sub_matches),
        Some(("reset", sub_matches)) => handle_reset_command(sub_matches),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
