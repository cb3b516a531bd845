mod global;
mod misc;
mod roster;
mod teams;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(roster::add_command())
        .subcommand(roster::edit_command())
        .subcommand(roster::remove_command())
        .subcommand(roster::list_command())
        .subcommand(roster::activate_command())
        .subcommand(roster::deactivate_command())
        .subcommand(roster::card_command())
        .subcommand(roster::reset_cards_command())
        .subcommand(teams::teams_command())
        .subcommand(misc::export_command())
        .subcommand(misc::import_command())
        .subcommand(misc::reset_command())
        .subcommand(misc::completions_command())
}
