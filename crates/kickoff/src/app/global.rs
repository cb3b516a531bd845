use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("kickoff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep a football roster and draw skill-balanced teams")
        .long_about("Kickoff keeps a roster of players with a skill level from 1 to 10, tracks availability and yellow cards, and splits the eligible players into teams whose total levels are as even as possible.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
