use clap::{Arg, ArgAction, Command};

pub fn teams_command() -> Command {
    Command::new("teams")
        .about("Split eligible players into skill-balanced teams")
        .arg(
            Arg::new("teams")
                .long("teams")
                .short('t')
                .help("Number of teams (defaults to teams.default_count)")
                .value_name("N")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
