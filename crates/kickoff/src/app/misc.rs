use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

fn force_arg() -> Arg {
    Arg::new("force")
        .long("force")
        .short('f')
        .help("Skip the confirmation prompt")
        .action(ArgAction::SetTrue)
}

pub fn export_command() -> Command {
    Command::new("export")
        .about("Write the roster to a JSON file")
        .arg(
            Arg::new("path")
                .help("Destination file (defaults to ~/.kickoff/exports/kickoff_export.json)")
                .index(1)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
}

pub fn import_command() -> Command {
    Command::new("import")
        .about("Replace the roster with players from a JSON file")
        .arg(
            Arg::new("path")
                .help("JSON array of players")
                .required(true)
                .index(1)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(force_arg())
}

pub fn reset_command() -> Command {
    Command::new("reset")
        .about("Delete every player from the roster")
        .arg(force_arg())
}

pub fn completions_command() -> Command {
    Command::new("completions")
        .about("Generate shell completion scripts")
        .arg(
            Arg::new("shell")
                .help("Target shell")
                .required(true)
                .index(1)
                .value_parser(clap::value_parser!(Shell)),
        )
}
