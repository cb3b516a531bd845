use clap::{Arg, ArgAction, Command};

fn id_arg(help: &'static str) -> Arg {
    Arg::new("id")
        .help(help)
        .required(true)
        .index(1)
        .value_parser(clap::value_parser!(u64))
}

fn level_arg() -> Arg {
    Arg::new("level")
        .long("level")
        .short('l')
        .help("Skill level from 1 to 10")
        .value_name("LEVEL")
        .value_parser(clap::value_parser!(u8))
}

pub fn add_command() -> Command {
    Command::new("add")
        .about("Add a player to the roster")
        .arg(
            Arg::new("first")
                .help("First name")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("last")
                .help("Last name")
                .required(true)
                .index(2),
        )
        .arg(level_arg().required(true))
        .arg(
            Arg::new("inactive")
                .long("inactive")
                .help("Add the player as unavailable")
                .action(ArgAction::SetTrue),
        )
}

pub fn edit_command() -> Command {
    Command::new("edit")
        .about("Change a player's name, level or availability")
        .arg(id_arg("Player id"))
        .arg(
            Arg::new("first")
                .long("first")
                .help("New first name")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("last")
                .long("last")
                .help("New last name")
                .value_name("NAME"),
        )
        .arg(level_arg())
        .arg(
            Arg::new("active")
                .long("active")
                .help("Set availability (true or false)")
                .value_name("BOOL")
                .value_parser(clap::value_parser!(bool)),
        )
}

pub fn remove_command() -> Command {
    Command::new("remove")
        .about("Remove a player from the roster")
        .arg(id_arg("Player id"))
}

pub fn list_command() -> Command {
    Command::new("list")
        .about("List players, sorted by name")
        .arg(
            Arg::new("status")
                .long("status")
                .short('s')
                .help("Only show players in this bucket")
                .value_parser(["active", "inactive", "blacklisted"]),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}

pub fn activate_command() -> Command {
    Command::new("activate")
        .about("Mark a player as available")
        .arg(id_arg("Player id"))
}

pub fn deactivate_command() -> Command {
    Command::new("deactivate")
        .about("Mark a player as unavailable")
        .arg(id_arg("Player id"))
}

pub fn card_command() -> Command {
    Command::new("card")
        .about("Book a player with a yellow card")
        .arg(id_arg("Player id"))
}

pub fn reset_cards_command() -> Command {
    Command::new("reset-cards")
        .about("Clear yellow cards for one player, or for everyone")
        .arg(
            Arg::new("id")
                .help("Player id (omit to reset every player)")
                .index(1)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .short('f')
                .help("Skip the confirmation prompt")
                .action(ArgAction::SetTrue),
        )
}
