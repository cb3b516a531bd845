use std::io::{self, Write};

use tracing::{error, warn};

use kickoff_core::events;
use kickoff_core::{CoreStore, Event, KickoffConfig, Player};

use crate::color;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> KickoffConfig {
    match KickoffConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{} Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.kickoff/config.toml and ./.kickoff/config.toml for syntax errors.",
                color::warning("Warning:"),
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            KickoffConfig::default()
        }
    }
}

/// Open the roster store for `config`, reporting failures on stderr.
pub fn open_store(config: KickoffConfig) -> Result<CoreStore, Box<dyn std::error::Error>> {
    CoreStore::open(config).map_err(|e| {
        eprintln!("{} {}", color::error("Could not open roster:"), e);
        error!(event = "cli.store.open_failed", error = %e);
        events::log_app_error(&e);
        e.into()
    })
}

/// Check if user confirmation input indicates acceptance.
/// Accepts "y" or "yes" (case-insensitive).
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

/// Print `prompt` followed by `[y/N]` and read one line from stdin.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(is_confirmation_accepted(&input))
}

pub fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// "1 player", "3 players".
pub fn format_count(count: usize) -> String {
    format!("{} player{}", count, plural(count))
}

/// The player carried by the first player-bearing event.
pub fn affected_player(emitted: &[Event]) -> Option<&Player> {
    emitted.iter().find_map(|event| match event {
        Event::PlayerAdded { player }
        | Event::PlayerUpdated { player }
        | Event::PlayerRemoved { player }
        | Event::ActiveChanged { player }
        | Event::YellowCardIssued { player } => Some(player),
        _ => None,
    })
}
