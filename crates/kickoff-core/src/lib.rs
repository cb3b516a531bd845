//! kickoff-core: Core library for roster management and balanced team generation
//!
//! This library holds the business logic behind the `kickoff` CLI: the player
//! roster, the team-count policy, and the skill-balancing engine.
//!
//! # Main Entry Points
//!
//! - [`balance`] - Partition rated players into skill-balanced teams
//! - [`lineup`] - Eligibility filtering and team sheets for a session
//! - [`roster`] - Add, edit, book, import and export players
//! - [`state`] - Command/event dispatch over the roster

pub mod balance;
pub mod errors;
pub mod events;
pub mod lineup;
pub mod logging;
pub mod roster;
pub mod state;

pub use balance::{MAX_PASSES, Partition, Rated, generate_teams, partition, team_total};
pub use errors::{KickoffError, KickoffResult};
pub use kickoff_config::{ConfigError, KickoffConfig};
pub use lineup::{Lineup, LineupError, TeamSheet};
pub use logging::init_logging;
pub use roster::{
    NewPlayer, Player, PlayerId, PlayerStatus, PlayerUpdate, Roster, RosterError, RosterStore,
};
pub use state::{Command, CoreStore, DispatchError, Event, Store};

/// Roster operations: `kickoff_core::roster_ops::add_player(...)`.
pub use roster::handler as roster_ops;

/// Lineup operations: `kickoff_core::lineup_ops::generate_lineup(...)`.
pub use lineup::handler as lineup_ops;
