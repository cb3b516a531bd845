//! Team-count policy and team sheets built on top of [`crate::balance`].

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::LineupError;
pub use handler::{generate_lineup, max_teams};
pub use types::{Lineup, TeamSheet};
