pub mod collection;
pub mod errors;
pub mod handler;
pub mod interchange;
pub mod store;
pub mod types;

pub use collection::Roster;
pub use errors::RosterError;
pub use store::RosterStore;
pub use types::{MAX_LEVEL, MIN_LEVEL, NewPlayer, Player, PlayerId, PlayerStatus, PlayerUpdate};
