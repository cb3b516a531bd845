/// Fewest teams a lineup can be split into.
pub const MIN_TEAM_COUNT: u32 = 2;

pub const DEFAULT_TEAM_COUNT: u32 = 2;

/// Absolute ceiling on team count, regardless of roster size.
pub const DEFAULT_MAX_TEAM_COUNT: u32 = 6;

pub const DEFAULT_MIN_PLAYERS_PER_TEAM: u32 = 2;

/// Yellow cards at which a player is blacklisted.
pub const DEFAULT_YELLOW_CARD_LIMIT: u32 = 3;
