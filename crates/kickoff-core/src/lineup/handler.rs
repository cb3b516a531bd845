use kickoff_config::{KickoffConfig, MIN_TEAM_COUNT, TeamsConfig};
use tracing::{info, warn};

use crate::balance::{self, team_total};
use crate::lineup::errors::LineupError;
use crate::lineup::types::{Lineup, TeamSheet};
use crate::roster::types::Player;

/// Largest team count the current pool supports.
///
/// Capped by `teams.max_count` and by how many teams of
/// `teams.min_players_per_team` the pool can fill. Never below 2.
pub fn max_teams(eligible: usize, teams: &TeamsConfig) -> u32 {
    let per_team = teams.min_players_per_team().max(1) as usize;
    let by_players = u32::try_from(eligible / per_team).unwrap_or(u32::MAX);
    teams.max_count().min(by_players).max(MIN_TEAM_COUNT)
}

/// Split the eligible players of `players` into `requested` balanced teams.
///
/// Eligibility (active, under the yellow-card limit) and roster order decide
/// the draw pool. Checks run in order: empty pool, team-count range, pool
/// size.
pub fn generate_lineup(
    players: &[Player],
    requested: u32,
    config: &KickoffConfig,
) -> Result<Lineup, LineupError> {
    let limit = config.discipline.yellow_card_limit();
    let eligible: Vec<&Player> = players.iter().filter(|p| p.is_eligible(limit)).collect();

    info!(
        event = "core.lineup.generate_started",
        requested = requested,
        eligible = eligible.len(),
        roster = players.len()
    );

    if eligible.is_empty() {
        warn!(event = "core.lineup.no_eligible_players");
        return Err(LineupError::NoEligiblePlayers);
    }

    let max = max_teams(eligible.len(), &config.teams);
    if requested < MIN_TEAM_COUNT || requested > max {
        return Err(LineupError::TeamCountOutOfRange {
            requested,
            min: MIN_TEAM_COUNT,
            max,
        });
    }

    if eligible.len() < requested as usize {
        return Err(LineupError::NotEnoughPlayers {
            requested,
            eligible: eligible.len(),
        });
    }

    let num_teams = i32::try_from(requested).map_err(|_| LineupError::TeamCountOutOfRange {
        requested,
        min: MIN_TEAM_COUNT,
        max,
    })?;
    let partition = balance::partition(&eligible, num_teams);
    if !partition.converged() {
        warn!(
            event = "core.lineup.refinement_capped",
            passes = partition.passes()
        );
    }

    let passes = partition.passes();
    let teams: Vec<TeamSheet> = partition
        .into_teams()
        .into_iter()
        .enumerate()
        .map(|(i, members)| {
            let players: Vec<Player> = members.into_iter().map(|m| eligible[m].clone()).collect();
            TeamSheet {
                number: i + 1,
                total_level: team_total(&players),
                players,
            }
        })
        .collect();

    let lineup = Lineup {
        teams,
        eligible_count: eligible.len(),
        passes,
    };

    info!(
        event = "core.lineup.generate_completed",
        teams = lineup.teams.len(),
        spread = lineup.spread(),
        passes = passes
    );
    Ok(lineup)
}
