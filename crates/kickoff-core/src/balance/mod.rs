//! Skill-balanced team partitioning.
//!
//! Pure functions only: no IO, no logging, no shared state. Callers hand in a
//! slice of rated players and a team count and get back a partition of that
//! slice. Eligibility checks and team-count policy live with the caller
//! (see [`crate::lineup`]).
//!
//! The heuristic runs in two phases:
//!
//! 1. **Seed**: players are stable-sorted by level (highest first) and dealt
//!    out with a bouncing [`SnakeCursor`].
//! 2. **Refine**: greedy pairwise swaps between teams, at most one per team
//!    pair per pass, for up to [`MAX_PASSES`] passes or until a pass changes
//!    nothing.
//!
//! The result is a local optimum with respect to single two-player swaps, not
//! a globally optimal split.

mod refine;
mod snake;

pub use snake::{Direction, SnakeCursor};

/// Upper bound on refinement passes.
pub const MAX_PASSES: usize = 100;

/// Anything carrying a skill level the balancer can weigh.
pub trait Rated {
    fn level(&self) -> i64;
}

impl Rated for i64 {
    fn level(&self) -> i64 {
        *self
    }
}

impl<T: Rated + ?Sized> Rated for &T {
    fn level(&self) -> i64 {
        (**self).level()
    }
}

/// Index-based result of a balancing run.
///
/// Each team is an ordered list of indices into the slice that was balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    teams: Vec<Vec<usize>>,
    passes: usize,
    converged: bool,
}

impl Partition {
    fn empty() -> Self {
        Self {
            teams: Vec::new(),
            passes: 0,
            converged: true,
        }
    }

    pub fn teams(&self) -> &[Vec<usize>] {
        &self.teams
    }

    pub fn into_teams(self) -> Vec<Vec<usize>> {
        self.teams
    }

    /// Refinement passes that performed at least one swap.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// False when refinement stopped at [`MAX_PASSES`] while still improving.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Partition `players` into `num_teams` teams, returning indices.
///
/// - empty input or `num_teams <= 0` yields no teams
/// - `num_teams == 1` yields one team holding every index in input order
/// - `num_teams > players.len()` yields some empty teams
pub fn partition<P: Rated>(players: &[P], num_teams: i32) -> Partition {
    if players.is_empty() || num_teams <= 0 {
        return Partition::empty();
    }

    if num_teams == 1 {
        return Partition {
            teams: vec![(0..players.len()).collect()],
            passes: 0,
            converged: true,
        };
    }

    let levels: Vec<i64> = players.iter().map(Rated::level).collect();
    let mut teams = snake::distribute(&levels, num_teams as usize);
    let outcome = refine::refine(&levels, &mut teams, MAX_PASSES);

    Partition {
        teams,
        passes: outcome.passes,
        converged: outcome.converged,
    }
}

/// Partition `players` into `num_teams` skill-balanced teams.
///
/// Teams borrow from `players`; the slice itself is never reordered. See
/// [`partition`] for the degenerate-input policy.
pub fn generate_teams<P: Rated>(players: &[P], num_teams: i32) -> Vec<Vec<&P>> {
    partition(players, num_teams)
        .into_teams()
        .into_iter()
        .map(|team| team.into_iter().map(|index| &players[index]).collect())
        .collect()
}

/// Sum of levels across a team.
pub fn team_total<P: Rated>(team: &[P]) -> i64 {
    team.iter().map(Rated::level).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestPlayer {
        id: u32,
        level: i64,
    }

    impl Rated for TestPlayer {
        fn level(&self) -> i64 {
            self.level
        }
    }

    fn roster(levels: &[i64]) -> Vec<TestPlayer> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| TestPlayer {
                id: i as u32 + 1,
                level,
            })
            .collect()
    }

    fn sorted_ids(teams: &[Vec<&TestPlayer>]) -> Vec<u32> {
        let mut ids: Vec<u32> = teams.iter().flatten().map(|p| p.id).collect();
        ids.sort_unstable();
        ids
    }

    fn totals(teams: &[Vec<&TestPlayer>]) -> Vec<i64> {
        teams.iter().map(|team| team_total(team)).collect()
    }

    /// A spread of roster shapes used by the property-style tests below.
    fn sample_rosters() -> Vec<Vec<i64>> {
        vec![
            vec![7],
            vec![10, 8, 6, 4, 2, 1],
            vec![5, 5, 5, 5, 5, 5, 5],
            vec![1, 10, 1, 10, 1, 10, 3, 4],
            vec![9, 8, 7, 6, 5, 4, 3, 2, 1],
            vec![3, 9, 4, 7, 2, 10, 6, 1, 8, 5, 5, 6, 2, 7],
            vec![10, 10, 10, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ]
    }

    #[test]
    fn test_empty_input_yields_no_teams() {
        let players: Vec<TestPlayer> = Vec::new();
        for n in [-1, 0, 1, 2, 5] {
            assert!(generate_teams(&players, n).is_empty(), "n = {}", n);
        }
    }

    #[test]
    fn test_non_positive_team_count_yields_no_teams() {
        let players = roster(&[4, 5, 6]);
        assert!(generate_teams(&players, 0).is_empty());
        assert!(generate_teams(&players, -1).is_empty());
        assert!(generate_teams(&players, i32::MIN).is_empty());
    }

    #[test]
    fn test_single_team_preserves_input_order() {
        let players = roster(&[2, 9, 4, 7]);
        let teams = generate_teams(&players, 1);
        assert_eq!(teams.len(), 1);
        let ids: Vec<u32> = teams[0].iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_partition_property() {
        for levels in sample_rosters() {
            let players = roster(&levels);
            let expected: Vec<u32> = players.iter().map(|p| p.id).collect();
            for n in 1..=5 {
                let teams = generate_teams(&players, n);
                assert_eq!(
                    sorted_ids(&teams),
                    expected,
                    "levels {:?}, n = {}",
                    levels,
                    n
                );
            }
        }
    }

    #[test]
    fn test_team_count_matches_request() {
        for levels in sample_rosters() {
            let players = roster(&levels);
            for n in 1..=5 {
                assert_eq!(generate_teams(&players, n).len(), n as usize);
            }
        }
    }

    #[test]
    fn test_more_teams_than_players_leaves_empty_teams() {
        let players = roster(&[3, 2]);
        let teams = generate_teams(&players, 4);
        assert_eq!(teams.len(), 4);
        assert_eq!(teams[0].len(), 1);
        assert_eq!(teams[1].len(), 1);
        assert!(teams[2].is_empty());
        assert!(teams[3].is_empty());
    }

    #[test]
    fn test_skill_total_is_preserved() {
        for levels in sample_rosters() {
            let players = roster(&levels);
            let input_total: i64 = levels.iter().sum();
            for n in 1..=5 {
                let teams = generate_teams(&players, n);
                assert_eq!(totals(&teams).iter().sum::<i64>(), input_total);
            }
        }
    }

    #[test]
    fn test_two_team_balance_converges_within_one() {
        let players = roster(&[10, 8, 6, 4, 2, 1]);
        let teams = generate_teams(&players, 2);
        let t = totals(&teams);
        assert_eq!(t.iter().sum::<i64>(), 31);
        assert!((t[0] - t[1]).abs() <= 1, "totals {:?}", t);
    }

    #[test]
    fn test_two_team_exact_result_is_pinned() {
        // Snake seeds [10,6,2] vs [8,4,1]; the first improving swap trades 10 for 8.
        let players = roster(&[10, 8, 6, 4, 2, 1]);
        let part = partition(&players, 2);
        assert_eq!(part.teams(), &[vec![1, 2, 4], vec![0, 3, 5]]);
        assert_eq!(part.passes(), 1);
        assert!(part.converged());
    }

    #[test]
    fn test_three_team_balance() {
        let players = roster(&[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        let teams = generate_teams(&players, 3);
        let t = totals(&teams);
        let spread = t.iter().max().unwrap() - t.iter().min().unwrap();
        assert!(spread <= 2, "totals {:?}", t);
    }

    #[test]
    fn test_uniform_levels_two_teams_sizes_differ_by_at_most_one() {
        for count in 2..=11 {
            let players = roster(&vec![5; count]);
            let teams = generate_teams(&players, 2);
            assert!(teams[0].len().abs_diff(teams[1].len()) <= 1);
        }
    }

    #[test]
    fn test_uniform_levels_three_teams_favour_middle_team() {
        // The cursor visits the middle team twice per sweep.
        let players = roster(&[5; 11]);
        let sizes: Vec<usize> = generate_teams(&players, 3).iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 5, 3]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let players = roster(&[5, 5, 5, 5]);
        let part = partition(&players, 2);
        assert_eq!(part.teams(), &[vec![0, 2], vec![1, 3]]);
        assert_eq!(part.passes(), 0);
    }

    #[test]
    fn test_deterministic() {
        let players = roster(&[3, 9, 4, 7, 2, 10, 6, 1, 8, 5, 5, 6, 2, 7]);
        let first = partition(&players, 3);
        for _ in 0..10 {
            assert_eq!(partition(&players, 3), first);
        }
    }

    #[test]
    fn test_input_slice_untouched() {
        let players = roster(&[1, 10, 4, 7]);
        let before = players.clone();
        let _ = generate_teams(&players, 2);
        assert_eq!(players, before);
    }

    #[test]
    fn test_teams_borrow_input_records() {
        let players = roster(&[6, 3, 8]);
        let teams = generate_teams(&players, 2);
        for player in teams.iter().flatten() {
            assert!(players.iter().any(|p| std::ptr::eq(p, *player)));
        }
    }

    #[test]
    fn test_plain_levels_are_rated() {
        let levels: Vec<i64> = vec![4, 4, 2, 2];
        let teams = generate_teams(&levels, 2);
        assert_eq!(team_total(&teams[0]), team_total(&teams[1]));
    }
}
