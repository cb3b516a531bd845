//! Pairwise-swap hill climbing over a seeded partition.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RefineOutcome {
    pub passes: usize,
    pub converged: bool,
}

/// Run refinement passes until one changes nothing or `max_passes` is hit.
pub(super) fn refine(levels: &[i64], teams: &mut [Vec<usize>], max_passes: usize) -> RefineOutcome {
    for pass in 0..max_passes {
        if !refine_pass(levels, teams) {
            return RefineOutcome {
                passes: pass,
                converged: true,
            };
        }
    }

    RefineOutcome {
        passes: max_passes,
        converged: false,
    }
}

/// Visit every team pair once, performing at most one swap per pair.
///
/// Returns whether any swap happened.
fn refine_pass(levels: &[i64], teams: &mut [Vec<usize>]) -> bool {
    let mut changed = false;

    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            let Some((a, b)) = first_improving_swap(levels, &teams[i], &teams[j]) else {
                continue;
            };

            let (head, tail) = teams.split_at_mut(j);
            std::mem::swap(&mut head[i][a], &mut tail[0][b]);
            changed = true;
        }
    }

    changed
}

fn total(levels: &[i64], team: &[usize]) -> i64 {
    team.iter().map(|&player| levels[player]).sum()
}

/// First `(slot in left, slot in right)` whose exchange strictly narrows the
/// gap between the two teams. Scans `left` ascending, then `right` ascending.
fn first_improving_swap(levels: &[i64], left: &[usize], right: &[usize]) -> Option<(usize, usize)> {
    let left_total = total(levels, left);
    let right_total = total(levels, right);
    let gap = (left_total - right_total).abs();

    for (a, &outgoing) in left.iter().enumerate() {
        for (b, &incoming) in right.iter().enumerate() {
            let delta = levels[incoming] - levels[outgoing];
            let new_gap = ((left_total + delta) - (right_total - delta)).abs();
            if new_gap < gap {
                return Some((a, b));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_improving_swap_scans_left_then_right() {
        // left = 10 + 6 + 2 = 18, right = 8 + 4 + 1 = 13
        let levels = [10, 8, 6, 4, 2, 1];
        let swap = first_improving_swap(&levels, &[0, 2, 4], &[1, 3, 5]);
        assert_eq!(swap, Some((0, 0)));
    }

    #[test]
    fn test_first_improving_swap_none_when_balanced() {
        let levels = [3, 3, 2, 2];
        assert_eq!(first_improving_swap(&levels, &[0, 2], &[1, 3]), None);
    }

    #[test]
    fn test_first_improving_swap_requires_strict_improvement() {
        // Gap of 2; swapping 3 for 1 would flip it to 2 the other way.
        let levels = [3, 1];
        assert_eq!(first_improving_swap(&levels, &[0], &[1]), None);
    }

    #[test]
    fn test_first_improving_swap_with_empty_team() {
        let levels = [9, 1];
        assert_eq!(first_improving_swap(&levels, &[0, 1], &[]), None);
    }

    #[test]
    fn test_refine_pass_one_swap_per_pair() {
        // Pair (0, 1) has several improving swaps; only the first is taken.
        let levels = [10, 9, 8, 1, 1, 1];
        let mut teams = vec![vec![0, 1, 2], vec![3, 4, 5]];
        assert!(refine_pass(&levels, &mut teams));
        assert_eq!(teams, vec![vec![3, 1, 2], vec![0, 4, 5]]);
    }

    #[test]
    fn test_refine_stops_when_pass_changes_nothing() {
        let levels = [10, 8, 6, 4, 2, 1];
        let mut teams = vec![vec![0, 2, 4], vec![1, 3, 5]];
        let outcome = refine(&levels, &mut teams, 100);
        assert_eq!(
            outcome,
            RefineOutcome {
                passes: 1,
                converged: true
            }
        );
    }

    #[test]
    fn test_refine_respects_pass_cap() {
        let levels = [10, 9, 8, 1, 1, 1];
        let mut teams = vec![vec![0, 1, 2], vec![3, 4, 5]];
        let outcome = refine(&levels, &mut teams, 1);
        assert_eq!(
            outcome,
            RefineOutcome {
                passes: 1,
                converged: false
            }
        );
    }

    #[test]
    fn test_refine_with_zero_passes_leaves_teams() {
        let levels = [10, 1];
        let mut teams = vec![vec![0], vec![1]];
        let outcome = refine(&levels, &mut teams, 0);
        assert!(!outcome.converged);
        assert_eq!(teams, vec![vec![0], vec![1]]);
    }
}
