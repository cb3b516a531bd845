//! Seeding: bouncing team cursor and the initial deal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Team cursor that sweeps back and forth across `team_count` teams.
///
/// After each step the index moves one team in the current direction. When the
/// move lands on or past the last team the direction turns backward and the
/// index is clamped to the last team; when it lands on or before the first team
/// the direction turns forward and the index is clamped to 0.
///
/// For three teams this yields `0, 1, 2, 1, 0, 1, 2, ...`.
///
/// Iterating the cursor yields the team index for each successive player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeCursor {
    index: usize,
    direction: Direction,
    last: usize,
}

impl SnakeCursor {
    pub fn new(team_count: usize) -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
            last: team_count.saturating_sub(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn advance(&mut self) {
        let next = match self.direction {
            Direction::Forward => self.index as isize + 1,
            Direction::Backward => self.index as isize - 1,
        };

        if next >= self.last as isize {
            self.direction = Direction::Backward;
            self.index = self.last;
        } else if next <= 0 {
            self.direction = Direction::Forward;
            self.index = 0;
        } else {
            self.index = next as usize;
        }
    }
}

impl Iterator for SnakeCursor {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.index;
        self.advance();
        Some(current)
    }
}

/// Deal players, strongest first, into `team_count` teams.
///
/// Ties keep their input order (the sort is stable).
pub(super) fn distribute(levels: &[i64], team_count: usize) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..levels.len()).collect();
    order.sort_by(|&a, &b| levels[b].cmp(&levels[a]));

    let mut teams = vec![Vec::new(); team_count];
    for (player, team) in order.into_iter().zip(SnakeCursor::new(team_count)) {
        teams[team].push(player);
    }
    teams
}
