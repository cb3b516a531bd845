use unicode_width::UnicodeWidthStr;

use kickoff_core::{Player, TeamSheet};

use crate::color;

const HEADERS: [&str; 5] = ["ID", "Name", "Level", "Status", "Cards"];

/// Box-drawn roster table. Column widths fit the widest cell.
pub struct TableFormatter {
    widths: [usize; 5],
    yellow_card_limit: u32,
}

impl TableFormatter {
    pub fn new(players: &[Player], yellow_card_limit: u32) -> Self {
        let mut widths = HEADERS.map(display_width);

        for player in players {
            let cells = Self::cells(player, yellow_card_limit);
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(display_width(cell));
            }
        }

        Self {
            widths,
            yellow_card_limit,
        }
    }

    fn cells(player: &Player, yellow_card_limit: u32) -> [String; 5] {
        [
            player.id.to_string(),
            player.full_name(),
            player.level.to_string(),
            player.status(yellow_card_limit).to_string(),
            format!("{}/{}", player.yellow_cards, yellow_card_limit),
        ]
    }

    pub fn print_table(&self, players: &[Player]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.header_row());
        println!("{}", self.border('├', '┼', '┤'));
        for player in players {
            println!("{}", self.row(player));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn header_row(&self) -> String {
        let sep = color::muted("│");
        let cells: Vec<String> = HEADERS
            .iter()
            .zip(self.widths)
            .map(|(header, width)| color::bold(&pad(header, width)))
            .collect();
        format!("{sep} {} {sep}", cells.join(&format!(" {sep} ")))
    }

    fn row(&self, player: &Player) -> String {
        let sep = color::muted("│");
        let [id, name, level, status, cards] = Self::cells(player, self.yellow_card_limit);
        let [id_w, name_w, level_w, status_w, cards_w] = self.widths;

        format!(
            "{sep} {} {sep} {} {sep} {} {sep} {} {sep} {} {sep}",
            color::muted(&pad(&id, id_w)),
            color::chalk(&pad(&name, name_w)),
            color::gold(&pad(&level, level_w)),
            color::status(player.status(self.yellow_card_limit), &pad(&status, status_w)),
            color::cards(
                player.yellow_cards,
                self.yellow_card_limit,
                &pad(&cards, cards_w)
            ),
        )
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        color::muted(&format!(
            "{left}{}{right}",
            segments.join(&middle.to_string())
        ))
    }
}

/// Print one team: header line with total, then one line per player.
pub fn print_team_sheet(team: &TeamSheet) {
    let name_width = team
        .players
        .iter()
        .map(|p| display_width(&p.full_name()))
        .max()
        .unwrap_or(0);

    println!(
        "{}  {}",
        color::bold(&format!("Team {}", team.number)),
        color::muted(&format!(
            "total {} · avg {:.1} · {} players",
            team.total_level,
            team.average_level(),
            team.players.len()
        )),
    );
    for player in &team.players {
        println!(
            "  {}  {}",
            color::chalk(&pad(&player.full_name(), name_width)),
            color::gold(&level_pips(player.level)),
        );
    }
}

/// Level as filled and empty pips, e.g. `●●●●●●●○○○` for 7.
pub(crate) fn level_pips(level: u8) -> String {
    let filled = usize::from(level.min(kickoff_core::roster::MAX_LEVEL));
    let empty = usize::from(kickoff_core::roster::MAX_LEVEL) - filled;
    format!("{}{}", "●".repeat(filled), "○".repeat(empty))
}

/// Terminal display width. Wide characters (CJK, emoji) count as 2 columns.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad a string to a minimum display width without truncating.
pub(crate) fn pad(s: &str, min_width: usize) -> String {
    let width = display_width(s);
    if width >= min_width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(min_width - width))
    }
}
