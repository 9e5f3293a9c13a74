//! Forcing-move scan run before the full search
//!
//! Every empty cell near existing play is classified for both sides. The
//! highest-priority category with any hit decides the move outright.

use std::fmt;

use crate::board::{Board, Pos, Stone};
use crate::eval::{is_double_threat, threat_count};
use crate::rules::makes_five_with;

use super::movegen::{is_foul_for, neighbor_distance, neighborhood};

/// Forcing-move categories, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TacticKind {
    /// Complete our own five
    Win,
    /// Occupy the cell where the opponent would make five
    BlockWin,
    /// Make an open four
    OpenFour,
    /// Occupy the cell where the opponent would make an open four
    BlockOpenFour,
    /// Occupy the cell where the opponent would make a double threat
    BlockDoubleThreat,
    /// Make a double threat of our own
    DoubleThreat,
}

impl TacticKind {
    pub const ALL: [TacticKind; 6] = [
        TacticKind::Win,
        TacticKind::BlockWin,
        TacticKind::OpenFour,
        TacticKind::BlockOpenFour,
        TacticKind::BlockDoubleThreat,
        TacticKind::DoubleThreat,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TacticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TacticKind::Win => "win",
            TacticKind::BlockWin => "block win",
            TacticKind::OpenFour => "open four",
            TacticKind::BlockOpenFour => "block open four",
            TacticKind::BlockDoubleThreat => "block double threat",
            TacticKind::DoubleThreat => "double threat",
        };
        f.write_str(name)
    }
}

/// Look for a forcing move for `color`.
///
/// Cells that would be fouls for `color` are skipped. Within a category the
/// last cell in row-major order wins.
pub fn find_immediate_move(
    board: &Board,
    color: Stone,
    stone_count: u32,
    renju: bool,
) -> Option<(Pos, TacticKind)> {
    if stone_count == 0 {
        return None;
    }
    let opponent = color.opponent();
    let radius = neighbor_distance(stone_count).max(2);
    let mut found: [Option<Pos>; TacticKind::ALL.len()] = [None; TacticKind::ALL.len()];
    let mut record = |kind: TacticKind, pos: Pos| {
        found[kind.slot()] = Some(pos);
    };

    for pos in neighborhood(board, radius) {
        if is_foul_for(board, pos, color, renju) {
            continue;
        }

        if makes_five_with(board, pos, color, renju) {
            record(TacticKind::Win, pos);
        } else {
            let tc = threat_count(board, pos, color);
            if tc.open_four > 0 {
                record(TacticKind::OpenFour, pos);
            }
            if is_double_threat(&tc) {
                record(TacticKind::DoubleThreat, pos);
            }
        }

        if makes_five_with(board, pos, opponent, renju) {
            record(TacticKind::BlockWin, pos);
        } else {
            let tc = threat_count(board, pos, opponent);
            if tc.open_four > 0 {
                record(TacticKind::BlockOpenFour, pos);
            }
            if is_double_threat(&tc) {
                record(TacticKind::BlockDoubleThreat, pos);
            }
        }
    }

    TacticKind::ALL
        .iter()
        .find_map(|&kind| found[kind.slot()].map(|pos| (pos, kind)))
}
