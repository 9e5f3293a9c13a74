//! Candidate generation and move ordering
//!
//! Candidates are empty cells within a stone-count dependent radius of
//! existing play. Each is given a cheap tactical score from both sides'
//! point of view, so strong attacking cells and urgent blocks are tried
//! first.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
use crate::eval::{threat_count, PatternScore, ThreatCount};
use crate::rules::{is_forbidden, makes_five_with};

/// Points per step closer to the center
const CENTER_WEIGHT: i64 = 3;

/// Largest Manhattan distance from the center
const MAX_CENTER_DISTANCE: i64 = 14;

/// Neighborhood radius for candidate cells: tight in the opening, wider as
/// the board fills up.
#[inline]
pub fn neighbor_distance(stone_count: u32) -> i32 {
    match stone_count {
        0..=5 => 1,
        6..=19 => 2,
        _ => 3,
    }
}

/// True if `color` may not play `pos` under the active rules.
#[inline]
pub fn is_foul_for(board: &Board, pos: Pos, color: Stone, renju: bool) -> bool {
    renju && color == Stone::Black && is_forbidden(board, pos)
}

fn threat_bonus(tc: &ThreatCount) -> i64 {
    tc.open_four as i64 * PatternScore::OPEN_FOUR
        + tc.four as i64 * PatternScore::FOUR
        + tc.open_three as i64 * PatternScore::OPEN_THREE
}

/// Ordering score for `color` playing at the empty cell `pos`.
///
/// An immediate win scores `FIVE`; a cell where the opponent would win
/// scores just below it. Otherwise the shapes both sides could make there
/// are added together with a small pull toward the center.
pub fn quick_score(board: &Board, pos: Pos, color: Stone, renju: bool) -> i64 {
    if makes_five_with(board, pos, color, renju) {
        return PatternScore::FIVE;
    }
    let opponent = color.opponent();
    if makes_five_with(board, pos, opponent, renju) {
        return PatternScore::FIVE - 1;
    }

    let own = threat_bonus(&threat_count(board, pos, color));
    let theirs = threat_bonus(&threat_count(board, pos, opponent));
    let centrality = (MAX_CENTER_DISTANCE - pos.center_distance() as i64) * CENTER_WEIGHT;
    own + theirs + centrality
}

/// Empty cells with a stone within `radius`, in row-major order.
pub fn neighborhood(board: &Board, radius: i32) -> impl Iterator<Item = Pos> + '_ {
    (0..BOARD_SIZE * BOARD_SIZE)
        .map(Pos::from_index)
        .filter(move |&pos| board.is_empty(pos) && board.has_neighbor(pos, radius))
}

/// Ordered candidate moves for `color`.
///
/// Cells are sorted by [`quick_score`], best first. If `preferred` is among
/// them it is swapped to the front. The list is cut to `limit` first and
/// forbidden Black cells are then dropped from it, so Black may get fewer.
pub fn generate_candidates(
    board: &Board,
    color: Stone,
    stone_count: u32,
    limit: usize,
    preferred: Option<Pos>,
    renju: bool,
) -> Vec<Pos> {
    if stone_count == 0 {
        return if board.is_empty(CENTER) { vec![CENTER] } else { Vec::new() };
    }

    let mut scored: Vec<(Pos, i64)> = neighborhood(board, neighbor_distance(stone_count))
        .map(|pos| (pos, quick_score(board, pos, color, renju)))
        .collect();
    // Stable: equal scores keep row-major order
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    if let Some(preferred) = preferred {
        if let Some(idx) = scored.iter().position(|&(pos, _)| pos == preferred) {
            scored.swap(0, idx);
        }
    }

    scored
        .into_iter()
        .map(|(pos, _)| pos)
        .take(limit)
        .filter(|&pos| !is_foul_for(board, pos, color, renju))
        .collect()
}
