//! Win detection
//!
//! Five or more in a row wins for White. Under Renju rules Black only wins
//! with exactly five; a longer Black run is an overline and never counts.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, DIRECTIONS};

/// Length of the run of `stone` through `pos` along `(dr, dc)`, counting
/// `pos` itself as one of them. The cell at `pos` is not read.
#[inline]
pub fn count_consecutive(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    let walk = |sign: i32| {
        (1..BOARD_SIZE as i32)
            .take_while(|&i| {
                board.get_checked(pos.row as i32 + dr * i * sign, pos.col as i32 + dc * i * sign)
                    == Some(stone)
            })
            .count()
    };
    1 + walk(1) + walk(-1)
}

/// True if a run of this length wins for `stone`.
#[inline]
pub fn is_winning_run(len: usize, stone: Stone, renju: bool) -> bool {
    match stone {
        Stone::Black if renju => len == 5,
        Stone::Black | Stone::White => len >= 5,
        Stone::Empty => false,
    }
}

/// Would `color` playing at `pos` complete a winning line?
pub fn makes_five(board: &Board, pos: Pos, color: Stone) -> bool {
    makes_five_with(board, pos, color, true)
}

/// Like [`makes_five`] with the Renju overline restriction switchable.
pub fn makes_five_with(board: &Board, pos: Pos, color: Stone, renju: bool) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        is_winning_run(count_consecutive(board, pos, dr, dc, color), color, renju)
    })
}

/// Winner of the position, if any. Black runs longer than five are skipped.
pub fn winner(board: &Board) -> Option<Stone> {
    winner_with(board, true)
}

/// Full-board winner scan with the Renju overline restriction switchable.
pub fn winner_with(board: &Board, renju: bool) -> Option<Stone> {
    for stone in [Stone::Black, Stone::White] {
        let stones = board.stones(stone)?;
        for pos in stones.iter_ones() {
            for &(dr, dc) in &DIRECTIONS {
                if is_winning_run(count_consecutive(board, pos, dr, dc, stone), stone, renju) {
                    return Some(stone);
                }
            }
        }
    }
    None
}
