//! Position evaluation
//!
//! The search reads scores from the incremental `LineScores` cache; the
//! from-scratch functions here define what that cache must agree with.

use crate::board::{Board, Stone};

use super::lines::{line_score, LineKind, LineScores};

/// Sum of every line's score for `color`, computed without any cache.
#[must_use]
pub fn evaluate_lines(board: &Board, color: Stone) -> i64 {
    LineKind::ALL
        .iter()
        .map(|&kind| {
            (0..kind.count())
                .map(|index| line_score(board, kind, index, color))
                .sum::<i64>()
        })
        .sum()
}

/// Net score from `color`'s side: own total minus 1.1x the opponent's.
///
/// The asymmetry is intentional and makes the search lean toward defence.
#[inline]
#[must_use]
pub fn net_score(own: i64, opponent: i64) -> i64 {
    own - opponent - opponent / 10
}

/// Net evaluation from cached line scores.
#[inline]
#[must_use]
pub fn evaluate(scores: &LineScores, color: Stone) -> i64 {
    net_score(scores.total(color), scores.total(color.opponent()))
}

/// Net evaluation of a board from scratch.
#[must_use]
pub fn evaluate_board(board: &Board, color: Stone) -> i64 {
    net_score(
        evaluate_lines(board, color),
        evaluate_lines(board, color.opponent()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::PatternScore;

    #[test]
    fn test_empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(evaluate_board(&board, Stone::Black), 0);
        assert_eq!(evaluate_board(&board, Stone::White), 0);
    }

    #[test]
    fn test_defensive_bias() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(2, 2), Stone::White);

        // Mirror-equal material, but each side weighs the other 1.1x
        let black = evaluate_board(&board, Stone::Black);
        let white = evaluate_board(&board, Stone::White);
        assert!(black < 0 && white < 0);
        assert_eq!(net_score(1000, 1000), -100);
    }

    #[test]
    fn test_cache_matches_scratch() {
        let mut board = Board::new();
        for (r, c, s) in [
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
            (7, 9, Stone::Black),
            (8, 8, Stone::White),
            (6, 10, Stone::White),
            (14, 0, Stone::Black),
        ] {
            board.place_stone(Pos::new(r, c), s);
        }
        let scores = LineScores::new(&board);
        for color in [Stone::Black, Stone::White] {
            assert_eq!(scores.total(color), evaluate_lines(&board, color));
            assert_eq!(evaluate(&scores, color), evaluate_board(&board, color));
        }
        assert!(evaluate_lines(&board, Stone::Black) >= PatternScore::OPEN_THREE);
    }
}
