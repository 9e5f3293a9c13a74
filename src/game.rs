//! Game record: move history, turn order, undo and result tracking

use std::fmt;

use crate::board::{Board, Pos, Stone, CENTER};
use crate::engine::{AIEngine, MoveResult};
use crate::error::EngineError;
use crate::rules::{check_foul, winner_with};

/// One move of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub stone: Stone,
}

/// Game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameResult {
    #[default]
    Ongoing,
    Won(Stone),
    /// Board full with no winner
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Ongoing => f.write_str("Playing"),
            GameResult::Won(Stone::Black) => f.write_str("Black wins"),
            GameResult::Won(_) => f.write_str("White wins"),
            GameResult::Draw => f.write_str("Draw"),
        }
    }
}

/// A game in progress. Black moves first and turns alternate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    result: GameResult,
    /// Renju restrictions on Black
    renju: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Game {
    pub fn new(renju: bool) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            result: GameResult::Ongoing,
            renju,
        }
    }

    /// New game with Black's first stone already on the center point, for
    /// a human playing White.
    pub fn with_center_opening(renju: bool) -> Self {
        let mut game = Self::new(renju);
        game.board.place_stone(CENTER, Stone::Black);
        game.history.push(MoveRecord { pos: CENTER, stone: Stone::Black });
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// Color whose turn it is
    pub fn side_to_move(&self) -> Stone {
        if self.history.len() % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// Place a stone for the side to move and update the result.
    pub fn play(&mut self, pos: Pos) -> Result<GameResult, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let stone = self.side_to_move();
        if !self.board.is_empty(pos) {
            return Err(EngineError::Occupied(pos));
        }
        if self.renju && stone == Stone::Black {
            if let Some(foul) = check_foul(&self.board, pos) {
                return Err(EngineError::Forbidden(foul));
            }
        }

        self.board.try_place(pos, stone)?;
        self.history.push(MoveRecord { pos, stone });
        self.result = self.evaluate_result();
        Ok(self.result)
    }

    /// [`Game::play`] with unchecked coordinates.
    pub fn play_at(&mut self, row: i32, col: i32) -> Result<GameResult, EngineError> {
        self.play(Pos::try_new(row, col)?)
    }

    /// Ask `engine` for the side to move and play its answer.
    pub fn play_engine(&mut self, engine: &AIEngine) -> Result<MoveResult, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let result = engine.get_move_with_stats(&self.board, self.side_to_move().opponent())?;
        self.play(result.best_move)?;
        Ok(result)
    }

    /// Take back the last `count` moves. Does nothing if fewer were played.
    /// Returns the number of moves removed.
    pub fn undo(&mut self, count: usize) -> usize {
        if count == 0 || self.history.len() < count {
            return 0;
        }
        for record in self.history.drain(self.history.len() - count..) {
            self.board.remove_stone(record.pos);
        }
        self.result = GameResult::Ongoing;
        count
    }

    fn evaluate_result(&self) -> GameResult {
        match winner_with(&self.board, self.renju) {
            Some(stone) => GameResult::Won(stone),
            None if self.board.is_full() => GameResult::Draw,
            None => GameResult::Ongoing,
        }
    }
}
