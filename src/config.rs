//! Difficulty levels and search limits

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::EngineError;

/// Default transposition cache capacity (entries). The cache is cleared
/// wholesale once it grows past this.
pub const DEFAULT_TT_CAPACITY: usize = 200_000;

/// Engine strength. Selects the time budget, depth cap and candidate width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a numeric level to a difficulty, clamping into 0..=2.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// (time limit, max depth, max candidates) for this level.
    pub fn limits(self) -> SearchLimits {
        let (millis, max_depth, max_candidates) = match self {
            Difficulty::Easy => (500, 3, 10),
            Difficulty::Medium => (1000, 5, 14),
            Difficulty::Hard => (2000, 7, 20),
        };
        SearchLimits {
            time_limit: Duration::from_millis(millis),
            max_depth,
            max_candidates,
            tt_capacity: DEFAULT_TT_CAPACITY,
            renju: true,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "easy" => Ok(Difficulty::Easy),
            "1" | "medium" => Ok(Difficulty::Medium),
            "2" | "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Budget for one move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Wall-clock budget, measured from the start of the request
    pub time_limit: Duration,
    /// Deepest iterative-deepening pass
    pub max_depth: u8,
    /// Candidates kept per node after ordering
    pub max_candidates: usize,
    /// Transposition cache capacity in entries
    pub tt_capacity: usize,
    /// Apply Renju restrictions to Black (fouls, exact-five wins)
    pub renju: bool,
}

impl SearchLimits {
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates.max(1);
        self
    }

    #[must_use]
    pub fn with_tt_capacity(mut self, tt_capacity: usize) -> Self {
        self.tt_capacity = tt_capacity;
        self
    }

    #[must_use]
    pub fn with_renju(mut self, renju: bool) -> Self {
        self.renju = renju;
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Difficulty::default().limits()
    }
}

impl From<Difficulty> for SearchLimits {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.limits()
    }
}
