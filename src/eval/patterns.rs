//! Pattern scores and line shape recognition
//!
//! A line is encoded from one color's point of view as bytes over a
//! three-symbol alphabet: `1` own stone, `0` empty, `2` opponent stone or
//! board edge. Shapes are literal substrings; every (possibly overlapping)
//! occurrence is counted.

/// Own stone
pub const OWN: u8 = b'1';
/// Empty cell
pub const EMPTY: u8 = b'0';
/// Opponent stone or off-board
pub const BLOCKED: u8 = b'2';

/// Pattern scores. Each tier is an order of magnitude above the next.
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i64 = 1_000_000_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i64 = 10_000_000;
    /// Four with one end capped: XOOOO_ or _OOOOX
    pub const FOUR: i64 = 1_000_000;
    /// Open three, solid or with one gap
    pub const OPEN_THREE: i64 = 100_000;
    /// Three with room on one side only
    pub const THREE: i64 = 10_000;
    pub const OPEN_TWO: i64 = 1_000;
    /// Gapped two: _O_O_ or _O__O_
    pub const TWO: i64 = 100;
    /// Lone stone with both neighbors empty
    pub const NEIGHBOR: i64 = 5;
}

/// Open four shape
pub const OPEN_FOUR_SHAPE: &[u8] = b"011110";

/// Open three shapes, solid and single-gap
pub const OPEN_THREE_SHAPES: [&[u8]; 3] = [b"01110", b"010110", b"011010"];

/// Line shapes in priority order with their scores.
const LINE_SHAPES: [(&[u8], i64); 14] = [
    (b"11111", PatternScore::FIVE),
    (OPEN_FOUR_SHAPE, PatternScore::OPEN_FOUR),
    (b"211110", PatternScore::FOUR),
    (b"011112", PatternScore::FOUR),
    (b"01110", PatternScore::OPEN_THREE),
    (b"010110", PatternScore::OPEN_THREE),
    (b"011010", PatternScore::OPEN_THREE),
    (b"001110", PatternScore::THREE),
    (b"011100", PatternScore::THREE),
    (b"00110", PatternScore::OPEN_TWO),
    (b"01100", PatternScore::OPEN_TWO),
    (b"01010", PatternScore::TWO),
    (b"010010", PatternScore::TWO),
    (b"010", PatternScore::NEIGHBOR),
];

/// Count occurrences of `pattern` in `line`, overlaps included.
#[inline]
pub fn count_pattern(line: &[u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() || pattern.len() > line.len() {
        return 0;
    }
    line.windows(pattern.len()).filter(|w| *w == pattern).count()
}

/// True if some occurrence of `pattern` covers index `center` and the
/// center cell itself is an own stone.
pub fn contains_with_center(line: &[u8], pattern: &[u8], center: usize) -> bool {
    if line.get(center) != Some(&OWN) || pattern.len() > line.len() {
        return false;
    }
    line.windows(pattern.len())
        .enumerate()
        .any(|(start, w)| w == pattern && start <= center && center < start + pattern.len())
}

/// Heuristic score of one line for the color it was encoded for.
#[must_use]
pub fn score_line(line: &[u8]) -> i64 {
    LINE_SHAPES
        .iter()
        .map(|&(shape, score)| count_pattern(line, shape) as i64 * score)
        .sum()
}
