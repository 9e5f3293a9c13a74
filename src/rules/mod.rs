//! Game rules for Renju
//!
//! - Win conditions (exact five for Black, five or more for White)
//! - Forbidden moves for Black (overline, double-four, double-three)

pub mod forbidden;
pub mod win;

pub use forbidden::{check_foul, is_forbidden, Foul};
pub use win::{count_consecutive, makes_five, makes_five_with, winner, winner_with};
