//! Game rules for standard Gomoku
//!
//! - Move legality (bounds, occupancy, game over)
//! - Win condition: five or more in a row, overlines included

pub mod placement;
pub mod win;

// Re-exports for convenient access
pub use placement::{is_valid_move, validate_move};
pub use win::{check_win, count_in_direction, find_winning_line, has_five_at_pos, DIRECTIONS, WIN_LENGTH};
