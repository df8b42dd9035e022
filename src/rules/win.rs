//! Win condition checking
//!
//! A player wins by placing a stone that completes five or more of their
//! stones contiguous along a row, column, or diagonal. Only lines through
//! the newly placed stone need checking.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `stone` cells starting one step from `pos` in direction
/// `(dr, dc)`. `pos` itself is not counted.
pub fn count_in_direction(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    let mut count = 0;
    let mut next = pos.offset(dr, dc);
    while let Some(p) = next {
        if board.get(p) != stone {
            break;
        }
        count += 1;
        next = p.offset(dr, dc);
    }
    count
}

/// Five-in-a-row check for `color` through `pos`.
///
/// `pos` counts as a `color` stone whatever the board holds there, so an
/// empty cell answers whether placing `color` on it would win.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + count_in_direction(board, pos, dr, dc, color)
            + count_in_direction(board, pos, -dr, -dc, color)
            >= WIN_LENGTH
    })
}

/// Check whether the stone at `pos` completes a winning line.
///
/// An empty cell never wins.
pub fn check_win(board: &Board, pos: Pos) -> bool {
    has_five_at_pos(board, pos, board.get(pos))
}

/// Full winning run through `pos`, ordered from one end to the other.
///
/// Returns the run for the first direction (in [`DIRECTIONS`] order) that
/// reaches [`WIN_LENGTH`]. Overlines are returned whole.
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = count_in_direction(board, pos, -dr, -dc, color);
        let forward = count_in_direction(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        // Walk back to the start of the run, then collect forward
        let (row, col) = (pos.row as i32, pos.col as i32);
        let start_r = row - dr * back as i32;
        let start_c = col - dc * back as i32;
        let line = (0..(1 + back + forward) as i32)
            .filter_map(|i| Pos::try_new(start_r + dr * i, start_c + dc * i))
            .collect();
        return Some(line);
    }
    None
}
