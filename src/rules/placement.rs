//! Move legality

use crate::board::{Board, Pos};
use crate::error::MoveError;

/// Check a move at signed `(row, col)` and return the target position.
///
/// Checks run in order: game over, bounds, occupancy.
pub fn validate_move(board: &Board, row: i32, col: i32, game_over: bool) -> Result<Pos, MoveError> {
    if game_over {
        return Err(MoveError::GameOver);
    }
    let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied(pos));
    }
    Ok(pos)
}

/// Boolean form of [`validate_move`]
#[inline]
pub fn is_valid_move(board: &Board, row: i32, col: i32, game_over: bool) -> bool {
    validate_move(board, row, col, game_over).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_empty_in_bounds_is_valid() {
        let board = Board::new();
        assert!(is_valid_move(&board, 0, 0, false));
        assert!(is_valid_move(&board, 14, 14, false));
        assert_eq!(validate_move(&board, 7, 7, false), Ok(Pos::new(7, 7)));
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new();
        for (row, col) in [(-1, 0), (0, -1), (15, 0), (0, 15), (100, -100)] {
            assert_eq!(
                validate_move(&board, row, col, false),
                Err(MoveError::OutOfBounds { row, col })
            );
        }
    }

    #[test]
    fn test_occupied() {
        let mut board = Board::new();
        board.place_stone(Pos::new(5, 5), Stone::White);
        assert_eq!(
            validate_move(&board, 5, 5, false),
            Err(MoveError::Occupied(Pos::new(5, 5)))
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let board = Board::new();
        assert_eq!(validate_move(&board, 7, 7, true), Err(MoveError::GameOver));
        assert_eq!(validate_move(&board, -3, 99, true), Err(MoveError::GameOver));
    }
}
