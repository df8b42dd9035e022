//! Two-player Gomoku (five-in-a-row)
//!
//! Black and White take turns placing stones on a 15x15 board. The first
//! player to line up five or more stones horizontally, vertically or
//! diagonally wins, and the board is frozen from then on.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality and win detection
//! - [`game`]: Game state (turn, game-over flag, history)
//! - [`config`]: Window and geometry settings
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GomokuGame, Stone};
//!
//! let mut game = GomokuGame::new();
//! for col in 3..7 {
//!     assert!(game.place_stone(7, col)); // Black
//!     assert!(game.place_stone(0, col)); // White
//! }
//! assert!(game.place_stone(7, 7));
//! assert_eq!(game.winner(), Some(Stone::Black));
//! assert!(!game.place_stone(10, 10));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::GomokuConfig;
pub use error::{ConfigError, MoveError};
pub use game::{GomokuGame, MoveOutcome};
