//! Optimal tic-tac-toe through exhaustive minimax search.
//!
//! The search itself lives in [`player::min_max`], the board and the evaluator in
//! [`game::tictactoe`]. Everything else is glue for playing whole games.

pub mod core;
pub mod error;
pub mod game;
pub mod player;

pub use crate::core::{GameEndStatus, GameStatus, Player, Role, Score, WIN_SCORE};
pub use error::GameError;
pub use game::tictactoe::{evaluate, has_remaining_moves, Board, Cell, Move};
pub use player::min_max::{find_best_move, minimax};
