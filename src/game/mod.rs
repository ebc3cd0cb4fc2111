//! Core Connect Four rules: board representation, players, and the game
//! state machine that accepts drops and reports their outcome.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Direction, Window, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS, WIN_LENGTH};
pub use player::{Player, PlayerNumber};
pub use state::{GameResult, GameState, GameStatus, Outcome, RejectReason};
