use log::{debug, info};

use super::board::{Board, Window};
use super::player::{Player, PlayerNumber};
use crate::error::GameError;

/// Why a drop was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    GameOver,
    OutOfRange,
    ColumnFull,
}

/// Result of a single call to [`GameState::drop_piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(PlayerNumber),
    Tie,
    Rejected(RejectReason),
}

impl Outcome {
    /// Whether this outcome ended the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win(_) | Outcome::Tie)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win(PlayerNumber),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over(GameResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current_player: PlayerNumber,
    result: Option<GameResult>,
    moves_played: usize,
}

impl GameState {
    /// Create a game on the default 6x7 board. Player one moves first.
    pub fn new(player_one_color: impl Into<String>, player_two_color: impl Into<String>) -> Self {
        Self::from_board(Board::default(), player_one_color, player_two_color)
    }

    /// Create a game on a `height` x `width` board
    pub fn with_dimensions(
        player_one_color: impl Into<String>,
        player_two_color: impl Into<String>,
        height: usize,
        width: usize,
    ) -> Result<Self, GameError> {
        let board = Board::new(height, width)?;
        Ok(Self::from_board(board, player_one_color, player_two_color))
    }

    fn from_board(
        board: Board,
        player_one_color: impl Into<String>,
        player_two_color: impl Into<String>,
    ) -> Self {
        GameState {
            board,
            players: [
                Player::new(PlayerNumber::One, player_one_color),
                Player::new(PlayerNumber::Two, player_two_color),
            ],
            current_player: PlayerNumber::One,
            result: None,
            moves_played: 0,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// The player whose turn it is, or who made the final move once the
    /// game is over
    pub fn current_player(&self) -> &Player {
        self.player(self.current_player)
    }

    pub fn player(&self, number: PlayerNumber) -> &Player {
        match number {
            PlayerNumber::One => &self.players[0],
            PlayerNumber::Two => &self.players[1],
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn status(&self) -> GameStatus {
        match self.result {
            Some(result) => GameStatus::Over(result),
            None => GameStatus::InProgress,
        }
    }

    /// Number of pieces accepted so far
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Row a piece dropped into `column` would occupy. `None` if the column
    /// is full or outside the board. Ignores whose turn it is.
    pub fn find_landing_row(&self, column: isize) -> Option<usize> {
        let col = usize::try_from(column).ok()?;
        self.board.landing_row(col)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Invalid drops leave the state untouched and report why. A winning or
    /// board-filling drop ends the game without advancing the turn.
    pub fn drop_piece(&mut self, column: isize) -> Outcome {
        if self.is_game_over() {
            return Outcome::Rejected(RejectReason::GameOver);
        }

        let col = match usize::try_from(column) {
            Ok(col) if col < self.board.width() => col,
            _ => return Outcome::Rejected(RejectReason::OutOfRange),
        };

        let mover = self.current_player;
        let Some(row) = self.board.drop_piece(col, mover.to_cell()) else {
            return Outcome::Rejected(RejectReason::ColumnFull);
        };
        self.moves_played += 1;
        debug!(
            "player {} dropped into column {} (row {})",
            mover.number(),
            col,
            row
        );

        if self.check_for_win(mover) {
            info!("player {} won after {} moves", mover.number(), self.moves_played);
            self.result = Some(GameResult::Win(mover));
            return Outcome::Win(mover);
        }

        if self.is_tie() {
            info!("tie after {} moves", self.moves_played);
            self.result = Some(GameResult::Tie);
            return Outcome::Tie;
        }

        self.current_player = mover.other();
        Outcome::Continue
    }

    /// Whether `player` has four in a row anywhere on the board
    pub fn check_for_win(&self, player: PlayerNumber) -> bool {
        self.board.has_four(player.to_cell())
    }

    /// The first winning line for `player`, scanning rows top to bottom
    pub fn winning_window(&self, player: PlayerNumber) -> Option<Window> {
        self.board.winning_window(player.to_cell())
    }

    /// Whether every cell is occupied
    pub fn is_tie(&self) -> bool {
        self.board.is_full()
    }
}
