use super::board::Cell;

/// Identity of one of the two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerNumber {
    One,
    Two,
}

impl PlayerNumber {
    /// Get the other player
    pub fn other(self) -> PlayerNumber {
        match self {
            PlayerNumber::One => PlayerNumber::Two,
            PlayerNumber::Two => PlayerNumber::One,
        }
    }

    /// Convert player to the cell value it writes into the grid
    pub fn to_cell(self) -> Cell {
        match self {
            PlayerNumber::One => Cell::PlayerOne,
            PlayerNumber::Two => Cell::PlayerTwo,
        }
    }

    /// Numeric form used in messages: 1 or 2
    pub fn number(self) -> u8 {
        match self {
            PlayerNumber::One => 1,
            PlayerNumber::Two => 2,
        }
    }
}

/// A seated player. The color is an opaque token for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    number: PlayerNumber,
    color: String,
}

impl Player {
    pub fn new(number: PlayerNumber, color: impl Into<String>) -> Self {
        Player {
            number,
            color: color.into(),
        }
    }

    pub fn number(&self) -> PlayerNumber {
        self.number
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
