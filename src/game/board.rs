use std::fmt;

use super::player::PlayerNumber;
use crate::error::GameError;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Largest board, in cells, that [`Board::new`] will allocate.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any
    pub fn owner(self) -> Option<PlayerNumber> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(PlayerNumber::One),
            Cell::PlayerTwo => Some(PlayerNumber::Two),
        }
    }
}

/// The four line shapes a win can take, anchored at their top-most cell
/// (left-most for horizontal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order used by the win check.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Step as (row delta, column delta)
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four in-bounds `(row, col)` coordinates along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub direction: Direction,
    pub cells: [(usize, usize); WIN_LENGTH],
}

impl Window {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Row-major grid of cells. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given size
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions { height, width });
        }
        let len = match height.checked_mul(width) {
            Some(len) if len <= MAX_CELLS => len,
            _ => return Err(GameError::TooLarge { height, width }),
        };
        Ok(Board {
            height,
            width,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "position ({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        self.cells[row * self.width + col]
    }

    /// Lowest empty row in a column, `None` if the column is full or does
    /// not exist
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row * self.width + col] = cell;
        Some(row)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Count of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether `cell` owns four in a row anywhere on the board
    pub fn has_four(&self, cell: Cell) -> bool {
        self.winning_window(cell).is_some()
    }

    /// First window (row-major by anchor, then in [`Direction::ALL`] order)
    /// whose four cells all equal `cell`.
    pub fn winning_window(&self, cell: Cell) -> Option<Window> {
        if cell.is_empty() {
            return None;
        }

        for row in 0..self.height {
            for col in 0..self.width {
                for direction in Direction::ALL {
                    let Some(cells) = self.window_at(row, col, direction) else {
                        continue;
                    };
                    if cells.iter().all(|&(r, c)| self.get(r, c) == cell) {
                        return Some(Window { direction, cells });
                    }
                }
            }
        }

        None
    }

    /// Coordinates of the window anchored at (row, col), or `None` if any
    /// of them falls off the board
    fn window_at(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<[(usize, usize); WIN_LENGTH]> {
        let (dr, dc) = direction.step();
        let mut cells = [(0, 0); WIN_LENGTH];

        for (i, slot) in cells.iter_mut().enumerate() {
            let offset = i as isize;
            let r = row.checked_add_signed(dr * offset)?;
            let c = col.checked_add_signed(dc * offset)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }

        Some(cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            cells: vec![Cell::Empty; DEFAULT_HEIGHT * DEFAULT_WIDTH],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: Vec<&str> = (0..self.width)
                .map(|col| match self.get(row, col) {
                    Cell::Empty => ".",
                    Cell::PlayerOne => "1",
                    Cell::PlayerTwo => "2",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
