//! Board representation for Reversi

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, ParseBoardError};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Owner of the disc, `None` for an empty cell
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Stone::Black => Some(Player::Black),
            Stone::White => Some(Player::White),
            Stone::Empty => None,
        }
    }
}

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Disc this player places
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the engine
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbour one step along `(dr, dc)`, if still on the board
    #[inline]
    pub fn step(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// Point reflection through the board centre
    #[inline]
    pub fn rotated_180(self) -> Self {
        let last = BOARD_SIZE as u8 - 1;
        Self {
            row: last - self.row,
            col: last - self.col,
        }
    }

    /// Algebraic label, e.g. `d3` for (2, 3)
    pub fn label(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }

    /// Iterate all 64 positions in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
