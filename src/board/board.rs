//! Board structure: two colour bitboards

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board
///
/// A cell is black, white or empty; the two bitboards never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black discs
    pub black: Bitboard,
    /// White discs
    pub white: Bitboard,
}

/// Error returned when parsing the text diagram of a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell character {ch:?} in row {row}")]
    UnknownCell { row: usize, ch: char },
}

impl Board {
    /// Board with no discs at all
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Standard opening: d4/e5 white, e4/d5 black
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(3, 4), Stone::Black);
        board.place_stone(Pos::new(4, 3), Stone::Black);
        board.place_stone(Pos::new(4, 4), Stone::White);
        board
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a stone on a cell, replacing whatever was there.
    /// No flipping; use `rules::apply_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.remove_stone(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Recolour an occupied cell to `player`
    #[inline]
    pub fn flip(&mut self, pos: Pos, player: Player) {
        debug_assert!(!self.is_empty(pos), "flipping empty cell {pos}");
        self.place_stone(pos, player.stone());
    }

    /// Get bitboard for a player
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Disc count for one player
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.stones(player).count()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// No cell is marked both black and white
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.black.bits() & self.white.bits() == 0
    }

    /// Same position seen upside down
    pub fn rotated_180(&self) -> Self {
        let mut out = Self::empty();
        for pos in self.black.iter_ones() {
            out.black.set(pos.rotated_180());
        }
        for pos in self.white.iter_ones() {
            out.white.set(pos.rotated_180());
        }
        out
    }

    /// Every disc changes colour
    pub fn swapped_colours(&self) -> Self {
        Self {
            black: self.white,
            white: self.black,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    Stone::Black => 'B',
                    Stone::White => 'W',
                    Stone::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse an 8-line diagram: `.` empty, `B`/`X` black, `W`/`O` white.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    expected: BOARD_SIZE,
                    found: cells.len(),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let stone = match ch {
                    '.' | '-' => Stone::Empty,
                    'B' | 'X' | 'b' | 'x' => Stone::Black,
                    'W' | 'O' | 'w' | 'o' => Stone::White,
                    _ => return Err(ParseBoardError::UnknownCell { row, ch }),
                };
                board.place_stone(Pos::new(row as u8, col as u8), stone);
            }
        }
        Ok(board)
    }
}
