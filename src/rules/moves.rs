//! Move legality and flipping
//!
//! A move at `pos` is legal when, along at least one of the eight compass
//! directions, the adjacent cells form a non-empty run of opponent discs that
//! ends on a disc of the mover's colour. Exactly those runs are flipped.

use thiserror::Error;

use crate::board::{Bitboard, Board, Player, Pos};

/// Direction vectors (8 directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // N
    (1, 0),   // S
    (0, -1),  // W
    (0, 1),   // E
    (-1, -1), // NW
    (-1, 1),  // NE
    (1, -1),  // SW
    (1, 1),   // SE
];

/// Why a move was rejected. The board is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("move at {0} does not bracket any opponent disc")]
    NoFlips(Pos),
    #[error("it is not {0}'s turn")]
    WrongTurn(Player),
    #[error("the game is over")]
    GameOver,
}

/// Opponent discs captured along one direction.
///
/// Walks from the cell next to `pos`; the run counts only if it is non-empty
/// and terminated, on the board, by one of `player`'s discs.
pub fn flips_in_direction(board: &Board, pos: Pos, player: Player, (dr, dc): (i32, i32)) -> Bitboard {
    let mine = player.stone();
    let theirs = player.opponent().stone();
    let mut run = Bitboard::new();

    let mut cursor = pos.step(dr, dc);
    while let Some(p) = cursor {
        let stone = board.get(p);
        if stone == theirs {
            run.set(p);
            cursor = p.step(dr, dc);
        } else if stone == mine {
            return run;
        } else {
            break;
        }
    }

    // Ran off the board or hit an empty cell
    Bitboard::new()
}

/// All discs that a move at `pos` would flip (empty if the cell is taken).
pub fn get_flipped_positions(board: &Board, pos: Pos, player: Player) -> Bitboard {
    if !board.is_empty(pos) {
        return Bitboard::new();
    }

    let bits = DIRECTIONS
        .iter()
        .map(|&dir| flips_in_direction(board, pos, player, dir).bits())
        .fold(0u64, |acc, b| acc | b);
    Bitboard::from_bits(bits)
}

/// Check whether `player` may move at `pos`.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, player: Player) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| !flips_in_direction(board, pos, player, dir).is_empty())
}

/// Bounds-checked legality for raw coordinates (e.g. from pointer input).
pub fn is_legal_at(board: &Board, row: i32, col: i32, player: Player) -> bool {
    Pos::try_new(row, col).is_some_and(|pos| is_legal_move(board, pos, player))
}

/// Every legal move for `player`, in row-major order. Purely geometric: turn
/// order is [`crate::Game::legal_moves`]' concern.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    Pos::all().filter(|&pos| is_legal_move(board, pos, player)).collect()
}

#[inline]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Pos::all().any(|pos| is_legal_move(board, pos, player))
}

/// Place a disc and flip every bracketed run.
///
/// Returns the flipped positions in row-major order. On error the board is
/// left unchanged.
pub fn apply_move(board: &mut Board, pos: Pos, player: Player) -> Result<Vec<Pos>, MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied(pos));
    }

    let flips = get_flipped_positions(board, pos, player);
    if flips.is_empty() {
        return Err(MoveError::NoFlips(pos));
    }

    board.place_stone(pos, player.stone());
    for p in flips.iter_ones() {
        board.flip(p, player);
    }

    Ok(flips.iter_ones().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn board(text: &str) -> Board {
        text.parse().expect("valid diagram")
    }

    #[test]
    fn test_initial_black_moves() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Player::Black),
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    /// Geometry only; the game does not let White move first
    #[test]
    fn test_initial_white_replies() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Player::White),
            vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
        );
    }

    #[test]
    fn test_occupied_cell_is_never_legal() {
        let board = Board::new();
        for pos in [Pos::new(3, 3), Pos::new(3, 4), Pos::new(4, 3), Pos::new(4, 4)] {
            assert!(!is_legal_move(&board, pos, Player::Black));
            assert!(!is_legal_move(&board, pos, Player::White));
        }
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let board = Board::new();
        assert!(!is_legal_at(&board, -1, 3, Player::Black));
        assert!(!is_legal_at(&board, 2, 8, Player::Black));
        assert!(is_legal_at(&board, 2, 3, Player::Black));
    }

    #[test]
    fn test_black_d3_flips_d4() {
        let mut board = Board::new();
        let flipped = apply_move(&mut board, Pos::new(2, 3), Player::Black).unwrap();

        assert_eq!(flipped, vec![Pos::new(3, 3)]);
        assert_eq!(board.count(Player::Black), 4);
        assert_eq!(board.count(Player::White), 1);
        assert_eq!(board.get(Pos::new(4, 4)), Stone::White);
    }

    #[test]
    fn test_illegal_move_keeps_board() {
        let mut board = Board::new();
        let before = board;

        assert_eq!(
            apply_move(&mut board, Pos::new(0, 0), Player::Black),
            Err(MoveError::NoFlips(Pos::new(0, 0)))
        );
        assert_eq!(
            apply_move(&mut board, Pos::new(3, 3), Player::Black),
            Err(MoveError::Occupied(Pos::new(3, 3)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_run_to_edge_flips_nothing() {
        // White run reaches the east edge with no black cap
        let mut b = board(
            "........
             ........
             ........
             .B.WWWWW
             ........
             ........
             ........
             ........",
        );
        assert!(!is_legal_move(&b, Pos::new(3, 2), Player::Black));
        assert!(apply_move(&mut b, Pos::new(3, 2), Player::Black).is_err());
    }

    #[test]
    fn test_run_interrupted_by_empty_flips_nothing() {
        let b = board(
            "........
             ........
             ........
             ..WW.B..
             ........
             ........
             ........
             ........",
        );
        assert!(!is_legal_move(&b, Pos::new(3, 1), Player::Black));
    }

    #[test]
    fn test_multi_direction_flip() {
        let mut b = board(
            "B..B..B.
             .W.W.W..
             ..WWW...
             BWW.WWWB
             ..WWW...
             .W.W.W..
             B..B..B.
             ........",
        );
        let flipped = apply_move(&mut b, Pos::new(3, 3), Player::Black).unwrap();

        assert_eq!(flipped.len(), 17);
        assert_eq!(b.count(Player::White), 0);
        assert_eq!(b.count(Player::Black), 8 + 1 + 17);
    }

    #[test]
    fn test_only_bracketed_directions_flip() {
        // East run is capped by black, south run reaches an empty cell
        let mut b = board(
            "........
             ........
             ........
             ....WB..
             ...W....
             ........
             ........
             ........",
        );
        let flipped = apply_move(&mut b, Pos::new(3, 3), Player::Black).unwrap();

        assert_eq!(flipped, vec![Pos::new(3, 4)]);
        assert_eq!(b.get(Pos::new(4, 3)), Stone::White);
    }

    #[test]
    fn test_has_legal_move_matches_enumeration() {
        let b = board(
            "WWWWWWWW
             WWWWWWWW
             WWWWWWWW
             WWWWWWWW
             WWWWWWWW
             WWWWWWWW
             WWWWWWW.
             WWWWWWW.",
        );
        assert!(!has_legal_move(&b, Player::Black));
        assert!(legal_moves(&b, Player::Black).is_empty());
        assert!(!has_legal_move(&b, Player::White));
    }
}
