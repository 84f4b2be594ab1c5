//! Game state: board, side to move and end-of-game detection
//!
//! [`Game`] is the single owner of a position. Every mutation goes through
//! [`Game::apply_move`] (or its helpers) and [`Game::reset`], so the UI and
//! tests drive exactly the same code path.
//!
//! # Example
//!
//! ```
//! use reversi::{Game, Player, Pos};
//!
//! let mut game = Game::new();
//! let flipped = game.apply_move(2, 3, Player::Black).unwrap();
//!
//! assert_eq!(flipped, vec![Pos::new(3, 3)]);
//! assert_eq!(game.current_player(), Player::White);
//! assert_eq!((game.score().black, game.score().white), (4, 1));
//! ```

use tracing::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::config::EndRule;
use crate::opponent::{MoveSelector, OpponentError};
use crate::rules::{self, MoveError, Score};

/// Whether play continues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Nobody can move any more; final disc count
    Over(Score),
}

/// A game of Reversi
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current: Player,
    end_rule: EndRule,
    status: GameStatus,
    /// Side that had to pass after the last move, if any
    last_pass: Option<Player>,
    move_count: u32,
}

impl Game {
    /// Standard starting position, Black to move, standard passing
    pub fn new() -> Self {
        Self::with_end_rule(EndRule::default())
    }

    pub fn with_end_rule(end_rule: EndRule) -> Self {
        Self::from_board(Board::new(), Player::Black, end_rule)
    }

    /// Start from an arbitrary position. If `to_move` is already stuck the
    /// end rule is applied immediately.
    pub fn from_board(board: Board, to_move: Player, end_rule: EndRule) -> Self {
        debug_assert!(board.is_consistent(), "black and white discs overlap");
        let mut game = Self {
            board,
            current: to_move,
            end_rule,
            status: GameStatus::InProgress,
            last_pass: None,
            move_count: 0,
        };
        game.settle_turn();
        game
    }

    /// Throw the position away and start again with the same end rule
    pub fn reset(&mut self) {
        *self = Self::with_end_rule(self.end_rule);
        info!(end_rule = ?self.end_rule, "new game");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn end_rule(&self) -> EndRule {
        self.end_rule
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    #[inline]
    pub fn last_pass(&self) -> Option<Player> {
        self.last_pass
    }

    /// Moves applied since the start position
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// True when [`Game::apply_move`] would accept `player` at (row, col).
    /// Off-board, out of turn and finished games are all illegal.
    pub fn is_legal_move(&self, row: i32, col: i32, player: Player) -> bool {
        self.may_move(player) && rules::is_legal_at(&self.board, row, col, player)
    }

    /// Moves [`Game::apply_move`] would accept for `player`, row-major.
    /// Empty unless `player` is on move in a running game.
    pub fn legal_moves(&self, player: Player) -> Vec<Pos> {
        if !self.may_move(player) {
            return Vec::new();
        }
        rules::legal_moves(&self.board, player)
    }

    /// Legal moves for the side to move (empty once the game is over)
    pub fn current_legal_moves(&self) -> Vec<Pos> {
        self.legal_moves(self.current)
    }

    fn may_move(&self, player: Player) -> bool {
        !self.is_over() && player == self.current
    }

    /// Play `player`'s disc at (row, col).
    ///
    /// Rejected moves leave the game untouched. On success returns the
    /// flipped discs and hands the turn over, passing or ending the game
    /// according to the end rule.
    pub fn apply_move(&mut self, row: i32, col: i32, player: Player) -> Result<Vec<Pos>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if player != self.current {
            return Err(MoveError::WrongTurn(player));
        }

        let flipped = rules::apply_move(&mut self.board, pos, player)?;
        self.move_count += 1;
        debug!(%player, pos = %pos.label(), flipped = flipped.len(), "move applied");

        self.current = player.opponent();
        self.settle_turn();
        Ok(flipped)
    }

    /// Play at `pos` for the side to move
    pub fn play(&mut self, pos: Pos) -> Result<Vec<Pos>, MoveError> {
        self.apply_move(pos.row as i32, pos.col as i32, self.current)
    }

    /// Let `selector` choose and play a move for the side to move.
    /// Returns the chosen position and the discs it flipped.
    pub fn play_with(&mut self, selector: &mut dyn MoveSelector) -> Result<(Pos, Vec<Pos>), OpponentError> {
        if self.is_over() {
            return Err(OpponentError::Move(MoveError::GameOver));
        }
        let player = self.current;
        let pos = selector
            .select_move(&self.board, player)
            .ok_or(OpponentError::NoMove(player))?;
        let flipped = self.play(pos)?;
        Ok((pos, flipped))
    }

    /// Resolve whose turn it is after `current` was set to the next mover.
    fn settle_turn(&mut self) {
        self.last_pass = None;
        let next = self.current;
        if rules::has_legal_move(&self.board, next) {
            self.status = GameStatus::InProgress;
            return;
        }

        match self.end_rule {
            EndRule::StandardPass if rules::has_legal_move(&self.board, next.opponent()) => {
                info!(player = %next, "no legal move, passing");
                self.last_pass = Some(next);
                self.current = next.opponent();
                self.status = GameStatus::InProgress;
            }
            _ => {
                let score = self.score();
                info!(black = score.black, white = score.white, stuck = %next, "game over");
                self.status = GameStatus::Over(score);
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn board(text: &str) -> Board {
        text.parse().expect("valid diagram")
    }

    /// After Black takes h8 White has no reply, but Black can still play g8.
    fn white_stuck_after_h8() -> Board {
        board(
            "BBBBBBBB
             BBBBBBBB
             BBBBBBBB
             BBBBBBBB
             BBBBBBBB
             BBBBBBBB
             BBBBBBBW
             BBBBBW..",
        )
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.score(), Score { black: 2, white: 2 });
        assert_eq!(
            game.legal_moves(Player::Black),
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_only_side_to_move_has_moves() {
        let mut game = Game::new();
        assert!(game.legal_moves(Player::White).is_empty());
        assert!(!game.is_legal_move(2, 4, Player::White));
        assert!(game.is_legal_move(2, 3, Player::Black));

        game.apply_move(2, 3, Player::Black).unwrap();
        assert!(game.legal_moves(Player::Black).is_empty());
        assert_eq!(game.legal_moves(Player::White), game.current_legal_moves());
        for pos in game.legal_moves(Player::White) {
            let mut copy = game.clone();
            assert!(copy.apply_move(pos.row as i32, pos.col as i32, Player::White).is_ok());
        }
    }

    #[test]
    fn test_black_opening_move() {
        let mut game = Game::new();
        let flipped = game.apply_move(2, 3, Player::Black).unwrap();

        assert_eq!(flipped, vec![Pos::new(3, 3)]);
        assert_eq!(game.board().get(Pos::new(3, 3)), Stone::Black);
        assert_eq!(game.score(), Score { black: 4, white: 1 });
        assert_eq!(game.current_player(), Player::White);
        assert!(!game.is_legal_move(2, 3, Player::Black));
        assert!(!game.is_legal_move(2, 3, Player::White));
    }

    #[test]
    fn test_rejected_moves_leave_game_untouched() {
        let mut game = Game::new();
        let before = game.clone();

        assert_eq!(game.apply_move(0, 0, Player::Black), Err(MoveError::NoFlips(Pos::new(0, 0))));
        assert_eq!(
            game.apply_move(8, 3, Player::Black),
            Err(MoveError::OutOfBounds { row: 8, col: 3 })
        );
        assert_eq!(
            game.apply_move(-1, 0, Player::Black),
            Err(MoveError::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(game.apply_move(2, 4, Player::White), Err(MoveError::WrongTurn(Player::White)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_standard_rule_passes_stuck_side() {
        let mut game = Game::from_board(white_stuck_after_h8(), Player::Black, EndRule::StandardPass);
        assert_eq!(game.current_legal_moves(), vec![Pos::new(7, 6), Pos::new(7, 7)]);

        game.apply_move(7, 7, Player::Black).unwrap();

        assert_eq!(game.last_pass(), Some(Player::White));
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_legal_moves(), vec![Pos::new(7, 6)]);

        game.apply_move(7, 6, Player::Black).unwrap();
        assert_eq!(game.status(), GameStatus::Over(Score { black: 64, white: 0 }));
        assert!(game.board().is_full());
    }

    #[test]
    fn test_first_stuck_rule_ends_immediately() {
        let mut game = Game::from_board(white_stuck_after_h8(), Player::Black, EndRule::FirstStuckSide);
        game.apply_move(7, 7, Player::Black).unwrap();

        assert!(game.is_over());
        assert_eq!(game.last_pass(), None);
        assert_eq!(game.current_player(), Player::White);
        assert!(game.current_legal_moves().is_empty());
        assert!(game.legal_moves(Player::Black).is_empty());
        assert!(!game.is_legal_move(7, 6, Player::Black));
        assert_eq!(game.apply_move(7, 6, Player::White), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(7, 6, Player::Black), Err(MoveError::GameOver));
    }

    #[test]
    fn test_terminal_position_reports_over() {
        let game = Game::from_board(
            board(
                "WWWWWWWW
                 WWWWWWWW
                 WWWWWWWW
                 WWWWWWWW
                 WWWWWWWW
                 WWWWWWWW
                 WWWWWWW.
                 WWWWWWW.",
            ),
            Player::Black,
            EndRule::StandardPass,
        );
        assert_eq!(game.status(), GameStatus::Over(Score { black: 0, white: 62 }));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overlap")]
    fn test_overlapping_board_is_rejected() {
        let mut board = Board::new();
        board.white.set(Pos::new(3, 4));
        Game::from_board(board, Player::Black, EndRule::StandardPass);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut game = Game::with_end_rule(EndRule::FirstStuckSide);
        game.apply_move(2, 3, Player::Black).unwrap();
        game.reset();

        assert_eq!(game, Game::with_end_rule(EndRule::FirstStuckSide));
    }

    struct Fixed(Option<Pos>);

    impl MoveSelector for Fixed {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Option<Pos> {
            self.0
        }
    }

    #[test]
    fn test_play_with_selector() {
        let mut game = Game::new();
        assert_eq!(
            game.play_with(&mut Fixed(Some(Pos::new(5, 4)))),
            Ok((Pos::new(5, 4), vec![Pos::new(4, 4)]))
        );
        assert_eq!(game.current_player(), Player::White);

        let before = game.clone();
        assert_eq!(
            game.play_with(&mut Fixed(Some(Pos::new(0, 0)))),
            Err(OpponentError::Move(MoveError::NoFlips(Pos::new(0, 0))))
        );
        assert_eq!(game.play_with(&mut Fixed(None)), Err(OpponentError::NoMove(Player::White)));
        assert_eq!(game, before);
    }
}
