//! Automated opponent
//!
//! The opponent is a [`MoveSelector`]: given a board and the side to move it
//! returns one legal position. [`RandomOpponent`] picks uniformly among the
//! legal moves with a seedable ChaCha8 generator, so a fixed seed replays the
//! same game.
//!
//! # Example
//!
//! ```
//! use reversi::{Game, RandomOpponent};
//!
//! let mut game = Game::new();
//! let mut opponent = RandomOpponent::seeded(42);
//!
//! while !game.is_over() {
//!     game.play_with(&mut opponent).unwrap();
//! }
//! assert!(game.score().total() <= 64);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{info, warn};

use crate::board::{Board, Player, Pos};
use crate::rules::{self, MoveError};

/// Chooses a move for `player`. Must return a legal position, or `None` when
/// there is none.
pub trait MoveSelector {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Pos>;

    /// Called when the game it plays in starts over
    fn new_game(&mut self) {}
}

/// Failure to get a usable move out of a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpponentError {
    #[error("{0} has no move to play")]
    NoMove(Player),
    #[error("selected move was rejected: {0}")]
    Move(#[from] MoveError),
}

/// Uniform choice among legal moves.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    rng: ChaCha8Rng,
    seed: u64,
    /// Replay the same seed on every new game
    fixed: bool,
}

impl RandomOpponent {
    /// Deterministic opponent: same seed, same choices.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fixed: true,
        }
    }

    /// Opponent with a fresh OS-provided seed. The seed is logged so a game
    /// can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        info!(seed, "opponent seeded");
        Self {
            fixed: false,
            ..Self::seeded(seed)
        }
    }

    /// Seeded if `seed` is given, otherwise from entropy
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick one element of `moves`, `None` if empty
    pub fn choose(&mut self, moves: &[Pos]) -> Option<Pos> {
        moves.choose(&mut self.rng).copied()
    }
}

impl MoveSelector for RandomOpponent {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        let moves = rules::legal_moves(board, player);
        let choice = self.choose(&moves);
        if choice.is_none() {
            warn!(%player, "asked to move without a legal move");
        }
        choice
    }

    fn new_game(&mut self) {
        *self = if self.fixed {
            Self::seeded(self.seed)
        } else {
            Self::from_entropy()
        };
    }
}
