//! Reversi (Othello) rules engine with a random opponent and an egui front end
//!
//! Standard 8x8 rules:
//! - A move must bracket at least one line of opponent discs
//! - Every bracketed line is flipped to the mover's colour
//! - A side without a legal move passes; the game ends when neither can move
//!   (or, with [`EndRule::FirstStuckSide`], as soon as the side to move is stuck)
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Legality, flipping and scoring
//! - [`game`]: Game state, turn order and end-of-game detection
//! - [`opponent`]: Move selection for the automated player
//! - [`config`]: Game and window settings
//! - [`ui`]: Desktop GUI
//!
//! # Quick Start
//!
//! ```
//! use reversi::{Game, Player, RandomOpponent};
//!
//! let mut game = Game::new();
//! let mut opponent = RandomOpponent::seeded(7);
//!
//! // Human (Black) opens, the opponent answers as White
//! game.apply_move(2, 3, Player::Black).unwrap();
//! let (pos, _flipped) = game.play_with(&mut opponent).unwrap();
//! println!("White plays {}", pos.label());
//! assert_eq!(game.current_player(), Player::Black);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod opponent;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE};
pub use config::{EndRule, GameConfig, ParseEndRuleError};
pub use game::{Game, GameStatus};
pub use opponent::{MoveSelector, OpponentError, RandomOpponent};
pub use rules::{MoveError, Outcome, Score};
