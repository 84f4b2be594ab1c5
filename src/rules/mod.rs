//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Move legality and disc flipping (bracketing in eight directions)
//! - Scoring and the end-of-game outcome

pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use moves::{
    apply_move, flips_in_direction, get_flipped_positions, has_legal_move, is_legal_at,
    is_legal_move, legal_moves, MoveError, DIRECTIONS,
};
pub use outcome::{summary_text, Outcome, Score};
