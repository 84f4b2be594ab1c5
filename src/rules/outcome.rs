//! Scoring and end-of-game outcome

use crate::board::{Board, Player};

/// Disc count per colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Count the discs on `board`
    pub fn of(board: &Board) -> Self {
        Self {
            black: board.count(Player::Black),
            white: board.count(Player::White),
        }
    }

    #[inline]
    pub fn total(self) -> u32 {
        self.black + self.white
    }

    #[inline]
    pub fn get(self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Player with more discs, `None` on a tie
    pub fn leader(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Result as seen by `player`
    pub fn outcome_for(self, player: Player) -> Outcome {
        match self.leader() {
            Some(p) if p == player => Outcome::Won,
            Some(_) => Outcome::Lost,
            None => Outcome::Tie,
        }
    }
}

/// Final result from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
    Tie,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "You won!",
            Outcome::Lost => "You lost!",
            Outcome::Tie => "Tie!",
        }
    }
}

/// Body of the end-of-game dialog, addressed to `human`
pub fn summary_text(score: Score, human: Player) -> String {
    format!(
        "End of the game!\nBlack: {}\nWhite: {}\n\n{}",
        score.black,
        score.white,
        score.outcome_for(human).message()
    )
}
