//! Game session for the Reversi GUI
//!
//! Wraps a [`Game`] with the bits the window needs: which colour the human
//! plays, the delayed opponent reply, and what to highlight. Time is passed in
//! explicitly so the pacing can be tested without a window.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::GameConfig;
use crate::rules::{summary_text, MoveError};
use crate::{Game, GameStatus, MoveSelector, Player, Pos, RandomOpponent};

/// Main game state
pub struct GameSession {
    pub game: Game,
    pub last_move: Option<Pos>,
    pub flipped: Vec<Pos>,
    pub message: Option<String>,
    config: GameConfig,
    opponent: Box<dyn MoveSelector>,
    /// When the opponent is due to reply
    opponent_due: Option<Instant>,
}

impl GameSession {
    /// Session against a [`RandomOpponent`] seeded from `config`
    pub fn new(config: GameConfig, now: Instant) -> Self {
        let opponent = RandomOpponent::new(config.seed);
        Self::with_opponent(config, Box::new(opponent), now)
    }

    pub fn with_opponent(config: GameConfig, opponent: Box<dyn MoveSelector>, now: Instant) -> Self {
        let mut session = Self {
            game: Game::with_end_rule(config.end_rule),
            last_move: None,
            flipped: Vec::new(),
            message: None,
            opponent,
            opponent_due: None,
            config,
        };
        session.start(now);
        session
    }

    /// Discard the game and start over. A fixed seed replays the same
    /// opponent choices.
    pub fn reset(&mut self, now: Instant) {
        self.game = Game::with_end_rule(self.config.end_rule);
        self.last_move = None;
        self.flipped.clear();
        self.message = None;
        self.opponent_due = None;
        self.opponent.new_game();
        self.start(now);
    }

    fn start(&mut self, now: Instant) {
        info!(human = %self.human(), end_rule = ?self.config.end_rule, "new game");
        // Human playing White waits for the opponent's opening move
        self.schedule_opponent(now);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn human(&self) -> Player {
        self.config.human
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && self.game.current_player() == self.human()
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && self.game.current_player() != self.human()
    }

    /// Opponent reply scheduled but not played yet
    pub fn is_ai_pending(&self) -> bool {
        self.opponent_due.is_some()
    }

    /// Attempt to place the human's disc
    pub fn try_place(&mut self, pos: Pos, now: Instant) -> Result<(), MoveError> {
        if self.game.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(MoveError::WrongTurn(self.human()));
        }

        let flipped = self
            .game
            .apply_move(pos.row as i32, pos.col as i32, self.human())?;
        self.record_move(pos, flipped);
        self.schedule_opponent(now);
        Ok(())
    }

    /// Play the opponent's move once its delay has elapsed.
    /// Returns true if a move was made.
    pub fn poll_opponent(&mut self, now: Instant) -> bool {
        match self.opponent_due {
            Some(due) if due <= now => {}
            _ => return false,
        }
        self.opponent_due = None;

        if !self.is_ai_turn() {
            return false;
        }

        match self.game.play_with(self.opponent.as_mut()) {
            Ok((pos, flipped)) => {
                self.record_move(pos, flipped);
                // Human passed: the opponent goes again
                self.schedule_opponent(now);
                true
            }
            Err(e) => {
                // Game is untouched; try again after another delay
                warn!(error = %e, "opponent move failed, retrying");
                self.message = Some(format!("Opponent error: {e}"));
                self.schedule_opponent(now);
                false
            }
        }
    }

    /// Time left before the opponent replies
    pub fn time_until_opponent(&self, now: Instant) -> Option<Duration> {
        self.opponent_due.map(|due| due.saturating_duration_since(now))
    }

    /// End-of-game dialog text, once the game is over
    pub fn summary(&self) -> Option<String> {
        match self.game.status() {
            GameStatus::Over(score) => Some(summary_text(score, self.human())),
            GameStatus::InProgress => None,
        }
    }

    /// One-line notice when someone had to pass
    pub fn pass_notice(&self) -> Option<String> {
        self.game.last_pass().map(|p| {
            if p == self.human() {
                "You have no legal move and pass.".to_string()
            } else {
                format!("{p} has no legal move and passes.")
            }
        })
    }

    fn record_move(&mut self, pos: Pos, flipped: Vec<Pos>) {
        self.last_move = Some(pos);
        self.flipped = flipped;
        self.message = None;
    }

    fn schedule_opponent(&mut self, now: Instant) {
        if self.is_ai_turn() {
            self.opponent_due = Some(now + self.config.ai_delay);
        }
    }
}
