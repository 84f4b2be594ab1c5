//! Game configuration.
//!
//! Defaults match the classic desktop game: 60px cells, the opponent answers
//! half a second after the human, the human plays Black.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::board::Player;

/// What happens when the side to move has no legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EndRule {
    /// The stuck side passes; the game ends only when neither side can move.
    #[default]
    StandardPass,
    /// The game ends as soon as the side to move is stuck.
    FirstStuckSide,
}

/// Unrecognised end rule name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown end rule {0:?} (expected \"standard\" or \"first-stuck\")")]
pub struct ParseEndRuleError(pub String);

/// Case-insensitive. `standard` and `pass` select [`EndRule::StandardPass`];
/// `first-stuck`, `first_stuck` and `classic` select [`EndRule::FirstStuckSide`].
impl std::str::FromStr for EndRule {
    type Err = ParseEndRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "pass" => Ok(EndRule::StandardPass),
            "first-stuck" | "first_stuck" | "classic" => Ok(EndRule::FirstStuckSide),
            other => Err(ParseEndRuleError(other.to_string())),
        }
    }
}

/// Game and presentation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Side length of one board cell in points.
    pub cell_size: f32,

    /// Pause between the human's move and the opponent's reply.
    pub ai_delay: Duration,

    /// Opponent RNG seed. `None` draws a fresh seed per game.
    pub seed: Option<u64>,

    /// Colour controlled by the pointer.
    pub human: Player,

    pub end_rule: EndRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            ai_delay: Duration::from_millis(500),
            seed: None,
            human: Player::Black,
            end_rule: EndRule::default(),
        }
    }
}

impl GameConfig {
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    pub fn with_end_rule(mut self, end_rule: EndRule) -> Self {
        self.end_rule = end_rule;
        self
    }

    /// Defaults overridden by `REVERSI_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    /// Unparsable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("REVERSI_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => warn!(value = %raw, error = %e, "ignoring REVERSI_SEED"),
            }
        }

        if let Some(raw) = lookup("REVERSI_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.ai_delay = Duration::from_millis(ms),
                Err(e) => warn!(value = %raw, error = %e, "ignoring REVERSI_DELAY_MS"),
            }
        }

        if let Some(raw) = lookup("REVERSI_CELL_SIZE") {
            match raw.trim().parse::<f32>() {
                Ok(size) if size.is_finite() && size >= 8.0 => config.cell_size = size,
                Ok(size) => warn!(value = %size, "REVERSI_CELL_SIZE too small, keeping default"),
                Err(e) => warn!(value = %raw, error = %e, "ignoring REVERSI_CELL_SIZE"),
            }
        }

        if let Some(raw) = lookup("REVERSI_END_RULE") {
            match raw.parse::<EndRule>() {
                Ok(rule) => config.end_rule = rule,
                Err(e) => warn!(error = %e, "ignoring REVERSI_END_RULE"),
            }
        }

        config
    }
}
