use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_BOT_DELAY_MS: u64 = 500;

const MAX_BOT_DELAY_MS: u64 = 60_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentMode {
    TwoPlayers,
    VsBot,
}

impl OpponentMode {
    pub fn is_vs_bot(&self) -> bool {
        matches!(self, OpponentMode::VsBot)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub opponent: OpponentMode,
    /// Artificial thinking delay before the bot's move lands. Zero applies
    /// the bot move synchronously.
    pub bot_delay_ms: u64,
    /// Whether switching between two-player and vs-bot mode clears the
    /// tally. Off by default: restarts and mode switches keep the scores.
    pub reset_scores_on_mode_change: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            opponent: OpponentMode::VsBot,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            reset_scores_on_mode_change: false,
        }
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "Bot delay ({} ms) cannot exceed {} ms",
                self.bot_delay_ms, MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}
