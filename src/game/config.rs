use thiserror::Error;

use crate::palette;

/// Runtime tunables. Defaults reproduce the classic game: a one second tick,
/// three clicks to win, three prizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_interval_ms: u32,
    pub win_threshold: u32,
    pub prize_slots: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1_000,
            win_threshold: 3,
            prize_slots: 3,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroInterval,

    /// Browsers store interval delays as signed 32-bit milliseconds.
    #[error("tick interval {0} ms exceeds the browser timer range")]
    IntervalTooLong(u32),

    #[error("win threshold must be at least one click")]
    ZeroThreshold,

    #[error("prize slots must be between 1 and {max}, got {got}")]
    PrizeSlots { got: usize, max: usize },
}

impl GameConfig {
    pub fn with_tick_interval(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.tick_interval_ms > i32::MAX as u32 {
            return Err(ConfigError::IntervalTooLong(self.tick_interval_ms));
        }
        if self.win_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        let max = palette::registry().len();
        if self.prize_slots == 0 || self.prize_slots > max {
            return Err(ConfigError::PrizeSlots { got: self.prize_slots, max });
        }
        Ok(self)
    }
}
