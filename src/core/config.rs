//! Session configuration and validation.
//!
//! The embedding UI validates its form fields however it likes; this module
//! is the last line of defense. A `SessionConfig` that would start a
//! nonsensical game (empty name, pair count outside [2, 10]) refuses to
//! build rather than silently clamping.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of pairs in a game.
pub const MIN_PAIRS: usize = 2;

/// Maximum number of pairs in a game.
pub const MAX_PAIRS: usize = 10;

/// Default time limit: five minutes.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 300;

/// Default delay between the second flip and evaluation.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 500;

/// Default countdown tick interval.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Why a session configuration was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The player name was empty or whitespace-only.
    #[error("player name must not be empty")]
    EmptyPlayerName,

    /// The pair count was outside [{MIN_PAIRS}, {MAX_PAIRS}].
    #[error("pair count must be between {MIN_PAIRS} and {MAX_PAIRS}, got {got}")]
    PairCountOutOfRange {
        /// The rejected value.
        got: usize,
    },

    /// A timing knob was set to zero.
    #[error("{knob} must be greater than zero")]
    ZeroDuration {
        /// Which knob was zero.
        knob: &'static str,
    },
}

/// Validated configuration for one game session.
///
/// Built with [`SessionConfig::new`], customized with builder-style setters:
///
/// ```
/// use memory_match::SessionConfig;
///
/// let config = SessionConfig::new("ada", 6)
///     .unwrap()
///     .with_time_limit_secs(120)
///     .unwrap();
/// assert_eq!(config.pair_count(), 6);
/// assert_eq!(config.time_limit_secs(), 120);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    player_name: String,
    pair_count: usize,
    time_limit_secs: u32,
    reveal_delay_ms: u64,
    tick_interval_ms: u64,
}

impl SessionConfig {
    /// Create a configuration with default timing.
    ///
    /// Returns an error if the name is empty (after trimming) or the pair
    /// count falls outside [`MIN_PAIRS`]..=[`MAX_PAIRS`].
    pub fn new(player_name: impl Into<String>, pair_count: usize) -> Result<Self, ConfigError> {
        let player_name = player_name.into();
        if player_name.trim().is_empty() {
            return Err(ConfigError::EmptyPlayerName);
        }
        if !(MIN_PAIRS..=MAX_PAIRS).contains(&pair_count) {
            return Err(ConfigError::PairCountOutOfRange { got: pair_count });
        }

        Ok(Self {
            player_name,
            pair_count,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        })
    }

    /// Set the countdown length in seconds.
    pub fn with_time_limit_secs(mut self, secs: u32) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::ZeroDuration {
                knob: "time limit",
            });
        }
        self.time_limit_secs = secs;
        Ok(self)
    }

    /// Set the delay between the second flip and evaluation, in milliseconds.
    pub fn with_reveal_delay_ms(mut self, ms: u64) -> Result<Self, ConfigError> {
        if ms == 0 {
            return Err(ConfigError::ZeroDuration {
                knob: "reveal delay",
            });
        }
        self.reveal_delay_ms = ms;
        Ok(self)
    }

    /// Set the countdown tick interval in milliseconds.
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Result<Self, ConfigError> {
        if ms == 0 {
            return Err(ConfigError::ZeroDuration {
                knob: "tick interval",
            });
        }
        self.tick_interval_ms = ms;
        Ok(self)
    }

    /// The player's display name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Countdown length in seconds.
    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    /// Delay between the second flip and evaluation, in milliseconds.
    #[must_use]
    pub fn reveal_delay_ms(&self) -> u64 {
        self.reveal_delay_ms
    }

    /// Countdown tick interval in milliseconds.
    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = SessionConfig::new("ada", 5).unwrap();

        assert_eq!(config.player_name(), "ada");
        assert_eq!(config.pair_count(), 5);
        assert_eq!(config.time_limit_secs(), DEFAULT_TIME_LIMIT_SECS);
        assert_eq!(config.reveal_delay_ms(), DEFAULT_REVEAL_DELAY_MS);
        assert_eq!(config.tick_interval_ms(), DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            SessionConfig::new("", 5).unwrap_err(),
            ConfigError::EmptyPlayerName
        );
        assert_eq!(
            SessionConfig::new("   ", 5).unwrap_err(),
            ConfigError::EmptyPlayerName
        );
    }

    #[test]
    fn test_pair_count_bounds() {
        assert!(SessionConfig::new("ada", MIN_PAIRS).is_ok());
        assert!(SessionConfig::new("ada", MAX_PAIRS).is_ok());

        assert_eq!(
            SessionConfig::new("ada", 1).unwrap_err(),
            ConfigError::PairCountOutOfRange { got: 1 }
        );
        assert_eq!(
            SessionConfig::new("ada", 11).unwrap_err(),
            ConfigError::PairCountOutOfRange { got: 11 }
        );
        assert_eq!(
            SessionConfig::new("ada", 0).unwrap_err(),
            ConfigError::PairCountOutOfRange { got: 0 }
        );
    }

    #[test]
    fn test_zero_durations_rejected() {
        let config = SessionConfig::new("ada", 3).unwrap();

        assert!(config.clone().with_time_limit_secs(0).is_err());
        assert!(config.clone().with_reveal_delay_ms(0).is_err());
        assert!(config.with_tick_interval_ms(0).is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = SessionConfig::new("ada", 3)
            .unwrap()
            .with_time_limit_secs(60)
            .unwrap()
            .with_reveal_delay_ms(250)
            .unwrap()
            .with_tick_interval_ms(500)
            .unwrap();

        assert_eq!(config.time_limit_secs(), 60);
        assert_eq!(config.reveal_delay_ms(), 250);
        assert_eq!(config.tick_interval_ms(), 500);
    }

    #[test]
    fn test_error_messages() {
        let err = SessionConfig::new("ada", 42).unwrap_err();
        assert_eq!(
            err.to_string(),
            "pair count must be between 2 and 10, got 42"
        );
    }
}
