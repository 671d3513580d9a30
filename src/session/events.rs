//! Render commands emitted by the session.
//!
//! The core never touches a screen. Every state change that the player
//! should see comes out as a `RenderCommand` for the embedding UI to apply:
//! show a card face, re-cover a mismatched pair, retire a matched pair,
//! repaint the countdown, announce the outcome.

use serde::{Deserialize, Serialize};

use crate::core::Rank;

/// One instruction to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Show the rank's face image at this slot.
    RevealSlot {
        /// Board position.
        index: usize,
        /// The face to show.
        rank: Rank,
    },

    /// Restore the slot's hidden/back-face appearance (mismatch re-cover).
    HideSlot {
        /// Board position.
        index: usize,
    },

    /// Visually retire a matched slot.
    MarkMatched {
        /// Board position.
        index: usize,
    },

    /// Repaint the countdown.
    ///
    /// `seconds` is 0..60; rendered text zero-pads it to two digits (see
    /// [`RenderCommand::clock_text`]).
    TimeUpdate {
        /// Whole minutes remaining.
        minutes: u32,
        /// Leftover seconds remaining.
        seconds: u32,
    },

    /// The player matched every pair before the countdown ran out.
    GameWon,

    /// The countdown ran out first.
    GameLost,
}

impl RenderCommand {
    /// Build a `TimeUpdate` from a raw seconds-remaining count.
    #[must_use]
    pub fn time_update(remaining_seconds: u32) -> Self {
        Self::TimeUpdate {
            minutes: remaining_seconds / 60,
            seconds: remaining_seconds % 60,
        }
    }

    /// Countdown text for a `TimeUpdate`, seconds zero-padded to two digits.
    ///
    /// Returns `None` for other variants.
    #[must_use]
    pub fn clock_text(&self) -> Option<String> {
        match self {
            Self::TimeUpdate { minutes, seconds } => {
                Some(format!("{} min {:02} sec", minutes, seconds))
            }
            _ => None,
        }
    }
}
