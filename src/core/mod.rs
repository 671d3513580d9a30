//! Core game types: RNG, deck construction, the board, configuration.
//!
//! Everything here is pure state with no notion of time. The clock and the
//! state machine that consumes these types live in `crate::session`.

pub mod board;
pub mod config;
pub mod deck;
pub mod rng;

pub use board::{Board, SlotState};
pub use config::{ConfigError, SessionConfig, MAX_PAIRS, MIN_PAIRS};
pub use deck::{build_deck, Rank};
pub use rng::GameRng;
