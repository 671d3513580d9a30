//! # memory-match
//!
//! A pair-matching (concentration) card game engine.
//!
//! The crate is the game-state machine only: deck shuffling, card selection,
//! match evaluation, scoring, and the countdown. Input validation beyond the
//! session config and all rendering live outside — the embedding UI feeds
//! slot clicks and elapsed time in, and applies the [`RenderCommand`]s that
//! come back out.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: a seeded RNG and a logical clock. The same seed and
//!    the same event sequence replay the same game, tick for tick.
//!
//! 2. **Event-driven, single-threaded**: no threads, no wall clock, no
//!    blocking waits. The one suspension point (the evaluation delay after
//!    the second flip) is a deferred timer event, fired by [`Scheduler`].
//!
//! 3. **Phase guards over scheduler cleverness**: timer events that arrive
//!    after the session has gone terminal are silently ignored by the
//!    session's phase preconditions, so a stale callback can never mutate a
//!    finished game.
//!
//! ## Modules
//!
//! - `core`: RNG, deck construction, the board, session configuration
//! - `session`: the `GameSession` state machine, its scheduler, and the
//!   render commands it emits

pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, ConfigError, GameRng, Rank, SessionConfig, SlotState, MAX_PAIRS, MIN_PAIRS,
};

pub use crate::session::{GameSession, Phase, RenderCommand, Scheduler, TimerId};
