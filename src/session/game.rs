//! The `GameSession` state machine.
//!
//! One session owns one shuffled board, the current selection, the score,
//! the countdown, and the three timers that drive it: a recurring tick, a
//! one-shot evaluation delay after the second flip, and a one-shot expiry
//! deadline. All three are jointly cancelled the instant the session goes
//! terminal.
//!
//! ## Phases
//!
//! ```text
//! Setup → Playing → { Won | Lost }
//! ```
//!
//! `Won` and `Lost` are absorbing: every operation is a silent no-op once
//! the session is terminal. This is deliberate — UI layers cannot always
//! prevent a stale click or an already-batched timer event, so the guards
//! live here instead of erroring.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{Board, GameRng, Rank, SessionConfig, SlotState};

use super::events::RenderCommand;
use super::scheduler::{Scheduler, TimerId};

/// Top-level session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, board dealt, clock not yet running.
    Setup,
    /// Clock running, slots selectable.
    Playing,
    /// Every pair matched before the countdown ran out. Terminal.
    Won,
    /// The countdown ran out first. Terminal.
    Lost,
}

impl Phase {
    /// Whether this phase accepts no further mutation.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "Setup",
            Phase::Playing => "Playing",
            Phase::Won => "Won",
            Phase::Lost => "Lost",
        };
        write!(f, "{}", name)
    }
}

/// Timer events the session schedules against its own clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerEvent {
    Tick,
    Evaluate,
    Expire,
}

/// One game of memory: board, selection, score, countdown, timers.
///
/// Construct with [`GameSession::new`], then call [`GameSession::start`] to
/// begin the countdown. Feed player clicks in with
/// [`GameSession::select_slot`] and elapsed time with
/// [`GameSession::advance`]; apply the returned [`RenderCommand`]s in order.
///
/// ```
/// use memory_match::{GameSession, Phase, SessionConfig};
///
/// let config = SessionConfig::new("ada", 2).unwrap();
/// let mut session = GameSession::new(config, 42);
///
/// let commands = session.start();
/// assert!(!commands.is_empty()); // initial countdown repaint
/// assert_eq!(session.phase(), Phase::Playing);
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    /// Face-up, unresolved slot indices. Never more than two.
    selection: SmallVec<[usize; 2]>,
    matched_pairs: usize,
    remaining_seconds: u32,
    phase: Phase,
    scheduler: Scheduler<TimerEvent>,
    tick_timer: Option<TimerId>,
    eval_timer: Option<TimerId>,
    expiry_timer: Option<TimerId>,
}

impl GameSession {
    /// Create a session in `Setup` with a freshly shuffled board.
    ///
    /// The config is already validated; the seed makes the shuffle
    /// reproducible. Nothing is scheduled until [`GameSession::start`].
    #[must_use]
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = Board::new(config.pair_count(), &mut rng);
        let remaining_seconds = config.time_limit_secs();

        debug!(
            player = config.player_name(),
            pairs = config.pair_count(),
            seed,
            "session created"
        );

        Self {
            config,
            board,
            selection: SmallVec::new(),
            matched_pairs: 0,
            remaining_seconds,
            phase: Phase::Setup,
            scheduler: Scheduler::new(),
            tick_timer: None,
            eval_timer: None,
            expiry_timer: None,
        }
    }

    /// Start the game: `Setup → Playing`, countdown scheduled.
    ///
    /// Emits the initial countdown repaint. No-op in any other phase.
    pub fn start(&mut self) -> Vec<RenderCommand> {
        if self.phase != Phase::Setup {
            return Vec::new();
        }

        self.phase = Phase::Playing;
        self.tick_timer = Some(
            self.scheduler
                .schedule_every(self.config.tick_interval_ms(), TimerEvent::Tick),
        );
        self.expiry_timer = Some(self.scheduler.schedule_once(
            u64::from(self.config.time_limit_secs()) * 1000,
            TimerEvent::Expire,
        ));

        info!(
            player = self.config.player_name(),
            pairs = self.config.pair_count(),
            "game started"
        );

        vec![RenderCommand::time_update(self.remaining_seconds)]
    }

    /// The player clicked a slot.
    ///
    /// Reveals the slot and, on the second reveal, schedules evaluation
    /// after the configured delay. Silently ignored unless the session is
    /// `Playing`, the slot is `Hidden`, and fewer than two slots are
    /// already face up — this is what prevents double-flips and stale
    /// clicks.
    pub fn select_slot(&mut self, index: usize) -> Vec<RenderCommand> {
        if self.phase != Phase::Playing || self.selection.len() >= 2 {
            return Vec::new();
        }
        if self.board.state(index) != Some(SlotState::Hidden) {
            return Vec::new();
        }
        let Some(rank) = self.board.rank(index) else {
            return Vec::new();
        };

        self.board.set_state(index, SlotState::FaceUp);
        self.selection.push(index);
        debug!(index, %rank, "slot revealed");

        if self.selection.len() == 2 {
            self.eval_timer = Some(
                self.scheduler
                    .schedule_once(self.config.reveal_delay_ms(), TimerEvent::Evaluate),
            );
        }

        vec![RenderCommand::RevealSlot { index, rank }]
    }

    /// Resolve the two face-up slots. Fires after the reveal delay.
    ///
    /// Matching ranks retire both slots and score a pair; the last pair
    /// wins the game. Mismatched ranks re-cover both slots. Either way the
    /// selection clears. No-op unless `Playing` with exactly two slots
    /// selected.
    pub fn evaluate(&mut self) -> Vec<RenderCommand> {
        if self.phase != Phase::Playing {
            return Vec::new();
        }
        self.eval_timer = None;
        if self.selection.len() != 2 {
            return Vec::new();
        }
        let (a, b) = (self.selection[0], self.selection[1]);
        self.selection.clear();

        if self.board.rank(a) != self.board.rank(b) {
            self.board.set_state(a, SlotState::Hidden);
            self.board.set_state(b, SlotState::Hidden);
            debug!(a, b, "mismatch, slots re-covered");
            return vec![
                RenderCommand::HideSlot { index: a },
                RenderCommand::HideSlot { index: b },
            ];
        }

        self.board.set_state(a, SlotState::Matched);
        self.board.set_state(b, SlotState::Matched);
        self.matched_pairs += 1;
        debug!(
            a,
            b,
            matched = self.matched_pairs,
            total = self.total_pairs(),
            "pair matched"
        );

        let mut out = vec![
            RenderCommand::MarkMatched { index: a },
            RenderCommand::MarkMatched { index: b },
        ];

        if self.matched_pairs == self.total_pairs() {
            self.phase = Phase::Won;
            self.cancel_timers();
            info!(player = self.config.player_name(), "game won");
            out.push(RenderCommand::GameWon);
        }

        out
    }

    /// One countdown step. Fires once per tick interval while `Playing`.
    ///
    /// Decrements the remaining time (never below zero) and repaints the
    /// countdown; hitting zero expires the session. No-op once terminal,
    /// so a tick already batched when the game was won changes nothing.
    pub fn tick(&mut self) -> Vec<RenderCommand> {
        if self.phase != Phase::Playing {
            return Vec::new();
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        let mut out = vec![RenderCommand::time_update(self.remaining_seconds)];

        if self.remaining_seconds == 0 {
            out.extend(self.expire());
        }

        out
    }

    /// Time is up: `Playing → Lost`, all timers cancelled.
    ///
    /// Emits a final zeroed countdown repaint and the loss notification.
    /// No-op unless `Playing`, so the one-shot deadline firing after a win
    /// (or after the tick path already expired the session) does nothing.
    pub fn expire(&mut self) -> Vec<RenderCommand> {
        if self.phase != Phase::Playing {
            return Vec::new();
        }

        self.phase = Phase::Lost;
        self.remaining_seconds = 0;
        self.cancel_timers();
        info!(player = self.config.player_name(), "game lost");

        vec![RenderCommand::time_update(0), RenderCommand::GameLost]
    }

    /// Advance the session's clock, dispatching every timer that fires.
    ///
    /// This is the embedding driver: call it with wall-clock elapsed
    /// milliseconds (or logical time in tests) and apply the returned
    /// commands in order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<RenderCommand> {
        let fired = self.scheduler.advance(elapsed_ms);
        let mut out = Vec::new();

        for event in fired {
            match event {
                TimerEvent::Tick => out.extend(self.tick()),
                TimerEvent::Evaluate => out.extend(self.evaluate()),
                TimerEvent::Expire => out.extend(self.expire()),
            }
        }

        out
    }

    fn cancel_timers(&mut self) {
        for handle in [
            self.tick_timer.take(),
            self.eval_timer.take(),
            self.expiry_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            self.scheduler.cancel(handle);
        }
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player's display name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        self.config.player_name()
    }

    /// Total pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.config.pair_count()
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// The board (read-only).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Face-up, unresolved slot indices, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Rank at a slot, if the index is valid.
    #[must_use]
    pub fn slot_rank(&self, index: usize) -> Option<Rank> {
        self.board.rank(index)
    }

    /// Visibility state at a slot, if the index is valid.
    #[must_use]
    pub fn slot_state(&self, index: usize) -> Option<SlotState> {
        self.board.state(index)
    }
}
