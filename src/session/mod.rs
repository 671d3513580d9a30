//! The game session: state machine, logical clock, render commands.

pub mod events;
pub mod game;
pub mod scheduler;

pub use events::RenderCommand;
pub use game::{GameSession, Phase};
pub use scheduler::{Scheduler, TimerId};
