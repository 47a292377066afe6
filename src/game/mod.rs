//! Game module - Core game logic and state management

mod message;
mod state;

pub use message::{GameMessage, MessageCategory, MessageLog};
pub use state::{help_text, Game, GameState, PlayingState, RunStats, StepOutcome};
