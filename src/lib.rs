//! Djeneric - A small turn-based terminal dungeon crawler
//!
//! Walk the floors of four dungeons, bump into monsters,
//! pocket whatever gold is lying around and find the stairs.

pub mod config;
pub mod error;
pub mod game;
pub mod world;
pub mod entities;
pub mod combat;
pub mod progression;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::{Game, GameState, StepOutcome};
pub use world::{Direction, Position, WorldMap};
