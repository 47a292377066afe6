//! Error types
//!
//! Everything fallible in the library funnels into [`GameError`].

use std::path::PathBuf;

use thiserror::Error;

use crate::world::Position;

/// Errors raised by the game engine
#[derive(Debug, Error)]
pub enum GameError {
    /// A floor plan could not be parsed
    #[error("floor plan {name}: {reason}")]
    FloorPlan { name: String, reason: String },

    /// A floor plan file exists but could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No embedded or on-disk floor plans exist for this difficulty
    #[error("no floor plans for difficulty {0}")]
    UnknownDifficulty(u32),

    /// Damage values must be strictly positive
    #[error("damage must be positive, got {0}")]
    InvalidDamage(i32),

    /// Dungeon lookup failed
    #[error("no dungeon with id {0}")]
    UnknownDungeon(usize),

    /// Floor lookup failed within a dungeon
    #[error("dungeon {dungeon} has no floor {floor}")]
    UnknownFloor { dungeon: usize, floor: usize },

    /// The player is standing somewhere that has no tile
    #[error("no tile at {0:?}")]
    NoTile(Position),
}

/// Result type used throughout the library
pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    pub(crate) fn floor_plan(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FloorPlan {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
