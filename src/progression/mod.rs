//! Progression systems

pub mod xp;
pub mod stats;

pub use xp::level_up_threshold;
pub use stats::PlayerStats;
