//! Characters that live on the map

pub mod character;
pub mod enemies;
pub mod player;

pub use character::Character;
pub use enemies::Enemy;
pub use player::Player;
