//! World module
//!
//! Contains floors, dungeons, the world map and the floor-plan loader.

pub mod position;
pub mod tile;
pub mod floor;
pub mod floorplans;
pub mod dungeon;
pub mod map;

pub use position::{Direction, Position};
pub use tile::{Tile, TileType};
pub use floor::Floor;
pub use floorplans::FloorPlanLibrary;
pub use dungeon::Dungeon;
pub use map::{Location, WorldMap, DUNGEON_COUNT};
