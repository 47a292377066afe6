//! World map
//!
//! The fixed sequence of dungeons the player fights through.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::dungeon::Dungeon;
use super::floor::Floor;
use super::floorplans::FloorPlanLibrary;
use super::position::Position;
use crate::error::{GameError, GameResult};

/// Number of dungeons in a run
pub const DUNGEON_COUNT: usize = 4;

/// Where something is in the world: dungeon, floor and grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub dungeon: usize,
    pub floor: usize,
    pub pos: Position,
}

/// All dungeons, in visiting order with ascending difficulty
#[derive(Debug, Clone)]
pub struct WorldMap {
    dungeons: Vec<Dungeon>,
}

impl WorldMap {
    /// Build every dungeon up front; the final one is flagged as last
    pub fn new(library: &FloorPlanLibrary, rng: &mut impl Rng) -> GameResult<Self> {
        let mut dungeons = (0..DUNGEON_COUNT)
            .map(|id| Dungeon::new(id as u32, id, library, rng))
            .collect::<GameResult<Vec<_>>>()?;

        if let Some(last) = dungeons.last_mut() {
            last.set_last();
        }

        log::info!(
            "Built world map: {} dungeons, {} floors",
            dungeons.len(),
            dungeons.iter().map(Dungeon::floor_count).sum::<usize>()
        );

        Ok(Self { dungeons })
    }

    pub fn dungeon(&self, id: usize) -> GameResult<&Dungeon> {
        self.dungeons.get(id).ok_or(GameError::UnknownDungeon(id))
    }

    pub fn dungeon_mut(&mut self, id: usize) -> GameResult<&mut Dungeon> {
        self.dungeons.get_mut(id).ok_or(GameError::UnknownDungeon(id))
    }

    pub fn dungeon_count(&self) -> usize {
        self.dungeons.len()
    }

    pub fn floor(&self, dungeon: usize, floor: usize) -> GameResult<&Floor> {
        self.dungeon(dungeon)?
            .floor(floor)
            .ok_or(GameError::UnknownFloor { dungeon, floor })
    }

    pub fn floor_mut(&mut self, dungeon: usize, floor: usize) -> GameResult<&mut Floor> {
        self.dungeon_mut(dungeon)?
            .floor_mut(floor)
            .ok_or(GameError::UnknownFloor { dungeon, floor })
    }

    /// Entry point of the given floor
    pub fn start_of(&self, dungeon: usize, floor: usize) -> GameResult<Location> {
        let pos = self.floor(dungeon, floor)?.start_pos();
        Ok(Location { dungeon, floor, pos })
    }
}
