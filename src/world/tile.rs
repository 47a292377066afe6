//! Tile definitions
//!
//! Tile kinds, their floor-plan characters and how they are drawn.

use serde::{Deserialize, Serialize};

use crate::entities::Enemy;

/// A single tile on a floor
#[derive(Debug, Clone)]
pub enum Tile {
    Wall,
    Start,
    Stairs,
    Empty,
    /// A pile of gold worth `value`
    Gold { value: u32 },
    /// A monster that fights anyone stepping here; its corpse stays put
    Enemy(Enemy),
}

impl Tile {
    pub fn tile_type(&self) -> TileType {
        match self {
            Tile::Wall => TileType::Wall,
            Tile::Start => TileType::Start,
            Tile::Stairs => TileType::Stairs,
            Tile::Empty => TileType::Empty,
            Tile::Gold { .. } => TileType::Gold,
            Tile::Enemy(_) => TileType::Enemy,
        }
    }

    pub fn is_walkable(&self) -> bool {
        self.tile_type().is_walkable()
    }

    pub fn name(&self) -> &str {
        match self {
            Tile::Enemy(enemy) => enemy.name(),
            other => other.tile_type().name(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Tile::Enemy(enemy) => enemy.description(),
            other => other.tile_type().description(),
        }
    }

    /// Glyph for the terminal map (dead enemies show as a corpse)
    pub fn glyph(&self) -> char {
        match self {
            Tile::Enemy(enemy) if !enemy.is_alive() => '%',
            other => other.tile_type().glyph(),
        }
    }

    pub fn fg_color(&self) -> (u8, u8, u8) {
        match self {
            Tile::Enemy(enemy) if !enemy.is_alive() => (110, 60, 60),
            other => other.tile_type().fg_color(),
        }
    }
}

/// Kinds of tiles in a floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Wall,
    Start,
    Stairs,
    Empty,
    Gold,
    Enemy,
}

impl TileType {
    /// Map a floor-plan character to its tile kind
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(TileType::Wall),
            's' => Some(TileType::Start),
            'x' => Some(TileType::Stairs),
            'o' => Some(TileType::Empty),
            'e' => Some(TileType::Enemy),
            'g' => Some(TileType::Gold),
            _ => None,
        }
    }

    /// The floor-plan character for this kind
    pub fn plan_char(&self) -> char {
        match self {
            TileType::Wall => '-',
            TileType::Start => 's',
            TileType::Stairs => 'x',
            TileType::Empty => 'o',
            TileType::Enemy => 'e',
            TileType::Gold => 'g',
        }
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, TileType::Wall)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TileType::Wall => "Wall",
            TileType::Start => "Start",
            TileType::Stairs => "Stairs",
            TileType::Empty => "Empty tile",
            TileType::Gold => "Gold",
            TileType::Enemy => "Enemy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TileType::Wall => "You cannot walk here",
            TileType::Start => "",
            TileType::Stairs => "Stairs!",
            TileType::Empty => "There is nothing here",
            TileType::Gold => "You found some gold!",
            TileType::Enemy => "",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Start => '<',
            TileType::Stairs => '>',
            TileType::Empty => '.',
            TileType::Gold => '$',
            TileType::Enemy => 'e',
        }
    }

    pub fn fg_color(&self) -> (u8, u8, u8) {
        match self {
            TileType::Wall => (130, 110, 90),
            TileType::Start => (120, 160, 220),
            TileType::Stairs => (200, 200, 200),
            TileType::Empty => (80, 80, 80),
            TileType::Gold => (255, 200, 50),
            TileType::Enemy => (200, 60, 60),
        }
    }
}
