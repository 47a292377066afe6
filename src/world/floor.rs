//! Floor data structure
//!
//! A single dungeon floor, parsed once from a floor-plan text resource.
//!
//! The plan format is a header line holding the row and column counts,
//! followed by one line of tile characters per row:
//!
//! ```text
//! 3 5
//! -----
//! -sox-
//! -----
//! ```

use rand::Rng;

use super::position::Position;
use super::tile::{Tile, TileType};
use crate::entities::Enemy;
use crate::error::{GameError, GameResult};

/// A dungeon floor
#[derive(Debug, Clone)]
pub struct Floor {
    id: usize,
    difficulty: u32,
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    start_pos: Position,
    /// The plan characters, kept for the printable map
    plan_rows: Vec<String>,
}

impl Floor {
    /// Parse a floor plan. `name` is only used in error messages.
    pub fn parse(
        name: &str,
        text: &str,
        difficulty: u32,
        id: usize,
        rng: &mut impl Rng,
    ) -> GameResult<Self> {
        let text = text.trim();
        let (header, body) = text
            .split_once('\n')
            .ok_or_else(|| GameError::floor_plan(name, "missing tile grid"))?;

        let mut dims = header.split_whitespace().map(str::parse::<usize>);
        let (rows, cols) = match (dims.next(), dims.next(), dims.next()) {
            (Some(Ok(rows)), Some(Ok(cols)), None)
                if rows > 0 && cols > 0 && rows.checked_mul(cols).is_some() =>
            {
                (rows, cols)
            }
            _ => {
                return Err(GameError::floor_plan(
                    name,
                    format!("bad header {:?}, expected \"<rows> <cols>\"", header.trim()),
                ))
            }
        };

        let lines: Vec<&str> = body.lines().map(str::trim_end).collect();
        if lines.len() < rows {
            return Err(GameError::floor_plan(
                name,
                format!("expected {} rows, found {}", rows, lines.len()),
            ));
        }

        // Sized as rows are read; the header alone is not trusted
        let mut tiles = Vec::new();
        let mut plan_rows = Vec::with_capacity(rows);
        let mut start = None;

        for (y, line) in lines.iter().take(rows).enumerate() {
            let chars: Vec<char> = line.chars().take(cols).collect();
            if chars.len() < cols {
                return Err(GameError::floor_plan(
                    name,
                    format!("row {} has {} columns, expected {}", y, chars.len(), cols),
                ));
            }

            for (x, &c) in chars.iter().enumerate() {
                let tile_type = TileType::from_char(c).ok_or_else(|| {
                    GameError::floor_plan(name, format!("unknown tile {:?} at ({}, {})", c, x, y))
                })?;

                if tile_type == TileType::Start {
                    let pos = Position::new(x as i32, y as i32);
                    if let Some(previous) = start.replace(pos) {
                        return Err(GameError::floor_plan(
                            name,
                            format!("second start tile at ({}, {}), first at {:?}", x, y, previous),
                        ));
                    }
                }

                tiles.push(Self::make_tile(tile_type, difficulty, rng));
            }
            plan_rows.push(chars.into_iter().collect());
        }

        let start_pos = start.ok_or_else(|| GameError::floor_plan(name, "no start tile"))?;

        Ok(Self {
            id,
            difficulty,
            width: cols as i32,
            height: rows as i32,
            tiles,
            start_pos,
            plan_rows,
        })
    }

    /// Build a fully initialised tile; enemies and gold scale with difficulty
    fn make_tile(tile_type: TileType, difficulty: u32, rng: &mut impl Rng) -> Tile {
        match tile_type {
            TileType::Wall => Tile::Wall,
            TileType::Start => Tile::Start,
            TileType::Stairs => Tile::Stairs,
            TileType::Empty => Tile::Empty,
            TileType::Gold => Tile::Gold { value: difficulty + 1 },
            TileType::Enemy => Tile::Enemy(Enemy::new(difficulty + 1, rng)),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Where the player enters this floor
    pub fn start_pos(&self) -> Position {
        self.start_pos
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    #[inline]
    fn idx(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        if self.in_bounds(pos) {
            Some(&self.tiles[self.idx(pos)])
        } else {
            None
        }
    }

    pub fn tile_at_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if self.in_bounds(pos) {
            let idx = self.idx(pos);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    /// In bounds and not a wall
    pub fn is_valid_player_location(&self, pos: Position) -> bool {
        self.tile_at(pos).map_or(false, Tile::is_walkable)
    }

    /// The plan characters with a `P` drawn at the player's position
    pub fn printable_map(&self, player: Position) -> String {
        self.plan_rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                if y as i32 != player.y {
                    return row.clone();
                }
                row.chars()
                    .enumerate()
                    .map(|(x, c)| if x as i32 == player.x { 'P' } else { c })
                    .collect()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PLAN: &str = "7 9
---------
-sooeooo-
-o---o-o-
-oog-o-o-
-o---ooo-
-oooeo-x-
---------
";

    fn parse(text: &str) -> GameResult<Floor> {
        let mut rng = StdRng::seed_from_u64(7);
        Floor::parse("test", text, 0, 0, &mut rng)
    }

    #[test]
    fn test_parse_dimensions_and_start() {
        let floor = parse(PLAN).unwrap();
        assert_eq!(floor.width(), 9);
        assert_eq!(floor.height(), 7);
        assert_eq!(floor.start_pos(), Position::new(1, 1));
    }

    #[test]
    fn test_valid_player_locations() {
        let floor = parse(PLAN).unwrap();
        assert!(floor.is_valid_player_location(Position::new(2, 1)));
        assert!(floor.is_valid_player_location(Position::new(7, 5)));
        assert!(!floor.is_valid_player_location(Position::new(0, 0)));
        assert!(!floor.is_valid_player_location(Position::new(-1, -1)));
        assert!(!floor.is_valid_player_location(Position::new(9, 1)));
    }

    #[test]
    fn test_tiles_scale_with_difficulty() {
        let mut rng = StdRng::seed_from_u64(1);
        let floor = Floor::parse("test", PLAN, 2, 0, &mut rng).unwrap();
        match floor.tile_at(Position::new(3, 3)) {
            Some(Tile::Gold { value }) => assert_eq!(*value, 3),
            other => panic!("expected gold, got {:?}", other),
        }
        match floor.tile_at(Position::new(4, 1)) {
            Some(Tile::Enemy(enemy)) => assert_eq!(enemy.level(), 3),
            other => panic!("expected enemy, got {:?}", other),
        }
        assert!(matches!(floor.tile_at(Position::new(7, 5)), Some(Tile::Stairs)));
    }

    #[test]
    fn test_printable_map_marks_player() {
        let floor = parse(PLAN).unwrap();
        let map = floor.printable_map(Position::new(2, 1));
        let rows: Vec<&str> = map.lines().collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[1], "-sPoeooo-");
        assert_eq!(rows[5], "-oooeo-x-");
    }

    #[test]
    fn test_windows_line_endings() {
        let floor = parse(&PLAN.replace('\n', "\r\n")).unwrap();
        assert_eq!(floor.start_pos(), Position::new(1, 1));
    }

    #[test]
    fn test_rejects_bad_header() {
        assert!(matches!(parse("seven 9\n-"), Err(GameError::FloorPlan { .. })));
        assert!(matches!(parse("7\n---"), Err(GameError::FloorPlan { .. })));
    }

    #[test]
    fn test_rejects_oversized_header() {
        let huge = format!("2 {}\ns\no", usize::MAX);
        assert!(matches!(parse(&huge), Err(GameError::FloorPlan { .. })));
        // Product fits, but the rows are nowhere near that wide
        assert!(matches!(parse("2 100000000\n-s-\n---"), Err(GameError::FloorPlan { .. })));
    }

    #[test]
    fn test_rejects_short_rows() {
        assert!(parse("2 4\n----\n-s-\n").is_err());
        assert!(parse("3 3\n---\n-s-\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_tiles() {
        let err = parse("1 3\ns?o").unwrap_err();
        assert!(err.to_string().contains("unknown tile"));
    }

    #[test]
    fn test_requires_exactly_one_start() {
        assert!(parse("1 3\nooo").is_err());
        assert!(parse("1 3\nsos").is_err());
    }
}
