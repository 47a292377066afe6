//! Dungeons
//!
//! A dungeon is an ordered stack of floors sharing one difficulty tier.
//! The tier doubles as the index of its deepest floor.

use rand::Rng;

use super::floor::Floor;
use super::floorplans::FloorPlanLibrary;
use crate::error::GameResult;

/// A dungeon and all of its floors
#[derive(Debug, Clone)]
pub struct Dungeon {
    /// 0 (easy) to 4 (boss tier)
    difficulty: u32,
    id: usize,
    floors: Vec<Floor>,
    is_last: bool,
}

impl Dungeon {
    /// Build `difficulty + 1` floors from randomly chosen plans
    pub fn new(
        difficulty: u32,
        id: usize,
        library: &FloorPlanLibrary,
        rng: &mut impl Rng,
    ) -> GameResult<Self> {
        let floors = (0..=difficulty as usize)
            .map(|floor_id| {
                let (name, text) = library.choose(difficulty, rng)?;
                log::debug!("Dungeon {} floor {} uses {}", id, floor_id, name);
                Floor::parse(&name, &text, difficulty, floor_id, rng)
            })
            .collect::<GameResult<Vec<_>>>()?;

        Ok(Self {
            difficulty,
            id,
            floors,
            is_last: false,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn floor(&self, id: usize) -> Option<&Floor> {
        self.floors.get(id)
    }

    pub fn floor_mut(&mut self, id: usize) -> Option<&mut Floor> {
        self.floors.get_mut(id)
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Whether the stairs on this dungeon's deepest floor end the game
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn set_last(&mut self) {
        self.is_last = true;
    }

    /// Flavour text shown on entering the dungeon
    pub fn intro(&self) -> &'static str {
        match self.difficulty {
            0 => "You stride into the fiendishly not very difficult Caverns of Adoddle",
            1 => "You hold your breath as you creep through the back entrance of The Putrescent Castle of Rafflesia",
            2 => "You take some aspirin as you prepare to navigate the Torturous Labyrinth of Moderate-To-Really-Quite-Painful Toothache",
            3 => "The Damnable Mines of Drastic Dereliction dare your doughty derriere through its dreadful doors",
            _ => "Uh-oh, you've really done it now. Good luck in the Final Caverns Of Try-Not-To-Die",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(difficulty: u32) -> Dungeon {
        let mut rng = StdRng::seed_from_u64(5);
        Dungeon::new(difficulty, difficulty as usize, &FloorPlanLibrary::embedded(), &mut rng).unwrap()
    }

    #[test]
    fn test_floor_count_follows_difficulty() {
        for difficulty in 0..=4 {
            let dungeon = build(difficulty);
            assert_eq!(dungeon.floor_count(), difficulty as usize + 1);
            for id in 0..dungeon.floor_count() {
                let floor = dungeon.floor(id).unwrap();
                assert_eq!(floor.id(), id);
                assert_eq!(floor.difficulty(), difficulty);
            }
            assert!(dungeon.floor(dungeon.floor_count()).is_none());
        }
    }

    #[test]
    fn test_intro_per_tier() {
        assert!(build(0).intro().contains("Caverns of Adoddle"));
        assert!(build(4).intro().contains("Try-Not-To-Die"));
    }

    #[test]
    fn test_last_flag() {
        let mut dungeon = build(1);
        assert!(!dungeon.is_last());
        dungeon.set_last();
        assert!(dungeon.is_last());
    }
}
