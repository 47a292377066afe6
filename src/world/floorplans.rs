//! Floor-plan loader
//!
//! Loads floor plans from an optional override directory, with fallback
//! to the plans embedded in the binary.

use std::fs;
use std::path::PathBuf;

use rand::Rng;

use crate::error::{GameError, GameResult};

/// Number of plan variants per difficulty tier
pub const VARIANTS: u32 = 3;

/// Highest difficulty tier that ships with plans
pub const MAX_DIFFICULTY: u32 = 4;

const EMBEDDED: [[&str; VARIANTS as usize]; MAX_DIFFICULTY as usize + 1] = [
    [
        include_str!("../../assets/floorplans/floorplan0-1.txt"),
        include_str!("../../assets/floorplans/floorplan0-2.txt"),
        include_str!("../../assets/floorplans/floorplan0-3.txt"),
    ],
    [
        include_str!("../../assets/floorplans/floorplan1-1.txt"),
        include_str!("../../assets/floorplans/floorplan1-2.txt"),
        include_str!("../../assets/floorplans/floorplan1-3.txt"),
    ],
    [
        include_str!("../../assets/floorplans/floorplan2-1.txt"),
        include_str!("../../assets/floorplans/floorplan2-2.txt"),
        include_str!("../../assets/floorplans/floorplan2-3.txt"),
    ],
    [
        include_str!("../../assets/floorplans/floorplan3-1.txt"),
        include_str!("../../assets/floorplans/floorplan3-2.txt"),
        include_str!("../../assets/floorplans/floorplan3-3.txt"),
    ],
    [
        include_str!("../../assets/floorplans/floorplan4-1.txt"),
        include_str!("../../assets/floorplans/floorplan4-2.txt"),
        include_str!("../../assets/floorplans/floorplan4-3.txt"),
    ],
];

/// Source of floor-plan text
#[derive(Debug, Clone, Default)]
pub struct FloorPlanLibrary {
    dir: Option<PathBuf>,
}

impl FloorPlanLibrary {
    /// Embedded plans only
    pub fn embedded() -> Self {
        Self { dir: None }
    }

    /// Prefer plans from `dir`, falling back to the embedded ones
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: Some(dir.into()) }
    }

    /// File name for a plan, e.g. `floorplan2-3.txt`
    pub fn file_name(difficulty: u32, variant: u32) -> String {
        format!("floorplan{}-{}.txt", difficulty, variant)
    }

    /// Pick a random variant for the difficulty and load it.
    /// Returns the plan's file name alongside its text.
    pub fn choose(&self, difficulty: u32, rng: &mut impl Rng) -> GameResult<(String, String)> {
        let variant = rng.gen_range(1..=VARIANTS);
        let text = self.load(difficulty, variant)?;
        Ok((Self::file_name(difficulty, variant), text))
    }

    /// Load a specific plan variant (1-based)
    pub fn load(&self, difficulty: u32, variant: u32) -> GameResult<String> {
        let name = Self::file_name(difficulty, variant);

        if let Some(dir) = &self.dir {
            let path = dir.join(&name);
            if path.exists() {
                return fs::read_to_string(&path).map_err(|source| GameError::Io { path, source });
            }
            log::warn!("Floor plan {:?} not found, using built-in copy", path);
        }

        Self::builtin(difficulty, variant)
            .map(str::to_string)
            .ok_or(GameError::UnknownDifficulty(difficulty))
    }

    fn builtin(difficulty: u32, variant: u32) -> Option<&'static str> {
        let variant = variant.checked_sub(1)?;
        EMBEDDED
            .get(difficulty as usize)
            .and_then(|plans| plans.get(variant as usize))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Floor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_embedded_plan_parses() {
        let library = FloorPlanLibrary::embedded();
        let mut rng = StdRng::seed_from_u64(3);
        for difficulty in 0..=MAX_DIFFICULTY {
            for variant in 1..=VARIANTS {
                let name = FloorPlanLibrary::file_name(difficulty, variant);
                let text = library.load(difficulty, variant).unwrap();
                let floor = Floor::parse(&name, &text, difficulty, 0, &mut rng);
                assert!(floor.is_ok(), "{} failed: {:?}", name, floor.err());
            }
        }
    }

    #[test]
    fn test_unknown_difficulty() {
        let library = FloorPlanLibrary::embedded();
        assert!(matches!(library.load(9, 1), Err(GameError::UnknownDifficulty(9))));
        assert!(library.load(0, 0).is_err());
    }

    #[test]
    fn test_missing_override_falls_back() {
        let library = FloorPlanLibrary::with_dir("no/such/dir");
        assert_eq!(library.load(0, 1).unwrap(), EMBEDDED[0][0]);
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("djeneric-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_override_file_replaces_embedded_plan() {
        let dir = scratch_dir("override");
        let plan = "3 5\n-----\n-sox-\n-----\n";
        fs::write(dir.join("floorplan0-1.txt"), plan).unwrap();

        let library = FloorPlanLibrary::with_dir(&dir);
        assert_eq!(library.load(0, 1).unwrap(), plan);
        // Other variants still come from the binary
        assert_eq!(library.load(0, 2).unwrap(), EMBEDDED[0][1]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unreadable_override_is_an_error() {
        let dir = scratch_dir("unreadable");
        fs::create_dir(dir.join("floorplan0-1.txt")).unwrap();

        let library = FloorPlanLibrary::with_dir(&dir);
        assert!(matches!(library.load(0, 1), Err(GameError::Io { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_choose_stays_in_range() {
        let library = FloorPlanLibrary::embedded();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let (name, _) = library.choose(1, &mut rng).unwrap();
            assert!(name.starts_with("floorplan1-"));
        }
    }
}
