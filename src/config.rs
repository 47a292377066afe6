//! Game configuration
//!
//! Loads settings from a RON file, with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory before the platform config dir
const LOCAL_CONFIG: &str = "djeneric.ron";

/// Highest level a run may start at
pub const MAX_STARTING_LEVEL: u32 = 100;

/// Tunable settings for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Level the player starts (and restarts) at
    pub starting_level: u32,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    /// Directory with `floorplan{difficulty}-{variant}.txt` overrides
    pub floorplan_dir: Option<PathBuf>,
    /// How many messages the log keeps
    pub message_history: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_level: 1,
            seed: None,
            floorplan_dir: None,
            message_history: 100,
        }
    }
}

impl GameConfig {
    /// Load config from the first location that has one, or use defaults
    pub fn load() -> Self {
        for path in Self::search_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        log::info!("No config file found, using defaults");
        Self::default()
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match Self::from_ron(&content) {
                Ok(config) => {
                    log::info!("Config loaded from {:?}", path);
                    return config;
                }
                Err(e) => log::warn!("Failed to parse {:?}: {}", path, e),
            },
            Err(e) => log::warn!("Failed to read {:?}: {}", path, e),
        }
        Self::default()
    }

    /// Parse config from RON text
    pub fn from_ron(content: &str) -> Result<Self, ron::error::SpannedError> {
        let config: Self = ron::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Clamp `starting_level` into `1..=MAX_STARTING_LEVEL`. Level 0 deals
    /// no damage, and huge levels overflow the HP and XP formulas.
    pub fn sanitized(mut self) -> Self {
        let level = self.starting_level.clamp(1, MAX_STARTING_LEVEL);
        if level != self.starting_level {
            log::warn!(
                "starting_level {} is not playable, using {}",
                self.starting_level,
                level
            );
            self.starting_level = level;
        }
        self
    }

    /// Candidate config locations, in priority order
    fn search_paths() -> Vec<PathBuf> {
        use directories::ProjectDirs;

        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(proj_dirs) = ProjectDirs::from("com", "djeneric", "Djeneric") {
            paths.push(proj_dirs.config_dir().join("config.ron"));
        }
        paths
    }
}
