//! The player
//!
//! Character stats plus progression and where the player is standing.

use super::character::Character;
use crate::combat::Combatant;
use crate::progression::PlayerStats;
use crate::world::{Location, Position};

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    character: Character,
    stats: PlayerStats,
    location: Location,
    victorious: bool,
}

impl Player {
    /// A fresh player at `start` with full health for their level
    pub fn new(level: u32, start: Location) -> Self {
        let mut character = Character::new(level);
        character.reset_hp();
        Self {
            character,
            stats: PlayerStats::new(level),
            location: start,
            victorious: false,
        }
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn level(&self) -> u32 {
        self.stats.level()
    }

    pub fn hp(&self) -> i32 {
        self.character.hp()
    }

    pub fn xp(&self) -> u32 {
        self.stats.xp()
    }

    pub fn gold(&self) -> u32 {
        self.stats.gold()
    }

    pub fn damage(&self) -> i32 {
        self.stats.damage()
    }

    pub fn is_alive(&self) -> bool {
        self.character.is_alive()
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.character.set_alive(alive);
    }

    /// Award XP, returning the new level if it triggered a level-up
    pub fn gain_xp(&mut self, xp: u32) -> Option<u32> {
        if self.stats.add_xp(xp) {
            self.character.set_level(self.stats.level());
            Some(self.stats.level())
        } else {
            None
        }
    }

    pub fn add_gold(&mut self, gold: u32) {
        self.stats.add_gold(gold);
    }

    pub fn reset_hp(&mut self) {
        self.character.reset_hp();
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn position(&self) -> Position {
        self.location.pos
    }

    pub fn set_position(&mut self, pos: Position) {
        self.location.pos = pos;
    }

    /// Jump to another floor (or dungeon), e.g. after taking the stairs
    pub fn set_location(&mut self, location: Location) {
        log::debug!(
            "Player moved to dungeon {} floor {} at {:?}",
            location.dungeon,
            location.floor,
            location.pos
        );
        self.location = location;
    }

    pub fn is_victorious(&self) -> bool {
        self.victorious
    }

    /// Mark the game as won. The player also stops being "alive" so the
    /// end-of-turn check picks the run up as finished.
    pub fn set_victorious(&mut self) {
        self.victorious = true;
        self.character.set_alive(false);
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        "You"
    }

    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn attack_damage(&self) -> i32 {
        self.damage()
    }
}
