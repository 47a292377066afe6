//! Player stats
//!
//! XP, level and gold, plus the damage the player deals.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::xp::level_up_threshold;
use crate::combat::player_damage;

/// The player's progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    xp: u32,
    level: u32,
    gold: u32,
}

impl PlayerStats {
    pub fn new(level: u32) -> Self {
        Self { xp: 0, level, gold: 0 }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Add XP to the running total. Only the size of this single award is
    /// checked against the threshold; on a level-up the total starts over.
    /// Returns true if the player leveled up.
    pub fn add_xp(&mut self, xp: u32) -> bool {
        self.xp = self.xp.saturating_add(xp);
        if xp > level_up_threshold(self.level) {
            self.level = self.level.saturating_add(1);
            self.xp = 0;
            log::info!("Player reached level {}", self.level);
            return true;
        }
        false
    }

    pub fn add_gold(&mut self, gold: u32) {
        self.gold += gold;
    }

    /// Damage dealt per turn
    pub fn damage(&self) -> i32 {
        player_damage(self.level)
    }
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your current level: {}\nYour current xp: {}\nYour current gold: {}",
            self.level, self.xp, self.gold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_awards_accumulate() {
        let mut stats = PlayerStats::new(1);
        assert!(!stats.add_xp(5));
        assert!(!stats.add_xp(5));
        assert_eq!(stats.xp(), 10);
        assert_eq!(stats.level(), 1);
    }

    #[test]
    fn test_large_award_levels_up_and_resets() {
        let mut stats = PlayerStats::new(1);
        stats.add_xp(3);
        assert!(stats.add_xp(8));
        assert_eq!(stats.level(), 2);
        assert_eq!(stats.xp(), 0);
        // 10 is not more than the level 2 threshold of 11
        assert!(!stats.add_xp(10));
        assert_eq!(stats.level(), 2);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut stats = PlayerStats::new(1);
        assert!(!stats.add_xp(7));
        assert!(stats.add_xp(8));
    }

    #[test]
    fn test_high_level_award_does_not_overflow() {
        let mut stats = PlayerStats::new(70_000);
        assert!(!stats.add_xp(5));
        assert_eq!(stats.level(), 70_000);
    }

    #[test]
    fn test_gold_is_additive() {
        let mut stats = PlayerStats::new(1);
        stats.add_gold(5);
        stats.add_gold(2);
        assert_eq!(stats.gold(), 7);
    }

    #[test]
    fn test_display() {
        let mut stats = PlayerStats::new(2);
        stats.add_gold(4);
        assert_eq!(
            stats.to_string(),
            "Your current level: 2\nYour current xp: 0\nYour current gold: 4"
        );
    }
}
