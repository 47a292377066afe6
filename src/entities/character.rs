//! Shared character stats
//!
//! Hit points, level and living status, used by both the player and enemies.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// HP multiplier for a freshly spawned character
const SPAWN_HP_PER_LEVEL: i32 = 3;
/// HP multiplier when the player's health is reset between dungeons
const RESET_HP_PER_LEVEL: i32 = 70;

/// Hit points, level and living status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    hp: i32,
    level: u32,
    alive: bool,
}

impl Character {
    pub fn new(level: u32) -> Self {
        Self {
            hp: level as i32 * SPAWN_HP_PER_LEVEL,
            level,
            alive: true,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    /// Refill hit points from the current level
    pub fn reset_hp(&mut self) {
        self.hp = self.level as i32 * RESET_HP_PER_LEVEL;
    }

    /// Take `amount` damage. Returns `Ok(false)` if the hit was lethal, in
    /// which case hp bottoms out at zero. The living flag is left to the caller.
    pub fn decrease_hp(&mut self, amount: i32) -> GameResult<bool> {
        if amount <= 0 {
            return Err(GameError::InvalidDamage(amount));
        }
        if self.hp - amount > 0 {
            self.hp -= amount;
            Ok(true)
        } else {
            self.hp = 0;
            Ok(false)
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
}
