//! Combat system

pub mod damage;
pub mod battle;

pub use damage::{enemy_damage, player_damage, xp_reward};
pub use battle::{Battle, BattleOutcome, BattleReport};

use crate::entities::Character;

/// Anything that can take part in a battle
pub trait Combatant {
    /// Name used in battle messages
    fn name(&self) -> &str;
    fn character(&self) -> &Character;
    fn character_mut(&mut self) -> &mut Character;
    /// Damage dealt per hit
    fn attack_damage(&self) -> i32;

    fn is_alive(&self) -> bool {
        self.character().is_alive()
    }
}
