//! Battle resolution
//!
//! Fights run to completion as soon as the player steps onto an enemy:
//! the player strikes first, then the two trade fixed hits until one falls.

use std::fmt;

use super::Combatant;
use crate::entities::{Enemy, Player};
use crate::error::GameResult;

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The enemy was already dead; nothing happened
    AlreadyDefeated,
    /// The enemy fell. `new_level` is set if the XP caused a level-up.
    Victory { xp: u32, new_level: Option<u32> },
    /// The player fell
    Defeat,
}

/// Full log of a battle, ready for display
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub lines: Vec<String>,
    pub outcome: BattleOutcome,
    /// Number of player turns taken
    pub rounds: u32,
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// A fight between the player and one enemy
pub struct Battle<'a> {
    player: &'a mut Player,
    enemy: &'a mut Enemy,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Player, enemy: &'a mut Enemy) -> Self {
        Self { player, enemy }
    }

    /// Run the battle to the end, applying XP and living status
    pub fn resolve(self) -> GameResult<BattleReport> {
        let Battle { player, enemy } = self;

        if !enemy.is_alive() {
            return Ok(BattleReport {
                lines: vec![format!("Here lies the corpse of {}", enemy.name())],
                outcome: BattleOutcome::AlreadyDefeated,
                rounds: 0,
            });
        }

        let mut lines = vec![format!(
            "You encountered {}{} Time to battle!",
            enemy.name(),
            enemy.description()
        )];
        let player_hit = format!("You hit {} for {}HP.", enemy.name(), player.damage());
        let enemy_hit = format!("{} hits you for {}HP.", enemy.name(), enemy.damage());
        let mut rounds = 0;

        while player.is_alive() && enemy.is_alive() {
            rounds += 1;

            if !strike(&*player, &mut *enemy)? {
                let xp = enemy.xp_on_defeat();
                lines.push(player_hit);
                lines.push(enemy.goodbye().to_string());
                lines.push(format!("You were victorious! You gained {} xp.", xp));
                let new_level = player.gain_xp(xp);
                if let Some(level) = new_level {
                    lines.push(format!("You levelled up! Your new level is {}", level));
                }
                enemy.character_mut().set_alive(false);
                log::debug!("{} defeated after {} rounds", enemy.name(), rounds);
                return Ok(BattleReport {
                    lines,
                    outcome: BattleOutcome::Victory { xp, new_level },
                    rounds,
                });
            }

            if !strike(&*enemy, &mut *player)? {
                lines.push(enemy_hit);
                lines.push(format!("{} killed you!", enemy.name()));
                player.set_alive(false);
                log::debug!("Player killed by {} after {} rounds", enemy.name(), rounds);
                return Ok(BattleReport {
                    lines,
                    outcome: BattleOutcome::Defeat,
                    rounds,
                });
            }

            lines.push(player_hit.clone());
            lines.push(enemy_hit.clone());
        }

        // Only reachable if the player entered the fight already dead
        Ok(BattleReport {
            lines,
            outcome: BattleOutcome::Defeat,
            rounds,
        })
    }
}

/// One hit. Returns false if it was lethal.
fn strike(attacker: &impl Combatant, defender: &mut impl Combatant) -> GameResult<bool> {
    defender.character_mut().decrease_hp(attacker.attack_damage())
}
