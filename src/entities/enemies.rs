//! Enemies
//!
//! Monsters placed on floors. Their names and flavour lines are random;
//! everything that affects a fight is fixed by level.

use rand::seq::SliceRandom;
use rand::Rng;

use super::character::Character;
use crate::combat::{enemy_damage, xp_reward, Combatant};

const NAMES: &[&str] = &[
    "Glarg", "Wharg", "Klang", "Blerp", "Herg", "Flumpk", "Drerf", "Karump", "Blarg", "Klerp",
];

// Read as "You encountered <name><description>"
const DESCRIPTIONS: &[&str] = &[
    ", who is a very hairy monster.",
    ", a terrifying beasty I must say.",
    " - ew, slimy.",
    ". He roars and stomps the ground. Uh-oh.",
    ". \"Grr!\" they shout, very convincingly.",
    ". It doesn't seem to like you.",
    ". Watch out!",
    ". Woah. Good luck!",
    ", wow they look disgusting.",
    ", who does not look happy to see you.",
];

const GOODBYES: &[&str] = &[
    "The monster comes crashing to the floor...",
    "Ka-chunk! Blergh!",
    "Pow! Biff! Wallop! Knock out!",
];

/// A monster waiting on a floor tile
#[derive(Debug, Clone)]
pub struct Enemy {
    character: Character,
    name: &'static str,
    description: &'static str,
    goodbye: &'static str,
}

impl Enemy {
    /// Spawn an enemy with randomly picked flavour text
    pub fn new(level: u32, rng: &mut impl Rng) -> Self {
        Self {
            character: Character::new(level),
            name: pick(NAMES, rng),
            description: pick(DESCRIPTIONS, rng),
            goodbye: pick(GOODBYES, rng),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn description(&self) -> &str {
        self.description
    }

    /// Line printed when the enemy is defeated
    pub fn goodbye(&self) -> &str {
        self.goodbye
    }

    pub fn level(&self) -> u32 {
        self.character.level()
    }

    pub fn hp(&self) -> i32 {
        self.character.hp()
    }

    pub fn is_alive(&self) -> bool {
        self.character.is_alive()
    }

    /// Damage dealt per turn
    pub fn damage(&self) -> i32 {
        enemy_damage(self.level())
    }

    /// XP the player earns for the kill
    pub fn xp_on_defeat(&self) -> u32 {
        xp_reward(self.damage())
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        self.name
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

fn pick(options: &[&'static str], rng: &mut impl Rng) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}
