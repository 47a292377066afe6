//! Damage calculation
//!
//! All combat numbers are fixed functions of level; there are no rolls.

/// Damage the player deals per hit
pub fn player_damage(level: u32) -> i32 {
    level as i32 * 2
}

/// Damage an enemy deals per hit
pub fn enemy_damage(level: u32) -> i32 {
    level as i32
}

/// XP for defeating an enemy that hits this hard
pub fn xp_reward(damage: i32) -> u32 {
    damage.max(0) as u32 * 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_outhits_enemy_of_same_level() {
        for level in 1..10 {
            assert_eq!(player_damage(level), 2 * enemy_damage(level));
        }
    }

    #[test]
    fn test_xp_reward() {
        assert_eq!(xp_reward(1), 5);
        assert_eq!(xp_reward(4), 20);
        assert_eq!(xp_reward(0), 0);
    }
}
