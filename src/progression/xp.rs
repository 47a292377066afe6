//! Experience and leveling
//!
//! XP thresholds for leveling up.

/// A single award of XP larger than this levels the player up
pub fn level_up_threshold(level: u32) -> u32 {
    level
        .saturating_add(5)
        .saturating_add(level.saturating_mul(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_up_threshold() {
        assert_eq!(level_up_threshold(1), 7);
        assert_eq!(level_up_threshold(2), 11);
        assert_eq!(level_up_threshold(3), 17);
        assert_eq!(level_up_threshold(10), 115);
    }

    #[test]
    fn test_threshold_saturates() {
        assert_eq!(level_up_threshold(70_000), u32::MAX);
        assert_eq!(level_up_threshold(u32::MAX), u32::MAX);
    }
}
