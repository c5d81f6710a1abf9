//! XP and Level system
//!
//! Levels are fixed-size XP buckets. Level 1 starts at 0 XP and every
//! further [`LEVEL_SIZE`] XP adds a level; there is no cap.

/// XP needed to advance one level
pub const LEVEL_SIZE: u32 = 500;

/// Level for a given XP total (`floor(xp / 500) + 1`)
pub fn level(xp: u32) -> u32 {
    xp / LEVEL_SIZE + 1
}

/// XP earned inside the current level
pub fn xp_within_level(xp: u32) -> u32 {
    xp % LEVEL_SIZE
}

/// Level summary derived from a single XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    pub total_xp: u32,
    pub level: u32,
    /// XP earned inside the current level
    pub xp_in_level: u32,
}

impl LevelInfo {
    pub fn new(total_xp: u32) -> Self {
        Self {
            total_xp,
            level: level(total_xp),
            xp_in_level: xp_within_level(total_xp),
        }
    }

    /// XP still missing before the next level
    pub fn xp_to_next(&self) -> u32 {
        LEVEL_SIZE - self.xp_in_level
    }

    /// Calculate progress percentage to next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        self.xp_in_level as f32 / LEVEL_SIZE as f32
    }
}
