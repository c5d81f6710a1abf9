//! Rank tiers
//!
//! Coarse progress labels derived from total XP via fixed thresholds.

use std::fmt;

/// Rank tier, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Elite,
}

/// Tier definition
#[derive(Debug, Clone)]
pub struct RankTier {
    pub rank: Rank,
    pub min_xp: u32,
    pub emoji: &'static str,
}

/// All tiers (must be sorted by min_xp)
pub static RANKS: &[RankTier] = &[
    RankTier {
        rank: Rank::Bronze,
        min_xp: 0,
        emoji: "🥉",
    },
    RankTier {
        rank: Rank::Silver,
        min_xp: 1000,
        emoji: "🥈",
    },
    RankTier {
        rank: Rank::Gold,
        min_xp: 2500,
        emoji: "🥇",
    },
    RankTier {
        rank: Rank::Platinum,
        min_xp: 5000,
        emoji: "💎",
    },
    RankTier {
        rank: Rank::Diamond,
        min_xp: 10000,
        emoji: "💠",
    },
    RankTier {
        rank: Rank::Elite,
        min_xp: 20000,
        emoji: "👑",
    },
];

impl Rank {
    /// Highest tier whose threshold is <= xp
    pub fn for_xp(xp: u32) -> Rank {
        Self::tier_for_xp(xp).rank
    }

    pub fn tier_for_xp(xp: u32) -> &'static RankTier {
        RANKS
            .iter()
            .rev()
            .find(|t| xp >= t.min_xp)
            .unwrap_or(&RANKS[0])
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
            Self::Elite => "Elite",
        }
    }

    pub fn tier(&self) -> &'static RankTier {
        RANKS
            .iter()
            .find(|t| t.rank == *self)
            .unwrap_or(&RANKS[0])
    }

    /// Next tier up (None at Elite)
    pub fn next(&self) -> Option<&'static RankTier> {
        RANKS.iter().find(|t| t.rank > *self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
