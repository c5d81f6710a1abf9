//! Rival roster
//!
//! Non-player profiles whose XP grows passively every time the player
//! finishes a quiz. Only their accumulated XP is persisted.

use std::collections::BTreeMap;

use rand::Rng;

/// Static rival profile
#[derive(Debug, Clone)]
pub struct RivalProfile {
    pub id: &'static str,
    pub glyph: &'static str,
    pub starting_xp: u32,
    /// Inclusive XP range added per player quiz
    pub growth: (u32, u32),
}

pub static RIVALS: &[RivalProfile] = &[
    RivalProfile {
        id: "Luna",
        glyph: "🦊",
        starting_xp: 500,
        growth: (50, 150),
    },
    RivalProfile {
        id: "Max",
        glyph: "🐲",
        starting_xp: 300,
        growth: (40, 120),
    },
    RivalProfile {
        id: "Aria",
        glyph: "🦋",
        starting_xp: 200,
        growth: (30, 100),
    },
    RivalProfile {
        id: "Leo",
        glyph: "🦁",
        starting_xp: 100,
        growth: (20, 80),
    },
];

/// A rival with its current XP
#[derive(Debug, Clone)]
pub struct Rival {
    pub profile: &'static RivalProfile,
    pub xp: u32,
}

impl RivalProfile {
    pub fn get(id: &str) -> Option<&'static RivalProfile> {
        RIVALS.iter().find(|r| r.id == id)
    }

    /// Roll this rival's growth for one player quiz
    pub fn roll_growth(&self, rng: &mut impl Rng) -> u32 {
        let (min, max) = self.growth;
        rng.gen_range(min..=max)
    }
}

/// Starting XP for every rival, as stored in a fresh record
pub fn starting_progress() -> BTreeMap<String, u32> {
    RIVALS
        .iter()
        .map(|r| (r.id.to_string(), r.starting_xp))
        .collect()
}

/// Resolve the roster against stored progress
pub fn roster(progress: &BTreeMap<String, u32>) -> Vec<Rival> {
    RIVALS
        .iter()
        .map(|profile| Rival {
            profile,
            xp: progress
                .get(profile.id)
                .copied()
                .unwrap_or(profile.starting_xp),
        })
        .collect()
}

/// Grow every rival once. Rivals missing from `progress` start from their base XP.
pub fn grow_all(progress: &mut BTreeMap<String, u32>, rng: &mut impl Rng) {
    for profile in RIVALS {
        let gain = profile.roll_growth(rng);
        let xp = progress
            .entry(profile.id.to_string())
            .or_insert(profile.starting_xp);
        *xp = xp.saturating_add(gain);
    }
}
