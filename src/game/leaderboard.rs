//! Leaderboard standings: the player against the rival roster.

use super::rivals::Rival;

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub position: usize,
    pub name: String,
    pub glyph: String,
    pub xp: u32,
    pub is_player: bool,
}

/// Order the player and rivals by XP, highest first. The player wins ties.
pub fn standings(
    player_name: &str,
    player_glyph: &str,
    player_xp: u32,
    rivals: &[Rival],
) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<LeaderboardEntry> = std::iter::once(LeaderboardEntry {
        position: 0,
        name: player_name.to_string(),
        glyph: player_glyph.to_string(),
        xp: player_xp,
        is_player: true,
    })
    .chain(rivals.iter().map(|r| LeaderboardEntry {
        position: 0,
        name: r.profile.id.to_string(),
        glyph: r.profile.glyph.to_string(),
        xp: r.xp,
        is_player: false,
    }))
    .collect();

    // Stable sort keeps the player (inserted first) ahead on equal XP
    rows.sort_by(|a, b| b.xp.cmp(&a.xp));
    for (i, row) in rows.iter_mut().enumerate() {
        row.position = i + 1;
    }
    rows
}
