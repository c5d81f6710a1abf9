//! Messages shown after a finished quiz.

use rand::Rng;
use rand::seq::SliceRandom;

pub static ENCOURAGEMENTS: &[&str] = &[
    "🔥 Amazing work! You're on fire!",
    "🌟 Brilliant! Keep that momentum going!",
    "💪 Outstanding performance! You're a natural!",
    "🎯 Incredible accuracy! You're mastering this!",
    "🚀 Sky's the limit! Keep reaching higher!",
    "⭐ Superstar! That was impressive!",
    "🏆 Champion level performance!",
    "✨ You're shining bright! Great job!",
];

pub fn pick(rng: &mut impl Rng) -> &'static str {
    ENCOURAGEMENTS.choose(rng).copied().unwrap_or(ENCOURAGEMENTS[0])
}
