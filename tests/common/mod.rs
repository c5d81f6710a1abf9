//! Shared test utilities for engine integration tests

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use readsmart::game::{FixedClock, GameEngine};
use readsmart::storage::RecordStore;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Engine with a seeded RNG and a clock the test controls
pub fn test_engine(store: impl RecordStore + 'static, clock: &FixedClock) -> GameEngine {
    GameEngine::load_with(store, ChaCha8Rng::seed_from_u64(42), clock.clone())
}
