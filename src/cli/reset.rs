//! Reset command implementation

use anyhow::{Result, bail};

use readsmart::game::GameEngine;

/// Erase all progress
pub fn reset_command(engine: &mut GameEngine, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("This erases all XP, streaks and history.\nUse --yes to confirm.");
    }

    engine.reset()?;
    println!("Progress reset.");
    Ok(())
}
