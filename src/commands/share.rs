//! Print the share text for today's puzzle

use super::GameContext;
use crate::game::PuzzleSession;
use anyhow::{Context, Result};
use std::io::Write;

/// Write today's emoji grid, or a notice if no guesses were made yet
///
/// # Errors
///
/// Returns an error on I/O failure or if the session cannot be created.
pub fn run_share<W: Write>(ctx: &GameContext<'_>, out: &mut W) -> Result<()> {
    let session =
        PuzzleSession::resume_daily(ctx.config.clone(), ctx.dictionary, ctx.clock, ctx.store)
            .context("Failed to load today's game")?;

    if session.history().is_empty() {
        writeln!(out, "Hujacheza leo. (No guesses today yet)")?;
        return Ok(());
    }

    writeln!(out, "{}", session.render_share_text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::daily::SECONDS_PER_DAY;
    use crate::game::{FixedClock, GameConfig, GameMode};
    use crate::persistence::MemoryStore;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn share(ctx: &GameContext<'_>) -> String {
        let mut out = Vec::new();
        run_share(ctx, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shares_saved_daily_progress() {
        let dict = Dictionary::new(words_from_slice(&["simba", "tembo"])).unwrap();
        let clock = FixedClock::from_secs(10 * SECONDS_PER_DAY);
        let store = MemoryStore::new();
        let ctx = GameContext {
            config: GameConfig::default(),
            dictionary: &dict,
            store: &store,
            clock: &clock,
        };

        assert!(share(&ctx).contains("No guesses today yet"));

        // Day 10 is SIMBA
        let mut session = PuzzleSession::start(
            GameConfig::default(),
            GameMode::Daily,
            &dict,
            &clock,
            Some(&store),
        )
        .unwrap();
        session.submit("tembo").unwrap();

        assert_eq!(share(&ctx), "Neno 1/6\n\n⬜⬜🟩🟩⬜\n\n#Neno\n");
    }
}
