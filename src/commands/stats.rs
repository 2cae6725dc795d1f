//! Show lifetime statistics

use super::GameContext;
use crate::output::print_statistics;
use crate::persistence::Statistics;
use anyhow::Result;
use std::io::Write;

/// Print the stored statistics
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_stats<W: Write>(ctx: &GameContext<'_>, out: &mut W) -> Result<()> {
    let stats = Statistics::load(ctx.store, &ctx.config.stats_key);
    print_statistics(out, &stats, ctx.config.max_attempts)?;
    Ok(())
}
