//! Daily puzzle selection
//!
//! `day = floor(epoch_seconds / seconds_per_day)` and the puzzle is
//! `dictionary[day mod len]`. Every player sees the same word on the same UTC day.
//! Appending words keeps past and present puzzles stable; reordering or inserting
//! before the current index does not.

use crate::core::Word;
use crate::wordlists::Dictionary;
use std::time::Duration;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Day number since the UNIX epoch
#[must_use]
pub fn day_index(now: Duration, seconds_per_day: u64) -> u64 {
    now.as_secs() / seconds_per_day.max(1)
}

/// The solution for a given day
#[must_use]
pub fn daily_solution(dictionary: &Dictionary, day: u64) -> Option<&Word> {
    let len = dictionary.len() as u64;
    if len == 0 {
        return None;
    }
    dictionary.get((day % len) as usize)
}
