//! Daily Selection
//!
//! Deterministic "puzzle of the day" picks: the same date always yields the
//! same items in the same order.

use chrono::{Datelike, NaiveDate};

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Seed for a date: its ordinal day of the year (1-based)
pub fn day_of_year_seed(date: NaiveDate) -> u64 {
    u64::from(date.ordinal())
}

/// Pick `count` distinct indices into a pool of `pool_len` items.
///
/// Returns at most `pool_len` indices. The generator has full period, so
/// every index is eventually reached while the pool is no larger than the
/// modulus.
pub fn daily_indices(seed: u64, pool_len: usize, count: usize) -> Vec<usize> {
    let wanted = count.min(pool_len).min(LCG_MODULUS as usize);
    let mut state = seed % LCG_MODULUS;
    let mut used = vec![false; pool_len];
    let mut picked = Vec::with_capacity(wanted);

    while picked.len() < wanted {
        state = (state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        let index = (state as usize * pool_len) / LCG_MODULUS as usize;
        if !used[index] {
            used[index] = true;
            picked.push(index);
        }
    }

    picked
}

/// Select the day's items from `pool`
pub fn daily_selection<T>(pool: &[T], date: NaiveDate, count: usize) -> Vec<&T> {
    daily_indices(day_of_year_seed(date), pool.len(), count)
        .into_iter()
        .map(|i| &pool[i])
        .collect()
}
