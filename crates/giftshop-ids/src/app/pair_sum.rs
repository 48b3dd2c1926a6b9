//! Two-block repeat sums
//!
//! Sums ids made of exactly two equal halves, one block width at a time.

use crate::constants::{MIN_POWER, PAIR_REPEAT_COUNT, RADIX};
use crate::domain::dup::DupPattern;
use crate::domain::range::IdRange;

/// Two-repetition patterns in increasing block width: 11, 101, 1001, ...
///
/// Ends at the first pattern whose multiplier no longer fits in a `u64`.
pub fn pair_patterns() -> impl Iterator<Item = DupPattern> {
    std::iter::successors(Some(MIN_POWER), |power| power.checked_mul(RADIX))
        .map_while(|power| DupPattern::new(power, PAIR_REPEAT_COUNT).ok())
}

/// Sum the two-block ids inside `range`
///
/// Walks block widths upward until a pattern's dup-range lies entirely past
/// `range`. A value is summed once per block width it matches.
pub fn sum_of_invalid_ids_for_range(range: IdRange) -> u128 {
    let mut total = 0u128;

    for pattern in pair_patterns() {
        let Some(dup_range) = pattern.dup_range() else {
            break;
        };
        if dup_range.start() > range.end() {
            break;
        }
        total += pattern.sum_in(range);
    }

    log::debug!(
        "pair sum for [{}, {}]: {}",
        range.start(),
        range.end(),
        total
    );
    total
}
