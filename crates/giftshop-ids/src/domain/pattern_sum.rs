//! Single-pattern range sum

use crate::domain::dup::power_dup_range;
use crate::domain::range::{
    IdRange, greatest_multiple_in_range, intersect_ranges, least_multiple_in_range,
    multiples_in_range, sum_of_range,
};
use std::num::NonZeroU64;

/// Sum the values of one dup pattern that fall inside `query`
///
/// Intersects the pattern's dup-range with `query`, then sums the multiples of
/// `dup` in that window as `dup * (least + ... + greatest)`. The result is the
/// sum of the repeated-block numbers themselves, not of their blocks.
///
/// Returns 0 when the window is empty or holds no multiple of `dup`.
pub fn sum_of_invalid_ids_in_range_for_power(power: u64, dup: NonZeroU64, query: IdRange) -> u128 {
    let Some(window) = power_dup_range(power, dup).and_then(|r| intersect_ranges(r, query)) else {
        return 0;
    };
    if multiples_in_range(dup, window) == 0 {
        return 0;
    }

    let (Some(least), Some(greatest)) = (
        least_multiple_in_range(dup, window),
        greatest_multiple_in_range(dup, window),
    ) else {
        return 0;
    };
    let Ok(blocks) = IdRange::new(least, greatest) else {
        return 0;
    };

    let sum = dup.get() as u128 * sum_of_range(blocks);
    log::trace!(
        "power {} dup {}: blocks [{}, {}] in [{}, {}] sum {}",
        power,
        dup,
        least,
        greatest,
        query.start(),
        query.end(),
        sum
    );
    sum
}
