//! Any-repeat sums, each id counted once
//!
//! A number such as `111111` is a repetition of blocks of width 1, 2 and 3.
//! Summing every block width separately would count it three times. For a
//! fixed digit length, this module sums each divisor block width on its own
//! and then subtracts, width by width, what the divisor widths already hold.
//!
//! Among the divisors of a number's digit length, the block widths it repeats
//! at are exactly the multiples of its smallest repeating width. Processing
//! widths in ascending order and subtracting the already-adjusted entries of
//! strict divisors leaves each entry holding exactly the numbers whose
//! smallest repeating block has that width.

use crate::domain::dup::DupPattern;
use crate::domain::range::IdRange;
use crate::domain::repeat::digit_count;

/// Per-block-width sums for numbers of exactly `total_digits` digits
///
/// Entry `i - 1` holds the sum for block width `i`, for `i` in
/// `1..=total_digits / 2`. Widths that do not divide `total_digits` hold 0.
pub fn group_contributions(range: IdRange, total_digits: u32) -> Vec<u128> {
    (1..=total_digits / 2)
        .map(|group_size| {
            if total_digits % group_size != 0 {
                return 0;
            }
            // Patterns past u64 produce no u64 value, so they contribute nothing
            DupPattern::for_block_width(group_size, total_digits / group_size)
                .map_or(0, |pattern| pattern.sum_in(range))
        })
        .collect()
}

/// Sum contributions after removing what strict divisor widths already count
///
/// `contributions` is 1-indexed by block width as produced by
/// [`group_contributions`]. Each non-zero entry `i` has the adjusted entries of
/// its strict divisors `j < i` subtracted; zero entries hold nothing to remove.
pub fn sum_omitting_factors_of_nonzeros(contributions: &[u128]) -> u128 {
    let mut adjusted = contributions.to_vec();

    for i in 1..=adjusted.len() {
        if adjusted[i - 1] == 0 {
            continue;
        }
        let overlap: u128 = (1..i)
            .filter(|j| i % j == 0)
            .map(|j| adjusted[j - 1])
            .sum();
        adjusted[i - 1] = adjusted[i - 1].saturating_sub(overlap);
    }

    adjusted.iter().sum()
}

/// Sum of distinct repeated-block ids of exactly `total_digits` digits in `range`
pub fn distinct_sum_for_range(range: IdRange, total_digits: u32) -> u128 {
    sum_omitting_factors_of_nonzeros(&group_contributions(range, total_digits))
}

/// Sum of distinct repeated-block ids in `range`
///
/// The range may span several digit lengths; each length is summed on its own.
pub fn part2_sum_of_invalid_ids_for_range(range: IdRange) -> u128 {
    let total: u128 = (digit_count(range.start())..=digit_count(range.end()))
        .map(|total_digits| distinct_sum_for_range(range, total_digits))
        .sum();

    log::debug!(
        "distinct sum for [{}, {}]: {}",
        range.start(),
        range.end(),
        total
    );
    total
}
