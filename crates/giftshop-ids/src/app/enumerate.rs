//! Invalid id enumeration
//!
//! Lists the invalid ids of a range by generating them from dup patterns,
//! rather than by scanning every value. Meant for inspecting and verifying
//! the closed-form sums, so the output grows with the number of ids found.

use crate::app::pair_sum::pair_patterns;
use crate::domain::dup::DupPattern;
use crate::domain::range::{
    IdRange, greatest_multiple_in_range, intersect_ranges, least_multiple_in_range,
};
use crate::domain::repeat::{RepeatPolicy, digit_count, minimal_block_size};

/// Values of `pattern` that fall inside `range`, in increasing order
pub fn pattern_ids(pattern: DupPattern, range: IdRange) -> impl Iterator<Item = u64> {
    let dup = pattern.dup();
    let blocks = pattern
        .dup_range()
        .and_then(|dup_range| intersect_ranges(dup_range, range))
        .and_then(|window| {
            Some((
                least_multiple_in_range(dup, window)?,
                greatest_multiple_in_range(dup, window)?,
            ))
        });

    blocks
        .into_iter()
        .flat_map(move |(least, greatest)| (least..=greatest).map(move |block| block * dup.get()))
}

/// Every divisor-width pattern for the digit lengths spanned by `range`
fn any_repeat_patterns(range: IdRange) -> impl Iterator<Item = DupPattern> {
    (digit_count(range.start())..=digit_count(range.end())).flat_map(|total_digits| {
        (1..=total_digits / 2)
            .filter(move |group_size| total_digits % group_size == 0)
            .filter_map(move |group_size| {
                DupPattern::for_block_width(group_size, total_digits / group_size).ok()
            })
    })
}

/// Sorted invalid ids inside `range` under `policy`
///
/// Under [`RepeatPolicy::AnyRepeat`] an id is emitted only by the pattern of
/// its smallest repeating block, so every id appears once.
pub fn invalid_ids_in_range(range: IdRange, policy: RepeatPolicy) -> Vec<u64> {
    let mut ids: Vec<u64> = match policy {
        RepeatPolicy::Pair => pair_patterns()
            .take_while(|pattern| {
                pattern
                    .dup_range()
                    .is_some_and(|dup_range| dup_range.start() <= range.end())
            })
            .flat_map(|pattern| pattern_ids(pattern, range))
            .collect(),
        RepeatPolicy::AnyRepeat => any_repeat_patterns(range)
            .flat_map(|pattern| {
                let width = pattern.block_width();
                pattern_ids(pattern, range).filter(move |&id| minimal_block_size(id) == Some(width))
            })
            .collect(),
    };

    ids.sort_unstable();
    ids
}
