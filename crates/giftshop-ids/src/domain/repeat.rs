//! Repeated-block predicates
//!
//! These functions check single numbers digit block by digit block. They are
//! the reference the closed-form sums are verified against, and the filter
//! used when invalid ids are enumerated.

use crate::constants::RADIX;

/// Which repeated-block ids count as invalid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RepeatPolicy {
    /// Exactly two equal halves, e.g. `123123`
    #[default]
    Pair,
    /// Any block repeated two or more times, e.g. `121212` or `777`
    AnyRepeat,
}

/// Number of decimal digits of `n`
///
/// Smallest `d` such that `10^d > n`, so `digit_count(0)` is 0.
pub fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(0, |d| d + 1)
}

/// Check whether `n` is a `group_size`-digit block repeated at least twice
pub fn has_repeated_block(n: u64, group_size: u32) -> bool {
    let digits = digit_count(n);
    if group_size == 0 || digits < 2 * group_size || digits % group_size != 0 {
        return false;
    }

    let power = RADIX.pow(group_size);
    let block = n % power;
    let mut rest = n;
    while rest > 0 {
        if rest % power != block {
            return false;
        }
        rest /= power;
    }
    true
}

/// Smallest block width that `n` is a repetition of
pub fn minimal_block_size(n: u64) -> Option<u32> {
    (1..=digit_count(n) / 2).find(|&size| has_repeated_block(n, size))
}

/// Check whether `n` is an invalid id under `policy`
pub fn is_invalid_id(n: u64, policy: RepeatPolicy) -> bool {
    match policy {
        RepeatPolicy::Pair => {
            let digits = digit_count(n);
            digits % 2 == 0 && has_repeated_block(n, digits / 2)
        }
        RepeatPolicy::AnyRepeat => minimal_block_size(n).is_some(),
    }
}
