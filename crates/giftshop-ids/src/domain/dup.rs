//! Dup-number model
//!
//! A dup pattern is "a k-digit block repeated `count` times". Its multiplier
//! carries a digit `1` at every block boundary, so multiplying a block by it
//! writes the block out `count` times:
//!
//! ```text
//! power = 10^3, count = 2  ->  dup = 1001
//! 123 * 1001 = 123123
//! ```

use crate::constants::{MAX_BLOCK_WIDTH, MIN_POWER, RADIX};
use crate::domain::error::IdError;
use crate::domain::pattern_sum::sum_of_invalid_ids_in_range_for_power;
use crate::domain::range::IdRange;
use std::num::NonZeroU64;

/// A validated block power and repetition count with its dup multiplier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DupPattern {
    /// 10^k, where k is the block width in digits
    power: u64,
    /// Number of repetitions of the block
    count: u32,
    /// 1 + power + power^2 + ... + power^(count-1)
    dup: NonZeroU64,
}

impl DupPattern {
    /// Create a pattern from a block power and a repetition count
    pub fn new(power: u64, count: u32) -> Result<Self, IdError> {
        let dup = power_dup(power, count)?;
        Ok(Self { power, count, dup })
    }

    /// Create a pattern from a block width in digits
    ///
    /// `for_block_width(3, 2)` is the same pattern as `new(1000, 2)`.
    pub fn for_block_width(width: u32, count: u32) -> Result<Self, IdError> {
        if width == 0 || width > MAX_BLOCK_WIDTH {
            return Err(IdError::InvalidBlockWidth(width));
        }
        Self::new(RADIX.pow(width), count)
    }

    /// Block power (10^k)
    #[inline]
    pub fn power(&self) -> u64 {
        self.power
    }

    /// Number of repetitions
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Dup multiplier
    #[inline]
    pub fn dup(&self) -> NonZeroU64 {
        self.dup
    }

    /// Block width in digits
    pub fn block_width(&self) -> u32 {
        self.power.ilog10()
    }

    /// Digit length of every value the pattern produces
    pub fn total_digits(&self) -> u32 {
        self.block_width() * self.count
    }

    /// Range of values produced by this pattern, see [`power_dup_range`]
    pub fn dup_range(&self) -> Option<IdRange> {
        power_dup_range(self.power, self.dup)
    }

    /// Sum of this pattern's values that fall inside `query`
    pub fn sum_in(&self, query: IdRange) -> u128 {
        sum_of_invalid_ids_in_range_for_power(self.power, self.dup, query)
    }
}

/// Check that `power` is 10^k for some k >= 1
pub fn is_block_power(power: u64) -> bool {
    power >= MIN_POWER && RADIX.pow(power.ilog10()) == power
}

/// Build the dup multiplier for `count` repetitions of a block of size `power`
///
/// Starting from 0, applies `dup = 1 + dup * power` `count` times.
///
/// # Errors
/// * [`IdError::InvalidPower`] - `power` is not a power of ten >= 10
/// * [`IdError::InvalidCount`] - `count` is 0
/// * [`IdError::Overflow`] - the multiplier does not fit in a `u64`
pub fn power_dup(power: u64, count: u32) -> Result<NonZeroU64, IdError> {
    if !is_block_power(power) {
        return Err(IdError::InvalidPower(power));
    }
    if count == 0 {
        return Err(IdError::InvalidCount);
    }

    let dup = (0..count)
        .try_fold(0u64, |dup, _| dup.checked_mul(power)?.checked_add(1))
        .ok_or(IdError::Overflow { power, count })?;

    // count >= 1 means the last step added 1
    NonZeroU64::new(dup).ok_or(IdError::InvalidCount)
}

/// Range of values a block of size `power` can produce with multiplier `dup`
///
/// Returns `[(power / 10) * dup, (power - 1) * dup]`: the smallest and largest
/// blocks without a leading zero, scaled. Blocks outside that window would
/// under-fill the digit count or carry into the next block.
///
/// Returns `None` when `power` is not a block power, or when even the lower
/// bound exceeds `u64::MAX` (no `u64` query can reach it). An upper bound past
/// `u64::MAX` is clamped, which keeps every multiple of `dup` below it.
pub fn power_dup_range(power: u64, dup: NonZeroU64) -> Option<IdRange> {
    if !is_block_power(power) {
        return None;
    }
    let dup = dup.get();
    let low = (power / RADIX).checked_mul(dup)?;
    let high = (power - 1).saturating_mul(dup);
    IdRange::new(low, high).ok()
}
