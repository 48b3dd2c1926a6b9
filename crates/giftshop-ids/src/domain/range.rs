//! Closed integer range arithmetic
//!
//! This module provides the interval helpers the invalid id sums are built on.
//! Every range is inclusive on both ends. An empty result is `None`, so a
//! zero sum is never confused with "nothing there".

use crate::domain::error::IdError;
use std::num::NonZeroU64;

/// Closed id range `[start, end]`
///
/// Construction guarantees `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdRange {
    start: u64,
    end: u64,
}

impl IdRange {
    /// Create a range, rejecting reversed bounds
    pub fn new(start: u64, end: u64) -> Result<Self, IdError> {
        if start > end {
            return Err(IdError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a range holding a single value
    pub fn single(value: u64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// First value in the range
    #[inline]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last value in the range
    #[inline]
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of values in the range (up to 2^64, hence `u128`)
    pub fn width(&self) -> u128 {
        (self.end - self.start) as u128 + 1
    }

    /// Check whether `value` lies inside the range
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.start <= value && value <= self.end
    }
}

impl TryFrom<(u64, u64)> for IdRange {
    type Error = IdError;

    fn try_from((start, end): (u64, u64)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

/// Count the multiples of `n` inside `range`
///
/// Computes `floor(end / n) - floor((start - 1) / n)`. When `start` is 0 the
/// value 0 itself is counted.
pub fn multiples_in_range(n: NonZeroU64, range: IdRange) -> u128 {
    let n = n.get();
    let up_to_end = (range.end / n) as u128;
    match range.start.checked_sub(1) {
        Some(before_start) => up_to_end - (before_start / n) as u128,
        None => up_to_end + 1,
    }
}

/// Multiplier of the smallest multiple of `f` inside `range`
///
/// Returns `k` such that `k * f` is that multiple, or `None` when no multiple
/// of `f` lies in `range`.
pub fn least_multiple_in_range(f: NonZeroU64, range: IdRange) -> Option<u64> {
    let least = range.start.div_ceil(f.get());
    (least <= range.end / f.get()).then_some(least)
}

/// Multiplier of the greatest multiple of `f` inside `range`
pub fn greatest_multiple_in_range(f: NonZeroU64, range: IdRange) -> Option<u64> {
    let greatest = range.end / f.get();
    (greatest >= range.start.div_ceil(f.get())).then_some(greatest)
}

/// Sum of every integer in `range`
///
/// Closed form `(end - start + 1) * (start + end) / 2`. The even factor is
/// halved before multiplying so the full `u64` range still fits in a `u128`.
pub fn sum_of_range(range: IdRange) -> u128 {
    let width = range.width();
    let ends = range.start as u128 + range.end as u128;
    if width % 2 == 0 {
        (width / 2) * ends
    } else {
        width * (ends / 2)
    }
}

/// Intersect two ranges
///
/// Returns `[max(starts), min(ends)]`, or `None` when the ranges are disjoint.
pub fn intersect_ranges(a: IdRange, b: IdRange) -> Option<IdRange> {
    IdRange::new(a.start.max(b.start), a.end.min(b.end)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u64, end: u64) -> IdRange {
        IdRange::new(start, end).unwrap()
    }

    fn nz(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn test_range_rejects_reversed_bounds() {
        assert_eq!(
            IdRange::new(5, 4),
            Err(IdError::InvalidRange { start: 5, end: 4 })
        );
        assert!(IdRange::new(4, 4).is_ok());
    }

    #[test]
    fn test_range_try_from_pair() {
        let r = IdRange::try_from((11, 22)).unwrap();
        assert_eq!((r.start(), r.end()), (11, 22));
        assert!(IdRange::try_from((22, 11)).is_err());
    }

    #[test]
    fn test_range_width_and_contains() {
        let r = range(10, 19);
        assert_eq!(r.width(), 10);
        assert!(r.contains(10));
        assert!(r.contains(19));
        assert!(!r.contains(20));
        assert_eq!(range(0, u64::MAX).width(), 1u128 << 64);
    }

    #[test]
    fn test_multiples_in_range_small() {
        assert_eq!(multiples_in_range(nz(11), range(11, 22)), 2);
        assert_eq!(multiples_in_range(nz(11), range(12, 21)), 0);
        assert_eq!(multiples_in_range(nz(101), range(998, 1012)), 1);
        assert_eq!(multiples_in_range(nz(1), range(5, 5)), 1);
    }

    #[test]
    fn test_multiples_in_range_from_zero() {
        // 0, 7, 14
        assert_eq!(multiples_in_range(nz(7), range(0, 14)), 3);
        assert_eq!(multiples_in_range(nz(1), range(0, u64::MAX)), 1u128 << 64);
    }

    #[test]
    fn test_multiples_in_range_matches_enumeration() {
        for n in 1..=13u64 {
            for start in 0..40u64 {
                for end in start..60u64 {
                    let expected = (start..=end).filter(|v| v % n == 0).count() as u128;
                    assert_eq!(
                        multiples_in_range(nz(n), range(start, end)),
                        expected,
                        "n={} range=[{}, {}]",
                        n,
                        start,
                        end
                    );
                }
            }
        }
    }

    #[test]
    fn test_least_and_greatest_multiple() {
        let r = range(998, 1012);
        assert_eq!(least_multiple_in_range(nz(101), r), Some(10));
        assert_eq!(greatest_multiple_in_range(nz(101), r), Some(10));

        let r = range(11, 99);
        assert_eq!(least_multiple_in_range(nz(11), r), Some(1));
        assert_eq!(greatest_multiple_in_range(nz(11), r), Some(9));
    }

    #[test]
    fn test_least_and_greatest_multiple_none() {
        let r = range(12, 21);
        assert_eq!(least_multiple_in_range(nz(11), r), None);
        assert_eq!(greatest_multiple_in_range(nz(11), r), None);
    }

    #[test]
    fn test_sum_of_range_single_value() {
        for a in [0u64, 1, 42, 1_000_000_007, u64::MAX] {
            assert_eq!(sum_of_range(IdRange::single(a)), a as u128);
        }
    }

    #[test]
    fn test_sum_of_range_series() {
        assert_eq!(sum_of_range(range(1, 100)), 5050);
        assert_eq!(sum_of_range(range(0, 0)), 0);
        assert_eq!(sum_of_range(range(3, 6)), 18);
    }

    #[test]
    fn test_sum_of_range_full_u64() {
        let max = u64::MAX as u128;
        assert_eq!(sum_of_range(range(0, u64::MAX)), max * (max + 1) / 2);
    }

    #[test]
    fn test_intersect_ranges() {
        assert_eq!(
            intersect_ranges(range(11, 99), range(95, 115)),
            Some(range(95, 99))
        );
        assert_eq!(intersect_ranges(range(11, 99), range(100, 200)), None);
        assert_eq!(
            intersect_ranges(range(5, 5), range(0, 10)),
            Some(IdRange::single(5))
        );
    }

    #[test]
    fn test_intersect_ranges_commutative() {
        let ranges = [
            range(0, 10),
            range(5, 15),
            range(10, 10),
            range(11, 20),
            range(0, u64::MAX),
        ];
        for a in ranges {
            for b in ranges {
                assert_eq!(intersect_ranges(a, b), intersect_ranges(b, a));
            }
        }
    }
}
