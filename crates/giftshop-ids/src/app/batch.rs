//! Batch sums over many query ranges
//!
//! Ranges are independent and their sums commute, so a batch can be summed in
//! any order, including in parallel.

use crate::app::distinct_sum::part2_sum_of_invalid_ids_for_range;
use crate::app::pair_sum::sum_of_invalid_ids_for_range;
use crate::constants::PROGRESS_INTERVAL;
use crate::domain::error::IdError;
use crate::domain::range::IdRange;
use crate::domain::repeat::RepeatPolicy;
use rayon::prelude::*;

/// Options for batch summation
#[derive(Clone)]
pub struct BatchOptions<F = fn(usize, usize)> {
    /// Which ids count as invalid
    pub policy: RepeatPolicy,
    /// Progress callback (done, total)
    pub on_progress: Option<F>,
}

impl Default for BatchOptions<fn(usize, usize)> {
    fn default() -> Self {
        Self {
            policy: RepeatPolicy::default(),
            on_progress: None,
        }
    }
}

impl<F> BatchOptions<F> {
    /// Set the repeat policy
    pub fn with_policy(mut self, policy: RepeatPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> BatchOptions<G> {
        BatchOptions {
            policy: self.policy,
            on_progress: Some(callback),
        }
    }
}

/// Convert `(start, end)` pairs into validated ranges
pub fn ranges_from_pairs(pairs: &[(u64, u64)]) -> Result<Vec<IdRange>, IdError> {
    pairs.iter().map(|&pair| IdRange::try_from(pair)).collect()
}

/// Sum the invalid ids of one range under `policy`
pub fn sum_invalid_ids_for_range(range: IdRange, policy: RepeatPolicy) -> u128 {
    match policy {
        RepeatPolicy::Pair => sum_of_invalid_ids_for_range(range),
        RepeatPolicy::AnyRepeat => part2_sum_of_invalid_ids_for_range(range),
    }
}

/// Sum the invalid ids of every range in `ranges`
pub fn sum_invalid_ids(ranges: &[IdRange], policy: RepeatPolicy) -> u128 {
    ranges
        .iter()
        .map(|&range| sum_invalid_ids_for_range(range, policy))
        .sum()
}

/// Sum a batch, reporting progress every `PROGRESS_INTERVAL` ranges
///
/// The callback also runs once after the last range.
pub fn sum_invalid_ids_with_progress<F>(ranges: &[IdRange], options: BatchOptions<F>) -> u128
where
    F: FnMut(usize, usize), // (done, total)
{
    let BatchOptions {
        policy,
        mut on_progress,
    } = options;
    let total = ranges.len();
    let mut sum = 0u128;

    for (index, &range) in ranges.iter().enumerate() {
        sum += sum_invalid_ids_for_range(range, policy);

        let done = index + 1;
        if done % PROGRESS_INTERVAL == 0
            && done < total
            && let Some(callback) = on_progress.as_mut()
        {
            callback(done, total);
        }
    }

    if let Some(callback) = on_progress.as_mut() {
        callback(total, total);
    }
    log::debug!("batch of {} ranges ({:?}): {}", total, policy, sum);
    sum
}

/// Sum a batch in parallel using rayon
///
/// Produces the same total as [`sum_invalid_ids`].
pub fn sum_invalid_ids_parallel(ranges: &[IdRange], policy: RepeatPolicy) -> u128 {
    ranges
        .par_iter()
        .map(|&range| sum_invalid_ids_for_range(range, policy))
        .sum()
}
