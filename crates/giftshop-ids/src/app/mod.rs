//! Application layer - Aggregations over query ranges
//!
//! This module combines the single-pattern sums of the domain layer into
//! per-range and per-batch totals.

pub mod batch;
pub mod distinct_sum;
pub mod enumerate;
pub mod pair_sum;
