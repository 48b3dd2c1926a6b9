//! giftshop-ids - Closed-form sums of repeated-block product ids
//!
//! This crate provides functionality to:
//! - Sum ids made of exactly two equal halves (e.g. `123123`) within a range
//! - Sum ids made of any repeated block (e.g. `121212`), counting each id once
//! - Enumerate and check such ids directly, as a reference for the closed forms

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use app::batch::{BatchOptions, sum_invalid_ids, sum_invalid_ids_for_range};
pub use app::distinct_sum::part2_sum_of_invalid_ids_for_range;
pub use app::pair_sum::sum_of_invalid_ids_for_range;
pub use constants::*;
pub use domain::dup::DupPattern;
pub use domain::error::IdError;
pub use domain::range::IdRange;
pub use domain::repeat::RepeatPolicy;
