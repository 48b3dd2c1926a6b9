//! Domain layer - Pure computational logic
//!
//! This module contains the integer arithmetic behind invalid id sums.
//! Nothing here allocates beyond small vectors or performs I/O.

pub mod dup;
pub mod error;
pub mod pattern_sum;
pub mod range;
pub mod repeat;
