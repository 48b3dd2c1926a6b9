//! Invalid id search constants

// =============================================================================
// Decimal layout
// =============================================================================

/// Radix of the id notation
pub const RADIX: u64 = 10;

/// Smallest block power (one-digit blocks)
pub const MIN_POWER: u64 = RADIX;

/// Widest block whose power still fits in a `u64` (10^19)
pub const MAX_BLOCK_WIDTH: u32 = 19;

/// Decimal digit length of `u64::MAX` (18,446,744,073,709,551,615)
pub const MAX_DIGITS: u32 = 20;

/// Number of repetitions counted by the pair policy (two equal halves)
pub const PAIR_REPEAT_COUNT: u32 = 2;

// =============================================================================
// Batch processing
// =============================================================================

/// Ranges summed between two progress callbacks
#[cfg(not(test))]
pub const PROGRESS_INTERVAL: usize = 1_000;

/// Ranges summed between two progress callbacks - reduced for unit tests
#[cfg(test)]
pub const PROGRESS_INTERVAL: usize = 2;

// =============================================================================
// Example fixture
// =============================================================================

/// The eleven example ranges from the puzzle statement
pub const EXAMPLE_RANGES: [(u64, u64); 11] = [
    (11, 22),
    (95, 115),
    (998, 1012),
    (1188511880, 1188511890),
    (222220, 222224),
    (1698522, 1698528),
    (446443, 446449),
    (38593856, 38593862),
    (565653, 565659),
    (824824821, 824824827),
    (2121212118, 2121212124),
];

/// Pair-policy total over [`EXAMPLE_RANGES`]
pub const EXAMPLE_PAIR_SUM: u128 = 1_227_775_554;

/// Any-repeat total over [`EXAMPLE_RANGES`]
pub const EXAMPLE_ANY_REPEAT_SUM: u128 = 4_174_379_265;
