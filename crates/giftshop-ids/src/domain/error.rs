//! Error types for id arithmetic

use thiserror::Error;

/// Precondition violations reported by the constructors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    /// Range bounds are reversed
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: u64, end: u64 },
    /// Block power is not a power of ten of at least 10
    #[error("invalid block power {0}: expected a power of ten >= 10")]
    InvalidPower(u64),
    /// Block width is zero or its power does not fit in a u64
    #[error("invalid block width {0}: expected 1..=19 digits")]
    InvalidBlockWidth(u32),
    /// Repetition count is zero
    #[error("invalid repetition count: must be at least 1")]
    InvalidCount,
    /// Dup multiplier does not fit in a u64
    #[error("dup multiplier for power {power} repeated {count} times overflows u64")]
    Overflow { power: u64, count: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IdError::InvalidRange { start: 9, end: 3 };
        assert_eq!(err.to_string(), "invalid range: start 9 is greater than end 3");

        let err = IdError::InvalidPower(20);
        assert_eq!(
            err.to_string(),
            "invalid block power 20: expected a power of ten >= 10"
        );

        let err = IdError::Overflow {
            power: 10,
            count: 21,
        };
        assert!(err.to_string().contains("overflows u64"));
    }
}
