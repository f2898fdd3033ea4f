//! Degenerate-input conditions reported by the calculators.
//!
//! None of these are retriable faults: they describe inputs for which a
//! statistic is mathematically undefined. Callers decide how to present them.

use thiserror::Error;

/// Why a statistic could not be computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The buffer (or frequency table) holds no bytes.
    #[error("empty input: statistics are undefined for zero bytes")]
    EmptyInput,

    /// The serial correlation denominator is exactly zero, e.g. a constant stream.
    #[error("serial correlation is undefined (zero variance)")]
    DegenerateCorrelation,

    /// Not enough bytes to form a single Monte Carlo point.
    #[error("insufficient data for Monte Carlo estimate: need {needed} bytes, got {got}")]
    InsufficientDataForMonteCarlo { needed: usize, got: usize },

    /// Degrees of freedom must be a positive integer.
    #[error("invalid degrees of freedom: {df} (must be >= 1)")]
    InvalidDegreesOfFreedom { df: u32 },

    /// A chi-square statistic that is not a number.
    #[error("invalid chi-square statistic: {value}")]
    InvalidStatistic { value: f64 },

    /// A precomputed count list with the wrong number of entries.
    #[error("frequency table needs 256 counts, got {got}")]
    InvalidTableLength { got: usize },

    /// Precomputed counts whose sum does not fit in a `u64`.
    #[error("byte counts overflow a 64-bit total")]
    CountOverflow,

    /// A frequency table built from a different buffer than the one analyzed.
    #[error("frequency table counts {table} bytes but the buffer holds {data}")]
    TableMismatch { table: u64, data: u64 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
