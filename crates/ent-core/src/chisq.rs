//! Pearson's chi-square statistic against a uniform byte distribution.

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::frequency::{BYTE_VALUES, FrequencyTable};

/// Degrees of freedom for 256 byte categories.
pub const BYTE_DEGREES_OF_FREEDOM: u32 = BYTE_VALUES as u32 - 1;

/// `Σ (count − e)² / e` over all 256 values, with `e = n / 256`.
pub fn chi_square(table: &FrequencyTable) -> Result<f64> {
    if table.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let expected = table.total() as f64 / BYTE_VALUES as f64;
    Ok(table
        .counts()
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum())
}

/// How the chi-square probability reads as a randomness judgement.
///
/// Bands are on the distance of the percentage from 50%: beyond 49 points
/// (p < 1% or p > 99%) the sequence is almost certainly not random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChiSquareVerdict {
    LooksRandom,
    CloseToRandom,
    SuspectedNotRandom,
    AlmostCertainlyNotRandom,
}

impl ChiSquareVerdict {
    /// Classify an upper-tail probability in [0, 1].
    pub fn from_probability(p: f64) -> Self {
        let distance = (p * 100.0 - 50.0).abs();
        if distance > 49.0 {
            Self::AlmostCertainlyNotRandom
        } else if distance > 45.0 {
            Self::SuspectedNotRandom
        } else if distance > 40.0 {
            Self::CloseToRandom
        } else {
            Self::LooksRandom
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::LooksRandom => "looks random",
            Self::CloseToRandom => "is close to random, but not perfect",
            Self::SuspectedNotRandom => "is suspected of being not random",
            Self::AlmostCertainlyNotRandom => "is almost certainly not random",
        }
    }
}

impl std::fmt::Display for ChiSquareVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
