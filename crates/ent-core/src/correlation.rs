//! Serial correlation between each byte and its successor.

use serde::Serialize;

use crate::error::{AnalysisError, Result};

/// Correlation of `data` with itself rotated left by one byte, so the last
/// byte pairs with the first.
///
/// With `t1 = Σ aᵢ·aᵢ₊₁`, `t2 = (Σ aᵢ)²`, `t3 = Σ aᵢ²` the coefficient is
/// `(m·t1 − t2) / (m·t3 − t2)`. The sums are exact integers, so a zero
/// denominator (constant data, or a single byte) is detected exactly and
/// reported as [`AnalysisError::DegenerateCorrelation`].
pub fn serial_correlation(data: &[u8]) -> Result<f64> {
    let (first, rest) = data.split_first().ok_or(AnalysisError::EmptyInput)?;

    let m = data.len() as u128;
    let mut t1: u128 = 0;
    let mut sum: u128 = 0;
    let mut t3: u128 = 0;
    let successors = rest.iter().chain(std::iter::once(first));
    for (&a, &b) in data.iter().zip(successors) {
        let (a, b) = (u128::from(a), u128::from(b));
        t1 += a * b;
        sum += a;
        t3 += a * a;
    }
    let t2 = sum * sum;

    let denominator = m * t3 - t2;
    if denominator == 0 {
        return Err(AnalysisError::DegenerateCorrelation);
    }
    let numerator = (m * t1) as i128 - t2 as i128;
    Ok(numerator as f64 / denominator as f64)
}

/// A serial correlation outcome that keeps "undefined" distinct from 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SerialCorrelation {
    Coefficient(f64),
    Undefined,
}

impl SerialCorrelation {
    /// Evaluate `data`, mapping a zero denominator to [`Self::Undefined`].
    pub fn of(data: &[u8]) -> Result<Self> {
        match serial_correlation(data) {
            Ok(r) => Ok(Self::Coefficient(r)),
            Err(AnalysisError::DegenerateCorrelation) => {
                log::warn!("serial correlation undefined for {} bytes", data.len());
                Ok(Self::Undefined)
            }
            Err(e) => Err(e),
        }
    }

    pub fn coefficient(self) -> Option<f64> {
        match self {
            Self::Coefficient(r) => Some(r),
            Self::Undefined => None,
        }
    }
}

impl std::fmt::Display for SerialCorrelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coefficient(r) => write!(f, "{r:.6}"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}
