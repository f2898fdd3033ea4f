//! Shannon entropy of a byte distribution, in bits per byte.

use crate::error::{AnalysisError, Result};
use crate::frequency::{FrequencyTable, checked_total};

/// Entropy of the distribution in `table`, in bits per byte (0.0 ..= 8.0).
///
/// Accumulates `-Σ p·log₂₅₆(p)` over the non-zero counts and scales by 8.
/// Values that never occur contribute nothing.
pub fn shannon_entropy(table: &FrequencyTable) -> Result<f64> {
    entropy_from_counts(table.counts())
}

/// Same as [`shannon_entropy`] for any list of non-negative counts.
pub fn entropy_from_counts(counts: &[u64]) -> Result<f64> {
    let total = checked_total(counts)?;
    if total == 0 {
        return Err(AnalysisError::EmptyInput);
    }
    let n = total as f64;
    let log256 = 256f64.ln();
    let mut ent = 0.0;
    for &c in counts.iter().filter(|&&c| c > 0) {
        let p = c as f64 / n;
        ent -= p * p.ln() / log256;
    }
    Ok(ent * 8.0)
}

/// Size reduction, in percent, an optimal coder would achieve on data with
/// entropy `bits_per_byte`.
pub fn optimum_compression_percent(bits_per_byte: f64) -> f64 {
    100.0 * (8.0 - bits_per_byte) / 8.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_distribution_is_eight_bits() {
        let data: Vec<u8> = (0..=255u8).cycle().take(256 * 40).collect();
        let e = shannon_entropy(&FrequencyTable::from_bytes(&data)).unwrap();
        assert!((e - 8.0).abs() < 1e-12, "entropy {e}");
    }

    #[test]
    fn test_single_value_is_zero() {
        let data = vec![0u8; 4096];
        let e = shannon_entropy(&FrequencyTable::from_bytes(&data)).unwrap();
        assert_eq!(e, 0.0);
    }

    #[test]
    fn test_two_equal_values_is_one_bit() {
        let e = shannon_entropy(&FrequencyTable::from_bytes(&[3, 200, 3, 200])).unwrap();
        assert!((e - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_overflowing_counts_rejected() {
        assert_eq!(
            entropy_from_counts(&[u64::MAX, 1, 0, 0]),
            Err(AnalysisError::CountOverflow)
        );
    }

    #[test]
    fn test_skewed_pair() {
        // p = (3/4, 1/4): H = 0.811278... bits
        let e = entropy_from_counts(&[3, 1]).unwrap();
        assert!((e - 0.811_278_124_459_132_8).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_bounds() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * i % 97) as u8).collect();
        let e = shannon_entropy(&FrequencyTable::from_bytes(&data)).unwrap();
        assert!(e > 0.0 && e < 8.0);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            shannon_entropy(&FrequencyTable::from_bytes(&[])),
            Err(AnalysisError::EmptyInput)
        );
        assert_eq!(entropy_from_counts(&[0; 256]), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_optimum_compression() {
        assert_eq!(optimum_compression_percent(8.0), 0.0);
        assert_eq!(optimum_compression_percent(0.0), 100.0);
        assert_eq!(optimum_compression_percent(4.0), 50.0);
    }
}
