//! Byte-value occurrence counting.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{AnalysisError, Result};

/// Number of distinct byte values.
pub const BYTE_VALUES: usize = 256;

/// Sum of `counts`, or [`AnalysisError::CountOverflow`] when it exceeds `u64`.
pub(crate) fn checked_total(counts: &[u64]) -> Result<u64> {
    counts
        .iter()
        .try_fold(0u64, |acc, &c| acc.checked_add(c))
        .ok_or(AnalysisError::CountOverflow)
}

/// Occurrence count of every byte value in a buffer.
///
/// Invariant: the counts sum to [`total`](Self::total), the length of the
/// buffer the table was built from. The table is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; BYTE_VALUES],
    total: u64,
}

impl FrequencyTable {
    /// Count every byte of `data` in a single pass.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; BYTE_VALUES];
        for &b in data {
            counts[b as usize] += 1;
        }
        Self {
            counts,
            total: data.len() as u64,
        }
    }

    /// Build a table from precomputed counts (exactly 256 entries, indexed by byte value).
    pub fn from_counts(counts: &[u64]) -> Result<Self> {
        let counts: [u64; BYTE_VALUES] = counts
            .try_into()
            .map_err(|_| AnalysisError::InvalidTableLength { got: counts.len() })?;
        let total = checked_total(&counts)?;
        Ok(Self { counts, total })
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All 256 counts, indexed by byte value.
    pub fn counts(&self) -> &[u64; BYTE_VALUES] {
        &self.counts
    }

    /// Occurrences of `value`.
    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Share of the buffer taken by `value`; 0.0 for an empty table.
    pub fn fraction(&self, value: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(value) as f64 / self.total as f64
    }

    /// `(value, count)` pairs for values that occur at least once.
    pub fn occurring(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(v, &c)| (v as u8, c))
    }

    /// Arithmetic mean of the byte values (127.5 for uniformly random data).
    ///
    /// The weighted sum is exact in integer arithmetic; only the final
    /// division is floating point.
    pub fn mean(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(AnalysisError::EmptyInput);
        }
        let sum: u128 = self
            .counts
            .iter()
            .enumerate()
            .map(|(v, &c)| v as u128 * c as u128)
            .sum();
        Ok(sum as f64 / self.total as f64)
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FrequencyTable", 2)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("counts", &self.counts[..])?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_length() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i * 7 % 251) as u8).collect();
        let table = FrequencyTable::from_bytes(&data);
        assert_eq!(table.total(), data.len() as u64);
        assert_eq!(table.counts().iter().sum::<u64>(), data.len() as u64);
    }

    #[test]
    fn test_empty_buffer_all_zero() {
        let table = FrequencyTable::from_bytes(&[]);
        assert!(table.is_empty());
        assert!(table.counts().iter().all(|&c| c == 0));
        assert_eq!(table.mean(), Err(AnalysisError::EmptyInput));
        assert_eq!(table.fraction(0), 0.0);
    }

    #[test]
    fn test_count_and_fraction() {
        let table = FrequencyTable::from_bytes(b"aab");
        assert_eq!(table.count(b'a'), 2);
        assert_eq!(table.count(b'b'), 1);
        assert_eq!(table.count(b'c'), 0);
        assert!((table.fraction(b'a') - 2.0 / 3.0).abs() < 1e-15);
        let occurring: Vec<_> = table.occurring().collect();
        assert_eq!(occurring, vec![(b'a', 2), (b'b', 1)]);
    }

    #[test]
    fn test_from_counts_rejects_overflowing_total() {
        let mut counts = vec![0u64; BYTE_VALUES];
        counts[0] = u64::MAX;
        counts[1] = 1;
        assert_eq!(
            FrequencyTable::from_counts(&counts),
            Err(AnalysisError::CountOverflow)
        );
        counts[1] = 0;
        assert_eq!(FrequencyTable::from_counts(&counts).unwrap().total(), u64::MAX);
    }

    #[test]
    fn test_from_counts_validates_length() {
        assert_eq!(
            FrequencyTable::from_counts(&[1, 2, 3]),
            Err(AnalysisError::InvalidTableLength { got: 3 })
        );
        let mut counts = vec![0u64; BYTE_VALUES];
        counts[10] = 4;
        counts[20] = 6;
        let table = FrequencyTable::from_counts(&counts).unwrap();
        assert_eq!(table.total(), 10);
        assert!((table.mean().unwrap() - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_of_full_cycle() {
        let data: Vec<u8> = (0..=255u8).collect();
        let table = FrequencyTable::from_bytes(&data);
        assert_eq!(table.mean().unwrap(), 127.5);
    }

    #[test]
    fn test_serializes_counts() {
        let table = FrequencyTable::from_bytes(&[0, 0, 255]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["counts"].as_array().unwrap().len(), 256);
        assert_eq!(json["counts"][0], 2);
        assert_eq!(json["counts"][255], 1);
    }
}
