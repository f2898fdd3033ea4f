//! The full statistics snapshot for one buffer.

use std::time::Instant;

use serde::Serialize;

use crate::chisq::{BYTE_DEGREES_OF_FREEDOM, ChiSquareVerdict, chi_square};
use crate::correlation::SerialCorrelation;
use crate::entropy::{optimum_compression_percent, shannon_entropy};
use crate::error::{AnalysisError, Result};
use crate::frequency::FrequencyTable;
use crate::montecarlo::{MonteCarloEstimate, monte_carlo};
use crate::significance::pochisq;

/// Knobs for [`analyze_with_options`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    /// Compute the independent statistics on scoped threads.
    pub parallel: bool,
}

/// Randomness statistics of one buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticalReport {
    /// Number of bytes analyzed.
    pub sample_size: u64,
    /// Shannon entropy, bits per byte (0–8).
    pub entropy: f64,
    /// Size reduction an optimal coder would achieve, percent.
    pub optimum_compression: f64,
    /// Pearson's χ² against a uniform byte distribution.
    pub chi_square: f64,
    /// Probability a random sequence exceeds `chi_square` (0–1).
    pub chi_square_probability: f64,
    pub chi_square_verdict: ChiSquareVerdict,
    /// Arithmetic mean of the bytes (127.5 for random data).
    pub mean: f64,
    /// `None` when the buffer holds fewer bytes than one point needs.
    pub monte_carlo: Option<MonteCarloEstimate>,
    pub serial_correlation: SerialCorrelation,
}

impl StatisticalReport {
    /// π estimate, when defined.
    pub fn monte_carlo_pi(&self) -> Option<f64> {
        self.monte_carlo.map(|mc| mc.pi())
    }

    /// χ² probability as a percentage.
    pub fn chi_square_percent(&self) -> f64 {
        self.chi_square_probability * 100.0
    }
}

/// Analyze `data` serially. Fails only for an empty buffer.
pub fn analyze(data: &[u8]) -> Result<StatisticalReport> {
    analyze_with_options(data, AnalysisOptions::default())
}

/// Analyze `data`, counting byte frequencies first.
pub fn analyze_with_options(data: &[u8], options: AnalysisOptions) -> Result<StatisticalReport> {
    let table = FrequencyTable::from_bytes(data);
    analyze_with_table(data, &table, options)
}

/// Analyze `data` with a frequency table the caller already built from it.
///
/// Fails with [`AnalysisError::TableMismatch`] when the table counts a
/// different number of bytes than `data` holds.
pub fn analyze_with_table(
    data: &[u8],
    table: &FrequencyTable,
    options: AnalysisOptions,
) -> Result<StatisticalReport> {
    if data.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if table.total() != data.len() as u64 {
        return Err(AnalysisError::TableMismatch {
            table: table.total(),
            data: data.len() as u64,
        });
    }

    let t0 = Instant::now();
    let report = if options.parallel {
        std::thread::scope(|s| {
            let counted = s.spawn(|| counted_statistics(table));
            let mc = s.spawn(|| monte_carlo_or_none(data));
            let scc = SerialCorrelation::of(data);
            let counted = counted
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            let mc = mc
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            assemble(table, counted, mc, scc)
        })
    } else {
        assemble(
            table,
            counted_statistics(table),
            monte_carlo_or_none(data),
            SerialCorrelation::of(data),
        )
    }?;
    log::debug!(
        "analyzed {} bytes in {:.3}s (parallel: {})",
        data.len(),
        t0.elapsed().as_secs_f64(),
        options.parallel
    );
    Ok(report)
}

/// Entropy, χ² with its probability, and the mean: everything derived from
/// the frequency table.
struct CountedStatistics {
    entropy: f64,
    chi_square: f64,
    chi_square_probability: f64,
    mean: f64,
}

fn counted_statistics(table: &FrequencyTable) -> Result<CountedStatistics> {
    let chi_square = chi_square(table)?;
    Ok(CountedStatistics {
        entropy: shannon_entropy(table)?,
        chi_square,
        chi_square_probability: pochisq(chi_square, BYTE_DEGREES_OF_FREEDOM)?,
        mean: table.mean()?,
    })
}

fn monte_carlo_or_none(data: &[u8]) -> Option<MonteCarloEstimate> {
    match monte_carlo(data) {
        Ok(estimate) => Some(estimate),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

fn assemble(
    table: &FrequencyTable,
    counted: Result<CountedStatistics>,
    monte_carlo: Option<MonteCarloEstimate>,
    serial_correlation: Result<SerialCorrelation>,
) -> Result<StatisticalReport> {
    let counted = counted?;
    Ok(StatisticalReport {
        sample_size: table.total(),
        entropy: counted.entropy,
        optimum_compression: optimum_compression_percent(counted.entropy),
        chi_square: counted.chi_square,
        chi_square_probability: counted.chi_square_probability,
        chi_square_verdict: ChiSquareVerdict::from_probability(counted.chi_square_probability),
        mean: counted.mean,
        monte_carlo,
        serial_correlation: serial_correlation?,
    })
}
