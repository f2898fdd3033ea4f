//! # ent-core
//!
//! Randomness statistics for an in-memory byte buffer, compatible with the
//! classic `ent` pseudorandom sequence test program.
//!
//! ## Quick Start
//!
//! ```
//! use ent_core::analyze;
//!
//! let data: Vec<u8> = (0..=255u8).cycle().take(65_536).collect();
//! let report = analyze(&data).unwrap();
//! assert!((report.entropy - 8.0).abs() < 1e-12);
//! assert_eq!(report.chi_square, 0.0);
//! println!("{} bytes, mean {:.4}", report.sample_size, report.mean);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bytes ─┬─ FrequencyTable ─┬─ entropy
//!        │                  ├─ chi-square ── significance (pochisq)
//!        │                  └─ mean
//!        ├─ serial correlation
//!        └─ Monte Carlo π
//! ```
//!
//! Every calculator is a pure function and can be called on its own.
//! Degenerate inputs come back as [`AnalysisError`] variants rather than
//! sentinel values. Nothing here performs I/O.

pub mod chisq;
pub mod correlation;
pub mod entropy;
pub mod error;
pub mod frequency;
pub mod montecarlo;
pub mod report;
pub mod significance;

pub use chisq::{BYTE_DEGREES_OF_FREEDOM, ChiSquareVerdict, chi_square};
pub use correlation::{SerialCorrelation, serial_correlation};
pub use entropy::{entropy_from_counts, optimum_compression_percent, shannon_entropy};
pub use error::{AnalysisError, Result};
pub use frequency::{BYTE_VALUES, FrequencyTable};
pub use montecarlo::{MonteCarloEstimate, monte_carlo, monte_carlo_pi};
pub use report::{
    AnalysisOptions, StatisticalReport, analyze, analyze_with_options, analyze_with_table,
};
pub use significance::{guarded_exp, pochisq, poz};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
