//! Integration tests for ent-core.
//!
//! These exercise the public pipeline end to end:
//! bytes → frequency table → individual statistics → report.

use ent_core::{
    AnalysisError, BYTE_DEGREES_OF_FREEDOM, FrequencyTable, SerialCorrelation, analyze,
    chi_square, entropy_from_counts, monte_carlo_pi, pochisq, serial_correlation,
    shannon_entropy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_data(n: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; n];
    rng.fill(&mut data[..]);
    data
}

#[test]
fn report_matches_individual_calculators() {
    let data = random_data(300_000, 42);
    let table = FrequencyTable::from_bytes(&data);
    let report = analyze(&data).unwrap();

    assert_eq!(report.entropy, shannon_entropy(&table).unwrap());
    assert_eq!(report.chi_square, chi_square(&table).unwrap());
    assert_eq!(
        report.chi_square_probability,
        pochisq(report.chi_square, BYTE_DEGREES_OF_FREEDOM).unwrap()
    );
    assert_eq!(report.mean, table.mean().unwrap());
    assert_eq!(report.monte_carlo_pi(), Some(monte_carlo_pi(&data).unwrap()));
    assert_eq!(
        report.serial_correlation,
        SerialCorrelation::Coefficient(serial_correlation(&data).unwrap())
    );
}

#[test]
fn precomputed_counts_give_same_statistics() {
    let data = random_data(50_000, 3);
    let table = FrequencyTable::from_bytes(&data);
    let rebuilt = FrequencyTable::from_counts(table.counts()).unwrap();
    assert_eq!(rebuilt, table);
    assert_eq!(
        entropy_from_counts(table.counts()).unwrap(),
        shannon_entropy(&rebuilt).unwrap()
    );
}

#[test]
fn degenerate_inputs_are_named() {
    assert_eq!(analyze(&[]), Err(AnalysisError::EmptyInput));
    assert_eq!(
        serial_correlation(&[0x55; 256]),
        Err(AnalysisError::DegenerateCorrelation)
    );
    assert!(matches!(
        monte_carlo_pi(&[1, 2, 3]),
        Err(AnalysisError::InsufficientDataForMonteCarlo { got: 3, .. })
    ));
    assert_eq!(
        pochisq(100.0, 0),
        Err(AnalysisError::InvalidDegreesOfFreedom { df: 0 })
    );
}

#[test]
fn biased_stream_is_flagged() {
    // Only the low nibble varies: 16 of 256 values ever occur.
    let data: Vec<u8> = random_data(100_000, 11).iter().map(|b| b & 0x0f).collect();
    let report = analyze(&data).unwrap();
    assert!((report.entropy - 4.0).abs() < 0.01, "entropy {}", report.entropy);
    assert!((report.optimum_compression - 50.0).abs() < 0.2);
    assert_eq!(report.chi_square_probability, 0.0);
    assert!(report.mean < 8.0);
}

/// Reference figures from the original `ent` for its 10 MiB `random.dat`.
#[test]
#[ignore] // Run with: ENT_REFERENCE_DATA=/path/to/random.dat cargo test -- --ignored
fn reference_random_dat() {
    let path = std::env::var("ENT_REFERENCE_DATA")
        .expect("ENT_REFERENCE_DATA must point at the 10 MiB random.dat");
    let data = std::fs::read(&path).unwrap();
    assert_eq!(data.len(), 10_485_760);

    let report = analyze(&data).unwrap();
    assert!((report.entropy - 7.999_982).abs() < 1e-5, "entropy {}", report.entropy);
    assert!(
        (report.chi_square - 259.031_104).abs() < 1e-5,
        "chi-square {}",
        report.chi_square
    );
    assert!((report.mean - 127.511_638).abs() < 1e-5, "mean {}", report.mean);
    let pi = report.monte_carlo_pi().unwrap();
    assert!((pi - 3.139_878).abs() < 1e-3, "pi {pi}");
    let r = report.serial_correlation.coefficient().unwrap();
    assert!((r - -0.000_296).abs() < 1e-6, "scc {r}");
}
