//! Monte Carlo estimate of π from byte triples.
//!
//! Every three bytes form one 24-bit big-endian coordinate; consecutive
//! coordinates form an `(x, y)` point in a square of side 2²⁴. The share of
//! points inside the inscribed quarter circle approximates π/4. The grouping
//! and radius match the classic `ent` tool so results stay comparable.

use std::f64::consts::PI;

use serde::Serialize;

use crate::error::{AnalysisError, Result};

/// Bytes per coordinate.
pub const COORDINATE_BYTES: usize = 3;
/// Bytes per `(x, y)` point.
pub const POINT_BYTES: usize = 2 * COORDINATE_BYTES;
/// (2²⁴ − 1)², the squared radius of the quarter circle.
pub const IN_CIRCLE_DISTANCE: u64 = ((1 << 24) - 1) * ((1 << 24) - 1);

/// Point tallies behind a Monte Carlo π estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonteCarloEstimate {
    /// Complete points formed from the buffer.
    pub points: u64,
    /// Points with `x² + y² <= (2²⁴ − 1)²`.
    pub in_circle: u64,
}

impl MonteCarloEstimate {
    /// `4 · in_circle / points`.
    pub fn pi(&self) -> f64 {
        4.0 * self.in_circle as f64 / self.points as f64
    }

    /// Relative error of [`pi`](Self::pi) against π, in percent.
    pub fn error_percent(&self) -> f64 {
        100.0 * (PI - self.pi()).abs() / PI
    }
}

/// Tally points from `data`; trailing bytes that do not complete a point are
/// ignored.
pub fn monte_carlo(data: &[u8]) -> Result<MonteCarloEstimate> {
    if data.len() < POINT_BYTES {
        return Err(AnalysisError::InsufficientDataForMonteCarlo {
            needed: POINT_BYTES,
            got: data.len(),
        });
    }
    let mut points = 0u64;
    let mut in_circle = 0u64;
    for point in data.chunks_exact(POINT_BYTES) {
        let (x, y) = point.split_at(COORDINATE_BYTES);
        let (x, y) = (coordinate(x), coordinate(y));
        if x * x + y * y <= IN_CIRCLE_DISTANCE {
            in_circle += 1;
        }
        points += 1;
    }
    Ok(MonteCarloEstimate { points, in_circle })
}

/// Convenience wrapper returning only the π estimate.
pub fn monte_carlo_pi(data: &[u8]) -> Result<f64> {
    monte_carlo(data).map(|estimate| estimate.pi())
}

fn coordinate(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}
