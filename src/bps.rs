//! Basis-point quantities

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Scale factor between a basis-point quantity and a unit fraction.
pub const BPS: f64 = 10_000.0;

/// A ratio-like quantity expressed in basis points (1 bp = 1/10,000).
///
/// Model parameters are whole basis points; derived values (target ratio,
/// trigger thresholds) keep fractional basis points. Formulas that need a
/// 0..1 fraction go through [`Bps::as_fraction`] / [`Bps::from_fraction`] so
/// the unit change happens in exactly one place.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bps(pub f64);

impl Bps {
    /// Zero basis points.
    pub const ZERO: Bps = Bps(0.0);
    /// 10,000 bp, i.e. a ratio of one.
    pub const ONE: Bps = Bps(BPS);

    /// Whole basis points, as stored in the parameter schema.
    pub fn from_int(bp: i64) -> Self { Bps(bp as f64) }
    /// Converts a unit fraction (0.05 = 5%) into basis points.
    pub fn from_fraction(x: f64) -> Self { Bps(x * BPS) }
    /// The quantity as a unit fraction.
    pub fn as_fraction(self) -> f64 { self.0 / BPS }
    /// Raw basis-point value.
    pub fn value(self) -> f64 { self.0 }
}

impl Add for Bps {
    type Output = Bps;
    fn add(self, rhs: Bps) -> Bps { Bps(self.0 + rhs.0) }
}

impl Mul<f64> for Bps {
    type Output = Bps;
    fn mul(self, rhs: f64) -> Bps { Bps(self.0 * rhs) }
}
