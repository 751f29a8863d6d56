//! Curve sampling over a TVL domain for charts and simulation

use crate::bps::Bps;
use crate::error::SampleError;
use crate::params::ValidatedParams;
use crate::ratio::target_ratio_for;
use crate::triggers::triggers_for;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lower TVL bound (USD) of logarithmic sweeps; dashboards start at $1K.
pub const LOG_TVL_FLOOR: f64 = 1_000.0;
/// Ratio between `max_tvl` and the floor of a log sweep whose `max_tvl` is
/// at or below [`LOG_TVL_FLOOR`] (six decades).
pub const SMALL_DOMAIN_SPAN: f64 = 1e6;
/// Lower TVL bound (USD) of linear sweeps.
pub const LINEAR_TVL_FLOOR: f64 = 0.0;
/// Upper TVL bound (USD) of the default chart.
pub const DEFAULT_MAX_TVL: f64 = 1_000_000_000.0;
/// Number of samples in the default chart.
pub const DEFAULT_POINT_COUNT: usize = 100;

/// One evaluated sample of the low / target / high curves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Vault TVL in USD
    pub tvl: f64,
    /// Low trigger
    pub low: Bps,
    /// Target ratio
    pub target: Bps,
    /// High trigger
    pub high: Bps,
}

impl CurvePoint {
    /// Evaluates the model at `tvl`.
    pub fn at(params: &ValidatedParams, tvl: f64) -> Self {
        let target = target_ratio_for(params, tvl);
        let t = triggers_for(params, target);
        CurvePoint { tvl, low: t.low_trigger, target, high: t.high_trigger }
    }
}

/// Domain floor used by [`sample_curve`] for the given spacing.
///
/// Log sweeps start at [`LOG_TVL_FLOOR`], or at
/// `max_tvl / SMALL_DOMAIN_SPAN` when `max_tvl` does not exceed it, so the
/// floor is always positive and below any positive `max_tvl`.
pub fn domain_floor(max_tvl: f64, logarithmic: bool) -> f64 {
    if !logarithmic {
        LINEAR_TVL_FLOOR
    } else if max_tvl > LOG_TVL_FLOOR {
        LOG_TVL_FLOOR
    } else {
        max_tvl / SMALL_DOMAIN_SPAN
    }
}

/// Samples `point_count` points from the spacing's floor up to `max_tvl`.
///
/// See [`sample_curve_in`].
pub fn sample_curve(
    params: &ValidatedParams,
    max_tvl: f64,
    point_count: usize,
    logarithmic: bool,
) -> Result<Vec<CurvePoint>, SampleError> {
    if !max_tvl.is_nan() && max_tvl <= 0.0 {
        return Err(SampleError::NonPositiveMaxTvl(max_tvl));
    }
    let floor = domain_floor(max_tvl, logarithmic);
    sample_curve_in(params, floor, max_tvl, point_count, logarithmic)
}

/// Samples `point_count` points over `[min_tvl, max_tvl]`.
///
/// Points are spaced evenly in log-space when `logarithmic` (requires
/// `min_tvl > 0`), linearly otherwise. The first and last samples sit
/// exactly on the domain bounds and TVL strictly increases; a domain too
/// narrow to hold `point_count` distinct values is an `InvalidDomain`.
pub fn sample_curve_in(
    params: &ValidatedParams,
    min_tvl: f64,
    max_tvl: f64,
    point_count: usize,
    logarithmic: bool,
) -> Result<Vec<CurvePoint>, SampleError> {
    let tvls = tvl_grid(min_tvl, max_tvl, point_count, logarithmic)?;
    debug!(
        points = point_count,
        min_tvl,
        max_tvl,
        logarithmic,
        "sampling liquidity curve"
    );
    Ok(tvls.into_iter().map(|t| CurvePoint::at(params, t)).collect())
}

/// The TVL abscissae alone, with the same preconditions as [`sample_curve_in`].
pub fn tvl_grid(
    min_tvl: f64,
    max_tvl: f64,
    point_count: usize,
    logarithmic: bool,
) -> Result<Vec<f64>, SampleError> {
    if point_count < 2 {
        return Err(SampleError::TooFewPoints(point_count));
    }
    if !min_tvl.is_finite() || !max_tvl.is_finite() {
        return Err(SampleError::NonFiniteDomain { min: min_tvl, max: max_tvl });
    }
    if max_tvl <= 0.0 {
        return Err(SampleError::NonPositiveMaxTvl(max_tvl));
    }
    let spacing = if logarithmic { "logarithmic" } else { "linear" };
    if min_tvl < 0.0 || min_tvl >= max_tvl || (logarithmic && min_tvl <= 0.0) {
        return Err(SampleError::InvalidDomain { min: min_tvl, max: max_tvl, spacing });
    }

    let last = point_count - 1;
    let steps = last as f64;
    let mut out = Vec::with_capacity(point_count);
    if logarithmic {
        let lo = min_tvl.ln();
        let d = (max_tvl.ln() - lo) / steps;
        out.push(min_tvl);
        for i in 1..last {
            out.push((lo + d * i as f64).exp().clamp(min_tvl, max_tvl));
        }
    } else {
        let d = (max_tvl - min_tvl) / steps;
        out.push(min_tvl);
        for i in 1..last {
            out.push((min_tvl + d * i as f64).clamp(min_tvl, max_tvl));
        }
    }
    out.push(max_tvl);
    if out.windows(2).any(|w| w[1] <= w[0]) {
        return Err(SampleError::InvalidDomain { min: min_tvl, max: max_tvl, spacing });
    }
    Ok(out)
}
