//! Target liquidity ratio as a function of vault TVL

use crate::bps::{Bps, BPS};
use crate::params::ValidatedParams;

/// Target reserve ratio `r = b + (1 - b) * (1 + T*f)^(-e)`, in basis points.
///
/// `tvl` is in USD, the unit `tvl_factor` is calibrated against. Negative
/// (and NaN) TVL is treated as zero. At `tvl = 0` the result is exactly
/// 10,000 bp; as TVL grows it decays towards `min_ratio`.
///
/// The curve is strictly decreasing only for positive `tvl_factor` and
/// `tvl_exponent`; [`ValidatedParams`] guarantees both.
pub fn target_ratio(tvl: f64, min_ratio: Bps, tvl_factor: Bps, tvl_exponent: Bps) -> Bps {
    let t = tvl.max(0.0);
    let f = tvl_factor.as_fraction();
    let e = tvl_exponent.as_fraction();
    let decay = (1.0 + t * f).powf(-e);
    // stay in bp space so T=0 lands on exactly BPS
    let b = min_ratio.value();
    Bps(b + (BPS - b) * decay)
}

/// [`target_ratio`] driven by a validated parameter set.
pub fn target_ratio_for(params: &ValidatedParams, tvl: f64) -> Bps {
    target_ratio(tvl, params.min_ratio(), params.tvl_factor(), params.tvl_exponent())
}
