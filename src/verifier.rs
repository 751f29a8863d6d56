//! Shape checks over a sampled liquidity curve

use crate::sampler::CurvePoint;
use anyhow::{anyhow, Result};

/// Verification report for one sampled curve
#[derive(Debug)]
pub struct Report {
    /// Number of samples checked
    pub points: usize,
    /// TVL values strictly increase
    pub tvl_increasing: bool,
    /// Target ratio never increases with TVL
    pub target_monotone: bool,
    /// `low <= target <= high` at every sample
    pub band_ordered: bool,
    /// Smallest and largest ratio between consecutive TVL samples
    pub step_ratio_range: Option<(f64, f64)>,
}

impl Report {
    /// All boolean checks passed.
    pub fn ok(&self) -> bool { self.tvl_increasing && self.target_monotone && self.band_ordered }

    /// Relative spread of consecutive TVL ratios; ~0 for log-spaced curves.
    pub fn step_ratio_spread(&self) -> Option<f64> {
        self.step_ratio_range.map(|(lo, hi)| (hi - lo) / lo)
    }
}

/// Walks `points` once, checking ordering and monotonicity.
pub fn verify_curve(points: &[CurvePoint]) -> Result<Report> {
    if points.len() < 2 {
        return Err(anyhow!("need at least 2 samples (got {})", points.len()));
    }

    let mut tvl_increasing = true;
    let mut target_monotone = true;
    let mut band_ordered = true;
    let mut step_lo = f64::INFINITY;
    let mut step_hi = 0.0_f64;

    for (i, p) in points.iter().enumerate() {
        let finite = [p.low, p.target, p.high].iter().all(|v| v.value().is_finite());
        if !finite {
            return Err(anyhow!("non-finite sample at index {} (tvl={})", i, p.tvl));
        }
        if !(p.low <= p.target && p.target <= p.high) {
            band_ordered = false;
        }
    }
    for w in points.windows(2) {
        let (a, b) = (&w[0], &w[1]);
        if b.tvl <= a.tvl { tvl_increasing = false; }
        if b.target > a.target { target_monotone = false; }
        if a.tvl > 0.0 {
            let s = b.tvl / a.tvl;
            step_lo = step_lo.min(s);
            step_hi = step_hi.max(s);
        }
    }

    let step_ratio_range = if step_lo.is_finite() { Some((step_lo, step_hi)) } else { None };

    Ok(Report {
        points: points.len(),
        tvl_increasing,
        target_monotone,
        band_ordered,
        step_ratio_range,
    })
}
