//! Liquidity model parameter schema: bounds, defaults and clamping

use crate::bps::Bps;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The five liquidity model inputs, in whole basis points.
///
/// Fields are signed so that any editor input is representable; values only
/// become usable for computation once clamped through [`validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityModelParams {
    /// Asymptotic floor ratio `b` approached as TVL grows
    pub min_ratio_bp: i64,
    /// Linear TVL sensitivity `f` inside the decay term
    pub tvl_factor_bp: i64,
    /// Decay exponent `e` (500 bp = 0.05)
    pub tvl_exponent_bp: i64,
    /// Fractional offset below target for the low trigger
    pub low_offset_bp: i64,
    /// Fractional offset above target for the high trigger
    pub high_offset_bp: i64,
}

/// Inclusive range and editor step for a single parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBounds {
    /// Lowest accepted value
    pub min: i64,
    /// Highest accepted value
    pub max: i64,
    /// Increment used by editing surfaces; not enforced by [`validate`]
    pub step: i64,
}

impl FieldBounds {
    /// Clamps `v` into `[min, max]`.
    pub fn clamp(&self, v: i64) -> i64 { v.clamp(self.min, self.max) }
    /// Whether `v` already lies inside the range.
    pub fn contains(&self, v: i64) -> bool { (self.min..=self.max).contains(&v) }
}

/// Per-field validation bounds for [`LiquidityModelParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityModelValidation {
    /// Bounds for `min_ratio_bp`
    pub min_ratio_bp: FieldBounds,
    /// Bounds for `tvl_factor_bp`
    pub tvl_factor_bp: FieldBounds,
    /// Bounds for `tvl_exponent_bp`
    pub tvl_exponent_bp: FieldBounds,
    /// Bounds for `low_offset_bp`
    pub low_offset_bp: FieldBounds,
    /// Bounds for `high_offset_bp`
    pub high_offset_bp: FieldBounds,
}

/// Policy bounds. Factor and exponent minima are strictly positive so the
/// ratio curve is always strictly decreasing; offset maxima stay below
/// 10,000 bp so the trigger band never collapses.
pub const VALIDATION: LiquidityModelValidation = LiquidityModelValidation {
    min_ratio_bp: FieldBounds { min: 100, max: 5_000, step: 100 },
    tvl_factor_bp: FieldBounds { min: 100, max: 20_000, step: 100 },
    tvl_exponent_bp: FieldBounds { min: 50, max: 5_000, step: 50 },
    low_offset_bp: FieldBounds { min: 0, max: 5_000, step: 100 },
    high_offset_bp: FieldBounds { min: 0, max: 5_000, step: 100 },
};

/// Parameter set loaded at start-up and restored on reset.
pub const DEFAULT_LIQUIDITY_MODEL: LiquidityModelParams = LiquidityModelParams {
    min_ratio_bp: 500,
    tvl_factor_bp: 1_000,
    tvl_exponent_bp: 500,
    low_offset_bp: 2_000,
    high_offset_bp: 2_000,
};

impl Default for LiquidityModelParams {
    fn default() -> Self { DEFAULT_LIQUIDITY_MODEL }
}

/// A parameter set whose every field lies inside [`VALIDATION`].
///
/// Only obtainable through [`validate`], so functions taking it never need
/// to re-check ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedParams(LiquidityModelParams);

impl ValidatedParams {
    /// The clamped raw parameters.
    pub fn params(&self) -> &LiquidityModelParams { &self.0 }
    /// Floor ratio `b`.
    pub fn min_ratio(&self) -> Bps { Bps::from_int(self.0.min_ratio_bp) }
    /// TVL factor `f`.
    pub fn tvl_factor(&self) -> Bps { Bps::from_int(self.0.tvl_factor_bp) }
    /// Decay exponent `e`.
    pub fn tvl_exponent(&self) -> Bps { Bps::from_int(self.0.tvl_exponent_bp) }
    /// Low trigger offset.
    pub fn low_offset(&self) -> Bps { Bps::from_int(self.0.low_offset_bp) }
    /// High trigger offset.
    pub fn high_offset(&self) -> Bps { Bps::from_int(self.0.high_offset_bp) }
}

impl Default for ValidatedParams {
    fn default() -> Self { validate(&DEFAULT_LIQUIDITY_MODEL) }
}

impl From<ValidatedParams> for LiquidityModelParams {
    fn from(v: ValidatedParams) -> Self { v.0 }
}

fn clamp_field(name: &str, bounds: &FieldBounds, v: i64) -> i64 {
    let c = bounds.clamp(v);
    if c != v {
        debug!(field = name, input = v, clamped = c, "parameter clamped to bounds");
    }
    c
}

/// Clamps every field independently into its [`VALIDATION`] range.
///
/// Never fails: out-of-range input is normalised, not rejected.
pub fn validate(params: &LiquidityModelParams) -> ValidatedParams {
    let v = &VALIDATION;
    ValidatedParams(LiquidityModelParams {
        min_ratio_bp: clamp_field("min_ratio_bp", &v.min_ratio_bp, params.min_ratio_bp),
        tvl_factor_bp: clamp_field("tvl_factor_bp", &v.tvl_factor_bp, params.tvl_factor_bp),
        tvl_exponent_bp: clamp_field("tvl_exponent_bp", &v.tvl_exponent_bp, params.tvl_exponent_bp),
        low_offset_bp: clamp_field("low_offset_bp", &v.low_offset_bp, params.low_offset_bp),
        high_offset_bp: clamp_field("high_offset_bp", &v.high_offset_bp, params.high_offset_bp),
    })
}

/// Partial replacement of a parameter set; `None` keeps the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiquidityModelUpdate {
    /// New floor ratio
    pub min_ratio_bp: Option<i64>,
    /// New TVL factor
    pub tvl_factor_bp: Option<i64>,
    /// New decay exponent
    pub tvl_exponent_bp: Option<i64>,
    /// New low offset
    pub low_offset_bp: Option<i64>,
    /// New high offset
    pub high_offset_bp: Option<i64>,
}

impl LiquidityModelUpdate {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool { *self == Self::default() }

    /// Overlays `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: LiquidityModelUpdate) -> LiquidityModelUpdate {
        LiquidityModelUpdate {
            min_ratio_bp: other.min_ratio_bp.or(self.min_ratio_bp),
            tvl_factor_bp: other.tvl_factor_bp.or(self.tvl_factor_bp),
            tvl_exponent_bp: other.tvl_exponent_bp.or(self.tvl_exponent_bp),
            low_offset_bp: other.low_offset_bp.or(self.low_offset_bp),
            high_offset_bp: other.high_offset_bp.or(self.high_offset_bp),
        }
    }

    /// Applies the update to `current` and re-validates the result.
    pub fn apply(&self, current: &ValidatedParams) -> ValidatedParams {
        let c = current.params();
        validate(&LiquidityModelParams {
            min_ratio_bp: self.min_ratio_bp.unwrap_or(c.min_ratio_bp),
            tvl_factor_bp: self.tvl_factor_bp.unwrap_or(c.tvl_factor_bp),
            tvl_exponent_bp: self.tvl_exponent_bp.unwrap_or(c.tvl_exponent_bp),
            low_offset_bp: self.low_offset_bp.unwrap_or(c.low_offset_bp),
            high_offset_bp: self.high_offset_bp.unwrap_or(c.high_offset_bp),
        })
    }
}

impl From<LiquidityModelParams> for LiquidityModelUpdate {
    fn from(p: LiquidityModelParams) -> Self {
        LiquidityModelUpdate {
            min_ratio_bp: Some(p.min_ratio_bp),
            tvl_factor_bp: Some(p.tvl_factor_bp),
            tvl_exponent_bp: Some(p.tvl_exponent_bp),
            low_offset_bp: Some(p.low_offset_bp),
            high_offset_bp: Some(p.high_offset_bp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_inside_bounds() {
        let d = DEFAULT_LIQUIDITY_MODEL;
        let v = VALIDATION;
        assert!(v.min_ratio_bp.contains(d.min_ratio_bp));
        assert!(v.tvl_factor_bp.contains(d.tvl_factor_bp));
        assert!(v.tvl_exponent_bp.contains(d.tvl_exponent_bp));
        assert!(v.low_offset_bp.contains(d.low_offset_bp));
        assert!(v.high_offset_bp.contains(d.high_offset_bp));
        assert_eq!(LiquidityModelParams::from(ValidatedParams::default()), d);
    }

    #[test]
    fn merge_prefers_later_fields() {
        let file = LiquidityModelUpdate {
            min_ratio_bp: Some(300),
            low_offset_bp: Some(900),
            ..Default::default()
        };
        let flags = LiquidityModelUpdate { min_ratio_bp: Some(700), ..Default::default() };
        let m = file.merge(flags);
        assert_eq!(m.min_ratio_bp, Some(700));
        assert_eq!(m.low_offset_bp, Some(900));
        assert_eq!(m.tvl_factor_bp, None);
    }
}
