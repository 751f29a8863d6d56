//! Point-in-time evaluation at a simulated vault size

use crate::bps::Bps;
use crate::params::ValidatedParams;
use crate::ratio::target_ratio_for;
use crate::triggers::{triggers_for, TriggerThresholds};
use serde::{Deserialize, Serialize};

/// Smallest simulated TVL offered by the dashboard (USD).
pub const MIN_SIMULATION_TVL: f64 = 1_000.0;
/// Largest simulated TVL offered by the dashboard (USD).
pub const MAX_SIMULATION_TVL: f64 = 1_000_000_000.0;
/// TVL restored on reset (USD).
pub const DEFAULT_SIMULATION_TVL: f64 = 1_000_000.0;

/// Simulated vault size used for point evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    /// TVL in USD
    pub liquidity_tvl: f64,
}

impl SimulationState {
    /// Builds a state with `tvl` clamped into the display range.
    /// NaN falls back to the default TVL.
    pub fn new(tvl: f64) -> Self {
        let liquidity_tvl = if tvl.is_nan() {
            DEFAULT_SIMULATION_TVL
        } else {
            tvl.clamp(MIN_SIMULATION_TVL, MAX_SIMULATION_TVL)
        };
        SimulationState { liquidity_tvl }
    }
}

impl Default for SimulationState {
    fn default() -> Self { SimulationState { liquidity_tvl: DEFAULT_SIMULATION_TVL } }
}

/// Target ratio and trigger band at one TVL.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// TVL the model was evaluated at
    pub tvl: f64,
    /// Target reserve ratio
    pub target: Bps,
    /// Rebalancing thresholds around `target`
    pub triggers: TriggerThresholds,
}

/// Evaluates the ratio function and trigger calculator at `tvl`.
///
/// Negative (and NaN) TVL is evaluated, and reported, as zero.
pub fn evaluate(params: &ValidatedParams, tvl: f64) -> Evaluation {
    let tvl = tvl.max(0.0);
    let target = target_ratio_for(params, tvl);
    Evaluation { tvl, target, triggers: triggers_for(params, target) }
}
