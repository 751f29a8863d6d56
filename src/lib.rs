#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(missing_docs)]
//! Library entry for the liquidity buffer model.
//!
//! Computes a vault's target reserve ratio from its TVL, derives the
//! rebalancing trigger band around it, and samples the resulting curves
//! for charts and simulation. Every computation is a pure function of an
//! explicit, validated parameter set.
//!
//! # Modules
//! - [`bps`]: Basis-point unit type
//! - [`params`]: Parameter schema, bounds and defaults
//! - [`ratio`]: Target ratio function
//! - [`triggers`]: Low/high trigger thresholds
//! - [`sampler`]: Curve sampling over a TVL domain
//! - [`simulation`]: Point evaluation at a simulated TVL
//! - [`verifier`]: Shape checks over sampled curves
//! - [`plot`]: Visualization (optional in binaries)

/// Basis-point quantities and the `BPS` scale factor
pub mod bps;

/// Sampling precondition errors
pub mod error;

/// Parameter schema: validation bounds, defaults and partial updates
pub mod params;

/// Target liquidity ratio function
pub mod ratio;

/// Trigger threshold calculator
pub mod triggers;

/// Curve sampler for charts and simulation
pub mod sampler;

/// Simulated TVL state and point evaluation
pub mod simulation;

/// Verification tools for sampled curve shape
pub mod verifier;

/// Visualization utilities for generating charts
pub mod plot;

pub use bps::{Bps, BPS};
pub use error::SampleError;
pub use params::{
    validate, FieldBounds, LiquidityModelParams, LiquidityModelUpdate, ValidatedParams,
    DEFAULT_LIQUIDITY_MODEL, VALIDATION,
};
pub use ratio::{target_ratio, target_ratio_for};
pub use sampler::{sample_curve, sample_curve_in, CurvePoint};
pub use simulation::{evaluate, Evaluation, SimulationState};
pub use triggers::{triggers, triggers_for, TriggerThresholds};
