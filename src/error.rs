//! Precondition failures for curve sampling

use thiserror::Error;

/// Invalid sampling request. Reported synchronously, never silently repaired.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// Fewer than two points cannot cover both domain endpoints
    #[error("point_count must be >= 2 (got {0})")]
    TooFewPoints(usize),
    /// Upper bound of the TVL domain is zero or negative
    #[error("max_tvl must be > 0 (got {0})")]
    NonPositiveMaxTvl(f64),
    /// A domain bound is NaN or infinite
    #[error("TVL domain bounds must be finite (got {min}..{max})")]
    NonFiniteDomain {
        /// Requested lower bound
        min: f64,
        /// Requested upper bound
        max: f64,
    },
    /// Lower bound is not strictly below the upper bound, or is invalid for the spacing
    #[error("TVL domain {min}..{max} is empty or invalid for {spacing} spacing")]
    InvalidDomain {
        /// Requested lower bound
        min: f64,
        /// Requested upper bound
        max: f64,
        /// "linear" or "logarithmic"
        spacing: &'static str,
    },
}
