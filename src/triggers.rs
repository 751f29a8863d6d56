//! Rebalancing trigger thresholds around a target ratio

use crate::bps::Bps;
use crate::params::ValidatedParams;
use serde::{Deserialize, Serialize};

/// Low/high rebalancing boundaries, in basis points.
///
/// Below `low_trigger` LP positions are unwound to refill the buffer; above
/// `high_trigger` excess buffer is deployed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerThresholds {
    /// `target * (1 - low_offset)`
    pub low_trigger: Bps,
    /// `target * (1 + high_offset)`; may exceed 10,000 bp
    pub high_trigger: Bps,
}

/// Derives trigger thresholds from a target ratio and fractional offsets.
///
/// No clamping: the high trigger is a decision boundary and is allowed to
/// sit above 100%.
pub fn triggers(target: Bps, low_offset: Bps, high_offset: Bps) -> TriggerThresholds {
    TriggerThresholds {
        low_trigger: target * (1.0 - low_offset.as_fraction()),
        high_trigger: target * (1.0 + high_offset.as_fraction()),
    }
}

/// [`triggers`] using the offsets of a validated parameter set.
pub fn triggers_for(params: &ValidatedParams, target: Bps) -> TriggerThresholds {
    triggers(target, params.low_offset(), params.high_offset())
}
