//! JSON run configuration for the CLI

use anyhow::{Context, Result};
use liqmodel::LiquidityModelUpdate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sampling domain overrides
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SamplingConfig {
    pub max_tvl: Option<f64>,
    pub point_count: Option<usize>,
    pub logarithmic: Option<bool>,
}

/// Everything a config file may set; every field is optional and CLI flags win.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunConfig {
    pub liquidity_model: LiquidityModelUpdate,
    pub liquidity_tvl: Option<f64>,
    pub sampling: SamplingConfig,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}
