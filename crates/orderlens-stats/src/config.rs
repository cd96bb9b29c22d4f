//! Configuration for orderlens-stats
//!
//! Centralized defaults for the reporting parameters: revenue take rates and
//! the ranked extremes threshold and half size.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::extremes::{DEFAULT_HALF, DEFAULT_THRESHOLD};
use crate::revenue::RevenueRates;

/// Reporting configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Revenue take rates
    pub revenue: RevenueRates,
    /// Ranked extremes settings
    pub extremes: ExtremesConfig,
}

/// Ranked extremes configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtremesConfig {
    /// Entities need strictly more rows than this
    pub threshold: usize,
    /// Entities reported per half
    pub half: usize,
}

impl Default for ExtremesConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            half: DEFAULT_HALF,
        }
    }
}

impl StatsConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> StatsResult<()> {
        self.revenue.validate()?;

        if self.extremes.half == 0 {
            return Err(StatsError::InvalidConfig(
                "extremes.half must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
