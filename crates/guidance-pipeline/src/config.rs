//! Aggregated engine configuration
//!
//! Defaults carry the calibrated constants; a config file and
//! `SENSEGUIDE_*` environment variables can override any field.

use detection::{FallbackConfig, MergerConfig};
use feedback::FeedbackConfig;
use geometry::GeometryConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Full engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidanceConfig {
    #[serde(default)]
    pub geometry: GeometryConfig,

    #[serde(default)]
    pub merger: MergerConfig,

    #[serde(default)]
    pub fallback: FallbackConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    /// Consecutive identical gesture observations required to confirm
    #[serde(default = "default_stability_threshold")]
    pub stability_threshold: u32,

    /// Retained conversation-history entries
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_stability_threshold() -> u32 {
    gesture::filter::DEFAULT_STABILITY_THRESHOLD
}

fn default_history_capacity() -> usize {
    gesture::history::DEFAULT_HISTORY_CAPACITY
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            merger: MergerConfig::default(),
            fallback: FallbackConfig::default(),
            feedback: FeedbackConfig::default(),
            stability_threshold: default_stability_threshold(),
            history_capacity: default_history_capacity(),
        }
    }
}

impl GuidanceConfig {
    /// Layer an optional config file and the environment over the defaults
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix("SENSEGUIDE").separator("__"))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        info!(
            stability_threshold = loaded.stability_threshold,
            focal_length = loaded.geometry.focal_length,
            "guidance configuration loaded"
        );
        Ok(loaded)
    }
}
