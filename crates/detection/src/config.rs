//! Merger and fallback configuration

use serde::{Deserialize, Serialize};

/// Detection merger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergerConfig {
    /// Confidence floor for whole-frame labeler results
    pub label_confidence_floor: f32,

    /// Confidence floor for box detector results
    pub box_confidence_floor: f32,

    /// Scene-level labels that are never actionable obstacles
    pub generic_labels: Vec<String>,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            label_confidence_floor: 0.5,
            box_confidence_floor: 0.3,
            generic_labels: [
                "sky",
                "wall",
                "texture",
                "ceiling",
                "floor",
                "pattern",
                "light",
                "background",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl MergerConfig {
    pub fn is_generic(&self, normalized_label: &str) -> bool {
        self.generic_labels.iter().any(|g| g == normalized_label)
    }
}

/// Luminance fallback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Luma variance below this counts as a uniform surface (8-bit plane)
    pub uniformity_variance: f32,

    /// Minimum derived confidence before a synthetic obstacle is emitted
    pub min_confidence: f32,

    /// Distance assigned to a synthetic obstacle (meters)
    pub obstacle_distance_m: f32,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            uniformity_variance: 350.0,
            min_confidence: 0.5,
            obstacle_distance_m: 1.2,
        }
    }
}
