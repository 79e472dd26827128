//! Feedback configuration

use serde::{Deserialize, Serialize};

/// Feedback rate-limit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Minimum interval between haptic emissions (ms)
    pub haptic_min_interval_ms: u64,

    /// Minimum interval between spoken emissions (ms)
    pub speech_min_interval_ms: u64,

    /// Delay before the directional sub-pulse follows a primary pulse (ms)
    pub directional_pulse_delay_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            haptic_min_interval_ms: 300,
            speech_min_interval_ms: 2000,
            directional_pulse_delay_ms: 150,
        }
    }
}

impl FeedbackConfig {
    /// Longer budgets for users who prefer sparse feedback
    pub fn quiet() -> Self {
        Self {
            haptic_min_interval_ms: 1000,
            speech_min_interval_ms: 5000,
            directional_pulse_delay_ms: 150,
        }
    }
}
