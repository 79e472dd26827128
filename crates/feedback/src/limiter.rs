//! Per-channel rate limiter

use std::time::{Duration, Instant};

use navigation::Severity;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FeedbackConfig;

/// Independent throttling budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackChannel {
    Haptic,
    Speech,
}

#[derive(Debug, Clone)]
struct ChannelState {
    last_emission: Option<Instant>,
    min_interval: Duration,
}

impl ChannelState {
    fn try_emit(&mut self, severity: Severity, now: Instant) -> bool {
        // Imminent-collision warnings are never swallowed
        if severity == Severity::Critical {
            self.last_emission = Some(now);
            return true;
        }

        if let Some(last) = self.last_emission {
            if now.saturating_duration_since(last) < self.min_interval {
                return false;
            }
        }

        self.last_emission = Some(now);
        true
    }
}

/// Throttles outbound feedback per channel.
///
/// One instance per session; callers serialize access (the engine owns it on
/// a single consumer loop). Timestamps are passed in rather than read
/// internally because the two producer paths carry no cross-source ordering
/// guarantee.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    haptic: ChannelState,
    speech: ChannelState,
}

impl RateLimiter {
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            haptic: ChannelState {
                last_emission: None,
                min_interval: Duration::from_millis(config.haptic_min_interval_ms),
            },
            speech: ChannelState {
                last_emission: None,
                min_interval: Duration::from_millis(config.speech_min_interval_ms),
            },
        }
    }

    /// Whether an emission on `channel` is allowed at `now`.
    ///
    /// Allowed emissions update the channel's last-emission time; denied ones
    /// leave state untouched.
    pub fn try_emit(&mut self, channel: FeedbackChannel, severity: Severity, now: Instant) -> bool {
        let state = match channel {
            FeedbackChannel::Haptic => &mut self.haptic,
            FeedbackChannel::Speech => &mut self.speech,
        };
        let allowed = state.try_emit(severity, now);
        if !allowed {
            debug!(?channel, ?severity, "emission throttled");
        }
        allowed
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&FeedbackConfig::default())
    }
}
