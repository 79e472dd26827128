//! Feedback Rate Limiting
//!
//! Haptic and speech are different annoyance tradeoffs: haptic can repeat
//! quickly without being disruptive, speech overlapping itself is
//! incomprehensible. Each channel gets an independent cooldown budget;
//! critical severity always passes because it represents imminent-collision
//! warnings.

pub mod config;
pub mod haptic;
pub mod limiter;
pub mod tts;

pub use config::FeedbackConfig;
pub use haptic::{directional_pulse, haptic_pattern, DirectionalPulse, HapticPattern, HapticPlan};
pub use limiter::{FeedbackChannel, RateLimiter};
pub use tts::{tts_priority, SpeechRequest, TtsPriority};
