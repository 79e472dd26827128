//! Haptic pattern selection
//!
//! Pattern identifiers only; the external vibration driver owns the actual
//! waveforms.

use std::time::Duration;

use geometry::Direction;
use navigation::Severity;
use serde::{Deserialize, Serialize};

/// Primary vibration pattern, selected by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPattern {
    GentlePulse,
    DoublePulse,
    TriplePulse,
    UrgentBuzz,
}

/// Secondary short pulse indicating bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionalPulse {
    LeftPulse,
    CenterPulse,
    RightPulse,
}

/// A primary pattern plus an optional delayed directional follower.
///
/// The follower is not separately rate-limited: it only ever accompanies a
/// primary pulse that already cleared the haptic budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticPlan {
    pub primary: HapticPattern,
    pub directional: Option<(DirectionalPulse, Duration)>,
}

/// Fixed severity-to-pattern lookup; `Clear` produces no haptic at all
pub fn haptic_pattern(severity: Severity) -> Option<HapticPattern> {
    match severity {
        Severity::Clear => None,
        Severity::Low => Some(HapticPattern::GentlePulse),
        Severity::Moderate => Some(HapticPattern::DoublePulse),
        Severity::High => Some(HapticPattern::TriplePulse),
        Severity::Critical => Some(HapticPattern::UrgentBuzz),
    }
}

/// Directional follower pulse; none when the source carried no geometry
pub fn directional_pulse(direction: Direction) -> Option<DirectionalPulse> {
    match direction {
        Direction::Left => Some(DirectionalPulse::LeftPulse),
        Direction::Center => Some(DirectionalPulse::CenterPulse),
        Direction::Right => Some(DirectionalPulse::RightPulse),
        Direction::Unknown => None,
    }
}

impl HapticPlan {
    /// Plan the haptic output for an allowed primary emission
    pub fn for_alert(severity: Severity, direction: Direction, follower_delay: Duration) -> Option<Self> {
        let primary = haptic_pattern(severity)?;
        let directional = directional_pulse(direction).map(|pulse| (pulse, follower_delay));
        Some(Self { primary, directional })
    }
}
