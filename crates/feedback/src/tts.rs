//! Text-to-speech handoff types

use navigation::Severity;
use serde::{Deserialize, Serialize};

/// Priority understood by the external TTS driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsPriority {
    Low,
    Normal,
    High,
    Critical,
}

/// Fixed severity-to-priority lookup.
///
/// Everything short of critical speaks at normal priority so routine guidance
/// never preempts in-flight speech.
pub fn tts_priority(severity: Severity) -> TtsPriority {
    match severity {
        Severity::Critical => TtsPriority::Critical,
        Severity::High | Severity::Moderate | Severity::Low => TtsPriority::Normal,
        Severity::Clear => TtsPriority::Low,
    }
}

/// One utterance handed to the TTS driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub priority: TtsPriority,
}

impl SpeechRequest {
    pub fn for_alert(text: &str, severity: Severity) -> Self {
        Self {
            text: text.to_string(),
            priority: tts_priority(severity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_mapping() {
        assert_eq!(tts_priority(Severity::Critical), TtsPriority::Critical);
        assert_eq!(tts_priority(Severity::High), TtsPriority::Normal);
        assert_eq!(tts_priority(Severity::Moderate), TtsPriority::Normal);
        assert_eq!(tts_priority(Severity::Low), TtsPriority::Normal);
        assert_eq!(tts_priority(Severity::Clear), TtsPriority::Low);
    }

    #[test]
    fn test_request_carries_alert_text() {
        let request = SpeechRequest::for_alert("Stop! person ahead", Severity::Critical);
        assert_eq!(request.priority, TtsPriority::Critical);
        assert_eq!(request.text, "Stop! person ahead");
    }
}
