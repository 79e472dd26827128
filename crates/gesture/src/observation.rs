//! Gesture observations and confirmed records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One frame's raw classifier output
///
/// `gesture_id` is `None` when the classifier abstained (no hand, low score).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureObservation {
    pub gesture_id: Option<String>,
    pub meaning: String,
    pub confidence: f32,
}

impl GestureObservation {
    pub fn observed(gesture_id: &str, meaning: &str, confidence: f32) -> Self {
        Self {
            gesture_id: Some(gesture_id.to_string()),
            meaning: meaning.to_string(),
            confidence,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// A sign confirmed by the stability filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedGesture {
    pub gesture_id: String,
    pub meaning: String,
    pub confidence: f32,
    pub timestamp: DateTime<Utc>,
}

/// Origin of a transcription entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TranscriptionSource {
    SignLanguage,
    Voice,
}

/// Conversation-history record shared with the speech-to-text path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    pub id: Uuid,
    pub text: String,
    pub confidence: f32,
    pub is_final: bool,
    pub timestamp: DateTime<Utc>,
    pub source: TranscriptionSource,
}

impl From<ConfirmedGesture> for Transcription {
    fn from(gesture: ConfirmedGesture) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: gesture.meaning,
            confidence: gesture.confidence,
            is_final: true,
            timestamp: gesture.timestamp,
            source: TranscriptionSource::SignLanguage,
        }
    }
}
