//! Detection set to alert classification

use chrono::{DateTime, Utc};
use detection::DetectionSet;
use tracing::debug;
use uuid::Uuid;

use crate::alert::NavigationAlert;
use crate::severity::{classify_severity, Severity};
use crate::speech::spoken_text;

/// Classifies one frame's merged detections into a navigation alert.
///
/// Stateless; the closest detection (input-order tie-break, which follows
/// source priority) drives both severity and wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertClassifier;

impl AlertClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, detections: DetectionSet, timestamp: DateTime<Utc>) -> NavigationAlert {
        let closest = detections.closest().cloned();
        let severity = closest
            .as_ref()
            .map(|d| classify_severity(d.distance_m))
            .unwrap_or(Severity::Clear);
        let spoken_text = spoken_text(closest.as_ref(), severity);

        debug!(
            ?severity,
            closest = closest.as_ref().map(|d| d.label.as_str()),
            detections = detections.len(),
            "classified frame"
        );

        NavigationAlert {
            id: Uuid::new_v4(),
            detections,
            closest,
            severity,
            spoken_text,
            timestamp,
        }
    }
}
