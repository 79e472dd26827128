//! Navigation alert record

use chrono::{DateTime, Utc};
use detection::{Detection, DetectionSet};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::severity::Severity;

/// The fused per-frame output of the guidance engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationAlert {
    /// Record id
    pub id: Uuid,

    /// The frame's merged detections
    pub detections: DetectionSet,

    /// Minimum-distance detection, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest: Option<Detection>,

    /// Severity derived from the closest detection's distance
    pub severity: Severity,

    /// Guidance text; "Path clear" when severity is Clear
    pub spoken_text: String,

    /// Frame timestamp
    pub timestamp: DateTime<Utc>,
}

impl NavigationAlert {
    /// Whether this alert carries anything the user must hear or feel
    pub fn is_actionable(&self) -> bool {
        self.severity > Severity::Clear
    }
}
