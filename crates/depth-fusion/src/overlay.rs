//! Immediate-obstacle overlay

use detection::{Detection, DetectionSet};
use geometry::{BoundingBox, Direction, GeometryConfig};
use navigation::{direction_phrase, NavigationAlert, Severity};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::frame::{DepthFrame, DepthZone};

/// Emits a critical alert when a depth frame shows something in the
/// immediate zone.
///
/// Depth sensors carry no semantic label, so the synthetic detection is
/// always "obstacle"; direction comes from the point's normalized x using the
/// same left/center/right boundaries as the vision path.
pub struct DepthOverlay {
    geometry: GeometryConfig,
}

impl DepthOverlay {
    pub fn new(geometry: GeometryConfig) -> Self {
        Self { geometry }
    }

    /// Zero or one critical alert per frame
    pub fn overlay(&self, frame: &DepthFrame) -> Option<NavigationAlert> {
        let closest = frame
            .points_in_zone(DepthZone::Immediate)
            .fold(None::<&crate::frame::DepthPoint>, |best, p| match best {
                Some(b) if b.depth_m <= p.depth_m => Some(b),
                _ => Some(p),
            })?;

        let direction = if closest.x < self.geometry.left_boundary {
            Direction::Left
        } else if closest.x > self.geometry.right_boundary {
            Direction::Right
        } else {
            Direction::Center
        };

        warn!(
            depth_m = closest.depth_m,
            ?direction,
            "immediate obstacle from depth sensor"
        );

        let detection = Detection::new(
            "obstacle",
            closest.confidence,
            closest.depth_m,
            direction,
            BoundingBox::new(closest.x - 0.05, closest.y - 0.05, closest.x + 0.05, closest.y + 0.05),
        );
        let spoken_text = format!(
            "obstacle detected {:.1} meters {}",
            closest.depth_m,
            direction_phrase(direction)
        );

        let mut detections = DetectionSet::new();
        detections.push_unique(detection.clone());

        debug!(%spoken_text, "synthesized depth alert");
        Some(NavigationAlert {
            id: Uuid::new_v4(),
            detections,
            closest: Some(detection),
            severity: Severity::Critical,
            spoken_text,
            timestamp: frame.timestamp,
        })
    }
}

impl Default for DepthOverlay {
    fn default() -> Self {
        Self::new(GeometryConfig::default())
    }
}
