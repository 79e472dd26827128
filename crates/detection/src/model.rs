//! Detection data model

use geometry::{BoundingBox, Direction};
use serde::{Deserialize, Serialize};

/// Canonical form used for deduplication: lowercase, trimmed
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// One perceived object in one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Normalized lowercase label
    pub label: String,

    /// Classifier confidence, 0..1
    pub confidence: f32,

    /// Estimated distance (meters)
    pub distance_m: f32,

    /// Horizontal direction bucket
    pub direction: Direction,

    /// Normalized box; a centered placeholder when the source had no geometry
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(
        label: &str,
        confidence: f32,
        distance_m: f32,
        direction: Direction,
        bbox: BoundingBox,
    ) -> Self {
        Self {
            label: normalize_label(label),
            confidence: confidence.clamp(0.0, 1.0),
            distance_m,
            direction,
            bbox,
        }
    }
}

/// Ordered, label-deduplicated detections for one frame
///
/// Insertion order follows fixed source priority, so the first entry at a
/// given distance wins downstream tie-breaks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionSet {
    detections: Vec<Detection>,
}

impl DetectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a detection with this (already normalized) label is present
    pub fn contains_label(&self, normalized: &str) -> bool {
        self.detections.iter().any(|d| d.label == normalized)
    }

    /// Append unless the label is already present. Returns whether appended.
    pub fn push_unique(&mut self, detection: Detection) -> bool {
        if self.contains_label(&detection.label) {
            return false;
        }
        self.detections.push(detection);
        true
    }

    /// Minimum-distance entry; ties broken by insertion order
    pub fn closest(&self) -> Option<&Detection> {
        self.detections.iter().fold(None, |best, d| match best {
            Some(b) if b.distance_m <= d.distance_m => Some(b),
            _ => Some(d),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(label: &str, distance_m: f32) -> Detection {
        Detection::new(label, 0.9, distance_m, Direction::Center, BoundingBox::placeholder())
    }

    #[test]
    fn test_push_unique_rejects_duplicate_label() {
        let mut set = DetectionSet::new();
        assert!(set.push_unique(det("person", 2.0)));
        assert!(!set.push_unique(det("person", 1.0)));
        assert_eq!(set.len(), 1);
        // First source wins: the original distance is kept
        assert_eq!(set.closest().unwrap().distance_m, 2.0);
    }

    #[test]
    fn test_closest_picks_minimum_distance() {
        let mut set = DetectionSet::new();
        set.push_unique(det("car", 3.0));
        set.push_unique(det("person", 0.9));
        set.push_unique(det("chair", 5.0));
        assert_eq!(set.closest().unwrap().label, "person");
    }

    #[test]
    fn test_closest_tie_breaks_by_insertion_order() {
        let mut set = DetectionSet::new();
        set.push_unique(det("car", 2.0));
        set.push_unique(det("person", 2.0));
        assert_eq!(set.closest().unwrap().label, "car");
    }

    #[test]
    fn test_empty_set_has_no_closest() {
        assert!(DetectionSet::new().closest().is_none());
    }

    #[test]
    fn test_confidence_clamped() {
        let d = Detection::new("person", 1.7, 2.0, Direction::Center, BoundingBox::placeholder());
        assert_eq!(d.confidence, 1.0);
        let d = Detection::new("person", -0.2, 2.0, Direction::Center, BoundingBox::placeholder());
        assert_eq!(d.confidence, 0.0);
    }
}
