//! Distance estimators and direction bucketing
//!
//! Two estimators exist because one upstream source yields real boxes and
//! another yields whole-frame labels with no geometry.

use tracing::trace;

use crate::bbox::{BoundingBox, Direction};
use crate::config::GeometryConfig;
use crate::reference::reference_height_m;

/// Pinhole-camera distance estimate from a normalized bounding box.
///
/// `d = reference_height * focal_length / apparent_height`, where the apparent
/// height is the box height in normalized image space. A degenerate box
/// (height <= 0) reports the far default; results clamp to
/// `[min_distance_m, max_distance_m]`.
pub fn estimate_distance_from_box(label: &str, bbox: &BoundingBox, config: &GeometryConfig) -> f32 {
    let apparent_height = bbox.height();
    if apparent_height <= 0.0 {
        return config.max_distance_m;
    }

    let reference = reference_height_m(label);
    let distance = (reference * config.focal_length) / apparent_height;
    let clamped = distance.clamp(config.min_distance_m, config.max_distance_m);
    trace!(label, apparent_height, distance = clamped, "box distance estimate");
    clamped
}

/// Confidence-band distance estimate for sources without geometry.
///
/// Higher classifier confidence correlates with larger, closer objects, so
/// confidence buckets into baseline distances. The baseline then scales by
/// reference size: tall objects must be farther to be fully visible at that
/// confidence, small objects closer. Clamped to
/// `[min_confidence_distance_m, max_distance_m]`.
pub fn estimate_distance_from_confidence(
    confidence: f32,
    label: &str,
    config: &GeometryConfig,
) -> f32 {
    let baseline: f32 = if confidence > 0.85 {
        2.5
    } else if confidence > 0.70 {
        4.0
    } else if confidence > 0.55 {
        6.0
    } else {
        8.0
    };

    let reference = reference_height_m(label);
    let scale = if reference > 1.5 {
        1.3
    } else if reference < 0.3 {
        0.7
    } else {
        1.0
    };

    (baseline * scale).clamp(config.min_confidence_distance_m, config.max_distance_m)
}

/// Bucket a box into left/center/right by its horizontal center
pub fn direction_of(bbox: &BoundingBox, config: &GeometryConfig) -> Direction {
    let center_x = bbox.center_x();
    if center_x < config.left_boundary {
        Direction::Left
    } else if center_x > config.right_boundary {
        Direction::Right
    } else {
        Direction::Center
    }
}
