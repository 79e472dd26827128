//! Raw perception-source results
//!
//! Each variant carries one source's results for one frame. The merger
//! iterates sources in the order supplied by the caller, which encodes the
//! fixed source priority (labeler > box detector).

use geometry::{
    direction_of, estimate_distance_from_box, estimate_distance_from_confidence, BoundingBox,
    Direction, GeometryConfig,
};
use serde::{Deserialize, Serialize};

use crate::model::Detection;

/// Whole-frame labeler output: a label with no geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelResult {
    pub label: String,
    pub confidence: f32,
}

/// Region-proposal detector output: a label with a pixel-space box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxResult {
    pub label: String,
    pub confidence: f32,
    pub left_px: f32,
    pub top_px: f32,
    pub right_px: f32,
    pub bottom_px: f32,
    pub image_width: f32,
    pub image_height: f32,
}

/// One source's results for one frame, tagged for priority-ordered merging
#[derive(Debug, Clone)]
pub enum SourceFrame {
    /// Image labeler: higher priority, no geometry
    Labels(Vec<LabelResult>),
    /// Box detector: real geometry, lower priority
    Boxes(Vec<BoxResult>),
}

impl SourceFrame {
    /// Convert this source's raw results into detections.
    ///
    /// Labeler results get the confidence-band distance estimate and an
    /// Unknown direction behind a centered placeholder box; box results get
    /// the pinhole estimate and a real direction bucket.
    pub fn to_detections(&self, geometry: &GeometryConfig) -> Vec<Detection> {
        match self {
            SourceFrame::Labels(results) => results
                .iter()
                .map(|r| {
                    let distance =
                        estimate_distance_from_confidence(r.confidence, &r.label, geometry);
                    Detection::new(
                        &r.label,
                        r.confidence,
                        distance,
                        Direction::Unknown,
                        BoundingBox::placeholder(),
                    )
                })
                .collect(),
            SourceFrame::Boxes(results) => results
                .iter()
                .map(|r| {
                    let bbox = BoundingBox::from_pixels(
                        r.left_px,
                        r.top_px,
                        r.right_px,
                        r.bottom_px,
                        r.image_width,
                        r.image_height,
                    );
                    let distance = estimate_distance_from_box(&r.label, &bbox, geometry);
                    let direction = direction_of(&bbox, geometry);
                    Detection::new(&r.label, r.confidence, distance, direction, bbox)
                })
                .collect(),
        }
    }

    /// Minimum confidence a detection from this source must carry
    pub fn confidence_floor(&self, config: &crate::config::MergerConfig) -> f32 {
        match self {
            SourceFrame::Labels(_) => config.label_confidence_floor,
            SourceFrame::Boxes(_) => config.box_confidence_floor,
        }
    }
}
