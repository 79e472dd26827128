//! Priority-ordered detection merging

use geometry::GeometryConfig;
use tracing::debug;

use crate::config::{FallbackConfig, MergerConfig};
use crate::fallback::{detect_uniform_surface, LumaPlane};
use crate::model::DetectionSet;
use crate::sources::SourceFrame;

/// Merges per-frame results from multiple perception sources into one
/// deduplicated detection set.
///
/// Sources are processed in the caller-supplied order, which encodes the
/// fixed priority (labeler first, box detector second). The first source to
/// claim a label wins; later sources skip it. Per-source confidence floors
/// and the generic scene-label exclusion apply before dedup.
pub struct DetectionMerger {
    merger: MergerConfig,
    fallback: FallbackConfig,
    geometry: GeometryConfig,
}

impl DetectionMerger {
    pub fn new(merger: MergerConfig, fallback: FallbackConfig, geometry: GeometryConfig) -> Self {
        Self {
            merger,
            fallback,
            geometry,
        }
    }

    /// Merge one frame's source results.
    ///
    /// When every real source comes up empty, the luminance fallback runs over
    /// `luma` (if supplied) so the classifier still hears about an unlabeled
    /// surface directly ahead.
    pub fn merge(&self, sources: &[SourceFrame], luma: Option<&LumaPlane>) -> DetectionSet {
        let mut set = DetectionSet::new();

        for source in sources {
            let floor = source.confidence_floor(&self.merger);
            for detection in source.to_detections(&self.geometry) {
                if detection.confidence < floor {
                    debug!(
                        label = %detection.label,
                        confidence = detection.confidence,
                        floor,
                        "detection below source confidence floor"
                    );
                    continue;
                }
                if self.merger.is_generic(&detection.label) {
                    debug!(label = %detection.label, "generic scene label excluded");
                    continue;
                }
                if !set.push_unique(detection) {
                    // Lower-priority duplicate of an already-claimed label
                    continue;
                }
            }
        }

        if set.is_empty() {
            if let Some(plane) = luma {
                if let Some(obstacle) = detect_uniform_surface(plane, &self.fallback) {
                    set.push_unique(obstacle);
                }
            }
        }

        set
    }
}

impl Default for DetectionMerger {
    fn default() -> Self {
        Self::new(
            MergerConfig::default(),
            FallbackConfig::default(),
            GeometryConfig::default(),
        )
    }
}
