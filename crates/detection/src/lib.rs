//! Detection Merging
//!
//! Combines results from up to three independent object-perception sources
//! into one deduplicated detection set per frame:
//! - Whole-frame image labeler (labels, no geometry)
//! - Region-proposal box detector (labels + pixel boxes)
//! - Luminance-variance obstacle fallback (no ML, runs only when the
//!   real sources produce nothing)
//!
//! Cheaper, better-labeled sources take precedence; the fallback guarantees
//! the navigation classifier never silently receives "no information" when an
//! unrecognized obstacle fills the camera view.

pub mod config;
pub mod fallback;
pub mod merger;
pub mod model;
pub mod sources;

pub use config::{FallbackConfig, MergerConfig};
pub use fallback::{detect_uniform_surface, LumaPlane};
pub use merger::DetectionMerger;
pub use model::{normalize_label, Detection, DetectionSet};
pub use sources::{BoxResult, LabelResult, SourceFrame};
