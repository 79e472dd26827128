//! Geometry & Distance Estimation
//!
//! Converts 2-D image evidence into navigation-usable range and bearing:
//! - Pinhole-camera distance estimate from a detection's bounding box
//! - Confidence-band distance estimate when no box geometry exists
//! - Left/center/right direction bucketing
//!
//! All functions are total: out-of-range inputs are clamped, never rejected.

pub mod bbox;
pub mod config;
pub mod distance;
pub mod reference;

pub use bbox::{BoundingBox, Direction};
pub use config::GeometryConfig;
pub use distance::{direction_of, estimate_distance_from_box, estimate_distance_from_confidence};
pub use reference::reference_height_m;
