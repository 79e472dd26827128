//! Geometry configuration

use serde::{Deserialize, Serialize};

/// Geometry configuration
///
/// The focal length is a calibration parameter for the pinhole approximation,
/// not a physical lens constant. Calibrate per device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Pinhole focal-length constant (dimensionless, normalized image space)
    pub focal_length: f32,

    /// Minimum reportable distance for box-based estimates (meters)
    pub min_distance_m: f32,

    /// Maximum reportable distance (meters); also the degenerate-box default
    pub max_distance_m: f32,

    /// Minimum reportable distance for confidence-band estimates (meters)
    pub min_confidence_distance_m: f32,

    /// Box center-x below this is bucketed Left
    pub left_boundary: f32,

    /// Box center-x above this is bucketed Right
    pub right_boundary: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            focal_length: 1.4,
            min_distance_m: 0.1,
            max_distance_m: 10.0,
            min_confidence_distance_m: 1.0,
            left_boundary: 0.33,
            right_boundary: 0.66,
        }
    }
}
