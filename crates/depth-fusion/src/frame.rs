//! Depth frames and zone bucketing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Distance band for a depth sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthZone {
    /// < 0.5 m
    Immediate,
    /// 0.5 - 1.0 m
    Near,
    /// 1.0 - 2.0 m
    Medium,
    /// >= 2.0 m
    Far,
}

impl DepthZone {
    pub fn of(depth_m: f32) -> Self {
        if depth_m < 0.5 {
            DepthZone::Immediate
        } else if depth_m < 1.0 {
            DepthZone::Near
        } else if depth_m < 2.0 {
            DepthZone::Medium
        } else {
            DepthZone::Far
        }
    }
}

/// One LiDAR-style sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DepthPoint {
    /// Normalized horizontal position, 0..1
    pub x: f32,
    /// Normalized vertical position, 0..1
    pub y: f32,
    /// Measured depth (meters)
    pub depth_m: f32,
    /// Sensor confidence, 0..1
    pub confidence: f32,
}

impl DepthPoint {
    pub fn zone(&self) -> DepthZone {
        DepthZone::of(self.depth_m)
    }
}

/// One sensor frame of depth samples (~10 Hz), consumed immediately
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthFrame {
    pub points: Vec<DepthPoint>,
    pub min_depth_m: f32,
    pub max_depth_m: f32,
    pub timestamp: DateTime<Utc>,
}

impl DepthFrame {
    /// Build a frame, deriving min/max from the samples
    pub fn new(points: Vec<DepthPoint>, timestamp: DateTime<Utc>) -> Self {
        let min_depth_m = points
            .iter()
            .map(|p| p.depth_m)
            .fold(f32::INFINITY, f32::min);
        let max_depth_m = points
            .iter()
            .map(|p| p.depth_m)
            .fold(f32::NEG_INFINITY, f32::max);
        Self {
            points,
            min_depth_m: if min_depth_m.is_finite() { min_depth_m } else { 0.0 },
            max_depth_m: if max_depth_m.is_finite() { max_depth_m } else { 0.0 },
            timestamp,
        }
    }

    /// The shallowest sample in the frame
    pub fn min_point(&self) -> Option<&DepthPoint> {
        self.points.iter().fold(None, |best, p| match best {
            Some(b) if b.depth_m <= p.depth_m => Some(b),
            _ => Some(p),
        })
    }

    /// Samples in a given zone
    pub fn points_in_zone(&self, zone: DepthZone) -> impl Iterator<Item = &DepthPoint> {
        self.points.iter().filter(move |p| p.zone() == zone)
    }

    /// Sample counts per zone: (immediate, near, medium, far)
    pub fn zone_counts(&self) -> (usize, usize, usize, usize) {
        let mut counts = (0, 0, 0, 0);
        for p in &self.points {
            match p.zone() {
                DepthZone::Immediate => counts.0 += 1,
                DepthZone::Near => counts.1 += 1,
                DepthZone::Medium => counts.2 += 1,
                DepthZone::Far => counts.3 += 1,
            }
        }
        counts
    }
}
