//! Normalized bounding boxes and direction buckets

use serde::{Deserialize, Serialize};

/// Horizontal direction bucket relative to the camera axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Center,
    Right,
    /// Source carried no usable geometry
    Unknown,
}

/// Axis-aligned bounding box with edges normalized to 0..1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    /// Build from already-normalized edges, clamped to the unit square
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left: left.clamp(0.0, 1.0),
            top: top.clamp(0.0, 1.0),
            right: right.clamp(0.0, 1.0),
            bottom: bottom.clamp(0.0, 1.0),
        }
    }

    /// Build from pixel coordinates plus image dimensions
    pub fn from_pixels(
        left_px: f32,
        top_px: f32,
        right_px: f32,
        bottom_px: f32,
        image_width: f32,
        image_height: f32,
    ) -> Self {
        // Degenerate dimensions yield the placeholder rather than NaN edges.
        if image_width <= 0.0 || image_height <= 0.0 {
            return Self::placeholder();
        }
        Self::new(
            left_px / image_width,
            top_px / image_height,
            right_px / image_width,
            bottom_px / image_height,
        )
    }

    /// Centered stand-in box for sources that label the whole frame
    pub fn placeholder() -> Self {
        Self {
            left: 0.35,
            top: 0.3,
            right: 0.65,
            bottom: 0.7,
        }
    }

    /// Horizontal center, 0..1
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// Apparent height in normalized image space
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_normalizes() {
        let bbox = BoundingBox::from_pixels(160.0, 120.0, 480.0, 360.0, 640.0, 480.0);
        assert!((bbox.left - 0.25).abs() < 1e-6);
        assert!((bbox.top - 0.25).abs() < 1e-6);
        assert!((bbox.right - 0.75).abs() < 1e-6);
        assert!((bbox.bottom - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_from_pixels_zero_dims_is_placeholder() {
        let bbox = BoundingBox::from_pixels(10.0, 10.0, 20.0, 20.0, 0.0, 0.0);
        assert_eq!(bbox, BoundingBox::placeholder());
    }

    #[test]
    fn test_placeholder_is_centered() {
        let bbox = BoundingBox::placeholder();
        assert!((bbox.center_x() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_edges_clamped_to_unit_square() {
        let bbox = BoundingBox::new(-0.5, -1.0, 1.5, 2.0);
        assert_eq!(bbox.left, 0.0);
        assert_eq!(bbox.top, 0.0);
        assert_eq!(bbox.right, 1.0);
        assert_eq!(bbox.bottom, 1.0);
    }
}
