//! Luminance-variance obstacle fallback
//!
//! A large uniform surface (a blank wall, a closed door) defeats object
//! classifiers but is exactly what a blind user is about to walk into. When
//! no real source produced a detection, this heuristic scans the raw luma
//! plane: a horizontal third of the frame with near-zero luminance variance
//! is treated as a uniform nearby surface and reported as a synthetic
//! "obstacle" at a short fixed distance.

use geometry::{BoundingBox, Direction};
use tracing::debug;

use crate::config::FallbackConfig;
use crate::model::Detection;

/// Borrowed 8-bit luminance plane
#[derive(Debug, Clone, Copy)]
pub struct LumaPlane<'a> {
    pub data: &'a [u8],
    pub width: usize,
    pub height: usize,
}

impl<'a> LumaPlane<'a> {
    /// Mean and variance of the pixels in columns `[x_start, x_end)`
    fn column_band_stats(&self, x_start: usize, x_end: usize) -> Option<(f32, f32)> {
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        let mut count = 0usize;

        for y in 0..self.height {
            let row = y * self.width;
            for x in x_start..x_end.min(self.width) {
                let idx = row + x;
                if idx >= self.data.len() {
                    break;
                }
                let v = self.data[idx] as f64;
                sum += v;
                sum_sq += v * v;
                count += 1;
            }
        }

        if count == 0 {
            return None;
        }
        let mean = sum / count as f64;
        let variance = (sum_sq / count as f64) - mean * mean;
        Some((mean as f32, variance.max(0.0) as f32))
    }
}

/// Scan the luma plane for a uniform nearby surface.
///
/// Returns a synthetic "obstacle" detection for the lowest-variance horizontal
/// third when that variance is below the uniformity threshold and the derived
/// confidence clears the floor. Returns `None` for degenerate planes.
pub fn detect_uniform_surface(plane: &LumaPlane, config: &FallbackConfig) -> Option<Detection> {
    if plane.width == 0 || plane.height == 0 || plane.data.is_empty() {
        return None;
    }

    let third = plane.width / 3;
    if third == 0 {
        return None;
    }

    let bands = [
        (Direction::Left, 0, third),
        (Direction::Center, third, 2 * third),
        (Direction::Right, 2 * third, plane.width),
    ];

    let mut best: Option<(Direction, f32, usize)> = None;
    for (i, (direction, x_start, x_end)) in bands.into_iter().enumerate() {
        if let Some((_, variance)) = plane.column_band_stats(x_start, x_end) {
            match best {
                Some((_, best_var, _)) if best_var <= variance => {}
                _ => best = Some((direction, variance, i)),
            }
        }
    }

    let (direction, variance, band_index) = best?;
    if variance >= config.uniformity_variance {
        return None;
    }

    let confidence = (1.0 - variance / config.uniformity_variance).clamp(0.0, 1.0);
    if confidence < config.min_confidence {
        debug!(variance, confidence, "uniform surface below confidence floor");
        return None;
    }

    debug!(?direction, variance, confidence, "fallback obstacle from uniform surface");
    let left = band_index as f32 / 3.0;
    let bbox = BoundingBox::new(left, 0.0, left + 1.0 / 3.0, 1.0);
    Some(Detection::new(
        "obstacle",
        confidence,
        config.obstacle_distance_m,
        direction,
        bbox,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane_of(data: &[u8], width: usize, height: usize) -> LumaPlane<'_> {
        LumaPlane { data, width, height }
    }

    #[test]
    fn test_flat_plane_yields_obstacle() {
        let data = vec![128u8; 30 * 10];
        let det = detect_uniform_surface(&plane_of(&data, 30, 10), &FallbackConfig::default())
            .expect("flat plane should produce an obstacle");
        assert_eq!(det.label, "obstacle");
        assert_eq!(det.distance_m, 1.2);
        assert!(det.confidence >= 0.5);
    }

    #[test]
    fn test_noisy_plane_yields_nothing() {
        // Alternating extremes: variance far above the uniformity threshold
        let data: Vec<u8> = (0..30 * 10).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
        assert!(detect_uniform_surface(&plane_of(&data, 30, 10), &FallbackConfig::default())
            .is_none());
    }

    #[test]
    fn test_uniform_left_third_direction() {
        // Left third flat, the rest noisy
        let width = 30;
        let height = 10;
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            for x in 0..width {
                data[y * width + x] = if x < width / 3 {
                    100
                } else if (x + y) % 2 == 0 {
                    0
                } else {
                    255
                };
            }
        }
        let det = detect_uniform_surface(&plane_of(&data, width, height), &FallbackConfig::default())
            .expect("left band is uniform");
        assert_eq!(det.direction, Direction::Left);
    }

    #[test]
    fn test_empty_plane_yields_nothing() {
        assert!(detect_uniform_surface(&plane_of(&[], 0, 0), &FallbackConfig::default()).is_none());
    }
}
