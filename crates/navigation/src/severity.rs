//! Severity banding

use serde::{Deserialize, Serialize};

/// Navigation alert severity
///
/// Ordered: `Clear < Low < Moderate < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Clear,
    Low,
    Moderate,
    High,
    Critical,
}

/// Map a closest-detection distance to severity.
///
/// Bands are intentionally stricter than naive proximity so only genuinely
/// close obstacles interrupt the user:
///
/// | distance d (m)  | severity |
/// |-----------------|----------|
/// | d < 1.0         | Critical |
/// | 1.0 <= d < 1.5  | High     |
/// | 1.5 <= d < 2.5  | Moderate |
/// | 2.5 <= d < 4.0  | Low      |
/// | d >= 4.0        | Clear    |
pub fn classify_severity(distance_m: f32) -> Severity {
    if distance_m < 1.0 {
        Severity::Critical
    } else if distance_m < 1.5 {
        Severity::High
    } else if distance_m < 2.5 {
        Severity::Moderate
    } else if distance_m < 4.0 {
        Severity::Low
    } else {
        Severity::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_severity(0.99), Severity::Critical);
        // Boundary values belong to the milder band
        assert_eq!(classify_severity(1.0), Severity::High);
        assert_eq!(classify_severity(1.49), Severity::High);
        assert_eq!(classify_severity(1.5), Severity::Moderate);
        assert_eq!(classify_severity(2.5), Severity::Low);
        assert_eq!(classify_severity(3.99), Severity::Low);
        assert_eq!(classify_severity(4.0), Severity::Clear);
        assert_eq!(classify_severity(10.0), Severity::Clear);
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Clear < Severity::Low);
        assert!(Severity::Low < Severity::Moderate);
        assert!(Severity::Moderate < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    proptest! {
        #[test]
        fn prop_severity_non_increasing_with_distance(
            a in 0.0f32..20.0,
            b in 0.0f32..20.0,
        ) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_severity(near) >= classify_severity(far));
        }

        #[test]
        fn prop_every_distance_has_a_band(d in 0.0f32..1000.0) {
            // Total over [0, inf): never panics, always yields a variant
            let _ = classify_severity(d);
        }
    }
}
