//! Reference object sizes for monocular distance estimation

/// Assumed real-world height (meters) of unknown object classes
pub const DEFAULT_REFERENCE_HEIGHT_M: f32 = 1.0;

/// Assumed real-world height (meters) of a labeled object class.
///
/// A single reference-size heuristic stands in for true depth when only 2-D
/// image evidence is available. Labels are matched lowercase.
pub fn reference_height_m(label: &str) -> f32 {
    match label.trim().to_lowercase().as_str() {
        "person" | "pedestrian" => 1.7,
        "car" | "vehicle" => 1.5,
        "truck" | "bus" => 3.0,
        "bicycle" | "motorcycle" => 1.1,
        "door" => 2.0,
        "chair" => 0.9,
        "table" | "desk" => 0.75,
        "couch" | "sofa" => 0.85,
        "bench" => 0.5,
        "stairs" | "staircase" => 2.5,
        "tree" => 4.0,
        "pole" | "traffic light" => 3.5,
        "fire hydrant" => 0.75,
        "stop sign" => 2.0,
        "dog" => 0.5,
        "cat" => 0.25,
        "bottle" => 0.25,
        "cup" => 0.12,
        "backpack" | "suitcase" => 0.55,
        "trash can" | "bin" => 0.9,
        _ => DEFAULT_REFERENCE_HEIGHT_M,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(reference_height_m("person"), 1.7);
        assert_eq!(reference_height_m("car"), 1.5);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(reference_height_m("Person"), 1.7);
        assert_eq!(reference_height_m("  CAR "), 1.5);
    }

    #[test]
    fn test_unknown_label_default() {
        assert_eq!(reference_height_m("gizmo"), DEFAULT_REFERENCE_HEIGHT_M);
    }
}
