//! Spoken guidance text generation
//!
//! Wording is the primary severity channel for a blind user: imperative
//! "Stop!" for critical, "Caution:" with a distance for high, descriptive
//! "detected" for moderate/low.

use detection::Detection;
use geometry::Direction;

use crate::severity::Severity;

/// Labels too vague to speak verbatim
const VAGUE_LABELS: [&str; 3] = ["object", "obstacle", "unknown"];

/// Spoken name for a detection's label, substituting "obstacle" for vague or
/// empty labels
pub fn object_name(label: &str) -> &str {
    if label.is_empty() || VAGUE_LABELS.contains(&label) {
        "obstacle"
    } else {
        label
    }
}

/// Direction phrase for urgent wording: "Stop! person on your left"
pub fn direction_phrase(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "on your left",
        Direction::Right => "on your right",
        Direction::Center => "ahead",
        Direction::Unknown => "nearby",
    }
}

/// Direction phrase for descriptive wording: "person detected to your left"
pub fn direction_phrase_relative(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "to your left",
        Direction::Right => "to your right",
        Direction::Center => "ahead",
        Direction::Unknown => "nearby",
    }
}

/// Guidance text for a closest detection at a given severity.
///
/// `None` detection or `Clear` severity both speak "Path clear".
pub fn spoken_text(closest: Option<&Detection>, severity: Severity) -> String {
    let Some(detection) = closest else {
        return "Path clear".to_string();
    };

    let name = object_name(&detection.label);
    match severity {
        Severity::Clear => "Path clear".to_string(),
        Severity::Critical => {
            format!("Stop! {} {}", name, direction_phrase(detection.direction))
        }
        Severity::High => format!(
            "Caution: {} {:.1} meters {}",
            name,
            detection.distance_m,
            direction_phrase(detection.direction)
        ),
        Severity::Moderate | Severity::Low => format!(
            "{} detected {}",
            name,
            direction_phrase_relative(detection.direction)
        ),
    }
}
