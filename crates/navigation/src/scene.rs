//! On-demand scene description

use detection::DetectionSet;

use crate::speech::{direction_phrase_relative, object_name};

/// Spoken summary of everything in the frame, nearest first.
///
/// Used by the host app's describe-surroundings action rather than the alert
/// path, so it lists every detection instead of only the closest.
pub fn describe_scene(detections: &DetectionSet) -> String {
    if detections.is_empty() {
        return "Nothing detected".to_string();
    }

    let mut entries: Vec<_> = detections.iter().collect();
    entries.sort_by(|a, b| {
        a.distance_m
            .partial_cmp(&b.distance_m)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let phrases: Vec<String> = entries
        .iter()
        .map(|d| {
            format!(
                "{} {:.1} meters {}",
                object_name(&d.label),
                d.distance_m,
                direction_phrase_relative(d.direction)
            )
        })
        .collect();

    phrases.join(", ")
}
