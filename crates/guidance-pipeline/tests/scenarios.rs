//! End-to-end pipeline scenarios

use chrono::Utc;
use depth_fusion::{DepthFrame, DepthPoint};
use detection::{BoxResult, Detection, DetectionSet, SourceFrame};
use geometry::{BoundingBox, Direction};
use guidance_pipeline::{FeedbackCommand, GuidanceEngine};
use gesture::GestureObservation;
use navigation::{AlertClassifier, Severity};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Scenario: a person whose box fills half the frame height on the left.
/// Pinhole estimate: 1.7 * 1.4 / 0.5 = 4.76 m, direction Left.
#[test]
fn person_box_on_left_estimates_distance_and_bearing() {
    init_tracing();
    let mut engine = GuidanceEngine::default();
    let sources = [SourceFrame::Boxes(vec![BoxResult {
        label: "person".into(),
        confidence: 0.9,
        left_px: 0.1,
        top_px: 0.25,
        right_px: 0.3,
        bottom_px: 0.75,
        image_width: 1.0,
        image_height: 1.0,
    }])];

    let outcome = engine.process_vision(&sources, None);
    let closest = outcome.alert.closest.expect("one detection");
    assert!((closest.distance_m - 4.76).abs() < 0.01);
    assert_eq!(closest.direction, Direction::Left);
    // 4.76 m falls beyond the low band's 4.0 m edge
    assert_eq!(outcome.alert.severity, Severity::Clear);
}

/// The low-band wording for the same bearing, at an in-band distance
#[test]
fn nearby_person_on_left_speaks_detected_wording() {
    let classifier = AlertClassifier::new();
    let mut set = DetectionSet::new();
    set.push_unique(Detection::new(
        "person",
        0.9,
        3.0,
        Direction::Left,
        BoundingBox::placeholder(),
    ));
    let alert = classifier.classify(set, Utc::now());
    assert_eq!(alert.severity, Severity::Low);
    assert_eq!(alert.spoken_text, "person detected to your left");
}

/// Scenario: nothing detected at all
#[test]
fn empty_frame_is_clear_and_silent() {
    let mut engine = GuidanceEngine::default();
    let outcome = engine.process_vision(&[], None);
    assert_eq!(outcome.alert.severity, Severity::Clear);
    assert_eq!(outcome.alert.spoken_text, "Path clear");
    assert!(outcome.commands.is_empty());
}

/// Scenario: depth sensor reports a point 0.3 m away on the right
#[test]
fn immediate_depth_point_preempts_vision() {
    init_tracing();
    let mut engine = GuidanceEngine::default();
    let frame = DepthFrame::new(
        vec![DepthPoint {
            x: 0.8,
            y: 0.5,
            depth_m: 0.3,
            confidence: 0.95,
        }],
        Utc::now(),
    );

    let outcome = engine.process_depth(&frame).expect("immediate zone hit");
    assert_eq!(outcome.alert.severity, Severity::Critical);
    assert_eq!(
        outcome.alert.spoken_text,
        "obstacle detected 0.3 meters on your right"
    );
    // Critical bypasses both channel budgets
    assert!(outcome
        .commands
        .iter()
        .any(|c| matches!(c, FeedbackCommand::Haptic(_))));
    assert!(outcome
        .commands
        .iter()
        .any(|c| matches!(c, FeedbackCommand::Speak(_))));
}

/// Scenario: four identical waves with threshold 3 confirm exactly once
#[test]
fn held_gesture_confirms_once() {
    let mut engine = GuidanceEngine::default();
    let wave = GestureObservation::observed("wave", "Hello", 0.9);

    let emissions: Vec<_> = (0..4)
        .filter_map(|_| engine.process_gesture(&wave))
        .collect();
    assert_eq!(emissions.len(), 1);
    assert_eq!(emissions[0].text, "Hello");
    assert!(emissions[0].is_final);
    assert_eq!(engine.history().len(), 1);
}

/// Scenario: person at 0.9 m and car at 3.0 m - the person wins
#[test]
fn closest_of_two_detections_drives_the_alert() {
    let classifier = AlertClassifier::new();
    let mut set = DetectionSet::new();
    set.push_unique(Detection::new(
        "person",
        0.9,
        0.9,
        Direction::Center,
        BoundingBox::placeholder(),
    ));
    set.push_unique(Detection::new(
        "car",
        0.9,
        3.0,
        Direction::Right,
        BoundingBox::placeholder(),
    ));

    let alert = classifier.classify(set, Utc::now());
    assert_eq!(alert.severity, Severity::Critical);
    assert_eq!(alert.spoken_text, "Stop! person ahead");
}

/// Depth criticals keep passing while vision alerts are throttled
#[test]
fn critical_depth_alerts_are_never_swallowed() {
    use std::time::{Duration, Instant};

    let mut engine = GuidanceEngine::default();
    let start = Instant::now();
    let frame = DepthFrame::new(
        vec![DepthPoint {
            x: 0.5,
            y: 0.5,
            depth_m: 0.4,
            confidence: 0.9,
        }],
        Utc::now(),
    );

    for i in 0..3 {
        let outcome = engine
            .process_depth_at(&frame, start + Duration::from_millis(i * 50))
            .expect("immediate zone hit");
        assert!(
            outcome
                .commands
                .iter()
                .any(|c| matches!(c, FeedbackCommand::Speak(_))),
            "critical speech suppressed on frame {i}"
        );
    }
}
