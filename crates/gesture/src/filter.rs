//! Consecutive-observation debounce

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::observation::{ConfirmedGesture, GestureObservation};

/// Default consecutive identical observations required before confirming
pub const DEFAULT_STABILITY_THRESHOLD: u32 = 3;

/// Debounces raw per-frame gesture classifications.
///
/// A gesture is confirmed only after it repeats identically for
/// `threshold` consecutive frames. After a confirmation the count resets to
/// zero while the id is retained, so a held pose must climb back to the
/// threshold before re-emitting.
#[derive(Debug, Clone)]
pub struct StabilityFilter {
    last_gesture_id: Option<String>,
    consecutive_count: u32,
    threshold: u32,
}

impl StabilityFilter {
    pub fn new(threshold: u32) -> Self {
        Self {
            last_gesture_id: None,
            consecutive_count: 0,
            threshold: threshold.max(1),
        }
    }

    /// Feed one observation; returns a confirmed gesture when the run
    /// reaches the threshold.
    pub fn observe(
        &mut self,
        observation: &GestureObservation,
        timestamp: DateTime<Utc>,
    ) -> Option<ConfirmedGesture> {
        let Some(id) = observation.gesture_id.as_deref() else {
            // Classifier abstained: the run is broken
            self.last_gesture_id = None;
            self.consecutive_count = 0;
            return None;
        };

        if self.last_gesture_id.as_deref() == Some(id) {
            self.consecutive_count += 1;
        } else {
            self.last_gesture_id = Some(id.to_string());
            self.consecutive_count = 1;
        }

        debug!(
            gesture_id = id,
            count = self.consecutive_count,
            threshold = self.threshold,
            "gesture observation"
        );

        if self.consecutive_count >= self.threshold {
            // Keep the id so the same held pose cannot flood output
            self.consecutive_count = 0;
            info!(gesture_id = id, "gesture confirmed");
            return Some(ConfirmedGesture {
                gesture_id: id.to_string(),
                meaning: observation.meaning.clone(),
                confidence: observation.confidence,
                timestamp,
            });
        }

        None
    }

    /// Clear all run state (session restart)
    pub fn reset(&mut self) {
        self.last_gesture_id = None;
        self.consecutive_count = 0;
    }
}

impl Default for StabilityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STABILITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave() -> GestureObservation {
        GestureObservation::observed("wave", "Hello", 0.9)
    }

    fn fist() -> GestureObservation {
        GestureObservation::observed("fist", "Yes", 0.85)
    }

    #[test]
    fn test_below_threshold_emits_nothing() {
        let mut filter = StabilityFilter::default();
        assert!(filter.observe(&wave(), Utc::now()).is_none());
        assert!(filter.observe(&wave(), Utc::now()).is_none());
    }

    #[test]
    fn test_threshold_run_emits_exactly_once() {
        let mut filter = StabilityFilter::default();
        assert!(filter.observe(&wave(), Utc::now()).is_none());
        assert!(filter.observe(&wave(), Utc::now()).is_none());
        let confirmed = filter.observe(&wave(), Utc::now()).expect("third wave confirms");
        assert_eq!(confirmed.gesture_id, "wave");
        assert_eq!(confirmed.meaning, "Hello");
        // Held pose: the fourth frame must not re-emit
        assert!(filter.observe(&wave(), Utc::now()).is_none());
    }

    #[test]
    fn test_held_pose_reconfirms_after_full_run() {
        let mut filter = StabilityFilter::default();
        for _ in 0..3 {
            filter.observe(&wave(), Utc::now());
        }
        // Three more identical frames reach the threshold again
        assert!(filter.observe(&wave(), Utc::now()).is_none());
        assert!(filter.observe(&wave(), Utc::now()).is_none());
        assert!(filter.observe(&wave(), Utc::now()).is_some());
    }

    #[test]
    fn test_different_gesture_restarts_run_at_one() {
        let mut filter = StabilityFilter::default();
        filter.observe(&wave(), Utc::now());
        filter.observe(&wave(), Utc::now());
        // Interruption: fist resets the run to 1, so two more fists confirm
        assert!(filter.observe(&fist(), Utc::now()).is_none());
        assert!(filter.observe(&fist(), Utc::now()).is_none());
        assert!(filter.observe(&fist(), Utc::now()).is_some());
    }

    #[test]
    fn test_abstention_clears_run() {
        let mut filter = StabilityFilter::default();
        filter.observe(&wave(), Utc::now());
        filter.observe(&wave(), Utc::now());
        assert!(filter.observe(&GestureObservation::none(), Utc::now()).is_none());
        // Run was cleared entirely, a full threshold run is needed again
        assert!(filter.observe(&wave(), Utc::now()).is_none());
        assert!(filter.observe(&wave(), Utc::now()).is_none());
        assert!(filter.observe(&wave(), Utc::now()).is_some());
    }

    #[test]
    fn test_threshold_one_confirms_immediately() {
        let mut filter = StabilityFilter::new(1);
        assert!(filter.observe(&wave(), Utc::now()).is_some());
    }
}
