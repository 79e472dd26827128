//! Guidance engine
//!
//! Owns the only mutable state in the core (stability filter, rate limiter,
//! conversation history) for one session. Callers serialize access; frames
//! from different producers may arrive in either order.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use depth_fusion::{DepthFrame, DepthOverlay};
use detection::{DetectionMerger, LumaPlane, SourceFrame};
use feedback::{FeedbackChannel, HapticPlan, RateLimiter, SpeechRequest};
use gesture::{ConversationHistory, GestureObservation, StabilityFilter, Transcription};
use navigation::{AlertClassifier, NavigationAlert};
use tracing::info;

use crate::config::GuidanceConfig;

/// One outbound driver command that survived rate limiting
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackCommand {
    /// Primary vibration pattern for the haptic driver
    Haptic(feedback::HapticPattern),

    /// Directional follower pulse, fired after the given delay
    DirectionalPulse {
        pulse: feedback::DirectionalPulse,
        delay: Duration,
    },

    /// Utterance for the TTS driver
    Speak(SpeechRequest),
}

/// The alert for one frame plus the feedback the drivers should act on
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    pub alert: NavigationAlert,
    pub commands: Vec<FeedbackCommand>,
}

/// Session-scoped fusion engine
pub struct GuidanceEngine {
    merger: DetectionMerger,
    classifier: AlertClassifier,
    overlay: DepthOverlay,
    stability: StabilityFilter,
    limiter: RateLimiter,
    history: ConversationHistory,
    directional_delay: Duration,
}

impl GuidanceEngine {
    pub fn new(config: &GuidanceConfig) -> Self {
        Self {
            merger: DetectionMerger::new(
                config.merger.clone(),
                config.fallback.clone(),
                config.geometry.clone(),
            ),
            classifier: AlertClassifier::new(),
            overlay: DepthOverlay::new(config.geometry.clone()),
            stability: StabilityFilter::new(config.stability_threshold),
            limiter: RateLimiter::new(&config.feedback),
            history: ConversationHistory::new(config.history_capacity),
            directional_delay: Duration::from_millis(config.feedback.directional_pulse_delay_ms),
        }
    }

    /// Merge and classify one vision frame
    pub fn process_vision(
        &mut self,
        sources: &[SourceFrame],
        luma: Option<&LumaPlane>,
    ) -> FrameOutcome {
        self.process_vision_at(sources, luma, Utc::now(), Instant::now())
    }

    /// `process_vision` with explicit clocks, for deterministic callers
    pub fn process_vision_at(
        &mut self,
        sources: &[SourceFrame],
        luma: Option<&LumaPlane>,
        timestamp: DateTime<Utc>,
        now: Instant,
    ) -> FrameOutcome {
        let detections = self.merger.merge(sources, luma);
        let alert = self.classifier.classify(detections, timestamp);
        let commands = self.feedback_for(&alert, now);
        FrameOutcome { alert, commands }
    }

    /// Overlay one depth frame; `None` when nothing is in the immediate zone
    pub fn process_depth(&mut self, frame: &DepthFrame) -> Option<FrameOutcome> {
        self.process_depth_at(frame, Instant::now())
    }

    /// `process_depth` with an explicit clock
    pub fn process_depth_at(&mut self, frame: &DepthFrame, now: Instant) -> Option<FrameOutcome> {
        let alert = self.overlay.overlay(frame)?;
        let commands = self.feedback_for(&alert, now);
        Some(FrameOutcome { alert, commands })
    }

    /// Debounce one gesture observation; a confirmed sign lands in the
    /// conversation history and is returned for the TTS/history consumers
    pub fn process_gesture(&mut self, observation: &GestureObservation) -> Option<Transcription> {
        self.process_gesture_at(observation, Utc::now())
    }

    /// `process_gesture` with an explicit clock
    pub fn process_gesture_at(
        &mut self,
        observation: &GestureObservation,
        timestamp: DateTime<Utc>,
    ) -> Option<Transcription> {
        let confirmed = self.stability.observe(observation, timestamp)?;
        let transcription: Transcription = confirmed.into();
        info!(text = %transcription.text, "sign confirmed");
        self.history.push(transcription.clone());
        Some(transcription)
    }

    /// Confirmed transcriptions so far this session
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    fn feedback_for(&mut self, alert: &NavigationAlert, now: Instant) -> Vec<FeedbackCommand> {
        if !alert.is_actionable() {
            return Vec::new();
        }

        let direction = alert
            .closest
            .as_ref()
            .map(|d| d.direction)
            .unwrap_or(geometry::Direction::Unknown);

        let mut commands = Vec::new();

        if self.limiter.try_emit(FeedbackChannel::Haptic, alert.severity, now) {
            if let Some(plan) = HapticPlan::for_alert(alert.severity, direction, self.directional_delay) {
                commands.push(FeedbackCommand::Haptic(plan.primary));
                if let Some((pulse, delay)) = plan.directional {
                    commands.push(FeedbackCommand::DirectionalPulse { pulse, delay });
                }
            }
        }

        if self.limiter.try_emit(FeedbackChannel::Speech, alert.severity, now) {
            commands.push(FeedbackCommand::Speak(SpeechRequest::for_alert(
                &alert.spoken_text,
                alert.severity,
            )));
        }

        commands
    }
}

impl Default for GuidanceEngine {
    fn default() -> Self {
        Self::new(&GuidanceConfig::default())
    }
}
