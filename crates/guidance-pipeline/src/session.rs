//! Async session runner
//!
//! Bridges the three independent producers (vision ~2 Hz, depth ~10 Hz,
//! gesture ~10 Hz) onto the synchronous engine. Each channel preserves its
//! own arrival order; nothing is ordered across channels. Stopping a session
//! is just dropping the senders - the engine holds no frame queue to drain,
//! so in-flight results are discarded by never being sent.

use depth_fusion::DepthFrame;
use detection::{LumaPlane, SourceFrame};
use gesture::{GestureObservation, Transcription};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::{FrameOutcome, GuidanceEngine};

/// Session error types
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Event consumer dropped")]
    ConsumerClosed,
}

/// Owned luminance plane, channel-transferable
#[derive(Debug, Clone)]
pub struct LumaBuffer {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl LumaBuffer {
    pub fn as_plane(&self) -> LumaPlane<'_> {
        LumaPlane {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}

/// One vision frame's source results, throttled upstream by the caller
#[derive(Debug, Clone, Default)]
pub struct VisionFrame {
    pub sources: Vec<SourceFrame>,
    pub luma: Option<LumaBuffer>,
}

/// What a session emits downstream
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Vision or depth alert plus its allowed feedback commands
    Alert(FrameOutcome),

    /// Confirmed sign, already recorded in the engine's history
    Transcription(Transcription),
}

/// Producer channel ends for one session
pub struct SessionInputs {
    pub vision: mpsc::Receiver<VisionFrame>,
    pub depth: mpsc::Receiver<DepthFrame>,
    pub gesture: mpsc::Receiver<GestureObservation>,
}

/// Drive the engine until every producer has hung up.
///
/// Returns the engine so the caller keeps the conversation history. Fails
/// only when the event consumer goes away while events are still flowing.
pub async fn run_session(
    mut engine: GuidanceEngine,
    mut inputs: SessionInputs,
    events: mpsc::Sender<SessionEvent>,
) -> Result<GuidanceEngine, SessionError> {
    let mut vision_open = true;
    let mut depth_open = true;
    let mut gesture_open = true;

    info!("guidance session started");
    loop {
        tokio::select! {
            frame = inputs.vision.recv(), if vision_open => match frame {
                Some(frame) => {
                    let luma = frame.luma.as_ref().map(|b| b.as_plane());
                    let outcome = engine.process_vision(&frame.sources, luma.as_ref());
                    events
                        .send(SessionEvent::Alert(outcome))
                        .await
                        .map_err(|_| SessionError::ConsumerClosed)?;
                }
                None => {
                    debug!("vision producer closed");
                    vision_open = false;
                }
            },
            frame = inputs.depth.recv(), if depth_open => match frame {
                Some(frame) => {
                    if let Some(outcome) = engine.process_depth(&frame) {
                        events
                            .send(SessionEvent::Alert(outcome))
                            .await
                            .map_err(|_| SessionError::ConsumerClosed)?;
                    }
                }
                None => {
                    debug!("depth producer closed");
                    depth_open = false;
                }
            },
            observation = inputs.gesture.recv(), if gesture_open => match observation {
                Some(observation) => {
                    if let Some(transcription) = engine.process_gesture(&observation) {
                        events
                            .send(SessionEvent::Transcription(transcription))
                            .await
                            .map_err(|_| SessionError::ConsumerClosed)?;
                    }
                }
                None => {
                    debug!("gesture producer closed");
                    gesture_open = false;
                }
            },
            else => break,
        }
    }
    info!("guidance session finished");

    Ok(engine)
}
