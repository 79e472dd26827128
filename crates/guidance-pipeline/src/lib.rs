//! Guidance Pipeline
//!
//! Wires the perception components into one engine:
//!
//! ```text
//! vision sources -> merger -> classifier -> rate limiter -> haptic/TTS
//! depth sensor   -> overlay ------------->  rate limiter   (can preempt)
//! gesture frames -> stability filter     -> conversation history
//! ```
//!
//! Every engine entry point is synchronous; the async session runner only
//! moves frames from tokio channels into the engine, preserving per-producer
//! arrival order without imposing any cross-producer ordering.

pub mod config;
pub mod engine;
pub mod session;

pub use config::{ConfigError, GuidanceConfig};
pub use engine::{FeedbackCommand, FrameOutcome, GuidanceEngine};
pub use session::{run_session, SessionError, SessionEvent, SessionInputs, VisionFrame};
