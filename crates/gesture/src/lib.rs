//! Gesture Stability Filtering
//!
//! Raw per-frame sign classification flickers between adjacent classes.
//! Requiring N identical consecutive observations before confirming a sign
//! trades ~N frames of latency for near-zero false positives - appropriate
//! because sign meanings are discrete and held poses last many frames.

pub mod filter;
pub mod history;
pub mod observation;

pub use filter::StabilityFilter;
pub use history::ConversationHistory;
pub use observation::{ConfirmedGesture, GestureObservation, Transcription, TranscriptionSource};
