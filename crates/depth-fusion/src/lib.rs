//! Depth-Fusion Overlay
//!
//! Depth sensing is treated as ground truth for *presence*, vision as ground
//! truth for *identity*. When any depth point lands in the immediate zone
//! (<0.5 m) this path synthesizes a critical alert directly, without waiting
//! for a vision frame to complete.

pub mod frame;
pub mod overlay;

pub use frame::{DepthFrame, DepthPoint, DepthZone};
pub use overlay::DepthOverlay;
