//! Navigation Alert Classification
//!
//! Maps a merged detection set to a discrete severity level and generates
//! the spoken guidance a blind user hears. Severity is a pure function of
//! the closest detection's distance; wording escalates urgency (imperative
//! "Stop!" down to descriptive "detected") because speech is the primary
//! output channel.

pub mod alert;
pub mod classifier;
pub mod scene;
pub mod severity;
pub mod speech;

pub use alert::NavigationAlert;
pub use classifier::AlertClassifier;
pub use scene::describe_scene;
pub use severity::{classify_severity, Severity};
pub use speech::{direction_phrase, direction_phrase_relative, object_name, spoken_text};
