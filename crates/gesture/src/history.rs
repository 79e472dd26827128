//! Bounded in-memory conversation history

use std::collections::VecDeque;

use crate::observation::Transcription;

/// Default number of retained transcriptions
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Bounded buffer of confirmed transcriptions, oldest evicted first.
///
/// In-memory only; nothing is persisted across sessions.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: VecDeque<Transcription>,
    capacity: usize,
}

impl ConversationHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, transcription: Transcription) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(transcription);
    }

    pub fn latest(&self) -> Option<&Transcription> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transcription> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{ConfirmedGesture, Transcription};
    use chrono::Utc;

    fn entry(text: &str) -> Transcription {
        ConfirmedGesture {
            gesture_id: text.to_string(),
            meaning: text.to_string(),
            confidence: 0.9,
            timestamp: Utc::now(),
        }
        .into()
    }

    #[test]
    fn test_oldest_evicted_at_capacity() {
        let mut history = ConversationHistory::new(2);
        history.push(entry("a"));
        history.push(entry("b"));
        history.push(entry("c"));
        assert_eq!(history.len(), 2);
        let texts: Vec<_> = history.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["b", "c"]);
        assert_eq!(history.latest().unwrap().text, "c");
    }

    #[test]
    fn test_clear() {
        let mut history = ConversationHistory::default();
        history.push(entry("a"));
        history.clear();
        assert!(history.is_empty());
    }
}
