//! Transition history tracking.
//!
//! Every successful trigger appends one record. Failed triggers leave the
//! history untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful transition.
///
/// # Example
///
/// ```rust
/// use switchyard::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     event: "ignition".to_string(),
///     from: "off".to_string(),
///     to: "park".to_string(),
///     via_wildcard: false,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The event that fired
    pub event: String,
    /// The state being left
    pub from: String,
    /// The state being entered
    pub to: String,
    /// Whether the transition matched the wildcard source row
    pub via_wildcard: bool,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
///
/// history.record(TransitionRecord {
///     event: "ignition".to_string(),
///     from: "off".to_string(),
///     to: "park".to_string(),
///     via_wildcard: false,
///     timestamp: Utc::now(),
/// });
///
/// history.record(TransitionRecord {
///     event: "shift_up".to_string(),
///     from: "park".to_string(),
///     to: "reverse".to_string(),
///     via_wildcard: false,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec!["off", "park", "reverse"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHistory {
    records: Vec<TransitionRecord>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition.
    pub fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// States traversed: the first source state, then the destination of
    /// every record. Empty if nothing has been recorded.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Time elapsed between the first and last recorded transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(event: &str, from: &str, to: &str) -> TransitionRecord {
        TransitionRecord {
            event: event.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            via_wildcard: false,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_appends() {
        let mut history = StateHistory::new();
        history.record(record("ignition", "off", "park"));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().event, "ignition");
    }

    #[test]
    fn path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(record("ignition", "off", "park"));
        history.record(record("shift_up", "park", "reverse"));
        history.record(record("shift_down", "reverse", "park"));

        assert_eq!(history.path(), vec!["off", "park", "reverse", "park"]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        history.record(record("ignition", "off", "park"));

        std::thread::sleep(Duration::from_millis(10));

        history.record(record("shift_up", "park", "reverse"));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let mut history = StateHistory::new();
        history.record(record("ignition", "off", "park"));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn clear_drops_records() {
        let mut history = StateHistory::new();
        history.record(record("ignition", "off", "park"));
        history.clear();

        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(record("ignition", "off", "park"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
