//! Event-keyed transition table with wildcard source resolution.
//!
//! Each event owns a map from source state to destination state. The
//! reserved source key [`ANY`] matches every state, but only when the
//! current state has no row of its own under that event.

use std::collections::HashMap;

/// Reserved label for "regardless of state".
///
/// As a source key in the transition table it is the fallback row for an
/// event. As a key in the callback registry it holds callbacks fired after
/// every successful transition.
pub const ANY: &str = "any";

/// Outcome of resolving an event against a source state.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Resolution, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.insert("reset", [("any", "pending")]);
///
/// let resolution = table.resolve("reset", "done").unwrap();
/// assert_eq!(resolution, Resolution { to: "pending", via_wildcard: true });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Destination state
    pub to: &'a str,
    /// Whether the destination came from the [`ANY`] row
    pub via_wildcard: bool,
}

/// Mapping of event → source state → destination state.
///
/// The table only grows: [`insert`](Self::insert) merges rows, and a later
/// row for the same `(event, source)` pair overwrites the earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    events: HashMap<String, HashMap<String, String>>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `rows` into the mapping for `event`, creating it if absent.
    ///
    /// Last write wins for overlapping source states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::core::TransitionTable;
    ///
    /// let mut table = TransitionTable::new();
    /// table.insert("shift_up", [("park", "reverse")]);
    /// table.insert("shift_up", [("park", "neutral"), ("reverse", "neutral")]);
    ///
    /// assert_eq!(table.resolve("shift_up", "park").unwrap().to, "neutral");
    /// assert_eq!(table.resolve("shift_up", "reverse").unwrap().to, "neutral");
    /// ```
    pub fn insert<I, K, V>(&mut self, event: impl Into<String>, rows: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self.events.entry(event.into()).or_default();
        for (from, to) in rows {
            entry.insert(from.into(), to.into());
        }
    }

    /// Resolve the destination for `event` when the machine is in `state`.
    ///
    /// Exact rows win over the wildcard row. Unknown events resolve to
    /// nothing, exactly like a known event with no matching row.
    pub fn resolve(&self, event: &str, state: &str) -> Option<Resolution<'_>> {
        let rows = self.events.get(event)?;

        if let Some(to) = rows.get(state) {
            return Some(Resolution {
                to: to.as_str(),
                via_wildcard: state == ANY,
            });
        }

        rows.get(ANY).map(|to| Resolution {
            to: to.as_str(),
            via_wildcard: true,
        })
    }

    /// Rows registered for `event`, if any.
    pub fn rows(&self, event: &str) -> Option<&HashMap<String, String>> {
        self.events.get(event)
    }

    /// Registered event names in sorted order.
    pub fn events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = self.events.keys().map(String::as_str).collect();
        events.sort_unstable();
        events
    }

    /// Iterate over `(event, rows)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashMap<String, String>)> {
        self.events.iter().map(|(event, rows)| (event.as_str(), rows))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of registered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
