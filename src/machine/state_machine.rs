//! The event-driven state machine.

use super::callbacks::{Callback, CallbackRegistry};
use crate::core::{Resolution, StateHistory, TransitionRecord, TransitionTable, ANY};
use chrono::Utc;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Finite state machine driven by named events.
///
/// States and events are plain strings. Transitions are registered per
/// event with [`when`](Self::when), callbacks per destination state with
/// [`on`](Self::on) or for every transition with [`any`](Self::any).
/// [`trigger`](Self::trigger) returns `false` instead of failing when no
/// transition matches.
///
/// The machine is single-owner: callbacks receive `&mut StateMachine` and
/// may trigger further events from inside a dispatch.
///
/// # Example
///
/// ```rust
/// use switchyard::StateMachine;
///
/// let mut machine: StateMachine = StateMachine::new("off");
/// machine.when("ignition", [("off", "park")]);
///
/// assert!(machine.trigger("ignition"));
/// assert_eq!(machine.state(), "park");
///
/// assert!(!machine.trigger("ignition"));
/// assert_eq!(machine.state(), "park");
/// ```
pub struct StateMachine<D = ()> {
    initial: String,
    state: String,
    transitions: TransitionTable,
    callbacks: CallbackRegistry<D>,
    history: StateHistory,
}

impl<D> StateMachine<D> {
    /// Create a machine in `initial`. Any string is a legal state.
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            state: initial.clone(),
            initial,
            transitions: TransitionTable::new(),
            callbacks: CallbackRegistry::new(),
            history: StateHistory::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// State the machine was created in.
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// Merge `rows` (source → destination) into the transitions for `event`.
    ///
    /// A row keyed by [`ANY`] applies from every state that has no row of its
    /// own. Rows for a source already registered under `event` are
    /// overwritten.
    pub fn when<I, K, V>(&mut self, event: impl Into<String>, rows: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let event = event.into();
        trace!(event = %event, "registering transitions");
        self.transitions.insert(event, rows);
    }

    /// Fire `callback` whenever a transition lands on `state`.
    ///
    /// Callbacks for a state fire in registration order.
    pub fn on<F>(&mut self, state: impl Into<String>, callback: F)
    where
        F: Fn(&mut StateMachine<D>, Option<&D>) + 'static,
    {
        self.on_handle(state, Rc::new(callback));
    }

    /// Register an existing callback handle for `state`.
    ///
    /// Registering the same handle twice makes it fire twice.
    pub fn on_handle(&mut self, state: impl Into<String>, callback: Callback<D>) {
        let state = state.into();
        trace!(state = %state, "registering callback");
        self.callbacks.register(state, callback);
    }

    /// Fire `callback` after every successful transition, following the
    /// destination state's own callbacks.
    pub fn any<F>(&mut self, callback: F)
    where
        F: Fn(&mut StateMachine<D>, Option<&D>) + 'static,
    {
        self.on(ANY, callback);
    }

    /// Register an existing callback handle under [`ANY`].
    pub fn any_handle(&mut self, callback: Callback<D>) {
        self.on_handle(ANY, callback);
    }

    /// Fire `event` with no payload.
    ///
    /// Returns `true` if the machine changed state. On `false` nothing was
    /// mutated and no callback ran.
    pub fn trigger(&mut self, event: &str) -> bool {
        self.dispatch(event, None)
    }

    /// Fire `event`, handing `data` to every callback that runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use switchyard::StateMachine;
    ///
    /// let seen = Rc::new(RefCell::new(None));
    /// let sink = Rc::clone(&seen);
    ///
    /// let mut machine: StateMachine<&'static str> = StateMachine::new("neutral");
    /// machine.when("shift_up", [("neutral", "drive")]);
    /// machine.on("drive", move |_, driver| {
    ///     *sink.borrow_mut() = driver.copied();
    /// });
    ///
    /// assert!(machine.trigger_with("shift_up", &"Jack"));
    /// assert_eq!(*seen.borrow(), Some("Jack"));
    /// ```
    pub fn trigger_with(&mut self, event: &str, data: &D) -> bool {
        self.dispatch(event, Some(data))
    }

    fn dispatch(&mut self, event: &str, data: Option<&D>) -> bool {
        let Some(resolution) = self.transitions.resolve(event, &self.state) else {
            trace!(event = %event, state = %self.state, "no transition");
            return false;
        };

        let to = resolution.to.to_string();
        let via_wildcard = resolution.via_wildcard;
        let from = std::mem::replace(&mut self.state, to.clone());

        debug!(event = %event, from = %from, to = %to, via_wildcard, "transition");

        self.history.record(TransitionRecord {
            event: event.to_string(),
            from,
            to: to.clone(),
            via_wildcard,
            timestamp: Utc::now(),
        });

        // Handles are copied out first so callbacks can re-enter the machine.
        for callback in self.callbacks.snapshot(&to) {
            callback(&mut *self, data);
        }

        true
    }

    /// Whether `event` would cause a transition from the current state.
    pub fn can(&self, event: &str) -> bool {
        self.resolve(event).is_some()
    }

    /// Destination `event` would move the machine to, without moving it.
    pub fn resolve(&self, event: &str) -> Option<Resolution<'_>> {
        self.transitions.resolve(event, &self.state)
    }

    /// Registered event names in sorted order.
    pub fn events(&self) -> Vec<&str> {
        self.transitions.events()
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Number of callbacks registered for `state` (use [`ANY`] for the
    /// wildcard list).
    pub fn callback_count(&self, state: &str) -> usize {
        self.callbacks.count(state)
    }

    /// Successful transitions so far, oldest first.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Multi-line summary of the current state and every registered
    /// transition. Events and source states are listed in sorted order.
    ///
    /// ```text
    /// state: park
    /// transitions:
    ///   ignition: off -> park
    ///   shift_up: neutral -> drive, park -> reverse, reverse -> neutral
    /// ```
    pub fn describe(&self) -> String {
        let mut out = format!("state: {}\ntransitions:", self.state);

        for event in self.transitions.events() {
            let mut rows: Vec<(&String, &String)> = self
                .transitions
                .rows(event)
                .map(|rows| rows.iter().collect())
                .unwrap_or_default();
            rows.sort_unstable();

            let rendered = if rows.is_empty() {
                "(none)".to_string()
            } else {
                rows.iter()
                    .map(|(from, to)| format!("{from} -> {to}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            out.push_str(&format!("\n  {event}: {rendered}"));
        }

        out
    }
}

impl<D> fmt::Display for StateMachine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<D> fmt::Debug for StateMachine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.state)
            .field("initial", &self.initial)
            .field("transitions", &self.transitions)
            .field("callbacks", &self.callbacks.total())
            .field("history", &self.history.len())
            .finish()
    }
}
