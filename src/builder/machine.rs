//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::machine::{Callback, StateMachine};
use std::rc::Rc;

/// Builder for constructing state machines with a fluent API.
///
/// Unlike the registration methods on [`StateMachine`], `build` rejects
/// empty labels.
///
/// # Example
///
/// ```
/// use switchyard::{transitions, StateMachineBuilder};
///
/// let mut machine = StateMachineBuilder::<()>::new()
///     .initial("off")
///     .when("ignition", transitions! { "off" => "park" })
///     .when("shift_up", transitions! { "park" => "reverse" })
///     .build()
///     .unwrap();
///
/// assert!(machine.trigger("ignition"));
/// assert_eq!(machine.state(), "park");
/// ```
pub struct StateMachineBuilder<D = ()> {
    initial: Option<String>,
    transitions: Vec<(String, Vec<(String, String)>)>,
    callbacks: Vec<(String, Callback<D>)>,
}

impl<D> StateMachineBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            callbacks: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add transitions for `event`.
    pub fn when<I, K, V>(mut self, event: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|(from, to)| (from.into(), to.into()))
            .collect();
        self.transitions.push((event.into(), rows));
        self
    }

    /// Add a callback for entering `state`.
    pub fn on<F>(self, state: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&mut StateMachine<D>, Option<&D>) + 'static,
    {
        self.on_handle(state, Rc::new(callback))
    }

    /// Add an existing callback handle for entering `state`.
    pub fn on_handle(mut self, state: impl Into<String>, callback: Callback<D>) -> Self {
        self.callbacks.push((state.into(), callback));
        self
    }

    /// Add a callback fired after every transition.
    pub fn any<F>(self, callback: F) -> Self
    where
        F: Fn(&mut StateMachine<D>, Option<&D>) + 'static,
    {
        self.on(crate::core::ANY, callback)
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or any label is empty.
    pub fn build(self) -> Result<StateMachine<D>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        require_label(&initial, || "initial state".to_string())?;

        for (event, rows) in &self.transitions {
            require_label(event, || "event name".to_string())?;
            for (from, to) in rows {
                require_label(from, || format!("source state of event '{event}'"))?;
                require_label(to, || format!("destination state of event '{event}'"))?;
            }
        }

        for (state, _) in &self.callbacks {
            require_label(state, || "callback state".to_string())?;
        }

        let mut machine = StateMachine::new(initial);
        for (event, rows) in self.transitions {
            machine.when(event, rows);
        }
        for (state, callback) in self.callbacks {
            machine.on_handle(state, callback);
        }

        Ok(machine)
    }
}

impl<D> Default for StateMachineBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

fn require_label(label: &str, context: impl FnOnce() -> String) -> Result<(), BuildError> {
    if label.is_empty() {
        return Err(BuildError::EmptyLabel { context: context() });
    }
    Ok(())
}
