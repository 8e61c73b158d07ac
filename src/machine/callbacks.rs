//! Callback handles and the per-state callback registry.

use super::state_machine::StateMachine;
use crate::core::ANY;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a callback fired after a successful transition.
///
/// The callback receives the machine (already in its new state) and the
/// payload passed to [`StateMachine::trigger_with`], or `None` for
/// [`StateMachine::trigger`]. Handles are reference counted so the same
/// callback can be registered more than once; each registration fires.
pub type Callback<D> = Rc<dyn Fn(&mut StateMachine<D>, Option<&D>)>;

/// Ordered callback lists keyed by state, with [`ANY`] holding the lists
/// fired after every transition.
pub(crate) struct CallbackRegistry<D> {
    by_state: HashMap<String, Vec<Callback<D>>>,
}

impl<D> CallbackRegistry<D> {
    pub(crate) fn new() -> Self {
        Self {
            by_state: HashMap::new(),
        }
    }

    /// Append `callback` to the list for `state`. No deduplication.
    pub(crate) fn register(&mut self, state: impl Into<String>, callback: Callback<D>) {
        self.by_state.entry(state.into()).or_default().push(callback);
    }

    /// Callbacks to fire on entering `destination`, in firing order.
    ///
    /// The returned list is a copy of the handles, so callbacks may register
    /// more callbacks while it is being walked. A destination literally named
    /// [`ANY`] fires the wildcard list once.
    pub(crate) fn snapshot(&self, destination: &str) -> Vec<Callback<D>> {
        let mut fired = Vec::new();
        if destination != ANY {
            if let Some(list) = self.by_state.get(destination) {
                fired.extend(list.iter().cloned());
            }
        }
        if let Some(list) = self.by_state.get(ANY) {
            fired.extend(list.iter().cloned());
        }
        fired
    }

    pub(crate) fn count(&self, state: &str) -> usize {
        self.by_state.get(state).map_or(0, Vec::len)
    }

    pub(crate) fn total(&self) -> usize {
        self.by_state.values().map(Vec::len).sum()
    }
}
