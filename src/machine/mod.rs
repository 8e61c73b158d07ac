//! The state machine and its callback registry.
//!
//! [`StateMachine`] owns the current state, the transition table, and the
//! callbacks fired after each successful [`trigger`](StateMachine::trigger).

mod callbacks;
mod state_machine;

pub use callbacks::Callback;
pub use state_machine::StateMachine;
