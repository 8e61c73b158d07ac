//! Builder API for constructing state machines.
//!
//! [`StateMachineBuilder`] validates labels up front, which the machine's
//! own registration methods never do. The [`transitions!`](crate::transitions)
//! macro writes the row maps passed to `when`.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
