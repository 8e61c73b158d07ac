//! Core table and history types.
//!
//! This module holds the parts of the machine that never run caller code:
//! - The event-keyed transition table and its wildcard resolution
//! - History of completed transitions

mod history;
mod table;

pub use history::{StateHistory, TransitionRecord};
pub use table::{Resolution, TransitionTable, ANY};
