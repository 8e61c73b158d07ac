//! Switchyard: a small embeddable event-driven state machine
//!
//! A machine holds a current state and moves between caller-named states
//! when caller-named events fire. Nothing is declared up front: any string
//! is a state, and registering a transition is all it takes to make an event
//! meaningful.
//!
//! # Core Concepts
//!
//! - **Transitions**: per event, a map from source state to destination
//!   state, with the reserved source [`ANY`] as a fallback row
//! - **Callbacks**: closures fired after a transition lands on a state, or
//!   after every transition when registered with `any`
//! - **Triggers**: `trigger` returns `false` when nothing matches; an
//!   unknown event is never an error
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use switchyard::StateMachine;
//!
//! let mut car: StateMachine<&'static str> = StateMachine::new("off");
//! car.when("ignition", [("off", "park")]);
//! car.when("shift_up", [("park", "reverse"), ("reverse", "neutral"), ("neutral", "drive")]);
//! car.when("shift_down", [("drive", "neutral"), ("neutral", "reverse"), ("reverse", "park")]);
//!
//! let driver = Rc::new(RefCell::new(None));
//! let seen = Rc::clone(&driver);
//! car.on("drive", move |_, name| *seen.borrow_mut() = name.copied());
//!
//! assert!(car.trigger("ignition"));
//! assert!(car.trigger("shift_up"));
//! assert!(car.trigger("shift_up"));
//! assert!(car.trigger_with("shift_up", &"Jack"));
//! assert_eq!(car.state(), "drive");
//! assert_eq!(*driver.borrow(), Some("Jack"));
//!
//! assert!(!car.trigger("shift_up"));
//! assert!(car.trigger("shift_down"));
//! assert_eq!(car.state(), "neutral");
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Resolution, StateHistory, TransitionRecord, TransitionTable, ANY};
pub use definition::{DefinitionError, MachineDefinition};
pub use machine::{Callback, StateMachine};
