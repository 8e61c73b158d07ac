//! Declarative machine definitions.
//!
//! A [`MachineDefinition`] captures the initial state and the transition
//! table as plain data, so a machine's shape can live in a JSON file next to
//! the code that attaches callbacks to it. Only the shape is captured: the
//! current state, callbacks, and history are never part of a definition.

use crate::builder::StateMachineBuilder;
use crate::machine::StateMachine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod error;

pub use error::DefinitionError;

/// Serializable description of a machine's initial state and transitions.
///
/// # Example
///
/// ```rust
/// use switchyard::{MachineDefinition, StateMachine};
///
/// let definition = MachineDefinition::from_json(r#"{
///     "initial": "off",
///     "transitions": {
///         "ignition": { "off": "park" },
///         "reset": { "any": "off" }
///     }
/// }"#).unwrap();
///
/// let mut machine: StateMachine = StateMachine::from_definition(&definition).unwrap();
/// assert!(machine.trigger("ignition"));
/// assert_eq!(machine.state(), "park");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDefinition {
    /// State a freshly built machine starts in
    pub initial: String,

    /// Event → source state → destination state
    #[serde(default)]
    pub transitions: BTreeMap<String, BTreeMap<String, String>>,
}

impl MachineDefinition {
    /// Start a definition with no transitions.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            transitions: BTreeMap::new(),
        }
    }

    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::Parse(e.to_string()))
    }

    /// Render the definition as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self).map_err(|e| DefinitionError::Serialize(e.to_string()))
    }

    /// Build a validated machine from this definition.
    pub fn build<D>(&self) -> Result<StateMachine<D>, DefinitionError> {
        let builder = self
            .transitions
            .iter()
            .fold(
                StateMachineBuilder::new().initial(self.initial.as_str()),
                |builder, (event, rows)| builder.when(event.as_str(), rows),
            );
        Ok(builder.build()?)
    }
}

impl<D> StateMachine<D> {
    /// Build a machine from a definition. Callbacks are attached afterwards.
    pub fn from_definition(definition: &MachineDefinition) -> Result<Self, DefinitionError> {
        definition.build()
    }

    /// Export this machine's initial state and transition table.
    pub fn definition(&self) -> MachineDefinition {
        let transitions = self
            .transitions()
            .iter()
            .map(|(event, rows)| {
                let rows = rows
                    .iter()
                    .map(|(from, to)| (from.clone(), to.clone()))
                    .collect();
                (event.to_string(), rows)
            })
            .collect();

        MachineDefinition {
            initial: self.initial_state().to_string(),
            transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildError;
    use crate::core::ANY;

    const GEARBOX: &str = r#"{
        "initial": "off",
        "transitions": {
            "ignition": { "off": "park" },
            "shift_up": { "park": "reverse", "reverse": "neutral", "neutral": "drive" },
            "shift_down": { "drive": "neutral", "neutral": "reverse", "reverse": "park" }
        }
    }"#;

    #[test]
    fn definition_parses_from_json() {
        let definition = MachineDefinition::from_json(GEARBOX).unwrap();

        assert_eq!(definition.initial, "off");
        assert_eq!(definition.transitions.len(), 3);
        assert_eq!(definition.transitions["shift_up"]["neutral"], "drive");
    }

    #[test]
    fn definition_builds_working_machine() {
        let definition = MachineDefinition::from_json(GEARBOX).unwrap();
        let mut machine: StateMachine = StateMachine::from_definition(&definition).unwrap();

        assert!(machine.trigger("ignition"));
        assert!(machine.trigger("shift_up"));
        assert_eq!(machine.state(), "reverse");
    }

    #[test]
    fn missing_transitions_defaults_to_empty() {
        let definition = MachineDefinition::from_json(r#"{ "initial": "idle" }"#).unwrap();
        assert_eq!(definition, MachineDefinition::new("idle"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = MachineDefinition::from_json("{ initial: off");
        assert!(matches!(result, Err(DefinitionError::Parse(_))));
    }

    #[test]
    fn empty_labels_are_rejected() {
        let mut definition = MachineDefinition::new("off");
        definition
            .transitions
            .entry("ignition".to_string())
            .or_default()
            .insert(String::new(), "park".to_string());

        let result = definition.build::<()>();
        assert!(matches!(
            result,
            Err(DefinitionError::Invalid(BuildError::EmptyLabel { .. }))
        ));
    }

    #[test]
    fn exported_definition_uses_initial_not_current_state() {
        let mut machine: StateMachine = StateMachine::new("off");
        machine.when("ignition", [("off", "park")]);
        machine.when("reset", [(ANY, "off")]);
        machine.trigger("ignition");

        let definition = machine.definition();
        assert_eq!(definition.initial, "off");
        assert_eq!(definition.transitions["reset"][ANY], "off");
    }

    #[test]
    fn exported_definition_rebuilds_same_table() {
        let original = MachineDefinition::from_json(GEARBOX).unwrap();
        let machine: StateMachine = original.build().unwrap();

        let json = machine.definition().to_json_pretty().unwrap();
        let reloaded = MachineDefinition::from_json(&json).unwrap();

        assert_eq!(reloaded, original);
    }
}
