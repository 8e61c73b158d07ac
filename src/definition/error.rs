//! Definition error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur loading or exporting a machine definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Parsing the JSON document failed
    #[error("Definition parse failed: {0}")]
    Parse(String),

    /// Serialization to JSON failed
    #[error("Definition serialization failed: {0}")]
    Serialize(String),

    /// The definition parsed but describes an invalid machine
    #[error("Invalid definition: {0}")]
    Invalid(#[from] BuildError),
}
