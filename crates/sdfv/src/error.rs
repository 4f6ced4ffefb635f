//! Error types for SDFV operations.
//!
//! Every variant describes an upstream contract violation: the renderer has
//! no recoverable error paths of its own. Errors abort the current build or
//! frame; the next frame re-derives everything from the input.

use thiserror::Error;

/// The main error type for SDFV operations.
#[derive(Debug, Error)]
pub enum SdfvError {
    /// A record reached element construction without layout data.
    #[error("Missing layout for {element}")]
    MissingLayout { element: String },

    /// An access node references a data container its document does not declare.
    #[error("Unknown data container `{name}`")]
    UnknownArray { name: String },

    /// A nested SDFG node carries no state machine.
    #[error("Nested SDFG node `{node}` has no state machine")]
    MissingNestedGraph { node: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl SdfvError {
    pub(crate) fn missing_layout(element: impl Into<String>) -> Self {
        Self::MissingLayout {
            element: element.into(),
        }
    }
}
