//! Renderer Error Types
//!
//! Lookup failures while refreshing a node are fatal for the operation and are
//! propagated to the caller. Malformed auxiliary payloads inside node
//! properties are never surfaced here; kind renderers log them and render a
//! placeholder instead.

use thiserror::Error;

/// Renderer operation errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Node id has no uid on the current page
    #[error("Unable to find nodeId {id} in uid map")]
    UnknownNode { id: String },

    /// Registry handed out a different uid for a node already on the page
    #[error("uid changed unexpectedly for node {id}: expected {expected}, got {actual}")]
    UidChanged {
        id: String,
        expected: String,
        actual: String,
    },

    /// Dispatch requested for an element with no bound action
    #[error("No action bound to element: {element_id}")]
    UnboundElement { element_id: String },

    /// Page data could not be parsed
    #[error("Invalid page data: {0}")]
    InvalidPageData(#[from] serde_json::Error),

    /// Configuration invalid or unreadable
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Create an unknown node error
    pub fn unknown_node(id: impl Into<String>) -> Self {
        Self::UnknownNode { id: id.into() }
    }

    /// Create a uid mismatch error
    pub fn uid_changed(
        id: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UidChanged {
            id: id.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an unbound element error
    pub fn unbound_element(element_id: impl Into<String>) -> Self {
        Self::UnboundElement {
            element_id: element_id.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
