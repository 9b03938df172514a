//! Page-data response: one fetched page of the node tree.

use serde::{Deserialize, Serialize};

use crate::models::NodeInfo;
use crate::services::{RenderError, Result};

/// Root node, its visible children and whether the child list is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNodeResponse {
    #[serde(default)]
    pub node: Option<NodeInfo>,

    #[serde(default)]
    pub children: Vec<NodeInfo>,

    #[serde(default)]
    pub end_reached: bool,
}

impl RenderNodeResponse {
    pub fn new(node: NodeInfo, children: Vec<NodeInfo>, end_reached: bool) -> Self {
        Self {
            node: Some(node),
            children,
            end_reached,
        }
    }

    /// Parse a page-data response from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(RenderError::from)
    }
}
