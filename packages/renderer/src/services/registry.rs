//! Node Registry
//!
//! Lookup maps for the nodes on the current page. The registry is cleared and
//! repopulated whenever a new page loads and is read-only while a page renders.
//!
//! Three maps are kept:
//! - `uid → NodeInfo` for resolving DOM rows back to their node
//! - `id → uid` and `path → uid` (the ident map) for refreshing a node after an edit
//!
//! A node registered twice keeps its first uid, so refreshing a node in place
//! never invalidates the DOM ids already on the page.

use std::collections::HashMap;

use crate::models::NodeInfo;
use crate::services::{RenderError, Result};

#[derive(Debug, Default)]
pub struct NodeRegistry {
    uid_to_node: HashMap<String, NodeInfo>,
    ident_to_uid: HashMap<String, String>,
    next_uid: u64,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry and restart uid allocation.
    pub fn clear(&mut self) {
        self.uid_to_node.clear();
        self.ident_to_uid.clear();
        self.next_uid = 0;
    }

    /// Assign `node.uid` (reusing the uid of a node with the same id or path)
    /// and, when `update_maps` is set, store the node under its uid.
    pub fn init_node(&mut self, node: &mut NodeInfo, update_maps: bool) {
        let uid = match self.existing_uid(node) {
            Some(uid) => uid,
            None => {
                self.next_uid += 1;
                self.next_uid.to_string()
            }
        };

        node.uid = uid.clone();
        self.ident_to_uid.insert(node.id.clone(), uid.clone());
        self.ident_to_uid.insert(node.path.clone(), uid.clone());

        if update_maps {
            self.uid_to_node.insert(uid, node.clone());
        }
    }

    fn existing_uid(&self, node: &NodeInfo) -> Option<String> {
        self.ident_to_uid
            .get(&node.id)
            .or_else(|| self.ident_to_uid.get(&node.path))
            .cloned()
    }

    pub fn node_by_uid(&self, uid: &str) -> Option<&NodeInfo> {
        self.uid_to_node.get(uid)
    }

    /// Uid of a node addressed by id or path.
    pub fn uid_for_ident(&self, ident: &str) -> Option<&str> {
        self.ident_to_uid.get(ident).map(String::as_str)
    }

    /// Like [`uid_for_ident`](Self::uid_for_ident), failing with `UnknownNode`.
    pub fn require_uid(&self, ident: &str) -> Result<String> {
        self.uid_for_ident(ident)
            .map(str::to_string)
            .ok_or_else(|| RenderError::unknown_node(ident))
    }

    pub fn node_by_ident(&self, ident: &str) -> Option<&NodeInfo> {
        self.uid_for_ident(ident)
            .and_then(|uid| self.uid_to_node.get(uid))
    }

    /// Whether the node behind `uid` has children; unknown uids have none.
    pub fn node_has_children(&self, uid: &str) -> bool {
        match self.uid_to_node.get(uid) {
            Some(node) => node.has_children,
            None => {
                tracing::debug!("Unknown uid in node_has_children: {}", uid);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.uid_to_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uid_to_node.is_empty()
    }
}
