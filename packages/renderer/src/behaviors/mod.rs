//! Node Kind Renderers
//!
//! This module provides the trait-based rendering system for node types that
//! need more than markdown or a property table:
//!
//! - `NodeKindRenderer` trait - Renders the body of one node type
//! - Built-in renderers (`FileSearchResultRenderer`)
//! - `KindRegistry` - Lookup by `primaryTypeName`, with registration of new kinds
//!
//! The content renderer consults the registry before falling back to the
//! generic `jcr:content` and property rendering.

mod file_search;

pub use file_search::FileSearchResultRenderer;

use std::collections::HashMap;

use crate::models::NodeInfo;
use crate::render::RenderPass;

pub trait NodeKindRenderer {
    /// `primaryTypeName` this renderer handles
    fn type_name(&self) -> &str;

    /// Body HTML for `node`; bind clickable elements through `pass.events`.
    fn render(&self, node: &NodeInfo, row_styling: bool, pass: &mut RenderPass) -> String;
}

/// Kind renderers keyed by node type
pub struct KindRegistry {
    renderers: HashMap<String, Box<dyn NodeKindRenderer>>,
}

impl KindRegistry {
    /// Registry with no renderers.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry with the built-in renderers.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(FileSearchResultRenderer));
        registry
    }

    /// Register a renderer, replacing any existing one for the same type.
    pub fn register(&mut self, renderer: Box<dyn NodeKindRenderer>) {
        let type_name = renderer.type_name().to_string();
        if self.renderers.insert(type_name.clone(), renderer).is_some() {
            tracing::debug!("Replaced kind renderer for {}", type_name);
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&dyn NodeKindRenderer> {
        self.renderers.get(type_name).map(|r| r.as_ref())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.renderers.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::new()
    }
}
