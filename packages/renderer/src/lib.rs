//! Node Page Renderer
//!
//! This crate turns page data describing a tree of content nodes (text,
//! images, attachments, properties) into the HTML fragments shown by the
//! content page, together with pager controls, per-row action button bars
//! and the post-render DOM adjustments.
//!
//! # Architecture
//!
//! - **Owned session state**: registries, navigation offsets and selections live in
//!   a [`SessionState`] passed explicitly to every render call
//! - **Typed events**: buttons and rows are bound to [`Action`]s in an [`EventTable`]
//!   instead of inline script strings
//! - **Pluggable kinds**: per-type rendering goes through [`NodeKindRenderer`]
//! - **DOM seam**: all page mutation goes through the [`DomUtility`] trait
//!
//! # Modules
//!
//! - [`models`] - Page data structures (NodeInfo, PropertyInfo, RenderNodeResponse)
//! - [`services`] - Session state, registry, navigation, permissions, formatting, events
//! - [`behaviors`] - Per-type node renderers
//! - [`render`] - Tag builder and the page/row/content renderers
//! - [`dom`] - DOM utility trait and an in-memory implementation
//! - [`config`] - Renderer configuration

pub mod behaviors;
pub mod config;
pub mod constants;
pub mod dom;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use behaviors::*;
pub use config::{MarkdownMode, RenderConfig};
pub use dom::{DomUtility, MemoryDom};
pub use models::*;
pub use render::{ContentFlags, NodeRenderer, RenderedPage};
pub use services::*;
