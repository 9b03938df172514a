//! Data Models
//!
//! This module contains the page data structures consumed by the renderer:
//!
//! - `NodeInfo` - One content node with its properties and display flags
//! - `PropertyInfo` - A name/value pair attached to a node
//! - `RenderNodeResponse` - Root node + children + end-of-list flag

mod node;
mod page;


pub use node::{NodeInfo, PropertyInfo};
pub use page::RenderNodeResponse;
