//! Renderer Services
//!
//! This module contains the collaborators the renderer delegates to:
//!
//! - `NodeRegistry` - uid assignment and id/path/uid lookups for the current page
//! - `SessionState` - Owned per-view state (user, preferences, selections, focus)
//! - `NavigationState` - Child list pagination offsets
//! - `EditPermissions` - Which edit controls a viewer is offered
//! - `PropertyFormatter` - Property extraction and property table rendering
//! - `EventTable` - Element id to typed action bindings
//!
//! Services hold no global state; everything is reachable from a `SessionState`
//! or a `NodeRenderer` passed explicitly by the caller.

pub mod error;
pub mod events;
pub mod navigation;
pub mod permissions;
pub mod property_formatter;
pub mod registry;
pub mod session;

pub use error::{RenderError, Result};
pub use events::{Action, ActionHandler, ActionKind, EventTable};
pub use navigation::{NavigationState, PageMove, PageRequest, ROWS_PER_PAGE};
pub use permissions::{EditPermissions, OwnershipPermissions};
pub use property_formatter::{DefaultPropertyFormatter, PropertyFormatter};
pub use registry::NodeRegistry;
pub use session::{SessionState, UserContext, ViewPreferences};
