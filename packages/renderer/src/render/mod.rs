//! Page Rendering
//!
//! [`NodeRenderer`] turns the current page of a [`SessionState`] into the HTML
//! of the `mainNodeContent` and `listView` regions. Rendering reads the
//! session and records into a [`RenderPass`]: the element bindings of the
//! pass and whether a code block needs pretty-printing. Page-level operations
//! then install the bindings on the session and push the HTML through a
//! [`DomUtility`](crate::dom::DomUtility).
//!
//! - `tag` - HTML tag builder
//! - `content` - Node body, row header, images and attachments
//! - `row` - One child row
//! - `button_bar` - Per-row action buttons
//! - `page` - Whole-page render, single node refresh, image sizing, status bar
//! - `widgets` - Buttons, bars and form fields

mod button_bar;
mod content;
mod page;
mod row;
pub mod tag;
pub mod widgets;


pub use content::{attachment_url, format_path, strip_root_prefix};
pub use page::{EMPTY_PAGE_PROMPT, FIRST_PAGE_BUTTON, LAST_PAGE_BUTTON, NEXT_PAGE_BUTTON, PREV_PAGE_BUTTON};

use crate::behaviors::{KindRegistry, NodeKindRenderer};
use crate::config::RenderConfig;
use crate::services::{
    DefaultPropertyFormatter, EditPermissions, EventTable, OwnershipPermissions,
    PropertyFormatter,
};

/// Which parts of a node's content to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFlags {
    pub show_path: bool,
    pub show_name: bool,
    pub render_bin: bool,
    /// Child row styling (`jcr-content`) rather than page root styling (`jcr-root-content`)
    pub row_styling: bool,
    pub show_header: bool,
}

impl ContentFlags {
    /// Child rows and single node refreshes
    pub const ROW: Self = Self {
        show_path: true,
        show_name: true,
        render_bin: true,
        row_styling: true,
        show_header: true,
    };

    /// The page's root node
    pub const ROOT: Self = Self {
        row_styling: false,
        ..Self::ROW
    };
}

/// Output collected while rendering, besides the HTML itself
#[derive(Debug, Default)]
pub struct RenderPass {
    pub events: EventTable,
    /// A code block was emitted and the page needs pretty-printing
    pub code_format_dirty: bool,
}

/// Summary of one page render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// HTML written to `mainNodeContent`, `None` when the region was hidden
    pub main_content: Option<String>,
    /// HTML written to `listView`, as built; the DOM passes that run after
    /// the write (link retargeting, image sizing) are only visible in the DOM
    pub list_view: String,
    /// Child rows emitted
    pub rows: usize,
    pub code_format_dirty: bool,
}

pub struct NodeRenderer {
    config: RenderConfig,
    kinds: KindRegistry,
    formatter: Box<dyn PropertyFormatter>,
    permissions: Box<dyn EditPermissions>,
}

impl NodeRenderer {
    /// Renderer with the built-in kinds, the default property formatter and
    /// ownership-based permissions.
    pub fn new(config: RenderConfig) -> Self {
        let formatter = DefaultPropertyFormatter::from_config(&config);
        Self {
            config,
            kinds: KindRegistry::new(),
            formatter: Box::new(formatter),
            permissions: Box::new(OwnershipPermissions),
        }
    }

    pub fn with_formatter(mut self, formatter: Box<dyn PropertyFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_permissions(mut self, permissions: Box<dyn EditPermissions>) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn register_kind(&mut self, renderer: Box<dyn NodeKindRenderer>) {
        self.kinds.register(renderer);
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }
}

impl Default for NodeRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
