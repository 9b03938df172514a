//! Whole-page rendering and the page-level DOM passes.

use crate::constants::{
    LIST_VIEW_ID, MAIN_NODE_CONTENT_ID, NO_CONTENT_MESSAGE, STATUS_BAR_ID, UUID,
};
use crate::dom::DomUtility;
use crate::models::{NodeInfo, RenderNodeResponse};
use crate::render::content::strip_root_prefix;
use crate::render::tag::{self, Attrs};
use crate::render::{widgets, ContentFlags, NodeRenderer, RenderPass, RenderedPage};
use crate::services::{
    Action, ActionKind, EventTable, RenderError, Result, SessionState,
};

/// Shown to signed-in users who may add content to an empty node
pub const EMPTY_PAGE_PROMPT: &str = "<p>There are no subnodes under this node. <br><br>\
     Click 'EDIT MODE' and then use the 'ADD' button to create content.</p>";

pub const FIRST_PAGE_BUTTON: &str = "firstPageButton";
pub const PREV_PAGE_BUTTON: &str = "prevPageButton";
pub const NEXT_PAGE_BUTTON: &str = "nextPageButton";
pub const LAST_PAGE_BUTTON: &str = "lastPageButton";

/// Images wider than the viewport minus this margin are stretched to fit
const ADJUST_MARGIN: u32 = 80;

impl NodeRenderer {
    /// Render the current page into `mainNodeContent` and `listView`.
    ///
    /// New `data` replaces the session's page (registry, selections and focus
    /// are rebuilt); `None` re-renders the page already loaded. The element
    /// bindings of the session are replaced by those of this pass. The
    /// returned HTML is what was written, before the DOM passes ran.
    pub fn render_page_from_data(
        &self,
        data: Option<RenderNodeResponse>,
        scroll_to_top: bool,
        session: &mut SessionState,
        dom: &mut dyn DomUtility,
    ) -> RenderedPage {
        if let Some(data) = data {
            session.load_page(data);
        }

        let page = session.current_page().cloned();
        if let Some(page) = &page {
            session.nav.end_reached = page.end_reached;
        }

        let Some((root, page)) = page.and_then(|p| p.node.clone().map(|n| (n, p))) else {
            tracing::debug!("No page to render");
            dom.set_display(LIST_VIEW_ID, false);
            dom.set_inner_html(MAIN_NODE_CONTENT_ID, NO_CONTENT_MESSAGE);
            session.set_events(EventTable::new());
            return RenderedPage {
                main_content: Some(NO_CONTENT_MESSAGE.to_string()),
                ..Default::default()
            };
        };
        dom.set_display(LIST_VIEW_ID, true);

        let mut pass = RenderPass::default();
        let main_content = self.render_main_node(&root, session, &mut pass);
        match &main_content {
            Some(html) => {
                dom.set_display(MAIN_NODE_CONTENT_ID, true);
                dom.set_inner_html(MAIN_NODE_CONTENT_ID, html);
            }
            None => dom.set_display(MAIN_NODE_CONTENT_ID, false),
        }

        self.update_status_bar(session, dom);

        let mut output = String::new();
        if session.nav.prev_page_exists() {
            output.push_str(&self.pager_bar(
                &[
                    ("First Page", FIRST_PAGE_BUTTON, ActionKind::FirstPage),
                    ("Prev Page", PREV_PAGE_BUTTON, ActionKind::PrevPage),
                ],
                &mut pass,
            ));
        }

        let count = page.children.len();
        let mut rows = 0;
        for (i, child) in page.children.iter().enumerate() {
            if session.is_pending_move(child) || self.is_blacklisted(child, session) {
                continue;
            }
            output.push_str(&self.render_row(child, i, count, rows, session, &mut pass));
            rows += 1;
        }

        tracing::debug!("Rendered {} of {} children of {}", rows, count, root.path);

        if rows == 0
            && !session.user.is_anon
            && self.permissions.is_insert_allowed(&root, session)
        {
            output = EMPTY_PAGE_PROMPT.to_string();
        }

        if !page.end_reached {
            output.push_str(&self.pager_bar(
                &[
                    ("Next Page", NEXT_PAGE_BUTTON, ActionKind::NextPage),
                    ("Last Page", LAST_PAGE_BUTTON, ActionKind::LastPage),
                ],
                &mut pass,
            ));
        }

        dom.set_inner_html(LIST_VIEW_ID, &output);

        if pass.code_format_dirty {
            dom.pretty_print();
        }
        dom.open_links_in_new_context();
        self.screen_size_change(session, dom);

        match session.highlighted_node() {
            Some(node) if !scroll_to_top => dom.scroll_to_element(&node.row_id()),
            _ => dom.scroll_to_top(),
        }

        let code_format_dirty = pass.code_format_dirty;
        session.set_events(pass.events);

        RenderedPage {
            main_content,
            list_view: output,
            rows,
            code_format_dirty,
        }
    }

    /// Root node with its button bar, or `None` when it has no content.
    fn render_main_node(
        &self,
        root: &NodeInfo,
        session: &SessionState,
        pass: &mut RenderPass,
    ) -> Option<String> {
        let content = self.render_node_content(root, ContentFlags::ROOT, session, pass);
        if content.is_empty() {
            return None;
        }

        let button_bar = self.make_root_button_bar(root, session, pass);
        let class = if session.is_highlighted(&root.uid) {
            "mainNodeContentStyle active-row"
        } else {
            "mainNodeContentStyle inactive-row"
        };

        let row_id = root.row_id();
        pass.events
            .bind(&row_id, Action::new(ActionKind::ClickRow, &root.uid));

        Some(tag::div(
            &Attrs::new().with("class", class).with("id", row_id),
            &(button_bar + &content),
        ))
    }

    fn pager_bar(&self, buttons: &[(&str, &str, ActionKind)], pass: &mut RenderPass) -> String {
        let html: String = buttons
            .iter()
            .map(|(text, id, kind)| {
                pass.events.bind(*id, Action::untargeted(*kind));
                widgets::make_button(text, id)
            })
            .collect();
        widgets::centered_button_bar(&html, "paging-button-bar")
    }

    /// Simple mode hides node types on the type blacklist.
    pub fn is_blacklisted(&self, node: &NodeInfo, session: &SessionState) -> bool {
        session.prefs.simple_mode
            && self
                .config
                .simple_mode_type_blacklist
                .iter()
                .any(|t| *t == node.primary_type_name)
    }

    /// Re-render one node's content in place after it was edited.
    ///
    /// The node must already be on the page; its uid is looked up by id.
    pub fn refresh_node_on_page(
        &self,
        node: NodeInfo,
        session: &mut SessionState,
        dom: &mut dyn DomUtility,
    ) -> Result<String> {
        let uid = session.registry.require_uid(&node.id)?;

        let mut node = node;
        session.registry.init_node(&mut node, true);
        if node.uid != uid {
            return Err(RenderError::uid_changed(&node.id, uid, &node.uid));
        }

        let mut pass = RenderPass::default();
        let content = self.render_node_content(&node, ContentFlags::ROW, session, &mut pass);
        dom.set_inner_html(&node.content_id(), &content);
        if pass.code_format_dirty {
            dom.pretty_print();
        }
        session.merge_events(pass.events);

        tracing::debug!("Refreshed node {} (uid={})", node.path, uid);
        Ok(content)
    }

    /// Fit the page's images to `session.viewport_width`.
    pub fn screen_size_change(&self, session: &SessionState, dom: &mut dyn DomUtility) {
        let Some(page) = session.current_page() else {
            return;
        };

        for node in page.node.iter().chain(page.children.iter()) {
            if node.has_binary && node.binary_is_image {
                self.adjust_image_size(node, session.viewport_width, dom);
            }
        }
    }

    pub fn adjust_image_size(&self, node: &NodeInfo, viewport_width: u32, dom: &mut dyn DomUtility) {
        let img_id = node.img_id();
        if !dom.element_exists(&img_id) {
            return;
        }

        if let (Some(width), Some(height)) = (node.width, node.height) {
            if width == 0 || height == 0 || viewport_width == 0 {
                return;
            }
            if width > viewport_width.saturating_sub(ADJUST_MARGIN) {
                dom.set_attribute(&img_id, "width", "100%");
                dom.set_attribute(&img_id, "height", "auto");
            } else {
                dom.set_attribute(&img_id, "width", &width.to_string());
                dom.set_attribute(&img_id, "height", &height.to_string());
            }
        }
    }

    /// Write the child count and selection summary into `statusBar`.
    pub fn update_status_bar(&self, session: &SessionState, dom: &mut dyn DomUtility) {
        let Some(page) = session.current_page() else {
            return;
        };
        if page.node.is_none() {
            return;
        }

        let mut status = Vec::new();
        if !session.prefs.simple_mode {
            status.push(format!("count: {}", page.children.len()));
        }
        if session.prefs.edit_mode {
            status.push(format!("Selections: {}", session.selected_count()));
        }
        dom.set_inner_html(STATUS_BAR_ID, &status.join(" "));
    }

    /// Message describing the URLs that open the highlighted node.
    pub fn node_url_message(&self, session: &SessionState) -> String {
        let Some(node) = session.highlighted_node() else {
            return "You must first click on a node.".to_string();
        };

        let origin = &self.config.location_origin;
        let path = strip_root_prefix(&node.path);
        let mut message = format!("URL using path: <br>{}?id={}", origin, path);

        if let Some(uuid) = self.formatter.property_val(UUID, node) {
            message.push_str(&format!("<p>URL for UUID: <br>{}?id={}", origin, uuid));
        }
        message
    }
}
