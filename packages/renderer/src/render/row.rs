//! One child row of the list view.

use crate::constants::IMG_NODE_BKG;
use crate::models::NodeInfo;
use crate::render::tag::{self, Attrs};
use crate::render::{ContentFlags, NodeRenderer, RenderPass};
use crate::services::{Action, ActionKind, SessionState};

impl NodeRenderer {
    /// Row for the child at `index` of `count` siblings, `rows_before` rows
    /// having been emitted already.
    pub fn render_row(
        &self,
        node: &NodeInfo,
        index: usize,
        count: usize,
        rows_before: usize,
        session: &SessionState,
        pass: &mut RenderPass,
    ) -> String {
        let can_move_up = (index > 0 && rows_before > 0) || session.nav.prev_page_exists();
        let can_move_down = index + 1 < count || session.nav.next_page_exists();
        let editing_allowed = self.permissions.is_row_editing_allowed(node, session);

        let button_bar = self.make_row_button_bar(
            node,
            can_move_up,
            can_move_down,
            editing_allowed,
            session,
            pass,
        );

        let content = tag::div(
            &Attrs::new().with("id", node.content_id()),
            &self.render_node_content(node, ContentFlags::ROW, session, pass),
        );

        let class = if session.is_highlighted(&node.uid) {
            "node-table-row active-row"
        } else {
            "node-table-row inactive-row"
        };

        let row_id = node.row_id();
        pass.events
            .bind(&row_id, Action::new(ActionKind::ClickRow, &node.uid));

        tag::div(
            &Attrs::new()
                .with("class", class)
                .with("id", row_id)
                .with_opt("style", self.node_bkg_image_style(node)),
            &(button_bar + &content),
        )
    }

    /// `background-image` style for rows carrying `img.node.bkg`.
    pub fn node_bkg_image_style(&self, node: &NodeInfo) -> Option<String> {
        self.formatter
            .property_val(IMG_NODE_BKG, node)
            .map(|img| format!("background-image: url({});", img))
    }
}
