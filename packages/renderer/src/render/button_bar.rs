//! Action buttons shown on node rows and on the page's root node.

use crate::constants::{COMMENT_BY, PUBLIC_APPEND};
use crate::models::NodeInfo;
use crate::render::tag::{self, Attrs};
use crate::render::widgets;
use crate::render::{NodeRenderer, RenderPass};
use crate::services::permissions::created_by;
use crate::services::{Action, ActionKind, SessionState};

impl NodeRenderer {
    /// Reply is offered on publicly appendable nodes the viewer neither
    /// created nor commented.
    pub fn reply_allowed(&self, node: &NodeInfo, session: &SessionState) -> bool {
        let user = session.user.user_name.as_str();
        self.formatter.property_val(PUBLIC_APPEND, node).is_some()
            && created_by(node).as_deref() != Some(user)
            && self.formatter.property_val(COMMENT_BY, node).as_deref() != Some(user)
    }

    /// Button bar of one child row; empty when no button applies.
    ///
    /// Order: select, Open, Ins, Add, Edit, Up, Dn, Reply.
    pub fn make_row_button_bar(
        &self,
        node: &NodeInfo,
        can_move_up: bool,
        can_move_down: bool,
        editing_allowed: bool,
        session: &SessionState,
        pass: &mut RenderPass,
    ) -> String {
        let uid = node.uid.as_str();
        let edit_mode = session.prefs.edit_mode;
        let is_comment = self.formatter.property_val(COMMENT_BY, node).is_some();
        let mut buttons = String::new();

        if edit_mode {
            let id = format!("{}_sel", uid);
            pass.events
                .bind(&id, Action::new(ActionKind::ToggleSelection, uid));
            buttons.push_str(&tag::checkbox(
                Attrs::new()
                    .with("id", id)
                    .flag_if("checked", session.is_selected(uid))
                    .with("style", "margin-top: 11px;"),
            ));
        }

        if session.registry.node_has_children(uid) {
            let id = format!("open_{}", uid);
            pass.events.bind(&id, Action::new(ActionKind::OpenNode, uid));
            buttons.push_str(&tag::button(
                &Attrs::new()
                    .with("style", "background-color: #4caf50;color:white;")
                    .with("raised", "raised")
                    .with("id", id),
                "Open",
            ));
        }

        if edit_mode && self.config.ins_on_toolbar && !is_comment {
            let id = format!("insertNodeButtonId{}", uid);
            pass.events.bind(&id, Action::new(ActionKind::InsertNode, uid));
            buttons.push_str(&tag::button(
                &Attrs::new()
                    .with("icon", "icons:picture-in-picture")
                    .with("id", id)
                    .with("raised", "raised"),
                "Ins",
            ));
        }

        if edit_mode && self.config.new_on_toolbar && !is_comment {
            buttons.push_str(&self.add_button(uid, pass));
        }

        if edit_mode && editing_allowed {
            buttons.push_str(&self.edit_button(uid, pass));

            let ordered = session.current_node().is_some_and(|n| n.children_ordered);
            if self.config.move_updown_on_toolbar && ordered && !is_comment {
                if can_move_up {
                    let id = format!("up_{}", uid);
                    pass.events.bind(&id, Action::new(ActionKind::MoveNodeUp, uid));
                    buttons.push_str(&tag::button(
                        &Attrs::new()
                            .with("icon", "icons:arrow-upward")
                            .with("raised", "raised")
                            .with("id", id),
                        "Up",
                    ));
                }

                if can_move_down {
                    let id = format!("down_{}", uid);
                    pass.events
                        .bind(&id, Action::new(ActionKind::MoveNodeDown, uid));
                    buttons.push_str(&tag::button(
                        &Attrs::new()
                            .with("icon", "icons:arrow-downward")
                            .with("raised", "raised")
                            .with("id", id),
                        "Dn",
                    ));
                }
            }
        }

        if self.reply_allowed(node, session) {
            buttons.push_str(&self.reply_button(uid, pass));
        }

        if buttons.is_empty() {
            return buttons;
        }
        widgets::make_horizontal_field_set(&buttons, Some("row-toolbar"))
    }

    /// Add / Edit / Reply bar above the page's root node.
    pub(crate) fn make_root_button_bar(
        &self,
        node: &NodeInfo,
        session: &SessionState,
        pass: &mut RenderPass,
    ) -> String {
        let mut buttons = String::new();

        if session.prefs.edit_mode
            && self.config.new_on_toolbar
            && self.permissions.is_insert_allowed(node, session)
        {
            buttons.push_str(&self.add_button(&node.uid, pass));
        }

        if self.permissions.is_edit_allowed(node, session) {
            buttons.push_str(&self.edit_button(&node.uid, pass));
        }

        if self.reply_allowed(node, session) {
            buttons.push_str(&self.reply_button(&node.uid, pass));
        }

        if buttons.is_empty() {
            return buttons;
        }
        widgets::make_horizontal_field_set(&buttons, None)
    }

    fn add_button(&self, uid: &str, pass: &mut RenderPass) -> String {
        let id = format!("addNodeButtonId{}", uid);
        pass.events
            .bind(&id, Action::new(ActionKind::CreateSubNode, uid));
        tag::button(
            &Attrs::new()
                .with("icon", "icons:picture-in-picture-alt")
                .with("id", id)
                .with("raised", "raised"),
            "Add",
        )
    }

    fn edit_button(&self, uid: &str, pass: &mut RenderPass) -> String {
        let id = format!("edit_{}", uid);
        pass.events.bind(&id, Action::new(ActionKind::EditNode, uid));
        tag::button(
            &Attrs::new()
                .with("alt", "Edit node.")
                .with("icon", "editor:mode-edit")
                .with("raised", "raised")
                .with("id", id),
            "Edit",
        )
    }

    fn reply_button(&self, uid: &str, pass: &mut RenderPass) -> String {
        let id = format!("reply_{}", uid);
        pass.events
            .bind(&id, Action::new(ActionKind::ReplyToComment, uid));
        tag::button(&Attrs::new().with("raised", "raised").with("id", id), "Reply")
    }
}
