//! Edit eligibility checks.
//!
//! The server enforces the real security rules; these checks only decide
//! which controls are worth offering to the viewer.

use crate::constants::{COMMENT_BY, CREATED_BY, DEFAULT_OWNER, PUBLIC_APPEND};
use crate::models::NodeInfo;
use crate::services::session::{SessionState, UserContext};

pub trait EditPermissions {
    /// Whether the viewer may add children under `node`.
    fn is_insert_allowed(&self, node: &NodeInfo, session: &SessionState) -> bool;

    /// Whether the page header offers "Edit" for `node`.
    fn is_edit_allowed(&self, node: &NodeInfo, session: &SessionState) -> bool;

    /// Whether a child row offers "Edit" and the move buttons.
    fn is_row_editing_allowed(&self, node: &NodeInfo, session: &SessionState) -> bool {
        if is_owned_comment_node(node, &session.user) {
            return true;
        }
        (session.user.is_admin || !node.is_rep_node())
            && !is_non_owned_comment_node(node, &session.user)
            && !is_non_owned_node(node, &session.user)
    }
}

/// Ownership-based permissions: owners and admins edit, public-append nodes accept inserts.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipPermissions;

impl EditPermissions for OwnershipPermissions {
    fn is_insert_allowed(&self, node: &NodeInfo, session: &SessionState) -> bool {
        if session.user.is_anon {
            return false;
        }
        session.user.is_admin
            || !is_non_owned_node(node, &session.user)
            || node.property_val(PUBLIC_APPEND).is_some()
    }

    fn is_edit_allowed(&self, node: &NodeInfo, session: &SessionState) -> bool {
        if !session.prefs.edit_mode || node.is_root() {
            return false;
        }
        if is_owned_comment_node(node, &session.user) {
            return true;
        }
        session.user.is_admin
            || (!is_non_owned_comment_node(node, &session.user)
                && !is_non_owned_node(node, &session.user))
    }
}

/// Creator of a node, from its property or its metadata.
pub fn created_by(node: &NodeInfo) -> Option<String> {
    node.property_val(CREATED_BY)
        .or_else(|| node.created_by.clone().filter(|c| !c.is_empty()))
}

pub fn is_owned_comment_node(node: &NodeInfo, user: &UserContext) -> bool {
    node.property_val(COMMENT_BY)
        .is_some_and(|by| by == user.user_name)
}

pub fn is_non_owned_comment_node(node: &NodeInfo, user: &UserContext) -> bool {
    node.property_val(COMMENT_BY)
        .is_some_and(|by| by != user.user_name)
}

/// Nodes without creation metadata belong to the admin account.
pub fn is_non_owned_node(node: &NodeInfo, user: &UserContext) -> bool {
    let owner = created_by(node).unwrap_or_else(|| DEFAULT_OWNER.to_string());
    owner != user.user_name
}
