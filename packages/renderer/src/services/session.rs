//! Session State
//!
//! Everything the renderer reads or mutates between calls lives here: the
//! viewer, their view preferences, the node registry, pagination, selections,
//! the per-parent focus memory and the event bindings of the last render.
//! One `SessionState` is scoped to one page view and passed explicitly to the
//! renderer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::constants::DEFAULT_VIEWPORT_WIDTH;
use crate::models::{NodeInfo, RenderNodeResponse};
use crate::services::events::{Action, ActionHandler, ActionKind, EventTable};
use crate::services::navigation::{NavigationState, PageMove, PageRequest};
use crate::services::registry::NodeRegistry;
use crate::services::{RenderError, Result};

/// The signed-in viewer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    pub user_name: String,
    pub is_admin: bool,
    pub is_anon: bool,
}

impl UserContext {
    pub fn anonymous() -> Self {
        Self {
            user_name: "anonymous".to_string(),
            is_admin: false,
            is_anon: true,
        }
    }

    pub fn named(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            is_admin: false,
            is_anon: false,
        }
    }

    pub fn admin(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            is_admin: true,
            is_anon: false,
        }
    }
}

/// User-toggled view options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPreferences {
    /// Expose mutation controls (select, add, insert, edit, move)
    pub edit_mode: bool,

    /// Show the author/modification header above node content
    pub show_meta_data: bool,

    /// Show every property as a table instead of the rendered content
    pub show_properties: bool,

    /// Hide technical properties and node types
    pub simple_mode: bool,
}

#[derive(Debug)]
pub struct SessionState {
    pub user: UserContext,
    pub prefs: ViewPreferences,
    pub registry: NodeRegistry,
    pub nav: NavigationState,
    pub viewport_width: u32,

    /// Ids of nodes cut for relocation; they are hidden until pasted
    pub nodes_to_move: HashSet<String>,

    selected: BTreeSet<String>,
    focus_by_parent: HashMap<String, String>,
    current_page: Option<RenderNodeResponse>,
    events: EventTable,
    outbox: Vec<Action>,
    pending_page: Option<PageRequest>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: UserContext::default(),
            prefs: ViewPreferences::default(),
            registry: NodeRegistry::default(),
            nav: NavigationState::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            nodes_to_move: HashSet::new(),
            selected: BTreeSet::new(),
            focus_by_parent: HashMap::new(),
            current_page: None,
            events: EventTable::default(),
            outbox: Vec::new(),
            pending_page: None,
        }
    }
}

impl SessionState {
    pub fn new(user: UserContext, prefs: ViewPreferences, viewport_width: u32) -> Self {
        Self {
            user,
            prefs,
            viewport_width,
            ..Default::default()
        }
    }

    /// Replace the current page: clear the registry, selections and focus
    /// memory, then register the root and every child.
    pub fn load_page(&mut self, mut data: RenderNodeResponse) {
        self.registry.clear();
        self.selected.clear();
        self.focus_by_parent.clear();

        if let Some(node) = data.node.as_mut() {
            self.registry.init_node(node, true);
        }
        for child in data.children.iter_mut() {
            self.registry.init_node(child, true);
        }

        tracing::info!(
            "Loaded page {:?} with {} children (end_reached={})",
            data.node.as_ref().map(|n| n.path.as_str()),
            data.children.len(),
            data.end_reached
        );

        self.current_page = Some(data);
    }

    pub fn current_page(&self) -> Option<&RenderNodeResponse> {
        self.current_page.as_ref()
    }

    /// Root node of the current page
    pub fn current_node(&self) -> Option<&NodeInfo> {
        self.current_page.as_ref().and_then(|p| p.node.as_ref())
    }

    /// Remember `uid` as the focused row under the current root.
    pub fn highlight(&mut self, uid: &str) {
        if let Some(parent_uid) = self.current_node().map(|n| n.uid.clone()) {
            self.focus_by_parent.insert(parent_uid, uid.to_string());
        }
    }

    pub fn highlighted_node(&self) -> Option<&NodeInfo> {
        let parent = self.current_node()?;
        let uid = self.focus_by_parent.get(&parent.uid)?;
        self.registry.node_by_uid(uid)
    }

    pub fn is_highlighted(&self, uid: &str) -> bool {
        self.highlighted_node().is_some_and(|n| n.uid == uid)
    }

    pub fn is_selected(&self, uid: &str) -> bool {
        self.selected.contains(uid)
    }

    /// Flip the selection of `uid`; returns whether it is now selected.
    pub fn toggle_selection(&mut self, uid: &str) -> bool {
        if self.selected.remove(uid) {
            false
        } else {
            self.selected.insert(uid.to_string());
            true
        }
    }

    pub fn selected_uids(&self) -> impl Iterator<Item = &String> {
        self.selected.iter()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_pending_move(&self, node: &NodeInfo) -> bool {
        self.nodes_to_move.contains(&node.id)
    }

    pub fn events(&self) -> &EventTable {
        &self.events
    }

    pub(crate) fn set_events(&mut self, events: EventTable) {
        self.events = events;
    }

    /// Add bindings from a partial re-render, keeping the rest of the page's.
    pub(crate) fn merge_events(&mut self, events: EventTable) {
        self.events.extend(events);
    }

    /// Actions meant for the editing, navigation and reply subsystems.
    pub fn take_outbox(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.outbox)
    }

    /// Page fetch requested by the last pager click, if any.
    pub fn take_page_request(&mut self) -> Option<PageRequest> {
        self.pending_page.take()
    }

    /// Handle a click on a bound element of the last rendered page.
    pub fn dispatch(&mut self, element_id: &str) -> Result<()> {
        let action = self
            .events
            .get(element_id)
            .cloned()
            .ok_or_else(|| RenderError::unbound_element(element_id))?;
        self.handle(&action)
    }

    fn page_move(&mut self, step: PageMove) {
        self.pending_page = Some(self.nav.apply(step));
    }
}

impl ActionHandler for SessionState {
    fn handle(&mut self, action: &Action) -> Result<()> {
        tracing::debug!("Dispatching {:?}", action);

        match (action.kind, action.target.as_deref()) {
            (ActionKind::ClickRow, Some(uid)) => self.highlight(uid),
            (ActionKind::ToggleSelection, Some(uid)) => {
                self.toggle_selection(uid);
            }
            (ActionKind::FirstPage, _) => self.page_move(PageMove::First),
            (ActionKind::PrevPage, _) => self.page_move(PageMove::Prev),
            (ActionKind::NextPage, _) => self.page_move(PageMove::Next),
            (ActionKind::LastPage, _) => self.page_move(PageMove::Last),
            _ => self.outbox.push(action.clone()),
        }
        Ok(())
    }
}
