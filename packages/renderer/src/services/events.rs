//! Typed Event Binding
//!
//! Every clickable element the renderer emits gets a DOM id, and the
//! [`EventTable`] maps that id to a structured [`Action`]. The host page
//! forwards clicks by element id to a single [`ActionHandler`], so no script
//! text is ever embedded in the generated HTML.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::services::{RenderError, Result};

/// What a click on a bound element asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    ClickRow,
    OpenNode,
    ReplyToComment,
    ToggleSelection,
    CreateSubNode,
    InsertNode,
    EditNode,
    MoveNodeUp,
    MoveNodeDown,
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    EditSystemFile,
}

/// Action kind plus its target (a node uid, a file name, or nothing for pager buttons)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub kind: ActionKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Action {
    pub fn new(kind: ActionKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: Some(target.into()),
        }
    }

    /// Action with no target, e.g. the pager buttons.
    pub fn untargeted(kind: ActionKind) -> Self {
        Self { kind, target: None }
    }
}

/// Receives actions dispatched from the page
pub trait ActionHandler {
    fn handle(&mut self, action: &Action) -> Result<()>;
}

/// Element id → action bindings produced by one render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    bindings: BTreeMap<String, Action>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `element_id`, replacing any earlier binding for it.
    pub fn bind(&mut self, element_id: impl Into<String>, action: Action) {
        self.bindings.insert(element_id.into(), action);
    }

    pub fn get(&self, element_id: &str) -> Option<&Action> {
        self.bindings.get(element_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Action)> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Merge bindings from another pass; later bindings win.
    pub fn extend(&mut self, other: EventTable) {
        self.bindings.extend(other.bindings);
    }

    /// Route a click on `element_id` to `handler`.
    pub fn dispatch(&self, element_id: &str, handler: &mut dyn ActionHandler) -> Result<()> {
        let action = self
            .get(element_id)
            .ok_or_else(|| RenderError::unbound_element(element_id))?;
        handler.handle(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<Action>,
    }

    impl ActionHandler for Recorder {
        fn handle(&mut self, action: &Action) -> Result<()> {
            self.seen.push(action.clone());
            Ok(())
        }
    }

    #[test]
    fn test_bind_and_dispatch() {
        let mut table = EventTable::new();
        table.bind("open_3", Action::new(ActionKind::OpenNode, "3"));
        table.bind("nextPageButton", Action::untargeted(ActionKind::NextPage));

        let mut recorder = Recorder::default();
        table.dispatch("open_3", &mut recorder).unwrap();
        table.dispatch("nextPageButton", &mut recorder).unwrap();

        assert_eq!(
            recorder.seen,
            vec![
                Action::new(ActionKind::OpenNode, "3"),
                Action::untargeted(ActionKind::NextPage)
            ]
        );
    }

    #[test]
    fn test_dispatch_unbound_element_fails() {
        let table = EventTable::new();
        let mut recorder = Recorder::default();
        let err = table.dispatch("row_1", &mut recorder).unwrap_err();
        assert!(matches!(err, RenderError::UnboundElement { .. }));
        assert!(recorder.seen.is_empty());
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut table = EventTable::new();
        table.bind("row_1", Action::new(ActionKind::ClickRow, "1"));
        table.bind("row_1", Action::new(ActionKind::ClickRow, "1"));
        assert_eq!(table.len(), 1);

        let mut other = EventTable::new();
        other.bind("row_2", Action::new(ActionKind::ClickRow, "2"));
        table.extend(other);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_value(Action::new(ActionKind::MoveNodeUp, "4")).unwrap();
        assert_eq!(json["kind"], "moveNodeUp");
        assert_eq!(json["target"], "4");

        let json = serde_json::to_value(Action::untargeted(ActionKind::FirstPage)).unwrap();
        assert!(json.get("target").is_none());
    }
}
