//! File search results: a JSON list of matching files stored in `fs:json`.

use serde::Deserialize;

use crate::behaviors::NodeKindRenderer;
use crate::constants::{FILE_LISTING_JSON, FILE_SEARCH_RESULT_TYPE, RENDER_FAILED};
use crate::models::NodeInfo;
use crate::render::tag::{self, Attrs};
use crate::render::RenderPass;
use crate::services::{Action, ActionKind};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileEntry {
    file_name: String,
}

/// Lists each file as a clickable entry that opens it in the system file editor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSearchResultRenderer;

impl FileSearchResultRenderer {
    fn render_listing(&self, node: &NodeInfo, json: &str, pass: &mut RenderPass) -> String {
        let entries: Vec<FileEntry> = match serde_json::from_str(json) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("File listing of {} failed to parse: {}", node.path, e);
                return RENDER_FAILED.to_string();
            }
        };

        let mut content = String::new();
        for (i, entry) in entries.iter().enumerate() {
            let id = format!("{}_systemFile_{}", node.uid, i);
            pass.events
                .bind(&id, Action::new(ActionKind::EditSystemFile, &entry.file_name));

            content.push_str(&tag::div(
                &Attrs::new().with("class", "systemFile").with("id", id),
                &html_escape::encode_text(&entry.file_name),
            ));
        }
        content
    }
}

impl NodeKindRenderer for FileSearchResultRenderer {
    fn type_name(&self) -> &str {
        FILE_SEARCH_RESULT_TYPE
    }

    fn render(&self, node: &NodeInfo, _row_styling: bool, pass: &mut RenderPass) -> String {
        match node.property_val(FILE_LISTING_JSON) {
            Some(json) => self.render_listing(node, &json, pass),
            None => String::new(),
        }
    }
}
