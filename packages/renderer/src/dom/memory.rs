//! In-memory DOM used by the CLI, benchmarks and tests.
//!
//! Regions written with `set_inner_html` are stored as HTML strings. Ids found
//! inside written HTML are indexed so the renderer can look up rows and
//! images the same way it would on a live page.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use super::DomUtility;

static ID_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bid=(?:'([^']*)'|"([^"]*)")"#).unwrap());

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<a\b([^>]*?)(/?)>").unwrap());

static TARGET_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+target=(?:'[^']*'|"[^"]*"|\S+)"#).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementState {
    pub inner_html: String,
    pub visible: bool,
    pub attributes: BTreeMap<String, String>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            inner_html: String::new(),
            visible: true,
            attributes: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollPosition {
    Top,
    Element(String),
}

#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: BTreeMap<String, ElementState>,
    /// Element ids embedded in each written region
    embedded: BTreeMap<String, BTreeSet<String>>,
    scroll: Option<ScrollPosition>,
    pretty_print_runs: usize,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-create the standard page regions.
    pub fn with_regions(ids: &[&str]) -> Self {
        let mut dom = Self::new();
        for id in ids {
            dom.elements.insert(id.to_string(), ElementState::default());
        }
        dom
    }

    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.inner_html.as_str())
    }

    /// Visibility of an element; unknown elements report hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.visible)
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    pub fn scroll_position(&self) -> Option<&ScrollPosition> {
        self.scroll.as_ref()
    }

    pub fn pretty_print_runs(&self) -> usize {
        self.pretty_print_runs
    }

    fn element_mut(&mut self, id: &str) -> &mut ElementState {
        self.elements.entry(id.to_string()).or_default()
    }

    fn index_ids(html: &str) -> BTreeSet<String> {
        ID_ATTR_RE
            .captures_iter(html)
            .filter_map(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn retarget_links(html: &str) -> String {
        ANCHOR_RE
            .replace_all(html, |caps: &regex::Captures| {
                let attrs = TARGET_ATTR_RE.replace_all(&caps[1], "");
                format!("<a{} target='_blank'{}>", attrs, &caps[2])
            })
            .into_owned()
    }
}

impl DomUtility for MemoryDom {
    fn set_inner_html(&mut self, id: &str, html: &str) {
        let ids = Self::index_ids(html);
        self.embedded.insert(id.to_string(), ids);
        self.element_mut(id).inner_html = html.to_string();
    }

    fn set_display(&mut self, id: &str, visible: bool) {
        self.element_mut(id).visible = visible;
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        self.element_mut(id)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn element_exists(&self, id: &str) -> bool {
        self.elements.contains_key(id) || self.embedded.values().any(|ids| ids.contains(id))
    }

    fn scroll_to_top(&mut self) {
        self.scroll = Some(ScrollPosition::Top);
    }

    fn scroll_to_element(&mut self, id: &str) {
        if !self.element_exists(id) {
            tracing::debug!("Scroll target {} not on page", id);
        }
        self.scroll = Some(ScrollPosition::Element(id.to_string()));
    }

    fn open_links_in_new_context(&mut self) {
        for element in self.elements.values_mut() {
            if element.inner_html.contains("<a") {
                element.inner_html = Self::retarget_links(&element.inner_html);
            }
        }
    }

    fn pretty_print(&mut self) {
        self.pretty_print_runs += 1;
    }
}
