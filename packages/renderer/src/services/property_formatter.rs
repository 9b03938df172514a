//! Property Formatter
//!
//! Extracts named properties from nodes and renders property lists as HTML.
//! The renderer only talks to the [`PropertyFormatter`] trait; the default
//! implementation applies the simple-mode blacklist and the read-only/binary
//! property lists from [`RenderConfig`].

use std::borrow::Cow;
use std::collections::HashSet;

use crate::config::RenderConfig;
use crate::constants::CONTENT;
use crate::models::{NodeInfo, PropertyInfo};
use crate::render::tag::{self, Attrs};
use crate::services::session::ViewPreferences;

pub trait PropertyFormatter {
    fn property<'a>(&self, name: &str, node: &'a NodeInfo) -> Option<&'a PropertyInfo> {
        node.property(name)
    }

    /// Display value of a named property, `None` when missing or empty.
    fn property_val(&self, name: &str, node: &NodeInfo) -> Option<String> {
        node.property_val(name)
    }

    /// Raw value of one property, as fed to the markdown container.
    fn render_property(&self, property: &PropertyInfo) -> String {
        property.display_value()
    }

    /// HTML for a property list; empty when nothing is displayable.
    fn render_properties(&self, properties: &[PropertyInfo], prefs: &ViewPreferences) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct DefaultPropertyFormatter {
    simple_mode_blacklist: HashSet<String>,
    read_only: HashSet<String>,
    binary: HashSet<String>,
}

impl DefaultPropertyFormatter {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            simple_mode_blacklist: config.simple_mode_property_blacklist.iter().cloned().collect(),
            read_only: config.read_only_properties.iter().cloned().collect(),
            binary: config.binary_properties.iter().cloned().collect(),
        }
    }

    pub fn allow_property_to_display(&self, name: &str, prefs: &ViewPreferences) -> bool {
        !prefs.simple_mode || !self.simple_mode_blacklist.contains(name)
    }

    pub fn is_read_only_property(&self, name: &str) -> bool {
        self.read_only.contains(name)
    }

    pub fn is_binary_property(&self, name: &str) -> bool {
        self.binary.contains(name)
    }

    /// Label shown for a property name; simple mode hides the `jcr:` content name.
    pub fn sanitize_property_name<'a>(&self, name: &'a str, prefs: &ViewPreferences) -> &'a str {
        if prefs.simple_mode && name == CONTENT {
            "Content"
        } else {
            name
        }
    }

    fn render_value(&self, property: &PropertyInfo) -> String {
        match &property.values {
            Some(values) => values
                .iter()
                .map(|v| html_escape::encode_text(v))
                .collect::<Vec<Cow<str>>>()
                .join("<br>"),
            None => html_escape::encode_text(property.value.as_deref().unwrap_or_default())
                .into_owned(),
        }
    }
}

impl PropertyFormatter for DefaultPropertyFormatter {
    fn render_properties(&self, properties: &[PropertyInfo], prefs: &ViewPreferences) -> String {
        let rows: String = properties
            .iter()
            .filter(|p| self.allow_property_to_display(&p.name, prefs))
            .filter(|p| !self.is_binary_property(&p.name))
            .map(|p| {
                let label = self.sanitize_property_name(&p.name, prefs);
                let name_col = tag::tag(
                    "td",
                    &Attrs::new().with("class", "prop-table-name-col"),
                    Some(&*html_escape::encode_text(label)),
                    true,
                );

                let val_class = if self.is_read_only_property(&p.name) {
                    "prop-table-val-col read-only"
                } else {
                    "prop-table-val-col"
                };
                let val_col = tag::tag(
                    "td",
                    &Attrs::new().with("class", val_class),
                    Some(self.render_value(p).as_str()),
                    true,
                );

                tag::tag(
                    "tr",
                    &Attrs::new().with("class", "prop-table-row"),
                    Some((name_col + &val_col).as_str()),
                    true,
                )
            })
            .collect();

        if rows.is_empty() {
            return String::new();
        }

        tag::tag(
            "table",
            &Attrs::new().with("class", "property-text"),
            Some(rows.as_str()),
            true,
        )
    }
}
