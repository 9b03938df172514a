//! Node Data Structures
//!
//! This module defines the `NodeInfo` and `PropertyInfo` types as they arrive
//! in a page-data response.
//!
//! # Architecture
//!
//! - **Universal Node**: Single struct represents every content kind (pages, comments, attachments)
//! - **Ordered Properties**: Properties keep the order the server sent them in
//! - **Session uid**: `uid` is assigned by the registry when a page loads and is never
//!   part of the wire format
//!
//! # Examples
//!
//! ```rust
//! use node_renderer::models::NodeInfo;
//!
//! let node = NodeInfo::new("n1", "/root/notes", "nt:unstructured")
//!     .with_property("jcr:content", "# Hello")
//!     .with_property("tags", "draft");
//!
//! assert_eq!(node.property_val("tags").as_deref(), Some("draft"));
//! assert!(!node.is_root());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::ROOT_PATH;

/// A single name/value pair attached to a node.
///
/// Multi-valued properties carry `values` instead of `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            values: None,
        }
    }

    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            values: Some(values),
        }
    }

    pub fn is_multi(&self) -> bool {
        self.values.is_some()
    }

    /// Value as shown to the user; multiple values are joined with `", "`.
    pub fn display_value(&self) -> String {
        match (&self.values, &self.value) {
            (Some(values), _) => values.join(", "),
            (None, Some(value)) => value.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Lenient deserializer for modification times
///
/// Accepts an RFC 3339 string or epoch milliseconds. Anything else maps to
/// `None` so one bad timestamp never rejects the whole page.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match &value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(serde_json::Value::Number(n)) => {
            n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis)
        }
        Some(_) => None,
    };

    if parsed.is_none() {
        tracing::debug!("Ignoring unparseable lastModified: {:?}", value);
    }
    Ok(parsed)
}

/// One content node of a page.
///
/// # Fields
///
/// - `id`: Repository identifier
/// - `path`: Repository path (`/` for the root)
/// - `name`: Last path segment (empty on the root)
/// - `primary_type_name`: Type tag used for kind dispatch
/// - `properties`: Ordered property list
/// - `has_children`, `has_binary`, `binary_is_image`, `children_ordered`: display flags
/// - `width`/`height`: Image dimensions, when the binary is an image
/// - `bin_ver`: Attachment version, part of the download URL
/// - `created_by`, `last_modified`: Creation/modification metadata
/// - `uid`: Session-scoped DOM key, assigned by [`crate::services::NodeRegistry`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub id: String,

    pub path: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub primary_type_name: String,

    #[serde(default)]
    pub properties: Vec<PropertyInfo>,

    #[serde(default)]
    pub has_children: bool,

    #[serde(default)]
    pub has_binary: bool,

    #[serde(default)]
    pub binary_is_image: bool,

    #[serde(default)]
    pub bin_ver: i64,

    #[serde(default)]
    pub children_ordered: bool,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub last_modified: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub uid: String,
}

impl NodeInfo {
    /// Create a node with no properties and all flags off.
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        primary_type_name: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let name = path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            id: id.into(),
            path,
            name,
            primary_type_name: primary_type_name.into(),
            properties: Vec::new(),
            has_children: false,
            has_binary: false,
            binary_is_image: false,
            bin_ver: 0,
            children_ordered: false,
            width: None,
            height: None,
            created_by: None,
            last_modified: None,
            uid: String::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(PropertyInfo::new(name, value));
        self
    }

    pub fn with_children(mut self, has_children: bool) -> Self {
        self.has_children = has_children;
        self
    }

    pub fn with_ordered_children(mut self, ordered: bool) -> Self {
        self.children_ordered = ordered;
        self
    }

    /// Mark the node as carrying an image attachment of the given size.
    pub fn with_image(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.has_binary = true;
        self.binary_is_image = true;
        self.width = width;
        self.height = height;
        self
    }

    /// Mark the node as carrying a non-image attachment.
    pub fn with_attachment(mut self) -> Self {
        self.has_binary = true;
        self.binary_is_image = false;
        self
    }

    pub fn with_created_by(mut self, user: impl Into<String>) -> Self {
        self.created_by = Some(user.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Display value of a property, `None` when missing or empty.
    pub fn property_val(&self, name: &str) -> Option<String> {
        self.property(name)
            .map(PropertyInfo::display_value)
            .filter(|v| !v.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.path.trim() == ROOT_PATH
    }

    /// Repository-managed nodes (`rep:` names or anything under a `rep:` segment).
    pub fn is_rep_node(&self) -> bool {
        self.name.starts_with("rep:") || self.path.contains("/rep:")
    }

    pub fn row_id(&self) -> String {
        format!("row_{}", self.uid)
    }

    pub fn content_id(&self) -> String {
        format!("{}_content", self.uid)
    }

    pub fn img_id(&self) -> String {
        format!("imgUid_{}", self.uid)
    }
}
