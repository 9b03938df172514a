/// Configuration for the node renderer
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::DEFAULT_VIEWPORT_WIDTH;
use crate::services::{RenderError, Result};

/// Where `jcr:content` markdown is turned into HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownMode {
    /// Emit the raw markdown inside a `<marked-element>` for the browser to render
    #[default]
    Client,
    /// Render markdown to HTML while building the page
    Server,
}

/// Renderer configuration
///
/// All fields fall back to their defaults when absent, so a partial JSON file
/// is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Show the formatted node path in row headers
    pub show_path_on_rows: bool,

    /// Offer the "Add" (create subnode) button on rows
    pub new_on_toolbar: bool,

    /// Offer the "Ins" (insert sibling) button on rows
    pub ins_on_toolbar: bool,

    /// Offer "Up"/"Dn" buttons on rows of ordered parents
    pub move_updown_on_toolbar: bool,

    /// Base URL of the REST endpoint serving attachments (ends with `/`)
    pub post_target_url: String,

    /// Page origin substituted for `{{locationOrigin}}` and used in node URLs
    pub location_origin: String,

    pub markdown_mode: MarkdownMode,

    /// Code block languages given a `<?prettify lang=..?>` hint
    pub pretty_print_languages: Vec<String>,

    /// Initial viewport width in pixels, used to fit images
    pub viewport_width: u32,

    /// Properties hidden from the property table in simple mode
    pub simple_mode_property_blacklist: Vec<String>,

    /// Node types not rendered as rows in simple mode
    pub simple_mode_type_blacklist: Vec<String>,

    pub read_only_properties: Vec<String>,

    /// Properties holding binary data, never shown as text
    pub binary_properties: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_path_on_rows: false,
            new_on_toolbar: true,
            ins_on_toolbar: true,
            move_updown_on_toolbar: true,
            post_target_url: "/mobile/api/".to_string(),
            location_origin: "http://localhost:8080".to_string(),
            markdown_mode: MarkdownMode::Client,
            pretty_print_languages: ["js", "html", "htm", "css"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            simple_mode_property_blacklist: [
                "jcr:primaryType",
                "jcr:mixinTypes",
                "jcr:uuid",
                "jcr:created",
                "jcr:createdBy",
                "jcr:lastModified",
                "jcr:lastModifiedBy",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            simple_mode_type_blacklist: vec!["rep:ACL".to_string()],
            read_only_properties: [
                "jcr:primaryType",
                "jcr:uuid",
                "jcr:mixinTypes",
                "jcr:created",
                "jcr:createdBy",
                "jcr:lastModified",
                "jcr:lastModifiedBy",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            binary_properties: vec!["jcr:data".to_string()],
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(json)
            .map_err(|e| RenderError::config(format!("Failed to parse config: {}", e)))?;
        config.validate().map_err(RenderError::config)?;
        Ok(config)
    }

    /// Load a configuration file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No renderer config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.viewport_width == 0 {
            return Err("viewport_width must be greater than 0".to_string());
        }

        if !self.post_target_url.is_empty() && !self.post_target_url.ends_with('/') {
            return Err(format!(
                "post_target_url must end with '/': {}",
                self.post_target_url
            ));
        }

        if let Some(lang) = self
            .pretty_print_languages
            .iter()
            .find(|l| l.is_empty() || !l.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            return Err(format!("invalid pretty-print language: '{}'", lang));
        }

        Ok(())
    }
}
