//! Node content: body, row header, images and attachment links.

use chrono::SecondsFormat;

use crate::config::MarkdownMode;
use crate::constants::{COMMENT_BY, CONTENT, IMG_TOP_RIGHT, INSERT_ATTACHMENT, TAGS};
use crate::models::NodeInfo;
use crate::render::tag::{self, Attrs};
use crate::render::{ContentFlags, NodeRenderer, RenderPass};
use crate::services::permissions::created_by;
use crate::services::SessionState;
use crate::utils;

/// Paths at least this long are shortened in row headers
const MAX_PATH_DISPLAY: usize = 50;
const SHORT_PATH_LEN: usize = 40;

/// Images wider than the viewport minus this margin are scaled down
const IMAGE_MARGIN: u32 = 50;

/// Header form of a node path: ` / `-separated, shortened, typed.
///
/// Non-admins never see the `/root` prefix.
pub fn format_path(node: &NodeInfo, is_admin: bool) -> String {
    let path = if is_admin {
        node.path.as_str()
    } else {
        strip_root_prefix(&node.path)
    };

    let spaced = path.replace('/', " / ");
    let mut ret = if spaced.chars().count() < MAX_PATH_DISPLAY {
        spaced
    } else {
        let mut short: String = spaced.chars().take(SHORT_PATH_LEN).collect();
        short.push_str("...");
        short
    };

    ret.push_str(" [");
    ret.push_str(&node.primary_type_name);
    ret.push(']');
    ret
}

/// Path as users see it: the `/root` workspace prefix removed.
pub fn strip_root_prefix(path: &str) -> &str {
    match path.strip_prefix("/root") {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Download URL of a node's attachment.
pub fn attachment_url(post_target_url: &str, node: &NodeInfo) -> String {
    format!(
        "{}bin/file-name?nodeId={}&ver={}",
        post_target_url,
        urlencoding::encode(&node.path),
        node.bin_ver
    )
}

impl NodeRenderer {
    /// Body HTML of one node.
    ///
    /// Corner image and header come first, then the first matching body
    /// (property table, kind renderer, markdown, root marker, property table),
    /// then the attachment and the tag line.
    pub fn render_node_content(
        &self,
        node: &NodeInfo,
        flags: ContentFlags,
        session: &SessionState,
        pass: &mut RenderPass,
    ) -> String {
        let mut ret = self.top_right_image_tag(node);

        if session.prefs.show_meta_data && flags.show_header {
            ret.push_str(&self.build_row_header(node, flags.show_path, flags.show_name, session));
        }

        ret.push_str(&self.render_body(node, flags.row_styling, session, pass));

        if flags.render_bin && node.has_binary {
            let binary = self.render_binary(node, session);
            if ret.contains(INSERT_ATTACHMENT) {
                ret = ret.replace(INSERT_ATTACHMENT, &binary);
            } else {
                ret.push_str(&binary);
            }
        }

        if let Some(tags) = self.formatter.property_val(TAGS, node) {
            ret.push_str(&tag::div(
                &Attrs::new().with("class", "tags-content"),
                &format!("Tags: {}", html_escape::encode_text(&tags)),
            ));
        }

        ret
    }

    fn render_body(
        &self,
        node: &NodeInfo,
        row_styling: bool,
        session: &SessionState,
        pass: &mut RenderPass,
    ) -> String {
        if session.prefs.show_properties {
            return self.formatter.render_properties(&node.properties, &session.prefs);
        }

        if let Some(kind) = self.kinds.get(&node.primary_type_name) {
            return kind.render(node, row_styling, pass);
        }

        if let Some(content) = self.formatter.property(CONTENT, node) {
            let markdown = self.formatter.render_property(content);
            let class = if row_styling {
                "jcr-content"
            } else {
                "jcr-root-content"
            };
            return tag::div(
                &Attrs::new().with("class", class),
                &self.markdown_container(&markdown, pass),
            );
        }

        if node.is_root() {
            return "Root Node".to_string();
        }

        self.formatter.render_properties(&node.properties, &session.prefs)
    }

    fn markdown_container(&self, markdown: &str, pass: &mut RenderPass) -> String {
        match self.config.markdown_mode {
            MarkdownMode::Client => {
                if utils::has_fenced_code(markdown) {
                    pass.code_format_dirty = true;
                }

                let mut ret = String::from("<marked-element sanitize='true'>");
                ret.push_str(&tag::div(&Attrs::new().with("class", "markdown-html"), ""));
                ret.push_str("<script type='text/markdown'>\n");
                ret.push_str(markdown);
                ret.push_str("</script></marked-element>");
                ret
            }
            MarkdownMode::Server => {
                let (html, has_code) = utils::render_markdown(
                    markdown,
                    &self.config.location_origin,
                    &self.config.pretty_print_languages,
                );
                pass.code_format_dirty |= has_code;
                tag::div(&Attrs::new().with("class", "markdown-html"), &html)
            }
        }
    }

    /// Inline image for image attachments, otherwise a download link.
    pub fn render_binary(&self, node: &NodeInfo, session: &SessionState) -> String {
        if node.binary_is_image {
            return self.make_image_tag(node, session.viewport_width);
        }

        let anchor = tag::a(
            &Attrs::new().with("href", attachment_url(&self.config.post_target_url, node)),
            "[Download Attachment]",
        );
        tag::div(&Attrs::new().with("class", "binary-link"), &anchor)
    }

    /// `<img>` for a node's attachment, scaled down to fit `viewport_width`.
    ///
    /// A zero viewport means the width is unknown; the image is left unsized.
    pub fn make_image_tag(&self, node: &NodeInfo, viewport_width: u32) -> String {
        let attrs = Attrs::new()
            .with("src", attachment_url(&self.config.post_target_url, node))
            .with("id", node.img_id());

        let attrs = match (node.width, node.height) {
            (Some(width), Some(height)) if width > 0 && height > 0 && viewport_width > 0 => {
                let max_width = viewport_width.saturating_sub(IMAGE_MARGIN);
                if width > max_width {
                    let scaled_height = f64::from(max_width) * f64::from(height) / f64::from(width);
                    attrs
                        .with("width", format!("{}px", max_width))
                        .with("height", format!("{}px", scaled_height))
                } else {
                    attrs
                        .with("width", format!("{}px", width))
                        .with("height", format!("{}px", height))
                }
            }
            _ => attrs,
        };

        tag::img(&attrs)
    }

    pub fn top_right_image_tag(&self, node: &NodeInfo) -> String {
        match self.formatter.property_val(IMG_TOP_RIGHT, node) {
            Some(src) => tag::img(
                &Attrs::new()
                    .with("src", src)
                    .with("class", "top-right-image"),
            ),
            None => String::new(),
        }
    }

    /// Author, owner and modification line shown above node content.
    pub fn build_row_header(
        &self,
        node: &NodeInfo,
        show_path: bool,
        show_name: bool,
        session: &SessionState,
    ) -> String {
        let mut header = String::new();

        if self.config.show_path_on_rows && show_path {
            header.push_str(&tag::div(
                &Attrs::new().with("class", "path-display"),
                &format!(
                    "Path: {}",
                    html_escape::encode_text(&format_path(node, session.user.is_admin))
                ),
            ));
        }

        let author = match self.formatter.property_val(COMMENT_BY, node) {
            Some(by) => Some(("Comment By", by)),
            None => created_by(node).map(|by| ("Created By", by)),
        };

        let mut spans = String::new();
        if let Some((label, by)) = author {
            let class = if by == session.user.user_name {
                "created-by-me"
            } else {
                "created-by-other"
            };
            spans.push_str(&tag::span(
                &Attrs::new().with("class", class),
                &format!("{}: {}", label, html_escape::encode_text(&by)),
            ));
        }

        spans.push_str(&tag::span(
            &Attrs::new().with("id", format!("ownerDisplay{}", node.uid)),
            "",
        ));

        if let Some(modified) = node.last_modified {
            spans.push_str("  Mod: ");
            spans.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
        }

        header.push_str(&tag::div(&Attrs::new(), &spans));

        // The path already ends with the name
        if show_name && !show_path && !node.name.is_empty() {
            header.push_str(&format!(
                "Name: {} [uid={}]",
                html_escape::encode_text(&node.name),
                node.uid
            ));
        }

        tag::div(&Attrs::new().with("class", "header-text"), &header)
    }
}
