//! Markdown helpers for node content
//!
//! Server mode renders `jcr:content` to HTML here; client mode only needs
//! [`has_fenced_code`] to decide whether the page must be pretty-printed.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag};
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::LOCATION_ORIGIN;

/// Opening of a rendered code block, with its optional language class
static CODE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<pre><code(?: class="(?:language-)?([^"]*)")?>"#).unwrap()
});

const CODE_CLOSE: &str = "</code></pre>";

static SCRIPT_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*javascript:").unwrap());

/// Render markdown to HTML the way the content pane expects it.
///
/// Raw HTML in the source is escaped as text and script URLs are removed
/// from links and images. `{{locationOrigin}}` is substituted and code
/// blocks are rewritten for the prettifier. Returns the HTML and whether a
/// code block was found.
pub fn render_markdown(md: &str, location_origin: &str, langs: &[String]) -> (String, bool) {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(md, opts).map(sanitize_event);

    let mut html = String::with_capacity(md.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, parser);

    let html = inject_substitutions(&html, location_origin);
    inject_code_formatting(&html, langs)
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: strip_script_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: strip_script_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn strip_script_url(dest_url: CowStr<'_>) -> CowStr<'_> {
    if SCRIPT_URL_RE.is_match(&dest_url) {
        CowStr::Borrowed("")
    } else {
        dest_url
    }
}

pub fn inject_substitutions(content: &str, location_origin: &str) -> String {
    content.replace(LOCATION_ORIGIN, location_origin)
}

/// Rewrite `<pre><code>` blocks to `<pre class='prettyprint'>`, adding a
/// `<?prettify lang=..?>` hint for the configured languages.
pub fn inject_code_formatting(content: &str, langs: &[String]) -> (String, bool) {
    if !CODE_OPEN_RE.is_match(content) {
        return (content.to_string(), false);
    }

    let encoded = encode_languages(content, langs);
    (encoded.replace(CODE_CLOSE, "</pre>"), true)
}

pub fn encode_languages(content: &str, langs: &[String]) -> String {
    CODE_OPEN_RE
        .replace_all(content, |caps: &regex::Captures| {
            match caps.get(1).map(|m| m.as_str()) {
                Some(lang) if langs.iter().any(|l| l == lang) => {
                    format!("<?prettify lang={}?><pre class='prettyprint'>", lang)
                }
                _ => "<pre class='prettyprint'>".to_string(),
            }
        })
        .into_owned()
}

/// Whether raw markdown contains a fenced code block.
pub fn has_fenced_code(md: &str) -> bool {
    md.contains("```") || md.contains("~~~")
}
