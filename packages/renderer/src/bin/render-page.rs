//! Page Render Binary
//!
//! Renders a page-data JSON file into an in-memory DOM and prints the
//! `mainNodeContent` and `listView` regions.
//!
//! # Usage
//!
//! ```bash
//! render-page page.json
//! render-page page.json --config renderer.json --user alice --edit-mode
//! RUST_LOG=debug render-page page.json --admin
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::path::PathBuf;

use clap::Parser;
use node_renderer::constants::{LIST_VIEW_ID, MAIN_NODE_CONTENT_ID, STATUS_BAR_ID};
use node_renderer::{
    MemoryDom, NodeRenderer, RenderConfig, RenderNodeResponse, SessionState, UserContext,
    ViewPreferences,
};

/// Render a page-data JSON file into HTML regions
#[derive(Parser, Debug)]
#[command(name = "render-page")]
#[command(about = "Render a page-data JSON file into HTML regions")]
#[command(version)]
struct Args {
    /// Page-data response to render
    page: PathBuf,

    /// Renderer configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render as this signed-in user (anonymous when omitted)
    #[arg(short, long)]
    user: Option<String>,

    /// Give the viewer admin rights
    #[arg(long)]
    admin: bool,

    /// Show the editing controls
    #[arg(long)]
    edit_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    tracing::debug!("Config: {:?}", config);

    let json = std::fs::read_to_string(&args.page)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.page.display(), e))?;
    let data = RenderNodeResponse::from_json(&json)?;

    let user = match (args.user, args.admin) {
        (Some(name), true) => UserContext::admin(name),
        (Some(name), false) => UserContext::named(name),
        (None, true) => UserContext::admin("admin"),
        (None, false) => UserContext::anonymous(),
    };
    tracing::info!("Rendering {} as {}", args.page.display(), user.user_name);

    let prefs = ViewPreferences {
        edit_mode: args.edit_mode,
        ..Default::default()
    };
    let mut session = SessionState::new(user, prefs, config.viewport_width);
    let mut dom = MemoryDom::with_regions(&[MAIN_NODE_CONTENT_ID, LIST_VIEW_ID, STATUS_BAR_ID]);

    let renderer = NodeRenderer::new(config);
    let rendered = renderer.render_page_from_data(Some(data), true, &mut session, &mut dom);

    tracing::info!(
        "Rendered {} rows, {} bound elements",
        rendered.rows,
        session.events().len()
    );

    for id in [MAIN_NODE_CONTENT_ID, STATUS_BAR_ID, LIST_VIEW_ID] {
        let visible = if dom.is_visible(id) { "" } else { " (hidden)" };
        println!("<!-- {}{} -->", id, visible);
        println!("{}", dom.inner_html(id).unwrap_or_default());
    }

    Ok(())
}
