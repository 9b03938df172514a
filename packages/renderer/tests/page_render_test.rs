//! Page rendering integration tests
//!
//! Drive whole-page renders through the public API into a `MemoryDom` and
//! check what lands in each region, the bindings left on the session and the
//! post-render DOM passes.

use node_renderer::dom::ScrollPosition;
use node_renderer::render::EMPTY_PAGE_PROMPT;
use node_renderer::{
    ActionKind, DomUtility, MemoryDom, NodeInfo, NodeRenderer, RenderConfig, RenderError,
    RenderNodeResponse, SessionState, UserContext, ViewPreferences,
};

fn dom() -> MemoryDom {
    MemoryDom::with_regions(&["mainNodeContent", "listView", "statusBar"])
}

fn session(user: UserContext, prefs: ViewPreferences) -> SessionState {
    SessionState::new(user, prefs, 1024)
}

fn edit_prefs() -> ViewPreferences {
    ViewPreferences {
        edit_mode: true,
        ..Default::default()
    }
}

fn root() -> NodeInfo {
    NodeInfo::new("root", "/root/home", "nt:unstructured")
        .with_created_by("bob")
        .with_ordered_children(true)
        .with_property("jcr:content", "Home page")
}

fn child(id: &str) -> NodeInfo {
    NodeInfo::new(id, format!("/root/home/{}", id), "nt:unstructured")
        .with_created_by("bob")
        .with_property("jcr:content", format!("Body of {}", id))
}

fn page(children: Vec<NodeInfo>, end_reached: bool) -> RenderNodeResponse {
    RenderNodeResponse::new(root(), children, end_reached)
}

// ============================================================================
// Regions
// ============================================================================

#[test]
fn test_no_page_shows_message() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let rendered = renderer.render_page_from_data(None, false, &mut session, &mut dom);

    assert_eq!(dom.inner_html("mainNodeContent"), Some("No content is available here."));
    assert!(!dom.is_visible("listView"));
    assert_eq!(rendered.rows, 0);
    assert!(session.events().is_empty());
}

#[test]
fn test_page_without_root_shows_message() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let data = RenderNodeResponse {
        node: None,
        children: vec![child("a")],
        end_reached: true,
    };
    renderer.render_page_from_data(Some(data), false, &mut session, &mut dom);

    assert_eq!(dom.inner_html("mainNodeContent"), Some("No content is available here."));
    assert!(!dom.is_visible("listView"));
}

#[test]
fn test_main_content_and_rows() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), edit_prefs());
    let mut dom = dom();

    let rendered = renderer.render_page_from_data(
        Some(page(vec![child("a"), child("b")], true)),
        false,
        &mut session,
        &mut dom,
    );

    let main = dom.inner_html("mainNodeContent").unwrap();
    assert!(main.starts_with("<div class='mainNodeContentStyle inactive-row' id='row_1'>"));
    assert!(main.contains("id='addNodeButtonId1'"));
    assert!(main.contains("id='edit_1'"));
    assert!(main.contains("<div class='jcr-root-content'>"));
    assert!(dom.is_visible("mainNodeContent"));

    assert_eq!(rendered.rows, 2);
    let list = dom.inner_html("listView").unwrap();
    assert!(list.contains("id='row_2'"));
    assert!(list.contains("id='row_3'"));
    assert!(list.contains("Body of b"));
    assert_eq!(rendered.list_view, list);
}

#[test]
fn test_empty_root_hides_main_region() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let bare = NodeInfo::new("root", "/root/home", "nt:unstructured");
    let rendered = renderer.render_page_from_data(
        Some(RenderNodeResponse::new(bare, vec![child("a")], true)),
        false,
        &mut session,
        &mut dom,
    );

    assert!(rendered.main_content.is_none());
    assert!(!dom.is_visible("mainNodeContent"));
    assert_eq!(rendered.rows, 1);
}

// ============================================================================
// Pager and empty page
// ============================================================================

#[test]
fn test_single_page_has_no_pager() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let rendered =
        renderer.render_page_from_data(Some(page(vec![child("a")], true)), false, &mut session, &mut dom);

    assert!(!rendered.list_view.contains("paging-button-bar"));
    assert!(session.events().get("nextPageButton").is_none());
}

#[test]
fn test_pager_placement() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    session.nav.main_offset = 25;
    let mut dom = dom();

    let rendered =
        renderer.render_page_from_data(Some(page(vec![child("a")], false)), false, &mut session, &mut dom);
    let list = rendered.list_view;

    let first = list.find("id='firstPageButton'").unwrap();
    let prev = list.find("id='prevPageButton'").unwrap();
    let row = list.find("id='row_2'").unwrap();
    let next = list.find("id='nextPageButton'").unwrap();
    let last = list.find("id='lastPageButton'").unwrap();
    assert!(first < prev && prev < row && row < next && next < last);
    assert_eq!(list.matches("paging-button-bar").count(), 2);

    assert!(!session.nav.end_reached);
    assert_eq!(
        session.events().get("lastPageButton").map(|a| a.kind),
        Some(ActionKind::LastPage)
    );
}

#[test]
fn test_empty_page_prompt_for_signed_in_owner() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let rendered = renderer.render_page_from_data(Some(page(vec![], true)), false, &mut session, &mut dom);
    assert_eq!(rendered.list_view, EMPTY_PAGE_PROMPT);
}

#[test]
fn test_no_prompt_for_anonymous_or_foreign_nodes() {
    let renderer = NodeRenderer::default();
    let mut dom = dom();

    let mut anon = session(UserContext::anonymous(), ViewPreferences::default());
    let rendered = renderer.render_page_from_data(Some(page(vec![], true)), false, &mut anon, &mut dom);
    assert_eq!(rendered.list_view, "");

    let mut other = session(UserContext::named("ann"), ViewPreferences::default());
    let rendered = renderer.render_page_from_data(Some(page(vec![], true)), false, &mut other, &mut dom);
    assert_eq!(rendered.list_view, "");
}

#[test]
fn test_prompt_keeps_trailing_pager() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let rendered = renderer.render_page_from_data(Some(page(vec![], false)), false, &mut session, &mut dom);
    assert!(rendered.list_view.starts_with(EMPTY_PAGE_PROMPT));
    assert!(rendered.list_view.contains("id='nextPageButton'"));
}

// ============================================================================
// Row filtering
// ============================================================================

#[test]
fn test_nodes_pending_move_are_skipped() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), edit_prefs());
    session.nodes_to_move.insert("a".to_string());
    let mut dom = dom();

    let rendered = renderer.render_page_from_data(
        Some(page(vec![child("a"), child("b")], true)),
        false,
        &mut session,
        &mut dom,
    );

    assert_eq!(rendered.rows, 1);
    assert!(!rendered.list_view.contains("Body of a"));
    // b is the first emitted row, so it cannot move up
    assert!(!rendered.list_view.contains("id='up_3'"));
}

#[test]
fn test_blacklisted_types_skipped_in_simple_mode() {
    let renderer = NodeRenderer::default();
    let acl = NodeInfo::new("acl", "/root/home/rep:policy", "rep:ACL");
    let data = page(vec![acl, child("b")], true);
    let mut dom = dom();

    let mut simple = session(
        UserContext::admin("admin"),
        ViewPreferences {
            simple_mode: true,
            ..Default::default()
        },
    );
    let rendered = renderer.render_page_from_data(Some(data.clone()), false, &mut simple, &mut dom);
    assert_eq!(rendered.rows, 1);

    let mut advanced = session(UserContext::admin("admin"), ViewPreferences::default());
    let rendered = renderer.render_page_from_data(Some(data), false, &mut advanced, &mut dom);
    assert_eq!(rendered.rows, 2);
}

// ============================================================================
// Post-render passes
// ============================================================================

#[test]
fn test_links_open_in_new_context() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let file = NodeInfo::new("f", "/root/home/f", "nt:file").with_attachment();
    renderer.render_page_from_data(Some(page(vec![file], true)), false, &mut session, &mut dom);

    let list = dom.inner_html("listView").unwrap();
    assert!(list.contains("<a href='/mobile/api/bin/file-name?nodeId=%2Froot%2Fhome%2Ff&ver=0' target='_blank'>"));
}

#[test]
fn test_rendered_list_view_is_html_before_dom_passes() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let file = NodeInfo::new("f", "/root/home/f", "nt:file").with_attachment();
    let rendered =
        renderer.render_page_from_data(Some(page(vec![file], true)), false, &mut session, &mut dom);

    assert!(rendered.list_view.contains("<a href='/mobile/api/bin/file-name?nodeId=%2Froot%2Fhome%2Ff&ver=0'>"));
    assert!(!rendered.list_view.contains("target="));
    assert_eq!(
        dom.inner_html("listView").unwrap(),
        rendered.list_view.replace("&ver=0'>", "&ver=0' target='_blank'>")
    );
}

#[test]
fn test_pretty_print_only_with_code() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    renderer.render_page_from_data(Some(page(vec![child("a")], true)), false, &mut session, &mut dom);
    assert_eq!(dom.pretty_print_runs(), 0);

    let code = NodeInfo::new("c", "/root/home/c", "nt:unstructured")
        .with_property("jcr:content", "```js\nx();\n```");
    let rendered =
        renderer.render_page_from_data(Some(page(vec![code], true)), false, &mut session, &mut dom);
    assert!(rendered.code_format_dirty);
    assert_eq!(dom.pretty_print_runs(), 1);
}

#[test]
fn test_image_size_adjustment() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let wide = NodeInfo::new("w", "/root/home/w", "t").with_image(Some(2000), Some(1000));
    let small = NodeInfo::new("s", "/root/home/s", "t").with_image(Some(200), Some(100));
    renderer.render_page_from_data(Some(page(vec![wide, small], true)), false, &mut session, &mut dom);

    assert_eq!(dom.attribute("imgUid_2", "width"), Some("100%"));
    assert_eq!(dom.attribute("imgUid_2", "height"), Some("auto"));
    assert_eq!(dom.attribute("imgUid_3", "width"), Some("200"));
    assert_eq!(dom.attribute("imgUid_3", "height"), Some("100"));

    session.viewport_width = 250;
    renderer.screen_size_change(&session, &mut dom);
    assert_eq!(dom.attribute("imgUid_3", "width"), Some("100%"));
}

#[test]
fn test_scroll_target() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    renderer.render_page_from_data(
        Some(page(vec![child("a"), child("b")], true)),
        false,
        &mut session,
        &mut dom,
    );
    assert_eq!(dom.scroll_position(), Some(&ScrollPosition::Top));

    session.dispatch("row_3").unwrap();
    renderer.render_page_from_data(None, false, &mut session, &mut dom);
    assert_eq!(
        dom.scroll_position(),
        Some(&ScrollPosition::Element("row_3".to_string()))
    );
    assert!(dom.inner_html("listView").unwrap().contains("node-table-row active-row' id='row_3'"));

    renderer.render_page_from_data(None, true, &mut session, &mut dom);
    assert_eq!(dom.scroll_position(), Some(&ScrollPosition::Top));
}

#[test]
fn test_status_bar() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), edit_prefs());
    let mut dom = dom();

    renderer.render_page_from_data(Some(page(vec![child("a")], true)), false, &mut session, &mut dom);
    assert_eq!(dom.inner_html("statusBar"), Some("count: 1 Selections: 0"));

    session.dispatch("2_sel").unwrap();
    renderer.update_status_bar(&session, &mut dom);
    assert_eq!(dom.inner_html("statusBar"), Some("count: 1 Selections: 1"));
}

// ============================================================================
// Re-rendering and refresh
// ============================================================================

#[test]
fn test_rerender_is_byte_identical() {
    let renderer = NodeRenderer::default();
    let data = page(vec![child("a"), child("b")], false);

    let mut first_session = session(UserContext::named("bob"), edit_prefs());
    let mut first_dom = dom();
    let first = renderer.render_page_from_data(Some(data.clone()), false, &mut first_session, &mut first_dom);

    let mut second_session = session(UserContext::named("bob"), edit_prefs());
    let mut second_dom = dom();
    let second = renderer.render_page_from_data(Some(data), false, &mut second_session, &mut second_dom);

    assert_eq!(first, second);
    assert_eq!(first_session.events(), second_session.events());

    let again = renderer.render_page_from_data(None, false, &mut first_session, &mut first_dom);
    assert_eq!(again, first);
}

#[test]
fn test_page_from_json() {
    let json = r#"{
        "node": {"id": "r", "path": "/", "primaryTypeName": "rep:root"},
        "children": [
            {"id": "a", "path": "/a", "primaryTypeName": "nt:unstructured",
             "properties": [{"name": "color", "value": "red"}]}
        ],
        "endReached": true
    }"#;
    let data = RenderNodeResponse::from_json(json).unwrap();

    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::admin("admin"), ViewPreferences::default());
    let mut dom = dom();
    let rendered = renderer.render_page_from_data(Some(data), false, &mut session, &mut dom);

    assert!(rendered.main_content.unwrap().ends_with("Root Node</div>"));
    assert!(rendered.list_view.contains("<td class='prop-table-val-col'>red</td>"));
}

#[test]
fn test_refresh_node_on_page() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();
    renderer.render_page_from_data(Some(page(vec![child("a")], true)), false, &mut session, &mut dom);

    let edited = NodeInfo::new("a", "/root/home/a", "nt:unstructured")
        .with_property("jcr:content", "Edited body");
    let html = renderer
        .refresh_node_on_page(edited, &mut session, &mut dom)
        .unwrap();

    assert!(html.contains("Edited body"));
    assert_eq!(dom.inner_html("2_content"), Some(html.as_str()));
    assert_eq!(
        session
            .registry
            .node_by_uid("2")
            .and_then(|n| n.property_val("jcr:content")),
        Some("Edited body".to_string())
    );
}

#[test]
fn test_refresh_unknown_node_fails() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();
    renderer.render_page_from_data(Some(page(vec![child("a")], true)), false, &mut session, &mut dom);

    let stranger = NodeInfo::new("zz", "/root/elsewhere", "t");
    let err = renderer
        .refresh_node_on_page(stranger, &mut session, &mut dom)
        .unwrap_err();
    assert!(matches!(err, RenderError::UnknownNode { ref id } if id == "zz"));
    assert_eq!(err.to_string(), "Unable to find nodeId zz in uid map");
    assert!(!dom.element_exists("zz_content"));
}

// ============================================================================
// Event dispatch and URL message
// ============================================================================

#[test]
fn test_dispatch_through_session() {
    let renderer = NodeRenderer::default();
    let mut session = session(UserContext::named("bob"), edit_prefs());
    let mut dom = dom();
    renderer.render_page_from_data(
        Some(page(vec![child("a"), child("b")], false)),
        false,
        &mut session,
        &mut dom,
    );

    session.dispatch("edit_2").unwrap();
    session.dispatch("nextPageButton").unwrap();

    let outbox = session.take_outbox();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].kind, ActionKind::EditNode);
    assert_eq!(outbox[0].target.as_deref(), Some("2"));

    let request = session.take_page_request().unwrap();
    assert_eq!(request.offset, 25);
    assert!(session.dispatch("row_99").is_err());
}

#[test]
fn test_node_url_message() {
    let config = RenderConfig {
        location_origin: "https://notes.example".to_string(),
        ..Default::default()
    };
    let renderer = NodeRenderer::new(config);
    let mut session = session(UserContext::named("bob"), ViewPreferences::default());
    let mut dom = dom();

    let with_uuid = child("a").with_property("jcr:uuid", "1234-abcd");
    renderer.render_page_from_data(Some(page(vec![with_uuid], true)), false, &mut session, &mut dom);

    assert_eq!(renderer.node_url_message(&session), "You must first click on a node.");

    session.dispatch("row_2").unwrap();
    assert_eq!(
        renderer.node_url_message(&session),
        "URL using path: <br>https://notes.example?id=/home/a\
         <p>URL for UUID: <br>https://notes.example?id=1234-abcd"
    );
}
